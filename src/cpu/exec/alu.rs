use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    pub(in crate::cpu) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> usize {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let operation = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);

        match operation {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            7 => self.alu_cp(value),
            _ => unreachable!(),
        }

        0
    }

    pub(in crate::cpu) fn exec_alu_imm(&mut self, opcode: u8) -> usize {
        let value = self.fetched as u8;

        match opcode {
            0xC6 => self.alu_add(value, false),
            0xCE => self.alu_add(value, true),
            0xD6 => self.alu_sub(value, false),
            0xDE => self.alu_sub(value, true),
            0xE6 => self.alu_and(value),
            0xEE => self.alu_xor(value),
            0xF6 => self.alu_or(value),
            0xFE => self.alu_cp(value),
            _ => unreachable!(),
        }

        0
    }

    pub(in crate::cpu) fn exec_rotate_a(&mut self, opcode: u8) -> usize {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let a = self.regs.a;
        let carry_in = self.get_flag(Flag::C);

        let (result, carry_out) = match opcode {
            // RLCA: bit 7 to carry and bit 0.
            0x07 => (a.rotate_left(1), a & 0x80 != 0),
            // RRCA: bit 0 to carry and bit 7.
            0x0F => (a.rotate_right(1), a & 0x01 != 0),
            // RLA: rotate left through carry.
            0x17 => ((a << 1) | carry_in as u8, a & 0x80 != 0),
            // RRA: rotate right through carry.
            0x1F => ((a >> 1) | ((carry_in as u8) << 7), a & 0x01 != 0),
            _ => unreachable!(),
        };

        self.regs.a = result;
        self.clear_flags();
        self.set_flag(Flag::C, carry_out);

        0
    }

    pub(in crate::cpu) fn exec_add_hl_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> usize {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = match opcode {
            0x09 => self.regs.bc(),
            0x19 => self.regs.de(),
            0x29 => self.regs.hl(),
            0x39 => self.regs.sp,
            _ => unreachable!(),
        };
        self.alu_add16_hl(value);
        self.idle_cycle(bus);

        0
    }

    pub(in crate::cpu) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) -> usize {
        let imm = self.rel as u8;
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.sp = result;
        self.idle_cycle(bus);
        self.idle_cycle(bus);
        0
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) -> usize {
        let imm = self.rel as u8;
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        self.idle_cycle(bus);
        0
    }

    pub(in crate::cpu) fn exec_daa(&mut self) -> usize {
        self.alu_daa();
        0
    }

    pub(in crate::cpu) fn exec_cpl(&mut self) -> usize {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        0
    }

    pub(in crate::cpu) fn exec_scf(&mut self) -> usize {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        0
    }

    pub(in crate::cpu) fn exec_ccf(&mut self) -> usize {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
        0
    }
}
