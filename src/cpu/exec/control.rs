use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_jr_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> usize {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let cc = (opcode >> 3) & 0x03;
        let cond = self.cc_condition(cc);
        self.jr(bus, cond)
    }

    pub(in crate::cpu) fn exec_jp_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> usize {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let cc = (opcode >> 3) & 0x03;
        let cond = self.cc_condition(cc);
        self.jp_cond(bus, cond)
    }

    pub(in crate::cpu) fn exec_jp_a16<B: Bus>(&mut self, bus: &mut B) -> usize {
        self.jp_cond(bus, true)
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self) -> usize {
        // Jumps straight from the register; no internal delay cycle.
        self.regs.pc = self.regs.hl();
        0
    }

    pub(in crate::cpu) fn exec_call_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> usize {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let cc = (opcode >> 3) & 0x03;
        let cond = self.cc_condition(cc);
        self.call_cond(bus, cond)
    }

    pub(in crate::cpu) fn exec_ret_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> usize {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let cc = (opcode >> 3) & 0x03;
        let cond = self.cc_condition(cc);
        self.ret_cond(bus, cond)
    }
}
