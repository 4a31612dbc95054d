use super::opcodes::{self, AddrMode, INSTRUCTIONS};
use super::{Bus, Cpu, CpuError};

impl Cpu {
    /// Execute one instruction (or one halted machine cycle) and return
    /// the T-states elapsed, including any interrupt dispatch performed at
    /// the end of the step.
    ///
    /// Control flow per step: fetch the opcode and advance PC, run the
    /// addressing mode (which may fetch operand bytes and advance PC
    /// further), run the operation, then validate that the charged cycles
    /// equal the descriptor's declared cost for the branch actually taken.
    /// A mismatch, like a hole in the dispatch table, is fatal.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        self.cycles = 0;
        let ime_was_pending = self.ime_pending;

        if self.halted {
            // Halted: machine cycles keep elapsing without fetching. Any
            // enabled pending source wakes the CPU even with IME clear;
            // dispatch then depends on IME as usual.
            self.idle_cycle(bus);
            if self.pending_interrupts(bus) != 0 {
                self.halted = false;
            }
            self.service_interrupts(bus);
            return Ok(self.cycles);
        }

        let pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        let instr = &INSTRUCTIONS[opcode as usize];

        let trace_enabled = log::log_enabled!(target: "dmg_core::cpu", log::Level::Trace);
        // Operand bytes for the trace line, peeked without charging cycles.
        let (byte1, byte2) = if trace_enabled {
            (
                bus.read8(pc.wrapping_add(1)),
                bus.read8(pc.wrapping_add(2)),
            )
        } else {
            (0, 0)
        };

        let (expected, cb) = if opcode == 0xCB {
            let cb = self.fetch8(bus);
            self.exec_cb(bus, cb);
            (opcodes::cb_tcycles(cb) as u32, Some(cb))
        } else {
            self.run_addr_mode(bus, instr.addr_mode);
            let index = self.exec_opcode(bus, opcode, pc)?;
            (instr.tcycles[index] as u32, None)
        };

        if self.cycles != expected {
            return Err(CpuError::CycleMismatch {
                mnemonic: instr.mnemonic,
                opcode,
                pc,
                charged: self.cycles,
                expected,
            });
        }

        if trace_enabled {
            self.trace_instruction(bus, instr.mnemonic, cb, opcode, byte1, byte2);
        }

        self.commit_ime_delay(ime_was_pending, opcode);
        self.service_interrupts(bus);

        Ok(self.cycles)
    }

    /// Latch the instruction's operand per its addressing-mode tag,
    /// charging one machine cycle per operand byte read.
    fn run_addr_mode<B: Bus>(&mut self, bus: &mut B, mode: AddrMode) {
        match mode {
            AddrMode::Implied => {}
            AddrMode::Imm8 => self.fetched = self.fetch8(bus) as u16,
            AddrMode::Imm16 => self.fetched = self.fetch16(bus),
            AddrMode::Rel8 => self.rel = self.fetch8(bus) as i8,
            AddrMode::HighMem8 => self.fetched = 0xFF00 | self.fetch8(bus) as u16,
        }
    }

    /// Emit the per-instruction trace line: mnemonic, opcode and operand
    /// bytes as fetched, then the post-instruction register file and the
    /// serial tap bytes.
    fn trace_instruction<B: Bus>(
        &mut self,
        bus: &mut B,
        mnemonic: &str,
        cb: Option<u8>,
        opcode: u8,
        byte1: u8,
        byte2: u8,
    ) {
        let decoded = match cb {
            Some(cb) => opcodes::cb_mnemonic(cb),
            None => mnemonic.to_string(),
        };
        let sb = bus.read8(0xFF01);
        let sc = bus.read8(0xFF02);
        log::trace!(
            target: "dmg_core::cpu",
            "{decoded:<12} {opcode:02X} {byte1:02X} {byte2:02X}  A:{a:02X} F:{flags} \
             BC:{bc:04X} DE:{de:04X} HL:{hl:04X} PC:{pc:04X} SP:{sp:04X} \
             SB:{sb:02X} SC:{sc:02X}",
            a = self.regs.a,
            flags = self.format_flags(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
            pc = self.regs.pc,
            sp = self.regs.sp,
        );
    }

    /// Render F as `ZNHC` with a dash for each cleared flag.
    pub(crate) fn format_flags(&self) -> String {
        let f = self.regs.f;
        ['Z', 'N', 'H', 'C']
            .iter()
            .enumerate()
            .map(|(i, &name)| {
                if f & (0x80 >> i) != 0 {
                    name
                } else {
                    '-'
                }
            })
            .collect()
    }
}
