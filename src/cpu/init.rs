use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Create a CPU in the post-bootrom state, ready to execute cartridge
    /// code at 0x0100.
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            ime_pending: false,
            halt_bug: false,
            fetched: 0,
            rel: 0,
            cycles: 0,
            ticks: 0,
        };
        cpu.apply_power_on_state();
        cpu
    }

    /// Reset the CPU to its power-on state.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime = false;
        self.halted = false;
        self.ime_pending = false;
        self.halt_bug = false;
        self.fetched = 0;
        self.rel = 0;
        self.cycles = 0;
        self.ticks = 0;
        self.apply_power_on_state();
    }

    /// Register image at the point the boot ROM hands control to the
    /// cartridge: AF=0x01B0, BC=0x0000, DE=0xFF56, HL=0x000D, SP=0xFFFE,
    /// PC=0x0100, IME clear.
    fn apply_power_on_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0;
        self.regs.b = 0x00;
        self.regs.c = 0x00;
        self.regs.d = 0xFF;
        self.regs.e = 0x56;
        self.regs.h = 0x00;
        self.regs.l = 0x0D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        // The game (or test ROM) is responsible for enabling interrupts
        // via EI/RETI as needed.
        self.ime = false;
    }
}
