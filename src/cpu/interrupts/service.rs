use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// Dispatch the highest-priority pending interrupt if IME allows it.
    ///
    /// The entry sequence costs five machine cycles: two internal delay
    /// cycles, the PC push (high byte then low byte), and a final cycle
    /// for the vector jump. IME is cleared up front; the IF bit is
    /// acknowledged when the vector is chosen. The vector is selected
    /// *after* the high-byte push so a push that lands on IE can retarget
    /// or cancel the dispatch (PC then falls back to 0x0000).
    pub(in crate::cpu) fn service_interrupts<B: Bus>(&mut self, bus: &mut B) {
        if !self.ime || self.pending_interrupts(bus) == 0 {
            return;
        }

        self.ime = false;
        self.halted = false;

        self.idle_cycle(bus);
        self.idle_cycle(bus);

        let pc = self.regs.pc;

        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_cycle(bus, self.regs.sp, (pc >> 8) as u8);

        let selection = self.select_interrupt_after_high_push(bus);

        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_cycle(bus, self.regs.sp, pc as u8);

        match selection {
            Some((int, new_if)) => {
                bus.write8(0xFF0F, new_if);
                self.regs.pc = int.vector();
            }
            None => {
                // The high-byte push cleared every enabled request: the
                // dispatch is cancelled and PC falls back to 0x0000.
                self.regs.pc = 0x0000;
            }
        }

        self.idle_cycle(bus);
    }
}
