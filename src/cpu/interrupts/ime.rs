use crate::cpu::Cpu;

impl Cpu {
    /// Commit the delayed IME enable requested by EI.
    ///
    /// `was_pending` is the latch state sampled when the step began. The
    /// enable only lands after a *different* instruction has completed, so
    /// back-to-back EIs keep deferring and `EI; DI` (which clears the
    /// latch) never opens an interrupt window.
    #[inline]
    pub(in crate::cpu) fn commit_ime_delay(&mut self, was_pending: bool, opcode: u8) {
        const EI: u8 = 0xFB;
        if was_pending && self.ime_pending && opcode != EI {
            self.ime = true;
            self.ime_pending = false;
        }
    }
}
