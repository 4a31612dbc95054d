use crate::cpu::Cpu;

impl Cpu {
    pub(in crate::cpu) fn exec_stop(&mut self, pc: u16) -> usize {
        // Real hardware stops the clocks until a joypad line goes low; with
        // the joypad out of scope we record the event and continue. No test
        // corpus in scope exercises the low-power state.
        log::debug!(target: "dmg_core::cpu", "STOP executed at {pc:#06X}");
        0
    }

    pub(in crate::cpu) fn exec_di(&mut self) -> usize {
        // Takes effect immediately, and also cancels a pending EI.
        self.ime = false;
        self.ime_pending = false;
        0
    }

    pub(in crate::cpu) fn exec_ei(&mut self) -> usize {
        // IME becomes 1 only after the *next* instruction completes.
        self.ime_pending = true;
        0
    }
}
