use crate::cpu::{Bus, Cpu};
use crate::interrupts::{Interrupt, INT_MASK};

impl Cpu {
    /// Mask of interrupt sources both requested and enabled. This is a
    /// controller-internal signal; sampling it charges no cycles.
    #[inline]
    pub(in crate::cpu) fn pending_interrupts<B: Bus>(&mut self, bus: &mut B) -> u8 {
        bus.read8(0xFFFF) & bus.read8(0xFF0F) & INT_MASK
    }

    /// Select the interrupt to dispatch *after* the high byte of PC has
    /// been pushed, but *before* the low byte is written.
    ///
    /// When SP was 0 the high-byte push lands on IE ($FFFF) and can change
    /// which source is dispatched, or cancel the dispatch entirely; writes
    /// performed by the low-byte push are too late to matter. Returns the
    /// chosen source and the IF value with its bit acknowledged, or `None`
    /// when nothing remains pending.
    pub(in crate::cpu) fn select_interrupt_after_high_push<B: Bus>(
        &mut self,
        bus: &mut B,
    ) -> Option<(Interrupt, u8)> {
        let if_now = bus.read8(0xFF0F);
        let pending = bus.read8(0xFFFF) & if_now & INT_MASK;
        let int = Interrupt::highest_priority(pending)?;
        Some((int, if_now & !int.bit()))
    }
}
