/// Abstraction over the memory bus the CPU executes against.
///
/// `read8`/`write8` are plain, untimed accesses; the CPU's own access
/// helpers charge one machine cycle around each call and forward it to
/// `tick` so bus-side peripherals observe the same I/O ordering as real
/// hardware.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Advance bus-side peripherals by a number of T-states.
    ///
    /// The CPU calls this once per machine cycle (always with 4). The
    /// default implementation does nothing; system buses can override it
    /// to drive timers, PPU, APU, etc.
    fn tick(&mut self, _tcycles: u32) {}
}
