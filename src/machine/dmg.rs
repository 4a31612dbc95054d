use typed_builder::TypedBuilder;

use crate::cpu::{Bus, Cpu, CpuError};
use crate::interrupts::Interrupt;

use super::SystemBus;

/// Power-on options for the machine.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PowerOnConfig {
    /// Zero WRAM/HRAM instead of filling them from the power-on PRNG.
    #[builder(default = false)]
    pub zero_internal_ram: bool,
    /// Seed for the power-on RAM PRNG.
    #[builder(default = 0xC0DE_1234)]
    pub ram_seed: u32,
}

impl Default for PowerOnConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// High-level DMG core: the CPU wired to the system bus.
///
/// This is the host's entry point. Attach a ROM with [`Dmg::connect_cart`]
/// and drive execution with [`Dmg::step`]; between steps the machine state
/// is quiescent and can be inspected freely through the cycle-free
/// [`Dmg::read`]/[`Dmg::write`] accessors.
pub struct Dmg {
    pub cpu: Cpu,
    pub(crate) bus: SystemBus,
}

impl Default for Dmg {
    fn default() -> Self {
        Self::new()
    }
}

impl Dmg {
    pub fn new() -> Self {
        Self::with_config(&PowerOnConfig::default())
    }

    pub fn with_config(config: &PowerOnConfig) -> Self {
        Self {
            cpu: Cpu::new(),
            bus: SystemBus::new(config),
        }
    }

    /// Power-on reset: post-bootrom register image and a fresh bus. The
    /// cartridge stays disconnected.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus = SystemBus::new(&PowerOnConfig::default());
    }

    /// Attach a ROM image for reads in 0x0000-0x7FFF.
    pub fn connect_cart(&mut self, rom: &[u8]) {
        self.bus.connect_cart(rom);
    }

    /// Execute one instruction (or one halted machine cycle) and return
    /// the T-states elapsed.
    pub fn step(&mut self) -> Result<u32, CpuError> {
        self.cpu.step(&mut self.bus)
    }

    /// Host/debugger read: same decoding as CPU accesses, but charges no
    /// cycles.
    pub fn read(&mut self, addr: u16) -> u8 {
        self.bus.read8(addr)
    }

    /// Host/debugger write: same decoding as CPU accesses, but charges no
    /// cycles.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bus.write8(addr, value);
    }

    /// Peripheral-facing interrupt request: sets the source's IF bit.
    pub fn request_interrupt(&mut self, int: Interrupt) {
        self.bus.request_interrupt(int);
    }

    /// Raw bytes captured by the serial debug tap since power-on.
    pub fn serial_output(&self) -> &[u8] {
        self.bus.serial.output()
    }

    /// Captured serial output as text.
    pub fn serial_text(&self) -> String {
        String::from_utf8_lossy(self.bus.serial.output()).into_owned()
    }

    /// Total T-states elapsed since power-on.
    pub fn ticks(&self) -> u64 {
        self.cpu.ticks
    }
}
