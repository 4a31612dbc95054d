use crate::cpu::Bus;
use crate::interrupts::Interrupt;

use super::cartridge::Cartridge;
use super::serial::Serial;
use super::timer::Timer;
use super::{HRAM_SIZE, WRAM_SIZE};

mod init;
mod mmio;

/// The DMG system bus.
///
/// Owns the two internal RAMs, the interrupt-enable and interrupt-flag
/// bytes, and the peripheral stubs the core carries (serial tap, timer
/// registers, joypad byte). The cartridge is attached by the host;
/// everything else in the address space is open bus.
pub(crate) struct SystemBus {
    wram: Box<[u8; WRAM_SIZE]>,
    hram: [u8; HRAM_SIZE],
    cartridge: Option<Cartridge>,
    pub(crate) serial: Serial,
    timer: Timer,
    /// Joypad register byte (P1); plain storage until a joypad peripheral
    /// is connected.
    joyp: u8,
    pub(crate) if_reg: u8,
    pub(crate) ie_reg: u8,
}

impl SystemBus {
    pub(crate) fn new(config: &super::PowerOnConfig) -> Self {
        let mut bus = Self {
            wram: Box::new([0; WRAM_SIZE]),
            hram: [0; HRAM_SIZE],
            cartridge: None,
            serial: Serial::default(),
            timer: Timer::default(),
            joyp: 0,
            if_reg: 0,
            ie_reg: 0,
        };
        bus.apply_power_on_ram(config);
        bus
    }

    /// Attach a ROM image for reads in 0x0000-0x7FFF.
    pub(crate) fn connect_cart(&mut self, rom: &[u8]) {
        self.cartridge = Some(Cartridge::new(rom));
    }

    /// Peripheral-facing interrupt request: set the source's IF bit.
    pub(crate) fn request_interrupt(&mut self, int: Interrupt) {
        self.if_reg |= int.bit();
    }
}

impl Bus for SystemBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read8_mmio(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write8_mmio(addr, value)
    }
}
