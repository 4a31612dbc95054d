//! Cycle-accounted Game Boy (DMG) CPU core and memory bus.
//!
//! This crate contains the SM83 CPU core, the system memory bus, and the
//! interrupt controller of the original DMG, exposed as a library. Hosts
//! drive it through the [`machine::Dmg`] facade: attach a ROM image, call
//! [`machine::Dmg::step`] in a loop, and pace against the returned T-state
//! counts. Graphics, audio, cartridge banking and the host event loop are
//! external collaborators; the bus maps their regions as open bus.

/// SM83 CPU core: registers, instruction set, and step engine.
pub mod cpu;

/// Interrupt sources, priorities, and vectors.
pub mod interrupts;

/// System bus, peripherals stubs, and the machine facade.
pub mod machine;

pub use cpu::{Bus, Cpu, CpuError, Flag, Registers};
pub use interrupts::Interrupt;
pub use machine::{Dmg, PowerOnConfig};

/// DMG master clock rate in T-states per second.
///
/// Hosts typically pace emulation by counting the T-states returned from
/// `step()` against this rate.
pub const CLOCK_HZ: u32 = 4_194_304;
