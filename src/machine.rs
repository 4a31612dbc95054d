mod bus;
mod cartridge;
mod dmg;
mod serial;
mod timer;

pub(crate) use bus::SystemBus;
pub use dmg::{Dmg, PowerOnConfig};

/// Work RAM size (0xC000-0xDFFF).
const WRAM_SIZE: usize = 0x2000;
/// High RAM size (0xFF80-0xFFFE).
const HRAM_SIZE: usize = 0x7F;
