/// ROM-only cartridge.
///
/// Holds the raw image and serves reads in 0x0000-0x7FFF; reads past the
/// end of the image are open bus. Writes into the ROM window would be MBC
/// control on a banked cartridge and are ignored here.
pub(crate) struct Cartridge {
    rom: Vec<u8>,
}

impl Cartridge {
    pub(crate) fn new(rom: &[u8]) -> Self {
        Self { rom: rom.to_vec() }
    }

    #[inline]
    pub(crate) fn read(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    pub(crate) fn write(&mut self, _addr: u16, _value: u8) {}
}
