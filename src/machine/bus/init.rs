use super::SystemBus;
use crate::machine::PowerOnConfig;

impl SystemBus {
    /// Set the power-on contents of WRAM and HRAM.
    ///
    /// Hardware leaves these effectively random. The default fills them
    /// from a fixed-seed xorshift32 PRNG so runs stay reproducible while
    /// software still cannot rely on a specific pattern; hosts that want a
    /// clean-slate image (e.g. lockstep comparison against a reference
    /// core) can request zeroed RAM instead.
    pub(super) fn apply_power_on_ram(&mut self, config: &PowerOnConfig) {
        if config.zero_internal_ram {
            return;
        }

        let mut state = config.ram_seed.max(1);
        let mut next_byte = move || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        };

        for byte in self.wram.iter_mut() {
            *byte = next_byte();
        }
        for byte in self.hram.iter_mut() {
            *byte = next_byte();
        }
    }
}
