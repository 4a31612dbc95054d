use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use dmg_core::Dmg;

/// Run a ROM against the CPU core and report what the serial debug tap
/// captured. Blargg-style test ROMs print "Passed"/"Failed" over serial,
/// so this is enough to exercise the core without a PPU. Enable
/// per-instruction tracing with RUST_LOG=dmg_core::cpu=trace.
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .context("usage: dmg_trace <rom_path> [max_steps]")?;
    let max_steps: u64 = match args.next() {
        Some(raw) => raw.parse().context("max_steps must be an integer")?,
        None => 50_000_000,
    };

    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;

    let mut dmg = Dmg::new();
    dmg.connect_cart(&rom);

    for step in 0..max_steps {
        dmg.step()
            .with_context(|| format!("core fault at step {step}"))?;

        let text = dmg.serial_text();
        if text.contains("Passed") || text.contains("Failed") {
            break;
        }
    }

    log::info!(
        "executed {} T-states; serial captured {} bytes",
        dmg.ticks(),
        dmg.serial_output().len()
    );

    let text = dmg.serial_text();
    if text.is_empty() {
        bail!("no serial output captured within {max_steps} steps");
    }
    print!("{text}");
    Ok(())
}
