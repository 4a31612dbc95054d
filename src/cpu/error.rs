use thiserror::Error;

/// Fatal conditions surfaced to the host by [`crate::cpu::Cpu::step`].
///
/// Anything else the core encounters (open-bus accesses, stack pointer
/// wraparound, the documented opcode holes) is absorbed into normal
/// execution; these two variants indicate a defective instruction table
/// and terminate execution.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CpuError {
    /// The dispatch table has no operation for this opcode. Cannot happen
    /// with the shipped table; guards against incomplete edits.
    #[error("no operation for opcode {opcode:#04X} at {pc:#06X}")]
    Unimplemented { opcode: u8, pc: u16 },

    /// The machine cycles charged while executing an instruction do not
    /// match the descriptor's declared cost for the branch actually taken.
    #[error(
        "cycle accounting mismatch for {mnemonic} ({opcode:#04X}) at {pc:#06X}: \
         charged {charged} T-states, descriptor says {expected}"
    )]
    CycleMismatch {
        mnemonic: &'static str,
        opcode: u8,
        pc: u16,
        charged: u32,
        expected: u32,
    },
}
