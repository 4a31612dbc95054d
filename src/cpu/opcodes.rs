//! Opcode descriptor table.
//!
//! One record per primary opcode: mnemonic, encoded size, declared T-state
//! costs, and the addressing-mode tag the step engine runs before the
//! operation. Operations themselves live in the `exec` modules as an
//! exhaustive match per family; keeping only a small tag here makes the
//! dispatch branch-predictable and keeps the instruction code co-located.

/// How an instruction's operand bytes are fetched before the operation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddrMode {
    /// Operands implicit in registers; nothing to fetch.
    Implied,
    /// One immediate byte into the operand scratch; 1 machine cycle.
    Imm8,
    /// Two immediate bytes, low then high, into the operand scratch;
    /// 2 machine cycles.
    Imm16,
    /// One signed displacement byte; 1 machine cycle.
    Rel8,
    /// One immediate byte forming the high-RAM address `0xFF00 + n`;
    /// 1 machine cycle.
    HighMem8,
}

/// Static description of one primary-table opcode.
///
/// `tcycles[0]` is the cost when the action is taken (or the only cost);
/// `tcycles[1]`, when present, is the not-taken cost of a conditional.
/// The operation returns the index it actually consumed. The 0xCB prefix
/// row carries an empty list: a CB instruction's cost depends on the
/// second byte and comes from [`cb_tcycles`] instead.
#[derive(Clone, Copy, Debug)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub size: u8,
    pub tcycles: &'static [u8],
    pub addr_mode: AddrMode,
}

const fn op(
    mnemonic: &'static str,
    size: u8,
    tcycles: &'static [u8],
    addr_mode: AddrMode,
) -> Instruction {
    Instruction {
        mnemonic,
        size,
        tcycles,
        addr_mode,
    }
}

use self::AddrMode as M;

/// The 11 opcode holes decode as one-machine-cycle no-ops.
const HOLE: Instruction = op("-", 1, &[4], M::Implied);

#[rustfmt::skip]
pub static INSTRUCTIONS: [Instruction; 256] = [
    /* 0x00 */ op("NOP",          1, &[4],      M::Implied),
    /* 0x01 */ op("LD BC,d16",    3, &[12],     M::Imm16),
    /* 0x02 */ op("LD (BC),A",    1, &[8],      M::Implied),
    /* 0x03 */ op("INC BC",       1, &[8],      M::Implied),
    /* 0x04 */ op("INC B",        1, &[4],      M::Implied),
    /* 0x05 */ op("DEC B",        1, &[4],      M::Implied),
    /* 0x06 */ op("LD B,d8",      2, &[8],      M::Imm8),
    /* 0x07 */ op("RLCA",         1, &[4],      M::Implied),
    /* 0x08 */ op("LD (a16),SP",  3, &[20],     M::Imm16),
    /* 0x09 */ op("ADD HL,BC",    1, &[8],      M::Implied),
    /* 0x0A */ op("LD A,(BC)",    1, &[8],      M::Implied),
    /* 0x0B */ op("DEC BC",       1, &[8],      M::Implied),
    /* 0x0C */ op("INC C",        1, &[4],      M::Implied),
    /* 0x0D */ op("DEC C",        1, &[4],      M::Implied),
    /* 0x0E */ op("LD C,d8",      2, &[8],      M::Imm8),
    /* 0x0F */ op("RRCA",         1, &[4],      M::Implied),
    /* 0x10 */ op("STOP",         1, &[4],      M::Implied),
    /* 0x11 */ op("LD DE,d16",    3, &[12],     M::Imm16),
    /* 0x12 */ op("LD (DE),A",    1, &[8],      M::Implied),
    /* 0x13 */ op("INC DE",       1, &[8],      M::Implied),
    /* 0x14 */ op("INC D",        1, &[4],      M::Implied),
    /* 0x15 */ op("DEC D",        1, &[4],      M::Implied),
    /* 0x16 */ op("LD D,d8",      2, &[8],      M::Imm8),
    /* 0x17 */ op("RLA",          1, &[4],      M::Implied),
    /* 0x18 */ op("JR r8",        2, &[12],     M::Rel8),
    /* 0x19 */ op("ADD HL,DE",    1, &[8],      M::Implied),
    /* 0x1A */ op("LD A,(DE)",    1, &[8],      M::Implied),
    /* 0x1B */ op("DEC DE",       1, &[8],      M::Implied),
    /* 0x1C */ op("INC E",        1, &[4],      M::Implied),
    /* 0x1D */ op("DEC E",        1, &[4],      M::Implied),
    /* 0x1E */ op("LD E,d8",      2, &[8],      M::Imm8),
    /* 0x1F */ op("RRA",          1, &[4],      M::Implied),
    /* 0x20 */ op("JR NZ,r8",     2, &[12, 8],  M::Rel8),
    /* 0x21 */ op("LD HL,d16",    3, &[12],     M::Imm16),
    /* 0x22 */ op("LD (HL+),A",   1, &[8],      M::Implied),
    /* 0x23 */ op("INC HL",       1, &[8],      M::Implied),
    /* 0x24 */ op("INC H",        1, &[4],      M::Implied),
    /* 0x25 */ op("DEC H",        1, &[4],      M::Implied),
    /* 0x26 */ op("LD H,d8",      2, &[8],      M::Imm8),
    /* 0x27 */ op("DAA",          1, &[4],      M::Implied),
    /* 0x28 */ op("JR Z,r8",      2, &[12, 8],  M::Rel8),
    /* 0x29 */ op("ADD HL,HL",    1, &[8],      M::Implied),
    /* 0x2A */ op("LD A,(HL+)",   1, &[8],      M::Implied),
    /* 0x2B */ op("DEC HL",       1, &[8],      M::Implied),
    /* 0x2C */ op("INC L",        1, &[4],      M::Implied),
    /* 0x2D */ op("DEC L",        1, &[4],      M::Implied),
    /* 0x2E */ op("LD L,d8",      2, &[8],      M::Imm8),
    /* 0x2F */ op("CPL",          1, &[4],      M::Implied),
    /* 0x30 */ op("JR NC,r8",     2, &[12, 8],  M::Rel8),
    /* 0x31 */ op("LD SP,d16",    3, &[12],     M::Imm16),
    /* 0x32 */ op("LD (HL-),A",   1, &[8],      M::Implied),
    /* 0x33 */ op("INC SP",       1, &[8],      M::Implied),
    /* 0x34 */ op("INC (HL)",     1, &[12],     M::Implied),
    /* 0x35 */ op("DEC (HL)",     1, &[12],     M::Implied),
    /* 0x36 */ op("LD (HL),d8",   2, &[12],     M::Imm8),
    /* 0x37 */ op("SCF",          1, &[4],      M::Implied),
    /* 0x38 */ op("JR C,r8",      2, &[12, 8],  M::Rel8),
    /* 0x39 */ op("ADD HL,SP",    1, &[8],      M::Implied),
    /* 0x3A */ op("LD A,(HL-)",   1, &[8],      M::Implied),
    /* 0x3B */ op("DEC SP",       1, &[8],      M::Implied),
    /* 0x3C */ op("INC A",        1, &[4],      M::Implied),
    /* 0x3D */ op("DEC A",        1, &[4],      M::Implied),
    /* 0x3E */ op("LD A,d8",      2, &[8],      M::Imm8),
    /* 0x3F */ op("CCF",          1, &[4],      M::Implied),
    /* 0x40 */ op("LD B,B",       1, &[4],      M::Implied),
    /* 0x41 */ op("LD B,C",       1, &[4],      M::Implied),
    /* 0x42 */ op("LD B,D",       1, &[4],      M::Implied),
    /* 0x43 */ op("LD B,E",       1, &[4],      M::Implied),
    /* 0x44 */ op("LD B,H",       1, &[4],      M::Implied),
    /* 0x45 */ op("LD B,L",       1, &[4],      M::Implied),
    /* 0x46 */ op("LD B,(HL)",    1, &[8],      M::Implied),
    /* 0x47 */ op("LD B,A",       1, &[4],      M::Implied),
    /* 0x48 */ op("LD C,B",       1, &[4],      M::Implied),
    /* 0x49 */ op("LD C,C",       1, &[4],      M::Implied),
    /* 0x4A */ op("LD C,D",       1, &[4],      M::Implied),
    /* 0x4B */ op("LD C,E",       1, &[4],      M::Implied),
    /* 0x4C */ op("LD C,H",       1, &[4],      M::Implied),
    /* 0x4D */ op("LD C,L",       1, &[4],      M::Implied),
    /* 0x4E */ op("LD C,(HL)",    1, &[8],      M::Implied),
    /* 0x4F */ op("LD C,A",       1, &[4],      M::Implied),
    /* 0x50 */ op("LD D,B",       1, &[4],      M::Implied),
    /* 0x51 */ op("LD D,C",       1, &[4],      M::Implied),
    /* 0x52 */ op("LD D,D",       1, &[4],      M::Implied),
    /* 0x53 */ op("LD D,E",       1, &[4],      M::Implied),
    /* 0x54 */ op("LD D,H",       1, &[4],      M::Implied),
    /* 0x55 */ op("LD D,L",       1, &[4],      M::Implied),
    /* 0x56 */ op("LD D,(HL)",    1, &[8],      M::Implied),
    /* 0x57 */ op("LD D,A",       1, &[4],      M::Implied),
    /* 0x58 */ op("LD E,B",       1, &[4],      M::Implied),
    /* 0x59 */ op("LD E,C",       1, &[4],      M::Implied),
    /* 0x5A */ op("LD E,D",       1, &[4],      M::Implied),
    /* 0x5B */ op("LD E,E",       1, &[4],      M::Implied),
    /* 0x5C */ op("LD E,H",       1, &[4],      M::Implied),
    /* 0x5D */ op("LD E,L",       1, &[4],      M::Implied),
    /* 0x5E */ op("LD E,(HL)",    1, &[8],      M::Implied),
    /* 0x5F */ op("LD E,A",       1, &[4],      M::Implied),
    /* 0x60 */ op("LD H,B",       1, &[4],      M::Implied),
    /* 0x61 */ op("LD H,C",       1, &[4],      M::Implied),
    /* 0x62 */ op("LD H,D",       1, &[4],      M::Implied),
    /* 0x63 */ op("LD H,E",       1, &[4],      M::Implied),
    /* 0x64 */ op("LD H,H",       1, &[4],      M::Implied),
    /* 0x65 */ op("LD H,L",       1, &[4],      M::Implied),
    /* 0x66 */ op("LD H,(HL)",    1, &[8],      M::Implied),
    /* 0x67 */ op("LD H,A",       1, &[4],      M::Implied),
    /* 0x68 */ op("LD L,B",       1, &[4],      M::Implied),
    /* 0x69 */ op("LD L,C",       1, &[4],      M::Implied),
    /* 0x6A */ op("LD L,D",       1, &[4],      M::Implied),
    /* 0x6B */ op("LD L,E",       1, &[4],      M::Implied),
    /* 0x6C */ op("LD L,H",       1, &[4],      M::Implied),
    /* 0x6D */ op("LD L,L",       1, &[4],      M::Implied),
    /* 0x6E */ op("LD L,(HL)",    1, &[8],      M::Implied),
    /* 0x6F */ op("LD L,A",       1, &[4],      M::Implied),
    /* 0x70 */ op("LD (HL),B",    1, &[8],      M::Implied),
    /* 0x71 */ op("LD (HL),C",    1, &[8],      M::Implied),
    /* 0x72 */ op("LD (HL),D",    1, &[8],      M::Implied),
    /* 0x73 */ op("LD (HL),E",    1, &[8],      M::Implied),
    /* 0x74 */ op("LD (HL),H",    1, &[8],      M::Implied),
    /* 0x75 */ op("LD (HL),L",    1, &[8],      M::Implied),
    /* 0x76 */ op("HALT",         1, &[4],      M::Implied),
    /* 0x77 */ op("LD (HL),A",    1, &[8],      M::Implied),
    /* 0x78 */ op("LD A,B",       1, &[4],      M::Implied),
    /* 0x79 */ op("LD A,C",       1, &[4],      M::Implied),
    /* 0x7A */ op("LD A,D",       1, &[4],      M::Implied),
    /* 0x7B */ op("LD A,E",       1, &[4],      M::Implied),
    /* 0x7C */ op("LD A,H",       1, &[4],      M::Implied),
    /* 0x7D */ op("LD A,L",       1, &[4],      M::Implied),
    /* 0x7E */ op("LD A,(HL)",    1, &[8],      M::Implied),
    /* 0x7F */ op("LD A,A",       1, &[4],      M::Implied),
    /* 0x80 */ op("ADD A,B",      1, &[4],      M::Implied),
    /* 0x81 */ op("ADD A,C",      1, &[4],      M::Implied),
    /* 0x82 */ op("ADD A,D",      1, &[4],      M::Implied),
    /* 0x83 */ op("ADD A,E",      1, &[4],      M::Implied),
    /* 0x84 */ op("ADD A,H",      1, &[4],      M::Implied),
    /* 0x85 */ op("ADD A,L",      1, &[4],      M::Implied),
    /* 0x86 */ op("ADD A,(HL)",   1, &[8],      M::Implied),
    /* 0x87 */ op("ADD A,A",      1, &[4],      M::Implied),
    /* 0x88 */ op("ADC A,B",      1, &[4],      M::Implied),
    /* 0x89 */ op("ADC A,C",      1, &[4],      M::Implied),
    /* 0x8A */ op("ADC A,D",      1, &[4],      M::Implied),
    /* 0x8B */ op("ADC A,E",      1, &[4],      M::Implied),
    /* 0x8C */ op("ADC A,H",      1, &[4],      M::Implied),
    /* 0x8D */ op("ADC A,L",      1, &[4],      M::Implied),
    /* 0x8E */ op("ADC A,(HL)",   1, &[8],      M::Implied),
    /* 0x8F */ op("ADC A,A",      1, &[4],      M::Implied),
    /* 0x90 */ op("SUB B",        1, &[4],      M::Implied),
    /* 0x91 */ op("SUB C",        1, &[4],      M::Implied),
    /* 0x92 */ op("SUB D",        1, &[4],      M::Implied),
    /* 0x93 */ op("SUB E",        1, &[4],      M::Implied),
    /* 0x94 */ op("SUB H",        1, &[4],      M::Implied),
    /* 0x95 */ op("SUB L",        1, &[4],      M::Implied),
    /* 0x96 */ op("SUB (HL)",     1, &[8],      M::Implied),
    /* 0x97 */ op("SUB A",        1, &[4],      M::Implied),
    /* 0x98 */ op("SBC A,B",      1, &[4],      M::Implied),
    /* 0x99 */ op("SBC A,C",      1, &[4],      M::Implied),
    /* 0x9A */ op("SBC A,D",      1, &[4],      M::Implied),
    /* 0x9B */ op("SBC A,E",      1, &[4],      M::Implied),
    /* 0x9C */ op("SBC A,H",      1, &[4],      M::Implied),
    /* 0x9D */ op("SBC A,L",      1, &[4],      M::Implied),
    /* 0x9E */ op("SBC A,(HL)",   1, &[8],      M::Implied),
    /* 0x9F */ op("SBC A,A",      1, &[4],      M::Implied),
    /* 0xA0 */ op("AND B",        1, &[4],      M::Implied),
    /* 0xA1 */ op("AND C",        1, &[4],      M::Implied),
    /* 0xA2 */ op("AND D",        1, &[4],      M::Implied),
    /* 0xA3 */ op("AND E",        1, &[4],      M::Implied),
    /* 0xA4 */ op("AND H",        1, &[4],      M::Implied),
    /* 0xA5 */ op("AND L",        1, &[4],      M::Implied),
    /* 0xA6 */ op("AND (HL)",     1, &[8],      M::Implied),
    /* 0xA7 */ op("AND A",        1, &[4],      M::Implied),
    /* 0xA8 */ op("XOR B",        1, &[4],      M::Implied),
    /* 0xA9 */ op("XOR C",        1, &[4],      M::Implied),
    /* 0xAA */ op("XOR D",        1, &[4],      M::Implied),
    /* 0xAB */ op("XOR E",        1, &[4],      M::Implied),
    /* 0xAC */ op("XOR H",        1, &[4],      M::Implied),
    /* 0xAD */ op("XOR L",        1, &[4],      M::Implied),
    /* 0xAE */ op("XOR (HL)",     1, &[8],      M::Implied),
    /* 0xAF */ op("XOR A",        1, &[4],      M::Implied),
    /* 0xB0 */ op("OR B",         1, &[4],      M::Implied),
    /* 0xB1 */ op("OR C",         1, &[4],      M::Implied),
    /* 0xB2 */ op("OR D",         1, &[4],      M::Implied),
    /* 0xB3 */ op("OR E",         1, &[4],      M::Implied),
    /* 0xB4 */ op("OR H",         1, &[4],      M::Implied),
    /* 0xB5 */ op("OR L",         1, &[4],      M::Implied),
    /* 0xB6 */ op("OR (HL)",      1, &[8],      M::Implied),
    /* 0xB7 */ op("OR A",         1, &[4],      M::Implied),
    /* 0xB8 */ op("CP B",         1, &[4],      M::Implied),
    /* 0xB9 */ op("CP C",         1, &[4],      M::Implied),
    /* 0xBA */ op("CP D",         1, &[4],      M::Implied),
    /* 0xBB */ op("CP E",         1, &[4],      M::Implied),
    /* 0xBC */ op("CP H",         1, &[4],      M::Implied),
    /* 0xBD */ op("CP L",         1, &[4],      M::Implied),
    /* 0xBE */ op("CP (HL)",      1, &[8],      M::Implied),
    /* 0xBF */ op("CP A",         1, &[4],      M::Implied),
    /* 0xC0 */ op("RET NZ",       1, &[20, 8],  M::Implied),
    /* 0xC1 */ op("POP BC",       1, &[12],     M::Implied),
    /* 0xC2 */ op("JP NZ,a16",    3, &[16, 12], M::Imm16),
    /* 0xC3 */ op("JP a16",       3, &[16],     M::Imm16),
    /* 0xC4 */ op("CALL NZ,a16",  3, &[24, 12], M::Imm16),
    /* 0xC5 */ op("PUSH BC",      1, &[16],     M::Implied),
    /* 0xC6 */ op("ADD A,d8",     2, &[8],      M::Imm8),
    /* 0xC7 */ op("RST 00H",      1, &[16],     M::Implied),
    /* 0xC8 */ op("RET Z",        1, &[20, 8],  M::Implied),
    /* 0xC9 */ op("RET",          1, &[16],     M::Implied),
    /* 0xCA */ op("JP Z,a16",     3, &[16, 12], M::Imm16),
    /* 0xCB */ op("PREFIX CB",    2, &[],       M::Implied),
    /* 0xCC */ op("CALL Z,a16",   3, &[24, 12], M::Imm16),
    /* 0xCD */ op("CALL a16",     3, &[24],     M::Imm16),
    /* 0xCE */ op("ADC A,d8",     2, &[8],      M::Imm8),
    /* 0xCF */ op("RST 08H",      1, &[16],     M::Implied),
    /* 0xD0 */ op("RET NC",       1, &[20, 8],  M::Implied),
    /* 0xD1 */ op("POP DE",       1, &[12],     M::Implied),
    /* 0xD2 */ op("JP NC,a16",    3, &[16, 12], M::Imm16),
    /* 0xD3 */ HOLE,
    /* 0xD4 */ op("CALL NC,a16",  3, &[24, 12], M::Imm16),
    /* 0xD5 */ op("PUSH DE",      1, &[16],     M::Implied),
    /* 0xD6 */ op("SUB d8",       2, &[8],      M::Imm8),
    /* 0xD7 */ op("RST 10H",      1, &[16],     M::Implied),
    /* 0xD8 */ op("RET C",        1, &[20, 8],  M::Implied),
    /* 0xD9 */ op("RETI",         1, &[16],     M::Implied),
    /* 0xDA */ op("JP C,a16",     3, &[16, 12], M::Imm16),
    /* 0xDB */ HOLE,
    /* 0xDC */ op("CALL C,a16",   3, &[24, 12], M::Imm16),
    /* 0xDD */ HOLE,
    /* 0xDE */ op("SBC A,d8",     2, &[8],      M::Imm8),
    /* 0xDF */ op("RST 18H",      1, &[16],     M::Implied),
    /* 0xE0 */ op("LDH (a8),A",   2, &[12],     M::HighMem8),
    /* 0xE1 */ op("POP HL",       1, &[12],     M::Implied),
    /* 0xE2 */ op("LD (C),A",     1, &[8],      M::Implied),
    /* 0xE3 */ HOLE,
    /* 0xE4 */ HOLE,
    /* 0xE5 */ op("PUSH HL",      1, &[16],     M::Implied),
    /* 0xE6 */ op("AND d8",       2, &[8],      M::Imm8),
    /* 0xE7 */ op("RST 20H",      1, &[16],     M::Implied),
    /* 0xE8 */ op("ADD SP,r8",    2, &[16],     M::Rel8),
    /* 0xE9 */ op("JP HL",        1, &[4],      M::Implied),
    /* 0xEA */ op("LD (a16),A",   3, &[16],     M::Imm16),
    /* 0xEB */ HOLE,
    /* 0xEC */ HOLE,
    /* 0xED */ HOLE,
    /* 0xEE */ op("XOR d8",       2, &[8],      M::Imm8),
    /* 0xEF */ op("RST 28H",      1, &[16],     M::Implied),
    /* 0xF0 */ op("LDH A,(a8)",   2, &[12],     M::HighMem8),
    /* 0xF1 */ op("POP AF",       1, &[12],     M::Implied),
    /* 0xF2 */ op("LD A,(C)",     1, &[8],      M::Implied),
    /* 0xF3 */ op("DI",           1, &[4],      M::Implied),
    /* 0xF4 */ HOLE,
    /* 0xF5 */ op("PUSH AF",      1, &[16],     M::Implied),
    /* 0xF6 */ op("OR d8",        2, &[8],      M::Imm8),
    /* 0xF7 */ op("RST 30H",      1, &[16],     M::Implied),
    /* 0xF8 */ op("LD HL,SP+r8",  2, &[12],     M::Rel8),
    /* 0xF9 */ op("LD SP,HL",     1, &[8],      M::Implied),
    /* 0xFA */ op("LD A,(a16)",   3, &[16],     M::Imm16),
    /* 0xFB */ op("EI",           1, &[4],      M::Implied),
    /* 0xFC */ HOLE,
    /* 0xFD */ HOLE,
    /* 0xFE */ op("CP d8",        2, &[8],      M::Imm8),
    /* 0xFF */ op("RST 38H",      1, &[16],     M::Implied),
];

/// Declared T-state cost of a CB-prefixed instruction, including the two
/// fetch cycles. Register forms cost 8; `(HL)` forms cost 16 except BIT,
/// which only reads and costs 12.
#[inline]
pub const fn cb_tcycles(cb: u8) -> u8 {
    if cb & 0x07 != 6 {
        8
    } else if cb >> 6 == 1 {
        12
    } else {
        16
    }
}

/// Decoded mnemonic of a CB-prefixed instruction, for trace output.
pub fn cb_mnemonic(cb: u8) -> String {
    const OPERANDS: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
    let operand = OPERANDS[(cb & 0x07) as usize];
    let y = (cb >> 3) & 0x07;
    match cb >> 6 {
        0 => {
            const FAMILIES: [&str; 8] =
                ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];
            format!("{} {}", FAMILIES[y as usize], operand)
        }
        1 => format!("BIT {y},{operand}"),
        2 => format!("RES {y},{operand}"),
        _ => format!("SET {y},{operand}"),
    }
}
