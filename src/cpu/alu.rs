//! 8- and 16-bit ALU primitives.
//!
//! Every routine writes all four flags in a single store. The half
//! carry/borrow is recovered from `lhs ^ rhs ^ result`: in an add or
//! subtract, bit k of that xor is exactly the carry (or borrow) into
//! bit k, with any carry-in already folded into the chain.

use super::{Cpu, Flag};

impl Cpu {
    /// 8-bit add into A; `with_carry` folds the carry flag in (ADC).
    ///
    /// H is the carry into bit 4, C the overflow out of bit 7.
    pub(super) fn alu_add(&mut self, value: u8, with_carry: bool) {
        let a = self.regs.a;
        let carry_in = (with_carry && self.get_flag(Flag::C)) as u8;
        let sum = a as u16 + value as u16 + carry_in as u16;
        let result = sum as u8;

        self.regs.a = result;
        self.write_flags(
            result == 0,
            false,
            (a ^ value ^ result) & 0x10 != 0,
            sum > 0xFF,
        );
    }

    /// 8-bit subtract from A; `with_carry` folds the borrow in (SBC).
    ///
    /// H is the borrow into bit 4; C is a plain magnitude test against
    /// the subtrahend plus borrow. SBC A,A with carry set therefore
    /// lands on 0xFF with N, H and C all set.
    pub(super) fn alu_sub(&mut self, value: u8, with_carry: bool) {
        let a = self.regs.a;
        let borrow_in = (with_carry && self.get_flag(Flag::C)) as u8;
        let result = a.wrapping_sub(value).wrapping_sub(borrow_in);

        self.regs.a = result;
        self.write_flags(
            result == 0,
            true,
            (a ^ value ^ result) & 0x10 != 0,
            (a as u16) < value as u16 + borrow_in as u16,
        );
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        // AND is the one logical op that reports a half carry.
        self.write_flags(self.regs.a == 0, false, true, false);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        self.write_flags(self.regs.a == 0, false, false, false);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        self.write_flags(self.regs.a == 0, false, false, false);
    }

    /// Compare: subtract and discard. Flags as `alu_sub` without borrow;
    /// A is untouched.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a;
        let result = a.wrapping_sub(value);
        self.write_flags(
            result == 0,
            true,
            (a ^ value ^ result) & 0x10 != 0,
            a < value,
        );
    }

    /// Decimal adjust after a BCD add or subtract.
    ///
    /// Each nibble that left decimal range (or recorded a half
    /// carry/borrow) is pushed back by 0x06 or 0x60 in the direction N
    /// records. Only an addition can newly overflow the byte, so C turns
    /// on exactly when the 0x60 correction fires there; a subtraction
    /// can only keep the borrow it already had. N passes through, H
    /// always ends clear.
    pub(super) fn alu_daa(&mut self) {
        let a = self.regs.a;
        let n = self.get_flag(Flag::N);
        let mut carry = self.get_flag(Flag::C);
        let mut adjusted = a;

        if !n {
            if self.get_flag(Flag::H) || a & 0x0F > 0x09 {
                adjusted = adjusted.wrapping_add(0x06);
            }
            if carry || a > 0x99 {
                adjusted = adjusted.wrapping_add(0x60);
                carry = true;
            }
        } else {
            if self.get_flag(Flag::H) {
                adjusted = adjusted.wrapping_sub(0x06);
            }
            if carry {
                adjusted = adjusted.wrapping_sub(0x60);
            }
        }

        self.regs.a = adjusted;
        self.write_flags(adjusted == 0, n, false, carry);
    }

    /// INC r: H fires exactly when the low nibble rolls over from 0xF.
    /// C is not INC's to change, so the current value is written back.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let carry = self.get_flag(Flag::C);
        self.write_flags(result == 0, false, value & 0x0F == 0x0F, carry);
        result
    }

    /// DEC r: H fires exactly when the low nibble was already empty.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let carry = self.get_flag(Flag::C);
        self.write_flags(result == 0, true, value & 0x0F == 0x00, carry);
        result
    }

    /// ADD HL,rr: the 16-bit adder reports its carries from bit 11 and
    /// bit 15. Z belongs to the 8-bit ALU and is carried over unchanged.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);
        let zero = self.get_flag(Flag::Z);

        self.write_flags(
            zero,
            false,
            (hl ^ value ^ result) & 0x1000 != 0,
            hl > 0xFFFF - value,
        );
        self.regs.set_hl(result);
    }

    /// SP plus a sign-extended immediate (ADD SP,e and LD HL,SP+e).
    ///
    /// H and C come from bits 3 and 7 of the unsigned low-byte add: a
    /// negative displacement flags exactly like the 0x00-0xFF byte it is
    /// encoded as. Z and N always end clear.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        let result = base.wrapping_add(offset);

        self.write_flags(
            false,
            false,
            (base ^ offset ^ result) & 0x0010 != 0,
            (base ^ offset ^ result) & 0x0100 != 0,
        );
        result
    }
}
