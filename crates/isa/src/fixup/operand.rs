//! Operand-to-fixup dispatch table.
//!
//! Generated from the architecture database; do not edit by hand. Row order
//! matches [`Opcode`] declaration order. Each row lists the operand indices
//! of the instruction variant that carry a fixup, and the kind they carry.

use crate::fixup::FixupKind as F;
use crate::fixup::FixupKind;
use crate::isa::Opcode;

/// Fixup kinds carried by each opcode, keyed by operand index.
pub(crate) static OPERAND_FIXUPS: [&[(u8, FixupKind)]; Opcode::COUNT] = [
    &[],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32ZeroRb)],
    &[(2, F::Imm12), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32DusRb)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32DusRb)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32ZeroRb)],
    &[(2, F::Imm12), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm12), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32DusRb)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32DusRb)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32ZeroRb)],
    &[(2, F::Imm12), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(1, F::Imm24)],
    &[(0, F::Imm4), (2, F::Pc)],
    &[(1, F::Imm4), (3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[(1, F::Imm22Rb)],
    &[],
    &[(2, F::Imm22Rb)],
    &[],
    &[(2, F::Imm22Rb)],
    &[],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[(0, F::Pc)],
    &[],
    &[(2, F::Pc)],
    &[],
    &[],
    &[(2, F::Imm4)],
    &[(2, F::Imm4), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm4)],
    &[(2, F::Imm4), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm4)],
    &[(2, F::Imm4), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm4)],
    &[(2, F::Imm4), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(1, F::Imm12), (2, F::Pc)],
    &[(2, F::Pc)],
    &[(1, F::Imm12), (2, F::Pc)],
    &[(2, F::Pc)],
    &[(1, F::Imm12), (2, F::Pc)],
    &[(2, F::Pc)],
    &[(1, F::Imm12), (2, F::Pc)],
    &[(2, F::Pc)],
    &[(1, F::Imm12), (2, F::Pc)],
    &[(2, F::Pc)],
    &[(1, F::Imm12), (2, F::Pc)],
    &[(2, F::Pc)],
    &[(1, F::Imm12), (2, F::Pc)],
    &[(2, F::Pc)],
    &[(1, F::Imm12), (2, F::Pc)],
    &[(2, F::Pc)],
    &[(1, F::Imm12), (2, F::Pc)],
    &[(2, F::Pc)],
    &[(1, F::Imm12), (2, F::Pc)],
    &[(2, F::Pc)],
    &[(1, F::Pc)],
    &[(0, F::Imm22Rb)],
    &[],
    &[(1, F::Imm22Rb)],
    &[(1, F::Pc)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(3, F::Imm22)],
    &[(3, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(3, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(3, F::Imm22)],
    &[(2, F::Imm22)],
    &[(3, F::Imm22)],
    &[(2, F::Imm22)],
    &[(1, F::Imm14Str), (3, F::Imm8Dma)],
    &[(2, F::Imm8Dma)],
    &[(1, F::Imm14Str), (3, F::Imm8Dma)],
    &[(2, F::Imm8Dma)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(3, F::Imm22)],
    &[(3, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(3, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(3, F::Imm22)],
    &[(2, F::Imm22)],
    &[(3, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(3, F::Imm5RbInv)],
    &[(3, F::Imm5RbInv), (5, F::Pc)],
    &[(3, F::Imm5RbInv)],
    &[(3, F::Imm5RbInv), (5, F::Pc)],
    &[(3, F::Imm5RbInv)],
    &[(3, F::Imm5RbInv), (5, F::Pc)],
    &[(3, F::Imm5RbInv)],
    &[(3, F::Imm5RbInv), (5, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(3, F::Imm22)],
    &[(3, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(3, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(3, F::Imm22)],
    &[(2, F::Imm22)],
    &[(2, F::Imm22)],
    &[(3, F::Imm22)],
    &[(2, F::Imm22)],
    &[],
    &[],
    &[],
    &[],
    &[(3, F::Pc)],
    &[(1, F::Imm32)],
    &[(1, F::Imm8), (3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[(1, F::Imm32)],
    &[(1, F::Imm8), (3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[(1, F::Imm32)],
    &[(1, F::Imm8), (3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm12), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(2, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm12), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[(3, F::Pc)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm12), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm24)],
    &[(2, F::Imm12), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32DusRb)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32DusRb)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32ZeroRb)],
    &[(2, F::Imm12), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[],
    &[],
    &[(1, F::Imm24)],
    &[(0, F::Imm4), (2, F::Pc)],
    &[(1, F::Imm4), (3, F::Pc)],
    &[],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[(3, F::Imm5Rb)],
    &[(3, F::Imm5Rb), (5, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm5)],
    &[(2, F::Imm5), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[(1, F::Imm22)],
    &[(1, F::Imm22)],
    &[(1, F::Imm22), (2, F::Imm8Str)],
    &[(1, F::Imm22), (2, F::Imm8Str)],
    &[(1, F::Imm22)],
    &[(1, F::Imm14Str), (2, F::Imm8Dma)],
    &[(1, F::Imm14Str), (3, F::Imm8Dma)],
    &[(2, F::Imm8Dma)],
    &[(1, F::Imm14Str)],
    &[(1, F::Imm14Str), (2, F::Imm16Str)],
    &[(1, F::Imm14Str), (2, F::Imm16Str)],
    &[(1, F::Imm22)],
    &[],
    &[(1, F::Imm14Str)],
    &[(1, F::Imm14Str), (2, F::Imm16Str)],
    &[(1, F::Imm14Str), (2, F::Imm16Str)],
    &[(1, F::Imm22)],
    &[],
    &[],
    &[],
    &[],
    &[(1, F::Pc)],
    &[(1, F::Imm22Rb)],
    &[(1, F::Imm8), (4, F::Pc)],
    &[(1, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(1, F::Imm22Rb)],
    &[(1, F::Imm8), (4, F::Pc)],
    &[(1, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(1, F::Imm32)],
    &[(1, F::Imm22Rb)],
    &[(1, F::Imm8), (4, F::Pc)],
    &[(1, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(1, F::Imm32ZeroRb)],
    &[(1, F::Imm12), (4, F::Pc)],
    &[(1, F::Imm24)],
    &[(2, F::Imm12), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[(4, F::Pc)],
    &[(1, F::Imm22Rb)],
    &[(1, F::Imm8), (4, F::Pc)],
    &[(1, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(1, F::Imm22Rb)],
    &[(1, F::Imm8), (4, F::Pc)],
    &[(1, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(1, F::Imm32)],
    &[(1, F::Imm22Rb)],
    &[(1, F::Imm8), (4, F::Pc)],
    &[(1, F::Imm24)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(1, F::Imm32ZeroRb)],
    &[(1, F::Imm12), (4, F::Pc)],
    &[(1, F::Imm24)],
    &[(2, F::Imm12), (4, F::Pc)],
    &[(2, F::Imm24)],
    &[],
    &[(4, F::Pc)],
    &[],
    &[(3, F::Pc)],
    &[(1, F::Imm14Str)],
    &[(1, F::Imm14Str), (2, F::Imm16Str)],
    &[(1, F::Imm14Str), (2, F::Imm16Str)],
    &[(1, F::Imm22)],
    &[(1, F::Pc)],
    &[],
    &[],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32)],
    &[(2, F::Imm22Rb)],
    &[(2, F::Imm8), (4, F::Pc)],
    &[],
    &[],
    &[(4, F::Pc)],
    &[(2, F::Imm32ZeroRb)],
    &[(2, F::Imm12), (4, F::Pc)],
    &[],
    &[(4, F::Pc)],
];
