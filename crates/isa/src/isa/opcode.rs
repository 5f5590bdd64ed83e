//! Concrete instruction opcodes.
//!
//! Generated from the architecture database; do not edit by hand. Variant
//! names follow the database convention: the mnemonic plus an operand
//! signature suffix (`r` register, `i` immediate, `c` condition, `z` zero
//! sink, `s`/`u` signed/unsigned extension).
#![allow(non_camel_case_types)]
#![allow(missing_docs)]

/// Every concrete instruction variant known to the encoder.
///
/// This is the index key for the generated dispatch tables: the
/// operand-to-fixup map and the opcode-to-condition-class map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Opcode {
    ACQUIRE2ci, ADDC_Srric, ADDC_Srrici, ADDC_Srrif, ADDC_Srrr, ADDC_Srrrc, ADDC_Srrrci,
    ADDC_Urric, ADDC_Urrici, ADDC_Urrif, ADDC_Urrr, ADDC_Urrrc, ADDC_Urrrci, ADDCrri, ADDCrric,
    ADDCrrici, ADDCrrif, ADDCrrr, ADDCrrrc, ADDCrrrci, ADDCzri, ADDCzrici, ADDCzrif, ADDCzrr,
    ADDCzrrci, ADD_Srri, ADD_Srric, ADD_Srrici, ADD_Srrif, ADD_Srrr, ADD_Srrrc, ADD_Srrrci,
    ADD_Urri, ADD_Urric, ADD_Urrici, ADD_Urrif, ADD_Urrr, ADD_Urrrc, ADD_Urrrci, ADDrri, ADDrric,
    ADDrrici, ADDrrif, ADDrrr, ADDrrrc, ADDrrrci, ADDzri, ADDzrici, ADDzrif, ADDzrr, ADDzrrci,
    ANDN_Srri, ANDN_Srric, ANDN_Srrici, ANDN_Srrr, ANDN_Srrrc, ANDN_Srrrci, ANDN_Urri, ANDN_Urric,
    ANDN_Urrici, ANDN_Urrr, ANDN_Urrrc, ANDN_Urrrci, ANDNrri, ANDNrric, ANDNrrici, ANDNrrr,
    ANDNrrrc, ANDNrrrci, ANDNzri, ANDNzrici, ANDNzrr, ANDNzrrci, AND_Srri, AND_Srric, AND_Srrici,
    AND_Srrr, AND_Srrrc, AND_Srrrci, AND_Urri, AND_Urric, AND_Urrici, AND_Urrr, AND_Urrrc,
    AND_Urrrci, ANDrri, ANDrric, ANDrrici, ANDrrr, ANDrrrc, ANDrrrci, ANDzri, ANDzrici, ANDzrr,
    ANDzrrci, ASR_Srri, ASR_Srric, ASR_Srrici, ASR_Srrr, ASR_Srrrc, ASR_Srrrci, ASR_Urri,
    ASR_Urric, ASR_Urrici, ASR_Urrr, ASR_Urrrc, ASR_Urrrci, ASRrri, ASRrric, ASRrrici, ASRrrr,
    ASRrrrc, ASRrrrci, ASRzri, ASRzrici, ASRzrr, ASRzrrci, BITSWAP_Srr, BITSWAP_Srrci,
    BITSWAP_Urr, BITSWAP_Urrci, BITSWAPrr, BITSWAPrrci, BITSWAPzr, BITSWAPzrci, BKP, BOOT_MASKri,
    BOOT_STOPici, BOOTrici, BYTESWAP_Srr, BYTESWAP_Srrci, BYTESWAP_Urr, BYTESWAP_Urrci,
    BYTESWAPrr, BYTESWAPrrci, BYTESWAPzr, BYTESWAPzrci, CALLri, CALLrr, CALLrri, CALLrrr, CALLzri,
    CALLzrr, CAO_Srr, CAO_Srrci, CAO_Urr, CAO_Urrci, CAOrr, CAOrrci, CAOzr, CAOzrci,
    CLEAR_COUNT_ALLr, CLEAR_COUNT_MASKr, CLEAR_COUNTr, CLEAR_TIMEr, CLO_Srr, CLO_Srrci, CLO_Urr,
    CLO_Urrci, CLOrr, CLOrrci, CLOzr, CLOzrci, CLS_Srr, CLS_Srrci, CLS_Urr, CLS_Urrci, CLSrr,
    CLSrrci, CLSzr, CLSzrci, CLZ_Srr, CLZ_Srrci, CLZ_Urr, CLZ_Urrci, CLZrr, CLZrrci, CLZzr,
    CLZzrci, CMPB4_Srrr, CMPB4_Srrrci, CMPB4_Urrr, CMPB4_Urrrci, CMPB4rrr, CMPB4rrrci, CMPB4zrr,
    CMPB4zrrci, DIV_STEPrrri, DIV_STEPrrrici, EXTSB_Srr, EXTSB_Srrci, EXTSBrr, EXTSBrrci, EXTSBzr,
    EXTSBzrci, EXTSH_Srr, EXTSH_Srrci, EXTSHrr, EXTSHrrci, EXTSHzr, EXTSHzrci, EXTUB_Urr,
    EXTUB_Urrci, EXTUBrr, EXTUBrrci, EXTUBzr, EXTUBzrci, EXTUH_Urr, EXTUH_Urrci, EXTUHrr,
    EXTUHrrci, EXTUHzr, EXTUHzrci, FAULTi, GET_COUNTr, GET_FLAGSrci, GET_SYSTEMr, GET_TIMEr,
    HASH_Srri, HASH_Srrici, HASH_Srrr, HASH_Srrrci, HASH_Urri, HASH_Urrici, HASH_Urrr,
    HASH_Urrrci, HASHrri, HASHrrici, HASHrrr, HASHrrrci, HASHzri, HASHzrici, HASHzrr, HASHzrrci,
    JEQrii, JEQrri, JGESrii, JGESrri, JGEUrii, JGEUrri, JGTSrii, JGTSrri, JGTUrii, JGTUrri,
    JLESrii, JLESrri, JLEUrii, JLEUrri, JLTSrii, JLTSrri, JLTUrii, JLTUrri, JNEQrii, JNEQrri,
    JNZri, JUMPi, JUMPr, JUMPri, JZri, LBS_Srri, LBSrri, LBU_ADDrrri, LBU_ANDrrri, LBU_DECrki,
    LBU_DECrri, LBU_INCrki, LBU_INCrri, LBU_ORrrri, LBU_SETSrki, LBU_SETSrri, LBU_SWAPrrri,
    LBU_Urri, LBU_XORrrri, LBUrri, LDMAIriri, LDMAIrri, LDMAriri, LDMArri, LDrri, LHS_Srri,
    LHSrri, LHU_ADDrrri, LHU_ANDrrri, LHU_DECrki, LHU_DECrri, LHU_INCrki, LHU_INCrri, LHU_ORrrri,
    LHU_SETSrki, LHU_SETSrri, LHU_SWAPrrri, LHU_Urri, LHU_XORrrri, LHUrri, LSL1X_Srri,
    LSL1X_Srric, LSL1X_Srrici, LSL1X_Srrr, LSL1X_Srrrc, LSL1X_Srrrci, LSL1X_Urri, LSL1X_Urric,
    LSL1X_Urrici, LSL1X_Urrr, LSL1X_Urrrc, LSL1X_Urrrci, LSL1Xrri, LSL1Xrric, LSL1Xrrici,
    LSL1Xrrr, LSL1Xrrrc, LSL1Xrrrci, LSL1Xzri, LSL1Xzrici, LSL1Xzrr, LSL1Xzrrci, LSL1_Srri,
    LSL1_Srric, LSL1_Srrici, LSL1_Srrr, LSL1_Srrrc, LSL1_Srrrci, LSL1_Urri, LSL1_Urric,
    LSL1_Urrici, LSL1_Urrr, LSL1_Urrrc, LSL1_Urrrci, LSL1rri, LSL1rric, LSL1rrici, LSL1rrr,
    LSL1rrrc, LSL1rrrci, LSL1zri, LSL1zrici, LSL1zrr, LSL1zrrci, LSLX_Srri, LSLX_Srric,
    LSLX_Srrici, LSLX_Srrr, LSLX_Srrrc, LSLX_Srrrci, LSLX_Urri, LSLX_Urric, LSLX_Urrici,
    LSLX_Urrr, LSLX_Urrrc, LSLX_Urrrci, LSLXrri, LSLXrric, LSLXrrici, LSLXrrr, LSLXrrrc,
    LSLXrrrci, LSLXzri, LSLXzrici, LSLXzrr, LSLXzrrci, LSL_ADD_Srrri, LSL_ADD_Srrrici,
    LSL_ADD_Urrri, LSL_ADD_Urrrici, LSL_ADDrrri, LSL_ADDrrrici, LSL_ADDzrri, LSL_ADDzrrici,
    LSL_SUB_Srrri, LSL_SUB_Srrrici, LSL_SUB_Urrri, LSL_SUB_Urrrici, LSL_SUBrrri, LSL_SUBrrrici,
    LSL_SUBzrri, LSL_SUBzrrici, LSL_Srri, LSL_Srric, LSL_Srrici, LSL_Srrr, LSL_Srrrc, LSL_Srrrci,
    LSL_Urri, LSL_Urric, LSL_Urrici, LSL_Urrr, LSL_Urrrc, LSL_Urrrci, LSLrri, LSLrric, LSLrrici,
    LSLrrr, LSLrrrc, LSLrrrci, LSLzri, LSLzrici, LSLzrr, LSLzrrci, LSR1X_Srri, LSR1X_Srric,
    LSR1X_Srrici, LSR1X_Srrr, LSR1X_Srrrc, LSR1X_Srrrci, LSR1X_Urri, LSR1X_Urric, LSR1X_Urrici,
    LSR1X_Urrr, LSR1X_Urrrc, LSR1X_Urrrci, LSR1Xrri, LSR1Xrric, LSR1Xrrici, LSR1Xrrr, LSR1Xrrrc,
    LSR1Xrrrci, LSR1Xzri, LSR1Xzrici, LSR1Xzrr, LSR1Xzrrci, LSR1_Srri, LSR1_Srric, LSR1_Srrici,
    LSR1_Srrr, LSR1_Srrrc, LSR1_Srrrci, LSR1_Urri, LSR1_Urric, LSR1_Urrici, LSR1_Urrr, LSR1_Urrrc,
    LSR1_Urrrci, LSR1rri, LSR1rric, LSR1rrici, LSR1rrr, LSR1rrrc, LSR1rrrci, LSR1zri, LSR1zrici,
    LSR1zrr, LSR1zrrci, LSRX_Srri, LSRX_Srric, LSRX_Srrici, LSRX_Srrr, LSRX_Srrrc, LSRX_Srrrci,
    LSRX_Urri, LSRX_Urric, LSRX_Urrici, LSRX_Urrr, LSRX_Urrrc, LSRX_Urrrci, LSRXrri, LSRXrric,
    LSRXrrici, LSRXrrr, LSRXrrrc, LSRXrrrci, LSRXzri, LSRXzrici, LSRXzrr, LSRXzrrci,
    LSR_ADD_Srrri, LSR_ADD_Srrrici, LSR_ADD_Urrri, LSR_ADD_Urrrici, LSR_ADDrrri, LSR_ADDrrrici,
    LSR_ADDzrri, LSR_ADDzrrici, LSR_Srri, LSR_Srric, LSR_Srrici, LSR_Srrr, LSR_Srrrc, LSR_Srrrci,
    LSR_Urri, LSR_Urric, LSR_Urrici, LSR_Urrr, LSR_Urrrc, LSR_Urrrci, LSRrri, LSRrric, LSRrrici,
    LSRrrr, LSRrrrc, LSRrrrci, LSRzri, LSRzrici, LSRzrr, LSRzrrci, LW_ADDrrri, LW_ANDrrri,
    LW_DECrki, LW_DECrri, LW_INCrki, LW_INCrri, LW_ORrrri, LW_SETSrki, LW_SETSrri, LW_SWAPrrri,
    LW_Srri, LW_Urri, LW_XORrrri, LWrri, MAIL1ric, MAIL2ic, MERGErrric, MOVDrr, MOVDrrci,
    MOVE_Sri, MOVE_Srici, MOVE_Srr, MOVE_Srrci, MOVE_Uri, MOVE_Urici, MOVE_Urr, MOVE_Urrci,
    MOVEri, MOVErici, MOVErr, MOVErrci, MUL_SH_SH_Srrr, MUL_SH_SH_Srrrci, MUL_SH_SHrrr,
    MUL_SH_SHrrrci, MUL_SH_SHzrr, MUL_SH_SHzrrci, MUL_SH_SL_Srrr, MUL_SH_SL_Srrrci, MUL_SH_SLrrr,
    MUL_SH_SLrrrci, MUL_SH_SLzrr, MUL_SH_SLzrrci, MUL_SH_UH_Srrr, MUL_SH_UH_Srrrci, MUL_SH_UHrrr,
    MUL_SH_UHrrrci, MUL_SH_UHzrr, MUL_SH_UHzrrci, MUL_SH_UL_Srrr, MUL_SH_UL_Srrrci, MUL_SH_ULrrr,
    MUL_SH_ULrrrci, MUL_SH_ULzrr, MUL_SH_ULzrrci, MUL_SL_SH_Srrr, MUL_SL_SH_Srrrci, MUL_SL_SHrrr,
    MUL_SL_SHrrrci, MUL_SL_SHzrr, MUL_SL_SHzrrci, MUL_SL_SL_Srrr, MUL_SL_SL_Srrrci, MUL_SL_SLrrr,
    MUL_SL_SLrrrci, MUL_SL_SLzrr, MUL_SL_SLzrrci, MUL_SL_UH_Srrr, MUL_SL_UH_Srrrci, MUL_SL_UHrrr,
    MUL_SL_UHrrrci, MUL_SL_UHzrr, MUL_SL_UHzrrci, MUL_SL_UL_Srrr, MUL_SL_UL_Srrrci, MUL_SL_ULrrr,
    MUL_SL_ULrrrci, MUL_SL_ULzrr, MUL_SL_ULzrrci, MUL_STEPrrri, MUL_STEPrrrici, MUL_UH_UH_Urrr,
    MUL_UH_UH_Urrrci, MUL_UH_UHrrr, MUL_UH_UHrrrci, MUL_UH_UHzrr, MUL_UH_UHzrrci, MUL_UH_UL_Urrr,
    MUL_UH_UL_Urrrci, MUL_UH_ULrrr, MUL_UH_ULrrrci, MUL_UH_ULzrr, MUL_UH_ULzrrci, MUL_UL_UH_Urrr,
    MUL_UL_UH_Urrrci, MUL_UL_UHrrr, MUL_UL_UHrrrci, MUL_UL_UHzrr, MUL_UL_UHzrrci, MUL_UL_UL_Urrr,
    MUL_UL_UL_Urrrci, MUL_UL_ULrrr, MUL_UL_ULrrrci, MUL_UL_ULzrr, MUL_UL_ULzrrci, NAND_Srri,
    NAND_Srric, NAND_Srrici, NAND_Srrr, NAND_Srrrc, NAND_Srrrci, NAND_Urri, NAND_Urric,
    NAND_Urrici, NAND_Urrr, NAND_Urrrc, NAND_Urrrci, NANDrri, NANDrric, NANDrrici, NANDrrr,
    NANDrrrc, NANDrrrci, NANDzri, NANDzrici, NANDzrr, NANDzrrci, NEGrr, NEGrrci, NOP, NOR_Srri,
    NOR_Srric, NOR_Srrici, NOR_Srrr, NOR_Srrrc, NOR_Srrrci, NOR_Urri, NOR_Urric, NOR_Urrici,
    NOR_Urrr, NOR_Urrrc, NOR_Urrrci, NORrri, NORrric, NORrrici, NORrrr, NORrrrc, NORrrrci, NORzri,
    NORzrici, NORzrr, NORzrrci, NOTrr, NOTrrci, NOTzrci, NXOR_Srric, NXOR_Srrici, NXOR_Srrr,
    NXOR_Srrrc, NXOR_Srrrci, NXOR_Urric, NXOR_Urrici, NXOR_Urrr, NXOR_Urrrc, NXOR_Urrrci,
    NXORrric, NXORrrici, NXORrrr, NXORrrrc, NXORrrrci, NXORzrici, NXORzrr, NXORzrrci, ORN_Srri,
    ORN_Srric, ORN_Srrici, ORN_Srrr, ORN_Srrrc, ORN_Srrrci, ORN_Urri, ORN_Urric, ORN_Urrici,
    ORN_Urrr, ORN_Urrrc, ORN_Urrrci, ORNrri, ORNrric, ORNrrici, ORNrrr, ORNrrrc, ORNrrrci, ORNzri,
    ORNzrici, ORNzrr, ORNzrrci, OR_Srri, OR_Srric, OR_Srrici, OR_Srrr, OR_Srrrc, OR_Srrrci,
    OR_Urri, OR_Urric, OR_Urrici, OR_Urrr, OR_Urrrc, OR_Urrrci, ORrri, ORrric, ORrrici, ORrrr,
    ORrrrc, ORrrrci, ORzri, ORzrici, ORzrr, ORzrrci, PERF_INT_OFFr, PERF_INT_ONr, RELEASE2ci,
    RESUME_MASKri, RESUME_STOPici, RESUMErici, RETI, ROL_ADD_Srrri, ROL_ADD_Srrrici,
    ROL_ADD_Urrri, ROL_ADD_Urrrici, ROL_ADDrrri, ROL_ADDrrrici, ROL_ADDzrri, ROL_ADDzrrici,
    ROL_Srri, ROL_Srric, ROL_Srrici, ROL_Srrr, ROL_Srrrc, ROL_Srrrci, ROL_Urri, ROL_Urric,
    ROL_Urrici, ROL_Urrr, ROL_Urrrc, ROL_Urrrci, ROLrri, ROLrric, ROLrrici, ROLrrr, ROLrrrc,
    ROLrrrci, ROLzri, ROLzrici, ROLzrr, ROLzrrci, ROR_Srri, ROR_Srric, ROR_Srrici, ROR_Srrr,
    ROR_Srrrc, ROR_Srrrci, ROR_Urri, ROR_Urric, ROR_Urrici, ROR_Urrr, ROR_Urrrc, ROR_Urrrci,
    RORrri, RORrric, RORrrici, RORrrr, RORrrrc, RORrrrci, RORzri, RORzrici, RORzrr, RORzrrci,
    RSUBC_Srrr, RSUBC_Srrrc, RSUBC_Srrrci, RSUBC_Urrr, RSUBC_Urrrc, RSUBC_Urrrci, RSUBCrrr,
    RSUBCrrrc, RSUBCrrrci, RSUBCzrr, RSUBCzrrci, RSUB_Srrr, RSUB_Srrrc, RSUB_Srrrci, RSUB_Urrr,
    RSUB_Urrrc, RSUB_Urrrci, RSUBrrr, RSUBrrrc, RSUBrrrci, RSUBzrr, RSUBzrrci, SATS_Srr,
    SATS_Srrci, SATS_Urr, SATS_Urrci, SATSrr, SATSrrci, SATSzr, SATSzrci, SB4rir, SB_IDri,
    SB_IDrii, SBrii, SBrir, SDMAI4Brii, SDMAriri, SDMArri, SD_IDri, SD_IDrii, SDrii, SDrir,
    SET_FLAGSr, SH_IDri, SH_IDrii, SHrii, SHrir, START_COUNTr, START_TIMEr, STOP_COUNTr,
    STOP_TIMEr, STOPci, SUBC_Srirc, SUBC_Srirci, SUBC_Srirf, SUBC_Srric, SUBC_Srrici, SUBC_Srrif,
    SUBC_Srrr, SUBC_Srrrc, SUBC_Srrrci, SUBC_Urirc, SUBC_Urirci, SUBC_Urirf, SUBC_Urric,
    SUBC_Urrici, SUBC_Urrif, SUBC_Urrr, SUBC_Urrrc, SUBC_Urrrci, SUBCrir, SUBCrirc, SUBCrirci,
    SUBCrirf, SUBCrric, SUBCrrici, SUBCrrif, SUBCrrr, SUBCrrrc, SUBCrrrci, SUBCzir, SUBCzirci,
    SUBCzirf, SUBCzrici, SUBCzrif, SUBCzrr, SUBCzrrci, SUB_Srirc, SUB_Srirci, SUB_Srirf,
    SUB_Srric, SUB_Srrici, SUB_Srrif, SUB_Srrr, SUB_Srrrc, SUB_Srrrci, SUB_Urirc, SUB_Urirci,
    SUB_Urirf, SUB_Urric, SUB_Urrici, SUB_Urrif, SUB_Urrr, SUB_Urrrc, SUB_Urrrci, SUBrir, SUBrirc,
    SUBrirci, SUBrirf, SUBrric, SUBrrici, SUBrrif, SUBrrr, SUBrrrc, SUBrrrci, SUBzir, SUBzirci,
    SUBzirf, SUBzrici, SUBzrif, SUBzrr, SUBzrrci, SWAPDrr, SWAPDrrci, SW_IDri, SW_IDrii, SWrii,
    SWrir, TELLri, UCODE1ric, UCODE2ic, XOR_Srric, XOR_Srrici, XOR_Srrr, XOR_Srrrc, XOR_Srrrci,
    XOR_Urric, XOR_Urrici, XOR_Urrr, XOR_Urrrc, XOR_Urrrci, XORrri, XORrric, XORrrici, XORrrr,
    XORrrrc, XORrrrci, XORzri, XORzrici, XORzrr, XORzrrci,
}

impl Opcode {
    /// Number of concrete instruction variants.
    pub const COUNT: usize = 921;

    /// Dense table index for this opcode.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}
