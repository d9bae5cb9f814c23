use color_print::cformat;
use strum::{Display, EnumString};

// ----------------------------------------------------------------------------
// Operand field

/// Bit layout of the operand field that follows an opcode prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// No operand bits. A spurious operand token is ignored.
    None,
    /// 4-bit unsigned operand (memory address or immediate).
    Uimm4,
    /// 3-bit unsigned operand (CSR index).
    Uimm3,
    /// Branch offset: 1 sign bit + 3-bit magnitude (sign-magnitude,
    /// not two's complement).
    Branch3,
    /// Raw literal byte stored as-is, no opcode prefix.
    Data,
}

// ----------------------------------------------------------------------------
// Operation

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[allow(non_camel_case_types)]
pub enum OpKind {
    LDA,
    STA,
    ADD,
    SUB,
    AND,
    OR,
    XOR,
    ADDI,
    LUI,
    SETSEG,
    CSR,
    CSW,
    BEQ,
    BNE,
    BRA,
    JMP,
    JSR,
    SHL,
    SHR,
    ROL,
    ROR,
    LDAR,
    SETSEG_ACC,
    DEC,
    CLR,
    INV,
    HLT,
    DATA,
}

impl OpKind {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_uppercase().parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Undefined Op: {s}")),
        }
    }

    /// Opcode prefix bits and their width. `DATA` has no prefix.
    pub fn prefix(&self) -> (u8, u32) {
        use OpKind::*;
        match self {
            LDA => (0b0000, 4),
            STA => (0b0001, 4),
            ADD => (0b0010, 4),
            SUB => (0b0011, 4),
            AND => (0b0100, 4),
            OR => (0b0101, 4),
            XOR => (0b0110, 4),
            ADDI => (0b1000, 4),
            LUI => (0b1001, 4),
            SETSEG => (0b1010, 4),
            CSR => (0b10110, 5),
            CSW => (0b10111, 5),
            BEQ => (0b1100, 4),
            BNE => (0b1101, 4),
            BRA => (0b1110, 4),
            JMP => (0b11110000, 8),
            JSR => (0b11110001, 8),
            SHL => (0b11110110, 8),
            SHR => (0b11110111, 8),
            ROL => (0b11111000, 8),
            ROR => (0b11111001, 8),
            LDAR => (0b11111010, 8),
            SETSEG_ACC => (0b11111011, 8),
            DEC => (0b11111100, 8),
            CLR => (0b11111101, 8),
            INV => (0b11111110, 8),
            HLT => (0b11111111, 8),
            DATA => (0, 0),
        }
    }

    pub fn field(&self) -> Field {
        use OpKind::*;
        match self {
            LDA | STA | ADD | SUB | AND | OR | XOR | ADDI | LUI | SETSEG => Field::Uimm4,
            CSR | CSW => Field::Uimm3,
            BEQ | BNE | BRA => Field::Branch3,
            JMP | JSR | SHL | SHR | ROL | ROR | LDAR | SETSEG_ACC | DEC | CLR | INV | HLT => {
                Field::None
            }
            DATA => Field::Data,
        }
    }

    /// Pack prefix and operand field into the final byte.
    ///
    /// Operands are masked to the field width; out-of-range values
    /// truncate instead of widening the byte. `DATA` stores the literal
    /// mod 256 and is the only kind that requires an operand: `None` is
    /// returned when it is missing.
    pub fn encode(&self, operand: Option<i32>) -> Option<u8> {
        if let Field::Data = self.field() {
            return operand.map(|v| v as u8);
        }
        let (prefix, _) = self.prefix();
        let byte = match (self.field(), operand) {
            // Without an operand token the prefix bits alone are the
            // byte, unshifted.
            (_, None) | (Field::None, _) => prefix,
            (Field::Uimm4, Some(v)) => prefix << 4 | (v as u8 & 0xF),
            (Field::Uimm3, Some(v)) => prefix << 3 | (v as u8 & 0x7),
            (Field::Branch3, Some(v)) => {
                let sign = if v < 0 { 1 } else { 0 };
                prefix << 4 | sign << 3 | (v.unsigned_abs() as u8 & 0x7)
            }
            (Field::Data, _) => unreachable!(),
        };
        Some(byte)
    }
}

impl OpKind {
    pub fn cformat(&self, operand: Option<i32>) -> String {
        match operand {
            Some(v) => cformat!("<red>{:<11}</><yellow>{}</>", self.to_string(), v),
            None => cformat!("<red>{}</>", self),
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_encode {
        ($($name:ident: $op:ident, $operand:expr => $byte:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(OpKind::$op.encode($operand), Some($byte));
                }
            )*
        }
    }

    test_encode! {
        test_lda: LDA, Some(3) => 0b0000_0011,
        test_sta: STA, Some(5) => 0b0001_0101,
        test_add: ADD, Some(4) => 0b0010_0100,
        test_sub: SUB, Some(15) => 0b0011_1111,
        test_xor: XOR, Some(0) => 0b0110_0000,
        test_addi: ADDI, Some(7) => 0b1000_0111,
        test_csr: CSR, Some(3) => 0b10110_011,
        test_csw: CSW, Some(7) => 0b10111_111,
        test_beq_back: BEQ, Some(-1) => 0b1100_1001,
        test_bne_fwd: BNE, Some(2) => 0b1101_0010,
        test_bra_back: BRA, Some(-3) => 0b1110_1011,
        test_bra_fwd: BRA, Some(3) => 0b1110_0011,
        test_bra_zero: BRA, Some(0) => 0b1110_0000,
        test_jmp: JMP, None => 0b11110000,
        test_hlt: HLT, None => 0b11111111,
        test_hlt_spurious: HLT, Some(9) => 0b11111111,
        test_clr: CLR, None => 0b11111101,
        // No operand token: the unshifted prefix is the byte.
        test_sta_bare: STA, None => 0b0001,
        test_data: DATA, Some(10) => 10,
        test_data_wrap: DATA, Some(300) => 44,
        test_data_neg: DATA, Some(-1) => 255,
    }

    #[test]
    fn test_data_requires_operand() {
        assert_eq!(OpKind::DATA.encode(None), None);
    }

    #[test]
    fn test_operand_masked_to_field() {
        // ADD 20: only the low 4 bits of the operand survive.
        assert_eq!(OpKind::ADD.encode(Some(20)), Some(0b0010_0100));
        // BRA -9: magnitude masked to 3 bits, sign kept.
        assert_eq!(OpKind::BRA.encode(Some(-9)), Some(0b1110_1001));
    }

    #[test]
    fn test_parse() {
        assert_eq!(OpKind::parse("lda"), Ok(OpKind::LDA));
        assert_eq!(OpKind::parse("setseg_acc"), Ok(OpKind::SETSEG_ACC));
        assert_eq!(OpKind::parse("DATA"), Ok(OpKind::DATA));
        assert!(OpKind::parse("hoge").is_err());
    }
}
