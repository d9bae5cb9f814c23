use arch::op::OpKind;
use color_print::cformat;
use std::num::ParseIntError;

use crate::error::Error;

/// One parsed listing line: `<addr>: <MNEMONIC> [<operand>]`.
///
/// Addresses are absolute numeric literals, so there is no label table
/// and no second pass; each line parses and encodes on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    addr: u8,
    op: OpKind,
    operand: Option<i32>,
}

impl Line {
    /// Parse one raw listing line. A trailing `;` comment is stripped
    /// first; a line that is blank after stripping yields `Ok(None)`.
    pub fn parse(raw: &str) -> Result<Option<Line>, Error> {
        let code = match raw.split_once(';') {
            Some((code, _comment)) => code,
            None => raw,
        };
        let code = code.trim();
        if code.is_empty() {
            return Ok(None);
        }

        let (addr, inst) = code.split_once(':').ok_or(Error::MalformedLine)?;
        let addr = addr.trim();
        let addr: u8 = parse_uint(addr)
            .ok()
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| Error::InvalidAddress(addr.to_string()))?;

        let mut words = inst.split_whitespace();
        let mnemonic = words.next().ok_or(Error::MalformedLine)?;
        let op = OpKind::parse(mnemonic).map_err(|_| Error::UnknownMnemonic {
            mnemonic: mnemonic.to_uppercase(),
            address: addr,
        })?;

        let operand = match words.next() {
            Some(w) => Some(
                parse_int(w).map_err(|_| Error::BadOperand(w.to_string(), op.to_string()))?,
            ),
            None => None,
        };

        Ok(Some(Line { addr, op, operand }))
    }

    pub fn addr(&self) -> u8 {
        self.addr
    }

    pub fn op(&self) -> OpKind {
        self.op
    }

    /// Final image byte for this line.
    pub fn encode(&self) -> Result<u8, Error> {
        self.op
            .encode(self.operand)
            .ok_or_else(|| Error::MissingOperand(self.op.to_string()))
    }

    pub fn cformat(&self) -> String {
        cformat!("<green>{:>3}:</> {}", self.addr, self.op.cformat(self.operand))
    }
}

// ----------------------------------------------------------------------------

fn parse_uint(s: &str) -> Result<u32, ParseIntError> {
    if s.len() < 2 {
        u32::from_str_radix(s, 10)
    } else {
        let (prefix, num) = s.split_at(2);
        match prefix {
            "0b" => u32::from_str_radix(num, 2),
            "0o" => u32::from_str_radix(num, 8),
            "0x" => u32::from_str_radix(num, 16),
            _ => u32::from_str_radix(s, 10),
        }
    }
}

fn parse_int(s: &str) -> Result<i32, ParseIntError> {
    match s.strip_prefix('-') {
        Some(mag) => parse_uint(mag).map(|v| -(v as i32)),
        None => parse_uint(s).map(|v| v as i32),
    }
}

// ----------------------------------------------------------------------------
