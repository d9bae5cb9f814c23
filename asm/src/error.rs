use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Missing `:` between address and instruction")]
    MalformedLine,

    #[error("Invalid address: `{0}`")]
    InvalidAddress(String),

    #[error("Unknown instruction `{mnemonic}` at address {address}")]
    UnknownMnemonic { mnemonic: String, address: u8 },

    #[error("Missing operand for `{0}`")]
    MissingOperand(String),

    #[error("Cannot parse `{0}` as operand of `{1}`")]
    BadOperand(String, String),
}

impl Error {
    /// Print the error with file location and the offending line.
    /// `line_idx` is 0-based, displayed 1-based.
    pub fn print_diag(&self, file: &str, line_idx: usize, raw: &str) {
        cprintln!("<red,bold>error</>: {}", self);
        print_loc(file, line_idx, raw);
    }
}

/// Warning diagnostic in the same shape as errors.
pub fn print_warn(msg: &str, file: &str, line_idx: usize, raw: &str) {
    cprintln!("<yellow,bold>warn</>: {}", msg);
    print_loc(file, line_idx, raw);
}

/// Follow-up note pointing at an earlier line.
pub fn print_note(msg: &str, file: &str, line_idx: usize, raw: &str) {
    cprintln!("<green,bold>note</>: {}", msg);
    print_loc(file, line_idx, raw);
}

fn print_loc(file: &str, line_idx: usize, raw: &str) {
    let line_num = line_idx + 1;
    cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
    cprintln!("      <blue>|</>");
    cprintln!(" <blue>{:>4} |</> {}", line_num, raw);
    cprintln!("      <blue>|</>");
}
