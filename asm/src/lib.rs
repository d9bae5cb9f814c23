pub mod emit;
pub mod error;
pub mod parser;

pub use error::Error;

use arch::mem::MemImage;
use parser::Line;

/// Assemble an ordered listing into the 256-byte memory image.
///
/// Each line is `<addr>: <MNEMONIC> [<operand>]` with an optional `;`
/// comment; blank and comment-only lines are skipped. The first error
/// aborts the whole run, no partial image is returned. A later line at
/// an already-written address overwrites the earlier byte.
pub fn assemble<S: AsRef<str>>(lines: &[S]) -> Result<MemImage, Error> {
    let mut mem = MemImage::new();
    for raw in lines {
        if let Some(line) = Line::parse(raw.as_ref())? {
            mem.set(line.addr(), line.encode()?);
        }
    }
    Ok(mem)
}
