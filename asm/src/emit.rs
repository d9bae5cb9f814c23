//! Output projections over the assembled image.
//!
//! Four formats, all derived read-only from the same [`MemImage`]:
//! binary text, hex text, a Verilog scan-chain patch, and a packed C
//! array for the Caravel harness.

use arch::mem::{MemImage, MEM_SIZE};
use std::io::{self, Write};

/// `<2-digit-hex-addr>: <8-bit-binary-value>` per address.
pub fn write_bin(w: &mut impl Write, mem: &MemImage) -> io::Result<()> {
    for (addr, val) in mem.iter() {
        writeln!(w, "{:02x}: {:08b}", addr, val)?;
    }
    Ok(())
}

/// `<2-digit-hex-addr>: <2-digit-hex-value>` per address.
pub fn write_hex(w: &mut impl Write, mem: &MemImage) -> io::Result<()> {
    for (addr, val) in mem.iter() {
        writeln!(w, "{:02x}: {:02x}", addr, val)?;
    }
    Ok(())
}

/// One scan-chain assignment per non-zero byte.
pub fn write_scan_chain(w: &mut impl Write, mem: &MemImage) -> io::Result<()> {
    for (addr, val) in mem.iter() {
        if val != 0 {
            writeln!(
                w,
                "scan_chain[SCAN_MEM0_INDEX + {}*8 +: 8] = 8'b{:08b};",
                addr, val
            )?;
        }
    }
    Ok(())
}

/// C initializer for the Caravel harness: the 256 bytes packed four per
/// 32-bit word, highest address first, then the three fixed words that
/// preset the auxiliary hardware registers (I/O low byte 0xFF, control
/// unit bits 0b010).
pub fn write_caravel(w: &mut impl Write, mem: &MemImage) -> io::Result<()> {
    let bytes = mem.bytes();
    writeln!(w, "uint32_t program[] = {{")?;
    for hi in (0..MEM_SIZE).rev().step_by(4) {
        writeln!(
            w,
            "\t0x{:02x}{:02x}{:02x}{:02x},//MEM[{}:{}]",
            bytes[hi],
            bytes[hi - 1],
            bytes[hi - 2],
            bytes[hi - 3],
            hi,
            hi - 3
        )?;
    }
    writeln!(
        w,
        "\t0b00000000000000000000000000000000, //TEMP, STATUS_CTRL, CNT_H, CNT_L"
    )?;
    writeln!(
        w,
        "\t0b00000000000000000000000011111111, //IO_OUT, IO_IN, SEG_EXE_H, SEG_EXE_L"
    )?;
    writeln!(
        w,
        "\t0b00000000000000000000000000000010, //ACC, IR, PC, SEG[4 bit], CU[3 bit]"
    )?;
    write!(w, "}};")?;
    Ok(())
}

// ----------------------------------------------------------------------------
