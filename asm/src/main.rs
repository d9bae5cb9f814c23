use arch::mem::MemImage;
use color_print::cformat;
use indexmap::IndexMap;
use qcasm::{emit, error, parser::Line};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input listing
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output stem (defaults to the input path without `.asm`)
    #[clap(short, long)]
    output: Option<String>,

    /// Dump the parsed listing with encodings
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;
    use std::io::BufRead;

    let args: Args = Args::parse();
    println!("QC-1 Assembler");

    println!("1. Read File and Parse Lines");
    println!("  < {}", args.input);
    let file = std::fs::File::open(&args.input)
        .expect(&cformat!("<r,s>Failed to open File</>: {}", args.input));

    let mut lines: Vec<(Line, u8)> = vec![];
    let mut seen: IndexMap<u8, (usize, String)> = IndexMap::new();
    let mut mem = MemImage::new();

    for (idx, raw) in std::io::BufReader::new(file).lines().enumerate() {
        let raw = raw.expect(&cformat!("Failed to read line"));
        let line = match Line::parse(&raw) {
            Ok(Some(line)) => line,
            Ok(None) => continue,
            Err(err) => {
                err.print_diag(&args.input, idx, &raw);
                std::process::exit(1);
            }
        };
        let byte = match line.encode() {
            Ok(byte) => byte,
            Err(err) => {
                err.print_diag(&args.input, idx, &raw);
                std::process::exit(1);
            }
        };

        if let Some((prev_idx, prev_raw)) = seen.insert(line.addr(), (idx, raw.clone())) {
            error::print_warn(
                &format!("Re-defined address: `{}`", line.addr()),
                &args.input,
                idx,
                &raw,
            );
            error::print_note(
                "Already written here. The value has been overridden.",
                &args.input,
                prev_idx,
                &prev_raw,
            );
        }

        mem.set(line.addr(), byte);
        lines.push((line, byte));
    }

    println!("2. Generate Outputs");
    let stem = args
        .output
        .unwrap_or_else(|| args.input.trim_end_matches(".asm").to_string());
    write_out(&stem, ".bin", &mem, |w, m| emit::write_bin(w, m));
    write_out(&stem, ".hex", &mem, |w, m| emit::write_hex(w, m));
    write_out(&stem, ".scanchain.v", &mem, |w, m| emit::write_scan_chain(w, m));
    write_out(&stem, ".caravel.c", &mem, |w, m| emit::write_caravel(w, m));

    if args.dump {
        for (line, byte) in &lines {
            println!("{:08b} | {}", byte, line.cformat());
        }
    }
}

fn write_out(
    stem: &str,
    ext: &str,
    mem: &MemImage,
    f: impl Fn(&mut std::fs::File, &MemImage) -> std::io::Result<()>,
) {
    let path = format!("{stem}{ext}");
    println!("  > {}", path);
    let mut file = std::fs::File::create(&path)
        .expect(&cformat!("<r,s>Failed to create File</>: {}", path));
    f(&mut file, mem).expect(&cformat!("<r,s>Failed to write File</>: {}", path));
}
