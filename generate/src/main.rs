// To regenerate tables, run the following in the repo root:
//
// $ cargo run --manifest-path generate/Cargo.toml

mod classes;
mod output;

use crate::output::Output;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

const PATH: &str = "../src/tables.rs";

fn words(bytes: &[u8]) -> [u32; 8] {
    let mut words = [0u32; 8];
    for &b in bytes {
        words[usize::from(b / 32)] |= 1 << (b % 32);
    }
    words
}

fn main() {
    let classes = classes::classes();

    let mut out = Output::new();
    writeln!(out, "// Generated by generate/src/main.rs. Do not edit.");
    writeln!(out);
    writeln!(out, "use crate::Charmap;");

    for class in &classes {
        if class.bytes.is_empty() || class.bytes.contains(&0) {
            let _ = writeln!(
                io::stderr(),
                "{}: alphabet must be non-empty and must not contain NUL",
                class.name,
            );
            process::exit(1);
        }
        writeln!(out);
        writeln!(out, "/// {}", class.doc);
        writeln!(
            out,
            "pub static {}: Charmap = Charmap::from_words([",
            class.name,
        );
        out.words(&words(&class.bytes));
        writeln!(out, "]);");
    }

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(PATH);
    if let Err(err) = fs::write(&path, out) {
        let _ = writeln!(io::stderr(), "{}: {err}", path.display());
        process::exit(1);
    }
}
