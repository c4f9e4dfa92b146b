//! `json-diff`: print the patch that turns a source document into a target.
//!
//! Usage:
//!   json-diff [--optimize] [--verbose] '<source-json>'
//!
//! The target document is read from stdin. With `--optimize`, sibling field
//! changes are folded into `merge` operations.

use std::io::{self, Read, Write};

use jsonsync::json_cli::{diff_json, init_logging};

fn main() {
    let mut optimize = false;
    let mut verbose = false;
    let mut source = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--optimize" => optimize = true,
            "--verbose" => verbose = true,
            _ if source.is_none() => source = Some(arg),
            _ => {
                eprintln!("Unexpected argument: {arg}");
                std::process::exit(1);
            }
        }
    }
    let Some(source) = source else {
        eprintln!("First argument must be the source JSON document.");
        std::process::exit(1);
    };
    if let Err(e) = init_logging(verbose) {
        eprintln!("{e}");
    }

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match diff_json(&source, buf.trim(), optimize) {
        Ok(result) => {
            if let Err(e) = writeln!(io::stdout(), "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
