//! `json-patch`: apply a patch to a document.
//!
//! Usage:
//!   json-patch '<patch-array-json>'
//!
//! The document is read from stdin. Both elementary and `merge` operations
//! are accepted.

use std::io::{self, Read, Write};

use jsonsync::json_cli::{apply_json_patch, init_logging};

fn main() {
    let patch = match std::env::args().nth(1) {
        Some(p) => p,
        None => {
            eprintln!("First argument must be a JSON patch array.");
            std::process::exit(1);
        }
    };
    if let Err(e) = init_logging(false) {
        eprintln!("{e}");
    }

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match apply_json_patch(buf.trim(), &patch) {
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
