//! `json-checksum`: print the CRC-32 of stdin as lowercase hex.
//!
//! Usage:
//!   json-checksum < document.json
//!
//! The bytes are hashed exactly as read; no JSON normalization happens.

use std::io::{self, Read};

use jsonsync::json_cli::{checksum, init_logging};

fn main() {
    if let Err(e) = init_logging(false) {
        eprintln!("{e}");
    }

    let mut buf = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match checksum(&buf) {
        Ok(sum) => println!("{sum}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
