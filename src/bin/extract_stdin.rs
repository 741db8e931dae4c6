//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//! Handy for wiring the extractor into scripted evaluation harnesses.

use artext::extract_bytes;
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    text: Option<String>,
}

fn main() {
    // Read raw bytes so the charset sniffing gets a chance to run
    let mut raw = Vec::new();
    if io::stdin().read_to_end(&mut raw).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let output = Output {
        text: extract_bytes(&raw),
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
