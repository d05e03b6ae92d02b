//! Standalone decoder binary for caesar-shift
//!
//! Minimal binary that decrypts a file (or stdin) to stdout. Designed for
//! pipelines where pulling in the full CLI is overkill.
//!
//! Usage:
//!   decode <shift> [file]
//!
//! Shift lookup:
//!   1. First argument (if present)
//!   2. $CAESAR_SHIFT (if set)

use caesar_shift::cipher::{transform, Mode};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let shift = resolve_shift(args.get(1).map(String::as_str))?;

    let text = match args.get(2) {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("Failed to read {:?}: {}", path, e))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            buf
        }
    };

    print!("{}", transform(&text, Mode::Decrypt.effective_shift(shift)));

    Ok(())
}

/// Resolve the shift from the first argument or $CAESAR_SHIFT.
fn resolve_shift(arg: Option<&str>) -> Result<i32, String> {
    if let Some(raw) = arg {
        return raw
            .parse::<i32>()
            .map_err(|_| format!("Invalid shift {:?}: expected an integer", raw));
    }

    if let Ok(raw) = env::var("CAESAR_SHIFT") {
        return raw
            .parse::<i32>()
            .map_err(|_| format!("Invalid CAESAR_SHIFT {:?}: expected an integer", raw));
    }

    Err("Usage: decode <shift> [file] (or set CAESAR_SHIFT)".to_string())
}
