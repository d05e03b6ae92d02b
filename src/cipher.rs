//! Cipher module: the Caesar transform
//!
//! Pure, stateless rotation over the two ASCII letter ranges. Everything
//! outside 'A'-'Z' and 'a'-'z' passes through unchanged, so every input has
//! a defined output and there are no error cases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Encrypt applies the configured shift directly; Decrypt applies its
/// negation, so `transform(transform(t, s), -s) == t` gives the round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// The shift actually fed to the transform for this mode.
    pub fn effective_shift(self, shift: i32) -> i32 {
        match self {
            Mode::Encrypt => shift,
            Mode::Decrypt => -shift,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Mode::Encrypt => Mode::Decrypt,
            Mode::Decrypt => Mode::Encrypt,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => write!(f, "Encrypt"),
            Mode::Decrypt => write!(f, "Decrypt"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Mode::Encrypt),
            "decrypt" => Ok(Mode::Decrypt),
            other => Err(format!("Unknown mode '{}' (use encrypt or decrypt)", other)),
        }
    }
}

/// Reduce a raw shift of any sign or magnitude into the canonical 0..=25
/// range. Congruent to the input modulo 26.
pub fn normalize_shift(raw: i32) -> u8 {
    raw.rem_euclid(26) as u8
}

/// Rotate a single character by an already-normalized shift (0..=25).
///
/// Uppercase stays uppercase, lowercase stays lowercase, and anything that is
/// not an ASCII letter is returned as-is.
pub fn shift_char(c: char, shift: u8) -> char {
    if c.is_ascii_uppercase() {
        (((c as u8 - b'A' + shift) % 26) + b'A') as char
    } else if c.is_ascii_lowercase() {
        (((c as u8 - b'a' + shift) % 26) + b'a') as char
    } else {
        c
    }
}

/// Apply the Caesar cipher to a full string.
///
/// The output has exactly the same length as the input; only the identity of
/// ASCII letters changes.
pub fn transform(text: &str, raw_shift: i32) -> String {
    let shift = normalize_shift(raw_shift);

    // Shifting by 0 is the identity, skip the walk.
    if shift == 0 {
        return text.to_string();
    }

    text.chars().map(|c| shift_char(c, shift)).collect()
}
