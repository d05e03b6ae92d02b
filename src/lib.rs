//! caesar-shift: interactive Caesar cipher utility
//!
//! Applies a fixed-alphabet rotation cipher to text and renders the result
//! live as the parameters change.
//!
//! ## How it works
//!
//! 1. **Cipher**: pure (text, shift) → text rotation over A-Z and a-z
//! 2. **Session**: mutable presentation state (input, shift, mode, live flag)
//! 3. **Clipboard**: optional export of the transformed output

pub mod cipher;
pub mod clipboard;
pub mod session;

pub use cipher::{transform, Mode};
pub use session::{summary_line, Rendered, Session};
