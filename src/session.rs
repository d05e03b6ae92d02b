//! Session module: mutable state for the interactive surface
//!
//! The cipher itself is stateless; everything that can change between
//! keystrokes (input text, the shift as entered, mode, live-update flag)
//! lives here. Mutators return `Some(Rendered)` whenever the change calls
//! for an immediate re-render, so the REPL never has to second-guess the
//! live-update policy.

use crate::cipher::{normalize_shift, transform, Mode};

/// One rendered frame: the transformed text plus the parameter summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub output: String,
    pub summary: String,
}

/// Human-readable summary of the transform parameters.
///
/// Shows the normalized shift as entered, even in Decrypt mode; the Mode
/// field disambiguates the effective direction.
pub fn summary_line(raw_shift: i32, mode: Mode) -> String {
    format!(
        "Shift = {} · Mode = {} · Letters only (A–Z) · Case preserved",
        normalize_shift(raw_shift),
        mode
    )
}

/// Interactive session state.
#[derive(Debug, Clone)]
pub struct Session {
    input: String,
    shift_entry: i32,
    mode: Mode,
    live_update: bool,
}

impl Session {
    /// Fresh session seeded with the default example text.
    pub fn new(shift: i32, mode: Mode, live_update: bool) -> Self {
        Self {
            input: "HELLO".to_string(),
            shift_entry: shift,
            mode,
            live_update,
        }
    }

    pub fn shift(&self) -> i32 {
        self.shift_entry
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn live_update(&self) -> bool {
        self.live_update
    }

    /// Transform the current input and pair it with the summary line.
    pub fn render(&self) -> Rendered {
        let effective = self.mode.effective_shift(self.shift_entry);
        Rendered {
            output: transform(&self.input, effective),
            summary: summary_line(self.shift_entry, self.mode),
        }
    }

    /// Replace the input text. Re-renders only when live update is on.
    pub fn set_input(&mut self, text: &str) -> Option<Rendered> {
        self.input = text.to_string();
        self.live_render()
    }

    /// Set the shift as entered. Re-renders only when live update is on.
    pub fn set_shift(&mut self, shift: i32) -> Option<Rendered> {
        self.shift_entry = shift;
        self.live_render()
    }

    /// Step the shift by `delta`. Always re-renders, matching the original
    /// shift buttons which update regardless of the live flag.
    pub fn nudge_shift(&mut self, delta: i32) -> Rendered {
        self.shift_entry = self.shift_entry.saturating_add(delta);
        self.render()
    }

    /// Flip between Encrypt and Decrypt. Re-renders when live update is on.
    pub fn toggle_mode(&mut self) -> Option<Rendered> {
        self.mode = self.mode.toggle();
        self.live_render()
    }

    /// Toggle live update. Turning it on renders immediately so the output
    /// catches up with any buffered edits.
    pub fn toggle_live(&mut self) -> Option<Rendered> {
        self.live_update = !self.live_update;
        if self.live_update {
            Some(self.render())
        } else {
            None
        }
    }

    fn live_render(&self) -> Option<Rendered> {
        if self.live_update {
            Some(self.render())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line_format() {
        assert_eq!(
            summary_line(3, Mode::Encrypt),
            "Shift = 3 · Mode = Encrypt · Letters only (A–Z) · Case preserved"
        );
    }

    #[test]
    fn test_summary_line_shows_normalized_entered_shift() {
        // -1 normalizes to 25; Decrypt mode still shows the entered value,
        // not the effective negated shift.
        assert_eq!(
            summary_line(-1, Mode::Decrypt),
            "Shift = 25 · Mode = Decrypt · Letters only (A–Z) · Case preserved"
        );
        assert_eq!(
            summary_line(29, Mode::Decrypt),
            "Shift = 3 · Mode = Decrypt · Letters only (A–Z) · Case preserved"
        );
    }

    #[test]
    fn test_session_initial_render_uses_example_text() {
        let session = Session::new(3, Mode::Encrypt, true);
        let rendered = session.render();
        assert_eq!(rendered.output, "KHOOR");
        assert!(rendered.summary.contains("Shift = 3"));
    }

    #[test]
    fn test_session_live_update_renders_on_input() {
        let mut session = Session::new(5, Mode::Encrypt, true);
        let rendered = session.set_input("Attack at Dawn!").expect("live render");
        assert_eq!(rendered.output, "Fyyfhp fy Ifbs!");
    }

    #[test]
    fn test_session_live_off_buffers_edits() {
        let mut session = Session::new(3, Mode::Encrypt, false);
        assert!(session.set_input("SECRET").is_none());
        assert!(session.set_shift(7).is_none());
        assert!(session.toggle_mode().is_none());

        // Explicit render still sees all the buffered changes.
        let rendered = session.render();
        assert_eq!(rendered.output, transform("SECRET", -7));
    }

    #[test]
    fn test_session_nudge_always_renders() {
        let mut session = Session::new(2, Mode::Encrypt, false);
        session.set_input("abc");
        let rendered = session.nudge_shift(1);
        assert_eq!(session.shift(), 3);
        assert_eq!(rendered.output, "def");

        let rendered = session.nudge_shift(-1);
        assert_eq!(session.shift(), 2);
        assert_eq!(rendered.output, "cde");
    }

    #[test]
    fn test_session_mode_toggle_negates_shift() {
        let mut session = Session::new(3, Mode::Encrypt, true);
        session.set_input("KHOOR");
        let rendered = session.toggle_mode().expect("live render");
        assert_eq!(session.mode(), Mode::Decrypt);
        assert_eq!(rendered.output, "HELLO");
    }

    #[test]
    fn test_session_turning_live_on_renders() {
        let mut session = Session::new(1, Mode::Encrypt, false);
        session.set_input("Zebra");
        let rendered = session.toggle_live().expect("render on enable");
        assert!(session.live_update());
        assert_eq!(rendered.output, "Afcsb");

        // Turning it back off is silent.
        assert!(session.toggle_live().is_none());
    }
}
