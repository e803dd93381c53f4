//! Continuity verdict — the single datum this firmware produces.
//!
//! ## Wire format
//!
//! Each sample cycle writes exactly one ASCII line to the report UART:
//!
//! | Line  | Meaning                          |
//! |-------|----------------------------------|
//! | `1\n` | continuity (probe tips shorted)  |
//! | `0\n` | open circuit                     |
//!
//! The sense input is pulled up and active-low, so the verdict is the
//! logical negation of the raw electrical level.  The mapping is
//! stateless: no debouncing, no hysteresis — rapid electrical bounce at
//! the probe tips shows up as flickering output.

use core::fmt;

/// Outcome of a single probe sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The probe circuit is closed (sense pin pulled low).
    Continuity,
    /// The probe circuit is open (sense pin at the pull-up default).
    Open,
}

impl Verdict {
    /// Map a raw pin level to a verdict (pulled-up active-low input).
    pub fn from_level(level_high: bool) -> Self {
        if level_high {
            Self::Open
        } else {
            Self::Continuity
        }
    }

    /// The exact line written to the report stream for this verdict.
    pub const fn as_line(self) -> &'static str {
        match self {
            Self::Continuity => "1\n",
            Self::Open => "0\n",
        }
    }

    /// Single-character token (no terminator), for log output.
    pub const fn as_token(self) -> char {
        match self {
            Self::Continuity => '1',
            Self::Open => '0',
        }
    }

    /// Interpret one received line, host-side.
    ///
    /// Whitespace (including the line terminator) is trimmed before
    /// matching.  Anything other than `0` or `1` is `None` — a host
    /// reading mid-line after attach can see a torn token.
    pub fn parse_line(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::Continuity),
            "0" => Some(Self::Open),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuity => write!(f, "continuity"),
            Self::Open => write!(f, "open"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_active_low() {
        assert_eq!(Verdict::from_level(false), Verdict::Continuity);
        assert_eq!(Verdict::from_level(true), Verdict::Open);
    }

    #[test]
    fn wire_lines_match_protocol() {
        assert_eq!(Verdict::Continuity.as_line(), "1\n");
        assert_eq!(Verdict::Open.as_line(), "0\n");
    }

    #[test]
    fn parse_accepts_terminated_and_padded_lines() {
        assert_eq!(Verdict::parse_line("1\n"), Some(Verdict::Continuity));
        assert_eq!(Verdict::parse_line("0\r\n"), Some(Verdict::Open));
        assert_eq!(Verdict::parse_line(" 1 "), Some(Verdict::Continuity));
    }

    #[test]
    fn parse_rejects_torn_tokens() {
        assert_eq!(Verdict::parse_line(""), None);
        assert_eq!(Verdict::parse_line("10"), None);
        assert_eq!(Verdict::parse_line("x"), None);
    }

    #[test]
    fn parse_agrees_with_emit() {
        for v in [Verdict::Continuity, Verdict::Open] {
            assert_eq!(Verdict::parse_line(v.as_line()), Some(v));
        }
    }
}
