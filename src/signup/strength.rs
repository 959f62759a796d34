//! Password strength classifier used for live feedback while typing.
//!
//! Tiers are checked top-down and the first match wins, so a password that
//! qualifies as `Strong` is never reported as `Medium`.

use serde::Serialize;
use std::fmt;

/// Symbols that count towards a `Strong` password.
pub const STRONG_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '?', '&', '.', ',', '#'];

const STRONG_MIN_LENGTH: usize = 12;
const MEDIUM_MIN_LENGTH: usize = 8;
const WEAK_MIN_LENGTH: usize = 6;

/// Advisory strength label, ordered from weakest to strongest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StrengthLabel {
    #[default]
    #[serde(rename = "Too Weak")]
    TooWeak,
    Weak,
    Medium,
    Strong,
}

/// Colour class the presentation layer attaches to the feedback text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// green
    Good,
    /// yellow
    Fair,
    /// red
    Poor,
}

impl StrengthLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooWeak => "Too Weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Strong => Tone::Good,
            Self::Medium => Tone::Fair,
            Self::Weak | Self::TooWeak => Tone::Poor,
        }
    }

    /// Feedback sentence shown under the password input.
    #[must_use]
    pub fn message(self) -> String {
        format!("Your Password is {self}")
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line terminators never count towards a tier; a password holding one is `TooWeak`.
const LINE_TERMINATORS: &[char] = &['\n', '\r', '\u{2028}', '\u{2029}'];

/// Classify a password into one of four strength tiers.
#[must_use]
pub fn classify(password: &str) -> StrengthLabel {
    if password.contains(LINE_TERMINATORS) {
        return StrengthLabel::TooWeak;
    }

    let length = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| STRONG_SYMBOLS.contains(&c));

    if length >= STRONG_MIN_LENGTH && has_upper && has_lower && has_digit && has_symbol {
        StrengthLabel::Strong
    } else if length >= MEDIUM_MIN_LENGTH && has_lower && has_digit {
        StrengthLabel::Medium
    } else if length >= WEAK_MIN_LENGTH && has_lower {
        StrengthLabel::Weak
    } else {
        StrengthLabel::TooWeak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_reference_passwords() {
        assert_eq!(classify(""), StrengthLabel::TooWeak);
        assert_eq!(classify("abcdef"), StrengthLabel::Weak);
        assert_eq!(classify("abcdefgh1"), StrengthLabel::Medium);
        assert_eq!(classify("Abcdefghij1!"), StrengthLabel::Strong);
    }

    #[test]
    fn strong_takes_precedence_over_medium() {
        // satisfies every tier; must report the first one
        let password = "Passw0rd#2024";
        assert_eq!(classify(password), StrengthLabel::Strong);
    }

    #[test]
    fn strong_requires_every_class() {
        assert_eq!(classify("abcdefghij1!"), StrengthLabel::Medium);
        assert_eq!(classify("ABCDEFGHIJ1!"), StrengthLabel::TooWeak);
        assert_eq!(classify("Abcdefghijk!"), StrengthLabel::Weak);
        assert_eq!(classify("Abcdefghijk1"), StrengthLabel::Medium);
        // eleven characters is one short
        assert_eq!(classify("Abcdefghi1!"), StrengthLabel::Medium);
    }

    #[test]
    fn only_listed_symbols_count() {
        assert_eq!(classify("Abcdefghij1-"), StrengthLabel::Medium);
        for symbol in STRONG_SYMBOLS {
            let password = format!("Abcdefghij1{symbol}");
            assert_eq!(classify(&password), StrengthLabel::Strong, "{password}");
        }
    }

    #[test]
    fn length_thresholds() {
        assert_eq!(classify("abcde"), StrengthLabel::TooWeak);
        assert_eq!(classify("abcdefg1"), StrengthLabel::Medium);
        assert_eq!(classify("abcdef1"), StrengthLabel::Weak);
        assert_eq!(classify("12345678"), StrengthLabel::TooWeak);
    }

    #[test]
    fn line_terminators_are_too_weak() {
        assert_eq!(classify("abcdef\n"), StrengthLabel::TooWeak);
        assert_eq!(classify("abcdefgh1\r"), StrengthLabel::TooWeak);
        assert_eq!(classify("Abcdef\u{2028}ghij1!"), StrengthLabel::TooWeak);
        // other whitespace still counts as a character
        assert_eq!(classify("abc def"), StrengthLabel::Weak);
        assert_eq!(classify("abcdef\t"), StrengthLabel::Weak);
    }

    #[test]
    fn labels_are_ordered() {
        assert!(StrengthLabel::TooWeak < StrengthLabel::Weak);
        assert!(StrengthLabel::Weak < StrengthLabel::Medium);
        assert!(StrengthLabel::Medium < StrengthLabel::Strong);
    }

    #[test]
    fn feedback_text_and_tone() {
        assert_eq!(StrengthLabel::TooWeak.message(), "Your Password is Too Weak");
        assert_eq!(StrengthLabel::Strong.tone(), Tone::Good);
        assert_eq!(StrengthLabel::Medium.tone(), Tone::Fair);
        assert_eq!(StrengthLabel::Weak.tone(), Tone::Poor);
        assert_eq!(StrengthLabel::TooWeak.tone(), Tone::Poor);
    }

    #[test]
    fn serializes_display_names() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&StrengthLabel::TooWeak)?, "\"Too Weak\"");
        assert_eq!(serde_json::to_string(&StrengthLabel::Medium)?, "\"Medium\"");
        assert_eq!(serde_json::to_string(&Tone::Fair)?, "\"fair\"");
        Ok(())
    }
}
