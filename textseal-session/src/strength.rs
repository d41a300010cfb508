//! Password-strength hint for the form display.
//!
//! Display-only: the hint never gates the pipeline, which enforces its
//! own length policy independently.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weak => f.write_str("Weak"),
            Self::Medium => f.write_str("Medium"),
            Self::Strong => f.write_str("Strong"),
        }
    }
}

/// Rates a password: under 6 characters is weak; an uppercase letter plus
/// a digit is strong; anything else is medium.
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.chars().count() < 6 {
        return PasswordStrength::Weak;
    }
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if has_upper && has_digit {
        PasswordStrength::Strong
    } else {
        PasswordStrength::Medium
    }
}
