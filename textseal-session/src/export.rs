//! Plain-text export record.
//!
//! Bundles one completed operation for download or clipboard: mode,
//! original input, a length-preserving password mask, and the result.
//! The real password is masked at construction and never stored.

use crate::request::Mode;
use serde::{Deserialize, Serialize};

/// Character used to mask the password, one per password character.
pub const MASK_CHAR: char = '*';

/// A display/export bundle for one completed operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRecord {
    pub mode: Mode,
    pub input: String,
    pub masked_password: String,
    pub result: String,
}

impl ExportRecord {
    /// Builds a record, masking the password immediately.
    pub fn new(
        mode: Mode,
        input: impl Into<String>,
        password: &str,
        result: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            input: input.into(),
            masked_password: mask(password),
            result: result.into(),
        }
    }

    /// Renders the JSON form for structured export consumers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the plain-text form used for file export.
    pub fn to_text(&self) -> String {
        format!(
            "mode: {}\ninput: {}\npassword: {}\nresult: {}\n",
            self.mode, self.input, self.masked_password, self.result
        )
    }
}

fn mask(password: &str) -> String {
    std::iter::repeat(MASK_CHAR)
        .take(password.chars().count())
        .collect()
}
