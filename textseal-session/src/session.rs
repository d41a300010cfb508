//! Explicit session state for one form instance.
//!
//! Replaces what a UI would otherwise keep in globals: current mode, the
//! text and password fields, and the last result. Each form instance owns
//! one `Session`; nothing here is shared across the process. Sensitive
//! fields are zeroized on clear and on drop.

use crate::error::SessionResult;
use crate::export::ExportRecord;
use crate::request::{process, Mode, SealRequest};
use crate::strength::{password_strength, PasswordStrength};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The form's transient input fields. Wiped on drop.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct FormState {
    pub text: String,
    pub password: String,
}

/// State for one seal/open form instance.
pub struct Session {
    mode: Mode,
    form: FormState,
    result: Option<String>,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            form: FormState::default(),
            result: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switching direction keeps the form contents; the user may want to
    /// open what they just sealed.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.form.text = text.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.password = password.into();
    }

    /// Strength hint for the current password field.
    pub fn strength(&self) -> PasswordStrength {
        password_strength(&self.form.password)
    }

    /// Runs the pipeline over the current form contents and retains the
    /// result for display, copy, and export.
    pub fn submit(&mut self) -> SessionResult<&str> {
        let request = SealRequest::new(self.mode, &*self.form.text, &*self.form.password);
        let output = process(&request)?;
        self.result = Some(output);
        Ok(self.result.as_deref().unwrap_or_default())
    }

    /// The last successful result, if any.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Export bundle for the last result, if any. The password is masked
    /// before it leaves the session.
    pub fn export(&self) -> Option<ExportRecord> {
        self.result.as_ref().map(|result| {
            ExportRecord::new(self.mode, &*self.form.text, &self.form.password, &**result)
        })
    }

    /// Wipes the form fields and the result. Called by the user's clear
    /// action and by the inactivity auto-clear.
    pub fn clear(&mut self) {
        self.form.zeroize();
        if let Some(mut result) = self.result.take() {
            result.zeroize();
        }
        debug!("[SESSION] form state cleared");
    }
}
