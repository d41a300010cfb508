//! Session boundary between the TextSeal UI and the sealing pipeline.
//!
//! The UI collaborator hands this crate a mode, a text, and a password and
//! gets back either a result string or a display-ready failure
//! classification. Everything the form holds between keystrokes lives in
//! an explicit [`Session`] object — there is no process-wide mutable
//! state, and the cryptographic pipeline underneath stays stateless.
//!
//! Display-only concerns from the form also live here: the
//! password-strength hint, the plain-text export record (with the
//! password masked, never included), and the inactivity auto-clear
//! capability the calling context can arm to wipe form state.

mod autoclear;
mod error;
mod export;
mod request;
mod session;
mod strength;

pub use autoclear::{ClearScheduler, IdleClear};
pub use error::{FailureKind, SessionError, SessionResult};
pub use export::{ExportRecord, MASK_CHAR};
pub use request::{process, process_async, Mode, SealRequest};
pub use session::{FormState, Session};
pub use strength::{password_strength, PasswordStrength};
