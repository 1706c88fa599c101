//! Kids keyboard engine: vocabulary, history and ghost-text suggestions,
//! exported to Android/iOS hosts through UniFFI.
//!
//! The engine logic lives in `kidskb-core` and `kidskb-session`; this crate
//! only adapts it to the FFI boundary.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use kidskb_core::{history, settings, vocabulary};
pub use kidskb_session as session;
