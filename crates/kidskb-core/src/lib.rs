//! Vocabulary, history and settings for the kids keyboard.
//!
//! Pure data and storage; key handling lives in `kidskb-session`.

pub mod history;
pub mod settings;
pub mod text;
pub mod vocabulary;
