//! Developer tooling for the kids keyboard engine: an interactive player,
//! suggestion inspection, and vocabulary/history/settings file utilities.

pub mod commands;
