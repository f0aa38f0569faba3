//! Plain-text views for the non-interactive commands.

pub mod check;
pub mod list;
pub mod show;
