//! Mention responder: canned-table dispatch with a completion fallback.

mod handler;
mod matching;
mod table;

pub use handler::handle_message;
pub use table::{CannedResponse, canned_responses};
