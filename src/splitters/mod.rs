//! Splitting strategies.

mod base;
mod delimiter;
mod sentence;
mod token_window;

pub use base::{merge_text, TextSplitter};
pub use delimiter::DelimiterSplitter;
pub use sentence::SentenceSplitter;
pub use token_window::TokenWindowSplitter;
