pub mod bot;
pub mod config;
pub mod error;
pub mod groq;
pub mod responder;

pub use bot::run;
