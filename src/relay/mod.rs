pub mod prompt;
mod service;

pub use service::{GeneratedSession, MISSING_CREDENTIAL, Relay};
