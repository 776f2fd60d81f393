pub mod config;
pub mod curriculum;
pub mod error;
pub mod llm;
pub mod relay;
pub mod server;
pub mod session;
pub mod template;

pub use error::{Error, Result};
