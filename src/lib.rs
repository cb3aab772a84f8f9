pub mod cli;
pub mod commands;
pub mod config;
pub mod parser;

// Re-export commonly used types
pub use config::Config;
pub use parser::{EventParser, FailureKind, ParseFailure, ParseOutcome, ParsedEvent, Tag};
