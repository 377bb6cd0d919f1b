pub mod codec;
pub mod config;
pub mod matcher;
pub mod response;

// Re-export the types callers actually touch
pub use matcher::{read_matching_response, LogSink, MatchLog, MatchOutcome};
pub use response::{Response, SignatureEntry};
