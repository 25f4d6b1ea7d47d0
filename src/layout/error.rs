// Wed Oct 14 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Cannot instantiate {type_name}: {reason}")]
    Instantiation {
        type_name: &'static str,
        reason: &'static str,
    },
    #[error("Invalid date pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: chrono::format::ParseError,
    },
}
