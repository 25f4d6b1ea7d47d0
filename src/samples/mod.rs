// Wed Oct 14 2026 - Alex

pub mod arrays;
pub mod builtin;
pub mod collections;
pub mod custom;
pub mod date_format;
pub mod misc;
pub mod strings;

pub use date_format::DateFormatter;

use crate::layout::LayoutError;
use crate::report::Reporter;

/// Builds one example group and returns its output lines in order.
pub type Routine = fn(&Reporter<'_>) -> Result<Vec<String>, LayoutError>;
