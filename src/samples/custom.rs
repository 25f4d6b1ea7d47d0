// Wed Oct 14 2026 - Alex

use crate::layout::LayoutError;
use crate::report::Reporter;

/// Placeholder group; reports nothing.
pub fn print_custom(_reporter: &Reporter<'_>) -> Result<Vec<String>, LayoutError> {
    Ok(Vec::new())
}
