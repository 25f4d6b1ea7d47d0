// Wed Oct 14 2026 - Alex

use crate::layout::LayoutError;
use crate::report::Reporter;

/// `(value, label)` pairs in report order.
pub const SAMPLE_STRINGS: [(&str, &str); 6] = [
    ("", "\"\""),
    ("1", "\"1\""),
    ("劫", "劫"),
    ("井山 裕太", "井山 裕太"),
    ("01234567", "\"01234567\""),
    ("012345678", "\"012345678\""),
];

pub fn print_strings(reporter: &Reporter<'_>) -> Result<Vec<String>, LayoutError> {
    let mut externals = Vec::new();

    for (value, label) in SAMPLE_STRINGS {
        reporter.add_externals(&mut externals, &String::from(value), label);
    }

    Ok(externals)
}
