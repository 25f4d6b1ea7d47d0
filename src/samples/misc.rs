// Wed Oct 14 2026 - Alex

use crate::layout::LayoutError;
use crate::report::Reporter;
use crate::samples::DateFormatter;

pub const DATE_PATTERN: &str = "%I %M %S";

pub fn print_misc(reporter: &Reporter<'_>) -> Result<Vec<String>, LayoutError> {
    let mut externals = Vec::new();

    let formatter = DateFormatter::new(DATE_PATTERN)?;
    reporter.add_externals(
        &mut externals,
        &formatter,
        &format!("DateFormatter({})", DATE_PATTERN),
    );

    Ok(externals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::NoopRuntime;

    #[test]
    fn test_misc_reports_formatter() {
        let reporter = Reporter::new(&NoopRuntime);
        let lines = print_misc(&reporter).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Label DateFormatter(%I %M %S)");
        assert!(lines[1].contains("DateFormatter"));
        assert!(lines[1].contains("chrono::format::Item"));
    }
}
