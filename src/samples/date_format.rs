// Wed Oct 14 2026 - Alex

use crate::layout::{GraphWalker, LayoutError, Reachable};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveTime;

/// A strftime pattern compiled once into owned chrono items.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    pattern: String,
    items: Vec<Item<'static>>,
}

impl DateFormatter {
    pub fn new(pattern: &str) -> Result<Self, LayoutError> {
        let items = StrftimeItems::new(pattern)
            .parse_to_owned()
            .map_err(|source| LayoutError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            items,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn items(&self) -> &[Item<'static>] {
        &self.items
    }

    pub fn format(&self, time: NaiveTime) -> String {
        time.format_with_items(self.items.iter()).to_string()
    }
}

impl Reachable for DateFormatter {
    fn visit_heap(&self, path: &str, walker: &mut GraphWalker) {
        self.pattern.visit_heap(&format!("{}.pattern", path), walker);
        self.items.visit_heap(&format!("{}.items", path), walker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GraphLayout;

    #[test]
    fn test_formats_time() {
        let formatter = DateFormatter::new("%I %M %S").unwrap();
        let time = NaiveTime::from_hms_opt(15, 4, 5).unwrap();
        assert_eq!(formatter.format(time), "03 04 05");
    }

    #[test]
    fn test_items_are_owned() {
        let formatter = DateFormatter::new("%I %M %S").unwrap();
        assert_eq!(formatter.pattern(), "%I %M %S");
        assert!(formatter.items().len() >= 5);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = DateFormatter::new("%Q").unwrap_err();
        assert!(matches!(err, LayoutError::Pattern { .. }));
    }

    #[test]
    fn test_graph_includes_pattern_and_items() {
        let formatter = DateFormatter::new("%I %M %S").unwrap();
        let layout = GraphLayout::parse_instance(&[&formatter]);

        let paths: Vec<&str> = layout.nodes().iter().map(|n| n.path.as_str()).collect();
        assert!(paths.contains(&"[0].pattern.buf"));
        assert!(paths.contains(&"[0].items.buf"));
    }
}
