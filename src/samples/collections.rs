// Wed Oct 14 2026 - Alex

use crate::layout::LayoutError;
use crate::report::Reporter;
use std::collections::HashMap;

// Sizes sit on either side of the growth points: Vec doubles from a
// minimum of 4 (4, 8, 16, ..., 1024) and a map resizes at 7/8 load.
pub const LIST_SIZES: [usize; 6] = [0, 1, 10, 11, 16, 825];
pub const MAP_SIZES: [usize; 5] = [0, 1, 16, 769, 1536];

pub fn print_collections(reporter: &Reporter<'_>) -> Result<Vec<String>, LayoutError> {
    let mut externals = Vec::new();

    for count in LIST_SIZES {
        add_list_externals(reporter, &mut externals, count, false);
    }
    for count in LIST_SIZES {
        add_list_externals(reporter, &mut externals, count, true);
    }
    for count in MAP_SIZES {
        add_map_externals(reporter, &mut externals, count, false);
    }

    Ok(externals)
}

pub fn add_list_externals(
    reporter: &Reporter<'_>,
    externals: &mut Vec<String>,
    count: usize,
    reserve: bool,
) {
    let mut list: Vec<i32> = Vec::new();
    if reserve {
        list.reserve(count);
    }
    for i in 0..count {
        list.push(i as i32);
    }

    let label = format!("{} item list{}", count, if reserve { " reserve=true" } else { "" });
    reporter.add_externals(externals, &list, &label);
}

pub fn add_map_externals(
    reporter: &Reporter<'_>,
    externals: &mut Vec<String>,
    count: usize,
    reserve: bool,
) {
    let mut map: HashMap<i32, i32> = if reserve {
        HashMap::with_capacity(count)
    } else {
        HashMap::new()
    };
    for i in 0..count {
        map.insert(i as i32, i as i32);
    }

    let label = format!("{} item map{}", count, if reserve { " reserve=true" } else { "" });
    reporter.add_externals(externals, &map, &label);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::CountingRuntime;
    use crate::runtime::NoopRuntime;

    #[test]
    fn test_label_counts() {
        let reporter = Reporter::new(&NoopRuntime);
        let lines = print_collections(&reporter).unwrap();

        let labels: Vec<&String> = lines.iter().filter(|l| l.starts_with("Label ")).collect();
        assert_eq!(labels.len(), 17);
        assert_eq!(labels.iter().filter(|l| l.contains("item list")).count(), 12);
        assert_eq!(labels.iter().filter(|l| l.contains("item map")).count(), 5);
        assert_eq!(lines.len(), 34);
    }

    #[test]
    fn test_each_label_followed_by_report() {
        let reporter = Reporter::new(&NoopRuntime);
        let lines = print_collections(&reporter).unwrap();

        for pair in lines.chunks(2) {
            assert!(pair[0].starts_with("Label "));
            assert!(pair[1].lines().count() > 1);
        }
    }

    #[test]
    fn test_label_order() {
        let reporter = Reporter::new(&NoopRuntime);
        let lines = print_collections(&reporter).unwrap();

        assert_eq!(lines[0], "Label 0 item list");
        assert_eq!(lines[10], "Label 825 item list");
        assert_eq!(lines[12], "Label 0 item list reserve=true");
        assert_eq!(lines[24], "Label 0 item map");
        assert_eq!(lines[32], "Label 1536 item map");
    }

    #[test]
    fn test_reserved_list_is_tight() {
        let reporter = Reporter::new(&NoopRuntime);
        let mut output = Vec::new();
        add_list_externals(&reporter, &mut output, 11, true);

        assert!(output[1].contains(" 44 [i32]"));
    }

    #[test]
    fn test_reserved_map_label() {
        let reporter = Reporter::new(&NoopRuntime);
        let mut output = Vec::new();
        add_map_externals(&reporter, &mut output, 16, true);
        assert_eq!(output[0], "Label 16 item map reserve=true");
    }

    #[test]
    fn test_one_hint_per_report() {
        let runtime = CountingRuntime::default();
        let reporter = Reporter::new(&runtime);
        print_collections(&reporter).unwrap();
        assert_eq!(runtime.calls.get(), 17);
    }
}
