// Wed Oct 14 2026 - Alex

use crate::layout::LayoutError;
use crate::report::Reporter;
use std::any::Any;

pub const ARRAY_LENGTHS: [usize; 5] = [0, 1, 8, 9, 1024];

pub fn print_arrays(reporter: &Reporter<'_>) -> Result<Vec<String>, LayoutError> {
    let mut sizes = Vec::new();

    add_arrays::<bool>(reporter, &mut sizes, "boolean");
    add_arrays::<i8>(reporter, &mut sizes, "byte");
    add_arrays::<char>(reporter, &mut sizes, "char");
    add_arrays::<i32>(reporter, &mut sizes, "int");
    add_arrays::<i64>(reporter, &mut sizes, "long");
    add_arrays::<Option<Box<dyn Any>>>(reporter, &mut sizes, "Object");

    Ok(sizes)
}

fn add_arrays<T: Default>(reporter: &Reporter<'_>, sizes: &mut Vec<String>, kind: &str) {
    for length in ARRAY_LENGTHS {
        let array: Box<[T]> = (0..length).map(|_| T::default()).collect();
        sizes.push(reporter.instance_size(&*array, &format!("{}[{}]", kind, length)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::NoopRuntime;

    #[test]
    fn test_thirty_entries_in_order() {
        let reporter = Reporter::new(&NoopRuntime);
        let lines = print_arrays(&reporter).unwrap();

        assert_eq!(lines.len(), 30);
        assert_eq!(lines[0], "boolean[0]: 0");
        assert_eq!(lines[4], "boolean[1024]: 1024");
        assert!(lines[5].starts_with("byte[0]: "));
        assert!(lines[29].starts_with("Object[1024]: "));
    }

    #[test]
    fn test_sizes_scale_with_element() {
        let reporter = Reporter::new(&NoopRuntime);
        let lines = print_arrays(&reporter).unwrap();

        assert!(lines.contains(&"char[9]: 36".to_string()));
        assert!(lines.contains(&"long[8]: 64".to_string()));
        let reference = std::mem::size_of::<Option<Box<dyn Any>>>();
        assert!(lines.contains(&format!("Object[9]: {}", reference * 9)));
    }
}
