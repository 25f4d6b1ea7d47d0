// Wed Oct 14 2026 - Alex

use crate::instantiate::{builtin_types, Instantiator, TypeEntry};
use crate::layout::LayoutError;
use crate::report::Reporter;

pub fn print_builtin(reporter: &Reporter<'_>) -> Result<Vec<String>, LayoutError> {
    print_types(reporter, &builtin_types())
}

/// Stops at the first entry that cannot be instantiated.
pub fn print_types(reporter: &Reporter<'_>, types: &[TypeEntry]) -> Result<Vec<String>, LayoutError> {
    let internals = Instantiator::new();
    let mut sizes = Vec::with_capacity(types.len());

    for entry in types {
        let instance = internals.try_instantiate(entry)?;
        sizes.push(reporter.instance_size(&*instance, entry.name()));
    }

    Ok(sizes)
}
