// Wed Oct 14 2026 - Alex

use std::any::type_name;
use std::fmt;
use std::mem::{align_of_val, size_of_val};

/// Shallow layout of a single value: its own storage only, nothing it owns
/// on the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLayout {
    type_name: &'static str,
    size: usize,
    alignment: usize,
}

impl InstanceLayout {
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self {
            type_name: type_name::<T>(),
            size: size_of_val(value),
            alignment: align_of_val(value),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn instance_size(&self) -> usize {
        self.size
    }

    pub fn alignment(&self) -> usize {
        self.alignment
    }
}

impl fmt::Display for InstanceLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (size {}, align {})", self.type_name, self.instance_size(), self.alignment())
    }
}
