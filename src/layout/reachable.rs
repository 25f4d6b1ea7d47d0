// Wed Oct 14 2026 - Alex

use crate::layout::hashtable::table_allocation_size;
use crate::layout::GraphWalker;
use std::any::type_name;
use std::collections::HashMap;
use std::mem::{align_of, size_of};

/// A value whose owned heap blocks can be enumerated.
///
/// Implementations record the blocks they own through the walker and
/// recurse into the contents of each block. The value itself is recorded by
/// whoever holds it, so an implementation never records `self`.
pub trait Reachable {
    fn visit_heap(&self, path: &str, walker: &mut GraphWalker);
}

macro_rules! impl_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reachable for $ty {
                fn visit_heap(&self, _path: &str, _walker: &mut GraphWalker) {}
            }
        )*
    };
}

impl_leaf!((), bool, char, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, str);

impl Reachable for String {
    fn visit_heap(&self, path: &str, walker: &mut GraphWalker) {
        walker.record_buffer(self.as_ptr(), self.capacity(), &format!("{}.buf", path));
    }
}

impl<T: Reachable + ?Sized> Reachable for &T {
    fn visit_heap(&self, path: &str, walker: &mut GraphWalker) {
        (**self).visit_heap(path, walker);
    }
}

impl<T: Reachable + ?Sized> Reachable for Box<T> {
    fn visit_heap(&self, path: &str, walker: &mut GraphWalker) {
        let target = format!("{}.*", path);
        if walker.record_value(&**self, &target) {
            (**self).visit_heap(&target, walker);
        }
    }
}

impl<T: Reachable> Reachable for Option<T> {
    fn visit_heap(&self, path: &str, walker: &mut GraphWalker) {
        if let Some(value) = self {
            value.visit_heap(path, walker);
        }
    }
}

impl<T: Reachable> Reachable for [T] {
    fn visit_heap(&self, path: &str, walker: &mut GraphWalker) {
        for (i, item) in self.iter().enumerate() {
            item.visit_heap(&format!("{}[{}]", path, i), walker);
        }
    }
}

impl<T: Reachable> Reachable for Vec<T> {
    fn visit_heap(&self, path: &str, walker: &mut GraphWalker) {
        let buffer = format!("{}.buf", path);
        if walker.record_buffer(self.as_ptr(), self.capacity(), &buffer) {
            self.as_slice().visit_heap(&buffer, walker);
        }
    }
}

impl<K: Reachable, V: Reachable, S> Reachable for HashMap<K, V, S> {
    fn visit_heap(&self, path: &str, walker: &mut GraphWalker) {
        let table = format!("{}.table", path);
        let size = table_allocation_size(
            self.capacity(),
            size_of::<(K, V)>(),
            align_of::<(K, V)>(),
        );
        let type_name = format!("[({}, {})]", type_name::<K>(), type_name::<V>());

        if walker.record_estimated(type_name, size, &table) {
            for (i, (key, value)) in self.iter().enumerate() {
                key.visit_heap(&format!("{}[{}].0", table, i), walker);
                value.visit_heap(&format!("{}[{}].1", table, i), walker);
            }
        }
    }
}

impl Reachable for chrono::format::Item<'static> {
    fn visit_heap(&self, path: &str, walker: &mut GraphWalker) {
        use chrono::format::Item;

        match self {
            Item::OwnedLiteral(text) | Item::OwnedSpace(text) => text.visit_heap(path, walker),
            _ => {}
        }
    }
}
