// Wed Oct 14 2026 - Alex

use crate::layout::LayoutError;
use std::any::{type_name, Any};

pub type Constructor = fn() -> Box<dyn Any>;

#[derive(Debug, Clone, Copy)]
pub enum Construction {
    Default(Constructor),
    Unavailable(&'static str),
}

/// One row of the factory table: a type name and how to build an instance.
#[derive(Debug, Clone, Copy)]
pub struct TypeEntry {
    name: &'static str,
    construction: Construction,
}

fn construct_default<T: Default + 'static>() -> Box<dyn Any> {
    Box::new(T::default())
}

impl TypeEntry {
    pub fn of<T: Default + 'static>() -> Self {
        Self {
            name: type_name::<T>(),
            construction: Construction::Default(construct_default::<T>),
        }
    }

    pub fn unavailable<T: 'static>(reason: &'static str) -> Self {
        Self {
            name: type_name::<T>(),
            construction: Construction::Unavailable(reason),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Stand-ins for the primitive wrapper types, in report order.
pub fn builtin_types() -> Vec<TypeEntry> {
    vec![
        TypeEntry::of::<()>(),
        TypeEntry::of::<bool>(),
        TypeEntry::of::<char>(),
        TypeEntry::of::<i32>(),
        TypeEntry::of::<f32>(),
        TypeEntry::of::<f64>(),
        TypeEntry::of::<i64>(),
    ]
}

#[derive(Debug, Default)]
pub struct Instantiator;

impl Instantiator {
    pub fn new() -> Self {
        Self
    }

    pub fn try_instantiate(&self, entry: &TypeEntry) -> Result<Box<dyn Any>, LayoutError> {
        match entry.construction {
            Construction::Default(construct) => {
                log::trace!("Instantiating {}", entry.name);
                Ok(construct())
            }
            Construction::Unavailable(reason) => Err(LayoutError::Instantiation {
                type_name: entry.name,
                reason,
            }),
        }
    }
}
