// Wed Oct 14 2026 - Alex

pub mod error;
pub mod graph;
pub mod hashtable;
pub mod instance;
pub mod reachable;

pub use error::LayoutError;
pub use graph::{FootprintEntry, GraphLayout, GraphNode, GraphWalker};
pub use instance::InstanceLayout;
pub use reachable::Reachable;
