// Wed Oct 14 2026 - Alex

pub mod config;
pub mod dispatch;
pub mod instantiate;
pub mod layout;
pub mod report;
pub mod runtime;
pub mod samples;
pub mod utils;

pub use config::Config;
pub use dispatch::{run, DispatchError, Dispatcher};
pub use layout::{GraphLayout, InstanceLayout, LayoutError, Reachable};
pub use report::Reporter;
pub use runtime::{NoopRuntime, ProcessRuntime, RuntimeServices};
