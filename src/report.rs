// Wed Oct 14 2026 - Alex

use crate::layout::{GraphLayout, InstanceLayout, Reachable};
use crate::runtime::RuntimeServices;

/// Formats layout reports into output lines. Every call measures afresh.
pub struct Reporter<'a> {
    runtime: &'a dyn RuntimeServices,
    compaction_hint: bool,
}

impl<'a> Reporter<'a> {
    pub fn new(runtime: &'a dyn RuntimeServices) -> Self {
        Self {
            runtime,
            compaction_hint: true,
        }
    }

    pub fn with_compaction_hint(mut self, enabled: bool) -> Self {
        self.compaction_hint = enabled;
        self
    }

    /// `"<label>: <size>"`
    pub fn instance_size<T: ?Sized>(&self, value: &T, label: &str) -> String {
        let layout = InstanceLayout::of(value);
        log::trace!("{}: {}", label, layout);
        format!("{}: {}", label, layout.instance_size())
    }

    /// Appends `"Label <label>"` and the retained graph rooted at `[value]`.
    pub fn add_externals<T: Reachable>(&self, output: &mut Vec<String>, value: &T, label: &str) {
        if self.compaction_hint {
            self.runtime.request_compaction();
        }

        output.push(format!("Label {}", label));
        output.push(GraphLayout::parse_instance(&[value]).to_printable());
    }
}
