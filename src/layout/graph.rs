// Wed Oct 14 2026 - Alex

use crate::layout::Reachable;
use indexmap::IndexMap;
use std::any::type_name;
use std::collections::HashSet;
use std::fmt::Write;
use std::mem::{size_of, size_of_val};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub address: Option<usize>,
    pub size: usize,
    pub type_name: String,
    pub path: String,
    pub estimated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootprintEntry {
    pub type_name: String,
    pub count: usize,
    pub sum: usize,
}

impl FootprintEntry {
    pub fn average(&self) -> usize {
        if self.count == 0 {
            0
        } else {
            self.sum / self.count
        }
    }
}

/// Collects every block reachable from a set of roots. Zero-sized blocks are
/// never recorded and a block seen twice is recorded once.
pub struct GraphWalker {
    nodes: Vec<GraphNode>,
    seen: HashSet<usize>,
}

impl GraphWalker {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Records `value` where it lives. Returns false when nothing was
    /// recorded, in which case the caller must not descend into it.
    pub fn record_value<T: ?Sized>(&mut self, value: &T, path: &str) -> bool {
        self.record(GraphNode {
            address: Some(value as *const T as *const () as usize),
            size: size_of_val(value),
            type_name: type_name::<T>().to_string(),
            path: path.to_string(),
            estimated: false,
        })
    }

    /// Records a heap buffer of `capacity` slots starting at `ptr`.
    pub fn record_buffer<T>(&mut self, ptr: *const T, capacity: usize, path: &str) -> bool {
        self.record(GraphNode {
            address: Some(ptr as usize),
            size: capacity.saturating_mul(size_of::<T>()),
            type_name: format!("[{}]", type_name::<T>()),
            path: path.to_string(),
            estimated: false,
        })
    }

    /// Records a block whose address is not observable and whose size is derived.
    pub fn record_estimated(&mut self, type_name: String, size: usize, path: &str) -> bool {
        self.record(GraphNode {
            address: None,
            size,
            type_name,
            path: path.to_string(),
            estimated: true,
        })
    }

    fn record(&mut self, node: GraphNode) -> bool {
        if node.size == 0 {
            return false;
        }
        if let Some(address) = node.address {
            if !self.seen.insert(address) {
                return false;
            }
        }
        self.nodes.push(node);
        true
    }

    pub fn finish(self) -> Vec<GraphNode> {
        self.nodes
    }
}

impl Default for GraphWalker {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GraphLayout {
    root_type: String,
    root_address: usize,
    nodes: Vec<GraphNode>,
}

impl GraphLayout {
    pub fn parse_instance<T: Reachable + ?Sized>(roots: &[&T]) -> Self {
        let mut walker = GraphWalker::new();
        walker.record_value(roots, "");

        for (i, root) in roots.iter().enumerate() {
            let path = format!("[{}]", i);
            if walker.record_value(*root, &path) {
                root.visit_heap(&path, &mut walker);
            }
        }

        Self {
            root_type: type_name::<[&T]>().to_string(),
            root_address: roots.as_ptr() as usize,
            nodes: walker.finish(),
        }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn total_size(&self) -> usize {
        self.nodes.iter().map(|n| n.size).sum()
    }

    pub fn total_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn has_estimates(&self) -> bool {
        self.nodes.iter().any(|n| n.estimated)
    }

    /// Per-type totals, largest first.
    pub fn footprint(&self) -> Vec<FootprintEntry> {
        let mut groups: IndexMap<&str, (usize, usize)> = IndexMap::new();
        for node in &self.nodes {
            let entry = groups.entry(node.type_name.as_str()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += node.size;
        }

        let mut entries: Vec<FootprintEntry> = groups
            .into_iter()
            .map(|(type_name, (count, sum))| FootprintEntry {
                type_name: type_name.to_string(),
                count,
                sum,
            })
            .collect();
        entries.sort_by(|a, b| b.sum.cmp(&a.sum));
        entries
    }

    pub fn to_printable(&self) -> String {
        let mut out = String::new();
        let type_width = self
            .nodes
            .iter()
            .map(|n| n.type_name.len())
            .max()
            .unwrap_or(4)
            .max(4);

        let mut rows: Vec<&GraphNode> = self.nodes.iter().collect();
        rows.sort_by_key(|n| (n.address.is_none(), n.address.unwrap_or(0)));

        let _ = writeln!(out, "{}@{:x} object externals:", self.root_type, self.root_address);
        let _ = writeln!(
            out,
            "{:>16} {:>10} {:<width$} {}",
            "ADDRESS",
            "SIZE",
            "TYPE",
            "PATH",
            width = type_width
        );
        for node in rows {
            let address = match node.address {
                Some(addr) => format!("{:x}", addr),
                None => "?".to_string(),
            };
            let size = if node.estimated {
                format!("~{}", node.size)
            } else {
                node.size.to_string()
            };
            let line = format!(
                "{:>16} {:>10} {:<width$} {}",
                address,
                size,
                node.type_name,
                node.path,
                width = type_width
            );
            let _ = writeln!(out, "{}", line.trim_end());
        }
        if self.has_estimates() {
            let _ = writeln!(out, "Sizes marked ~ are derived from container capacity.");
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}@{:x} footprint:", self.root_type, self.root_address);
        let _ = writeln!(out, "{:>10} {:>9} {:>9}   {}", "COUNT", "AVG", "SUM", "DESCRIPTION");
        for entry in self.footprint() {
            let _ = writeln!(
                out,
                "{:>10} {:>9} {:>9}   {}",
                entry.count,
                entry.average(),
                entry.sum,
                entry.type_name
            );
        }
        let _ = write!(
            out,
            "{:>10} {:>9} {:>9}   (total)",
            self.total_count(),
            "",
            self.total_size()
        );

        out
    }
}
