// Wed Oct 14 2026 - Alex

/// Process-wide services a report may ask for. Callers must not depend on
/// the effect of any of them.
pub trait RuntimeServices {
    /// Hint that freed memory may be returned to the system before a graph
    /// is walked. It only makes neighbouring addresses easier to read.
    fn request_compaction(&self);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRuntime;

impl RuntimeServices for ProcessRuntime {
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    fn request_compaction(&self) {
        let released = unsafe { libc::malloc_trim(0) };
        log::trace!("malloc_trim released memory: {}", released != 0);
    }

    #[cfg(not(all(target_os = "linux", target_env = "gnu")))]
    fn request_compaction(&self) {
        log::trace!("memory compaction is not supported on this target");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRuntime;

impl RuntimeServices for NoopRuntime {
    fn request_compaction(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_runtime_is_safe_to_call_repeatedly() {
        let runtime = ProcessRuntime;
        runtime.request_compaction();
        runtime.request_compaction();
    }

    #[test]
    fn test_services_are_object_safe() {
        let services: [&dyn RuntimeServices; 2] = [&ProcessRuntime, &NoopRuntime];
        for service in services {
            service.request_compaction();
        }
    }
}
