// Wed Oct 14 2026 - Alex

//! Backing-store estimate for `std::collections::HashMap`.
//!
//! The standard map is a SwissTable: one allocation holding the entry array
//! followed by one control byte per bucket plus a trailing group of control
//! bytes. None of that is reachable through the public API, so the size is
//! derived from `capacity()`.

use std::mem::size_of;

/// Width of a control-byte group on the current target: SSE2 and NEON groups
/// are fixed width, the generic group is one `usize`.
pub fn group_width() -> usize {
    if cfg!(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    )) {
        16
    } else if cfg!(all(
        target_arch = "aarch64",
        target_feature = "neon",
        target_endian = "little"
    )) {
        8
    } else {
        size_of::<usize>()
    }
}

/// Inverts the table's bucket-mask to capacity mapping.
pub fn buckets_for_capacity(capacity: usize) -> usize {
    match capacity {
        0 => 0,
        c if c < 8 => (c + 1).next_power_of_two(),
        c => (c / 7 * 8).next_power_of_two(),
    }
}

pub fn table_allocation_size(capacity: usize, entry_size: usize, entry_align: usize) -> usize {
    let buckets = buckets_for_capacity(capacity);
    if buckets == 0 {
        return 0;
    }

    let width = group_width();
    let ctrl_align = entry_align.max(width) as u64;
    let ctrl_offset = crate::utils::align_up((entry_size * buckets) as u64, ctrl_align) as usize;
    ctrl_offset + buckets + width
}
