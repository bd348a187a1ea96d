use crate::{SortContext, TUNED_PARAMS};

use super::common;

pub fn sort(data: &mut [i32], ctx: &mut SortContext) {
    ctx.reset();
    if data.len() < 2 {
        return;
    }

    quick_sort(data, 0, data.len() - 1, ctx);

    tracing::trace!(
        len = data.len(),
        partitions = ctx.partitions(),
        peak_pending = ctx.peak_pending(),
        "hybrid quick sort finished"
    );
}

/// Sorts `data[lower..=upper]` with an explicit stack of pending ranges.
///
/// The larger side of each split is pushed first so the smaller one is popped
/// next; the stack therefore stays within `O(log n)` entries.
pub fn quick_sort(data: &mut [i32], lower: usize, upper: usize, ctx: &mut SortContext) {
    ctx.push_pending(lower, upper);

    while let Some((lower, upper)) = ctx.pop_pending() {
        if lower >= upper {
            continue;
        }

        let split = common::partition_hoare_mid(data, lower, upper);
        ctx.count_partition();

        let left_len = split - lower;
        let right_len = upper - split;
        if left_len < right_len {
            settle(data, split + 1, right_len, ctx);
            settle(data, lower, left_len, ctx);
        } else {
            settle(data, lower, left_len, ctx);
            settle(data, split + 1, right_len, ctx);
        }
    }
}

#[inline]
fn settle(data: &mut [i32], start: usize, len: usize, ctx: &mut SortContext) {
    if len > TUNED_PARAMS.insertion_threshold {
        ctx.push_pending(start, start + len - 1);
    } else if len > 1 {
        common::insertion_sort_range(data, start, start + len - 1);
    }
}
