use std::mem;

/// Shifts `data[start..=right]` one slot towards higher indices, writing
/// `carried` into `start`.
///
/// The value previously at `right` is dropped: callers pass the slot that held
/// the element being inserted.
#[inline]
pub fn bubble_up(data: &mut [i32], start: usize, mut carried: i32, right: usize) {
    debug_assert!(right < data.len());
    debug_assert!(start <= right + 1);

    for slot in &mut data[start..=right] {
        carried = mem::replace(slot, carried);
    }
}

/// Inserts `pivot` (currently stored at `right`) into the sorted run
/// `data[left..right]`.
///
/// The pivot lands before the first element strictly greater than it, so
/// equal keys keep their relative order.
#[inline]
pub fn insert(data: &mut [i32], pivot: i32, mut left: usize, right: usize) {
    while left < right {
        if pivot < data[left] {
            let displaced = mem::replace(&mut data[left], pivot);
            bubble_up(data, left + 1, displaced, right);
            return;
        }
        left += 1;
    }
}

/// Sorts the inclusive range `data[lower..=upper]` in place.
#[inline]
pub fn insertion_sort_range(data: &mut [i32], lower: usize, upper: usize) {
    debug_assert!(upper < data.len());

    for right in (lower + 1)..=upper {
        let pivot = data[right];
        if data[right - 1] > pivot {
            insert(data, pivot, lower, right);
        }
    }
}

/// Hoare scan over `data[left..=right]` around a fixed `pivot` value.
///
/// Returns the last index of the `<= pivot` block. `data[left - 1]` must hold
/// a value `<= pivot`; it stops the right cursor.
#[inline]
pub fn partition_scan(data: &mut [i32], mut left: usize, mut right: usize, pivot: i32) -> usize {
    debug_assert!(left > 0 && data[left - 1] <= pivot);

    while left <= right {
        if data[left] > pivot && data[right] <= pivot {
            data.swap(left, right);
            left += 1;
            right -= 1;
        } else {
            if data[left] <= pivot {
                left += 1;
            }
            if data[right] > pivot {
                right -= 1;
            }
        }
    }

    right
}

/// Partitions `data[lower..=upper]` around its midpoint element and returns
/// the index the pivot settles at.
///
/// Afterwards everything in `data[lower..=split]` is `<= pivot` and everything
/// in `data[split + 1..=upper]` is `> pivot`. Keys equal to the pivot are not
/// grouped.
#[inline]
pub fn partition_hoare_mid(data: &mut [i32], lower: usize, upper: usize) -> usize {
    debug_assert!(lower < upper && upper < data.len());

    let mid = lower + ((upper - lower) >> 1);
    let pivot = data[mid];
    data.swap(mid, lower);

    let split = partition_scan(data, lower + 1, upper, pivot);
    data.swap(lower, split);
    split
}

#[inline]
pub fn is_sorted_non_decreasing(data: &[i32]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}
