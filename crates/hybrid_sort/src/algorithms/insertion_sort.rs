use crate::SortContext;

use super::common;

pub fn sort(data: &mut [i32], _ctx: &mut SortContext) {
    if data.len() < 2 {
        return;
    }
    common::insertion_sort_range(data, 0, data.len() - 1);
}
