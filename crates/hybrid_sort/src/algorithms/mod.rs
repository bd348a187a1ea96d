pub(crate) mod common;
pub(crate) mod hybrid_quick_sort;
pub(crate) mod insertion_sort;
