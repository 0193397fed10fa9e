//! Textbook insertion sort over `i32` slices, plus the std stable sort as a reference point.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(v: &mut [i32]) {
                sort(v);
            }

            #[inline]
            fn sort_by<F>(v: &mut [i32], compare: F)
            where
                F: FnMut(&i32, &i32) -> Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod stable;

pub use sort_test_tools::Sort;
pub use stable::rust_insertion::{into_sorted, sort, sort_by};
