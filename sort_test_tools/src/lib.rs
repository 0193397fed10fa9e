use std::cmp::Ordering;

pub trait Sort {
    fn name() -> String;

    fn sort(v: &mut [i32]);

    fn sort_by<F>(v: &mut [i32], compare: F)
    where
        F: FnMut(&i32, &i32) -> Ordering;
}

pub mod config;
pub mod patterns;

// Used by the test instantiation macros in the calling crate.
#[doc(hidden)]
pub use paste;
