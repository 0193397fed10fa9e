use std::cmp::Ordering;

sort_impl!("rust_std_stable");

#[inline]
pub fn sort(v: &mut [i32]) {
    v.sort();
}

#[inline]
pub fn sort_by<F>(v: &mut [i32], compare: F)
where
    F: FnMut(&i32, &i32) -> Ordering,
{
    v.sort_by(compare);
}
