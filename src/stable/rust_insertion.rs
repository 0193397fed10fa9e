use std::cmp::Ordering;

sort_impl!("rust_insertion_stable");

/// Sorts the slice in place into non-decreasing order.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place (i.e., does not
/// allocate), *O*(*n*) for already sorted input and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Textbook insertion sort. Every element of the unsorted tail is swapped towards the front
/// until its predecessor is no longer greater than it.
///
/// # Examples
///
/// ```
/// let mut v = [3, 1, 2, 3, 1];
///
/// insertion_sort::sort(&mut v);
/// assert_eq!(v, [1, 1, 2, 3, 3]);
/// ```
#[inline]
pub fn sort(v: &mut [i32]) {
    insertion_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice in place with a comparator function.
///
/// An element is moved past its predecessor only if `compare` returns [`Ordering::Less`], so
/// elements that compare equal keep their relative order.
///
/// If `compare` does not implement a total order the resulting order is unspecified, but the
/// slice still holds exactly the elements it held before. The same is true if `compare` panics.
#[inline]
pub fn sort_by<F>(v: &mut [i32], mut compare: F)
where
    F: FnMut(&i32, &i32) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` and hands the same buffer back.
#[inline]
pub fn into_sorted(mut v: Vec<i32>) -> Vec<i32> {
    sort(&mut v);
    v
}

#[inline]
fn insertion_sort<F>(v: &mut [i32], is_less: &mut F)
where
    F: FnMut(&i32, &i32) -> bool,
{
    // Empty and single element slices are trivially sorted.
    if v.len() >= 2 {
        insertion_sort_shift_left(v, 1, is_less);
    }
}

/// Sort `v` assuming `v[..offset]` is already sorted.
fn insertion_sort_shift_left<F>(v: &mut [i32], offset: usize, is_less: &mut F)
where
    F: FnMut(&i32, &i32) -> bool,
{
    let len = v.len();

    assert!(
        offset != 0 && offset <= len,
        "invalid offset {offset} for slice of len {len}"
    );

    // Shift each element of the unsorted region v[i..] as far left as is needed to make v sorted.
    for i in offset..len {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Inserts `v[v.len() - 1]` into pre-sorted sequence `v[..v.len() - 1]` so that whole `v[..]`
/// becomes sorted.
#[inline]
fn insert_tail<F>(v: &mut [i32], is_less: &mut F)
where
    F: FnMut(&i32, &i32) -> bool,
{
    debug_assert!(v.len() >= 2);

    let mut j = v.len() - 1;

    // Strictly less, an element never moves past an equal one.
    while j > 0 && is_less(&v[j], &v[j - 1]) {
        v.swap(j, j - 1);
        j -= 1;
    }
}
