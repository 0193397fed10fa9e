#![no_main]

use libfuzzer_sys::fuzz_target;

use insertion_sort::stable::rust_insertion as test_sort;
use insertion_sort_fuzz::u8_as_i32;

fuzz_target!(|data: &[u8]| {
    let mut v = u8_as_i32(data);

    let mut expected = v.clone();
    expected.sort();

    test_sort::sort(&mut v);
    assert_eq!(v, expected);
});
