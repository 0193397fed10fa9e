pub mod rust_insertion;

// Reference implementation, the tests and benchmarks compare against it.
pub mod rust_std;
