use multiarray_core::MultiArray;

// Helper to build an array holding 0, 1, 2, ... in row-major order.
// Added allow(dead_code) because usage across different test crates isn't detected.
#[allow(dead_code)]
pub(crate) fn create_arange(shape: &[usize]) -> MultiArray<i64> {
    let numel: usize = shape.iter().product();
    MultiArray::from_vec((0..numel as i64).collect(), shape).expect("Test array creation failed")
}

/// Routes `log` output through env_logger when RUST_LOG is set.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
