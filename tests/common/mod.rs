//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    assert_vectors_close,
    on_axis_loop_field,
    relative_error,
};
