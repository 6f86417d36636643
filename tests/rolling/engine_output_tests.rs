#![cfg(feature = "dev")]
//! Tests for rolling result output.
//!
//! ## Test Organization
//!
//! 1. **Accessors** - Length, ranges, iteration
//! 2. **Display** - Summary and table formatting

use rolling::internals::algorithms::method::Method;
use rolling::internals::engine::output::RollingResult;

fn sample_result(n_windows: usize) -> RollingResult<f64> {
    RollingResult {
        values: (0..n_windows).map(|i| i as f64).collect(),
        window_size: 3,
        stride: 1,
        input_len: n_windows + 2,
        method: Method::Strided,
    }
}

// ============================================================================
// Accessor Tests
// ============================================================================

/// Test basic accessors.
#[test]
fn test_result_accessors() {
    let result = sample_result(4);

    assert_eq!(result.len(), 4);
    assert!(!result.is_empty());
    assert_eq!(result.iter().copied().sum::<f64>(), 6.0);
    assert_eq!(result.clone().into_values(), vec![0.0, 1.0, 2.0, 3.0]);
}

/// Test window ranges map back to input indices.
#[test]
fn test_result_window_range() {
    let result = sample_result(4);

    assert_eq!(result.window_range(0), Some(0..3));
    assert_eq!(result.window_range(3), Some(3..6));
    assert_eq!(result.window_range(4), None);
    assert_eq!(result.window_range(3).unwrap().end, result.input_len);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary block.
#[test]
fn test_display_summary() {
    let output = format!("{}", sample_result(3));

    assert!(output.contains("Summary:"));
    assert!(output.contains("Data points: 5"));
    assert!(output.contains("Window size: 3"));
    assert!(output.contains("Method:      strided"));
    assert!(output.contains("Windows:     3"));
    assert!(!output.contains("Stride:"), "Unit stride is not printed");
}

/// Test the stride line appears for strided inputs.
#[test]
fn test_display_stride() {
    let mut result = sample_result(3);
    result.stride = 2;

    assert!(format!("{}", result).contains("Stride:      2"));
}

/// Test table rows.
#[test]
fn test_display_rows() {
    let output = format!("{}", sample_result(2));

    assert!(output.contains("Rolling Sums:"));
    assert!(output.contains("       0        2       0.000000"));
    assert!(output.contains("       1        3       1.000000"));
    assert!(!output.contains("..."));
}

/// Test long results are elided in the middle.
#[test]
fn test_display_truncation() {
    let output = format!("{}", sample_result(50));

    assert!(output.contains("..."));
    assert!(output.contains("       9       11       9.000000"));
    assert!(!output.contains("      10       12"));
    assert!(output.contains("      49       51      49.000000"));
}
