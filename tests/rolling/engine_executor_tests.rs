#![cfg(feature = "dev")]
//! Tests for the execution engine.
//!
//! These tests verify dispatch from a configuration to a reducer:
//! - Parameter-based and configuration-based entry points
//! - Validation before reduction
//! - Custom reduce pass injection
//!
//! ## Test Organization
//!
//! 1. **Configuration** - Defaults
//! 2. **Direct Execution** - `run` with each method
//! 3. **Configured Execution** - `run_with_config`, strides, custom passes

use rolling::internals::algorithms::method::Method;
use rolling::internals::engine::executor::{ReducePassFn, RollingConfig, RollingExecutor};
use rolling::internals::primitives::errors::RollingError;
use rolling::internals::primitives::sequence::Sequence;

// ============================================================================
// Helper Functions
// ============================================================================

/// Reference pass built on the standard library window iterator.
fn std_windows_pass(seq: Sequence<'_, f64>, window_size: usize) -> Vec<f64> {
    let logical = seq.to_vec();
    logical
        .windows(window_size)
        .map(|w| w.iter().fold(0.0, |acc, &v| acc + v))
        .collect()
}

/// Pass that ignores its input, to detect dispatch.
fn constant_pass(seq: Sequence<'_, f64>, window_size: usize) -> Vec<f64> {
    vec![-1.0; seq.len() - window_size + 1]
}

/// Pass that drops the last window.
fn short_pass(seq: Sequence<'_, f64>, window_size: usize) -> Vec<f64> {
    vec![0.0; seq.len() - window_size]
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test configuration defaults.
#[test]
fn test_config_new() {
    let config = RollingConfig::<f64>::new(4);

    assert_eq!(config.window_size, 4);
    assert_eq!(config.stride, 1);
    assert_eq!(config.method, Method::Strided);
    assert!(config.custom_reduce_pass.is_none());
}

// ============================================================================
// Direct Execution Tests
// ============================================================================

/// Test each method through the executor.
#[test]
fn test_run_each_method() {
    let data = [2.0, 4.0, 6.0, 8.0];

    for method in Method::ALL {
        let out = RollingExecutor::run(Sequence::new(&data), 3, method).unwrap();
        assert_eq!(out, vec![12.0, 18.0], "method {method}");
    }
}

/// Test validation failures surface before reduction.
#[test]
fn test_run_validation_errors() {
    let data = [1.0, 2.0];

    assert_eq!(
        RollingExecutor::run(Sequence::new(&data), 0, Method::Naive),
        Err(RollingError::InvalidWindowSize(0))
    );
    assert_eq!(
        RollingExecutor::run(Sequence::new(&data), 2, Method::Running),
        Err(RollingError::WindowTooLarge {
            window_size: 2,
            len: 2
        })
    );
    let empty: [f64; 0] = [];
    assert_eq!(
        RollingExecutor::run(Sequence::new(&empty), 1, Method::Strided),
        Err(RollingError::EmptyInput)
    );
}

// ============================================================================
// Configured Execution Tests
// ============================================================================

/// Test configured execution with a stride.
#[test]
fn test_run_with_config_stride() {
    let data = [1.0, 0.0, 2.0, 0.0, 3.0, 0.0];
    let config = RollingConfig {
        stride: 2,
        ..RollingConfig::new(2)
    };

    let out = RollingExecutor::run_with_config(&data, &config).unwrap();
    assert_eq!(out, vec![3.0, 5.0]);
}

/// Test an invalid stride in a hand-built configuration.
#[test]
fn test_run_with_config_zero_stride() {
    let data = [1.0, 2.0, 3.0];
    let config = RollingConfig {
        stride: 0,
        ..RollingConfig::new(2)
    };

    assert_eq!(
        RollingExecutor::run_with_config(&data, &config),
        Err(RollingError::InvalidStride(0))
    );
}

/// Test a custom pass replaces the built-in method.
#[test]
fn test_run_with_custom_pass() {
    let data = [1.0, 2.0, 3.0, 4.0];
    let config = RollingConfig {
        custom_reduce_pass: Some(constant_pass as ReducePassFn<f64>),
        ..RollingConfig::new(2)
    };

    let out = RollingExecutor::run_with_config(&data, &config).unwrap();
    assert_eq!(out, vec![-1.0; 3]);
}

/// Test a custom pass is still guarded by validation.
#[test]
fn test_custom_pass_is_validated() {
    let data = [1.0, 2.0];
    let config = RollingConfig {
        custom_reduce_pass: Some(constant_pass as ReducePassFn<f64>),
        ..RollingConfig::new(2)
    };

    assert!(RollingExecutor::run_with_config(&data, &config)
        .unwrap_err()
        .is_shape_error());
}

/// Test a custom pass must produce one value per window.
#[test]
fn test_custom_pass_output_length_checked() {
    let data = [1.0, 2.0, 3.0, 4.0];
    let config = RollingConfig {
        custom_reduce_pass: Some(short_pass as ReducePassFn<f64>),
        ..RollingConfig::new(2)
    };

    let err = RollingExecutor::run_with_config(&data, &config).unwrap_err();
    assert!(matches!(err, RollingError::InvalidInput(_)));
    assert!(!err.is_shape_error());
    assert!(err.to_string().contains("2 values for 3 windows"));
}

/// Test the standard library pass agrees with the built-in reducers.
#[test]
fn test_std_windows_pass_matches_methods() {
    let data: Vec<f64> = (0..30).map(|i| ((i * 7) % 11) as f64 - 5.0).collect();

    for stride in [1, 2, 3] {
        let reference = RollingExecutor::run_with_config(
            &data,
            &RollingConfig {
                stride,
                custom_reduce_pass: Some(std_windows_pass as ReducePassFn<f64>),
                ..RollingConfig::new(4)
            },
        )
        .unwrap();

        for method in [Method::Naive, Method::Strided] {
            let out = RollingExecutor::run_with_config(
                &data,
                &RollingConfig {
                    stride,
                    method,
                    ..RollingConfig::new(4)
                },
            )
            .unwrap();
            assert_eq!(out, reference, "method {method} stride {stride}");
        }
    }
}
