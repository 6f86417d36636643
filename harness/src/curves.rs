//! Reference complexity curves.
//!
//! Each row holds `n / 50`, `log2(n)` and `(n / 200)^2`, scaled so the three
//! curves share a readable vertical range for `n` up to 1000.

use std::io::{self, Write};

/// One sample of the reference curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityRow {
    pub n: u32,
    pub linear: f64,
    pub logarithmic: f64,
    pub quadratic: f64,
}

/// Rows for `n = 1..=n_max`.
pub fn complexity_rows(n_max: u32) -> Vec<ComplexityRow> {
    (1..=n_max)
        .map(|n| {
            let x = f64::from(n);
            ComplexityRow {
                n,
                linear: x / 50.0,
                logarithmic: x.log2(),
                quadratic: (x / 200.0).powi(2),
            }
        })
        .collect()
}

/// Write rows as CSV with a header line.
pub fn write_csv<W: Write>(rows: &[ComplexityRow], mut out: W) -> io::Result<()> {
    writeln!(out, "n,O(n),O(ln(n)),O(n^2)")?;
    for row in rows {
        writeln!(
            out,
            "{},{:.6},{:.6},{:.6}",
            row.n, row.linear, row.logarithmic, row.quadratic
        )?;
    }
    out.flush()
}
