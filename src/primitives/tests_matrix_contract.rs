// =========================================================================
// FALSIFY-MX: Matrix primitives contract
//
// The engine never re-checks rectangularity, so every constructor must
// keep `data.len() == rows * cols` and transposition must not reorder
// values within a slice.
// =========================================================================

use super::*;
use proptest::prelude::*;

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att, a, "FALSIFIED MX-001: (A^T)^T != A");
}

/// FALSIFY-MX-002: Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn falsify_mx_002_transpose_swaps_shape() {
    let a = Matrix::from_vec(3, 5, vec![0.0; 15]).expect("valid");
    let at = a.transpose();

    assert_eq!(
        at.shape(),
        (5, 3),
        "FALSIFIED MX-002: transpose shape={:?}, expected (5,3)",
        at.shape()
    );
}

/// FALSIFY-MX-003: row i of A equals column i of A^T
#[test]
fn falsify_mx_003_row_is_transposed_column() {
    let a = Matrix::from_vec(2, 3, vec![1, -2, 3, 0, 5, -6]).expect("valid");
    let at = a.transpose();

    for i in 0..2 {
        assert_eq!(
            a.row(i),
            at.column(i),
            "FALSIFIED MX-003: row {i} != transposed column {i}"
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// FALSIFY-MX-004-prop: from_rows(to_rows(A)) = A
    #[test]
    fn falsify_mx_004_prop_rows_roundtrip(
        rows in 1..=6usize,
        cols in 1..=6usize,
        seed in 0..500i64,
    ) {
        let data: Vec<i64> = (0..rows * cols).map(|k| (k as i64 * 7 + seed) % 11 - 5).collect();
        let a = Matrix::from_vec(rows, cols, data).expect("valid");
        let back = Matrix::from_rows(a.to_rows()).expect("rectangular");
        prop_assert_eq!(back, a, "FALSIFIED MX-004-prop: rows round-trip changed matrix");
    }
}
