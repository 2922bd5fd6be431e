// =========================================================================
// FALSIFY-NM: normalization operator contract
//
//   NM-001  sum(M, a) slices add up to 1
//   NM-002  max(M, a) is bounded by 1 and reaches 1 in every slice
//   NM-003  vector(M, a) slices have unit L2 norm
//   NM-004  push_negatives leaves every slice with a minimum >= 0 and
//           leaves non-negative slices bit-identical
//   NM-005  add1to0 leaves no zero behind on non-negative input
//   NM-006  Rows on M equals Columns on M^T
// =========================================================================

use super::*;

const AXES: [Option<Axis>; 3] = [None, Some(Axis::Rows), Some(Axis::Columns)];

/// Element indices of every slice along `axis`.
fn slices(rows: usize, cols: usize, axis: Option<Axis>) -> Vec<Vec<(usize, usize)>> {
    match axis {
        None => vec![(0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .collect()],
        Some(Axis::Rows) => (0..rows)
            .map(|i| (0..cols).map(|j| (i, j)).collect())
            .collect(),
        Some(Axis::Columns) => (0..cols)
            .map(|j| (0..rows).map(|i| (i, j)).collect())
            .collect(),
    }
}

fn positive_matrix(rows: usize, cols: usize, seed: u32) -> Matrix<f64> {
    let data = (0..rows * cols)
        .map(|k| (((k as f64) + f64::from(seed)) * 0.37).sin().abs() * 100.0 + 0.5)
        .collect();
    Matrix::from_vec(rows, cols, data).expect("valid")
}

fn signed_matrix(rows: usize, cols: usize, seed: u32) -> Matrix<i64> {
    let data = (0..rows * cols)
        .map(|k| ((k as i64 * 31 + i64::from(seed) * 17) % 41) - 20)
        .collect();
    Matrix::from_vec(rows, cols, data).expect("valid")
}

/// FALSIFY-NM-001: sum slices add to 1
#[test]
fn falsify_nm_001_sum_slices_add_to_one() {
    let m = Matrix::from_vec(3, 2, vec![1, 10, 2, 20, 3, 30]).expect("valid");
    for axis in AXES {
        let out = sum(&m, axis);
        for slice in slices(3, 2, axis) {
            let total: f64 = slice.iter().map(|&(i, j)| out.get(i, j)).sum();
            assert!(
                (total - 1.0).abs() < 1e-10,
                "FALSIFIED NM-001: slice total={total} along {axis:?}"
            );
        }
    }
}

/// FALSIFY-NM-002: max reaches exactly 1 in every slice
#[test]
fn falsify_nm_002_max_reaches_one() {
    let m = Matrix::from_vec(2, 3, vec![5, 1, 7, 2, 9, 3]).expect("valid");
    for axis in AXES {
        let out = max(&m, axis);
        for slice in slices(2, 3, axis) {
            let values: Vec<f64> = slice.iter().map(|&(i, j)| out.get(i, j)).collect();
            assert!(
                values.iter().all(|&v| v <= 1.0),
                "FALSIFIED NM-002: value above 1 along {axis:?}: {values:?}"
            );
            assert!(
                values.iter().any(|&v| v == 1.0),
                "FALSIFIED NM-002: no exact 1 along {axis:?}: {values:?}"
            );
        }
    }
}

/// FALSIFY-NM-004: integer dtype survives and the documented shifts hold
#[test]
fn falsify_nm_004_push_negatives_examples() {
    let m = Matrix::from_vec(2, 2, vec![-1_i64, 2, 3, 4]).expect("valid");
    let flat: Matrix<i64> = push_negatives(&m, None);
    let cols: Matrix<i64> = push_negatives(&m, Some(Axis::try_from(0usize).expect("axis 0")));
    let rows: Matrix<i64> = push_negatives(&m, Some(Axis::try_from(1usize).expect("axis 1")));

    assert_eq!(flat.as_slice(), &[0, 3, 4, 5], "FALSIFIED NM-004: flat");
    assert_eq!(cols.as_slice(), &[0, 2, 4, 4], "FALSIFIED NM-004: axis 0");
    assert_eq!(rows.as_slice(), &[0, 3, 3, 4], "FALSIFIED NM-004: axis 1");
}

mod nm_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(40))]

        /// FALSIFY-NM-001-prop: sum slices add to 1 for random positive data
        #[test]
        fn falsify_nm_001_prop_sum(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let m = positive_matrix(rows, cols, seed);
            for axis in AXES {
                let out = sum(&m, axis);
                for slice in slices(rows, cols, axis) {
                    let total: f64 = slice.iter().map(|&(i, j)| out.get(i, j)).sum();
                    prop_assert!(
                        (total - 1.0).abs() < 1e-9,
                        "FALSIFIED NM-001-prop: total={} along {:?}", total, axis
                    );
                }
            }
        }

        /// FALSIFY-NM-002-prop: max output bounded by 1 with 1 attained
        #[test]
        fn falsify_nm_002_prop_max(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let m = positive_matrix(rows, cols, seed);
            for axis in AXES {
                let out = max(&m, axis);
                for slice in slices(rows, cols, axis) {
                    let top = slice
                        .iter()
                        .map(|&(i, j)| out.get(i, j))
                        .fold(f64::NEG_INFINITY, f64::max);
                    prop_assert!(top == 1.0, "FALSIFIED NM-002-prop: top={} along {:?}", top, axis);
                }
            }
        }

        /// FALSIFY-NM-003-prop: squared vector output adds to 1 per slice
        #[test]
        fn falsify_nm_003_prop_vector(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let m = signed_matrix(rows, cols, seed).to_f64();
            for axis in AXES {
                let out = vector(&m, axis);
                for slice in slices(rows, cols, axis) {
                    if slice.iter().all(|&(i, j)| m.get(i, j) == 0.0) {
                        continue;
                    }
                    let sq: f64 = slice.iter().map(|&(i, j)| out.get(i, j).powi(2)).sum();
                    prop_assert!(
                        (sq - 1.0).abs() < 1e-9,
                        "FALSIFIED NM-003-prop: squared sum={} along {:?}", sq, axis
                    );
                }
            }
        }

        /// FALSIFY-NM-004-prop: shifted slices bottom out at 0, others unchanged
        #[test]
        fn falsify_nm_004_prop_push_negatives(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let m = signed_matrix(rows, cols, seed);
            for axis in AXES {
                let out = push_negatives(&m, axis);
                for slice in slices(rows, cols, axis) {
                    let slice_min = |x: &Matrix<i64>| {
                        slice.iter().map(|&(i, j)| x.get(i, j)).min().expect("non-empty")
                    };
                    let before_min = slice_min(&m);
                    let after_min = slice_min(&out);
                    if before_min < 0 {
                        prop_assert_eq!(after_min, 0, "FALSIFIED NM-004-prop: min after shift");
                    } else {
                        for &(i, j) in &slice {
                            prop_assert_eq!(
                                out.get(i, j),
                                m.get(i, j),
                                "FALSIFIED NM-004-prop: untouched slice changed"
                            );
                        }
                    }
                }
            }
        }

        /// FALSIFY-NM-005-prop: no zero survives add1to0 on non-negative input
        #[test]
        fn falsify_nm_005_prop_add1to0(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let m = push_negatives(&signed_matrix(rows, cols, seed), None);
            for axis in AXES {
                let out = add1to0(&m, axis);
                prop_assert!(
                    !out.contains_zero(),
                    "FALSIFIED NM-005-prop: zero left along {:?}",
                    axis
                );
            }
        }

        /// FALSIFY-NM-006-prop: Rows on M equals Columns on M^T, transposed back
        #[test]
        fn falsify_nm_006_prop_axis_duality(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let m = signed_matrix(rows, cols, seed);
            let mt = m.transpose();
            prop_assert_eq!(
                push_negatives(&m, Some(Axis::Rows)),
                push_negatives(&mt, Some(Axis::Columns)).transpose()
            );
            prop_assert_eq!(
                add1to0(&m, Some(Axis::Rows)),
                add1to0(&mt, Some(Axis::Columns)).transpose()
            );
            let p = positive_matrix(rows, cols, seed);
            prop_assert_eq!(
                sum(&p, Some(Axis::Rows)),
                sum(&p.transpose(), Some(Axis::Columns)).transpose()
            );
        }
    }
}
