use ndarray::Array2;
use num_rs_matrix::{
    block_diag, cols_max, constant_dense, rows_min, set_values, to_symmetric, unroll, Matrix,
    MatrixError, Orientation,
};
use proptest::prelude::*;

fn matrix_from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Matrix {
    Array2::from_shape_vec((rows, cols), data).expect("matrix shape mismatch")
}

prop_compose! {
    fn small_matrix()(rows in 1usize..6, cols in 1usize..6,
                      values in prop::collection::vec(-10f64..10f64, 1..=36))
                      -> Matrix {
        let total = rows * cols;
        let data = values.into_iter().cycle().take(total).collect::<Vec<_>>();
        matrix_from_vec(data, rows, cols)
    }
}

prop_compose! {
    fn symmetric_matrix()(n in 1usize..6,
                          values in prop::collection::vec(-10f64..10f64, 1..=36))
                          -> Matrix {
        let data = values.into_iter().cycle().take(n * n).collect::<Vec<_>>();
        let m = matrix_from_vec(data, n, n);
        &m + &m.t()
    }
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::ByRow), Just(Orientation::ByColumn)]
}

proptest! {
    #[test]
    fn constant_fills_every_element(rows in 1usize..8, cols in 1usize..8,
                                    value in -1e6f64..1e6f64) {
        let m = constant_dense(rows, cols, value).expect("constant");
        prop_assert_eq!(m.dim(), (rows, cols));
        prop_assert!(m.iter().all(|&v| v == value));
    }

    #[test]
    fn set_values_round_trips_unroll(m in small_matrix(), order in orientation()) {
        let flat = unroll(&m, order);
        prop_assert_eq!(flat.len(), m.len());
        let mut target = Matrix::zeros(m.dim());
        set_values(&mut target, flat.view(), order).expect("set values");
        prop_assert_eq!(target, m);
    }

    #[test]
    fn counts_beyond_extent_fail(m in small_matrix(), extra in 1usize..4) {
        let (rows, cols) = m.dim();
        prop_assert_eq!(
            rows_min(rows + extra, &m),
            Err(MatrixError::DimensionExceeded { dim: "rows", count: rows + extra })
        );
        prop_assert_eq!(
            cols_max(cols + extra, &m),
            Err(MatrixError::DimensionExceeded { dim: "cols", count: cols + extra })
        );
    }

    #[test]
    fn exact_symmetry_converts(m in symmetric_matrix()) {
        let s = to_symmetric(&m).expect("symmetric");
        for ((i, j), &v) in m.indexed_iter() {
            prop_assert_eq!(s.get(i, j), v);
        }
    }

    #[test]
    fn empty_blocks_do_not_change_result(a in small_matrix(), b in small_matrix(),
                                         skipped in 0usize..4) {
        let empty = Matrix::zeros((0, skipped));
        let with_empty = block_diag([a.view(), empty.view(), b.view()]);
        let without = block_diag([a.view(), b.view()]);
        prop_assert_eq!(with_empty.dim(), (a.nrows() + b.nrows(), a.ncols() + b.ncols()));
        prop_assert_eq!(with_empty, without);
    }
}
