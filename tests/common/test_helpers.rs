//! Helper functions for integration tests

use lapbench_rs::grid::GridData;

/// Compute the expected 5-point Laplacian by direct substitution
///
/// Returns a full grid of expected output values: interior cells hold the
/// stencil result, border cells hold `border_value` (whatever the output
/// field is known to contain before the sweep).
pub fn expected_laplacian(u: &GridData, border_value: f32) -> Vec<Vec<f32>> {
    let dims = u.dimensions();
    let mut expected = vec![vec![border_value; dims.ydim]; dims.xdim];

    for i in 1..dims.xdim.saturating_sub(1) {
        for j in 1..dims.ydim.saturating_sub(1) {
            expected[i][j] = -4.0 * u.get(i, j)
                + u.get(i + 1, j)
                + u.get(i - 1, j)
                + u.get(i, j + 1)
                + u.get(i, j - 1);
        }
    }

    expected
}

/// Assert two fields hold identical logical content
pub fn assert_fields_equal(a: &GridData, b: &GridData, message: &str) {
    let dims = a.dimensions();
    assert_eq!(dims, b.dimensions(), "{}: Dimension mismatch", message);

    for i in 0..dims.xdim {
        for j in 0..dims.ydim {
            assert_eq!(
                a.get(i, j),
                b.get(i, j),
                "{}: Cell ({}, {}) differs",
                message,
                i,
                j
            );
        }
    }
}

/// Assert every border cell of a field holds `value`
pub fn assert_border_equals(field: &GridData, value: f32, message: &str) {
    let dims = field.dimensions();

    for i in 0..dims.xdim {
        for j in 0..dims.ydim {
            let on_border = i == 0 || j == 0 || i == dims.xdim - 1 || j == dims.ydim - 1;
            if on_border {
                assert_eq!(
                    field.get(i, j),
                    value,
                    "{}: Border cell ({}, {}) was touched",
                    message,
                    i,
                    j
                );
            }
        }
    }
}
