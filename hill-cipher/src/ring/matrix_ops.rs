use crate::errors::HillCipherError;
use crate::ring::{Matrix, Ring, Vector};

/// A·x where A is an m×n matrix and x is a length–n vector.
/// Returns an m‐vector.
pub fn matrix_vector_mul(a: &Matrix, x: &Vector, ring: &Ring) -> Result<Vector, HillCipherError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(HillCipherError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; m];
    for i in 0..m {
        if a[i].len() != n {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                a[i].len(),
                n
            )));
        }
        let mut sum = 0i64;
        for j in 0..n {
            let term = ring.mul(a[i][j], x[j]);
            sum = ring.add(sum, term);
        }
        y[i] = sum;
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `HillCipherError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A
    if b.len() != m_common {
        return Err(HillCipherError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }
    let p = b.first().map_or(0, |row| row.len()); // cols in B

    let mut c = vec![vec![0; p]; n];

    for i in 0..n {
        if a[i].len() != m_common {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        for j in 0..p {
            let mut sum = 0i64;
            #[allow(clippy::needless_range_loop)]
            for k in 0..m_common {
                if b[k].len() != p {
                    return Err(HillCipherError::DimensionMismatch(format!(
                        "Matrix B row {} has incorrect length (expected {})",
                        k, p
                    )));
                }
                let term = ring.mul(a[i][k], b[k][j]);
                sum = ring.add(sum, term);
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Checks that `matrix` is a non-empty square matrix and returns its dimension.
pub fn square_dimension(matrix: &Matrix) -> Result<usize, HillCipherError> {
    let n = matrix.len();
    if n == 0 {
        return Err(HillCipherError::DimensionMismatch(
            "Matrix must have at least one row".into(),
        ));
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Matrix must be square: row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(n)
}

/// The submatrix left after deleting `row` and `col`.
///
/// Assumes `matrix` is square with dimension at least 2.
pub fn minor(matrix: &Matrix, row: usize, col: usize) -> Matrix {
    matrix
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Determinant of a square matrix modulo `m`, reduced into `[0, m)`.
///
/// Triangularizes a reduced copy with Euclidean row operations: each entry below a
/// pivot is cleared by alternately subtracting multiples and swapping rows, as in
/// the gcd algorithm. Only row swaps (which flip the sign) and row subtractions are
/// used, so no division is needed and composite moduli such as 26 work. Costs
/// O(n³ log m).
///
/// # Errors
///
/// Returns `HillCipherError::DimensionMismatch` if the matrix is empty or not square.
pub fn determinant(matrix: &Matrix, ring: &Ring) -> Result<i64, HillCipherError> {
    square_dimension(matrix)?;
    Ok(eliminate(matrix, ring))
}

fn eliminate(matrix: &Matrix, ring: &Ring) -> i64 {
    let n = matrix.len();
    let mut mat: Matrix = matrix
        .iter()
        .map(|row| row.iter().map(|&v| ring.reduce(v)).collect())
        .collect();

    let mut det = 1;
    for col in 0..n {
        for row in (col + 1)..n {
            while mat[row][col] != 0 {
                // both in [0, m), so the remainder stays exact
                let q = mat[col][col] / mat[row][col];
                for k in col..n {
                    let scaled = ring.mul(q, mat[row][k]);
                    mat[col][k] = ring.sub(mat[col][k], scaled);
                }
                mat.swap(col, row);
                det = ring.neg(det);
            }
        }

        if mat[col][col] == 0 {
            return 0;
        }
        det = ring.mul(det, mat[col][col]);
    }

    det
}

/// The signed cofactor `(-1)^(row+col) · det(minor(row, col))` modulo `m`.
///
/// Assumes `matrix` is square with dimension at least 2.
pub fn cofactor(matrix: &Matrix, row: usize, col: usize, ring: &Ring) -> i64 {
    let minor_det = eliminate(&minor(matrix, row, col), ring);
    if (row + col) % 2 == 0 {
        minor_det
    } else {
        ring.neg(minor_det)
    }
}

/// Adjugate (transpose of the cofactor matrix) modulo `m`.
///
/// The adjugate of a 1×1 matrix is `[[1]]`.
pub fn adjugate(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    let n = square_dimension(matrix)?;
    if n == 1 {
        return Ok(identity_matrix(1));
    }

    let mut adj = vec![vec![0; n]; n];
    for (i, row) in adj.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            // transposed: adj[i][j] = C[j][i]
            *entry = cofactor(matrix, j, i, ring);
        }
    }
    Ok(adj)
}

/// Inverse of a square matrix modulo `m`: `det⁻¹ · adj(A)`, every entry in `[0, m)`.
///
/// # Errors
///
/// Returns `HillCipherError::NotInvertible` if the determinant shares a factor with the modulus,
/// and `HillCipherError::DimensionMismatch` if the matrix is empty or not square.
pub fn matrix_inverse(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    let det = determinant(matrix, ring)?;
    let det_inv = ring
        .inv(det)
        .map_err(|_| HillCipherError::NotInvertible {
            determinant: det,
            modulus: ring.modulus(),
        })?;

    let inverse: Matrix = adjugate(matrix, ring)?
        .into_iter()
        .map(|row| row.into_iter().map(|v| ring.mul(v, det_inv)).collect())
        .collect();

    log::debug!("det = {}, det^-1 = {}, inverse = {:?}", det, det_inv, inverse);

    Ok(inverse)
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    use std::time::{Duration, Instant};

    fn test_ring() -> Ring {
        Ring::try_with(26).unwrap()
    }

    /// Cofactor expansion along the first row, the textbook definition.
    fn laplace(matrix: &Matrix, ring: &Ring) -> i64 {
        match matrix.len() {
            1 => ring.reduce(matrix[0][0]),
            n => (0..n).fold(0, |acc, j| {
                let term = ring.mul(matrix[0][j], laplace(&minor(matrix, 0, j), ring));
                if j % 2 == 0 {
                    ring.add(acc, term)
                } else {
                    ring.sub(acc, term)
                }
            }),
        }
    }

    /// Square matrix of dimension 1..=6 with entries anywhere in i64.
    #[derive(Debug, Clone)]
    struct SquareMatrix(Matrix);

    impl Arbitrary for SquareMatrix {
        fn arbitrary(g: &mut Gen) -> Self {
            let n = usize::arbitrary(g) % 6 + 1;
            let matrix = (0..n)
                .map(|_| (0..n).map(|_| i64::arbitrary(g) % 1000).collect())
                .collect();
            SquareMatrix(matrix)
        }
    }

    fn textbook_key() -> Matrix {
        vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]
    }

    #[test]
    fn test_matrix_vector_mul_ok() {
        let ring = test_ring();
        // [0, 2, 19] is "ACT"
        let x = vec![0, 2, 19];
        // R1: (6*0 + 24*2 + 1*19) = 67 = 15 mod 26
        // R2: (13*0 + 16*2 + 10*19) = 222 = 14 mod 26
        // R3: (20*0 + 17*2 + 15*19) = 319 = 7 mod 26
        assert_eq!(
            matrix_vector_mul(&textbook_key(), &x, &ring).unwrap(),
            vec![15, 14, 7]
        );
    }

    #[test]
    fn test_matrix_vector_mul_dimension_mismatch() {
        let ring = test_ring();
        let x = vec![5, 6];
        assert!(matrix_vector_mul(&textbook_key(), &x, &ring).is_err());
    }

    #[test]
    fn test_matrix_mul_dimension_mismatch() {
        let ring = test_ring();
        let e = vec![vec![1, 2], vec![3, 4]]; // 2x2
        let f = vec![vec![1], vec![2], vec![3]]; // 3x1
        assert!(matrix_mul(&e, &f, &ring).is_err());

        let c = vec![vec![1], vec![2]]; // 2x1
        let d = vec![vec![3, 4]]; // 1x2
        assert_eq!(matrix_mul(&c, &d, &ring).unwrap(), vec![vec![3, 4], vec![6, 8]]);
    }

    #[test]
    fn test_identity_matrix() {
        let expected3 = vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]];
        assert_eq!(identity_matrix(3), expected3);
        assert_eq!(identity_matrix(1), vec![vec![1]]);
        assert_eq!(identity_matrix(0), Matrix::new());
    }

    #[test]
    fn test_square_dimension() {
        assert_eq!(square_dimension(&textbook_key()).unwrap(), 3);
        assert!(square_dimension(&Matrix::new()).is_err());
        assert!(square_dimension(&vec![vec![1, 2], vec![3]]).is_err());
        assert!(square_dimension(&vec![vec![1, 2, 3], vec![4, 5, 6]]).is_err());
    }

    #[test]
    fn test_minor() {
        let expected = vec![vec![13, 10], vec![20, 15]];
        assert_eq!(minor(&textbook_key(), 0, 1), expected);
    }

    #[test]
    fn test_determinant_matches_closed_form() {
        let ring = test_ring();
        // 6*(240 - 170) - 24*(195 - 200) + 1*(221 - 320) = 441 = 25 mod 26
        assert_eq!(determinant(&textbook_key(), &ring).unwrap(), 25);

        assert_eq!(determinant(&vec![vec![3, 3], vec![2, 5]], &ring).unwrap(), 9);
        assert_eq!(determinant(&vec![vec![-1]], &ring).unwrap(), 25);
        assert_eq!(determinant(&identity_matrix(5), &ring).unwrap(), 1);
    }

    #[test]
    fn test_determinant_4x4() {
        let ring = test_ring();
        let matrix = vec![
            vec![1, 2, 3, 4],
            vec![0, 1, 2, 3],
            vec![0, 0, 1, 2],
            vec![1, 0, 0, 1],
        ];
        assert_eq!(determinant(&matrix, &ring).unwrap(), 1);
    }

    #[test]
    fn test_determinant_needs_row_swaps() {
        let ring = test_ring();
        // zero pivot, and pivots that are zero divisors mod 26
        let matrix = vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 1]];
        assert_eq!(determinant(&matrix, &ring).unwrap(), 25);

        let matrix = vec![vec![2, 1], vec![13, 1]];
        // 2 - 13 = -11 = 15 mod 26
        assert_eq!(determinant(&matrix, &ring).unwrap(), 15);

        let matrix = vec![vec![13, 0], vec![0, 2]];
        assert_eq!(determinant(&matrix, &ring).unwrap(), 0);
    }

    #[quickcheck]
    fn prop_elimination_matches_laplace(matrix: SquareMatrix, modulus: u8) -> bool {
        let Ok(ring) = Ring::try_with(modulus as u64) else {
            return true;
        };

        determinant(&matrix.0, &ring).ok() == Some(laplace(&matrix.0, &ring))
    }

    #[test]
    fn test_large_dimension_stays_fast() {
        let ring = test_ring();
        // lower unitriangular plus a unit diagonal: det = 3^n
        let n = 16;
        let mut matrix: Matrix = (0..n)
            .map(|i| (0..n).map(|j| if j < i { (i * 7 + j * 3) as i64 % 26 } else { 0 }).collect())
            .collect();
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = 3;
        }

        let started = Instant::now();
        let inverse = matrix_inverse(&matrix, &ring).unwrap();
        assert_eq!(matrix_mul(&matrix, &inverse, &ring).unwrap(), identity_matrix(n));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_adjugate_2x2() {
        let ring = test_ring();
        // adj [[a, b], [c, d]] = [[d, -b], [-c, a]]
        let adj = adjugate(&vec![vec![3, 3], vec![2, 5]], &ring).unwrap();
        assert_eq!(adj, vec![vec![5, 23], vec![24, 3]]);
    }

    #[test]
    fn test_matrix_inverse_textbook_key() {
        let ring = test_ring();
        let inverse = matrix_inverse(&textbook_key(), &ring).unwrap();
        assert_eq!(
            inverse,
            vec![vec![8, 5, 10], vec![21, 8, 21], vec![21, 12, 8]]
        );
        let product = matrix_mul(&textbook_key(), &inverse, &ring).unwrap();
        assert_eq!(product, identity_matrix(3));
    }

    #[test]
    fn test_matrix_inverse_2x2() {
        let ring = test_ring();
        // det = 9, 9^-1 = 3, inverse = 3 * [[5, 23], [24, 3]] mod 26
        let inverse = matrix_inverse(&vec![vec![3, 3], vec![2, 5]], &ring).unwrap();
        assert_eq!(inverse, vec![vec![15, 17], vec![20, 9]]);
    }

    #[test]
    fn test_matrix_inverse_1x1() {
        let ring = test_ring();
        assert_eq!(matrix_inverse(&vec![vec![3]], &ring).unwrap(), vec![vec![9]]);
    }

    #[test]
    fn test_matrix_inverse_4x4() {
        let ring = test_ring();
        let matrix = vec![
            vec![3, 0, 0, 0],
            vec![0, 5, 0, 0],
            vec![1, 0, 7, 0],
            vec![0, 2, 0, 1],
        ];
        let inverse = matrix_inverse(&matrix, &ring).unwrap();
        assert_eq!(
            inverse,
            vec![
                vec![9, 0, 0, 0],
                vec![0, 21, 0, 0],
                vec![21, 0, 15, 0],
                vec![0, 10, 0, 1],
            ]
        );
        assert_eq!(matrix_mul(&inverse, &matrix, &ring).unwrap(), identity_matrix(4));
    }

    #[test]
    fn test_matrix_inverse_singular() {
        let ring = test_ring();
        let cases = [
            (vec![vec![1, 2, 3], vec![2, 4, 6], vec![1, 1, 1]], 0),
            (vec![vec![2, 4, 6], vec![1, 3, 5], vec![0, 0, 1]], 2),
            (vec![vec![13, 0, 0], vec![0, 1, 0], vec![0, 0, 1]], 13),
        ];
        for (matrix, det) in cases {
            match matrix_inverse(&matrix, &ring) {
                Err(HillCipherError::NotInvertible { determinant, modulus }) => {
                    assert_eq!(determinant, det);
                    assert_eq!(modulus, 26);
                }
                other => panic!("expected NotInvertible, got {:?}", other),
            }
        }
    }
}
