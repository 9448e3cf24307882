use crate::errors::HillCipherError;
use crate::preset::alphabet::letter_index;
use crate::ring::matrix_ops::{determinant, matrix_inverse, square_dimension};
use crate::ring::{Matrix, Ring};

use rand::Rng;

use serde::{Deserialize, Serialize};

const RANDOM_KEY_ATTEMPTS: usize = 100;

/// A square N×N key matrix.
///
/// Entries are conceptually residues in `[0, m)`; out-of-range values are reduced
/// whenever the matrix takes part in arithmetic. Serializes as a plain JSON array
/// of rows, e.g. `[[6,24,1],[13,16,10],[20,17,15]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Matrix", into = "Matrix")]
pub struct KeyMatrix {
    matrix: Matrix,
}

impl KeyMatrix {
    /// Wraps `matrix` after checking that it is non-empty and square.
    pub fn try_with(matrix: Matrix) -> Result<Self, HillCipherError> {
        square_dimension(&matrix)?;
        Ok(Self { matrix })
    }

    /// Parses a key from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, HillCipherError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a key from N² letters read row-major, e.g. `GYBNQKURP` for a 3×3 key.
    ///
    /// Case and whitespace are ignored; any other non-letter is rejected.
    pub fn from_keyword(keyword: &str) -> Result<Self, HillCipherError> {
        let entries = keyword
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                letter_index(c.to_ascii_uppercase()).ok_or_else(|| {
                    HillCipherError::InvalidKeyword(format!("'{}' is not a letter", c))
                })
            })
            .collect::<Result<Vec<i64>, _>>()?;

        let dimension = entries.len().isqrt();
        if dimension == 0 || dimension * dimension != entries.len() {
            return Err(HillCipherError::InvalidKeyword(format!(
                "Keyword length {} is not a positive perfect square",
                entries.len()
            )));
        }

        let matrix = entries
            .chunks_exact(dimension)
            .map(|row| row.to_vec())
            .collect();

        Self::try_with(matrix)
    }

    /// Draws uniformly random keys until one is invertible modulo `ring.modulus()`.
    pub fn random_invertible<R: Rng + ?Sized>(
        dimension: usize,
        ring: &Ring,
        rng: &mut R,
    ) -> Result<Self, HillCipherError> {
        if dimension == 0 {
            return Err(HillCipherError::DimensionMismatch(
                "Key dimension must be > 0".to_string(),
            ));
        }

        for attempt in 0..RANDOM_KEY_ATTEMPTS {
            let matrix: Matrix = (0..dimension)
                .map(|_| {
                    (0..dimension)
                        .map(|_| rng.random_range(0..ring.modulus()) as i64)
                        .collect()
                })
                .collect();

            let key = Self { matrix };
            if key.is_invertible(ring) {
                log::debug!("random key found after {} attempt(s)", attempt + 1);
                return Ok(key);
            }
        }

        Err(HillCipherError::KeyGeneration(format!(
            "Failed to generate invertible {}x{} key mod {} after {} attempts",
            dimension,
            dimension,
            ring.modulus(),
            RANDOM_KEY_ATTEMPTS
        )))
    }

    /// Block size N of the key.
    pub fn dimension(&self) -> usize {
        self.matrix.len()
    }

    pub fn as_matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Determinant modulo `ring.modulus()`, in `[0, m)`.
    pub fn determinant(&self, ring: &Ring) -> Result<i64, HillCipherError> {
        determinant(&self.matrix, ring)
    }

    /// Whether the determinant is a unit modulo `ring.modulus()`.
    pub fn is_invertible(&self, ring: &Ring) -> bool {
        self.determinant(ring).is_ok_and(|det| ring.is_unit(det))
    }

    /// The inverse key modulo `ring.modulus()`.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NotInvertible` if the determinant shares a factor with the modulus.
    pub fn inverse(&self, ring: &Ring) -> Result<KeyMatrix, HillCipherError> {
        Ok(Self {
            matrix: matrix_inverse(&self.matrix, ring)?,
        })
    }
}

impl TryFrom<Matrix> for KeyMatrix {
    type Error = HillCipherError;

    fn try_from(matrix: Matrix) -> Result<Self, Self::Error> {
        Self::try_with(matrix)
    }
}

impl From<KeyMatrix> for Matrix {
    fn from(key: KeyMatrix) -> Self {
        key.matrix
    }
}
