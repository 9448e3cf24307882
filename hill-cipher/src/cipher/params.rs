use crate::cipher::key::KeyMatrix;
use crate::errors::HillCipherError;
use crate::preset::alphabet::{PADDING_LETTER, alphabet_size, letter_index};
use crate::ring::matrix_ops::matrix_vector_mul;
use crate::ring::{Matrix, Ring, Vector};
use crate::text::{blocks_from_cipher, from_blocks, to_blocks};

use serde::{Deserialize, Serialize};

/// Parameters of a Hill cipher instance.
///
/// Serializes as `{"dimension":3,"modulus":26,"padding":"X"}`; deserializing runs the
/// same checks as [`HillParams::try_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHillParams", into = "RawHillParams")]
pub struct HillParams {
    /// Block size N, also the dimension of every key used with these parameters.
    dimension: usize,
    /// Z_m with m equal to the alphabet size.
    ring: Ring,
    /// Filler letter appended to plaintext to complete the last block.
    padding: char,
}

/// Unchecked wire form of [`HillParams`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawHillParams {
    dimension: usize,
    modulus: u64,
    padding: char,
}

impl TryFrom<RawHillParams> for HillParams {
    type Error = HillCipherError;

    fn try_from(raw: RawHillParams) -> Result<Self, Self::Error> {
        Self::try_with(raw.dimension, raw.modulus, raw.padding)
    }
}

impl From<HillParams> for RawHillParams {
    fn from(params: HillParams) -> Self {
        Self {
            dimension: params.dimension,
            modulus: params.ring.modulus(),
            padding: params.padding,
        }
    }
}

impl Default for HillParams {
    /// 3-letter blocks over the 26-letter alphabet, padded with `X`.
    fn default() -> Self {
        Self {
            dimension: 3,
            ring: Ring::default(),
            padding: PADDING_LETTER,
        }
    }
}

impl HillParams {
    /// Creates a new HillParams instance with the given parameters.
    pub fn try_with(dimension: usize, modulus: u64, padding: char) -> Result<Self, HillCipherError> {
        if dimension == 0 {
            return Err(HillCipherError::DimensionMismatch(
                "Block size must be > 0".to_string(),
            ));
        }

        if modulus != alphabet_size() {
            return Err(HillCipherError::InvalidModulus(format!(
                "Modulus must equal the alphabet size {}, got {}",
                alphabet_size(),
                modulus
            )));
        }

        if letter_index(padding).is_none() {
            return Err(HillCipherError::MalformedInput(format!(
                "Padding '{}' is not an uppercase alphabet letter",
                padding
            )));
        }

        Ok(Self {
            dimension,
            ring: Ring::try_with(modulus)?,
            padding,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn padding(&self) -> char {
        self.padding
    }

    /// Default parameters with the block size taken from `key`.
    pub fn for_key(key: &KeyMatrix) -> Self {
        Self {
            dimension: key.dimension(),
            ..Self::default()
        }
    }

    /// Encrypts `text`: normalize, pad, multiply every block by `key`.
    ///
    /// Never fails for a key of the configured dimension, invertible or not.
    pub fn encrypt(&self, key: &KeyMatrix, text: &str) -> Result<String, HillCipherError> {
        self.check_key(key)?;

        let blocks = to_blocks(text, self.dimension, self.padding)?;
        self.transform(key.as_matrix(), &blocks)
    }

    /// Decrypts `cipher` by multiplying every block by the inverse of `key`.
    ///
    /// The ciphertext is taken as is: it must be uppercase letters only, with a length
    /// that is a multiple of the block size. Padding added during encryption is kept.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NotInvertible` if `key` has no inverse modulo the alphabet size
    /// and `HillCipherError::MalformedInput` for ciphertext that does not split into whole blocks.
    pub fn decrypt(&self, key: &KeyMatrix, cipher: &str) -> Result<String, HillCipherError> {
        self.check_key(key)?;

        let inverse = key.inverse(&self.ring)?;
        let blocks = blocks_from_cipher(cipher, self.dimension)?;
        self.transform(inverse.as_matrix(), &blocks)
    }

    fn transform(&self, matrix: &Matrix, blocks: &[Vector]) -> Result<String, HillCipherError> {
        let mut transformed: Vec<Vector> = Vec::with_capacity(blocks.len());
        for block in blocks {
            let out = matrix_vector_mul(matrix, block, &self.ring)?;
            log::trace!("{:?} -> {:?}", block, out);
            transformed.push(out);
        }

        from_blocks(&transformed)
    }

    fn check_key(&self, key: &KeyMatrix) -> Result<(), HillCipherError> {
        if key.dimension() != self.dimension {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Key dimension ({}) must match block size ({})",
                key.dimension(),
                self.dimension
            )));
        }
        Ok(())
    }
}
