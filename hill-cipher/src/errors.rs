#[derive(thiserror::Error, Debug)]
pub enum HillCipherError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// The key matrix has no inverse because its determinant shares a factor with the modulus.
    #[error("Matrix not invertible modulo {modulus} (determinant {determinant})")]
    NotInvertible { determinant: i64, modulus: u64 },
    /// Ciphertext that cannot be split into whole blocks of alphabet letters.
    #[error("MalformedInput: {0}")]
    MalformedInput(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("InvalidKeyword: {0}")]
    InvalidKeyword(String),
    #[error("KeyGeneration: {0}")]
    KeyGeneration(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
