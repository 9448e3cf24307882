//! Text normalization and blocking.
//!
//! Plaintext is reduced to uppercase Latin letters, padded with a filler letter
//! and cut into blocks of letter indices. Ciphertext is never normalized: it must
//! already consist of whole blocks of uppercase letters.

use crate::errors::HillCipherError;
use crate::preset::alphabet::{index_letter, letter_index};
use crate::ring::Vector;

use itertools::Itertools;

/// Discards every character that is not an ASCII letter and uppercases the rest.
///
/// # Example
///
/// ```
/// # use hill_cipher::text::normalize;
/// assert_eq!(normalize("a c-t!"), "ACT");
/// assert_eq!(normalize("42 ?!"), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Appends `padding` to `normalized` until its length is a multiple of `dimension`.
pub fn pad(mut normalized: String, dimension: usize, padding: char) -> String {
    while normalized.len() % dimension != 0 {
        normalized.push(padding);
    }
    normalized
}

/// Normalizes and pads `text`, then partitions it into blocks of `dimension` letter indices.
///
/// # Errors
///
/// Returns `HillCipherError::DimensionMismatch` for a zero dimension and
/// `HillCipherError::MalformedInput` if `padding` is not an alphabet letter.
pub fn to_blocks(text: &str, dimension: usize, padding: char) -> Result<Vec<Vector>, HillCipherError> {
    check_dimension(dimension)?;
    if letter_index(padding).is_none() {
        return Err(HillCipherError::MalformedInput(format!(
            "Padding '{}' is not an alphabet letter",
            padding
        )));
    }

    let padded = pad(normalize(text), dimension, padding);

    let blocks = padded
        .chars()
        .filter_map(letter_index)
        .chunks(dimension)
        .into_iter()
        .map(|chunk| chunk.collect_vec())
        .collect();

    Ok(blocks)
}

/// Partitions ciphertext into blocks without normalizing or padding it.
///
/// # Errors
///
/// Returns `HillCipherError::MalformedInput` if the ciphertext contains anything other
/// than uppercase alphabet letters or its length is not a multiple of `dimension`.
pub fn blocks_from_cipher(cipher: &str, dimension: usize) -> Result<Vec<Vector>, HillCipherError> {
    check_dimension(dimension)?;

    let indices: Vector = cipher
        .chars()
        .enumerate()
        .map(|(position, c)| {
            letter_index(c).ok_or_else(|| {
                HillCipherError::MalformedInput(format!(
                    "Ciphertext symbol {:?} at position {} is not an uppercase letter",
                    c, position
                ))
            })
        })
        .collect::<Result<_, _>>()?;

    if indices.len() % dimension != 0 {
        return Err(HillCipherError::MalformedInput(format!(
            "Ciphertext length {} is not a multiple of the block size {}",
            indices.len(),
            dimension
        )));
    }

    Ok(indices
        .chunks_exact(dimension)
        .map(|chunk| chunk.to_vec())
        .collect())
}

/// Maps blocks of letter indices back to a string, in block order.
///
/// # Errors
///
/// Returns `HillCipherError::MalformedInput` if an index falls outside the alphabet.
pub fn from_blocks(blocks: &[Vector]) -> Result<String, HillCipherError> {
    blocks
        .iter()
        .flatten()
        .map(|&index| {
            index_letter(index).ok_or_else(|| {
                HillCipherError::MalformedInput(format!("Index {} is outside the alphabet", index))
            })
        })
        .collect()
}

fn check_dimension(dimension: usize) -> Result<(), HillCipherError> {
    if dimension == 0 {
        return Err(HillCipherError::DimensionMismatch(
            "Block size must be > 0".to_string(),
        ));
    }
    Ok(())
}
