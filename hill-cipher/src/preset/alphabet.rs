use lazy_static::lazy_static;
use std::collections::HashMap;

/// Letters of the cipher alphabet in index order.
pub const LATIN_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letter appended to plaintext until its length is a multiple of the block size.
pub const PADDING_LETTER: char = 'X';

lazy_static! {
    /// A static HashMap mapping an index (0 to 25) to its uppercase Latin letter.
    pub static ref INDEX_TO_LETTER_MAP: HashMap<u8, char> = {
        let mut map = HashMap::new();

        for (i, ch) in LATIN_ALPHABET.chars().enumerate() {
            map.insert(i as u8, ch);
        }

        map
    };

    /// A static HashMap mapping an uppercase Latin letter to its index (0 to 25).
    pub static ref LETTER_TO_INDEX_MAP: HashMap<char, u8> = {
        let mut map = HashMap::new();

        for (&index, &ch) in INDEX_TO_LETTER_MAP.iter() {
            map.insert(ch, index);
        }

        map
    };
}

/// Number of letters in the alphabet, which is also the cipher modulus.
pub fn alphabet_size() -> u64 {
    INDEX_TO_LETTER_MAP.len() as u64
}

/// Zero-based alphabet index of an uppercase letter.
pub fn letter_index(letter: char) -> Option<i64> {
    LETTER_TO_INDEX_MAP.get(&letter).map(|&i| i as i64)
}

/// Letter at a zero-based alphabet index.
pub fn index_letter(index: i64) -> Option<char> {
    u8::try_from(index)
        .ok()
        .and_then(|i| INDEX_TO_LETTER_MAP.get(&i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    #[test]
    fn test_alphabet_tables() {
        assert_eq!(alphabet_size(), 26);
        assert_eq!(letter_index('A'), Some(0));
        assert_eq!(letter_index('Z'), Some(25));
        assert_eq!(letter_index(PADDING_LETTER), Some(23));
        assert_eq!(letter_index('a'), None);
        assert_eq!(index_letter(19), Some('T'));
        assert_eq!(index_letter(26), None);
        assert_eq!(index_letter(-1), None);
    }

    quickcheck! {
        fn prop_letter_maps_are_inverse(c: char) -> TestResult {
            let Some(index) = letter_index(c) else {
                return TestResult::from_bool(!c.is_ascii_uppercase());
            };

            if index_letter(index) != Some(c) {
                return TestResult::error(format!(
                    "Letter '{}' maps to index {} which maps back to {:?}",
                    c,
                    index,
                    index_letter(index)
                ));
            }

            TestResult::passed()
        }
    }
}
