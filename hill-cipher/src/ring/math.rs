//! Implementation of ring ops using modular arithmetic.

use crate::errors::HillCipherError;

use super::{extended_gcd, gcd};

/// Represents a finite ring Z_m using modular arithmetic.
///
/// The modulus is always greater than 1; [`Ring::try_with`] is the only way to pick one.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, HillCipherError> {
        if modulus <= 1 || modulus > i64::MAX as u64 {
            return Err(HillCipherError::InvalidModulus(format!(
                "Modulus must be in (1, {}], got {}",
                i64::MAX,
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.modulus(), 26);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces a value into the range `[0, modulus - 1]`.
    ///
    /// Negative values (cofactor sums are routinely negative) are lifted by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.reduce(441), 25);
    /// assert_eq!(ring.reduce(-99), 5);
    /// assert_eq!(ring.reduce(0), 0);
    /// assert_eq!(ring.reduce(26), 0);
    /// ```
    pub fn reduce(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.add(20, 10), 4);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.reduce(a) as i128;
        let b_norm = self.reduce(b) as i128;

        ((a_norm + b_norm) % self.modulus as i128) as i64
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.sub(7, 5), 2);
    /// assert_eq!(ring.sub(3, 5), 24);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        self.add(a, self.neg(b))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.mul(24, 2), 22);
    /// assert_eq!(ring.mul(-2, 6), 14);
    /// assert_eq!(ring.mul(13, 2), 0);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.reduce(a);
        let b_norm = self.reduce(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        result as i64
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        let a_norm = self.reduce(a);
        if a_norm == 0 {
            return 0;
        }

        self.modulus as i64 - a_norm
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm and returns the smallest positive
    /// residue, the same value [`Ring::inv_by_search`] finds.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NoInverse` if the inverse does not exist (i.e., `gcd(a, modulus) != 1`).
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 9); // 3 * 9 = 27 = 1 mod 26
    /// assert_eq!(ring.inv(25).unwrap(), 25);
    /// assert!(ring.inv(13).is_err());
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCipherError> {
        let a_norm = self.reduce(a);
        if a_norm == 0 {
            return Err(HillCipherError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(HillCipherError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.reduce(x))
    }

    /// Finds `a^-1 mod modulus` by trying every candidate in `[1, modulus)`.
    ///
    /// O(modulus), which is fine for alphabet-sized rings. Returns `None` when
    /// `gcd(a, modulus) != 1`.
    pub fn inv_by_search(&self, a: i64) -> Option<i64> {
        let a_norm = self.reduce(a);
        (1..self.modulus as i64).find(|&x| self.mul(a_norm, x) == 1)
    }

    /// Whether `a` is a unit of the ring, i.e. `gcd(a, modulus) == 1`.
    pub fn is_unit(&self, a: i64) -> bool {
        gcd(self.reduce(a), self.modulus as i64) == 1
    }
}

impl Default for Ring {
    /// The ring of the 26-letter Latin alphabet.
    fn default() -> Self {
        Ring { modulus: 26 }
    }
}
