//! Credit card number processor.
//!
//! Grounded on `original_source/helpers/creditCard.go`: a credit card
//! number is a six-digit Issuer Identification Number, a variable-length
//! (7-12 digit) account identifier, and a single Luhn check digit, for a
//! total length between 13 and 19 digits. Non-digit code points (spaces,
//! dashes) are left untouched in place; only the digits are encrypted,
//! and the check digit is recomputed over the ciphertext rather than
//! encrypted itself, so the output always passes Luhn validation.

use crate::engine::Engine;
use crate::error::Error;
use crate::result::Result;

/// The radix a wrapped [`Engine`] must use: credit card numbers are
/// decimal.
pub const RADIX: usize = 10;
/// Minimum digit count: a 6-digit IIN, a 6-digit account identifier, and
/// a check digit.
pub const MIN_DIGITS: usize = 13;
/// Maximum digit count: a 6-digit IIN, a 12-digit account identifier, and
/// a check digit.
pub const MAX_DIGITS: usize = 19;

const LUHN_DOUBLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Encrypts or decrypts the digits of a formatted credit card number,
/// preserving separators and recomputing the Luhn check digit.
pub struct CreditCardProcessor {
    engine: Engine,
}

impl CreditCardProcessor {
    /// Wrap `engine`, which must have been constructed with radix 10.
    pub fn new(engine: Engine) -> Result<Self> {
        if engine.radix() != RADIX {
            return Err(Error::radix(format!(
                "credit card processor requires radix {}, engine has radix {}",
                RADIX,
                engine.radix()
            )));
        }

        Ok(CreditCardProcessor { engine })
    }

    /// Replace the default tweak used by `encrypt`/`decrypt`.
    pub fn set_tweak(&mut self, t: &[u8]) -> Result<()> {
        self.engine.set_tweak(t)
    }

    /// Encrypt the digits of `pt`, preserving separators and layout.
    pub fn encrypt(&self, pt: &str, twk: Option<&[u8]>) -> Result<String> {
        self.crypt(pt, twk, true)
    }

    /// Decrypt the digits of `ct`, preserving separators and layout.
    pub fn decrypt(&self, ct: &str, twk: Option<&[u8]>) -> Result<String> {
        self.crypt(ct, twk, false)
    }

    fn crypt(&self, s: &str, twk: Option<&[u8]>, encrypt: bool) -> Result<String> {
        let mut chars: Vec<char> = s.chars().collect();

        let mut positions = Vec::<usize>::new();
        let mut digits = Vec::<u16>::new();
        for (i, c) in chars.iter().enumerate() {
            if let Some(d) = c.to_digit(10) {
                positions.push(i);
                digits.push(d as u16);
            }
        }

        if digits.len() < MIN_DIGITS || digits.len() > MAX_DIGITS {
            return Err(Error::length(format!(
                "credit card number must have between {} and {} digits, got {}",
                MIN_DIGITS,
                MAX_DIGITS,
                digits.len()
            )));
        }

        log::trace!(
            "credit card crypt: {} digits, encrypt={}",
            digits.len(),
            encrypt
        );

        // the last digit is the Luhn check digit; it isn't ciphered
        // directly, it's recomputed from the ciphered payload below
        let payload = &digits[..digits.len() - 1];

        let mut out_digits = if encrypt {
            self.engine.encrypt_digits(payload, twk)?
        } else {
            self.engine.decrypt_digits(payload, twk)?
        };

        let payload_u8: Vec<u8> = out_digits.iter().map(|d| *d as u8).collect();
        out_digits.push(luhn_checksum(&payload_u8) as u16);

        for (pos, d) in positions.iter().zip(out_digits.iter()) {
            chars[*pos] = std::char::from_digit(*d as u32, 10).unwrap();
        }

        Ok(chars.into_iter().collect())
    }
}

/// The Luhn check digit for `digits` (most significant digit first).
fn luhn_checksum(digits: &[u8]) -> u8 {
    let l = digits.len();
    let mut checksum: u32 = 0;

    for i in 0..l {
        let d = digits[l - i - 1];
        checksum += if i % 2 == 0 {
            LUHN_DOUBLE[d as usize] as u32
        } else {
            d as u32
        };
    }

    ((10 - (checksum % 10)) % 10) as u8
}

/// Validate that `digits` (most significant digit first, last digit the
/// check digit) passes the Luhn checksum.
pub fn validate_luhn(digits: &[u8]) -> bool {
    match digits.split_last() {
        None => false,
        Some((check, payload)) => luhn_checksum(payload) == *check,
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_luhn, CreditCardProcessor};
    use crate::engine::Engine;
    use crate::result::Result;

    #[test]
    fn roundtrips_and_preserves_separators() -> Result<()> {
        let key = [0u8; 16];
        let engine = Engine::new_ff1(&key, None, 0, 0, 10, None)?;
        let proc = CreditCardProcessor::new(engine)?;

        let pt = "5503 0595 7614 0641";
        let ct = proc.encrypt(pt, None)?;

        assert_eq!(ct.len(), pt.len());
        assert_eq!(ct.chars().nth(4), Some(' '));
        assert_eq!(ct.chars().nth(9), Some(' '));
        assert_eq!(ct.chars().nth(14), Some(' '));

        let digits: Vec<u8> = ct
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as u8)
            .collect();
        assert!(validate_luhn(&digits));

        let engine2 = Engine::new_ff1(&key, None, 0, 0, 10, None)?;
        let proc2 = CreditCardProcessor::new(engine2)?;
        assert_eq!(proc2.decrypt(&ct, None)?, pt);

        Ok(())
    }

    #[test]
    fn rejects_short_numbers() -> Result<()> {
        let key = [0u8; 16];
        let engine = Engine::new_ff1(&key, None, 0, 0, 10, None)?;
        let proc = CreditCardProcessor::new(engine)?;

        let res = proc.encrypt("123456789012", None);
        assert!(res.is_err());
        Ok(())
    }

    #[test]
    fn rejects_non_decimal_radix() -> Result<()> {
        let key = [0u8; 16];
        let engine = Engine::new_ff1(&key, None, 0, 0, 16, None)?;
        let res = CreditCardProcessor::new(engine);
        assert!(res.is_err());
        Ok(())
    }

    #[test]
    fn validate_luhn_detects_tampering() {
        let payload = [5, 5, 0, 3, 0, 5, 9, 5, 7, 6, 1, 4, 0, 6, 4];
        let check = super::luhn_checksum(&payload);

        let mut good = payload.to_vec();
        good.push(check);
        assert!(validate_luhn(&good));

        let mut bad = good.clone();
        let last = bad.len() - 1;
        bad[last] = (bad[last] + 1) % 10;
        assert!(!validate_luhn(&bad));
    }
}
