use crate::aes;
use crate::alphabet;
use crate::error::Error;
use crate::result::Result;

pub enum CipherType {
    Encrypt,
    Decrypt,
}

struct SizeLimits {
    min: usize,
    max: usize,
}

struct FFXSizeLimits {
    twk: SizeLimits,
    txt: SizeLimits,
}

pub struct FFX {
    cipher: aes::Cipher,
    twk: Vec<u8>,
    len: FFXSizeLimits,
    alpha: alphabet::Alphabet,
}

impl FFX {
    pub fn new(
        key: &[u8],
        opt_twk: Option<&[u8]>,
        maxtxt: usize,
        mintwk: usize,
        maxtwk: usize,
        radix: usize,
        opt_alpha: Option<&str>,
    ) -> Result<Self> {
        if radix < 2 {
            return Err(Error::radix(format!(
                "invalid radix; must be at least 2, got {}",
                radix
            )));
        }

        if radix > 65536 {
            return Err(Error::radix(format!(
                "radix {} exceeds the maximum of 2^16 supported by the digit codec",
                radix
            )));
        }

        let alpha = alphabet::Alphabet::new(opt_alpha, Some(radix))?;

        // the minimum required length for both ff1 and ff3-1 is given
        // by the inequality: radix**minlen >= 1_000_000
        //
        // therefore:
        //  minlen = ceil(log_radix(1_000_000))
        //         = ceil(log_10(1_000_000) / log_10(radix))
        //         = ceil(6 / log_10(radix))
        let mintxt = (6f64 / (radix as f64).log10()).ceil() as usize;
        if mintxt < 2 || mintxt > maxtxt {
            return Err(Error::length(format!(
                "unsupported combination of radix and maximum text length; min required length is {}, max allowed is {}",
                mintxt, maxtxt
            )));
        }

        if mintwk > maxtwk {
            return Err(Error::tweak(
                "minimum tweak length must be less than maximum",
            ));
        }

        let twk_bounds = FFXSizeLimits {
            twk: SizeLimits {
                min: mintwk,
                max: maxtwk,
            },
            txt: SizeLimits {
                min: mintxt,
                max: maxtxt,
            },
        };

        let twk: Vec<u8> = match opt_twk {
            None => Vec::new(),
            Some(t) => {
                Self::check_tweak_length(&twk_bounds, t.len())?;
                t.to_vec()
            }
        };

        log::debug!(
            "new ffx context: radix={} mintxt={} maxtxt={} mintwk={} maxtwk={}",
            radix, mintxt, maxtxt, mintwk, maxtwk
        );

        Ok(FFX {
            cipher: aes::Cipher::new(key)?,
            twk: twk,
            len: twk_bounds,
            alpha: alpha,
        })
    }

    fn check_tweak_length(len: &FFXSizeLimits, n: usize) -> Result<()> {
        if n < len.twk.min || (len.twk.max > 0 && n > len.twk.max) {
            if len.twk.max > 0 && len.twk.min == len.twk.max {
                return Err(Error::tweak(format!(
                    "invalid tweak length; expected exactly {} bytes, got {}",
                    len.twk.min, n
                )));
            } else if len.twk.max > 0 {
                return Err(Error::tweak(format!(
                    "invalid tweak length; expected between {} and {} bytes, got {}",
                    len.twk.min, len.twk.max, n
                )));
            } else {
                return Err(Error::tweak(format!(
                    "invalid tweak length; expected at least {} bytes, got {}",
                    len.twk.min, n
                )));
            }
        }

        Ok(())
    }

    /// Replace the tweak in place, validated against the same bounds used
    /// at construction. Does not touch the key schedule.
    pub fn set_tweak(&mut self, t: &[u8]) -> Result<()> {
        Self::check_tweak_length(&self.len, t.len())?;
        self.twk = t.to_vec();
        Ok(())
    }

    pub fn get_tweak<'a>(&'a self, opt_twk: &Option<&'a [u8]>) -> &'a [u8] {
        match opt_twk {
            None => &self.twk,
            Some(t) => t,
        }
    }

    pub fn get_radix(&self) -> usize {
        self.alpha.len()
    }

    #[allow(dead_code)]
    pub fn get_cipher_block_size(&self) -> usize {
        self.cipher.block_size()
    }

    pub fn validate_text_length(&self, n: usize) -> Result<()> {
        if n < self.len.txt.min || n > self.len.txt.max {
            return Err(Error::length(format!(
                "invalid text length; expected between {} and {} characters, got {}",
                self.len.txt.min, self.len.txt.max, n
            )));
        }

        Ok(())
    }

    pub fn validate_tweak_length(&self, n: usize) -> Result<()> {
        Self::check_tweak_length(&self.len, n)
    }

    pub fn prf(&self, s: &[u8], d: &mut [u8]) -> Result<()> {
        let mut c = self.cipher.clone();
        let blksz = c.block_size();

        for i in 0..(s.len() / blksz) {
            let j = i * blksz;
            c.encrypt_block(&s[j..(j + blksz)], d);
        }

        Ok(())
    }

    pub fn ciph(&self, s: &[u8], d: &mut [u8]) -> Result<()> {
        self.prf(&s[0..16], d)
    }

    /// Resolve a slice of symbols through the alphabet and compose the
    /// resulting digits into a big-endian radix-`r` number.
    pub fn chars_to_bignum(
        &self,
        chars: &[char],
    ) -> Result<num_bigint::BigInt> {
        let mut digits = Vec::<u16>::with_capacity(chars.len());

        for c in chars {
            digits.push(self.alpha.ltr(*c)? as u16);
        }

        digits_to_bignum(&digits, self.alpha.len())
    }

    /// Inverse of [`Self::chars_to_bignum`]: decompose a number into
    /// radix-`r` digits and resolve each back to a symbol, left-padding
    /// with the alphabet's zero symbol to `opt_len` digits if given.
    pub fn bignum_to_chars(
        &self,
        n: &num_bigint::BigInt,
        opt_len: Option<usize>,
    ) -> Result<Vec<char>> {
        let digits = bignum_to_digits(n, self.alpha.len(), opt_len)?;
        let mut chars = Vec::<char>::with_capacity(digits.len());

        for d in digits {
            chars.push(self.alpha.pos(d as usize)?);
        }

        Ok(chars)
    }
}

/// Compose a sequence of raw digits (each already in `[0, radix)`) into a
/// big-endian radix-`r` number, bypassing any alphabet. This is the "raw
/// numeral-string" half of the numeral codec: [`FFX::chars_to_bignum`]
/// layers symbol translation on top of this.
///
/// Digits are folded in one at a time (`n = n*radix + d`) rather than
/// handed to `BigInt::from_radix_be`, which only accepts `u8` digits and
/// so tops out at radix 256. A digit here is a `u16`, which is exactly
/// wide enough for the spec's `r <= 2^16` ceiling.
pub fn digits_to_bignum(
    digits: &[u16],
    radix: usize,
) -> Result<num_bigint::BigInt> {
    if radix > 65536 {
        return Err(Error::radix(format!(
            "radix {} exceeds the maximum of 2^16 supported by the digit codec",
            radix
        )));
    }

    let r = num_bigint::BigInt::from(radix as u32);
    let mut n = num_bigint::BigInt::from(0u32);

    for &d in digits {
        if d as usize >= radix {
            return Err(Error::codec(format!(
                "decoded digit {} out of range for radix {}",
                d, radix
            )));
        }
        n = n * &r + num_bigint::BigInt::from(d);
    }

    Ok(n)
}

/// Inverse of [`digits_to_bignum`]: decompose a number into `len` (or the
/// minimum needed, if `None`) big-endian radix-`r` digits.
pub fn bignum_to_digits(
    n: &num_bigint::BigInt,
    radix: usize,
    opt_len: Option<usize>,
) -> Result<Vec<u16>> {
    use num_traits::ToPrimitive;

    let r = num_bigint::BigInt::from(radix as u32);
    let mut rest = n.clone();
    let mut digits = Vec::<u16>::new();

    while rest > num_bigint::BigInt::from(0u32) {
        let rem = &rest % &r;
        rest /= &r;
        digits.push(rem.to_u32().unwrap() as u16);
    }

    if digits.is_empty() {
        digits.push(0);
    }

    if let Some(len) = opt_len {
        if digits.len() < len {
            digits.resize(len, 0);
        }
    }

    digits.reverse();
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::FFX;
    use crate::result::Result;

    use std::str::FromStr;

    #[test]
    fn test_cipher_reuse() -> Result<()> {
        let exp = [
            102, 233, 75, 212, 239, 138, 44, 59, 136, 76, 250, 89, 202, 52, 43,
            46,
        ];
        let ffx = FFX::new(&[0; 16], None, 1024, 0, 0, 10, None)?;

        let mut d1: [u8; 16] = [0; 16];
        let mut d2: [u8; 16] = [0; 16];
        let s: [u8; 16] = [0; 16];

        ffx.ciph(&s, &mut d1)?;
        ffx.ciph(&s, &mut d2)?;

        assert!(d1 == d2);
        assert!(d1 == exp);

        Ok(())
    }

    #[test]
    fn test_bignum_conversion() -> Result<()> {
        let ffx = FFX::new(&[0; 16], None, 1024, 0, 0, 10, None)?;

        let n_str = "9037450980398204379409345039453045723049";
        let n = num_bigint::BigInt::from_str(n_str).unwrap();
        let s = n.to_str_radix(10);
        assert!(s == n_str);

        let c = ffx.bignum_to_chars(&n, None)?;
        assert!(String::from_iter(c.clone()) == n_str);

        let r = ffx.chars_to_bignum(&c)?;
        assert!(n == r);

        Ok(())
    }

    #[test]
    fn test_bignum_conversion_above_byte_radix() -> Result<()> {
        // radix 1000 is spec-valid (2 <= r <= 2^16) but exceeds the
        // teacher's 256-digit byte-buffer codec; the raw digit interface
        // (used directly by Engine::encrypt_digits/decrypt_digits, with
        // no alphabet involved) must still round-trip it correctly.
        let digits: Vec<u16> = vec![999, 0, 500, 1];
        let n = super::digits_to_bignum(&digits, 1000)?;
        assert_eq!(n.to_str_radix(10), "999000500001");

        let back = super::bignum_to_digits(&n, 1000, Some(digits.len()))?;
        assert_eq!(back, digits);

        Ok(())
    }

    #[test]
    fn test_radix_up_to_2_16_accepted() -> Result<()> {
        // radix 65536 needs an alphabet at least that long to support the
        // char-based interface, but the digit codec itself accepts it.
        assert!(super::digits_to_bignum(&[65535, 0, 1], 65536).is_ok());
        // a radix beyond 2^16 is rejected before alphabet construction is
        // even attempted.
        assert!(FFX::new(&[0; 16], None, 1024, 0, 0, 65537, None).is_err());
        Ok(())
    }
}
