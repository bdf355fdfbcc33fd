//! Generic string processor.
//!
//! Grounded on `original_source/helpers/string.go`: encrypts or decrypts a
//! whole string against a single alphabet, with no separator handling and
//! no length restriction beyond what the underlying engine enforces.

use crate::alphabet::Alphabet;
use crate::engine::Engine;
use crate::error::Error;
use crate::result::Result;

/// Encrypts or decrypts whole strings drawn from a fixed alphabet.
///
/// The alphabet may be supplied separately from the one the wrapped
/// [`Engine`] was built with (`original_source/helpers/string.go` keeps
/// its own `alphabetMap`/`alphabetSlice`, distinct from the cipher's own
/// numeral radix); when it is, its length must still match the engine's
/// radix, since that's what determines how many distinct numerals the
/// engine can produce per character.
pub struct StringProcessor {
    engine: Engine,
    alphabet: Option<Alphabet>,
}

impl StringProcessor {
    /// Wrap `engine`. If `alphabet` is `None`, the engine's own alphabet
    /// is used directly via its string interface. If `Some`, a private
    /// alphabet is built and validated against the engine's radix.
    pub fn new(engine: Engine, alphabet: Option<&str>) -> Result<Self> {
        let alphabet = match alphabet {
            None => None,
            Some(s) => {
                let a = Alphabet::new(Some(s), None)?;
                if a.len() != engine.radix() {
                    return Err(Error::radix(format!(
                        "processor alphabet has {} symbols but engine radix is {}",
                        a.len(),
                        engine.radix()
                    )));
                }
                Some(a)
            }
        };

        log::debug!(
            "new string processor: radix={} private_alphabet={}",
            engine.radix(),
            alphabet.is_some()
        );

        Ok(StringProcessor { engine, alphabet })
    }

    /// Replace the default tweak used by `encrypt`/`decrypt`.
    pub fn set_tweak(&mut self, t: &[u8]) -> Result<()> {
        self.engine.set_tweak(t)
    }

    /// Encrypt the whole input string.
    pub fn encrypt(&self, pt: &str, twk: Option<&[u8]>) -> Result<String> {
        self.crypt(pt, twk, true)
    }

    /// Decrypt the whole input string.
    pub fn decrypt(&self, ct: &str, twk: Option<&[u8]>) -> Result<String> {
        self.crypt(ct, twk, false)
    }

    fn crypt(&self, s: &str, twk: Option<&[u8]>, encrypt: bool) -> Result<String> {
        match &self.alphabet {
            None => {
                if encrypt {
                    self.engine.encrypt(s, twk)
                } else {
                    self.engine.decrypt(s, twk)
                }
            }
            Some(alpha) => {
                let mut digits = Vec::<u16>::with_capacity(s.chars().count());
                for c in s.chars() {
                    digits.push(alpha.ltr(c)? as u16);
                }

                let out_digits = if encrypt {
                    self.engine.encrypt_digits(&digits, twk)?
                } else {
                    self.engine.decrypt_digits(&digits, twk)?
                };

                let mut out = String::with_capacity(out_digits.len());
                for d in out_digits {
                    out.push(alpha.pos(d as usize)?);
                }
                Ok(out)
            }
        }
    }
}
