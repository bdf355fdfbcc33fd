//! A single type that can drive either NIST algorithm supported by this
//! crate, without the caller needing to track which one it picked.
//!
//! The two processors in [`crate::processor`] are built against `Engine`
//! rather than [`crate::ff1::FF1`] or [`crate::ff3_1::FF3_1`] directly, so
//! switching which algorithm backs a given key/alphabet pair is a
//! construction-time decision, not a code change.

use crate::ff1;
use crate::ff3_1;
use crate::result::Result;

/// A format-preserving encryption context, backed by either FF1 or FF3-1.
///
/// Once constructed, an `Engine` forgets which algorithm it's running;
/// all operations are available regardless of the variant.
pub enum Engine {
    FF1(ff1::FF1),
    FF3_1(ff3_1::FF3_1),
}

impl Engine {
    /// Build an `Engine` backed by FF1.
    ///
    /// `mintwk`/`maxtwk` bound the length of tweaks this context will
    /// accept; both `0` leaves the tweak length unbounded, matching
    /// [`ff1::FF1::new`].
    pub fn new_ff1(
        key: &[u8],
        opt_twk: Option<&[u8]>,
        mintwk: usize,
        maxtwk: usize,
        radix: usize,
        opt_alpha: Option<&str>,
    ) -> Result<Self> {
        Ok(Engine::FF1(ff1::FF1::new(
            key, opt_twk, mintwk, maxtwk, radix, opt_alpha,
        )?))
    }

    /// Build an `Engine` backed by FF3-1. The tweak, if supplied, must be
    /// exactly 7 bytes, per the algorithm's fixed 56-bit tweak.
    pub fn new_ff3_1(
        key: &[u8],
        opt_twk: Option<&[u8]>,
        radix: usize,
        opt_alpha: Option<&str>,
    ) -> Result<Self> {
        Ok(Engine::FF3_1(ff3_1::FF3_1::new(
            key, opt_twk, radix, opt_alpha,
        )?))
    }

    /// The radix this engine was constructed with.
    pub fn radix(&self) -> usize {
        match self {
            Engine::FF1(e) => e.radix(),
            Engine::FF3_1(e) => e.radix(),
        }
    }

    /// Replace the default tweak used when `encrypt`/`decrypt` are called
    /// with `None`.
    pub fn set_tweak(&mut self, t: &[u8]) -> Result<()> {
        match self {
            Engine::FF1(e) => e.set_tweak(t),
            Engine::FF3_1(e) => e.set_tweak(t),
        }
    }

    /// Encrypt a string drawn from this engine's alphabet.
    pub fn encrypt(&self, pt: &str, twk: Option<&[u8]>) -> Result<String> {
        match self {
            Engine::FF1(e) => e.encrypt(pt, twk),
            Engine::FF3_1(e) => e.encrypt(pt, twk),
        }
    }

    /// Decrypt a string drawn from this engine's alphabet.
    pub fn decrypt(&self, ct: &str, twk: Option<&[u8]>) -> Result<String> {
        match self {
            Engine::FF1(e) => e.decrypt(ct, twk),
            Engine::FF3_1(e) => e.decrypt(ct, twk),
        }
    }

    /// Encrypt a raw numeral string (digit indices in `[0, radix)`),
    /// bypassing alphabet translation. Used by processors that already
    /// have their own alphabet and want to drive the Feistel network
    /// directly.
    pub fn encrypt_digits(
        &self,
        pt: &[u16],
        twk: Option<&[u8]>,
    ) -> Result<Vec<u16>> {
        match self {
            Engine::FF1(e) => e.encrypt_digits(pt, twk),
            Engine::FF3_1(e) => e.encrypt_digits(pt, twk),
        }
    }

    /// Decrypt a raw numeral string. See [`Self::encrypt_digits`].
    pub fn decrypt_digits(
        &self,
        ct: &[u16],
        twk: Option<&[u8]>,
    ) -> Result<Vec<u16>> {
        match self {
            Engine::FF1(e) => e.decrypt_digits(ct, twk),
            Engine::FF3_1(e) => e.decrypt_digits(ct, twk),
        }
    }
}
