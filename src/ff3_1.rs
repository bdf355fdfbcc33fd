use fpe::ff3_1;

pub fn encrypt(key: &str, tweak: &str, alphabet: &str, plaintext: &str) -> Result<String, String> {
    let key_bytes = hex::decode(key).map_err(|e| format!("Invalid key hex: {e}"))?;
    let tweak_bytes = hex::decode(tweak).map_err(|e| format!("Invalid tweak hex: {e}"))?;
    let radix = alphabet.chars().count();

    ff3_1::encrypt(
        &key_bytes,
        Some(&tweak_bytes),
        plaintext,
        radix,
        Some(alphabet),
    )
    .map_err(|e| format!("Encryption failed: {e}"))
}

pub fn decrypt(key: &str, tweak: &str, alphabet: &str, ciphertext: &str) -> Result<String, String> {
    let key_bytes = hex::decode(key).map_err(|e| format!("Invalid key hex: {e}"))?;
    let tweak_bytes = hex::decode(tweak).map_err(|e| format!("Invalid tweak hex: {e}"))?;
    let radix = alphabet.chars().count();

    ff3_1::decrypt(
        &key_bytes,
        Some(&tweak_bytes),
        ciphertext,
        radix,
        Some(alphabet),
    )
    .map_err(|e| format!("Decryption failed: {e}"))
}
