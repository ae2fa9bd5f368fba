//! GSTIN (Indian Goods and Services Tax Identification Number) validation.

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Validate a GSTIN using its mod-36 check digit.
///
/// GSTIN format: 15 characters. A 2-digit state code, the 10-character PAN,
/// an entity code, the letter Z, and a check character computed over the
/// first 14 characters with alternating weights 1 and 2 in base 36.
pub fn validate_gstin(gstin: &str) -> bool {
    let bytes = gstin.as_bytes();
    if bytes.len() != 15 || !bytes.iter().all(|b| ALPHABET.contains(b)) {
        return false;
    }

    let value = |b: u8| ALPHABET.iter().position(|&c| c == b).unwrap() as u32;

    let mut sum = 0u32;
    for (i, &b) in bytes.iter().take(14).enumerate() {
        let factor = if i % 2 == 0 { 1 } else { 2 };
        let product = value(b) * factor;
        sum += product / 36 + product % 36;
    }

    let check = (36 - sum % 36) % 36;
    ALPHABET[check as usize] == bytes[14]
}
