//! Cosmetic alphanumeric "telemetry" strings for the terminal chrome.

#[cfg(test)]
#[path = "data_string_test.rs"]
mod data_string_test;

pub const DATA_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const DATA_STRING_LEN: usize = 8;
pub const DATA_CHUNK_LEN: usize = 4;

/// Draw `len` characters from [`DATA_ALPHABET`] using a `[0, 1)` source.
pub fn generate(len: usize, mut next_unit: impl FnMut() -> f64) -> String {
    (0..len)
        .map(|_| {
            let unit = next_unit();
            let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
            let idx = ((unit * DATA_ALPHABET.len() as f64) as usize).min(DATA_ALPHABET.len() - 1);
            char::from(DATA_ALPHABET[idx])
        })
        .collect()
}

/// Split into dash-separated groups: `"AB12CD34"` -> `"AB12-CD34"`.
pub fn chunked(raw: &str, chunk: usize) -> String {
    if chunk == 0 {
        return raw.to_owned();
    }
    raw.chars()
        .collect::<Vec<_>>()
        .chunks(chunk)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}

/// Placeholder rendered on the server and before the first tick.
pub fn placeholder() -> String {
    chunked(&"0".repeat(DATA_STRING_LEN), DATA_CHUNK_LEN)
}
