//! Best-effort conversion of raw file bytes into printable text

/// Marker inserted in place of each invalid UTF-8 subsequence
pub const REPLACEMENT_MARKER: char = char::REPLACEMENT_CHARACTER;

/// Text decoded from a byte buffer, plus how many invalid subsequences were replaced
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    pub text: String,
    pub replacements: usize,
}

impl Decoded {
    /// True when every byte decoded as valid UTF-8
    pub fn is_lossless(&self) -> bool {
        self.replacements == 0
    }
}

/// Decode `bytes` as UTF-8, substituting one marker per maximal invalid subsequence.
///
/// Never fails: the worst case is a string made entirely of markers.
pub fn decode_lossy(bytes: &[u8]) -> Decoded {
    let mut text = String::with_capacity(bytes.len());
    let mut replacements = 0;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            text.push(REPLACEMENT_MARKER);
            replacements += 1;
        }
    }

    Decoded { text, replacements }
}
