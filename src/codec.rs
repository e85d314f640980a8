//! Percent-encoding codec for track identifiers
//!
//! Builds on `urlencoding` with two adjustments: the punctuation set
//! `! ' ( ) ~` stays literal, and `-` is escaped to `%2d` so hyphens in
//! path text never collide with separator conventions downstream.
//! Decoding is plain percent-decoding and fails soft to an empty string.

/// Escapes the base encoder produces that this scheme keeps literal
const KEEP_LITERAL: [(&str, &str); 4] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
];

/// Encode a path into a playback-safe identifier.
///
/// Percent-encodes UTF-8 bytes, then restores `! ' ( )` to their literal
/// form (`~` is already left alone by the base encoder) and escapes `-` to
/// `%2d`. Spaces always end up as `%20`, never `+`. The result decodes back
/// to the input exactly.
pub fn encode(path: &str) -> String {
    let mut encoded = urlencoding::encode(path).into_owned();
    for (escaped, literal) in KEEP_LITERAL {
        encoded = encoded.replace(escaped, literal);
    }
    // Hyphens go last: at this point every '-' came from the input, never
    // from the hex of an escape sequence.
    encoded.replace('-', "%2d")
}

/// Decode an identifier back into a path.
///
/// Standard percent-decoding. If the decoded bytes are not valid UTF-8 the
/// failure is logged and an empty string returned; callers are written to
/// tolerate empty results.
pub fn decode(encoded: &str) -> String {
    match urlencoding::decode(encoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            log::error!("Could not decode identifier {:?}: {}", encoded, e);
            String::new()
        }
    }
}

/// Derive the human-readable title for an identifier: strip a trailing
/// `.mp3`, decode, and take the segment after the last `/`.
pub fn display_title(identifier: &str) -> String {
    let stem = identifier.strip_suffix(".mp3").unwrap_or(identifier);
    let decoded = decode(stem);
    let title = decoded.rsplit('/').next().unwrap_or(&decoded);
    title.to_string()
}
