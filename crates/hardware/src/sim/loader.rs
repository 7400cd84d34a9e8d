//! Program Image Loader.
//!
//! This module reads program images into instruction-memory words. It supports:
//! 1. **Hex images:** One or more hexadecimal words per line (`$readmemh` style).
//! 2. **Binary images:** Raw little-endian words.
//! 3. **Files:** Format chosen from the file extension.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::SimError;

/// Parses a hex program image.
///
/// Each whitespace-separated token is one 32-bit word, with an optional `0x`
/// prefix and `_` digit separators. Blank lines and anything after `#` or
/// `//` are ignored.
///
/// # Errors
///
/// Returns [`SimError::ImageParse`] with the 1-based line number and the
/// offending token if a token is not a 32-bit hex value.
///
/// # Examples
///
/// ```
/// use rvpipe_core::sim::loader::parse_hex_image;
///
/// let words = parse_hex_image("# program\n00a00513 // addi a0, zero, 10\n0x00000013\n").unwrap();
/// assert_eq!(words, vec![0x00A0_0513, 0x0000_0013]);
/// ```
pub fn parse_hex_image(text: &str) -> Result<Vec<u32>, SimError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = strip_comment(raw);
        for token in line.split_whitespace() {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token)
                .replace('_', "");
            let word = u32::from_str_radix(&digits, 16).map_err(|_| SimError::ImageParse {
                line: idx + 1,
                text: token.to_string(),
            })?;
            words.push(word);
        }
    }
    Ok(words)
}

/// Drops a trailing `#` or `//` comment.
fn strip_comment(line: &str) -> &str {
    let cut = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..cut]
}

/// Parses a raw binary image of little-endian words.
///
/// A trailing partial word is zero-padded.
pub fn parse_binary_image(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(word)
        })
        .collect()
}

/// Loads a program image from disk.
///
/// Files ending in `.bin` are read as raw binary; anything else as hex text.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, or
/// [`SimError::ImageParse`] if a hex image is malformed.
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<u32>, SimError> {
    let path = path.as_ref();
    let is_binary = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bin"));

    let words = if is_binary {
        parse_binary_image(&fs::read(path)?)
    } else {
        parse_hex_image(&fs::read_to_string(path)?)?
    };
    debug!(path = %path.display(), words = words.len(), "loaded program image");
    Ok(words)
}
