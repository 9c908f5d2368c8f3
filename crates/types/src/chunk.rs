//! Chunk values and their boundary guard.

use thiserror::Error;

/// Errors raised when a chunk crosses the marshaling boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// The byte at the declared length is not the terminator.
    #[error("chunk declares {declared} bytes but the terminator is {found}")]
    Unterminated {
        /// Declared payload length.
        declared: usize,
        /// What sits at the declared length instead of a terminator.
        found: String,
    },

    /// The payload is not valid UTF-8.
    #[error("chunk payload is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// An interned value belonging to a declared type.
///
/// A chunk carries an explicit payload length plus a terminated buffer, the
/// way model providers hand out value names. The payload itself may contain
/// NUL bytes; only the byte at `len` must be the terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Declared payload length.
    len: usize,
    /// Payload followed by a terminating zero byte.
    bytes: Vec<u8>,
}

impl Chunk {
    /// Create a well-formed chunk from a string value.
    pub fn new(value: &str) -> Self {
        let mut bytes = Vec::with_capacity(value.len() + 1);
        bytes.extend_from_slice(value.as_bytes());
        bytes.push(0);
        Self {
            len: value.len(),
            bytes,
        }
    }

    /// Create a chunk from a declared length and a raw buffer.
    ///
    /// No check happens here; the guard runs when the chunk is marshaled.
    pub fn from_raw(len: usize, bytes: Vec<u8>) -> Self {
        Self { len, bytes }
    }

    /// Declared payload length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the declared payload is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check that the terminator sits exactly at the declared length.
    pub fn check_terminator(&self) -> Result<(), ChunkError> {
        let declared = self.len();
        match self.bytes.get(declared) {
            Some(0) => Ok(()),
            Some(b) => Err(ChunkError::Unterminated {
                declared,
                found: format!("byte {b:#04x}"),
            }),
            None => Err(ChunkError::Unterminated {
                declared,
                found: format!("missing (buffer holds {} bytes)", self.bytes.len()),
            }),
        }
    }

    /// The checked payload bytes, without the terminator.
    pub fn payload(&self) -> Result<&[u8], ChunkError> {
        self.check_terminator()?;
        Ok(&self.bytes[..self.len()])
    }

    /// The checked payload as text.
    pub fn to_text(&self) -> Result<String, ChunkError> {
        let payload = self.payload()?;
        String::from_utf8(payload.to_vec()).map_err(|e| ChunkError::InvalidUtf8(e.to_string()))
    }
}

impl From<&str> for Chunk {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_chunk() {
        let chunk = Chunk::new("x := 1");
        assert_eq!(chunk.len(), 6);
        assert!(chunk.check_terminator().is_ok());
        assert_eq!(chunk.to_text().unwrap(), "x := 1");
    }

    #[test]
    fn test_long_chunk_keeps_length() {
        let value = "v".repeat(usize::from(u16::MAX) + 2);
        let chunk = Chunk::new(&value);
        assert_eq!(chunk.len(), value.len());
        assert_eq!(chunk.to_text().unwrap(), value);
    }

    #[test]
    fn test_empty_chunk() {
        let chunk = Chunk::new("");
        assert!(chunk.is_empty());
        assert_eq!(chunk.to_text().unwrap(), "");
    }

    #[test]
    fn test_interior_nul_is_kept() {
        let chunk = Chunk::from_raw(3, b"a\0b\0".to_vec());
        assert_eq!(chunk.payload().unwrap(), b"a\0b");
        assert_eq!(chunk.to_text().unwrap(), "a\0b");
    }

    #[test]
    fn test_length_before_terminator_is_rejected() {
        // Declared 2 bytes but the terminator sits at 3: no silent truncation.
        let chunk = Chunk::from_raw(2, b"abc\0".to_vec());
        assert!(matches!(
            chunk.to_text(),
            Err(ChunkError::Unterminated { declared: 2, .. })
        ));
    }

    #[test]
    fn test_missing_terminator_is_rejected() {
        let chunk = Chunk::from_raw(3, b"abc".to_vec());
        assert!(matches!(
            chunk.check_terminator(),
            Err(ChunkError::Unterminated { declared: 3, .. })
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        let chunk = Chunk::from_raw(2, vec![0xff, 0xfe, 0]);
        assert!(matches!(chunk.to_text(), Err(ChunkError::InvalidUtf8(_))));
    }
}
