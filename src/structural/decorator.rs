//! Structural Pattern: Decorator
//! Example: Encryption and compression layered over a data source
//!
//! Run with: cargo run --bin decorator
//!
//! Each decorator implements [`DataSource`] and owns another `DataSource`.
//! On write it transforms the data and passes it inward; on read it reads
//! from inside and undoes its transformation. Layers stack in any order and
//! the client only ever sees the outermost one.
//!
//! ```text
//! CompressionDecorator -> EncryptionDecorator -> MemoryDataSource
//! ```

use itertools::Itertools;
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    #[error("corrupt {layer} payload: {reason}")]
    Corrupt {
        layer: &'static str,
        reason: String,
    },
}

pub trait DataSource {
    fn write_data(&mut self, data: &str);
    fn read_data(&self) -> Result<String, DataSourceError>;
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn write_data(&mut self, data: &str) {
        (**self).write_data(data)
    }

    fn read_data(&self) -> Result<String, DataSourceError> {
        (**self).read_data()
    }
}

/// The innermost layer: stores exactly what it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDataSource {
    stored: String,
}

impl MemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bytes as they sit in storage, after every layer ran.
    pub fn raw(&self) -> &str {
        &self.stored
    }
}

impl DataSource for MemoryDataSource {
    fn write_data(&mut self, data: &str) {
        self.stored = data.to_string();
    }

    fn read_data(&self) -> Result<String, DataSourceError> {
        Ok(self.stored.clone())
    }
}

// ============================================================================
// Encryption (ROT13)
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct EncryptionDecorator<S> {
    inner: S,
}

impl<S: DataSource> EncryptionDecorator<S> {
    pub fn new(inner: S) -> Self {
        EncryptionDecorator { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

fn rot13(data: &str) -> String {
    data.chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a') + 13) % 26 + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A') + 13) % 26 + b'A') as char,
            _ => c,
        })
        .collect()
}

impl<S: DataSource> DataSource for EncryptionDecorator<S> {
    fn write_data(&mut self, data: &str) {
        trace!(len = data.len(), "encrypting");
        self.inner.write_data(&rot13(data));
    }

    fn read_data(&self) -> Result<String, DataSourceError> {
        // ROT13 is its own inverse.
        Ok(rot13(&self.inner.read_data()?))
    }
}

// ============================================================================
// Compression (run-length, `<count>:<char>` per run)
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CompressionDecorator<S> {
    inner: S,
}

impl<S: DataSource> CompressionDecorator<S> {
    pub fn new(inner: S) -> Self {
        CompressionDecorator { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

/// Upper bound on decompressed output, in bytes.
pub const MAX_DECOMPRESSED_LEN: usize = 16 * 1024 * 1024;

fn compress(data: &str) -> String {
    data.chars()
        .dedup_with_count()
        .map(|(count, c)| format!("{}:{}", count, c))
        .collect()
}

fn decompress(data: &str) -> Result<String, DataSourceError> {
    let corrupt = |reason: String| DataSourceError::Corrupt {
        layer: "compressed",
        reason,
    };

    let mut out = String::new();
    let mut chars = data.chars().peekable();
    while chars.peek().is_some() {
        let mut digits = String::new();
        while let Some(d) = chars.next_if(char::is_ascii_digit) {
            digits.push(d);
        }
        if chars.next() != Some(':') {
            return Err(corrupt("expected ':' after run length".to_string()));
        }
        if digits.is_empty() {
            return Err(corrupt("run without a count".to_string()));
        }
        let count: usize = digits
            .parse()
            .map_err(|_| corrupt(format!("bad run length {:?}", digits)))?;
        if count == 0 {
            return Err(corrupt("zero-length run".to_string()));
        }
        let c = chars
            .next()
            .ok_or_else(|| corrupt(format!("run of {} has no character", count)))?;
        let within_limit = count
            .checked_mul(c.len_utf8())
            .and_then(|bytes| bytes.checked_add(out.len()))
            .is_some_and(|total| total <= MAX_DECOMPRESSED_LEN);
        if !within_limit {
            return Err(corrupt(format!("run length {} too large", count)));
        }
        out.extend(std::iter::repeat(c).take(count));
    }
    Ok(out)
}

impl<S: DataSource> DataSource for CompressionDecorator<S> {
    fn write_data(&mut self, data: &str) {
        trace!(len = data.len(), "compressing");
        self.inner.write_data(&compress(data));
    }

    fn read_data(&self) -> Result<String, DataSourceError> {
        decompress(&self.inner.read_data()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_source() {
        let mut source = MemoryDataSource::new();
        source.write_data("data");
        assert_eq!(source.read_data().unwrap(), "data");
    }

    #[test]
    fn test_encryption_layer() {
        let mut source = EncryptionDecorator::new(MemoryDataSource::new());
        source.write_data("Hello, World");
        assert_eq!(source.inner().raw(), "Uryyb, Jbeyq");
        assert_eq!(source.read_data().unwrap(), "Hello, World");
    }

    #[test]
    fn test_compression_layer() {
        let mut source = CompressionDecorator::new(MemoryDataSource::new());
        source.write_data("aaab::1");
        assert_eq!(source.inner().raw(), "3:a1:b2::1:1");
        assert_eq!(source.read_data().unwrap(), "aaab::1");
    }

    #[test]
    fn test_stacking_order_changes_storage_not_result() {
        let mut compressed_then_encrypted =
            CompressionDecorator::new(EncryptionDecorator::new(MemoryDataSource::new()));
        let mut encrypted_then_compressed =
            EncryptionDecorator::new(CompressionDecorator::new(MemoryDataSource::new()));

        compressed_then_encrypted.write_data("zzzz");
        encrypted_then_compressed.write_data("zzzz");

        assert_eq!(compressed_then_encrypted.inner().inner().raw(), "4:m");
        assert_eq!(encrypted_then_compressed.inner().inner().raw(), "4:m");
        assert_eq!(compressed_then_encrypted.read_data().unwrap(), "zzzz");
        assert_eq!(encrypted_then_compressed.read_data().unwrap(), "zzzz");
    }

    #[test]
    fn test_empty_payload() {
        let mut source = CompressionDecorator::new(MemoryDataSource::new());
        source.write_data("");
        assert_eq!(source.read_data().unwrap(), "");
    }

    #[test]
    fn test_corrupt_payloads() {
        for payload in [
            "3",
            "3:",
            ":a",
            "0:a",
            "x:a",
            "2:a:",
            "18446744073709551615:a",
            "99999999999999999999999:a",
        ] {
            assert!(
                matches!(decompress(payload), Err(DataSourceError::Corrupt { .. })),
                "{payload:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_oversized_run_is_corrupt_not_a_crash() {
        let mut raw = MemoryDataSource::new();
        raw.write_data(&format!("{}:a", MAX_DECOMPRESSED_LEN + 1));
        let source = CompressionDecorator::new(raw);

        match source.read_data() {
            Err(DataSourceError::Corrupt { reason, .. }) => assert!(reason.contains("too large")),
            other => panic!("expected corrupt payload, got {:?}", other),
        }
    }

    #[test]
    fn test_run_at_limit_is_accepted() {
        let payload = format!("{}:a", MAX_DECOMPRESSED_LEN);
        assert_eq!(decompress(&payload).unwrap().len(), MAX_DECOMPRESSED_LEN);
    }

    #[test]
    fn test_boxed_layers() {
        let mut source: Box<dyn DataSource> =
            Box::new(EncryptionDecorator::new(MemoryDataSource::new()));
        source.write_data("abc");
        assert_eq!(source.read_data().unwrap(), "abc");
    }
}
