//! Schema descriptors compiled into the binary.
//!
//! An [`EmbeddedFile`] is a `static` holding the serialized
//! `FileDescriptorProto` of one `.proto` file, stored either plain or
//! gzip-compressed, plus the files it imports. Derived forms are computed
//! on first access and cached for the life of the process:
//!
//! - the plain bytes (one decompression, if stored compressed),
//! - the gzip bytes (one compression, if stored plain), served to callers of
//!   the legacy descriptor accessors,
//! - the decoded [`FileDescriptorProto`].
//!
//! Each cache sits behind its own [`OnceLock`], so concurrent first callers
//! block on a single initialisation instead of repeating it.

use crate::error::{DescriptorError, DescriptorResult};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use prost::Message;
use prost_types::FileDescriptorProto;
use std::io::{Read, Write};
use std::sync::{Arc, OnceLock};

/// How the bytes of an [`EmbeddedFile`] are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEncoding {
    /// Serialized `FileDescriptorProto` as is.
    Plain,
    /// Gzip stream of the serialized `FileDescriptorProto`.
    Gzip,
}

/// A compiled-in schema file.
///
/// # Example
/// ```ignore
/// static FILE: EmbeddedFile = EmbeddedFile::plain("demo.proto", RAW, &[&DEPENDENCY]);
///
/// let descriptor = FILE.descriptor()?;
/// ```
#[derive(Debug)]
pub struct EmbeddedFile {
    name: &'static str,
    bytes: &'static [u8],
    encoding: RawEncoding,
    dependencies: &'static [&'static EmbeddedFile],
    plain: OnceLock<DescriptorResult<Vec<u8>>>,
    gzip: OnceLock<DescriptorResult<Vec<u8>>>,
    descriptor: OnceLock<DescriptorResult<Arc<FileDescriptorProto>>>,
}

impl EmbeddedFile {
    /// Declares a file stored as plain descriptor bytes.
    #[must_use]
    pub const fn plain(
        name: &'static str,
        bytes: &'static [u8],
        dependencies: &'static [&'static EmbeddedFile],
    ) -> Self {
        Self::new(name, bytes, RawEncoding::Plain, dependencies)
    }

    /// Declares a file stored as gzip-compressed descriptor bytes.
    #[must_use]
    pub const fn gzip(
        name: &'static str,
        bytes: &'static [u8],
        dependencies: &'static [&'static EmbeddedFile],
    ) -> Self {
        Self::new(name, bytes, RawEncoding::Gzip, dependencies)
    }

    const fn new(
        name: &'static str,
        bytes: &'static [u8],
        encoding: RawEncoding,
        dependencies: &'static [&'static EmbeddedFile],
    ) -> Self {
        Self {
            name,
            bytes,
            encoding,
            dependencies,
            plain: OnceLock::new(),
            gzip: OnceLock::new(),
            descriptor: OnceLock::new(),
        }
    }

    /// Returns the `.proto` path of the file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns how the bytes are stored.
    #[must_use]
    pub const fn encoding(&self) -> RawEncoding {
        self.encoding
    }

    /// Returns the files this one imports, in import order.
    #[must_use]
    pub const fn dependencies(&self) -> &'static [&'static EmbeddedFile] {
        self.dependencies
    }

    /// Returns the plain serialized descriptor, decompressing once if needed.
    ///
    /// # Errors
    /// Returns an error if the stored gzip stream is corrupt.
    pub fn raw_bytes(&self) -> DescriptorResult<&[u8]> {
        match self.encoding {
            RawEncoding::Plain => Ok(self.bytes),
            RawEncoding::Gzip => self
                .plain
                .get_or_init(|| {
                    let out = gunzip(self.name, self.bytes);
                    if let Ok(out) = &out {
                        tracing::trace!(
                            "Decompressed descriptor {} ({} -> {} bytes)",
                            self.name,
                            self.bytes.len(),
                            out.len()
                        );
                    }
                    out
                })
                .as_deref()
                .map_err(Clone::clone),
        }
    }

    /// Returns the gzip-compressed serialized descriptor, compressing once if needed.
    ///
    /// # Errors
    /// Returns an error if compression fails.
    pub fn gzip_bytes(&self) -> DescriptorResult<&[u8]> {
        match self.encoding {
            RawEncoding::Gzip => Ok(self.bytes),
            RawEncoding::Plain => self
                .gzip
                .get_or_init(|| {
                    let out = gzip(self.name, self.bytes);
                    if let Ok(out) = &out {
                        tracing::trace!(
                            "Compressed descriptor {} ({} -> {} bytes)",
                            self.name,
                            self.bytes.len(),
                            out.len()
                        );
                    }
                    out
                })
                .as_deref()
                .map_err(Clone::clone),
        }
    }

    /// Returns the decoded descriptor, decoding once.
    ///
    /// # Errors
    /// Returns an error if the bytes are corrupt or not a valid descriptor.
    pub fn descriptor(&self) -> DescriptorResult<Arc<FileDescriptorProto>> {
        self.descriptor
            .get_or_init(|| {
                let raw = self.raw_bytes()?;
                Ok(Arc::new(FileDescriptorProto::decode(raw)?))
            })
            .clone()
    }

    /// Returns true once a decode of the descriptor has been attempted.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.descriptor.get().is_some()
    }
}

/// Inflates a gzip stream.
///
/// # Errors
/// Returns [`DescriptorError::Compression`] if the stream is corrupt.
pub fn gunzip(file: &str, data: &[u8]) -> DescriptorResult<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| compression_error(file, &e))?;
    Ok(out)
}

/// Deflates bytes into a gzip stream.
///
/// # Errors
/// Returns [`DescriptorError::Compression`] if the encoder fails.
pub fn gzip(file: &str, data: &[u8]) -> DescriptorResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| compression_error(file, &e))?;
    encoder.finish().map_err(|e| compression_error(file, &e))
}

fn compression_error(file: &str, error: &std::io::Error) -> DescriptorError {
    DescriptorError::Compression {
        file: file.to_string(),
        message: error.to_string(),
    }
}
