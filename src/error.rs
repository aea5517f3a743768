//! The error type shared by every reader in the crate.

use std::{fmt, io, path::PathBuf};

/// Which part of the header region was being read when an error happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParseStage {
  /// The 14 byte file header at the start of the file.
  FileHeader,
  /// The 4 byte size tag at the start of the info header.
  InfoHeaderProbe,
  /// The full info header, once its size is known.
  InfoHeader,
}
impl fmt::Display for ParseStage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::FileHeader => "file header",
      Self::InfoHeaderProbe => "info header size probe",
      Self::InfoHeader => "info header",
    })
  }
}

/// An error from the `bmprobe` crate.
///
/// Every error is terminal for the parse that produced it, there's never a
/// partially decoded result.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
#[allow(missing_docs)]
pub enum BmpError {
  /// The path given doesn't exist.
  #[error("no such file: `{}`", path.display())]
  NotFound { path: PathBuf },

  /// The path exists but couldn't be opened for reading.
  #[error("could not open `{}`: {source}", path.display())]
  OpenFailure {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The input ended before a fixed size record was complete.
  #[error("{stage} truncated: needed {expected} bytes, only {available} available")]
  Truncated { stage: ParseStage, expected: usize, available: usize },

  /// The byte source reported an error that isn't about running out of bytes.
  #[error("i/o error while reading the {stage}: {source}")]
  Io {
    stage: ParseStage,
    #[source]
    source: io::Error,
  },

  /// The file header's tag isn't one of [COMMON_BMP_TAGS](crate::COMMON_BMP_TAGS).
  #[error("not a bmp file: unrecognized identifier {found:#06X}")]
  InvalidIdentifier { found: u16 },

  /// The info header declares a size that isn't any known header version.
  #[error("unsupported info header length: {found}")]
  UnsupportedHeaderLength { found: u32 },
}

/// The fieldless "shape" of a [BmpError].
///
/// Handy when you only care which failure happened and not the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum BmpErrorKind {
  NotFound,
  OpenFailure,
  Truncated,
  IoFailure,
  InvalidIdentifier,
  UnsupportedHeaderLength,
}

impl BmpError {
  /// The kind of error this is.
  #[inline]
  #[must_use]
  pub const fn kind(&self) -> BmpErrorKind {
    match self {
      Self::NotFound { .. } => BmpErrorKind::NotFound,
      Self::OpenFailure { .. } => BmpErrorKind::OpenFailure,
      Self::Truncated { .. } => BmpErrorKind::Truncated,
      Self::Io { .. } => BmpErrorKind::IoFailure,
      Self::InvalidIdentifier { .. } => BmpErrorKind::InvalidIdentifier,
      Self::UnsupportedHeaderLength { .. } => BmpErrorKind::UnsupportedHeaderLength,
    }
  }
}

/// Shorthand for results in this crate.
pub type BmpResult<T> = Result<T, BmpError>;
