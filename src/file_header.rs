//! The 14 byte header at the very start of a BMP file.

use crate::{raw_headers::*, util::*, AsciiArray, BmpResult, ParseStage};
use core::fmt;
use std::io::Read;

/// Identifiers found at the start of a BMP file, as little-endian `u16`.
///
/// * BM: win3.1 or later
/// * BA: OS/2 bitmap array
/// * CI: OS/2 color icon
/// * CP: OS/2 color pointer
/// * IC: OS/2 icon
/// * PT: OS/2 pointer
pub const COMMON_BMP_TAGS: &[u16] = &[
  u16::from_le_bytes(*b"BM"),
  u16::from_le_bytes(*b"BA"),
  u16::from_le_bytes(*b"CI"),
  u16::from_le_bytes(*b"CP"),
  u16::from_le_bytes(*b"IC"),
  u16::from_le_bytes(*b"PT"),
];

/// The header at the start of all BMP files.
///
/// Corresponds to the 14 byte `BITMAPFILEHEADER` struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BmpFileHeader {
  /// The file tag, see [COMMON_BMP_TAGS].
  pub identifier: u16,

  /// The total size of the file.
  ///
  /// If this doesn't match the actual size of the file, there might be some
  /// sort of data loss or corruption. It's not checked here.
  pub file_size: u32,

  /// Reserved, should be 0.
  pub reserved_1: u16,

  /// Reserved, should be 0.
  pub reserved_2: u16,

  /// The byte index within the file where the bitmap data starts.
  pub pixel_data_offset: u32,
}
impl From<[u8; FILE_HEADER_LEN]> for BmpFileHeader {
  #[inline]
  fn from(a: [u8; FILE_HEADER_LEN]) -> Self {
    let raw: RawFileHeader = bytemuck::cast(a);
    Self {
      identifier: raw.identifier.get(),
      file_size: raw.file_size.get(),
      reserved_1: raw.reserved1.get(),
      reserved_2: raw.reserved2.get(),
      pixel_data_offset: raw.pixel_data_offset.get(),
    }
  }
}
impl BmpFileHeader {
  /// Reads the 14 header bytes from the reader.
  ///
  /// The reader advances exactly 14 bytes on success. The identifier is *not*
  /// checked, use [is_valid](Self::is_valid) for that.
  #[inline]
  pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> BmpResult<Self> {
    let a = read_byte_array::<_, FILE_HEADER_LEN>(reader, ParseStage::FileHeader)?;
    Ok(Self::from(a))
  }

  /// Tries to get the file header and remaining bytes from the bytes of a BMP
  /// file.
  ///
  /// The bytes from here should be used to get the info header.
  #[inline]
  pub fn try_from_bytes(bytes: &[u8]) -> BmpResult<(Self, &[u8])> {
    let (a, rest) = try_split_off_byte_array::<FILE_HEADER_LEN>(bytes, ParseStage::FileHeader)?;
    Ok((Self::from(a), rest))
  }

  /// If the identifier is one of the [COMMON_BMP_TAGS].
  #[inline]
  #[must_use]
  pub fn is_valid(&self) -> bool {
    COMMON_BMP_TAGS.contains(&self.identifier)
  }

  /// The identifier as its two ascii letters.
  #[inline]
  #[must_use]
  pub fn tag(&self) -> AsciiArray<2> {
    AsciiArray::<2>::from(self.identifier)
  }
}
impl fmt::Display for BmpFileHeader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "BITMAPFILEHEADER:")?;
    writeln!(f, "File Type: {:X} ({})", self.identifier, self.tag())?;
    writeln!(f, "File Size: {}", self.file_size)?;
    writeln!(f, "Reserved 1: {}", self.reserved_1)?;
    writeln!(f, "Reserved 2: {}", self.reserved_2)?;
    writeln!(f, "Offset: {}", self.pixel_data_offset)
  }
}
