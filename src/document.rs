//! The whole header region of a BMP file.

use crate::{
  BmpCompression, BmpError, BmpFileHeader, BmpInfoHeaderVariant, BmpResult, ChannelMasks,
  InfoHeaderKind,
};
use core::fmt;
use std::{
  fs::File,
  io::{BufReader, ErrorKind, Read, Seek},
  path::Path,
};

/// The file header and info header at the start of a BMP file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BmpDocument {
  /// The leading 14 bytes. The identifier has already been checked.
  pub file_header: BmpFileHeader,

  /// Whichever info header version the file has.
  pub info_header: BmpInfoHeaderVariant,
}

fn checked_file_header(file_header: BmpFileHeader) -> BmpResult<BmpFileHeader> {
  if !file_header.is_valid() {
    return Err(BmpError::InvalidIdentifier { found: file_header.identifier });
  }
  if file_header.reserved_1 != 0 || file_header.reserved_2 != 0 {
    log::warn!(
      "reserved file header fields should be 0, found {} and {}",
      file_header.reserved_1,
      file_header.reserved_2
    );
  }
  log::debug!(
    "{} file, {} bytes, pixels at {}",
    file_header.tag(),
    file_header.file_size,
    file_header.pixel_data_offset
  );
  Ok(file_header)
}

impl BmpDocument {
  /// Opens the file at `path` and reads its header region.
  ///
  /// The file is closed again before this returns, success or not.
  ///
  /// ## Failure
  /// * [BmpError::NotFound] if there's no such file.
  /// * [BmpError::OpenFailure] if it couldn't be opened for any other reason.
  /// * Anything [from_reader](Self::from_reader) can fail with.
  pub fn open<P: AsRef<Path>>(path: P) -> BmpResult<Self> {
    let path = path.as_ref();
    let file = match File::open(path) {
      Ok(file) => file,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Err(BmpError::NotFound { path: path.to_path_buf() })
      }
      Err(source) => return Err(BmpError::OpenFailure { path: path.to_path_buf(), source }),
    };
    log::debug!("reading `{}`", path.display());
    Self::from_reader(&mut BufReader::new(file))
  }

  /// Reads the header region starting at the reader's current position.
  ///
  /// On success the reader is left at the first byte after the info header,
  /// which is where a 40 byte header's bit masks or the color table start.
  ///
  /// ## Failure
  /// * [BmpError::InvalidIdentifier] if the file tag isn't a known one.
  /// * Anything [BmpFileHeader::read_from] or
  ///   [BmpInfoHeaderVariant::read_from] can fail with.
  pub fn from_reader<R: Read + Seek + ?Sized>(reader: &mut R) -> BmpResult<Self> {
    let file_header = checked_file_header(BmpFileHeader::read_from(reader)?)?;
    let info_header = BmpInfoHeaderVariant::read_from(reader)?;
    Ok(Self { file_header, info_header })
  }

  /// Tries to get the header region and remaining bytes from the bytes of a
  /// BMP file.
  pub fn from_bytes(bytes: &[u8]) -> BmpResult<(Self, &[u8])> {
    let (file_header, rest) = BmpFileHeader::try_from_bytes(bytes)?;
    let file_header = checked_file_header(file_header)?;
    let (info_header, rest) = BmpInfoHeaderVariant::try_from_bytes(rest)?;
    Ok((Self { file_header, info_header }, rest))
  }

  /// Everything a pixel decoder needs to know, without looking at any bytes
  /// past the info header.
  #[must_use]
  pub fn handoff(&self) -> PixelDataHandoff {
    let ih = &self.info_header;
    let compression = ih.compression();
    let trailing_masks = match (ih.kind(), compression) {
      (InfoHeaderKind::Info, Some(c)) => c.mask_count() * 4,
      _ => 0,
    };
    PixelDataHandoff {
      pixel_data_offset: self.file_header.pixel_data_offset,
      file_size: self.file_header.file_size,
      width: ih.width(),
      height: ih.height(),
      top_down: ih.is_top_down(),
      bits_per_pixel: ih.bits_per_pixel(),
      compression,
      palette_start: crate::raw_headers::FILE_HEADER_LEN
        + ih.header_size() as usize
        + trailing_masks,
      palette_len: ih.palette_len(),
      palette_entry_size: ih.palette_entry_size(),
      bit_masks: ih.bit_masks(),
    }
  }
}
impl fmt::Display for BmpDocument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.file_header, f)?;
    fmt::Display::fmt(&self.info_header, f)
  }
}

/// What a pixel decoder gets from the header region.
///
/// All byte positions are from the start of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelDataHandoff {
  /// Where the pixel array starts.
  pub pixel_data_offset: u32,

  /// The file size claimed by the file header. Not checked.
  pub file_size: u32,

  /// Image pixel width.
  pub width: i32,

  /// Image pixel height, negative for top-down images.
  pub height: i32,

  /// If rows are stored top to bottom.
  pub top_down: bool,

  /// Bits per pixel.
  pub bits_per_pixel: u16,

  /// The declared compression, `None` if the code was unknown.
  pub compression: Option<BmpCompression>,

  /// Where the color table starts.
  ///
  /// This is right after the info header, except that a 40 byte header using
  /// [BmpCompression::Bitfields] or [BmpCompression::AlphaBitfields] is
  /// followed by 12 or 16 bytes of channel masks first.
  pub palette_start: usize,

  /// Number of color table entries.
  pub palette_len: usize,

  /// Bytes per color table entry, 3 or 4.
  pub palette_entry_size: usize,

  /// Channel masks, when the info header itself holds them.
  pub bit_masks: Option<ChannelMasks>,
}
impl PixelDataHandoff {
  /// The byte length of the color table.
  #[inline]
  #[must_use]
  pub const fn palette_byte_len(&self) -> usize {
    self.palette_len.saturating_mul(self.palette_entry_size)
  }
}
