//! Works out which info header version follows the file header, then reads it.
//!
//! Every info header starts with its own size as a `u32`. That size is peeked
//! (read and then seeked back over), matched exactly against the known
//! versions, and then the whole header is read in one go.

use crate::{info_header::*, raw_headers::*, util::*, BmpError, BmpResult, ParseStage};
use std::io::{Read, Seek, SeekFrom};

const PROBE_LEN: usize = 4;

/// Reads the declared info header size without consuming it.
///
/// The reader ends up exactly where it started. That includes when fewer than
/// 4 bytes were left (reported as [BmpError::Truncated]) and when the reader
/// fails partway (reported as [BmpError::Io]). Only a failed seek back can
/// leave it elsewhere.
pub fn peek_header_size<R: Read + Seek + ?Sized>(reader: &mut R) -> BmpResult<u32> {
  let mut probe = [0_u8; PROBE_LEN];
  let (available, failure) = try_fill(reader, &mut probe);
  rewind(reader, available)?;
  if let Some(source) = failure {
    return Err(BmpError::Io { stage: ParseStage::InfoHeaderProbe, source });
  }
  if available < PROBE_LEN {
    return Err(BmpError::Truncated {
      stage: ParseStage::InfoHeaderProbe,
      expected: PROBE_LEN,
      available,
    });
  }
  let size = u32::from_le_bytes(probe);
  log::trace!("info header declares {size} bytes");
  Ok(size)
}

fn rewind<R: Seek + ?Sized>(reader: &mut R, count: usize) -> BmpResult<()> {
  if count == 0 {
    return Ok(());
  }
  match reader.seek(SeekFrom::Current(-(count as i64))) {
    Ok(_) => Ok(()),
    Err(source) => Err(BmpError::Io { stage: ParseStage::InfoHeaderProbe, source }),
  }
}

fn kind_for_size(size: u32) -> BmpResult<InfoHeaderKind> {
  match InfoHeaderKind::from_size(size) {
    Some(kind) => {
      log::debug!("info header is a {}", kind.struct_name());
      Ok(kind)
    }
    None => Err(BmpError::UnsupportedHeaderLength { found: size }),
  }
}

/// Decodes a full header record. `bytes` must be exactly `kind.size()` long.
fn decode_record(kind: InfoHeaderKind, bytes: &[u8]) -> BmpInfoHeaderVariant {
  debug_assert_eq!(bytes.len(), kind.size());
  match kind {
    InfoHeaderKind::Core => {
      BmpInfoHeaderVariant::Core(BmpCoreHeader::from_raw(bytemuck::pod_read_unaligned(bytes)))
    }
    InfoHeaderKind::Os22x => {
      BmpInfoHeaderVariant::Os22x(BmpOs22xHeader::from_raw(bytemuck::pod_read_unaligned(bytes)))
    }
    InfoHeaderKind::Info => {
      BmpInfoHeaderVariant::Info(BmpInfoHeader::from_raw(bytemuck::pod_read_unaligned(bytes)))
    }
    InfoHeaderKind::V2 => {
      BmpInfoHeaderVariant::V2(BmpInfoHeaderV2::from_raw(bytemuck::pod_read_unaligned(bytes)))
    }
    InfoHeaderKind::V3 => {
      BmpInfoHeaderVariant::V3(BmpInfoHeaderV3::from_raw(bytemuck::pod_read_unaligned(bytes)))
    }
    InfoHeaderKind::V4 => {
      BmpInfoHeaderVariant::V4(BmpInfoHeaderV4::from_raw(bytemuck::pod_read_unaligned(bytes)))
    }
    InfoHeaderKind::V5 => {
      BmpInfoHeaderVariant::V5(BmpInfoHeaderV5::from_raw(bytemuck::pod_read_unaligned(bytes)))
    }
  }
}

impl BmpInfoHeaderVariant {
  /// Reads the info header that starts at the reader's current position.
  ///
  /// On success the reader is left at the first byte after the header.
  ///
  /// ## Failure
  /// * [BmpError::UnsupportedHeaderLength] when the declared size isn't one of
  ///   the known versions. The reader hasn't moved in this case.
  /// * [BmpError::Truncated] when the probe or the header itself runs out of
  ///   bytes. Missing bytes are never zero-filled.
  /// * [BmpError::Io] for other reader failures.
  pub fn read_from<R: Read + Seek + ?Sized>(reader: &mut R) -> BmpResult<Self> {
    let kind = kind_for_size(peek_header_size(reader)?)?;
    let mut buf = [0_u8; MAX_INFO_HEADER_LEN];
    let bytes = &mut buf[..kind.size()];
    read_exactly(reader, bytes, ParseStage::InfoHeader)?;
    Ok(decode_record(kind, bytes))
  }

  /// As [read_from](Self::read_from), for readers that can't seek.
  ///
  /// The size probe is consumed and kept in the header buffer instead. An
  /// unsupported size therefore leaves the reader 4 bytes further along.
  pub fn read_from_unseekable<R: Read + ?Sized>(reader: &mut R) -> BmpResult<Self> {
    let probe = read_byte_array::<_, PROBE_LEN>(reader, ParseStage::InfoHeaderProbe)?;
    let size = u32::from_le_bytes(probe);
    log::trace!("info header declares {size} bytes");
    let kind = kind_for_size(size)?;
    let mut buf = [0_u8; MAX_INFO_HEADER_LEN];
    let bytes = &mut buf[..kind.size()];
    bytes[..PROBE_LEN].copy_from_slice(&probe);
    let available = PROBE_LEN + fill_from(reader, &mut bytes[PROBE_LEN..], ParseStage::InfoHeader)?;
    if available < bytes.len() {
      return Err(BmpError::Truncated {
        stage: ParseStage::InfoHeader,
        expected: bytes.len(),
        available,
      });
    }
    Ok(decode_record(kind, bytes))
  }

  /// Tries to get the info header and remaining bytes from the bytes that
  /// follow a file header.
  pub fn try_from_bytes(bytes: &[u8]) -> BmpResult<(Self, &[u8])> {
    let (probe, _) = try_split_off_byte_array::<PROBE_LEN>(bytes, ParseStage::InfoHeaderProbe)?;
    let kind = kind_for_size(u32::from_le_bytes(probe))?;
    if bytes.len() < kind.size() {
      return Err(BmpError::Truncated {
        stage: ParseStage::InfoHeader,
        expected: kind.size(),
        available: bytes.len(),
      });
    }
    let (head, rest) = bytes.split_at(kind.size());
    Ok((decode_record(kind, head), rest))
  }
}
