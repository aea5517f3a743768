//! Shorthands for pulling fixed size records out of readers and slices.

use crate::{BmpError, BmpResult, ParseStage};
use std::io::{self, ErrorKind, Read};

/// Fills as much of `buf` as the reader can give us.
///
/// Returns how many bytes were filled, along with the error that stopped the
/// reader early, if any. Stopping short without an error means EOF.
/// `Interrupted` is retried.
pub(crate) fn try_fill<R: Read + ?Sized>(
  reader: &mut R, buf: &mut [u8],
) -> (usize, Option<io::Error>) {
  let mut filled = 0;
  while filled < buf.len() {
    match reader.read(&mut buf[filled..]) {
      Ok(0) => break,
      Ok(n) => filled += n,
      Err(e) if e.kind() == ErrorKind::Interrupted => continue,
      Err(e) => return (filled, Some(e)),
    }
  }
  (filled, None)
}

/// As [try_fill], with a failed read reported as [BmpError::Io] for the given
/// stage.
pub(crate) fn fill_from<R: Read + ?Sized>(
  reader: &mut R, buf: &mut [u8], stage: ParseStage,
) -> BmpResult<usize> {
  match try_fill(reader, buf) {
    (filled, None) => Ok(filled),
    (_, Some(source)) => Err(BmpError::Io { stage, source }),
  }
}

/// Reads exactly `buf.len()` bytes, or fails with [BmpError::Truncated].
pub(crate) fn read_exactly<R: Read + ?Sized>(
  reader: &mut R, buf: &mut [u8], stage: ParseStage,
) -> BmpResult<()> {
  let available = fill_from(reader, buf, stage)?;
  if available < buf.len() {
    Err(BmpError::Truncated { stage, expected: buf.len(), available })
  } else {
    Ok(())
  }
}

/// Reads an `N` byte record.
#[inline]
pub(crate) fn read_byte_array<R: Read + ?Sized, const N: usize>(
  reader: &mut R, stage: ParseStage,
) -> BmpResult<[u8; N]> {
  let mut a = [0; N];
  read_exactly(reader, &mut a, stage)?;
  Ok(a)
}

/// Splits an `N` byte array off the front of a slice.
#[inline]
pub(crate) fn try_split_off_byte_array<const N: usize>(
  bytes: &[u8], stage: ParseStage,
) -> BmpResult<([u8; N], &[u8])> {
  match bytes.split_first_chunk::<N>() {
    Some((head, tail)) => Ok((*head, tail)),
    None => Err(BmpError::Truncated { stage, expected: N, available: bytes.len() }),
  }
}
