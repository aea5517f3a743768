//! Byte arrays that are shown as text.

use core::fmt::Write;

/// An array of bytes expected to contain ascii data.
///
/// No encoding is enforced. The `Debug` and `Display` impls just `as` cast each
/// byte into a `char`, which is exactly right for printable ascii and still
/// harmless for anything else.
///
/// BMP uses two-letter file tags ("BM", "BA", ...) and four-letter colorspace
/// codes that spell out ascii when their integer value is read most significant
/// byte first, so this gives those values a readable `Debug` output.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct AsciiArray<const N: usize>(pub [u8; N]);

impl<const N: usize> Default for AsciiArray<N> {
  #[inline]
  fn default() -> Self {
    Self([0; N])
  }
}

impl<const N: usize> core::fmt::Debug for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    core::fmt::Display::fmt(self, f)?;
    f.write_char('\"')
  }
}
impl<const N: usize> core::fmt::Display for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(char::from) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}

impl<const N: usize> From<[u8; N]> for AsciiArray<N> {
  #[inline]
  fn from(array: [u8; N]) -> Self {
    Self(array)
  }
}

impl From<u16> for AsciiArray<2> {
  /// The bytes of a little-endian `u16`, in file order.
  #[inline]
  fn from(value: u16) -> Self {
    Self(value.to_le_bytes())
  }
}

impl From<u32> for AsciiArray<4> {
  /// The bytes of a big-endian `u32`, so that colorspace codes such as
  /// `0x7352_4742` read as `"sRGB"`.
  #[inline]
  fn from(value: u32) -> Self {
    Self(value.to_be_bytes())
  }
}
