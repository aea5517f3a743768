//! The compression modes a BMP can declare.

/// Various possible compression styles for Bmp files.
///
/// This is purely descriptive: the header decoder stores whichever mode was
/// declared and never decodes pixel data itself.
///
/// | Mode | Bits per pixel | Pixel storage | Height sign |
/// |:-|:-|:-|:-|
/// | [RgbNoCompression](Self::RgbNoCompression) | any but 0 | 2D array | +/- |
/// | [RgbRLE8](Self::RgbRLE8) | 8 | RLE | + |
/// | [RgbRLE4](Self::RgbRLE4) | 4 | RLE | + |
/// | [Bitfields](Self::Bitfields) | 16, 32 | 2D array + channel masks | +/- |
/// | [Jpeg](Self::Jpeg) | 0 | embedded JPEG | - |
/// | [Png](Self::Png) | 0 | embedded PNG | - |
/// | [AlphaBitfields](Self::AlphaBitfields) | 16, 32 | 2D array + channel masks | +/- |
/// | [CmykNoCompression](Self::CmykNoCompression) | any but 0 | CMYK 2D array | +/- |
/// | [CmykRLE8](Self::CmykRLE8) | 8 | CMYK RLE | + |
/// | [CmykRLE4](Self::CmykRLE4) | 4 | CMYK RLE | + |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BmpCompression {
  /// RGB, No compression.
  RgbNoCompression = 0,

  /// RGB, Run-length encoded, 8bpp
  RgbRLE8 = 1,

  /// RGB, Run-length encoded, 4bpp
  RgbRLE4 = 2,

  /// Meaning depends on header:
  /// * OS/2 2.x: Huffman 1D
  /// * InfoHeader: The image is not compressed, and there's red, green, and
  ///   blue bitmasks that locate each channel. For a 40 byte InfoHeader the
  ///   masks directly follow the header, later versions keep them inside the
  ///   header.
  Bitfields = 3,

  /// Meaning depends on header:
  /// * OS/2 2.x: RLE24
  /// * InfoHeader v4+: A jpeg image
  Jpeg = 4,

  /// An embedded png image.
  Png = 5,

  /// Like [Bitfields](Self::Bitfields), but with an alpha mask as well.
  AlphaBitfields = 6,

  /// CMYK, No compression.
  CmykNoCompression = 11,

  /// CMYK, Run-length encoded, 8bpp
  CmykRLE8 = 12,

  /// CMYK, Run-length encoded, 4bpp
  CmykRLE4 = 13,
}

/// The code wasn't one of the known [BmpCompression] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("unknown bmp compression code: {0}")]
pub struct UnknownCompression(pub u32);

impl TryFrom<u32> for BmpCompression {
  type Error = UnknownCompression;
  #[inline]
  fn try_from(value: u32) -> Result<Self, Self::Error> {
    use BmpCompression::*;
    Ok(match value {
      0 => RgbNoCompression,
      1 => RgbRLE8,
      2 => RgbRLE4,
      3 => Bitfields,
      4 => Jpeg,
      5 => Png,
      6 => AlphaBitfields,
      11 => CmykNoCompression,
      12 => CmykRLE8,
      13 => CmykRLE4,
      _ => return Err(UnknownCompression(value)),
    })
  }
}
impl From<BmpCompression> for u32 {
  #[inline]
  fn from(c: BmpCompression) -> Self {
    c as u32
  }
}

impl BmpCompression {
  /// The bit depths this mode is documented to allow.
  ///
  /// `None` means any non-zero depth is allowed.
  #[inline]
  #[must_use]
  pub const fn allowed_bit_depths(self) -> Option<&'static [u16]> {
    use BmpCompression::*;
    match self {
      RgbRLE8 | CmykRLE8 => Some(&[8]),
      RgbRLE4 | CmykRLE4 => Some(&[4]),
      Bitfields | AlphaBitfields => Some(&[16, 32]),
      Jpeg | Png => Some(&[0]),
      RgbNoCompression | CmykNoCompression => None,
    }
  }

  /// If `bits_per_pixel` is a documented depth for this mode.
  #[inline]
  #[must_use]
  pub fn allows_bit_depth(self, bits_per_pixel: u16) -> bool {
    match self.allowed_bit_depths() {
      Some(depths) => depths.contains(&bits_per_pixel),
      None => bits_per_pixel != 0,
    }
  }

  /// If the pixel data is run-length encoded.
  #[inline]
  #[must_use]
  pub const fn is_rle(self) -> bool {
    matches!(self, Self::RgbRLE8 | Self::RgbRLE4 | Self::CmykRLE8 | Self::CmykRLE4)
  }

  /// If the pixel data is in the CMYK space.
  #[inline]
  #[must_use]
  pub const fn is_cmyk(self) -> bool {
    matches!(self, Self::CmykNoCompression | Self::CmykRLE8 | Self::CmykRLE4)
  }

  /// If the pixel data is a whole other image file.
  #[inline]
  #[must_use]
  pub const fn is_embedded_image(self) -> bool {
    matches!(self, Self::Jpeg | Self::Png)
  }

  /// How many `u32` channel masks go with this mode.
  #[inline]
  #[must_use]
  pub const fn mask_count(self) -> usize {
    match self {
      Self::Bitfields => 3,
      Self::AlphaBitfields => 4,
      _ => 0,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_codes_match_the_format() {
    for code in [0_u32, 1, 2, 3, 4, 5, 6, 11, 12, 13] {
      let c = BmpCompression::try_from(code).unwrap();
      assert_eq!(u32::from(c), code);
    }
    for code in [7_u32, 8, 9, 10, 14, u32::MAX] {
      assert_eq!(BmpCompression::try_from(code), Err(UnknownCompression(code)));
    }
  }

  #[test]
  fn test_bit_depth_constraints() {
    assert!(BmpCompression::RgbRLE8.allows_bit_depth(8));
    assert!(!BmpCompression::RgbRLE8.allows_bit_depth(4));
    assert!(BmpCompression::Bitfields.allows_bit_depth(16));
    assert!(BmpCompression::AlphaBitfields.allows_bit_depth(32));
    assert!(!BmpCompression::Bitfields.allows_bit_depth(24));
    assert!(BmpCompression::Png.allows_bit_depth(0));
    assert!(BmpCompression::RgbNoCompression.allows_bit_depth(24));
    assert!(!BmpCompression::RgbNoCompression.allows_bit_depth(0));
  }

  #[test]
  fn test_families() {
    assert!(BmpCompression::CmykRLE4.is_rle());
    assert!(BmpCompression::CmykRLE4.is_cmyk());
    assert!(!BmpCompression::RgbRLE4.is_cmyk());
    assert!(BmpCompression::Jpeg.is_embedded_image());
    assert_eq!(BmpCompression::AlphaBitfields.mask_count(), 4);
    assert_eq!(BmpCompression::RgbRLE8.mask_count(), 0);
  }
}
