//! Colorspace data carried by the V4 and V5 info headers.

use crate::AsciiArray;
use core::fmt;

/// Fixed point, 2.30, signed.
///
/// Two integer bits and thirty fraction bits packed into an `i32`. The real
/// value is the integer divided by `2**30`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fxpt2Dot30(pub i32);
impl Fxpt2Dot30 {
  /// The value `1.0`.
  pub const ONE: Self = Self(1 << 30);

  /// Converts to a float.
  #[inline]
  #[must_use]
  pub fn to_f64(self) -> f64 {
    fxpt2dot30_to_f64(self.0)
  }
}
impl From<i32> for Fxpt2Dot30 {
  #[inline]
  fn from(raw: i32) -> Self {
    Self(raw)
  }
}
impl fmt::Display for Fxpt2Dot30 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.to_f64(), f)
  }
}

/// Converts a raw 2.30 fixed point value into a float.
///
/// Every `i32` is exactly representable in an `f64`, and dividing by a power of
/// two is exact, so this never loses precision.
#[inline]
#[must_use]
pub fn fxpt2dot30_to_f64(raw: i32) -> f64 {
  f64::from(raw) / f64::from(1_u32 << 30)
}

/// The `x`, `y`, and `z` coordinates of one color in the CIE XYZ space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct CieXyz {
  pub x: Fxpt2Dot30,
  pub y: Fxpt2Dot30,
  pub z: Fxpt2Dot30,
}
impl CieXyz {
  /// All three coordinates as floats.
  #[inline]
  #[must_use]
  pub fn to_f64(self) -> [f64; 3] {
    [self.x.to_f64(), self.y.to_f64(), self.z.to_f64()]
  }
}
impl fmt::Display for CieXyz {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "X coordinate: {}", self.x)?;
    writeln!(f, "Y coordinate: {}", self.y)?;
    writeln!(f, "Z coordinate: {}", self.z)
  }
}

/// The red, green, and blue endpoints of a logical colorspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct CieXyzTriple {
  pub red: CieXyz,
  pub green: CieXyz,
  pub blue: CieXyz,
}
impl fmt::Display for CieXyzTriple {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Red color coordinates:\n{}", self.red)?;
    write!(f, "Green color coordinates:\n{}", self.green)?;
    write!(f, "Blue color coordinates:\n{}", self.blue)
  }
}

pub(crate) const LCS_CALIBRATED_RGB: u32 = 0x0000_0000;
pub(crate) const LCS_SRGB: u32 = 0x7352_4742;
pub(crate) const LCS_WINDOWS_COLOR_SPACE: u32 = 0x5769_6E20;
pub(crate) const PROFILE_LINKED: u32 = 0x4C49_4E4B;
pub(crate) const PROFILE_EMBEDDED: u32 = 0x4D42_4544;

pub(crate) const LCS_GM_BUSINESS: u32 = 0x0000_0001;
pub(crate) const LCS_GM_GRAPHICS: u32 = 0x0000_0002;
pub(crate) const LCS_GM_IMAGES: u32 = 0x0000_0004;
pub(crate) const LCS_GM_ABS_COLORIMETRIC: u32 = 0x0000_0008;

/// The colorspace type tag of a V4 or V5 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogicalColorspace {
  /// The colorspace is calibrated according to the endpoints and gamma values
  /// in the header.
  CalibratedRgb,

  /// The usual sRGB colorspace.
  Srgb,

  /// The windows default color space (On windows 10, this is also sRGB).
  WindowsColorSpace,

  /// A profile elsewhere is linked to (by name). V5 only.
  ProfileLinked,

  /// A profile is embedded into the end of the bitmap itself. V5 only.
  ProfileEmbedded,
}
impl LogicalColorspace {
  /// Maps a colorspace tag to its variant.
  #[inline]
  #[must_use]
  pub const fn from_code(code: u32) -> Option<Self> {
    Some(match code {
      LCS_CALIBRATED_RGB => Self::CalibratedRgb,
      LCS_SRGB => Self::Srgb,
      LCS_WINDOWS_COLOR_SPACE => Self::WindowsColorSpace,
      PROFILE_LINKED => Self::ProfileLinked,
      PROFILE_EMBEDDED => Self::ProfileEmbedded,
      _ => return None,
    })
  }

  /// The tag as stored in the header.
  #[inline]
  #[must_use]
  pub const fn code(self) -> u32 {
    match self {
      Self::CalibratedRgb => LCS_CALIBRATED_RGB,
      Self::Srgb => LCS_SRGB,
      Self::WindowsColorSpace => LCS_WINDOWS_COLOR_SPACE,
      Self::ProfileLinked => PROFILE_LINKED,
      Self::ProfileEmbedded => PROFILE_EMBEDDED,
    }
  }

  /// If the header's endpoints and gamma values mean anything.
  #[inline]
  #[must_use]
  pub const fn uses_endpoints(self) -> bool {
    matches!(self, Self::CalibratedRgb)
  }
}
impl fmt::Display for LogicalColorspace {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::CalibratedRgb => f.write_str("calibrated RGB"),
      other => write!(f, "{:?}", AsciiArray::<4>::from(other.code())),
    }
  }
}

/// Rendering intent, used by formats that support sRGB colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SrgbIntent {
  /// for images preferring good adaptation to the output device gamut at the
  /// expense of colorimetric accuracy, such as photographs.
  Perceptual,
  /// for images requiring colour appearance matching (relative to the output
  /// device white point), such as logos.
  RelativeColorimetric,
  /// for images preferring preservation of saturation at the expense of hue and
  /// lightness, such as charts and graphs.
  Saturation,
  /// for images requiring preservation of absolute colorimetry, such as
  /// previews of images destined for a different output device (proofs).
  AbsoluteColorimetric,
}
impl SrgbIntent {
  /// Maps a V5 `intent` field to its variant.
  #[inline]
  #[must_use]
  pub const fn from_code(code: u32) -> Option<Self> {
    Some(match code {
      LCS_GM_ABS_COLORIMETRIC => Self::AbsoluteColorimetric,
      LCS_GM_BUSINESS => Self::Saturation,
      LCS_GM_GRAPHICS => Self::RelativeColorimetric,
      LCS_GM_IMAGES => Self::Perceptual,
      _ => return None,
    })
  }

  /// The value as stored in a V5 header.
  #[inline]
  #[must_use]
  pub const fn code(self) -> u32 {
    match self {
      Self::AbsoluteColorimetric => LCS_GM_ABS_COLORIMETRIC,
      Self::Saturation => LCS_GM_BUSINESS,
      Self::RelativeColorimetric => LCS_GM_GRAPHICS,
      Self::Perceptual => LCS_GM_IMAGES,
    }
  }
}
