//! The typed info headers, and the enum over all of them.
//!
//! Each header version is its own flat struct. A richer version holds the
//! version it extends as its first field, so a [BmpInfoHeaderV5] contains a
//! [BmpInfoHeaderV4], which contains a [BmpInfoHeaderV3], and so on down to a
//! [BmpInfoHeader]. [BmpInfoHeaderVariant] is the closed set of what a file
//! can actually have.

use crate::{colorspace::*, raw_headers::*, AsciiArray, BmpCompression};
use core::fmt;

/// Names the seven info header versions by their size on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InfoHeaderKind {
  /// `BITMAPCOREHEADER` / `OS21XBITMAPHEADER`, 12 bytes.
  Core,
  /// `OS22XBITMAPHEADER`, 64 bytes.
  Os22x,
  /// `BITMAPINFOHEADER`, 40 bytes.
  Info,
  /// `BITMAPV2INFOHEADER`, 52 bytes.
  V2,
  /// `BITMAPV3INFOHEADER`, 56 bytes.
  V3,
  /// `BITMAPV4HEADER`, 108 bytes.
  V4,
  /// `BITMAPV5HEADER`, 124 bytes.
  V5,
}
impl InfoHeaderKind {
  /// All kinds, smallest header first.
  pub const ALL: [Self; 7] =
    [Self::Core, Self::Info, Self::V2, Self::V3, Self::Os22x, Self::V4, Self::V5];

  /// The header version with exactly this size, if any.
  #[inline]
  #[must_use]
  pub const fn from_size(size: u32) -> Option<Self> {
    Some(match size as usize {
      CORE_HEADER_LEN => Self::Core,
      OS22X_HEADER_LEN => Self::Os22x,
      INFO_HEADER_LEN => Self::Info,
      V2_HEADER_LEN => Self::V2,
      V3_HEADER_LEN => Self::V3,
      V4_HEADER_LEN => Self::V4,
      V5_HEADER_LEN => Self::V5,
      _ => return None,
    })
  }

  /// Size of this header version in bytes.
  #[inline]
  #[must_use]
  pub const fn size(self) -> usize {
    match self {
      Self::Core => CORE_HEADER_LEN,
      Self::Os22x => OS22X_HEADER_LEN,
      Self::Info => INFO_HEADER_LEN,
      Self::V2 => V2_HEADER_LEN,
      Self::V3 => V3_HEADER_LEN,
      Self::V4 => V4_HEADER_LEN,
      Self::V5 => V5_HEADER_LEN,
    }
  }

  /// The version this one extends, if any.
  #[inline]
  #[must_use]
  pub const fn parent(self) -> Option<Self> {
    match self {
      Self::Core => None,
      Self::Os22x | Self::Info => Some(Self::Core),
      Self::V2 => Some(Self::Info),
      Self::V3 => Some(Self::V2),
      Self::V4 => Some(Self::V3),
      Self::V5 => Some(Self::V4),
    }
  }

  /// The name of the matching Windows / OS/2 struct.
  #[inline]
  #[must_use]
  pub const fn struct_name(self) -> &'static str {
    match self {
      Self::Core => "BITMAPCOREHEADER",
      Self::Os22x => "OS22XBITMAPHEADER",
      Self::Info => "BITMAPINFOHEADER",
      Self::V2 => "BITMAPV2INFOHEADER",
      Self::V3 => "BITMAPV3INFOHEADER",
      Self::V4 => "BITMAPV4HEADER",
      Self::V5 => "BITMAPV5HEADER",
    }
  }
}

fn compression_from_code(code: u32) -> Option<BmpCompression> {
  match BmpCompression::try_from(code) {
    Ok(c) => Some(c),
    Err(e) => {
      log::warn!("{e}, keeping the rest of the header");
      None
    }
  }
}

/// Header for Windows 2.0 and OS/2 1.x images.
///
/// Unlikely to be seen in modern times. All colors are indexed, and the color
/// table entries are 3 bytes each.
///
/// Corresponds to the the 12 byte `BITMAPCOREHEADER` struct (aka
/// `OS21XBITMAPHEADER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BmpCoreHeader {
  /// Size of this header, always 12.
  pub header_size: u32,

  /// Width in pixels.
  pub width: u16,

  /// Height in pixels. The origin is the bottom left.
  pub height: u16,

  /// Number of color planes, should be 1.
  pub color_planes: u16,

  /// Bits per palette index, expected to be 8 or less.
  pub bits_per_pixel: u16,
}
impl BmpCoreHeader {
  pub(crate) fn from_raw(raw: RawCoreHeader) -> Self {
    Self {
      header_size: raw.size.get(),
      width: raw.width.get(),
      height: raw.height.get(),
      color_planes: raw.planes.get(),
      bits_per_pixel: raw.bits_per_pixel.get(),
    }
  }
}
impl fmt::Display for BmpCoreHeader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Header size: {}", self.header_size)?;
    writeln!(f, "Bitmap width: {}", self.width)?;
    writeln!(f, "Bitmap height: {}", self.height)?;
    writeln!(f, "Color planes: {}", self.color_planes)?;
    writeln!(f, "Bits per pixel: {}", self.bits_per_pixel)
  }
}

/// Header for Windows 3.1 or later.
///
/// This is the most commonly used header, unless the image actually needs to
/// take advantage of a more advanced feature. It has all the fields of
/// [BmpCoreHeader], with the width and height widened to signed 32-bit.
///
/// Corresponds to the 40 byte `BITMAPINFOHEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BmpInfoHeader {
  /// Size of the full header this is part of.
  pub header_size: u32,

  /// Image pixel width
  pub width: i32,

  /// Image pixel height.
  ///
  /// * A positive height indicates that the origin is the **bottom** left.
  /// * A negative height indicates that the image origin is the **top** left.
  pub height: i32,

  /// Number of color planes, should be 1.
  pub color_planes: u16,

  /// Should be 1, 4, 8, 16, 24, or 32.
  ///
  /// The value 0 is also allowed, which indicates that a Jpeg or Png file is
  /// contained in this bitmap, which will have the bits per pixel info.
  pub bits_per_pixel: u16,

  /// The compression style of the image data.
  ///
  /// `None` means the code in the file wasn't a known [BmpCompression]. An odd
  /// compression value doesn't stop the rest of the header from being read,
  /// what to do about it is up to whoever decodes the pixels.
  pub compression: Option<BmpCompression>,

  /// The number of bytes in the raw bitmap data.
  ///
  /// Can be 0 for [BmpCompression::RgbNoCompression].
  pub image_size: u32,

  /// horizontal pixels per meter
  pub h_ppm: i32,

  /// vertical pixels per meter
  pub v_ppm: i32,

  /// Palette length.
  ///
  /// 0 indicates that the full `2**N` palette is used (where `N` is the image
  /// bit depth).
  pub colors_used: u32,

  /// The number of "important" colors, 0 means all of them.
  ///
  /// This field is generally ignored.
  pub important_colors: u32,
}
impl BmpInfoHeader {
  pub(crate) fn from_raw(raw: RawInfoHeader) -> Self {
    Self {
      header_size: raw.size.get(),
      width: raw.width.get(),
      height: raw.height.get(),
      color_planes: raw.planes.get(),
      bits_per_pixel: raw.bits_per_pixel.get(),
      compression: compression_from_code(raw.compression.get()),
      image_size: raw.image_size.get(),
      h_ppm: raw.pixels_per_meter_x.get(),
      v_ppm: raw.pixels_per_meter_y.get(),
      colors_used: raw.colors_used.get(),
      important_colors: raw.important_colors.get(),
    }
  }

  /// Length of the palette.
  ///
  /// If the listed value is zero then the palette length is implied, and this
  /// does the implied computation for you.
  #[inline]
  #[must_use]
  pub const fn palette_len(&self) -> usize {
    match self.colors_used {
      0 if self.bits_per_pixel >= 1 && self.bits_per_pixel <= 8 => 1 << self.bits_per_pixel,
      n => n as usize,
    }
  }
}
impl fmt::Display for BmpInfoHeader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Header size: {}", self.header_size)?;
    writeln!(f, "Bitmap width: {}", self.width)?;
    writeln!(f, "Bitmap height: {}", self.height)?;
    writeln!(f, "Color planes: {}", self.color_planes)?;
    writeln!(f, "Bits per pixel: {}", self.bits_per_pixel)?;
    match self.compression {
      Some(c) => writeln!(f, "Compression: {c:?}")?,
      None => writeln!(f, "Compression: unknown")?,
    }
    writeln!(f, "Bitmap size: {} bytes", self.image_size)?;
    writeln!(f, "Horizontal res: {} pixels/meter", self.h_ppm)?;
    writeln!(f, "Vertical res: {} pixels/meter", self.v_ppm)?;
    writeln!(f, "Colors used: {}", self.colors_used)?;
    writeln!(f, "Important colors: {}", self.important_colors)
  }
}

/// Halftoning algorithm of an OS/2 2.x bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Halftoning {
  /// No halftoning, the most common style.
  NoHalftoning,

  /// [wikipedia](https://en.wikipedia.org/wiki/Error_diffusion)
  ErrorDiffusion {
    /// 0 indicates that the error is not diffused.
    damping_percentage: u32,
  },

  /// PANDA: Processing Algorithm for Noncoded Document Acquisition.
  #[allow(missing_docs)]
  Panda { x: u32, y: u32 },

  #[allow(missing_docs)]
  SuperCircle { x: u32, y: u32 },

  /// Some other `rendering` value.
  Unknown(u16),
}

/// Header for OS/2 2.x images.
///
/// The first 40 bytes are laid out just like a [BmpInfoHeader], though the
/// `Bitfields` and `Jpeg` compression codes mean Huffman 1D and RLE24 here.
///
/// Corresponds to the 64 byte `OS22XBITMAPHEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BmpOs22xHeader {
  /// Everything an info header has.
  pub info: BmpInfoHeader,

  /// Units of `h_ppm` and `v_ppm`. Only 0 (pixels per meter) was ever defined.
  pub resolution_units: u16,

  /// Padding, should be 0.
  pub reserved: u16,

  /// Where the origin is. Only 0 (bottom left) was ever defined.
  pub recording: u16,

  /// Halftoning algorithm, see [halftoning](Self::halftoning).
  pub rendering: u16,

  /// First halftoning parameter.
  pub size1: u32,

  /// Second halftoning parameter.
  pub size2: u32,

  /// Color model of the color table. Only 0 (RGB) was ever defined.
  pub color_encoding: u32,

  /// Reserved for application use.
  pub identifier: u32,
}
impl BmpOs22xHeader {
  pub(crate) fn from_raw(raw: RawOs22xHeader) -> Self {
    Self {
      info: BmpInfoHeader::from_raw(raw.info),
      resolution_units: raw.units.get(),
      reserved: raw.reserved.get(),
      recording: raw.recording.get(),
      rendering: raw.rendering.get(),
      size1: raw.size1.get(),
      size2: raw.size2.get(),
      color_encoding: raw.color_encoding.get(),
      identifier: raw.identifier.get(),
    }
  }

  /// Interprets `rendering`, `size1`, and `size2` together.
  #[inline]
  #[must_use]
  pub const fn halftoning(&self) -> Halftoning {
    match self.rendering {
      0 => Halftoning::NoHalftoning,
      1 => Halftoning::ErrorDiffusion { damping_percentage: self.size1 },
      2 => Halftoning::Panda { x: self.size1, y: self.size2 },
      3 => Halftoning::SuperCircle { x: self.size1, y: self.size2 },
      other => Halftoning::Unknown(other),
    }
  }
}
impl fmt::Display for BmpOs22xHeader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.info, f)?;
    writeln!(f, "Units: {}", self.resolution_units)?;
    writeln!(f, "Recording: {}", self.recording)?;
    writeln!(f, "Rendering: {}", self.rendering)?;
    writeln!(f, "Size1: {}", self.size1)?;
    writeln!(f, "Size2: {}", self.size2)?;
    writeln!(f, "Color encoding: {}", self.color_encoding)?;
    writeln!(f, "Identifier: {}", self.identifier)
  }
}

/// InfoHeader version 2.
///
/// This is mostly undocumented, so new files are unlikely to use it.
///
/// Compared to V1, it adds RGB bit masks.
///
/// Corresponds to the 52 byte `BITMAPV2INFOHEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BmpInfoHeaderV2 {
  /// The 40 byte header this extends.
  pub info: BmpInfoHeader,

  /// Bit mask of where the red bits are located.
  pub red_mask: u32,

  /// Bit mask of where the green bits are located.
  pub green_mask: u32,

  /// Bit mask of where the blue bits are located.
  pub blue_mask: u32,
}
impl BmpInfoHeaderV2 {
  pub(crate) fn from_raw(raw: RawV2InfoHeader) -> Self {
    Self {
      info: BmpInfoHeader::from_raw(raw.info),
      red_mask: raw.r_mask.get(),
      green_mask: raw.g_mask.get(),
      blue_mask: raw.b_mask.get(),
    }
  }
}
impl fmt::Display for BmpInfoHeaderV2 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.info, f)?;
    writeln!(f, "Red mask: {:#010X}", self.red_mask)?;
    writeln!(f, "Green mask: {:#010X}", self.green_mask)?;
    writeln!(f, "Blue mask: {:#010X}", self.blue_mask)
  }
}

/// InfoHeader version 3.
///
/// Compared to V2, it adds an alpha bit mask.
///
/// Corresponds to the 56 byte `BITMAPV3INFOHEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BmpInfoHeaderV3 {
  /// The 52 byte header this extends.
  pub v2: BmpInfoHeaderV2,

  /// Bit mask of where the alpha bits are located.
  pub alpha_mask: u32,
}
impl BmpInfoHeaderV3 {
  pub(crate) fn from_raw(raw: RawV3InfoHeader) -> Self {
    Self { v2: BmpInfoHeaderV2::from_raw(raw.v2), alpha_mask: raw.a_mask.get() }
  }
}
impl fmt::Display for BmpInfoHeaderV3 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.v2, f)?;
    writeln!(f, "Alpha mask: {:#010X}", self.alpha_mask)
  }
}

/// InfoHeader version 4.
///
/// Compared to V3, it adds colorspace and gamma information.
///
/// Corresponds to the 108 byte `BITMAPV4HEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BmpInfoHeaderV4 {
  /// The 56 byte header this extends.
  pub v3: BmpInfoHeaderV3,

  /// The colorspace type.
  ///
  /// `None` indicates that the tag was an unknown value when parsing. The
  /// endpoints and gammas are still kept, but might be nonsense.
  pub colorspace_type: Option<LogicalColorspace>,

  /// Red, green, and blue endpoints. Only meaningful for
  /// [LogicalColorspace::CalibratedRgb].
  pub endpoints: CieXyzTriple,

  /// Red gamma, 16.16 fixed point.
  pub gamma_red: u32,

  /// Green gamma, 16.16 fixed point.
  pub gamma_green: u32,

  /// Blue gamma, 16.16 fixed point.
  pub gamma_blue: u32,
}
impl BmpInfoHeaderV4 {
  pub(crate) fn from_raw(raw: RawV4Header) -> Self {
    let code = raw.colorspace_type.get();
    let colorspace_type = LogicalColorspace::from_code(code);
    if colorspace_type.is_none() {
      log::warn!("unknown colorspace type {:?}", AsciiArray::<4>::from(code));
    }
    let xyz = |[x, y, z]: RawCieXyz| CieXyz {
      x: Fxpt2Dot30(x.get()),
      y: Fxpt2Dot30(y.get()),
      z: Fxpt2Dot30(z.get()),
    };
    let [red, green, blue] = raw.endpoints;
    Self {
      v3: BmpInfoHeaderV3::from_raw(raw.v3),
      colorspace_type,
      endpoints: CieXyzTriple { red: xyz(red), green: xyz(green), blue: xyz(blue) },
      gamma_red: raw.r_gamma.get(),
      gamma_green: raw.g_gamma.get(),
      gamma_blue: raw.b_gamma.get(),
    }
  }
}
impl fmt::Display for BmpInfoHeaderV4 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.v3, f)?;
    match self.colorspace_type {
      Some(cs) => writeln!(f, "Type: {cs}")?,
      None => writeln!(f, "Type: unknown")?,
    }
    fmt::Display::fmt(&self.endpoints, f)?;
    writeln!(f, "Gamma red: {}", self.gamma_red)?;
    writeln!(f, "Gamma green: {}", self.gamma_green)?;
    writeln!(f, "Gamma blue: {}", self.gamma_blue)
  }
}

/// InfoHeader version 5.
///
/// Compared to V4, it adds more color profile information.
///
/// Corresponds to the 124 byte `BITMAPV5HEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BmpInfoHeaderV5 {
  /// The 108 byte header this extends.
  pub v4: BmpInfoHeaderV4,

  /// The sRGB intent of the image.
  ///
  /// A `None` value indicates that the intent was an invalid value when
  /// parsing. A bad intent value doesn't force the entire header parse to fail.
  pub intent: Option<SrgbIntent>,

  /// The offset, in bytes, from the beginning of this header to the start of
  /// the profile data.
  ///
  /// * For [LogicalColorspace::ProfileEmbedded] this is the color profile
  ///   itself, `profile_size` bytes of it.
  /// * For [LogicalColorspace::ProfileLinked] this is the null-terminated
  ///   name of the linked profile, in the Windows CodePage-1252 character set.
  pub profile_data: u32,

  /// The size, in bytes, of the profile data.
  pub profile_size: u32,

  /// Reserved, should be 0.
  pub reserved: u32,
}
impl BmpInfoHeaderV5 {
  pub(crate) fn from_raw(raw: RawV5Header) -> Self {
    let code = raw.intent.get();
    let intent = SrgbIntent::from_code(code);
    if intent.is_none() {
      log::warn!("unknown rendering intent {code}");
    }
    Self {
      v4: BmpInfoHeaderV4::from_raw(raw.v4),
      intent,
      profile_data: raw.profile_data.get(),
      profile_size: raw.profile_size.get(),
      reserved: raw.reserved.get(),
    }
  }
}
impl fmt::Display for BmpInfoHeaderV5 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.v4, f)?;
    match self.intent {
      Some(intent) => writeln!(f, "Intent: {intent:?}")?,
      None => writeln!(f, "Intent: unknown")?,
    }
    writeln!(f, "Profile data: {}", self.profile_data)?;
    writeln!(f, "Profile size: {}", self.profile_size)?;
    writeln!(f, "Reserved: {}", self.reserved)
  }
}

/// Channel bit masks of a bitfield-style image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct ChannelMasks {
  pub red: u32,
  pub green: u32,
  pub blue: u32,
  /// 0 when there's no alpha channel.
  pub alpha: u32,
}

/// The fields every header version has, in one of two widths.
enum Base<'a> {
  Core(&'a BmpCoreHeader),
  Info(&'a BmpInfoHeader),
}

/// An enum over the various BMP info header versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum BmpInfoHeaderVariant {
  Core(BmpCoreHeader),
  Os22x(BmpOs22xHeader),
  Info(BmpInfoHeader),
  V2(BmpInfoHeaderV2),
  V3(BmpInfoHeaderV3),
  V4(BmpInfoHeaderV4),
  V5(BmpInfoHeaderV5),
}
impl BmpInfoHeaderVariant {
  /// Which header version this is.
  #[inline]
  #[must_use]
  pub const fn kind(&self) -> InfoHeaderKind {
    match self {
      Self::Core(_) => InfoHeaderKind::Core,
      Self::Os22x(_) => InfoHeaderKind::Os22x,
      Self::Info(_) => InfoHeaderKind::Info,
      Self::V2(_) => InfoHeaderKind::V2,
      Self::V3(_) => InfoHeaderKind::V3,
      Self::V4(_) => InfoHeaderKind::V4,
      Self::V5(_) => InfoHeaderKind::V5,
    }
  }

  fn base(&self) -> Base<'_> {
    match self {
      Self::Core(h) => Base::Core(h),
      Self::Os22x(h) => Base::Info(&h.info),
      Self::Info(h) => Base::Info(h),
      Self::V2(h) => Base::Info(&h.info),
      Self::V3(h) => Base::Info(&h.v2.info),
      Self::V4(h) => Base::Info(&h.v3.v2.info),
      Self::V5(h) => Base::Info(&h.v4.v3.v2.info),
    }
  }

  /// The 40 byte part shared by every header except the core header.
  #[inline]
  #[must_use]
  pub fn info(&self) -> Option<&BmpInfoHeader> {
    match self.base() {
      Base::Core(_) => None,
      Base::Info(info) => Some(info),
    }
  }

  /// The V4 part of a V4 or V5 header.
  #[inline]
  #[must_use]
  pub const fn v4(&self) -> Option<&BmpInfoHeaderV4> {
    match self {
      Self::V4(h) => Some(h),
      Self::V5(h) => Some(&h.v4),
      _ => None,
    }
  }

  /// The size the header declared for itself.
  #[inline]
  #[must_use]
  pub fn header_size(&self) -> u32 {
    match self.base() {
      Base::Core(h) => h.header_size,
      Base::Info(h) => h.header_size,
    }
  }

  /// Image pixel width.
  #[inline]
  #[must_use]
  pub fn width(&self) -> i32 {
    match self.base() {
      Base::Core(h) => i32::from(h.width),
      Base::Info(h) => h.width,
    }
  }

  /// Image pixel height.
  ///
  /// * A positive height indicates that the origin is the **bottom** left.
  /// * A negative height indicates that the image origin is the **top** left.
  #[inline]
  #[must_use]
  pub fn height(&self) -> i32 {
    match self.base() {
      Base::Core(h) => i32::from(h.height),
      Base::Info(h) => h.height,
    }
  }

  /// If rows are stored top to bottom.
  #[inline]
  #[must_use]
  pub fn is_top_down(&self) -> bool {
    self.height() < 0
  }

  /// Number of color planes, should be 1.
  #[inline]
  #[must_use]
  pub fn color_planes(&self) -> u16 {
    match self.base() {
      Base::Core(h) => h.color_planes,
      Base::Info(h) => h.color_planes,
    }
  }

  /// Bits per pixel.
  #[inline]
  #[must_use]
  pub fn bits_per_pixel(&self) -> u16 {
    match self.base() {
      Base::Core(h) => h.bits_per_pixel,
      Base::Info(h) => h.bits_per_pixel,
    }
  }

  /// Compression method.
  ///
  /// The core header has no compression field, its images are always
  /// [BmpCompression::RgbNoCompression].
  #[inline]
  #[must_use]
  pub fn compression(&self) -> Option<BmpCompression> {
    match self.base() {
      Base::Core(_) => Some(BmpCompression::RgbNoCompression),
      Base::Info(h) => h.compression,
    }
  }

  /// Gets the number of palette entries.
  ///
  /// Meaning of a 0 value for the `colors_used` field changes depending on the
  /// bit depth of the image, so this method handles that difference for you.
  #[inline]
  #[must_use]
  pub fn palette_len(&self) -> usize {
    match self.base() {
      Base::Core(h) if (1..=8).contains(&h.bits_per_pixel) => 1 << h.bits_per_pixel,
      Base::Core(_) => 0,
      Base::Info(h) => h.palette_len(),
    }
  }

  /// Bytes per color table entry: 3 for the core header, otherwise 4.
  #[inline]
  #[must_use]
  pub const fn palette_entry_size(&self) -> usize {
    match self {
      Self::Core(_) => 3,
      _ => 4,
    }
  }

  /// Channel masks stored *inside* the header (V2 and later).
  ///
  /// A 40 byte info header with bitfield compression keeps its masks right
  /// after the header instead, which this doesn't read.
  #[inline]
  #[must_use]
  pub const fn bit_masks(&self) -> Option<ChannelMasks> {
    let (v2, alpha) = match self {
      Self::V2(h) => (h, 0),
      Self::V3(h) => (&h.v2, h.alpha_mask),
      Self::V4(h) => (&h.v3.v2, h.v3.alpha_mask),
      Self::V5(h) => (&h.v4.v3.v2, h.v4.v3.alpha_mask),
      _ => return None,
    };
    Some(ChannelMasks { red: v2.red_mask, green: v2.green_mask, blue: v2.blue_mask, alpha })
  }

  /// The colorspace tag, for V4 and V5 headers.
  #[inline]
  #[must_use]
  pub const fn colorspace_type(&self) -> Option<LogicalColorspace> {
    match self.v4() {
      Some(v4) => v4.colorspace_type,
      None => None,
    }
  }

  /// The colorspace endpoints, for V4 and V5 headers.
  #[inline]
  #[must_use]
  pub const fn endpoints(&self) -> Option<&CieXyzTriple> {
    match self.v4() {
      Some(v4) => Some(&v4.endpoints),
      None => None,
    }
  }
}
impl fmt::Display for BmpInfoHeaderVariant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "DIB HEADER ({}):", self.kind().struct_name())?;
    match self {
      Self::Core(h) => fmt::Display::fmt(h, f),
      Self::Os22x(h) => fmt::Display::fmt(h, f),
      Self::Info(h) => fmt::Display::fmt(h, f),
      Self::V2(h) => fmt::Display::fmt(h, f),
      Self::V3(h) => fmt::Display::fmt(h, f),
      Self::V4(h) => fmt::Display::fmt(h, f),
      Self::V5(h) => fmt::Display::fmt(h, f),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_kind_sizes_are_unique() {
    for kind in InfoHeaderKind::ALL {
      assert_eq!(InfoHeaderKind::from_size(kind.size() as u32), Some(kind));
    }
    for size in [0_u32, 4, 13, 16, 39, 41, 100, 125, 999, u32::MAX] {
      assert_eq!(InfoHeaderKind::from_size(size), None, "{size}");
    }
  }

  #[test]
  fn test_parents_are_smaller() {
    for kind in InfoHeaderKind::ALL {
      if let Some(parent) = kind.parent() {
        assert!(parent.size() < kind.size());
      }
    }
    assert_eq!(InfoHeaderKind::V5.parent(), Some(InfoHeaderKind::V4));
    assert_eq!(InfoHeaderKind::Core.parent(), None);
  }

  #[test]
  fn test_halftoning() {
    let mut h = BmpOs22xHeader::from_raw(bytemuck::Zeroable::zeroed());
    assert_eq!(h.halftoning(), Halftoning::NoHalftoning);
    h.rendering = 2;
    h.size1 = 7;
    h.size2 = 9;
    assert_eq!(h.halftoning(), Halftoning::Panda { x: 7, y: 9 });
    h.rendering = 77;
    assert_eq!(h.halftoning(), Halftoning::Unknown(77));
  }

  #[test]
  fn test_core_accessors() {
    let core = BmpInfoHeaderVariant::Core(BmpCoreHeader {
      header_size: 12,
      width: 640,
      height: 480,
      color_planes: 1,
      bits_per_pixel: 4,
    });
    assert_eq!(core.header_size(), 12);
    assert_eq!(core.width(), 640);
    assert_eq!(core.height(), 480);
    assert!(!core.is_top_down());
    assert_eq!(core.compression(), Some(BmpCompression::RgbNoCompression));
    assert_eq!(core.palette_len(), 16);
    assert_eq!(core.palette_entry_size(), 3);
    assert_eq!(core.bit_masks(), None);
    assert!(core.info().is_none());
  }

  #[test]
  fn test_palette_len_rules() {
    let mut info = BmpInfoHeader::from_raw(bytemuck::Zeroable::zeroed());
    info.bits_per_pixel = 8;
    assert_eq!(info.palette_len(), 256);
    info.colors_used = 17;
    assert_eq!(info.palette_len(), 17);
    info.colors_used = 0;
    info.bits_per_pixel = 24;
    assert_eq!(info.palette_len(), 0);
    info.bits_per_pixel = 0;
    assert_eq!(info.palette_len(), 0);
  }
}
