//! The on-disk header records, byte for byte.
//!
//! Every field is a `pack1` byte-array integer, so every struct has an
//! alignment of 1 and `#[repr(C)]` can't insert padding. Deriving `Pod` double
//! checks that at compile time. Each richer info header embeds the record it
//! extends as its first field, which is exactly how the versions relate on
//! disk.
//!
//! These stay crate-private, users get the typed headers instead.

use core::mem::size_of;
use pack1::*;

pub(crate) const FILE_HEADER_LEN: usize = 14;
pub(crate) const CORE_HEADER_LEN: usize = 12;
pub(crate) const OS22X_HEADER_LEN: usize = 64;
pub(crate) const INFO_HEADER_LEN: usize = 40;
pub(crate) const V2_HEADER_LEN: usize = 52;
pub(crate) const V3_HEADER_LEN: usize = 56;
pub(crate) const V4_HEADER_LEN: usize = 108;
pub(crate) const V5_HEADER_LEN: usize = 124;

/// The longest info header, used to size read buffers.
pub(crate) const MAX_INFO_HEADER_LEN: usize = V5_HEADER_LEN;

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct RawFileHeader {
  pub identifier: U16LE,
  pub file_size: U32LE,
  pub reserved1: U16LE,
  pub reserved2: U16LE,
  pub pixel_data_offset: U32LE,
}

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct RawCoreHeader {
  pub size: U32LE,
  pub width: U16LE,
  pub height: U16LE,
  pub planes: U16LE,
  pub bits_per_pixel: U16LE,
}

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct RawInfoHeader {
  pub size: U32LE,
  pub width: I32LE,
  pub height: I32LE,
  pub planes: U16LE,
  pub bits_per_pixel: U16LE,
  pub compression: U32LE,
  pub image_size: U32LE,
  pub pixels_per_meter_x: I32LE,
  pub pixels_per_meter_y: I32LE,
  pub colors_used: U32LE,
  pub important_colors: U32LE,
}

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct RawOs22xHeader {
  pub info: RawInfoHeader,
  pub units: U16LE,
  pub reserved: U16LE,
  pub recording: U16LE,
  pub rendering: U16LE,
  pub size1: U32LE,
  pub size2: U32LE,
  pub color_encoding: U32LE,
  pub identifier: U32LE,
}

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct RawV2InfoHeader {
  pub info: RawInfoHeader,
  pub r_mask: U32LE,
  pub g_mask: U32LE,
  pub b_mask: U32LE,
}

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct RawV3InfoHeader {
  pub v2: RawV2InfoHeader,
  pub a_mask: U32LE,
}

/// One CIE XYZ coordinate triple, as 2.30 fixed point.
pub(crate) type RawCieXyz = [I32LE; 3];

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct RawV4Header {
  pub v3: RawV3InfoHeader,
  pub colorspace_type: U32LE,
  pub endpoints: [RawCieXyz; 3],
  pub r_gamma: U32LE,
  pub g_gamma: U32LE,
  pub b_gamma: U32LE,
}

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct RawV5Header {
  pub v4: RawV4Header,
  pub intent: U32LE,
  pub profile_data: U32LE,
  pub profile_size: U32LE,
  pub reserved: U32LE,
}

const _: () = assert!(size_of::<RawFileHeader>() == FILE_HEADER_LEN);
const _: () = assert!(size_of::<RawCoreHeader>() == CORE_HEADER_LEN);
const _: () = assert!(size_of::<RawOs22xHeader>() == OS22X_HEADER_LEN);
const _: () = assert!(size_of::<RawInfoHeader>() == INFO_HEADER_LEN);
const _: () = assert!(size_of::<RawV2InfoHeader>() == V2_HEADER_LEN);
const _: () = assert!(size_of::<RawV3InfoHeader>() == V3_HEADER_LEN);
const _: () = assert!(size_of::<RawV4Header>() == V4_HEADER_LEN);
const _: () = assert!(size_of::<RawV5Header>() == V5_HEADER_LEN);
