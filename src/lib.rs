#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! A crate for reading the header region of BMP files.
//!
//! A BMP file starts with a 14 byte [BmpFileHeader], followed by one of seven
//! info header versions. The version is picked by the size the info header
//! declares for itself, and each version is a strict extension of a smaller
//! one. [BmpDocument] reads both, and can then describe where the color table
//! and pixel data are with a [PixelDataHandoff]. Decoding the pixels is left to
//! someone else.
//!
//! ```no_run
//! # fn main() -> bmprobe::BmpResult<()> {
//! let doc = bmprobe::BmpDocument::open("image.bmp")?;
//! println!("{}x{}", doc.info_header.width(), doc.info_header.height());
//! let handoff = doc.handoff();
//! println!("pixels start at byte {}", handoff.pixel_data_offset);
//! # Ok(())
//! # }
//! ```
//!
//! Nothing here installs a logger. Oddities that don't stop the parse (unknown
//! compression codes, non-zero reserved fields, and the like) are reported with
//! the `log` crate at the `warn` level.

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod ascii_array;
pub use ascii_array::*;

pub mod colorspace;
pub use colorspace::*;

pub mod compression;
pub use compression::*;

pub mod document;
pub use document::*;

pub mod error;
pub use error::*;

pub mod file_header;
pub use file_header::*;

pub mod info_header;
pub use info_header::*;

pub mod resolver;
pub use resolver::*;

mod raw_headers;

mod util;
