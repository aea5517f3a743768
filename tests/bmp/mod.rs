use bmprobe::*;
use std::{
  io::Cursor,
  path::{Path, PathBuf},
};
use walkdir::WalkDir;

const FIXTURES: &str = "tests/fixtures/";

fn fixture(name: &str) -> PathBuf {
  Path::new(FIXTURES).join(name)
}

/// A file in the temp dir that's deleted again on drop.
struct TempFile(PathBuf);
impl TempFile {
  fn new(name: &str, bytes: &[u8]) -> Self {
    let path = std::env::temp_dir().join(format!("bmprobe_{}_{name}", std::process::id()));
    std::fs::write(&path, bytes).unwrap();
    Self(path)
  }
}
impl Drop for TempFile {
  fn drop(&mut self) {
    let _ = std::fs::remove_file(&self.0);
  }
}

#[test]
fn test_every_fixture_matches_its_name() {
  // `good_*` files must parse, `bad_*` files must fail without panicking.
  let mut seen = 0;
  for entry in WalkDir::new(FIXTURES).into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() {
      continue;
    }
    let name = entry.file_name().to_string_lossy().into_owned();
    println!("{name}");
    let result = BmpDocument::open(entry.path());
    if name.starts_with("good_") {
      let doc = result.unwrap();
      let bytes = std::fs::read(entry.path()).unwrap();
      let h = doc.handoff();
      assert!((h.pixel_data_offset as usize) < bytes.len(), "{name}");
      assert!(h.palette_start + h.palette_byte_len() <= h.pixel_data_offset as usize, "{name}");
      assert_eq!(h.file_size as usize, bytes.len(), "{name}");
    } else {
      assert!(result.is_err(), "{name}");
    }
    seen += 1;
  }
  assert!(seen >= 10);
}

#[test]
fn test_core_fixture() {
  let doc = BmpDocument::open(fixture("good_core_1bpp.bmp")).unwrap();
  match doc.info_header {
    BmpInfoHeaderVariant::Core(core) => {
      assert_eq!(core.width, 8);
      assert_eq!(core.height, 2);
      assert_eq!(core.bits_per_pixel, 1);
    }
    other => panic!("wrong variant: {other:?}"),
  }
  let h = doc.handoff();
  assert_eq!(h.palette_start, 26);
  assert_eq!(h.palette_len, 2);
  assert_eq!(h.palette_entry_size, 3);
  assert_eq!(h.pixel_data_offset, 32);
}

#[test]
fn test_info_fixtures() {
  let doc = BmpDocument::open(fixture("good_info_24bpp.bmp")).unwrap();
  assert_eq!(doc.info_header.kind(), InfoHeaderKind::Info);
  assert_eq!(doc.info_header.bits_per_pixel(), 24);
  assert_eq!(doc.handoff().palette_len, 0);
  let info = doc.info_header.info().unwrap();
  assert_eq!(info.h_ppm, 2835);
  assert_eq!(info.image_size, 16);

  let doc = BmpDocument::open(fixture("good_info_8bpp_topdown.bmp")).unwrap();
  let h = doc.handoff();
  assert!(h.top_down);
  assert_eq!(h.height, -1);
  assert_eq!(h.palette_len, 4);
  assert_eq!(h.palette_start + h.palette_byte_len(), h.pixel_data_offset as usize);

  let doc = BmpDocument::open(fixture("good_info_bitfields.bmp")).unwrap();
  let h = doc.handoff();
  assert_eq!(h.compression, Some(BmpCompression::Bitfields));
  assert_eq!(h.palette_start, 66);
  assert_eq!(h.pixel_data_offset, 66);
  assert_eq!(h.bit_masks, None);
}

#[test]
fn test_extended_fixtures() {
  let doc = BmpDocument::open(fixture("good_v3_argb.bmp")).unwrap();
  assert_eq!(doc.info_header.kind(), InfoHeaderKind::V3);
  let masks = doc.info_header.bit_masks().unwrap();
  assert_eq!(masks, ChannelMasks { red: 0x00FF0000, green: 0xFF00, blue: 0xFF, alpha: 0xFF000000 });

  let doc = BmpDocument::open(fixture("good_os22x_24bpp.bmp")).unwrap();
  match doc.info_header {
    BmpInfoHeaderVariant::Os22x(os2) => {
      assert_eq!(os2.halftoning(), Halftoning::ErrorDiffusion { damping_percentage: 30 });
    }
    other => panic!("wrong variant: {other:?}"),
  }

  let doc = BmpDocument::open(fixture("good_v4_srgb.bmp")).unwrap();
  assert_eq!(doc.info_header.colorspace_type(), Some(LogicalColorspace::Srgb));

  let doc = BmpDocument::open(fixture("good_v5_calibrated.bmp")).unwrap();
  assert_eq!(doc.info_header.colorspace_type(), Some(LogicalColorspace::CalibratedRgb));
  let endpoints = doc.info_header.endpoints().unwrap();
  assert_eq!(endpoints.red.to_f64(), [1.0, 0.5, 0.0]);
  assert_eq!(endpoints.green.to_f64(), [0.0, 1.0, 0.0]);
  assert_eq!(endpoints.blue.z.to_f64(), 1.0);
  assert!(doc.info_header.is_top_down());
  assert!(doc.to_string().contains("Intent: Perceptual"));
}

#[test]
fn test_bad_fixtures_fail_the_right_way() {
  let kind = |name: &str| BmpDocument::open(fixture(name)).unwrap_err().kind();
  assert_eq!(kind("bad_magic.bmp"), BmpErrorKind::InvalidIdentifier);
  assert_eq!(kind("bad_size_16.bmp"), BmpErrorKind::UnsupportedHeaderLength);
  assert_eq!(kind("bad_truncated_info.bmp"), BmpErrorKind::Truncated);
  assert_eq!(kind("bad_short.bmp"), BmpErrorKind::Truncated);
  assert_eq!(kind("bad_empty.bmp"), BmpErrorKind::Truncated);

  match BmpDocument::open(fixture("bad_truncated_info.bmp")).unwrap_err() {
    BmpError::Truncated { stage, expected, available } => {
      assert_eq!(stage, ParseStage::InfoHeader);
      assert_eq!(expected, 40);
      assert_eq!(available, 20);
    }
    other => panic!("unexpected error: {other:?}"),
  }
}

#[test]
fn test_open_missing_path() {
  let path = std::env::temp_dir().join("bmprobe_this_file_does_not_exist.bmp");
  match BmpDocument::open(&path).unwrap_err() {
    BmpError::NotFound { path: p } => assert_eq!(p, path),
    other => panic!("unexpected error: {other:?}"),
  }
}

#[test]
fn test_open_directory() {
  let err = BmpDocument::open(FIXTURES).unwrap_err();
  // Some platforms refuse to open a directory, others fail on the first read.
  assert!(
    matches!(err.kind(), BmpErrorKind::OpenFailure | BmpErrorKind::IoFailure),
    "{err:?}"
  );
}

#[test]
fn test_open_temp_files() {
  let mut bytes = Vec::new();
  bytes.extend_from_slice(&[0x42, 0x4D, 0x36, 0, 0, 0, 0, 0, 0, 0, 0x36, 0, 0, 0]);
  bytes.extend_from_slice(&40_u32.to_le_bytes());
  bytes.extend_from_slice(&1_i32.to_le_bytes());
  bytes.extend_from_slice(&1_i32.to_le_bytes());
  bytes.extend_from_slice(&1_u16.to_le_bytes());
  bytes.extend_from_slice(&24_u16.to_le_bytes());
  bytes.extend_from_slice(&[0; 24]);
  let file = TempFile::new("smallest.bmp", &bytes);
  let doc = BmpDocument::open(&file.0).unwrap();
  assert_eq!(doc.file_header.file_size, 54);
  assert_eq!(doc.file_header.pixel_data_offset, 54);
  assert_eq!(doc.info_header.width(), 1);

  // only the file header
  let file = TempFile::new("headless.bmp", &bytes[..14]);
  let err = BmpDocument::open(&file.0).unwrap_err();
  assert!(matches!(err, BmpError::Truncated { stage: ParseStage::InfoHeaderProbe, .. }));
}

#[test]
fn test_reader_and_slice_forms_agree_on_fixtures() {
  for entry in WalkDir::new(FIXTURES).into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() {
      continue;
    }
    let bytes = std::fs::read(entry.path()).unwrap();
    let from_reader = BmpDocument::from_reader(&mut Cursor::new(&bytes));
    let from_bytes = BmpDocument::from_bytes(&bytes);
    match (from_reader, from_bytes) {
      (Ok(a), Ok((b, _))) => assert_eq!(a, b),
      (Err(a), Err(b)) => assert_eq!(a.kind(), b.kind()),
      (a, b) => panic!("{}: {a:?} vs {b:?}", entry.path().display()),
    }
  }
}

#[test]
fn test_random_bytes_do_not_panic() {
  for len in [0, 1, 4, 13, 14, 15, 17, 18, 26, 54, 78, 122, 138, 200] {
    for _ in 0..20 {
      let mut bytes = crate::rand_bytes(len);
      let _ = BmpDocument::from_bytes(&bytes);
      let _ = BmpDocument::from_reader(&mut Cursor::new(&bytes));
      // with a real tag the info header gets looked at too
      if len >= 2 {
        bytes[..2].copy_from_slice(b"BM");
      }
      let _ = BmpDocument::from_bytes(&bytes);
      let _ = BmpDocument::from_reader(&mut Cursor::new(&bytes));
      let _ = BmpInfoHeaderVariant::read_from_unseekable(&mut &bytes[..]);
    }
  }
}

#[test]
fn test_random_headers_of_every_size() {
  for kind in InfoHeaderKind::ALL {
    let mut bytes = crate::rand_bytes(kind.size());
    bytes[..4].copy_from_slice(&(kind.size() as u32).to_le_bytes());
    let (h, rest) = BmpInfoHeaderVariant::try_from_bytes(&bytes).unwrap();
    assert!(rest.is_empty());
    assert_eq!(h.kind(), kind);
    // every field is printable, whatever the values
    assert!(h.to_string().starts_with("DIB HEADER"));
  }
}
