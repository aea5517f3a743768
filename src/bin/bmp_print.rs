//! Prints the header region of each BMP file named on the command line.
//!
//! Set `RUST_LOG=warn` (or lower) to also see the oddities the parser
//! tolerates.

use bmprobe::BmpDocument;
use std::process::ExitCode;

fn main() -> ExitCode {
  env_logger::init();

  let paths: Vec<String> = std::env::args().skip(1).collect();
  if paths.is_empty() {
    println!("run this with one or more filenames to print their bmp headers.");
    return ExitCode::FAILURE;
  }

  let mut failures = 0;
  for path in &paths {
    println!("== {path}");
    match BmpDocument::open(path) {
      Ok(doc) => {
        print!("{doc}");
        println!("{:?}", doc.handoff());
      }
      Err(e) => {
        log::debug!("{e:?}");
        println!("error: {e}");
        failures += 1;
      }
    }
  }

  if failures == 0 {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  }
}
