// Copyright 2026 the bezier-offset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print an SVG document showing a path and a family of its offsets.
//!
//! Usage: `cargo run --example offset_path -- ["M ... path"] [step]`

use std::env;
use std::process::ExitCode;

use bezier_offset::{Error, SvgPath};

const DEFAULT_PATH: &str = "M 100 100 C 150 75 300 50 400 200 S 550 400 700 300";

fn run(text: &str, step: f64) -> Result<(), Error> {
    let path = SvgPath::parse(text)?;
    println!("<svg width='800' height='600' xmlns='http://www.w3.org/2000/svg'>");
    println!("  <path d='{}' stroke='#000' fill='none' />", path.to_svg());
    for curve in path.subpaths() {
        for i in 1..=10 {
            let d = i as f64 * step;
            for d in [d, -d] {
                if let Some(offset) = curve.offset(d)? {
                    println!(
                        "  <path d='{}' stroke='#008' fill='none' />",
                        offset.to_svg(false)
                    );
                }
            }
        }
    }
    println!("</svg>");
    Ok(())
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let text = args.next().unwrap_or_else(|| DEFAULT_PATH.to_string());
    let step = args.next().and_then(|s| s.parse().ok()).unwrap_or(8.0);
    match run(&text, step) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
