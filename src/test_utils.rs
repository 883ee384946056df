// SPDX-License-Identifier: MPL-2.0
//! Shared test fixtures.
//!
//! In-memory PNG payloads for asset and session tests, so no binary files
//! live in the repository.

use crate::media::ImageAsset;
use image_rs::{Rgba, RgbaImage};
use std::io::Cursor;

/// Encodes a solid-color PNG of the given dimensions.
///
/// # Panics
///
/// Panics if PNG encoding fails, which cannot happen for valid dimensions.
pub fn sample_png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .expect("failed to encode sample png");
    bytes
}

/// Builds a decodable [`ImageAsset`] carrying the given file name.
///
/// # Panics
///
/// Panics if the generated PNG does not decode, which cannot happen.
pub fn sample_asset(width: u32, height: u32, file_name: Option<&str>) -> ImageAsset {
    ImageAsset::from_encoded(
        sample_png_bytes(width, height),
        "image/png",
        file_name.map(str::to_string),
    )
    .expect("sample png should decode")
}
