/* Copyright 2020 @TwoCookingMice */

use crate::core::film::Film;
use crate::math::constants::Float;

use image::codecs::bmp::BmpEncoder;
use image::{ColorType, ImageError, Rgb, RgbImage};

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};

const INV_GAMMA: Float = 1.0 / 2.2;

#[derive(Debug)]
pub enum ImageWriteError {
    Io(std::io::Error),
    Encode(ImageError),
}

impl From<std::io::Error> for ImageWriteError {
    fn from(err: std::io::Error) -> Self {
        ImageWriteError::Io(err)
    }
}

impl From<ImageError> for ImageWriteError {
    fn from(err: ImageError) -> Self {
        ImageWriteError::Encode(err)
    }
}

impl fmt::Display for ImageWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageWriteError::Io(err) => write!(f, "i/o error: {}", err),
            ImageWriteError::Encode(err) => write!(f, "encode error: {}", err),
        }
    }
}

impl std::error::Error for ImageWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageWriteError::Io(err) => Some(err),
            ImageWriteError::Encode(err) => Some(err),
        }
    }
}

// Clamp, gamma 1/2.2, scale to 255 and round half up.
pub fn gamma_encode(x: Float) -> u8 {
    (x.max(0.0).min(1.0).powf(INV_GAMMA) * 255.0 + 0.5) as u8
}

pub fn to_rgb_image(film: &Film) -> RgbImage {
    RgbImage::from_fn(film.width() as u32, film.height() as u32, |x, y| {
        let c = film[(x as usize, y as usize)];
        Rgb([gamma_encode(c.x), gamma_encode(c.y), gamma_encode(c.z)])
    })
}

/// 24-bit BMP: rows stored bottom-up, BGR, each row padded to 4 bytes.
pub fn encode_bmp<W: Write>(film: &Film, writer: &mut W) -> Result<(), ImageWriteError> {
    let image = to_rgb_image(film);
    let mut encoder = BmpEncoder::new(writer);
    encoder.encode(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)?;
    Ok(())
}

pub fn write_bmp_to_file(film: &Film, file_path: &str) -> Result<(), ImageWriteError> {
    log::info!("Starting writing BMP image: {}.", file_path);

    let mut writer = BufWriter::new(File::create(file_path)?);
    encode_bmp(film, &mut writer)?;
    writer.flush()?;

    log::info!("BMP written to: {}.", file_path);
    Ok(())
}
