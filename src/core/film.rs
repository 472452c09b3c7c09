// Copyright 2020 @TwoCookingMice

use crate::math::constants::Float;
use crate::math::spectrum::{luminance, RGBSpectrum};

use std::ops;
use std::vec::Vec;

/// Linear RGB accumulation buffer, row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    data: Vec<RGBSpectrum>,
    width: usize,
    height: usize,
}

impl ops::Index<(usize, usize)> for Film {
    type Output = RGBSpectrum;

    fn index(&self, index: (usize, usize)) -> &RGBSpectrum {
        &self.data[self.offset(index.0, index.1)]
    }
}

impl ops::IndexMut<(usize, usize)> for Film {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut RGBSpectrum {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl Film {
    pub fn new(width: usize, height: usize) -> Self {
        Self { data: vec![RGBSpectrum::zeros(); width * height], width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height,
                "pixel ({}, {}) outside {}x{} film", x, y, self.width, self.height);
        x + self.width * y
    }

    pub fn add_color(&mut self, x: usize, y: usize, delta: &RGBSpectrum) {
        self[(x, y)] += delta;
    }

    pub fn row(&self, y: usize) -> &[RGBSpectrum] {
        let start = self.offset(0, y);
        &self.data[start..start + self.width]
    }

    pub fn pixels(&self) -> &[RGBSpectrum] {
        &self.data
    }

    pub fn mean_luminance(&self) -> Float {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().map(luminance).sum::<Float>() / self.data.len() as Float
    }
}
