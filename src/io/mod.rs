// Copyright @yucwang 2026

pub mod bmp_utils;
