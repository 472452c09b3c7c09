// Copyright @yucwang 2026

pub mod random;
pub mod stratified;
