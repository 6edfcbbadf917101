// Copyright @yucwang 2026

pub mod constants;
pub mod frame;
pub mod geodesy;
