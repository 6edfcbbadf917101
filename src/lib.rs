// Copyright @yucwang 2026

pub extern crate nalgebra as na;

pub mod core;
pub mod io;
pub mod math;
