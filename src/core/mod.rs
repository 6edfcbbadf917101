// Copyright @yucwang 2026

pub mod bound;
pub mod convertor;
pub mod geographics;
pub mod orientation;
pub mod property;
pub mod signal;
pub mod uniform;
