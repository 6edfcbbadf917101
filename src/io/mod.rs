// Copyright @yucwang 2026

pub mod bounds_loader;
