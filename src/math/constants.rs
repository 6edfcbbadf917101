// Copyright @yucwang 2026

use nalgebra as na;

pub type Float = f32;

pub type Vector3f = na::Vector3<Float>;
pub type Matrix3f = na::Matrix3<Float>;

pub const EPSILON: Float = 1e-4;
pub const PI: Float = std::f32::consts::PI;
pub const DEG_TO_RAD: Float = PI / 180.0;
pub const RAD_TO_DEG: Float = 180.0 / PI;

// WGS-84 reference ellipsoid, metres.
pub const WGS_84_RADIUS_EQUATOR: f64 = 6378137.0;
pub const WGS_84_RADIUS_POLAR: f64 = 6356752.3142;
