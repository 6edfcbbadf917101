// Copyright @yucwang 2026

use crate::math::constants::{ Float, Matrix3f, Vector3f, EPSILON };

/// Orthonormal frame. For a geographic frame `x` is east, `y` is north and
/// `z` is up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub x: Vector3f,
    pub y: Vector3f,
    pub z: Vector3f
}

pub fn world_up() -> Vector3f {
    Vector3f::new(0.0, 0.0, 1.0)
}

/// True when `up` is too close to the world axis for `world_up() x up` to be
/// normalized.
pub fn is_pole_aligned(up: &Vector3f) -> bool {
    world_up().cross(up).norm() < EPSILON
}

impl Frame {
    pub fn new(new_x: Vector3f, new_y: Vector3f, new_z: Vector3f) -> Frame {
        Frame {
            x: new_x,
            y: new_y,
            z: new_z
        }
    }

    /// Builds the east/north/up frame whose up axis is `up` (unit length).
    ///
    /// East is `world_up() x up`. At the poles that cross product vanishes,
    /// so east becomes the limit of the same formula along longitude `lon`,
    /// `(-sin lon, cos lon, 0)`, projected onto the tangent plane.
    pub fn from_up_direction(up: Vector3f, lon: Float) -> Frame {
        let east = if is_pole_aligned(&up) {
            let (sin_lon, cos_lon) = lon.sin_cos();
            let t = Vector3f::new(-sin_lon, cos_lon, 0.0);
            (t - up * t.dot(&up)).normalize()
        } else {
            world_up().cross(&up).normalize()
        };
        let north = up.cross(&east);

        Frame::new(east, north, up)
    }

    /// Rows are `[x; y; z]`, so the matrix maps world vectors into this frame.
    pub fn to_matrix(&self) -> Matrix3f {
        Matrix3f::from_rows(&[ self.x.transpose(), self.y.transpose(), self.z.transpose() ])
    }

    pub fn to_local(&self, v: Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.x), v.dot(&self.y), v.dot(&self.z))
    }

    pub fn from_local(&self, v: Vector3f) -> Vector3f {
        v.x * self.x + v.y * self.y + v.z * self.z
    }
}
