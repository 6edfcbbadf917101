// Copyright @yucwang 2026

use super::constants::{ Float, Vector3f, DEG_TO_RAD, RAD_TO_DEG };

pub fn deg_to_rad(deg: Float) -> Float {
    deg * DEG_TO_RAD
}

pub fn rad_to_deg(rad: Float) -> Float {
    rad * RAD_TO_DEG
}

/// Surface-relative height to distance from the ellipsoid center.
pub fn geocentric_height(surface_height: Float, polar_radius: Float) -> Float {
    surface_height + polar_radius
}

/// Unit direction from the ellipsoid center through (lon, lat), both in radians.
/// x points at (0, 0), z at the north pole.
pub fn direction_from_lon_lat(lon: Float, lat: Float) -> Vector3f {
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    Vector3f::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::{ EPSILON, PI, WGS_84_RADIUS_POLAR };

    #[test]
    fn test_angle_conversion() {
        for deg in [-180.0, -90.0, -12.5, 0.0, 45.0, 90.0, 179.9].iter() {
            let rad = deg_to_rad(*deg);
            assert_eq!(rad, *deg * (PI / 180.0));
            assert!((rad_to_deg(rad) - *deg).abs() < EPSILON);
        }
    }

    #[test]
    fn test_geocentric_height() {
        let r = WGS_84_RADIUS_POLAR as Float;
        let h = geocentric_height(-100.0, r);
        assert_eq!(h, -100.0 + r);
        assert_eq!(h - r, -100.0);
    }

    #[test]
    fn test_direction_from_lon_lat() {
        let d = direction_from_lon_lat(0.0, 0.0);
        assert!((d - Vector3f::new(1.0, 0.0, 0.0)).norm() < EPSILON);

        let d = direction_from_lon_lat(PI / 2.0, 0.0);
        assert!((d - Vector3f::new(0.0, 1.0, 0.0)).norm() < EPSILON);

        let d = direction_from_lon_lat(1.3, PI / 2.0);
        assert!((d - Vector3f::new(0.0, 0.0, 1.0)).norm() < EPSILON);

        let d = direction_from_lon_lat(-2.1, 0.7);
        assert!((d.norm() - 1.0).abs() < EPSILON);
    }
}
