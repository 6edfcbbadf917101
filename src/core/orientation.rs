// Copyright @yucwang 2026

use crate::core::bound::BoundName;
use crate::core::property::PropertyStore;
use crate::math::constants::{ Float, Matrix3f };
use crate::math::frame::{ is_pole_aligned, Frame };
use crate::math::geodesy::direction_from_lon_lat;

/// Converted bounds: angles in radians, heights from the ellipsoid center.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct GeoBounds {
    pub lon_min: Float,
    pub lon_max: Float,
    pub lat_min: Float,
    pub lat_max: Float,
    pub height_min: Float,
    pub height_max: Float,
}

impl GeoBounds {
    pub fn from_store(store: &PropertyStore) -> Self {
        Self {
            lon_min: store.get_float(BoundName::LongitudeMin),
            lon_max: store.get_float(BoundName::LongitudeMax),
            lat_min: store.get_float(BoundName::LatitudeMin),
            lat_max: store.get_float(BoundName::LatitudeMax),
            height_min: store.get_float(BoundName::HeightMin),
            height_max: store.get_float(BoundName::HeightMax),
        }
    }

    /// Angular midpoint as (lon, lat).
    pub fn center(&self) -> (Float, Float) {
        (0.5 * (self.lon_min + self.lon_max), 0.5 * (self.lat_min + self.lat_max))
    }
}

/// Rotation whose rows are east, north and up at the center of `bounds`.
/// Heights are ignored.
pub fn solve_orientation(bounds: &GeoBounds) -> Matrix3f {
    let (lon, lat) = bounds.center();
    let dir = direction_from_lon_lat(lon, lat);
    if is_pole_aligned(&dir) {
        log::warn!("Geographic center ({}, {}) is on a pole, east axis follows longitude.", lon, lat);
    }

    let frame = Frame::from_up_direction(dir, lon);
    log::debug!("Orientation at lon = {}, lat = {}: up = {:?}.", lon, lat, frame.z);

    frame.to_matrix()
}
