// Copyright @yucwang 2026

use crate::core::bound::BoundName;
use crate::core::property::{ PropertyError, PropertyStore };
use crate::math::constants::Float;
use crate::math::geodesy::{ deg_to_rad, geocentric_height };

/// Pure transform applied to a raw bound value when it is read.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Convertor {
    /// Degrees to radians.
    Angular,
    /// Surface-relative height to geocentric height.
    GeocentricHeight { polar_radius: Float },
}

impl Convertor {
    pub fn apply(&self, raw: Float) -> Float {
        match *self {
            Convertor::Angular => deg_to_rad(raw),
            Convertor::GeocentricHeight { polar_radius } => geocentric_height(raw, polar_radius),
        }
    }
}

/// Angular convertors on the longitude/latitude bounds and geocentric height
/// convertors on the height bounds.
pub fn install_geographic_convertors(store: &mut PropertyStore,
                                     polar_radius: Float) -> Result<(), PropertyError> {
    for name in BoundName::ANGULAR.iter() {
        store.register_convertor(*name, Convertor::Angular)?;
    }
    for name in BoundName::HEIGHT.iter() {
        store.register_convertor(*name, Convertor::GeocentricHeight { polar_radius })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::{ EPSILON, PI, RAD_TO_DEG, WGS_84_RADIUS_POLAR };

    #[test]
    fn test_angular_convertor() {
        for v in [-720.0, -90.0, 0.0, 0.25, 33.3, 180.0].iter() {
            let rad = Convertor::Angular.apply(*v);
            assert_eq!(rad, *v * (PI / 180.0));
            assert!((rad * RAD_TO_DEG - *v).abs() < EPSILON * v.abs().max(1.0));
        }
    }

    #[test]
    fn test_height_convertor() {
        let r = WGS_84_RADIUS_POLAR as Float;
        let c = Convertor::GeocentricHeight { polar_radius: r };
        for v in [-100.0, 0.0, 1000.0, 8848.0].iter() {
            assert_eq!(c.apply(*v), *v + r);
            assert_eq!(c.apply(*v) - r, *v);
        }
    }

    #[test]
    fn test_install_geographic_convertors() {
        let mut store = PropertyStore::new();
        install_geographic_convertors(&mut store, 10.0).unwrap();

        for name in BoundName::ANGULAR.iter() {
            assert_eq!(store.property(*name).convertor(), Some(Convertor::Angular));
        }
        for name in BoundName::HEIGHT.iter() {
            assert_eq!(store.property(*name).convertor(),
                       Some(Convertor::GeocentricHeight { polar_radius: 10.0 }));
        }

        match install_geographic_convertors(&mut store, 10.0) {
            Err(PropertyError::ConvertorAlreadySet(BoundName::LongitudeMin)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
