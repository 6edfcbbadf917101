// Copyright @yucwang 2026

use std::fmt;
use std::str::FromStr;

use crate::core::property::PropertyError;

/// One edge of the geographic box.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoundName {
    LongitudeMin,
    LongitudeMax,
    LatitudeMin,
    LatitudeMax,
    HeightMin,
    HeightMax,
}

impl BoundName {
    pub const ALL: [BoundName; 6] = [
        BoundName::LongitudeMin,
        BoundName::LongitudeMax,
        BoundName::LatitudeMin,
        BoundName::LatitudeMax,
        BoundName::HeightMin,
        BoundName::HeightMax,
    ];

    pub const ANGULAR: [BoundName; 4] = [
        BoundName::LongitudeMin,
        BoundName::LongitudeMax,
        BoundName::LatitudeMin,
        BoundName::LatitudeMax,
    ];

    pub const HEIGHT: [BoundName; 2] = [BoundName::HeightMin, BoundName::HeightMax];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoundName::LongitudeMin => "longitudeMin",
            BoundName::LongitudeMax => "longitudeMax",
            BoundName::LatitudeMin => "latitudeMin",
            BoundName::LatitudeMax => "latitudeMax",
            BoundName::HeightMin => "heightMin",
            BoundName::HeightMax => "heightMax",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Longitude and latitude bounds feed the orientation; heights do not.
    pub fn is_angular(&self) -> bool {
        !matches!(self, BoundName::HeightMin | BoundName::HeightMax)
    }
}

impl fmt::Display for BoundName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundName {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "longitudeMin" | "longtitudeMin" => Ok(BoundName::LongitudeMin),
            "longitudeMax" | "longtitudeMax" => Ok(BoundName::LongitudeMax),
            "latitudeMin" => Ok(BoundName::LatitudeMin),
            "latitudeMax" => Ok(BoundName::LatitudeMax),
            "heightMin" => Ok(BoundName::HeightMin),
            "heightMax" => Ok(BoundName::HeightMax),
            _ => Err(PropertyError::UnknownProperty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoundName;
    use crate::core::property::PropertyError;

    #[test]
    fn test_bound_name_round_trip() {
        for (i, name) in BoundName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
            assert_eq!(name.as_str().parse::<BoundName>().ok(), Some(*name));
        }
    }

    #[test]
    fn test_bound_name_aliases_and_unknown() {
        assert_eq!("longtitudeMax".parse::<BoundName>().ok(), Some(BoundName::LongitudeMax));
        match "altitudeMin".parse::<BoundName>() {
            Err(PropertyError::UnknownProperty(name)) => assert_eq!(name, "altitudeMin"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bound_name_kinds() {
        assert!(BoundName::ANGULAR.iter().all(|n| n.is_angular()));
        assert!(BoundName::HEIGHT.iter().all(|n| !n.is_angular()));
    }
}
