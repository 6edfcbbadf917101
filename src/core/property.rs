// Copyright @yucwang 2026

use std::fmt;

use crate::core::bound::BoundName;
use crate::core::convertor::Convertor;
use crate::math::constants::Float;

#[derive(Debug)]
pub enum PropertyError {
    UnknownProperty(String),
    ConvertorAlreadySet(BoundName),
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::UnknownProperty(name) => write!(f, "unknown property: {}", name),
            PropertyError::ConvertorAlreadySet(name) => write!(f, "convertor already set on: {}", name),
        }
    }
}

impl std::error::Error for PropertyError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundProperty {
    name: BoundName,
    raw: Float,
    convertor: Option<Convertor>,
}

impl BoundProperty {
    pub fn new(name: BoundName, raw: Float) -> Self {
        Self { name, raw, convertor: None }
    }

    pub fn name(&self) -> BoundName {
        self.name
    }

    pub fn raw(&self) -> Float {
        self.raw
    }

    pub fn convertor(&self) -> Option<Convertor> {
        self.convertor
    }

    /// The raw value passed through the convertor once, or unchanged if none
    /// is installed.
    pub fn converted(&self) -> Float {
        match self.convertor {
            Some(c) => c.apply(self.raw),
            None => self.raw,
        }
    }
}

type ChangeCallback = Box<dyn FnMut(BoundName, Float)>;

/// The six geographic bounds, addressed by name. Raw values are stored as
/// entered and converted on read.
pub struct PropertyStore {
    properties: [BoundProperty; 6],
    subscribers: Vec<(BoundName, ChangeCallback)>,
}

impl Default for PropertyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyStore")
            .field("properties", &self.properties)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl PropertyStore {
    pub fn new() -> Self {
        let mut properties = [BoundProperty::new(BoundName::LongitudeMin, 0.0); 6];
        for name in BoundName::ALL.iter() {
            properties[name.index()] = BoundProperty::new(*name, 0.0);
        }
        Self { properties, subscribers: Vec::new() }
    }

    pub fn with_values(values: &[(BoundName, Float)]) -> Self {
        let mut store = Self::new();
        for (name, raw) in values {
            store.properties[name.index()].raw = *raw;
        }
        store
    }

    pub fn property(&self, name: BoundName) -> &BoundProperty {
        &self.properties[name.index()]
    }

    pub fn lookup(&self, name: &str) -> Result<&BoundProperty, PropertyError> {
        let name: BoundName = name.parse()?;
        Ok(self.property(name))
    }

    pub fn properties(&self) -> impl Iterator<Item = &BoundProperty> {
        self.properties.iter()
    }

    /// Installs `convertor` on `name`. A bound takes exactly one convertor.
    pub fn register_convertor(&mut self, name: BoundName, convertor: Convertor) -> Result<(), PropertyError> {
        let prop = &mut self.properties[name.index()];
        if prop.convertor.is_some() {
            return Err(PropertyError::ConvertorAlreadySet(name));
        }
        prop.convertor = Some(convertor);
        Ok(())
    }

    pub fn register_convertor_by_name(&mut self, name: &str, convertor: Convertor) -> Result<(), PropertyError> {
        let name: BoundName = name.parse()?;
        self.register_convertor(name, convertor)
    }

    pub fn get_raw(&self, name: BoundName) -> Float {
        self.property(name).raw()
    }

    pub fn get_float(&self, name: BoundName) -> Float {
        self.property(name).converted()
    }

    pub fn get_float_by_name(&self, name: &str) -> Result<Float, PropertyError> {
        Ok(self.lookup(name)?.converted())
    }

    /// Stores a new raw value and notifies the subscribers of `name`.
    /// Returns false, without notifying, when the value is unchanged.
    pub fn set(&mut self, name: BoundName, raw: Float) -> bool {
        let prop = &mut self.properties[name.index()];
        if prop.raw == raw {
            return false;
        }
        log::trace!("{}: {} -> {}", name, prop.raw, raw);
        prop.raw = raw;

        for (subscribed, callback) in self.subscribers.iter_mut() {
            if *subscribed == name {
                callback(name, raw);
            }
        }
        true
    }

    pub fn subscribe<F>(&mut self, name: BoundName, callback: F)
        where F: FnMut(BoundName, Float) + 'static {
        self.subscribers.push((name, Box::new(callback)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_store_read_without_convertor() {
        let store = PropertyStore::with_values(&[(BoundName::LatitudeMax, 12.5)]);
        assert_eq!(store.get_raw(BoundName::LatitudeMax), 12.5);
        assert_eq!(store.get_float(BoundName::LatitudeMax), 12.5);
        assert_eq!(store.get_float(BoundName::HeightMin), 0.0);
        assert_eq!(store.properties().count(), 6);
    }

    #[test]
    fn test_store_read_with_convertor() {
        let mut store = PropertyStore::with_values(&[(BoundName::HeightMin, -100.0)]);
        store.register_convertor_by_name("heightMin",
                                         Convertor::GeocentricHeight { polar_radius: 1000.0 }).unwrap();
        assert_eq!(store.get_raw(BoundName::HeightMin), -100.0);
        assert_eq!(store.get_float(BoundName::HeightMin), 900.0);
        assert_eq!(store.get_float_by_name("heightMin").unwrap(), 900.0);
    }

    #[test]
    fn test_store_convertor_is_set_once() {
        let mut store = PropertyStore::new();
        store.register_convertor(BoundName::LatitudeMin, Convertor::Angular).unwrap();
        let second = store.register_convertor(BoundName::LatitudeMin,
                                              Convertor::GeocentricHeight { polar_radius: 1.0 });
        assert!(matches!(second, Err(PropertyError::ConvertorAlreadySet(BoundName::LatitudeMin))));
        assert_eq!(store.property(BoundName::LatitudeMin).convertor(), Some(Convertor::Angular));
    }

    #[test]
    fn test_store_unknown_name() {
        let mut store = PropertyStore::new();
        assert!(matches!(store.lookup("depthMin"), Err(PropertyError::UnknownProperty(_))));
        assert!(store.get_float_by_name("depthMin").is_err());
        assert!(store.register_convertor_by_name("depthMin", Convertor::Angular).is_err());
    }

    #[test]
    fn test_store_set_notifies_subscribers() {
        let mut store = PropertyStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(BoundName::HeightMax, move |name, raw| sink.borrow_mut().push((name, raw)));

        assert!(store.set(BoundName::HeightMax, 50.0));
        assert!(!store.set(BoundName::HeightMax, 50.0));
        assert!(store.set(BoundName::HeightMin, 10.0));

        assert_eq!(*seen.borrow(), vec![(BoundName::HeightMax, 50.0)]);
    }
}
