// Copyright @yucwang 2026

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::core::bound::BoundName;
use crate::core::property::{ PropertyError, PropertyStore };
use crate::math::constants::Float;

#[derive(Debug)]
pub enum BoundsLoadError {
    Io(std::io::Error),
    Parse(String),
    Property(PropertyError),
    MissingField(&'static str),
}

impl From<std::io::Error> for BoundsLoadError {
    fn from(err: std::io::Error) -> Self {
        BoundsLoadError::Io(err)
    }
}

impl From<PropertyError> for BoundsLoadError {
    fn from(err: PropertyError) -> Self {
        BoundsLoadError::Property(err)
    }
}

impl fmt::Display for BoundsLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsLoadError::Io(e) => write!(f, "io error: {}", e),
            BoundsLoadError::Parse(msg) => write!(f, "parse error: {}", msg),
            BoundsLoadError::Property(e) => write!(f, "{}", e),
            BoundsLoadError::MissingField(field) => write!(f, "missing field: {}", field),
        }
    }
}

impl std::error::Error for BoundsLoadError {}

/// Raw bound values as written in a bounds file. Bounds the file leaves out
/// are zero.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct BoundsConfig {
    values: [Float; 6],
}

impl BoundsConfig {
    pub fn get(&self, name: BoundName) -> Float {
        self.values[name.index()]
    }

    pub fn set(&mut self, name: BoundName, raw: Float) {
        self.values[name.index()] = raw;
    }

    pub fn into_store(self) -> PropertyStore {
        let values: Vec<(BoundName, Float)> = BoundName::ALL.iter()
            .map(|name| (*name, self.get(*name)))
            .collect();
        PropertyStore::with_values(&values)
    }
}

pub fn load_bounds<P: AsRef<Path>>(path: P) -> Result<BoundsConfig, BoundsLoadError> {
    let path = path.as_ref();
    log::info!("Loading geographic bounds from: {}.", path.display());
    let xml = fs::read_to_string(path)?;
    parse_bounds(&xml)
}

pub fn parse_bounds(xml: &str) -> Result<BoundsConfig, BoundsLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut defaults: HashMap<String, String> = HashMap::new();
    let mut config = BoundsConfig::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let mut name_attr: Option<String> = None;
                let mut value_attr: Option<String> = None;
                for attr in e.attributes() {
                    let attr = attr.map_err(|e| BoundsLoadError::Parse(e.to_string()))?;
                    match attr.key.as_ref() {
                        b"name" => name_attr = Some(unescape_attr(&attr)?),
                        b"value" => value_attr = Some(unescape_attr(&attr)?),
                        _ => {}
                    }
                }

                match e.name().as_ref() {
                    b"default" => {
                        let key = name_attr.ok_or(BoundsLoadError::MissingField("default.name"))?;
                        let value = value_attr.ok_or(BoundsLoadError::MissingField("default.value"))?;
                        defaults.insert(key, value);
                    }
                    b"float" => {
                        let name = name_attr.ok_or(BoundsLoadError::MissingField("float.name"))?;
                        let value = value_attr.ok_or(BoundsLoadError::MissingField("float.value"))?;
                        let bound: BoundName = name.parse()?;
                        config.set(bound, parse_float(resolve_value(&value, &defaults)?)?);
                    }
                    _ => {}
                }
            }
            Err(e) => {
                return Err(BoundsLoadError::Parse(e.to_string()));
            }
            _ => {}
        }

        buf.clear();
    }

    Ok(config)
}

fn unescape_attr(attr: &Attribute) -> Result<String, BoundsLoadError> {
    attr.unescape_value()
        .map(|v| v.to_string())
        .map_err(|e| BoundsLoadError::Parse(format!("invalid attribute value: {}", e)))
}

/// A value of the form `$name` is replaced by the default called `name`;
/// anything else is taken literally.
fn resolve_value<'a>(raw: &'a str, defaults: &'a HashMap<String, String>) -> Result<&'a str, BoundsLoadError> {
    match raw.trim().strip_prefix('$') {
        Some(key) => defaults.get(key)
            .map(|v| v.as_str())
            .ok_or_else(|| BoundsLoadError::Parse(format!("undefined default: ${}", key))),
        None => Ok(raw),
    }
}

fn parse_float(value: &str) -> Result<Float, BoundsLoadError> {
    value.trim().parse::<Float>().map_err(|_| BoundsLoadError::Parse(format!("invalid float: {}", value)))
}
