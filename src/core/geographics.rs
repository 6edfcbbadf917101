// Copyright @yucwang 2026

use crate::core::bound::BoundName;
use crate::core::convertor::install_geographic_convertors;
use crate::core::orientation::{ solve_orientation, GeoBounds };
use crate::core::property::{ PropertyError, PropertyStore };
use crate::core::signal::{ Signal, SubscriptionId };
use crate::core::uniform::{ Uniform, UniformHandle };
use crate::math::constants::{ Float, Matrix3f, WGS_84_RADIUS_POLAR };

pub const ROTATION_UNIFORM_NAME: &str = "rotMat";

/// Geographic box with a derived east/north/up rotation.
///
/// Owns the bound properties, the `rotMat` uniform and the change signal.
/// Any edit to a longitude or latitude bound recomputes the rotation before
/// `set_bound` returns, then emits the change signal once. Height edits only
/// update the stored value.
#[derive(Debug)]
pub struct GeographicsComponent {
    store: PropertyStore,
    rot_mat: Uniform,
    changed: Signal,
}

impl GeographicsComponent {
    pub fn new(store: PropertyStore) -> Result<Self, PropertyError> {
        Self::with_polar_radius(store, WGS_84_RADIUS_POLAR as Float)
    }

    pub fn with_polar_radius(mut store: PropertyStore, polar_radius: Float) -> Result<Self, PropertyError> {
        install_geographic_convertors(&mut store, polar_radius)?;

        let mut component = Self {
            store,
            rot_mat: Uniform::new(ROTATION_UNIFORM_NAME, Matrix3f::identity()),
            changed: Signal::new(),
        };
        component.on_angular_bound_changed();
        Ok(component)
    }

    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Writes a raw (user-entered) value. Returns whether it changed.
    pub fn set_bound(&mut self, name: BoundName, raw: Float) -> bool {
        if !self.store.set(name, raw) {
            return false;
        }
        if name.is_angular() {
            self.on_angular_bound_changed();
        }
        true
    }

    pub fn set_bound_by_name(&mut self, name: &str, raw: Float) -> Result<bool, PropertyError> {
        let name: BoundName = name.parse()?;
        Ok(self.set_bound(name, raw))
    }

    /// Converted value of one bound.
    pub fn bound(&self, name: BoundName) -> Float {
        self.store.get_float(name)
    }

    pub fn raw_bound(&self, name: BoundName) -> Float {
        self.store.get_raw(name)
    }

    pub fn bounds(&self) -> GeoBounds {
        GeoBounds::from_store(&self.store)
    }

    pub fn rotate_matrix(&self) -> UniformHandle {
        self.rot_mat.handle()
    }

    pub fn on_geographics_changed<F>(&mut self, slot: F) -> SubscriptionId
        where F: FnMut() + 'static {
        self.changed.connect(slot)
    }

    pub fn disconnect(&mut self, id: SubscriptionId) -> bool {
        self.changed.disconnect(id)
    }

    pub fn subscribe_bound<F>(&mut self, name: BoundName, callback: F)
        where F: FnMut(BoundName, Float) + 'static {
        self.store.subscribe(name, callback);
    }

    fn on_angular_bound_changed(&mut self) {
        let bounds = self.bounds();
        self.rot_mat.set(solve_orientation(&bounds));
        self.changed.emit();
    }
}
