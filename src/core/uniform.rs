// Copyright @yucwang 2026

use std::cell::Cell;
use std::rc::Rc;

use crate::math::constants::Matrix3f;

/// Named 3x3 matrix shared with the renderer. The owner overwrites it in
/// place; everyone else reads it through a `UniformHandle`.
#[derive(Debug)]
pub struct Uniform {
    name: &'static str,
    value: Rc<Cell<Matrix3f>>,
}

impl Uniform {
    pub fn new(name: &'static str, value: Matrix3f) -> Self {
        Self { name, value: Rc::new(Cell::new(value)) }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self) -> Matrix3f {
        self.value.get()
    }

    pub fn set(&self, value: Matrix3f) {
        self.value.set(value);
    }

    pub fn handle(&self) -> UniformHandle {
        UniformHandle { name: self.name, value: self.value.clone() }
    }
}

/// Read-only view of a `Uniform`. Always observes the latest value.
#[derive(Debug, Clone)]
pub struct UniformHandle {
    name: &'static str,
    value: Rc<Cell<Matrix3f>>,
}

impl UniformHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self) -> Matrix3f {
        self.value.get()
    }
}

#[cfg(test)]
mod tests {
    use super::Uniform;
    use crate::math::constants::Matrix3f;

    #[test]
    fn test_uniform_handle_sees_updates() {
        let uniform = Uniform::new("rotMat", Matrix3f::identity());
        let handle = uniform.handle();
        assert_eq!(handle.name(), "rotMat");
        assert_eq!(handle.get(), Matrix3f::identity());

        let m = Matrix3f::new(0.0, 1.0, 0.0,
                              0.0, 0.0, 1.0,
                              1.0, 0.0, 0.0);
        uniform.set(m);
        assert_eq!(handle.get(), m);
        assert_eq!(handle.clone().get(), uniform.get());
    }
}
