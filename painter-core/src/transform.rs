/// Rigid transforms applied in place to every shape in a registry
use nalgebra::{Rotation3, Vector3};

use crate::registry::ShapeRegistry;

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builders and the in-place registry passes
pub struct Transform;

impl Transform {
    /// Rotation about X, then Y, then Z, each about the origin
    pub fn rotation_matrix(rotation: &RotationState) -> Rotation3<f32> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z);

        // Rightmost applies first
        rz * ry * rx
    }

    /// Add `offset` to every vertex of every shape
    pub fn translate(registry: &mut ShapeRegistry, offset: &Vector3<f32>) {
        for shape in registry.shapes_mut() {
            for vertex in shape.vertices_mut() {
                *vertex += offset;
            }
        }
    }

    /// Rotate every vertex of every shape about the origin
    pub fn rotate(registry: &mut ShapeRegistry, rotation: &RotationState) {
        if rotation.is_zero() {
            return;
        }
        let matrix = Self::rotation_matrix(rotation);
        for shape in registry.shapes_mut() {
            for vertex in shape.vertices_mut() {
                *vertex = matrix * *vertex;
            }
        }
    }

    /// Translate, then rotate. Either step may be skipped.
    pub fn apply(
        registry: &mut ShapeRegistry,
        offset: Option<&Vector3<f32>>,
        rotation: Option<&RotationState>,
    ) {
        if let Some(offset) = offset {
            Self::translate(registry, offset);
        }
        if let Some(rotation) = rotation {
            Self::rotate(registry, rotation);
        }
    }
}
