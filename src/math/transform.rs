// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Matrix4f, Vector3f, DEG_TO_RAD};
use crate::core::scene::Transformation;

use nalgebra::{Rotation3, Unit, Vector4};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix4f,
    inv_matrix: Matrix4f
}

impl Default for Transform {
    fn default() -> Self {
        Self { matrix: Matrix4f::identity(),
               inv_matrix: Matrix4f::identity() }
    }
}

impl Transform {
    pub fn new(matrix: Matrix4f) -> Self {
        Self { matrix,
               inv_matrix: matrix.try_inverse().unwrap_or_else(Matrix4f::identity) }
    }

    /// translate * rotate * scale. Euler angles are in degrees and applied
    /// about Z, then X, then Y.
    pub fn from_transformation(t: &Transformation) -> Self {
        let translate = Matrix4f::new_translation(&t.translation);
        let scale = Matrix4f::new_nonuniform_scaling(&t.scale);
        Self::new(translate * Self::euler_rotation(&t.rotation) * scale)
    }

    fn euler_rotation(degrees: &Vector3f) -> Matrix4f {
        let axis_angle = |axis: Unit<Vector3f>, deg: Float| Rotation3::from_axis_angle(&axis, deg * DEG_TO_RAD).to_homogeneous();
        axis_angle(Vector3f::y_axis(), degrees.y)
            * axis_angle(Vector3f::x_axis(), degrees.x)
            * axis_angle(Vector3f::z_axis(), degrees.z)
    }

    pub fn matrix(&self) -> &Matrix4f {
        &self.matrix
    }

    pub fn inverse_matrix(&self) -> &Matrix4f {
        &self.inv_matrix
    }

    fn project(m: &Matrix4f, p: Vector3f) -> Vector3f {
        let h = m * Vector4::new(p.x, p.y, p.z, 1.0);
        Vector3f::new(h.x / h.w, h.y / h.w, h.z / h.w)
    }

    pub fn apply_point(&self, p: Vector3f) -> Vector3f {
        Self::project(&self.matrix, p)
    }

    pub fn apply_vector(&self, v: Vector3f) -> Vector3f {
        self.matrix.fixed_slice::<3, 3>(0, 0) * v
    }

    pub fn inv_apply_point(&self, p: Vector3f) -> Vector3f {
        Self::project(&self.inv_matrix, p)
    }

    pub fn inv_apply_vector(&self, v: Vector3f) -> Vector3f {
        self.inv_matrix.fixed_slice::<3, 3>(0, 0) * v
    }
}
