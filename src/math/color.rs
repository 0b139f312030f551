// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

use std::fmt;

/// Linear RGB color. Channels are stored as parsed; nothing is clamped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: Float,
    pub g: Float,
    pub b: Float,
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    pub fn to_vector(&self) -> Vector3f {
        Vector3f::new(self.r, self.g, self.b)
    }
}

impl From<Vector3f> for Color {
    fn from(v: Vector3f) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Color> for Vector3f {
    fn from(c: Color) -> Self {
        c.to_vector()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}
