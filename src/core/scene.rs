// Copyright @yucwang 2026

use crate::math::color::Color;
use crate::math::constants::{Float, Vector3f, DEG_TO_RAD};

/// Placement of one object: translation, Euler rotation in degrees, scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transformation {
    pub translation: Vector3f,
    pub rotation: Vector3f,
    pub scale: Vector3f,
}

impl Default for Transformation {
    fn default() -> Self {
        Self {
            translation: Vector3f::zeros(),
            rotation: Vector3f::zeros(),
            scale: Vector3f::new(1.0, 1.0, 1.0),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaterialProperties {
    pub color: Color,
    pub shininess: Float,
    pub metallic: Float,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self { color: Color::white(), shininess: 0.0, metallic: 0.0 }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CameraData {
    pub focal_length: Float,
    /// Field of view in degrees.
    pub fov: Float,
    pub aspect_ratio: Float,
}

impl CameraData {
    pub fn fov_radians(&self) -> Float {
        self.fov * DEG_TO_RAD
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LightData {
    pub intensity: Float,
    pub color: Color,
}

/// A transformation paired with the material a host should draw it with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ObjectData {
    pub transformation: Transformation,
    pub material: MaterialProperties,
}

/// Everything read from one scene file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneData {
    pub image_width: usize,
    pub image_height: usize,
    pub background_color: Color,
    pub transformations: Vec<Transformation>,
    pub materials: Vec<MaterialProperties>,
    /// Reserved for the host; loading never assigns it.
    pub current_material: Option<MaterialProperties>,
    pub camera: Option<CameraData>,
    pub lights: Vec<LightData>,
}

impl SceneData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn add_transformation(&mut self, transformation: Transformation) {
        self.transformations.push(transformation);
    }

    pub fn add_material(&mut self, material: MaterialProperties) {
        self.materials.push(material);
    }

    pub fn add_light(&mut self, light: LightData) {
        self.lights.push(light);
    }

    pub fn set_camera(&mut self, camera: CameraData) {
        self.camera = Some(camera);
    }

    /// One object per transformation, all drawn with the last parsed
    /// material (the completed accumulator under either material policy),
    /// or the default material when there is none.
    pub fn objects(&self) -> Vec<ObjectData> {
        let material = self.materials.last().copied().unwrap_or_default();
        self.transformations.iter()
            .map(|transformation| ObjectData { transformation: *transformation, material })
            .collect()
    }
}
