// Copyright @yucwang 2026

use crate::core::scene::CameraData;
use crate::core::section::{parse_numbers, ParseContext, SectionKind, SectionParser};
use crate::math::constants::Float;

/// `focal_length fov aspect_ratio`; each line with three values replaces
/// the camera.
pub struct CameraSection;

impl CameraSection {
    pub fn new() -> Self {
        Self
    }
}

impl SectionParser for CameraSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Camera
    }

    fn parse_line(&mut self, tokens: &[&str], ctx: &mut ParseContext) {
        if tokens.len() <= 1 {
            return;
        }
        if tokens.len() < 3 {
            ctx.diagnostics.warn(format!("camera expects focal length, fov and aspect ratio, got {} values", tokens.len()));
            return;
        }

        let values = parse_numbers::<Float>(&tokens[..3], ctx.diagnostics);
        let camera = CameraData { focal_length: values[0], fov: values[1], aspect_ratio: values[2] };
        log::debug!("Camera: {:?}.", camera);
        ctx.scene.set_camera(camera);
    }
}
