// Copyright @yucwang 2026

use crate::core::scene::LightData;
use crate::core::section::{parse_numbers, ParseContext, SectionKind, SectionParser};
use crate::math::color::Color;
use crate::math::constants::Float;

pub struct LightSection;

impl LightSection {
    pub fn new() -> Self {
        Self
    }
}

impl SectionParser for LightSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Light
    }

    // intensity r g b
    fn parse_line(&mut self, tokens: &[&str], ctx: &mut ParseContext) {
        if tokens.len() <= 1 {
            return;
        }
        if tokens.len() < 4 {
            ctx.diagnostics.warn(format!("light expects intensity and r g b, got {} values", tokens.len()));
            return;
        }

        let values = parse_numbers::<Float>(&tokens[..4], ctx.diagnostics);
        let light = LightData { intensity: values[0], color: Color::new(values[1], values[2], values[3]) };
        log::debug!("Light: intensity {}, color {}.", light.intensity, light.color);
        ctx.scene.add_light(light);
    }
}
