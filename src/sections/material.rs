// Copyright @yucwang 2026

use crate::core::options::MaterialPolicy;
use crate::core::scene::MaterialProperties;
use crate::core::section::{parse_numbers, ParseContext, SectionKind, SectionParser};
use crate::math::color::Color;
use crate::math::constants::Float;

/// Accumulates `r g b` and `shininess metallic` lines into one material.
/// With `MaterialPolicy::PerLine` a snapshot is appended after every body
/// line, including lines with an ignored token count.
pub struct MaterialSection {
    accumulator: MaterialProperties,
    body_lines: usize,
}

impl MaterialSection {
    pub fn new() -> Self {
        Self { accumulator: MaterialProperties::default(), body_lines: 0 }
    }
}

impl SectionParser for MaterialSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Material
    }

    fn parse_line(&mut self, tokens: &[&str], ctx: &mut ParseContext) {
        match tokens.len() {
            3 => {
                let rgb = parse_numbers::<Float>(tokens, ctx.diagnostics);
                self.accumulator.color = Color::new(rgb[0], rgb[1], rgb[2]);
                log::debug!("Material color: {}.", self.accumulator.color);
            }
            2 => {
                let values = parse_numbers::<Float>(tokens, ctx.diagnostics);
                self.accumulator.shininess = values[0];
                self.accumulator.metallic = values[1];
                log::debug!("Material shininess: {}, metallic: {}.", values[0], values[1]);
            }
            n => log::trace!("Material: ignoring line with {} tokens.", n),
        }

        self.body_lines += 1;
        if ctx.options.material_policy == MaterialPolicy::PerLine {
            ctx.scene.add_material(self.accumulator);
        }
    }

    fn finish(&mut self, ctx: &mut ParseContext) {
        if ctx.options.material_policy == MaterialPolicy::PerSection && self.body_lines > 0 {
            ctx.scene.add_material(self.accumulator);
        }
    }
}
