// Copyright @yucwang 2026

use crate::core::section::{parse_numbers, ParseContext, SectionKind, SectionParser};
use crate::math::color::Color;
use crate::math::constants::Float;

/// `width height` or `r g b` lines; the last line of each kind wins.
pub struct ImageSection;

impl ImageSection {
    pub fn new() -> Self {
        Self
    }
}

impl SectionParser for ImageSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Image
    }

    fn parse_line(&mut self, tokens: &[&str], ctx: &mut ParseContext) {
        match tokens.len() {
            2 => {
                let size = parse_numbers::<usize>(tokens, ctx.diagnostics);
                ctx.scene.image_width = size[0];
                ctx.scene.image_height = size[1];
                log::debug!("Image size: {}x{}.", size[0], size[1]);
            }
            3 => {
                let rgb = parse_numbers::<Float>(tokens, ctx.diagnostics);
                ctx.scene.background_color = Color::new(rgb[0], rgb[1], rgb[2]);
                log::debug!("Background color: {}.", ctx.scene.background_color);
            }
            n => log::trace!("Image: ignoring line with {} tokens.", n),
        }
    }
}
