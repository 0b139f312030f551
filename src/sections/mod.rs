// Copyright @yucwang 2026

pub mod camera;
pub mod image;
pub mod light;
pub mod material;
pub mod transformation;

use crate::core::section::{SectionKind, SectionParser};

/// Fresh parser for one occurrence of a section.
pub fn section_parser(kind: SectionKind) -> Box<dyn SectionParser> {
    match kind {
        SectionKind::Image => Box::new(image::ImageSection::new()),
        SectionKind::Transformation => Box::new(transformation::TransformationSection::new()),
        SectionKind::Material => Box::new(material::MaterialSection::new()),
        SectionKind::Camera => Box::new(camera::CameraSection::new()),
        SectionKind::Light => Box::new(light::LightSection::new()),
    }
}

#[cfg(test)]
pub(crate) fn run_section(parser: &mut dyn SectionParser,
                          lines: &[&str],
                          options: &crate::core::options::ParseOptions)
                          -> (crate::core::scene::SceneData, crate::core::diagnostics::Diagnostics) {
    use crate::core::diagnostics::Diagnostics;
    use crate::core::scene::SceneData;
    use crate::core::section::ParseContext;

    let mut scene = SceneData::new();
    let mut diagnostics = Diagnostics::new();
    {
        let mut ctx = ParseContext { scene: &mut scene, options, diagnostics: &mut diagnostics };
        for line in lines {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            parser.parse_line(&tokens, &mut ctx);
        }
        parser.finish(&mut ctx);
    }
    (scene, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parser_factory() {
        for kind in [SectionKind::Image, SectionKind::Transformation, SectionKind::Material,
                     SectionKind::Camera, SectionKind::Light].iter() {
            assert_eq!(section_parser(*kind).kind(), *kind);
        }
    }
}
