// Copyright @yucwang 2026

use std::fmt;
use std::str::FromStr;

use crate::core::diagnostics::Diagnostics;
use crate::core::options::ParseOptions;
use crate::core::scene::SceneData;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Image,
    Transformation,
    Material,
    Camera,
    Light,
}

impl SectionKind {
    /// Exact, case-sensitive keyword match.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Image" => Some(SectionKind::Image),
            "Transformation" => Some(SectionKind::Transformation),
            "Material" => Some(SectionKind::Material),
            "Camera" => Some(SectionKind::Camera),
            "Light" => Some(SectionKind::Light),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            SectionKind::Image => "Image",
            SectionKind::Transformation => "Transformation",
            SectionKind::Material => "Material",
            SectionKind::Camera => "Camera",
            SectionKind::Light => "Light",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// State shared by the section parsers during one load.
pub struct ParseContext<'a> {
    pub scene: &'a mut SceneData,
    pub options: &'a ParseOptions,
    pub diagnostics: &'a mut Diagnostics,
}

/// Consumes the body lines of one section. The loader owns the line range
/// and calls `finish` once the closing brace (or end of input) is reached.
pub trait SectionParser {
    fn kind(&self) -> SectionKind;
    fn parse_line(&mut self, tokens: &[&str], ctx: &mut ParseContext);
    fn finish(&mut self, _ctx: &mut ParseContext) {}
}

pub fn parse_number<T>(token: &str, diagnostics: &mut Diagnostics) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match token.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            diagnostics.warn(format!("malformed number '{}': {}", token, e));
            None
        }
    }
}

/// Parses each token on its own. A bad token is reported and replaced by
/// the default (zero), so the rest of the line still applies.
pub fn parse_numbers<T>(tokens: &[&str], diagnostics: &mut Diagnostics) -> Vec<T>
where
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    tokens.iter()
        .map(|token| parse_number::<T>(token, diagnostics).unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keywords_are_case_sensitive() {
        assert_eq!(SectionKind::from_keyword("Camera"), Some(SectionKind::Camera));
        assert_eq!(SectionKind::from_keyword("camera"), None);
        assert_eq!(SectionKind::from_keyword("Camera "), None);
        for kind in [SectionKind::Image, SectionKind::Transformation, SectionKind::Material,
                     SectionKind::Camera, SectionKind::Light].iter() {
            assert_eq!(SectionKind::from_keyword(kind.keyword()), Some(*kind));
        }
    }

    #[test]
    fn test_parse_numbers_substitutes_zero_per_value() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(parse_numbers::<usize>(&["800", "600"], &mut diagnostics), vec![800, 600]);
        assert!(diagnostics.is_empty());

        assert_eq!(parse_numbers::<f32>(&["1.0", "x", "2.0"], &mut diagnostics), vec![1.0, 0.0, 2.0]);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.entries()[0].message.contains("'x'"));

        assert_eq!(parse_numbers::<usize>(&["-3", "abc"], &mut diagnostics), vec![0, 0]);
        assert_eq!(diagnostics.len(), 3);
    }
}
