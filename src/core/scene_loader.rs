// Copyright @yucwang 2026

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::core::options::ParseOptions;
use crate::core::scene::SceneData;
use crate::core::section::{ParseContext, SectionKind};
use crate::sections::section_parser;

#[derive(Debug)]
pub enum SceneLoadError {
    NotFound(PathBuf),
    Io(io::Error),
}

impl From<io::Error> for SceneLoadError {
    fn from(err: io::Error) -> Self {
        SceneLoadError::Io(err)
    }
}

impl fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneLoadError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            SceneLoadError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for SceneLoadError {}

#[derive(Debug, Clone, Default)]
pub struct SceneLoadResult {
    pub scene: SceneData,
    pub diagnostics: Vec<Diagnostic>,
}

impl SceneLoadResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }
}

/// Loads a scene file. Never fails: a missing or unreadable file is logged
/// and gives an empty scene.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneData {
    load_scene_with_options(path, &ParseOptions::default()).scene
}

pub fn load_scene_with_options<P: AsRef<Path>>(path: P, options: &ParseOptions) -> SceneLoadResult {
    match try_load_scene(path, options) {
        Ok(result) => result,
        Err(err) => {
            log::error!("{}", err);
            SceneLoadResult {
                scene: SceneData::default(),
                diagnostics: vec![Diagnostic { line: None, severity: Severity::Error, message: err.to_string() }],
            }
        }
    }
}

pub fn try_load_scene<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<SceneLoadResult, SceneLoadError> {
    let path = path.as_ref();
    log::info!("Loading scene from: {}.", path.display());

    let bytes = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SceneLoadError::NotFound(path.to_path_buf()),
        _ => SceneLoadError::Io(err),
    })?;
    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        log::warn!("{} is not valid UTF-8; invalid bytes were replaced.", path.display());
    }

    let result = parse_scene(&text, options);
    log::info!("Scene loaded: {}x{}, {} transformations, {} materials, {} lights, camera: {}, {} diagnostics.",
               result.scene.image_width,
               result.scene.image_height,
               result.scene.transformations.len(),
               result.scene.materials.len(),
               result.scene.lights.len(),
               result.scene.camera.is_some(),
               result.diagnostics.len());
    Ok(result)
}

/// Parses scene text already in memory. A leading byte order mark is
/// ignored.
pub fn parse_scene(text: &str, options: &ParseOptions) -> SceneLoadResult {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();
    let mut scene = SceneData::new();
    let mut diagnostics = Diagnostics::new();

    {
        let mut ctx = ParseContext { scene: &mut scene, options, diagnostics: &mut diagnostics };
        let mut idx = 0;
        while idx < lines.len() {
            let line = lines[idx].trim();
            if is_skippable(line) {
                idx += 1;
                continue;
            }

            match SectionKind::from_keyword(line) {
                Some(kind) => {
                    log::debug!("Section {} at line {}.", kind, idx + 1);
                    idx = parse_section(&lines, idx, kind, &mut ctx) + 1;
                }
                None => {
                    log::trace!("Ignoring line {}: {}", idx + 1, line);
                    idx += 1;
                }
            }
        }
    }

    SceneLoadResult { scene, diagnostics: diagnostics.into_entries() }
}

fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with("//") || line == "{" || line == "}"
}

/// Feeds the body of the section whose keyword sits at `keyword_idx` to a
/// fresh parser and returns the index of its closing brace. End of input
/// closes an unterminated section.
fn parse_section(lines: &[&str], keyword_idx: usize, kind: SectionKind, ctx: &mut ParseContext) -> usize {
    let mut parser = section_parser(kind);

    for idx in (keyword_idx + 1)..lines.len() {
        let line = lines[idx].trim();
        ctx.diagnostics.set_line(Some(idx + 1));
        if line == "}" {
            parser.finish(ctx);
            ctx.diagnostics.set_line(None);
            return idx;
        }
        if line.is_empty() || line.starts_with("//") || line == "{" {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        parser.parse_line(&tokens, ctx);
    }

    ctx.diagnostics.set_line(Some(keyword_idx + 1));
    ctx.diagnostics.warn(format!("{} section is not closed before end of file", kind));
    parser.finish(ctx);
    ctx.diagnostics.set_line(None);
    lines.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::{MaterialPolicy, RotationIndexing};
    use crate::core::scene::{CameraData, LightData, MaterialProperties};
    use crate::math::color::Color;
    use crate::math::constants::Vector3f;

    const SCENE: &str = "\
// Test scene
Image
{
800 600
0.2 0.3 0.4
}

Transformation
{
// first object
T1,2,3 S1,1,1
T0,0,-5 Rx 90 S2,2,2
}

Material
{
1 0 0
0.5 0.2
}

Camera
{
35 60 1.777
}

Light
{
2.0 1 1 1
}
";

    fn temp_scene_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("scenefile_{}_{}.txt", name, std::process::id()))
    }

    #[test]
    fn test_parse_full_scene() {
        let result = parse_scene(SCENE, &ParseOptions::default());
        let scene = &result.scene;
        assert!(result.diagnostics.is_empty());

        assert_eq!(scene.image_width, 800);
        assert_eq!(scene.image_height, 600);
        assert_eq!(scene.background_color, Color::new(0.2, 0.3, 0.4));

        assert_eq!(scene.transformations.len(), 2);
        assert_eq!(scene.transformations[0].translation, Vector3f::new(1.0, 2.0, 3.0));
        assert_eq!(scene.transformations[1].translation, Vector3f::new(0.0, 0.0, -5.0));
        assert_eq!(scene.transformations[1].rotation, Vector3f::new(90.0, 0.0, 0.0));
        assert_eq!(scene.transformations[1].scale, Vector3f::new(2.0, 2.0, 2.0));

        assert_eq!(scene.materials.len(), 2);
        assert_eq!(scene.materials[1], MaterialProperties {
            color: Color::new(1.0, 0.0, 0.0), shininess: 0.5, metallic: 0.2 });

        assert_eq!(scene.camera, Some(CameraData { focal_length: 35.0, fov: 60.0, aspect_ratio: 1.777 }));
        assert_eq!(scene.lights, vec![LightData { intensity: 2.0, color: Color::new(1.0, 1.0, 1.0) }]);
        assert!(scene.current_material.is_none());
    }

    #[test]
    fn test_material_policy_per_section() {
        let options = ParseOptions::default().with_material_policy(MaterialPolicy::PerSection);
        let result = parse_scene(SCENE, &options);
        assert_eq!(result.scene.materials.len(), 1);
    }

    #[test]
    fn test_repeated_sections_accumulate() {
        let text = "Light\n{\n1 1 0 0\n}\nCamera\n{\n35 60 1.5\n}\nLight\n{\n2 0 1 0\n}\nCamera\n{\n50 40 1\n}\n";
        let scene = parse_scene(text, &ParseOptions::default()).scene;
        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.lights[1].intensity, 2.0);
        assert_eq!(scene.camera.map(|c| c.focal_length), Some(50.0));
    }

    #[test]
    fn test_unknown_lines_and_keywords_ignored() {
        let text = "image\n{\n800 600\n}\nGarbage here\n  Image  \n{\n\t640   480\n}\n";
        let result = parse_scene(text, &ParseOptions::default());
        assert_eq!(result.scene.image_width, 640);
        assert_eq!(result.scene.image_height, 480);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_blank_and_comment_lines_inside_body() {
        let text = "Transformation\n{\n\n// nothing here\nT1,1,1\n\n}\nMaterial\n{\n// c\n\n0 0 1\n}\n";
        let scene = parse_scene(text, &ParseOptions::default()).scene;
        assert_eq!(scene.transformations.len(), 1);
        assert_eq!(scene.materials.len(), 1);
        assert_eq!(scene.materials[0].color, Color::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_unclosed_section_terminates() {
        let text = "Image\n{\n800 600\nLight\n{\n1 1 1 1\n";
        let result = parse_scene(text, &ParseOptions::default());
        assert_eq!(result.scene.image_width, 800);
        assert!(result.scene.lights.is_empty());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].line, Some(1));
        assert_eq!(result.diagnostics[0].severity, Severity::Warning);

        let result = parse_scene("Camera", &ParseOptions::default());
        assert!(result.scene.camera.is_none());
        assert_eq!(result.diagnostics.len(), 1);
    }

    #[test]
    fn test_diagnostics_report_line_numbers() {
        let text = "Image\n{\n800 abc\n}\nTransformation\n{\nT1,2\n}\n";
        let result = parse_scene(text, &ParseOptions::default());
        let lines: Vec<Option<usize>> = result.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![Some(3), Some(7)]);
        assert_eq!(result.scene.image_width, 800);
        assert_eq!(result.scene.image_height, 0);
        assert_eq!(result.scene.transformations.len(), 1);
    }

    #[test]
    fn test_malformed_numbers_substitute_zero() {
        let result = parse_scene("Image\n{\n800 abc\n}\nCamera\n{\nx 45 1.5\n}\n", &ParseOptions::default());
        assert_eq!((result.scene.image_width, result.scene.image_height), (800, 0));
        assert_eq!(result.scene.camera, Some(CameraData { focal_length: 0.0, fov: 45.0, aspect_ratio: 1.5 }));
        assert_eq!(result.diagnostics.len(), 2);
        assert!(result.diagnostics.iter().all(|d| d.severity == Severity::Warning));
    }

    #[test]
    fn test_load_scene_with_byte_order_mark() {
        let path = temp_scene_path("bom");
        fs::write(&path, "\u{feff}Image\n{\n800 600\n}\n").expect("failed to write scene file");

        let result = load_scene_with_options(&path, &ParseOptions::default());
        let _ = fs::remove_file(&path);

        assert_eq!(result.scene.image_width, 800);
        assert_eq!(result.scene.image_height, 600);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_load_scene_with_invalid_utf8() {
        let path = temp_scene_path("latin1");
        let mut bytes = b"Image\n{\n800 600\n}\n// caf".to_vec();
        bytes.push(0xe9);
        bytes.extend_from_slice(b"\nLight\n{\n2 1 1 1\n}\n");
        fs::write(&path, &bytes).expect("failed to write scene file");

        let result = load_scene_with_options(&path, &ParseOptions::default());
        let _ = fs::remove_file(&path);

        assert!(!result.has_errors());
        assert_eq!(result.scene.image_width, 800);
        assert_eq!(result.scene.lights.len(), 1);
    }

    #[test]
    fn test_legacy_rotation_through_loader() {
        let options = ParseOptions::default().with_rotation_indexing(RotationIndexing::SecondToken);
        let result = parse_scene("Transformation\n{\nRx 30 Rz 60\n}\n", &options);
        assert_eq!(result.scene.transformations[0].rotation, Vector3f::new(30.0, 0.0, 30.0));
    }

    #[test]
    fn test_load_missing_file_returns_empty_scene() {
        let path = temp_scene_path("missing");
        let _ = fs::remove_file(&path);

        let scene = load_scene(&path);
        assert!(scene.is_empty());
        assert_eq!(scene.image_width, 0);
        assert!(scene.transformations.is_empty());
        assert!(scene.camera.is_none());

        let result = load_scene_with_options(&path, &ParseOptions::default());
        assert!(result.has_errors());

        match try_load_scene(&path, &ParseOptions::default()) {
            Err(SceneLoadError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other.map(|r| r.scene)),
        }
    }

    #[test]
    fn test_load_scene_from_file() {
        let path = temp_scene_path("full");
        fs::write(&path, SCENE).expect("failed to write scene file");

        let scene = load_scene(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(scene, parse_scene(SCENE, &ParseOptions::default()).scene);
        assert_eq!(scene.lights.len(), 1);
    }
}
