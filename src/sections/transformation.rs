// Copyright @yucwang 2026

use crate::core::options::RotationIndexing;
use crate::core::scene::Transformation;
use crate::core::section::{parse_number, ParseContext, SectionKind, SectionParser};
use crate::math::constants::Float;
use crate::math::vector::parse_vector3;

/// One `Transformation` per body line, built from `T<x,y,z>`, `S<x,y,z>`
/// and `Rx`/`Ry`/`Rz` tokens. Unknown tokens are ignored, and the
/// transformation is appended even when nothing matched.
pub struct TransformationSection;

impl TransformationSection {
    pub fn new() -> Self {
        Self
    }
}

fn rotation_axis(token: &str) -> Option<(usize, &str)> {
    let axis = match token.get(..2)? {
        "Rx" => 0,
        "Ry" => 1,
        "Rz" => 2,
        _ => return None,
    };
    Some((axis, &token[2..]))
}

/// Returns the angle (if any) and how many following tokens it consumed.
fn rotation_value(tokens: &[&str],
                  idx: usize,
                  inline: &str,
                  indexing: RotationIndexing,
                  ctx: &mut ParseContext) -> (Option<Float>, usize) {
    match indexing {
        RotationIndexing::SecondToken => {
            match tokens.get(1) {
                Some(token) => (parse_number::<Float>(token, ctx.diagnostics), 0),
                None => {
                    ctx.diagnostics.warn(format!("{}: no second token to read the angle from", tokens[idx]));
                    (None, 0)
                }
            }
        }
        RotationIndexing::FollowingToken => {
            if !inline.is_empty() {
                return (parse_number::<Float>(inline, ctx.diagnostics), 0);
            }
            match tokens.get(idx + 1).and_then(|next| next.parse::<Float>().ok()) {
                Some(angle) => (Some(angle), 1),
                None => {
                    ctx.diagnostics.warn(format!("{}: missing rotation angle", tokens[idx]));
                    (None, 0)
                }
            }
        }
    }
}

impl SectionParser for TransformationSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Transformation
    }

    fn parse_line(&mut self, tokens: &[&str], ctx: &mut ParseContext) {
        let mut transformation = Transformation::default();
        let indexing = ctx.options.rotation_indexing;

        let mut idx = 0;
        while idx < tokens.len() {
            let token = tokens[idx];
            if let Some(rest) = token.strip_prefix('T') {
                transformation.translation = parse_vector3(rest, ctx.diagnostics);
                log::debug!("Translation: {:?}.", transformation.translation);
            } else if let Some((axis, inline)) = rotation_axis(token) {
                let (angle, consumed) = rotation_value(tokens, idx, inline, indexing, ctx);
                if let Some(angle) = angle {
                    transformation.rotation[axis] = angle;
                    log::debug!("Rotation: {:?}.", transformation.rotation);
                }
                idx += consumed;
            } else if let Some(rest) = token.strip_prefix('S') {
                transformation.scale = parse_vector3(rest, ctx.diagnostics);
                log::debug!("Scale: {:?}.", transformation.scale);
            }
            idx += 1;
        }

        ctx.scene.add_transformation(transformation);
    }
}
