// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};
use crate::core::diagnostics::Diagnostics;

/// Parses `x,y,z` into a vector. Malformed input is reported to
/// `diagnostics` and yields the zero vector.
pub fn parse_vector3(input: &str, diagnostics: &mut Diagnostics) -> Vector3f {
    if input.trim().is_empty() {
        diagnostics.error("vector: received an empty string");
        return Vector3f::zeros();
    }

    let values: Vec<&str> = input.split(',').map(|s| s.trim()).collect();
    if values.len() != 3 {
        diagnostics.warn(format!("vector: expected 3 values but got {}: {}", values.len(), input));
        return Vector3f::zeros();
    }

    let mut parsed = [0.0 as Float; 3];
    for (idx, value) in values.iter().enumerate() {
        match value.parse::<Float>() {
            Ok(v) => parsed[idx] = v,
            Err(e) => {
                diagnostics.error(format!("vector: cannot parse '{}' from '{}': {}", value, input, e));
                return Vector3f::zeros();
            }
        }
    }

    Vector3f::new(parsed[0], parsed[1], parsed[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diagnostics::Severity;

    #[test]
    fn test_parse_vector3_well_formed() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(parse_vector3("1,2,3", &mut diagnostics), Vector3f::new(1.0, 2.0, 3.0));
        assert_eq!(parse_vector3("-0.5, 4 ,1e2", &mut diagnostics), Vector3f::new(-0.5, 4.0, 100.0));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_parse_vector3_malformed_yields_zero() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(parse_vector3("", &mut diagnostics), Vector3f::zeros());
        assert_eq!(parse_vector3("   ", &mut diagnostics), Vector3f::zeros());
        assert_eq!(parse_vector3("1,2", &mut diagnostics), Vector3f::zeros());
        assert_eq!(parse_vector3("a,b,c", &mut diagnostics), Vector3f::zeros());
        assert_eq!(parse_vector3("1,2,3,4", &mut diagnostics), Vector3f::zeros());

        let severities: Vec<Severity> = diagnostics.entries().iter().map(|d| d.severity).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Error, Severity::Warning,
                                    Severity::Error, Severity::Warning]);
    }
}
