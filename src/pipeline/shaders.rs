pub mod flat;
pub mod lighting;
pub mod phong;
pub mod unlit;

use crate::error::RenderError;
use std::fmt;
use std::str::FromStr;

/// How covered pixels are colored. Chosen once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Corner colors blended by barycentric weight.
    Barycentric,
    /// Ambient + diffuse with the constant face normal.
    Flat,
    /// Ambient + diffuse + specular with interpolated vertex normals.
    #[default]
    Phong,
    /// Grayscale of the interpolated device depth.
    Depth,
}

impl FromStr for ShadingMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "barycentric" => Ok(ShadingMode::Barycentric),
            "flat" => Ok(ShadingMode::Flat),
            "phong" => Ok(ShadingMode::Phong),
            "depth" => Ok(ShadingMode::Depth),
            _ => Err(RenderError::InvalidShadingMode(s.to_string())),
        }
    }
}

impl fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShadingMode::Barycentric => "barycentric",
            ShadingMode::Flat => "flat",
            ShadingMode::Phong => "phong",
            ShadingMode::Depth => "depth",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_modes_round_trip() {
        for mode in [
            ShadingMode::Barycentric,
            ShadingMode::Flat,
            ShadingMode::Phong,
            ShadingMode::Depth,
        ] {
            assert_eq!(mode.to_string().parse::<ShadingMode>().unwrap(), mode);
        }
        assert_eq!("PHONG".parse::<ShadingMode>().unwrap(), ShadingMode::Phong);
    }

    #[test]
    fn test_unknown_mode_is_invalid_argument() {
        let err = "gouraud".parse::<ShadingMode>().unwrap_err();
        assert!(matches!(err, RenderError::InvalidShadingMode(ref name) if name == "gouraud"));
    }
}
