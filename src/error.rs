use std::fmt;

/// Errors produced while building a scene or rendering a frame.
#[derive(Debug)]
pub enum RenderError {
    /// The shading mode name does not match any known mode.
    InvalidShadingMode(String),
    /// The cull mode name does not match any known mode.
    InvalidCullMode(String),
    /// The camera projection name does not match any known projection.
    InvalidProjection(String),
    /// A face references a vertex that does not exist.
    VertexIndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    /// Every face must carry exactly one face normal.
    NormalCountMismatch { faces: usize, normals: usize },
    Io(std::io::Error),
    ObjLoad(tobj::LoadError),
    Config(toml::de::Error),
    Image(image::ImageError),
}

pub type Result<T> = std::result::Result<T, RenderError>;

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidShadingMode(name) => write!(
                f,
                "unknown shading mode '{}' (expected barycentric, flat, phong or depth)",
                name
            ),
            RenderError::InvalidCullMode(name) => write!(
                f,
                "unknown cull mode '{}' (expected back, front or none)",
                name
            ),
            RenderError::InvalidProjection(name) => write!(
                f,
                "unknown projection '{}' (expected perspective or orthographic)",
                name
            ),
            RenderError::VertexIndexOutOfRange {
                face,
                index,
                vertex_count,
            } => write!(
                f,
                "face {} references vertex {} but the mesh has {} vertices",
                face, index, vertex_count
            ),
            RenderError::NormalCountMismatch { faces, normals } => write!(
                f,
                "mesh has {} faces but {} face normals",
                faces, normals
            ),
            RenderError::Io(e) => write!(f, "I/O error: {}", e),
            RenderError::ObjLoad(e) => write!(f, "failed to load OBJ: {}", e),
            RenderError::Config(e) => write!(f, "failed to parse TOML: {}", e),
            RenderError::Image(e) => write!(f, "failed to write image: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            RenderError::ObjLoad(e) => Some(e),
            RenderError::Config(e) => Some(e),
            RenderError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<tobj::LoadError> for RenderError {
    fn from(e: tobj::LoadError) -> Self {
        RenderError::ObjLoad(e)
    }
}

impl From<toml::de::Error> for RenderError {
    fn from(e: toml::de::Error) -> Self {
        RenderError::Config(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Image(e)
    }
}
