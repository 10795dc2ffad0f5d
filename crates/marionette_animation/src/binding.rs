use std::fmt;

/// Defines the target property for animation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation, // Maps to transform.position
    Rotation,    // Maps to transform.rotation
    Scale,       // Maps to transform.scale
    Weights,     // Maps to mesh morph target weights
}

impl TargetPath {
    /// Channel path name as used by glTF animation channels.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TargetPath::Translation => "translation",
            TargetPath::Rotation => "rotation",
            TargetPath::Scale => "scale",
            TargetPath::Weights => "weights",
        }
    }

    /// Parses a glTF channel path name.
    #[must_use]
    pub fn from_channel_path(path: &str) -> Option<Self> {
        match path {
            "translation" => Some(TargetPath::Translation),
            "rotation" => Some(TargetPath::Rotation),
            "scale" => Some(TargetPath::Scale),
            "weights" => Some(TargetPath::Weights),
            _ => None,
        }
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
