use thiserror::Error;

/// What exactly was wrong with a corrupt stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorruptKind {
    #[error("unrecognized record tag 0x{0:02x}")]
    UnknownTag(u8),

    #[error("unrecognized image type 0x{0:02x}")]
    UnknownImageType(u8),

    #[error("unrecognized border type 0x{0:04x}")]
    UnknownBorderType(u16),

    #[error("unrecognized theme property {0:?}")]
    UnknownThemeKey(String),

    #[error("image border needs 2, 3, 8 or 9 images, found {0}")]
    ImageBorderCount(i8),

    #[error("negative count {0}")]
    NegativeCount(i32),

    #[error("stream ended {needed} bytes early")]
    UnexpectedEof { needed: usize },

    #[error("string is not valid modified UTF-8")]
    InvalidUtf8,
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("corrupt resource file at byte {offset}: {kind}")]
    CorruptResourceFile { offset: usize, kind: CorruptKind },

    #[error("theme {theme:?} entry {key:?} refers to missing resource {name:?}")]
    MissingResource {
        theme: String,
        key: String,
        name: String,
    },

    #[error("no theme named {0:?}")]
    NoSuchTheme(String),

    #[error("{what} of length {len} cannot be encoded")]
    Unencodable { what: &'static str, len: usize },

    #[error("theme entry {key:?} holds a value its key suffix cannot carry")]
    MismatchedThemeEntry { key: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResourceError {
    pub fn corrupt(offset: usize, kind: CorruptKind) -> Self {
        ResourceError::CorruptResourceFile { offset, kind }
    }

    /// The detail of a corrupt-stream error.
    pub fn corrupt_kind(&self) -> Option<&CorruptKind> {
        match self {
            ResourceError::CorruptResourceFile { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

pub type Result<T, E = ResourceError> = std::result::Result<T, E>;
