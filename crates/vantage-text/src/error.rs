/// Errors that can occur in the text rendering system.
///
/// All variants are fatal to construction: no partial atlas is
/// retained when one is returned.
#[derive(Debug, Clone)]
pub enum TextError {
    /// Font file not found.
    FontFileNotFound(std::path::PathBuf),

    /// The font file was read but could not be parsed.
    InvalidFontData(String),

    /// Generic IO error.
    Io(String),
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextError::FontFileNotFound(path) => {
                write!(f, "Font file not found: {}", path.display())
            }
            TextError::InvalidFontData(msg) => write!(f, "Invalid font data: {}", msg),
            TextError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for TextError {}

impl From<std::io::Error> for TextError {
    fn from(err: std::io::Error) -> Self {
        TextError::Io(err.to_string())
    }
}

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        let err = TextError::FontFileNotFound("/tmp/missing.ttf".into());
        assert_eq!(err.to_string(), "Font file not found: /tmp/missing.ttf");

        let err = TextError::InvalidFontData("bad magic".into());
        assert_eq!(err.to_string(), "Invalid font data: bad magic");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TextError = io.into();
        assert!(matches!(err, TextError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
