use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while composing a configuration.
///
/// The only fatal conditions in the engine are the three configuration-file
/// cases below. Everything else degrades locally: fields with unusable
/// metadata are skipped and keep their zero values.
#[derive(Debug, Error)]
pub enum StrataError {
    #[error("could not find configuration file {path}")]
    FileNotFound { path: PathBuf },

    #[error("could not read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse configuration file {path}: {reason}")]
    FileParse { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_formats() {
        let err = StrataError::FileNotFound {
            path: "/etc/myapp/config.toml".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("could not find"));
        assert!(msg.contains("config.toml"));
    }

    #[test]
    fn file_parse_formats() {
        let err = StrataError::FileParse {
            path: "bad.toml".into(),
            reason: "expected `=`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("could not parse"));
        assert!(msg.contains("expected `=`"));
    }

    #[test]
    fn missing_and_unparseable_are_distinct() {
        let missing = StrataError::FileNotFound { path: "a".into() };
        let broken = StrataError::FileParse {
            path: "a".into(),
            reason: "x".into(),
        };
        assert_ne!(missing.to_string(), broken.to_string());
    }
}
