use super::types::KresourError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// Raised before the browser starts; the process exits without drawing.
    pub startup_fatal: bool,
    pub exit_code: i32,
}

impl KresourError {
    /// Classify this error to determine how the process reports it and exits.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            KresourError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                startup_fatal: true,
                exit_code: 2,
            },
            KresourError::FileMissing { .. } => ErrorClassification {
                error_type: "LoadError",
                startup_fatal: true,
                exit_code: 3,
            },
            KresourError::Malformed { .. } => ErrorClassification {
                error_type: "LoadError",
                startup_fatal: true,
                exit_code: 3,
            },

            // Runtime failures
            KresourError::IndexOutOfRange { .. } => ErrorClassification {
                error_type: "IndexOutOfRange",
                startup_fatal: false,
                exit_code: 1,
            },
            KresourError::Io(_) => ErrorClassification {
                error_type: "IoError",
                startup_fatal: false,
                exit_code: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_startup_fatal() {
        let err = KresourError::Config("data directory not found: nope".into());
        let class = err.classify();
        assert!(class.startup_fatal);
        assert_eq!(class.error_type, "ConfigError");
        assert_eq!(class.exit_code, 2);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = KresourError::FileMissing {
            path: "data/scanning.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let class = err.classify();
        assert!(class.startup_fatal);
        assert_eq!(class.error_type, "LoadError");
        assert_eq!(class.exit_code, 3);
    }

    #[test]
    fn test_malformed_file_is_load_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = KresourError::Malformed {
            file: "misc.json".into(),
            source,
        };
        assert_eq!(err.classify().error_type, "LoadError");
        assert!(err.to_string().contains("misc.json"));
    }

    #[test]
    fn test_index_out_of_range_is_runtime() {
        let err = KresourError::index_out_of_range("phase", 4, 2);
        let class = err.classify();
        assert!(!class.startup_fatal);
        assert_eq!(class.exit_code, 1);
        assert_eq!(err.to_string(), "phase index 4 out of range (len 2)");
    }
}
