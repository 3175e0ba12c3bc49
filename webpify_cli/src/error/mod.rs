use colored::*;
use std::error::Error as StdError;
use std::fmt;
use std::path::Path;
use webpify_core::DiscoveryError;

/// Run-level error with a semantic exit code
#[derive(Debug)]
pub struct CliError {
    /// The main error message
    message: String,

    /// Error category for exit code determination
    category: ErrorCategory,

    /// Additional context information
    context: Vec<(String, String)>,

    /// Suggestions for recovery
    pub suggestions: Vec<String>,

    /// Source error if any
    source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Error categories that map to exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorCategory {
    General,
    PathNotFound,
    Discovery,
}

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    PathNotFound = 2,
    DiscoveryFailed = 3,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Extension trait for adding context to errors
pub trait ErrorContext {
    fn with_context(self, key: &str, value: &str) -> Self;
    fn with_suggestion(self, suggestion: &str) -> Self;
    fn with_source(self, source: Box<dyn StdError + Send + Sync>) -> Self;
}

impl CliError {
    fn new(message: String, category: ErrorCategory) -> Self {
        Self {
            message,
            category,
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Create a general error
    pub fn general(message: &str) -> Self {
        Self::new(message.to_string(), ErrorCategory::General)
    }

    /// The input path does not exist
    pub fn path_not_found(path: &Path) -> Self {
        Self::new(
            format!("path '{}' does not exist", path.display()),
            ErrorCategory::PathNotFound,
        )
        .with_context("path", &path.display().to_string())
        .with_suggestion("Verify you have the correct path")
    }

    /// The input path exists but could not be checked
    pub fn path_check_failed(path: &Path, error: std::io::Error) -> Self {
        let mut cli_error = Self::new(
            format!("error checking path '{}': {error}", path.display()),
            ErrorCategory::General,
        )
        .with_context("path", &path.display().to_string());

        if error.kind() == std::io::ErrorKind::PermissionDenied {
            cli_error = cli_error.with_suggestion("Check file permissions");
        }
        cli_error.with_source(Box::new(error))
    }

    /// File discovery failed as a whole
    pub fn discovery(error: DiscoveryError) -> Self {
        Self::new(
            format!("error finding files: {error}"),
            ErrorCategory::Discovery,
        )
        .with_context("path", &error.path().display().to_string())
        .with_source(Box::new(error))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.category {
            ErrorCategory::General => ExitCode::GeneralError,
            ErrorCategory::PathNotFound => ExitCode::PathNotFound,
            ErrorCategory::Discovery => ExitCode::DiscoveryFailed,
        }
    }

    /// Format the error for user display
    pub fn format_for_user(&self, debug: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}: {}\n", "CRITICAL".red().bold(), self.message));

        if debug && !self.context.is_empty() {
            output.push_str("\nContext:\n");
            for (key, value) in &self.context {
                output.push_str(&format!("  {}: {}\n", key.bold(), value));
            }
        }

        // Error chain in debug mode
        if debug && let Some(source) = &self.source {
            output.push_str("\nCaused by:\n");
            let mut current: Option<&dyn StdError> = Some(source.as_ref());
            let mut level = 1;

            while let Some(err) = current {
                output.push_str(&format!("  {level}: {err}\n"));
                current = err.source();
                level += 1;
            }
        }

        if !self.suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in &self.suggestions {
                output.push_str(&format!("  - {suggestion}\n"));
            }
        }

        output
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for CliError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl ErrorContext for CliError {
    fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.push((key.to_string(), value.to_string()));
        self
    }

    fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestions.push(suggestion.to_string());
        self
    }

    fn with_source(mut self, source: Box<dyn StdError + Send + Sync>) -> Self {
        self.source = Some(source);
        self
    }
}

/// Convert anyhow errors to CLI errors
impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> Self {
        Self::general(&format!("{error:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_path_not_found_exit_code() {
        let error = CliError::path_not_found(Path::new("/no/such/place"));

        assert_eq!(error.exit_code(), ExitCode::PathNotFound);
        assert_eq!(error.exit_code().code(), 2);
        assert_eq!(error.to_string(), "path '/no/such/place' does not exist");
    }

    #[test]
    fn test_discovery_exit_code_and_chain() {
        let error = CliError::discovery(DiscoveryError::SymlinkResolution {
            path: PathBuf::from("loop"),
            source: io::Error::other("too many levels of symbolic links"),
        });

        assert_eq!(error.exit_code().code(), 3);
        assert!(error.message().starts_with("error finding files:"));
        assert!(error.source().is_some());

        colored::control::set_override(false);
        let rendered = error.format_for_user(true);
        assert!(rendered.starts_with("CRITICAL: error finding files"));
        assert!(rendered.contains("Caused by:"));
        assert!(rendered.contains("too many levels of symbolic links"));
    }

    #[test]
    fn test_path_check_failed_is_general() {
        let error = CliError::path_check_failed(
            Path::new("/root/secret"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(error.exit_code(), ExitCode::GeneralError);
        assert!(error.to_string().contains("error checking path"));
        assert_eq!(error.suggestions, vec!["Check file permissions".to_string()]);
    }

    #[test]
    fn test_from_anyhow() {
        let error: CliError = anyhow::anyhow!("boom").into();
        assert_eq!(error.exit_code().code(), 1);
    }
}
