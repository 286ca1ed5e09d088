use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Message reported when a crontab produced no issues.
pub const VALID_MESSAGE: &str = "The crontab file is valid.";

/// Terminal failures that stop validation before any line is processed
#[derive(Error, Debug)]
pub enum CrontabError {
    #[error("Error: File '{path}' not found.")]
    FileNotFound { path: String },

    #[error("Error: Permission denied for file '{path}'.")]
    PermissionDenied { path: String },

    #[error("Error: Failed to read file '{path}': {source}.")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CrontabError {
    pub fn from_io(path: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CrontabError::FileNotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => CrontabError::PermissionDenied {
                path: path.to_string(),
            },
            _ => CrontabError::Read {
                path: path.to_string(),
                source: err,
            },
        }
    }
}

/// A single physical line of a crontab file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrontabLine<'a> {
    /// 1-based, counted over every line including blanks and comments
    pub number: usize,
    pub raw: &'a str,
    pub content: &'a str,
}

impl<'a> CrontabLine<'a> {
    pub fn new(number: usize, raw: &'a str) -> Self {
        CrontabLine {
            number,
            raw,
            content: raw.trim(),
        }
    }

    /// Blank lines and `#` comments carry no schedule
    pub fn is_ignorable(&self) -> bool {
        self.content.is_empty() || self.content.starts_with('#')
    }
}

/// A per-line finding, rendered with `Display` exactly as reported to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Syntax {
        line_no: usize,
        line: String,
    },
    MissingScriptOrCommand {
        line_no: usize,
        token: String,
        resolved: PathBuf,
    },
    /// Advisory only, but still counted against the file
    PathRecommendation {
        line_no: usize,
        token: String,
        absolute: PathBuf,
    },
}

impl Issue {
    pub fn line_no(&self) -> usize {
        match self {
            Issue::Syntax { line_no, .. }
            | Issue::MissingScriptOrCommand { line_no, .. }
            | Issue::PathRecommendation { line_no, .. } => *line_no,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Syntax { line_no, line } => {
                write!(f, "Syntax error on line {}: {}", line_no, line)
            }
            Issue::MissingScriptOrCommand {
                line_no,
                token,
                resolved,
            } => write!(
                f,
                "Non-existing script or invalid command on line {}: {} (resolved path: {})",
                line_no,
                token,
                resolved.display()
            ),
            Issue::PathRecommendation {
                line_no,
                token,
                absolute,
            } => write!(
                f,
                "Recommendation: Use absolute file paths to avoid ambiguity. Replace '{}' with '{}' on line {}.",
                token,
                absolute.display(),
                line_no
            ),
        }
    }
}

#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    issues: Vec<Issue>,
    failure: Option<CrontabError>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            is_valid: true,
            issues: Vec::new(),
            failure: None,
        }
    }

    /// A result for a file that could not be opened at all
    pub fn from_error(err: CrontabError) -> Self {
        ValidationResult {
            is_valid: false,
            issues: Vec::new(),
            failure: Some(err),
        }
    }

    pub fn add_issue(&mut self, issue: Issue) {
        self.is_valid = false;
        self.issues.push(issue);
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// The joined report: the open failure, every issue in encounter order,
    /// or the fixed success message
    pub fn message(&self) -> String {
        if let Some(err) = &self.failure {
            return err.to_string();
        }

        if self.issues.is_empty() {
            return VALID_MESSAGE.to_string();
        }

        self.issues
            .iter()
            .map(|issue| issue.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
