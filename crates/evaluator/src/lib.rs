use colored::*;
use models::{CrontabError, CrontabLine, Issue, ValidationResult};
use std::fs;
use std::path::Path;

/// Options controlling how deeply each schedule line is checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Verify that each line's script exists or its command is on the search path
    pub check_scripts: bool,
}

/// Validate a single non-blank, non-comment line. A syntax error stops any
/// further checks on that line.
pub fn validate_crontab_line(
    line: &CrontabLine<'_>,
    crontab_dir: &Path,
    config: &ValidatorConfig,
    result: &mut ValidationResult,
) {
    if !parser::validate_cron_syntax(line.content) {
        logging::debug(&format!("Line {}: syntax error", line.number));
        result.add_issue(Issue::Syntax {
            line_no: line.number,
            line: line.content.to_string(),
        });
        return;
    }

    if config.check_scripts {
        let command = parser::extract_command(line.content);
        validators::validate_script_or_command(line.number, &command, crontab_dir, result);
    }
}

/// Validate crontab text that has already been read. Relative script paths
/// resolve against `crontab_dir`, which must be absolute.
pub fn validate_crontab_content(
    content: &str,
    crontab_dir: &Path,
    config: &ValidatorConfig,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (idx, raw) in split_lines(content).into_iter().enumerate() {
        let line = CrontabLine::new(idx + 1, raw);
        if line.is_ignorable() {
            continue;
        }

        logging::debug(&format!("Checking line {}: {:?}", line.number, line.raw));
        validate_crontab_line(&line, crontab_dir, config, &mut result);
    }

    result
}

/// Read and validate a crontab file. Failing to open or read the file yields
/// a failed result carrying only that error.
pub fn validate_crontab_file(
    path: &Path,
    config: &ValidatorConfig,
    verbose: bool,
) -> ValidationResult {
    let display_path = path.display().to_string();
    logging::info(&format!("Validating crontab file: {}", display_path));

    let result = match load_crontab(path) {
        Ok((content, crontab_dir)) => validate_crontab_content(&content, &crontab_dir, config),
        Err(err) => {
            logging::error(&err.to_string());
            return ValidationResult::from_error(err);
        }
    };

    if result.is_valid {
        if verbose {
            logging::info(&format!(
                "{} Validated crontab file: {}",
                "✓".green(),
                display_path
            ));
        }
    } else {
        logging::info(&format!(
            "{} {} issue(s) found in {}",
            "✗".red(),
            result.issues().len(),
            display_path
        ));
    }

    result
}

/// Split text into physical lines, breaking on `\n`, `\r\n` and a lone `\r`.
/// A trailing line break does not start an extra line.
fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'\n' => {
                lines.push(&content[start..idx]);
                idx += 1;
                start = idx;
            }
            b'\r' => {
                lines.push(&content[start..idx]);
                idx += if bytes.get(idx + 1) == Some(&b'\n') { 2 } else { 1 };
                start = idx;
            }
            _ => idx += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&content[start..]);
    }

    lines
}

fn load_crontab(path: &Path) -> Result<(String, std::path::PathBuf), CrontabError> {
    let display_path = path.display().to_string();

    let crontab_dir = utils::crontab_dir(path).map_err(|source| CrontabError::Read {
        path: display_path.clone(),
        source,
    })?;

    let bytes = fs::read(path).map_err(|e| CrontabError::from_io(&display_path, e))?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            logging::warning(&format!(
                "{} is not valid UTF-8; invalid bytes will be replaced",
                display_path
            ));
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    Ok((content, crontab_dir))
}
