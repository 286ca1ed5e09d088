use crate::is_unix_command;
use models::{Issue, ValidationResult};
use std::path::Path;

/// Check that the script or command of a schedule line can be found.
///
/// The first word of `command` is resolved against `crontab_dir` (which must
/// be absolute). If nothing exists at the resolved path, the word is looked
/// up on the search path instead; failing both, a missing-script issue is
/// recorded. Independently of that outcome, a relative word always earns a
/// recommendation to use the absolute path.
pub fn validate_script_or_command(
    line_no: usize,
    command: &str,
    crontab_dir: &Path,
    result: &mut ValidationResult,
) {
    let script_path = match command.split_whitespace().next() {
        Some(word) => word,
        None => return,
    };
    let resolved_path = utils::resolve_path(script_path, crontab_dir);

    let script_exists = resolved_path.exists();
    let is_valid_command = !script_exists && is_unix_command(script_path);

    logging::debug(&format!(
        "Line {}: '{}' resolved to {} (exists: {}, command: {})",
        line_no,
        script_path,
        resolved_path.display(),
        script_exists,
        is_valid_command
    ));

    if !script_exists && !is_valid_command {
        result.add_issue(Issue::MissingScriptOrCommand {
            line_no,
            token: script_path.to_string(),
            resolved: resolved_path.clone(),
        });
    }

    if !Path::new(script_path).is_absolute() {
        result.add_issue(Issue::PathRecommendation {
            line_no,
            token: script_path.to_string(),
            absolute: resolved_path,
        });
    }
}
