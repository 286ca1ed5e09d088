/// Check whether the first word of `command` resolves to an executable on
/// the search path. Words containing a path separator are checked relative
/// to the current directory instead.
pub fn is_unix_command(command: &str) -> bool {
    match command.split_whitespace().next() {
        Some(executable) => which::which(executable).is_ok(),
        None => false,
    }
}
