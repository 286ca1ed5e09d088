use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // minute, hour, day-of-month, month, weekday, then the command.
    // The hour field reuses the minute bound (0-59).
    static ref STANDARD_SCHEDULE_REGEX: Regex = Regex::new(
        r"^(\*|([0-9]|[1-5][0-9]))\s+(\*|([0-9]|[1-5][0-9]))\s+(\*|([1-9]|[1-2][0-9]|3[0-1]))\s+(\*|(1[0-2]|[1-9]))\s+(\*|([0-6]))\s+.+$"
    )
    .expect("Failed to compile standard cron schedule regex");
    static ref SPECIAL_SCHEDULE_REGEX: Regex =
        Regex::new(r"^@(reboot|hourly|daily|weekly|monthly|yearly|annually)\s+.+$")
            .expect("Failed to compile special cron schedule regex");
}

/// Number of time fields preceding the command in the standard form
const SCHEDULE_FIELDS: usize = 5;

/// Check a trimmed, non-comment crontab line against the supported schedule
/// forms: five single-value-or-`*` fields, or an `@keyword`, each followed by
/// a command.
pub fn validate_cron_syntax(line: &str) -> bool {
    STANDARD_SCHEDULE_REGEX.is_match(line) || SPECIAL_SCHEDULE_REGEX.is_match(line)
}

pub fn is_special_schedule(line: &str) -> bool {
    line.starts_with('@')
}

/// Return the command portion (script path plus arguments) of a line that
/// already passed `validate_cron_syntax`. Whitespace runs between arguments
/// collapse to a single space.
pub fn extract_command(line: &str) -> String {
    let skip = if is_special_schedule(line) {
        1
    } else {
        SCHEDULE_FIELDS
    };

    line.split_whitespace()
        .skip(skip)
        .collect::<Vec<_>>()
        .join(" ")
}
