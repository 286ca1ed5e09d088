// parser crate

pub mod crontab;

pub use crontab::{extract_command, is_special_schedule, validate_cron_syntax};
