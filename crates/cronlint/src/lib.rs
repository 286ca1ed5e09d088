use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use evaluator::ValidatorConfig;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

/// Help shown, or the crontab is valid
pub const EXIT_OK: i32 = 0;
/// Bad command line
pub const EXIT_USAGE: i32 = 2;
/// The crontab failed validation or could not be read
pub const EXIT_INVALID: i32 = 3;

#[derive(Debug, Parser)]
#[command(
    name = "cronlint",
    about = "Crontab file validator",
    version,
    long_about = "Validates the schedule syntax of every line in a crontab file and, optionally, that each referenced script or command exists.\n\nExamples:\n  cronlint /etc/crontab                      # Check schedule syntax only\n  cronlint ./crontab --check-scripts         # Also check scripts and commands\n  cronlint --debug ./crontab --check-scripts # Log every line and lookup"
)]
pub struct Cli {
    /// Path to the crontab file to validate
    pub crontab_file_path: Option<PathBuf>,

    /// Enable checking if scripts exist or commands are valid Unix/Linux commands
    #[arg(long)]
    pub check_scripts: bool,

    /// Run in verbose mode with detailed output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in debug mode with per-line details
    #[arg(short, long)]
    pub debug: bool,
}

/// Parse `args` (program name first), validate the crontab and write the
/// report to `out`. Returns the process exit code.
pub fn run<I, T, W>(args: I, out: &mut W) -> io::Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // --help wins over everything else on the line, valid or not
    if args.iter().skip(1).any(|arg| arg == "--help") {
        writeln!(out, "{}", Cli::command().render_long_help())?;
        return Ok(EXIT_OK);
    }

    let cli = match Cli::try_parse_from(args.iter().cloned()) {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write!(out, "{}", e)?;
                    Ok(EXIT_OK)
                }
                _ => {
                    write!(out, "{}", e)?;
                    Ok(EXIT_USAGE)
                }
            };
        }
    };

    if cli.debug {
        logging::set_log_level(logging::LogLevel::Debug);
        logging::debug("Debug mode enabled - showing detailed logs");
    } else if cli.verbose {
        logging::set_log_level(logging::LogLevel::Info);
        logging::info("Verbose mode enabled");
    } else {
        logging::set_log_level(logging::LogLevel::Warning);
    }

    let path = match cli.crontab_file_path {
        Some(path) => path,
        None => {
            writeln!(out, "Error: Missing required <crontab_file_path> argument.\n")?;
            return Ok(EXIT_USAGE);
        }
    };

    let config = ValidatorConfig {
        check_scripts: cli.check_scripts,
    };
    let result = evaluator::validate_crontab_file(&path, &config, cli.verbose || cli.debug);

    writeln!(out, "{}", result.message())?;
    Ok(if result.is_valid {
        EXIT_OK
    } else {
        EXIT_INVALID
    })
}
