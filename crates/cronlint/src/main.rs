use std::io;
use std::process;

fn main() {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cronlint_lib::run(std::env::args_os(), &mut out) {
        Ok(code) => process::exit(code),
        Err(e) => {
            logging::error(&format!("Failed to write report: {}", e));
            process::exit(cronlint_lib::EXIT_INVALID);
        }
    }
}
