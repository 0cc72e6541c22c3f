use clap::Parser;
use gpicker::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Piping into `head` should end quietly, not panic on a closed stdout
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
