//! Entry point. Window, GPU and event-loop setup live in [`math_animations::app`].

use std::process::ExitCode;

fn main() -> ExitCode {
    match math_animations::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
