//! Drives a fallible asynchronous entry point to completion and turns its
//! outcome into a process exit code: 0 on success, 1 on failure with the
//! reason written to stderr.

use std::fmt::Display;
use std::future::Future;

/// Never returns. A failure to construct the runtime is reported the same
/// way as a failure of `main` itself.
pub fn run_main<F, E>(main: F) -> !
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    let outcome = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| error.to_string())
        .and_then(|runtime| {
            runtime
                .block_on(main)
                .map_err(|reason| reason.to_string())
        });
    std::process::exit(report(outcome));
}

/// The exit code for an outcome, writing the failure reason to stderr first.
fn report(outcome: Result<(), String>) -> i32 {
    match outcome {
        Ok(()) => 0,
        Err(reason) => {
            eprintln!("{}", reason);
            1
        }
    }
}
