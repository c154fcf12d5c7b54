//! Entry point for the `helm` interpreter.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stderr = io::stderr();
    helm::run(
        std::env::args_os(),
        io::stdin().lock(),
        io::stdout().lock(),
        &mut stderr,
    )
}
