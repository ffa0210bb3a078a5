//! Command line driver of the linkage kinematics kernel.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
mod cli;
mod config;

fn main() -> std::process::ExitCode {
    cli::Entry::main()
}
