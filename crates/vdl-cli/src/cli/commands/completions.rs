//! `vdl completions <shell>`.

use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

use crate::cli::Cli;

pub fn run_completions(shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "vdl", &mut io::stdout());
}
