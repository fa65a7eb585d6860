use std::process::ExitCode;

use clap::Parser;
use parm_pars_cli::cli_args::Args;
use parm_pars_core::alert::{self, Alerts};

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let alerts = Alerts::new(args.config());

    match parm_pars_cli::run(&args, alerts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            alert::report(&e);
            ExitCode::FAILURE
        }
    }
}
