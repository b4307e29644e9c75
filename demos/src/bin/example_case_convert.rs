use std::process::ExitCode;

use clap::Parser;
use demos::{
    cli::{Args, run},
    init_logging,
};
use log::error;

fn main() -> ExitCode {
    init_logging();

    match run(Args::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
