use std::process::ExitCode;

use tracing::error;
use tsv2json::{JsonOpts, TsvOpts};

fn main() -> ExitCode {
    tsv2json::logging::init();
    match tsv2json::run::<TsvOpts, JsonOpts>() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
