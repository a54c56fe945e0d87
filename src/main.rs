use std::process::ExitCode;

use cpdir::CpdirError;
use cpdir::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = cpdir::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // CpdirError already renders its io cause; anyhow contexts need the chain.
            let msg = match e.downcast_ref::<CpdirError>() {
                Some(ce) => ce.to_string(),
                None => format!("{e:#}"),
            };
            out::print_error(&msg);
            ExitCode::FAILURE
        }
    }
}
