use std::process::exit;

use human_panic::setup_panic;
use log::error;

use file_rewrite::cli::{
    check_for_stdout_stream, get_log_file, get_matches, get_processing_options, get_verbosity,
};
use file_rewrite::constants::EXIT_PARTIAL_FAILURE;
use file_rewrite::prelude::*;

fn main() {
    setup_panic!();

    let matches = get_matches();

    let log_file = match get_log_file(&matches) {
        Ok(log_file) => log_file,
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };

    if let Err(e) = init_logger(get_verbosity(&matches), &log_file) {
        eprintln!("Failed to initialise logging: {e}");
        exit(1);
    }

    let status = match process_files(get_processing_options(&matches)) {
        Ok(report) => {
            println!("{}", render_summary(&report));
            if report.is_clean() {
                0
            } else {
                EXIT_PARTIAL_FAILURE
            }
        }
        Err(e) => {
            error!("{e:#}");
            1
        }
    };

    check_for_stdout_stream(&matches);

    exit(status);
}
