use std::path::PathBuf;

use atty::Stream;
use clap::{
    command, crate_authors, crate_description, crate_name, crate_version, Arg, ArgMatches, Command,
};

use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, DRY_RUN_HELP, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT,
    LOG_FILE_HELP, PARALLEL_HELP, PAUSE_HELP, QUIET_HELP, REPORT_HELP, VERBOSE_HELP,
};
use crate::errors::{generic_error, Result};
use crate::logging::LogLevel;
use crate::utils::find_project_folder;
use crate::workflow::ProcessingOptions;

/// Waits for user input if stdout is a terminal and `--pause` was given
///
/// This keeps the console window open when the program is started from a GUI.
pub fn check_for_stdout_stream(matches: &ArgMatches) {
    if matches.get_flag("pause") && atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Defines the command-line interface
///
/// Defines the following arguments:
/// - `config`: Path to the configuration file
/// - `dry`: Report changes without writing
/// - `parallel`: Process files concurrently
/// - `report`: Write a YAML report
/// - `verbose` / `quiet`: Verbosity level
/// - `log_file` / `log_locally`: Log file location
/// - `pause`: Wait for Enter before exiting
pub fn build_command() -> Command {
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    let arg_parallel = Arg::new("parallel")
        .short('j')
        .long("parallel")
        .help(PARALLEL_HELP)
        .action(clap::ArgAction::SetTrue);

    let arg_report = Arg::new("report")
        .short('r')
        .long("report")
        .value_name("FILE")
        .help(REPORT_HELP);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    let arg_quiet = Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help(QUIET_HELP)
        .action(clap::ArgAction::SetTrue);

    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(clap::ArgAction::SetTrue);

    let arg_pause = Arg::new("pause")
        .short('p')
        .long("pause")
        .help(PAUSE_HELP)
        .action(clap::ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_config)
        .arg(arg_dry)
        .arg(arg_parallel)
        .arg(arg_report)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .arg(arg_quiet)
        .arg(arg_pause)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the command-line arguments
///
/// # Examples
/// ```
/// # use file_rewrite::cli::{build_command, get_verbosity};
/// # use file_rewrite::logging::LogLevel;
/// let matches = build_command().get_matches_from(["frewrite", "-vv"]);
/// assert_eq!(get_verbosity(&matches), LogLevel::Trace);
/// ```
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_flags(matches.get_count("verbose"), matches.get_flag("quiet"))
}

/// Resolves the log file path
///
/// Without `--log-locally` the file lives in the platform config directory.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        let path = folder.config_dir().join(filename);
        let path_str = path
            .as_path()
            .to_str()
            .ok_or_else(|| generic_error(&format!("Failed to convert path to string: {path:?}")))?;
        Ok(path_str.to_string())
    }
}

/// Builds the workflow options from the command-line arguments
pub fn get_processing_options(matches: &ArgMatches) -> ProcessingOptions {
    let config_path = matches
        .get_one::<String>("config")
        .cloned()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    ProcessingOptions {
        config_path: PathBuf::from(config_path),
        dry_run: matches.get_flag("dry"),
        parallel: matches.get_flag("parallel"),
        report_path: matches.get_one::<String>("report").map(PathBuf::from),
    }
}
