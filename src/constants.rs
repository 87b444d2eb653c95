/// Constants used throughout the application
///
/// This module centralises the identifiers, defaults and help strings so the
/// CLI and the configuration loader agree on them.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the platform configuration directory, where a missing
/// configuration file and the default log file are looked up.
pub const APPLICATION: &str = "file_rewrite";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "rewrite.yaml";

/// Default name of the log file
pub const LOG_FILE_DEFAULT: &str = "file_rewrite.log";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read rules from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Report what would change without writing any file";

/// Help text for the parallel command-line option
pub const PARALLEL_HELP: &str = "Process files concurrently";

/// Help text for the report command-line option
pub const REPORT_HELP: &str = "Write a YAML report of the run to this file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the quiet command-line option
pub const QUIET_HELP: &str = "Only print errors";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Name of the log file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Keep the log file in the working directory instead of the config directory";

/// Help text for the pause command-line option
pub const PAUSE_HELP: &str = "Wait for Enter before exiting when run from a terminal";

/// Exit status used when the run completed but some files failed
pub const EXIT_PARTIAL_FAILURE: i32 = 2;
