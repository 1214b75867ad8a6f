pub const ISSUE_TRACKER_URL: &str = "https://github.com/djdeploy/djdeploy/issues/new";

/// Label attached to every issue filed from a crash report.
pub const ISSUE_LABEL: &str = "crash handler";

pub const REPORT_FILE_PREFIX: &str = "djdeploy-bug-report-";

pub const FILE_BUG_PROMPT: &str = "Would you like to file a bug? [y/N]: ";

pub const NOT_INSTALLED: &str = "Not installed or not on PATH";

pub const PYTHON_COMMAND: &str = "python3";

pub const GCLOUD_COMMAND: &str = "gcloud";

pub const GCLOUD_VERSION_ARGS: &[&str] = &["info", "--format=value(basic.version)"];

pub const DOCKER_COMMAND: &str = "docker";

pub const CLOUD_SQL_PROXY_COMMAND: &str = "cloud_sql_proxy";

pub const VERSION_ARGS: &[&str] = &["--version"];
