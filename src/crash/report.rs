//! Bug report rendering for crashes.
//!
//! The issue body is a fixed template with `{{variable}}` placeholders,
//! rendered against diagnostics gathered at crash time.

use std::collections::BTreeMap;

use url::Url;

use super::config::*;
use super::probe::probe_tool;

const ISSUE_TEMPLATE: &str = include_str!("template/issue_template.md");

/// Variables available for `{{variable}}` interpolation.
#[derive(Debug, Default, Clone)]
pub struct TemplateContext {
    vars: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Context describing the current environment and the failed `command`.
    pub fn for_crash(command: &str, error: &anyhow::Error) -> Self {
        let mut ctx = Self::new();
        ctx.set("djdeploy_version", env!("CARGO_PKG_VERSION"));
        ctx.set("command", command);
        ctx.set("platform", platform());
        ctx.set("python_version", probe_tool(PYTHON_COMMAND, VERSION_ARGS));
        ctx.set("gcloud_version", probe_tool(GCLOUD_COMMAND, GCLOUD_VERSION_ARGS));
        ctx.set("docker_version", probe_tool(DOCKER_COMMAND, VERSION_ARGS));
        ctx.set(
            "cloud_sql_proxy_version",
            probe_tool(CLOUD_SQL_PROXY_COMMAND, VERSION_ARGS),
        );
        // Alternate form prints the cause chain without a backtrace.
        ctx.set("error", format!("{error:#}"));
        ctx
    }
}

/// Replace `{{key}}` placeholders in `input` with values from `ctx` in a
/// single left-to-right pass. Substituted values are never rescanned, and
/// placeholders without a value are left as they are.
pub fn interpolate(input: &str, ctx: &TemplateContext) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find("{{") {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            result.push_str(&rest[open..]);
            return result;
        };

        let key = &after_open[..close];
        match ctx.vars.get(key.trim()) {
            Some(value) => result.push_str(value),
            None => {
                result.push_str("{{");
                result.push_str(key);
                result.push_str("}}");
            }
        }
        rest = &after_open[close + 2..];
    }

    result.push_str(rest);
    result
}

pub fn render_issue_body(ctx: &TemplateContext) -> String {
    interpolate(ISSUE_TEMPLATE, ctx)
}

pub fn issue_title(kind: &str, error: &anyhow::Error, command: &str) -> String {
    format!("{kind}:{error} during \"{command}\"")
}

/// Tracker URL that opens a new issue pre-filled with `title` and `body`.
pub fn issue_url(title: &str, body: &str) -> Result<String, url::ParseError> {
    let url = Url::parse_with_params(
        ISSUE_TRACKER_URL,
        &[("title", title), ("body", body), ("labels", ISSUE_LABEL)],
    )?;
    Ok(url.into())
}

fn platform() -> String {
    format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}
