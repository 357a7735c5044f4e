use crate::domain::models::{DiagnosticReport, JsonOut};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// The diagnostics report is its own envelope, so it is printed unwrapped.
pub fn print_report(json: bool, report: &DiagnosticReport) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", render_report(report));
    }
    Ok(())
}

fn badge(ok: bool) -> &'static str {
    if ok {
        "OK"
    } else {
        "Issue"
    }
}

pub fn render_report(report: &DiagnosticReport) -> String {
    let key_ok = report.checks.has_env_key || report.used_override_key;
    let mut lines = vec![
        format!("diagnostics: {}", if report.ok { "ok" } else { "failed" }),
        format!("key\t{}", badge(key_ok)),
        format!("api\t{}", badge(report.checks.api_reachable)),
        format!("channel\t{}", badge(report.checks.channel_found)),
    ];
    if let Some(channel) = &report.channel {
        if let Some(id) = &channel.id {
            lines.push(format!("channel_id: {}", id));
        }
        if let Some(title) = &channel.title {
            lines.push(format!("title: {}", title));
        }
        if let Some(url) = &channel.url {
            lines.push(format!("url: {}", url));
        }
    }
    if let Some(masked) = &report.key_masked {
        let source = if report.used_override_key {
            "override"
        } else {
            "env"
        };
        lines.push(format!("key_masked: {} ({})", masked, source));
    }
    if let Some(err) = &report.error {
        lines.push(format!("error: {}", err));
    }
    lines.join("\n")
}
