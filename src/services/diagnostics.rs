use crate::domain::constants::{DEFAULT_CHANNEL_ID, MISSING_KEY_ERROR, PROBE_CHANNEL_ID};
use crate::domain::models::{ChannelInfo, DiagnosticChecks, DiagnosticDebug, DiagnosticReport};
use crate::platform::{ChannelApi, TransportError};
use crate::services::masking::mask_key;
use crate::services::resolver::resolve;

/// Inputs of one `diagnose` run. Empty strings count as not supplied, and so do
/// whitespace-only keys.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsRequest {
    pub channel: Option<String>,
    pub override_key: Option<String>,
}

fn present(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.is_empty())
}

fn present_key(v: Option<&str>) -> Option<&str> {
    v.map(str::trim).filter(|s| !s.is_empty())
}

/// Probe reachability, resolve the channel and fold both into a report.
///
/// Never fails: transport faults become a report with `ok = false` and `error` set.
pub fn run_diagnostics(
    api: &dyn ChannelApi,
    configured_key: Option<&str>,
    request: &DiagnosticsRequest,
) -> DiagnosticReport {
    let configured_key = present_key(configured_key);
    let override_key = present_key(request.override_key.as_deref());
    let mut checks = DiagnosticChecks {
        has_env_key: configured_key.is_some(),
        ..DiagnosticChecks::default()
    };

    let Some(key) = override_key.or(configured_key) else {
        tracing::warn!("no api key configured and no override supplied");
        return DiagnosticReport {
            ok: false,
            checks,
            channel: None,
            key_masked: None,
            used_override_key: false,
            error: Some(MISSING_KEY_ERROR.to_string()),
            debug: None,
        };
    };
    let key_masked = mask_key(key);
    let used_override_key = override_key.is_some();
    tracing::info!(
        key = key_masked.as_deref().unwrap_or_default(),
        used_override_key,
        "running diagnostics"
    );

    let channel_ref = present(request.channel.as_deref()).unwrap_or(DEFAULT_CHANNEL_ID);
    let outcome = probe_and_resolve(api, channel_ref, key, &mut checks);

    match outcome {
        Ok(channel) => DiagnosticReport {
            ok: checks.has_env_key || used_override_key,
            checks,
            channel: Some(channel.clone()),
            key_masked,
            used_override_key,
            error: None,
            debug: Some(DiagnosticDebug {
                resolved_channel: channel,
            }),
        },
        Err(e) => {
            tracing::warn!(error = %e, "diagnostics aborted by transport fault");
            DiagnosticReport {
                ok: false,
                checks,
                channel: None,
                key_masked,
                used_override_key,
                error: Some(e.to_string()),
                debug: None,
            }
        }
    }
}

fn probe_and_resolve(
    api: &dyn ChannelApi,
    channel_ref: &str,
    key: &str,
    checks: &mut DiagnosticChecks,
) -> Result<ChannelInfo, TransportError> {
    checks.api_reachable = api.ping(PROBE_CHANNEL_ID, key)?.is_accepted();
    tracing::info!(reachable = checks.api_reachable, "reachability probe finished");

    let channel = resolve(api, channel_ref, key)?;
    checks.channel_found = channel.id.is_some();
    Ok(channel)
}
