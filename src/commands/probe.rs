use crate::*;

pub fn handle_probe_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Diagnose { channel, key } => {
            let api = HttpChannelApi::new(&settings.api_base, settings.timeout)?;
            let request = DiagnosticsRequest {
                channel: channel.clone(),
                override_key: key.clone(),
            };
            let report = run_diagnostics(&api, settings.api_key.as_deref(), &request);
            print_report(cli.json, &report)?;
        }
        Commands::Resolve { reference, key } => {
            let key = key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .or(settings.api_key.as_deref())
                .ok_or_else(|| anyhow::anyhow!(MISSING_KEY_ERROR))?;
            let api = HttpChannelApi::new(&settings.api_base, settings.timeout)?;
            let info = resolve(&api, reference, key)?;
            print_one(cli.json, info, |i| {
                if i.is_empty() {
                    return format!("channel not resolved: {}", reference);
                }
                format!(
                    "id: {}\ntitle: {}\nurl: {}",
                    i.id.as_deref().unwrap_or("n/a"),
                    i.title.as_deref().unwrap_or("n/a"),
                    i.url.as_deref().unwrap_or("n/a")
                )
            })?;
        }
        Commands::Classify { reference } => {
            let classified = classify(Some(reference.as_str()));
            print_one(cli.json, classified, |c| {
                format!("{}\t{}", c.kind(), c.value().unwrap_or(""))
            })?;
        }
    }
    Ok(())
}
