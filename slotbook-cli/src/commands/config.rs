use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use slotbook_core::config::SlotbookConfig;
use slotbook_core::summary::MeridiemLabels;

pub fn run(
    mut config: SlotbookConfig,
    labels: Option<String>,
    clear_labels: bool,
    share_app: Option<String>,
) -> Result<()> {
    let mut changed = false;

    if let Some(labels) = labels {
        config.labels = Some(parse_labels(&labels)?);
        changed = true;
    }
    if clear_labels {
        config.labels = None;
        changed = true;
    }
    if let Some(app) = share_app {
        let app = app.trim().to_string();
        config.share.app = if app.is_empty() { None } else { Some(app) };
        changed = true;
    }

    if changed {
        config.save()?;
        println!("{}", "Config saved".green());
    }

    let config_path = SlotbookConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    println!("  Database:  {}", config.database_path().display());

    println!("{}", "Summary".bold());
    match &config.labels {
        Some(labels) => println!("  Labels:    AM → {}, PM → {}", labels.am, labels.pm),
        None => println!("  Labels:    {}", "(none)".dimmed()),
    }
    match &config.share.app {
        Some(app) => println!("  Share app: {}", app),
        None => println!("  Share app: {}", "(stdout)".dimmed()),
    }

    Ok(())
}

fn parse_labels(input: &str) -> Result<MeridiemLabels> {
    let Some((am, pm)) = input.split_once(',') else {
        bail!("Expected labels as \"AM_LABEL,PM_LABEL\", got \"{}\"", input);
    };

    let (am, pm) = (am.trim(), pm.trim());
    if am.is_empty() || pm.is_empty() {
        bail!("Both AM and PM labels are required");
    }

    Ok(MeridiemLabels {
        am: am.to_string(),
        pm: pm.to_string(),
    })
}
