use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

use rift_rewind_lib::{Cluster, LookupResult, MasteryEntry, SUPPORTED_REGIONS};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct RegionRow {
    region: &'static str,
    cluster: Cluster,
}

/// Render a lookup result as a short human-readable summary.
pub fn render_lookup_text(result: &LookupResult) -> String {
    let summoner = &result.summoner;
    let mut out = String::new();

    let _ = writeln!(out, "{} (level {})", summoner.name, summoner.level);
    let _ = writeln!(out, "PUUID: {}", summoner.puuid);
    match summoner.profile_icon_id {
        Some(icon) => {
            let _ = writeln!(out, "Profile icon: {}", icon);
        }
        None => {
            let _ = writeln!(out, "Profile icon: none");
        }
    }

    if result.top_champions.is_empty() {
        let _ = writeln!(out, "Top champions: unavailable");
        return out;
    }

    let _ = writeln!(out, "Top champions:");
    for (rank, entry) in result.top_champions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", rank + 1, describe_mastery(entry));
    }
    out
}

fn describe_mastery(entry: &MasteryEntry) -> String {
    let field = |name: &str| entry.get(name).and_then(Value::as_i64);
    match (
        field("championId"),
        field("championLevel"),
        field("championPoints"),
    ) {
        (Some(id), Some(level), Some(points)) => {
            format!("champion {} - mastery {}, {} points", id, level, points)
        }
        (Some(id), _, _) => format!("champion {}", id),
        _ => entry.to_string(),
    }
}

/// Render the region routing table.
pub fn render_regions(format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<RegionRow> = SUPPORTED_REGIONS
                .iter()
                .map(|&(region, cluster)| RegionRow { region, cluster })
                .collect();
            serde_json::to_string_pretty(&rows)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (region, cluster) in SUPPORTED_REGIONS {
                let _ = writeln!(out, "{:<5} -> {}", region, cluster);
            }
            Ok(out)
        }
    }
}
