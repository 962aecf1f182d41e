// File: crates/demo/src/main.rs
// Summary: Demo loads a datetime,temp CSV, keeps one reading per day, and renders the trend PNG.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use log::info;
use trend_core::{host, Surface, TEMP_CHART_SURFACE};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let (labels, values) = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            println!("Using input file: {}", path.display());
            load_daily_temps(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No CSV given; plotting built-in sample week.");
            sample_week()
        }
    };
    println!("Plotting {} daily readings", values.len());

    {
        let mut host = host::global()
            .lock()
            .map_err(|_| anyhow!("global chart host poisoned"))?;
        host.register_surface(Surface::well_known());
    }

    host::render_temp_chart(&labels, &values)?;
    info!("temperature trend rendered");

    let out = PathBuf::from("target/out/temp_trend.png");
    {
        let host = host::global()
            .lock()
            .map_err(|_| anyhow!("global chart host poisoned"))?;
        let inst = host
            .controller(TEMP_CHART_SURFACE)
            .and_then(|c| c.instance())
            .context("no chart instance after render")?;
        inst.write_png(&out)?;
    }
    println!("Wrote {}", out.display());

    Ok(())
}

/// Load `datetime,temp` rows and reduce them to one label/value pair per
/// day (the daily high), labels formatted like "Aug 23".
fn load_daily_temps(path: &Path) -> Result<(Vec<String>, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_time = idx(&["datetime", "date", "time", "timestamp"])
        .ok_or_else(|| anyhow!("no datetime column in {:?}", headers))?;
    let i_temp = idx(&["temp", "temperature", "value"])
        .ok_or_else(|| anyhow!("no temperature column in {:?}", headers))?;

    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for rec in rdr.records() {
        let rec = rec?;
        let day = rec.get(i_time).and_then(parse_date);
        let temp = rec
            .get(i_temp)
            .and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(day), Some(temp)) = (day, temp) {
            days.entry(day)
                .and_modify(|high| *high = high.max(temp))
                .or_insert(temp);
        }
    }
    if days.is_empty() {
        anyhow::bail!("no usable rows loaded — check headers/delimiter.");
    }

    let labels = days.keys().map(|d| d.format("%b %d").to_string()).collect();
    let values = days.values().copied().collect();
    Ok((labels, values))
}

/// Accept `YYYY-MM-DD[ HH:MM:SS]`, ISO `T` separators, or epoch seconds.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(n) = s.parse::<i64>() {
        let secs = if n > 10_i64.pow(12) { n / 1000 } else { n }; // epoch ms -> sec
        return chrono::DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive());
    }
    None
}

fn sample_week() -> (Vec<String>, Vec<f64>) {
    let labels = ["Aug 23", "Aug 24", "Aug 25", "Aug 26", "Aug 27", "Aug 28", "Aug 29"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let values = vec![21.5, 23.0, 19.5, 18.0, 20.5, 24.0, 22.5];
    (labels, values)
}
