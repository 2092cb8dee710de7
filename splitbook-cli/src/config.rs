use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use splitbook_core::DEFAULT_MAX_BATCH;
use splitbook_ingest::StatementFormat;
use std::fs;
use std::path::PathBuf;

use crate::state::{ensure_splitbook_home, splitbook_home};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub import: ImportSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSection {
    /// Format key used when `--format` is not given; empty means detect
    pub default_format: String,
    /// IANA zone used to anchor dates at midday in CSV output
    pub timezone: String,
    /// Most expenses accepted in one batch
    pub max_batch: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: String,
}

impl Default for ImportSection {
    fn default() -> Self {
        Self {
            default_format: String::new(),
            timezone: "America/Chicago".to_string(),
            max_batch: DEFAULT_MAX_BATCH,
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl ImportSection {
    pub fn default_format(&self) -> Result<Option<StatementFormat>> {
        let key = self.default_format.trim();
        if key.is_empty() {
            return Ok(None);
        }
        let format = key
            .parse::<StatementFormat>()
            .with_context(|| format!("config import.default_format = {key:?}"))?;
        Ok(Some(format))
    }

    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| anyhow::anyhow!("invalid timezone in config: {}", self.timezone))
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(splitbook_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(s).context("parse config.toml")?;
    cfg.import.default_format()?;
    cfg.import.timezone()?;
    Ok(cfg)
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_splitbook_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let written = save_config(&Config::default())?;
    println!("Wrote {}", written.display());
    Ok(())
}

pub fn show_config(cfg: &Config) -> Result<()> {
    println!("# {}", config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg).context("serialize config")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.import.max_batch, DEFAULT_MAX_BATCH);
        assert_eq!(cfg.import.timezone, "America/Chicago");
        assert_eq!(cfg.import.default_format().unwrap(), None);
        assert_eq!(cfg.log.level, "warn");
    }

    #[test]
    fn test_partial_config() {
        let cfg = parse_config("[import]\ndefault_format = \"capital-one\"\nmax_batch = 50\n").unwrap();
        assert_eq!(
            cfg.import.default_format().unwrap(),
            Some(StatementFormat::CapitalOne)
        );
        assert_eq!(cfg.import.max_batch, 50);
        assert_eq!(cfg.import.timezone, "America/Chicago");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_config("[import]\ndefault_format = \"amex\"\n").is_err());
        assert!(parse_config("[import]\ntimezone = \"Mars/Olympus\"\n").is_err());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        let cfg = parse_config(&s).unwrap();
        assert_eq!(cfg.import.max_batch, DEFAULT_MAX_BATCH);
    }
}
