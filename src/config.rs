use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use url::Url;

use crate::scraping::constants::*;

#[derive(Debug)]
pub struct Config {
    pub url: Url,
    pub output_file: PathBuf,
    pub target_cities: HashSet<String>,
    /// Inclusive upper bound on the earliest slot date.
    pub cutoff: Option<NaiveDate>,
    /// CI key/value file, only present when running under a pipeline.
    pub github_output: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // unset and blank are treated the same
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_url = get(URL_ENV).unwrap_or_else(|| BASE_URL.to_string());
        let url = Url::parse(raw_url.trim())
            .with_context(|| format!("{URL_ENV} is not a valid URL: {raw_url}"))?;

        let output_file = get(OUTPUT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(OUTPUT_FILE));

        let target_cities = match get(CITIES_ENV) {
            Some(raw) => parse_cities(&raw),
            None => TARGET_CITIES.iter().map(|city| city.to_string()).collect(),
        };

        let cutoff = get(CUTOFF_ENV)
            .map(|raw| {
                NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                    .with_context(|| format!("{CUTOFF_ENV} must be YYYY-MM-DD, got {raw}"))
            })
            .transpose()?;

        let github_output = get(GITHUB_OUTPUT_ENV).map(PathBuf::from);

        Ok(Config {
            url,
            output_file,
            target_cities,
            cutoff,
            github_output,
        })
    }
}

fn parse_cities(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .map(str::to_string)
        .collect()
}
