use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::checkout::DEFAULT_TIERS;
use crate::earnings::{AggregationPolicy, BucketZone};

/// Runtime settings: where records are read from and how they are aggregated.
///
/// Precedence, lowest first: defaults, `SUPPIT_*` environment variables,
/// command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) transactions_path: PathBuf,
    pub(crate) donations_path: PathBuf,
    pub(crate) policy: AggregationPolicy,
    pub(crate) creator_user: String,
    pub(crate) tiers: Vec<u32>,
}

impl Settings {
    /// Resolve settings from the process environment. Returns the settings and
    /// the arguments left over once global flags are consumed.
    pub(crate) fn from_env(args: &[String]) -> Result<(Self, Vec<String>)> {
        let data_dir = directories::ProjectDirs::from("com", "suppit", "SuppIt")
            .map(|dirs| dirs.data_dir().to_path_buf());
        let (settings, rest) =
            Self::resolve(args, |key| std::env::var(key).ok(), data_dir)?;
        debug!("Resolved settings: {settings:?}");
        Ok((settings, rest))
    }

    pub(crate) fn resolve(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Result<(Self, Vec<String>)> {
        let mut transactions_path = env("SUPPIT_TRANSACTIONS").map(PathBuf::from);
        let mut donations_path = env("SUPPIT_DONATIONS").map(PathBuf::from);
        let mut policy = AggregationPolicy {
            charges_only: env("SUPPIT_CHARGES_ONLY").is_some_and(|v| parse_flag(&v)),
            zone: match env("SUPPIT_TZ") {
                Some(v) => BucketZone::parse(&v)
                    .ok_or_else(|| anyhow::anyhow!("SUPPIT_TZ must be 'local' or 'utc', got '{v}'"))?,
                None => BucketZone::default(),
            },
        };
        let mut creator_user = env("SUPPIT_CREATOR").unwrap_or_default();
        let mut tiers = match env("SUPPIT_TIERS") {
            Some(v) => parse_tiers(&v).context("Invalid SUPPIT_TIERS")?,
            None => DEFAULT_TIERS.to_vec(),
        };

        let mut rest = Vec::new();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--transactions" => transactions_path = Some(PathBuf::from(value(&mut iter, arg)?)),
                "--donations" => donations_path = Some(PathBuf::from(value(&mut iter, arg)?)),
                "--creator" => creator_user = value(&mut iter, arg)?.to_string(),
                "--tiers" => tiers = parse_tiers(value(&mut iter, arg)?).context("Invalid --tiers")?,
                "--charges-only" => policy.charges_only = true,
                "--all-categories" => policy.charges_only = false,
                "--utc" => policy.zone = BucketZone::Utc,
                "--local" => policy.zone = BucketZone::Local,
                _ => rest.push(arg.clone()),
            }
        }

        let default_path = |file: &str| -> Result<PathBuf> {
            data_dir
                .as_ref()
                .map(|dir| dir.join(file))
                .ok_or_else(|| anyhow::anyhow!("Could not determine data directory; pass --{} <path>", file.trim_end_matches(".csv")))
        };
        let transactions_path = match transactions_path {
            Some(p) => p,
            None => default_path("transactions.csv")?,
        };
        let donations_path = match donations_path {
            Some(p) => p,
            None => default_path("donations.csv")?,
        };

        Ok((
            Self {
                transactions_path,
                donations_path,
                policy,
                creator_user,
                tiers,
            },
            rest,
        ))
    }
}

fn value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a str> {
    iter.next()
        .map(|s| s.as_str())
        .ok_or_else(|| anyhow::anyhow!("{flag} requires a value"))
}

fn parse_flag(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Comma-separated positive supp counts, e.g. `1,2,3`.
fn parse_tiers(s: &str) -> Result<Vec<u32>> {
    let tiers = s
        .split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<u32>() {
                Ok(n) if n >= 1 => Ok(n),
                _ => anyhow::bail!("'{part}' is not a positive whole number"),
            }
        })
        .collect::<Result<Vec<_>>>()?;
    if tiers.is_empty() {
        anyhow::bail!("at least one tier is required");
    }
    Ok(tiers)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
