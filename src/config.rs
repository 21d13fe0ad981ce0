// src/config.rs

use anyhow::{Context, Result};
use std::{env, str::FromStr};
use url::Url;

use crate::fetch::DEFAULT_SHEET_URL;

/// Cache lifetimes, in seconds, advertised on successful responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    pub max_age: u32,
    pub s_maxage: u32,
    pub stale_while_revalidate: u32,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            max_age: 300,
            s_maxage: 3600,
            stale_while_revalidate: 86400,
        }
    }
}

impl CachePolicy {
    /// Browser + shared cache directive.
    pub fn cache_control(&self) -> String {
        format!(
            "public, max-age={}, s-maxage={}, stale-while-revalidate={}",
            self.max_age, self.s_maxage, self.stale_while_revalidate
        )
    }

    /// Directive for the CDN edge only.
    pub fn cdn_cache_control(&self) -> String {
        format!(
            "public, max-age={}, stale-while-revalidate={}",
            self.s_maxage, self.stale_while_revalidate
        )
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub sheet_url: Url,
    pub port: u16,
    pub log_level: String,
    pub cache: CachePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_url: Url::parse(DEFAULT_SHEET_URL).expect("default sheet URL should parse"),
            port: 8080,
            log_level: "info".to_string(),
            cache: CachePolicy::default(),
        }
    }
}

impl Config {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();

        if let Some(raw) = lookup("SHEET_URL") {
            cfg.sheet_url =
                Url::parse(&raw).with_context(|| format!("parsing SHEET_URL {:?}", raw))?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            cfg.log_level = level;
        }
        cfg.port = parse_or(&lookup, "PORT", cfg.port)?;
        cfg.cache.max_age = parse_or(&lookup, "CACHE_MAX_AGE", cfg.cache.max_age)?;
        cfg.cache.s_maxage = parse_or(&lookup, "CACHE_S_MAXAGE", cfg.cache.s_maxage)?;
        cfg.cache.stale_while_revalidate = parse_or(
            &lookup,
            "CACHE_STALE_WHILE_REVALIDATE",
            cfg.cache.stale_while_revalidate,
        )?;

        Ok(cfg)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("parsing {} {:?}", key, raw)),
        None => Ok(default),
    }
}
