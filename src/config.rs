use std::env;

use anyhow::Context;
use chrono::{FixedOffset, Offset, Utc};

/// Tehran, +03:30.
pub const DEFAULT_DISPLAY_OFFSET_MINUTES: i32 = 210;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Wall-clock offset used to show and read admin timestamps.
    pub display_offset: FixedOffset,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let display_offset = match env::var("DISPLAY_UTC_OFFSET_MINUTES") {
            Ok(raw) => parse_display_offset(&raw)?,
            Err(_) => default_display_offset(),
        };
        Ok(Self {
            port,
            database_url,
            host,
            display_offset,
        })
    }
}

pub fn default_display_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_DISPLAY_OFFSET_MINUTES * 60).unwrap_or_else(|| Utc.fix())
}

/// Parses a whole number of minutes east of UTC, e.g. `210` or `-300`.
pub fn parse_display_offset(raw: &str) -> anyhow::Result<FixedOffset> {
    let minutes = raw
        .trim()
        .parse::<i32>()
        .with_context(|| format!("DISPLAY_UTC_OFFSET_MINUTES is not a number: {raw}"))?;
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| anyhow::anyhow!("DISPLAY_UTC_OFFSET_MINUTES out of range: {minutes}"))
}
