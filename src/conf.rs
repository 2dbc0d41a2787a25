use crate::{Error, Result};
use std::{env, time::Duration};
use url::Url;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_OVERPASS_URL: &str = "http://vibecheck.tech:12346/api/";
const DEFAULT_NOMINATIM_URL: &str = "http://vibecheck.tech:8080/";
const DEFAULT_HTTP_TIMEOUT_SEC: u64 = 60;

pub struct Conf {
    pub bind_addr: String,
    pub port: u16,
    pub overpass_url: Url,
    pub nominatim_url: Url,
    pub http_timeout: Duration,
}

impl Conf {
    pub fn from_env() -> Result<Conf> {
        Conf::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Conf> {
        let bind_addr = lookup("VIBECHECK_BIND_ADDR").unwrap_or(DEFAULT_BIND_ADDR.into());
        let port = match lookup("VIBECHECK_PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid VIBECHECK_PORT: {port}")))?,
            None => DEFAULT_PORT,
        };
        let overpass_url = base_url(
            lookup("VIBECHECK_OVERPASS_URL")
                .as_deref()
                .unwrap_or(DEFAULT_OVERPASS_URL),
        )?;
        let nominatim_url = base_url(
            lookup("VIBECHECK_NOMINATIM_URL")
                .as_deref()
                .unwrap_or(DEFAULT_NOMINATIM_URL),
        )?;
        let http_timeout_sec = match lookup("VIBECHECK_HTTP_TIMEOUT_SEC") {
            Some(sec) => sec.parse().map_err(|_| {
                Error::Config(format!("Invalid VIBECHECK_HTTP_TIMEOUT_SEC: {sec}"))
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SEC,
        };
        Ok(Conf {
            bind_addr,
            port,
            overpass_url,
            nominatim_url,
            http_timeout: Duration::from_secs(http_timeout_sec),
        })
    }
}

// Url::join drops the last path segment unless the base ends with a slash
fn base_url(raw: &str) -> Result<Url> {
    let url = if raw.ends_with('/') {
        Url::parse(raw)?
    } else {
        Url::parse(&format!("{raw}/"))?
    };
    Ok(url)
}
