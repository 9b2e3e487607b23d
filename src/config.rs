// src/config.rs
use std::{env, fmt::Debug, time::Duration};

use anyhow::{Result, bail};
use dotenvy::dotenv;

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` keeps the chat endpoint on its offline demo reply.
    pub openai_api_key: Option<String>,
    pub openai_api_base: String,
    pub openai_timeout: Duration,
    /// Return 502 on provider failures instead of an apology reply.
    pub strict_ai_errors: bool,
    pub upi_verify_delay: Duration,
    pub payment_delay: Duration,
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field("openai_api_base", &self.openai_api_base)
            .field("openai_timeout", &self.openai_timeout)
            .field("strict_ai_errors", &self.strict_ai_errors)
            .field("upi_verify_delay", &self.upi_verify_delay)
            .field("payment_delay", &self.payment_delay)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            openai_api_key: None,
            openai_api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            openai_timeout: Duration::from_secs(30),
            strict_ai_errors: false,
            upi_verify_delay: Duration::from_millis(600),
            payment_delay: Duration::from_millis(800),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = match env::var("PORT") {
            Ok(p) => p.parse()?,
            Err(_) => defaults.port,
        };

        // A blank key counts as "not configured".
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let openai_api_base = env::var("OPENAI_API_BASE")
            .map(|b| b.trim_end_matches('/').to_string())
            .unwrap_or(defaults.openai_api_base);

        Ok(Self {
            host,
            port,
            openai_api_key,
            openai_api_base,
            openai_timeout: millis_var("OPENAI_TIMEOUT_MS")?.unwrap_or(defaults.openai_timeout),
            strict_ai_errors: match env::var("AI_STRICT_MODE") {
                Ok(v) => parse_flag(&v)?,
                Err(_) => defaults.strict_ai_errors,
            },
            upi_verify_delay: millis_var("UPI_VERIFY_DELAY_MS")?.unwrap_or(defaults.upi_verify_delay),
            payment_delay: millis_var("PAYMENT_DELAY_MS")?.unwrap_or(defaults.payment_delay),
        })
    }

    pub fn with_openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    pub fn with_openai_api_base(mut self, base: impl Into<String>) -> Self {
        self.openai_api_base = base.into();
        self
    }

    pub fn with_strict_ai_errors(mut self, strict: bool) -> Self {
        self.strict_ai_errors = strict;
        self
    }

    /// Sets both simulated latencies, mostly useful in tests.
    pub fn with_mock_delays(mut self, upi: Duration, payment: Duration) -> Self {
        self.upi_verify_delay = upi;
        self.payment_delay = payment;
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn millis_var(name: &str) -> Result<Option<Duration>> {
    match env::var(name) {
        Ok(v) => Ok(Some(Duration::from_millis(v.parse()?))),
        Err(_) => Ok(None),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("invalid boolean flag value: {:?}", other),
    }
}
