//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).
//!
//! | Variable            | Default        | Meaning                               |
//! |---------------------|----------------|---------------------------------------|
//! | `LISTEN_ADDR`       | `0.0.0.0:8080` | Socket address to bind                |
//! | `PORT`              | —              | Port on `0.0.0.0`, if no `LISTEN_ADDR` |
//! | `DEFAULT_PAGE_SIZE` | `10`           | History page size when none is given  |
//! | `LOG_FORMAT`        | `pretty`       | `pretty` or `json` log output         |

use std::net::{Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;

/// Page size used when neither the request nor the environment give one.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

const DEFAULT_PORT: u16 = 8080;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`ChatConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// Page size applied to history reads that omit `size`.
    pub default_page_size: NonZeroUsize,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            default_page_size: DEFAULT_PAGE_SIZE,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ChatConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as a
    /// [`SocketAddr`], or if `PORT` is used and is not a valid port.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr = match (std::env::var("LISTEN_ADDR"), std::env::var("PORT")) {
            (Ok(addr), _) => addr.parse::<SocketAddr>()?,
            (Err(_), Ok(port)) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, port.parse::<u16>()?)),
            (Err(_), Err(_)) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        };

        let default_page_size = parse_env("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE);
        let log_format = parse_log_format(std::env::var("LOG_FORMAT").ok().as_deref());

        Ok(Self {
            listen_addr,
            default_page_size,
            log_format,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Accepts `"json"` (case-insensitive); anything else selects the pretty
/// formatter.
fn parse_log_format(value: Option<&str>) -> LogFormat {
    match value {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_listens_on_8080() {
        let config = ChatConfig::default();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.default_page_size.get(), 10);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!(parse_log_format(Some("json")), LogFormat::Json);
        assert_eq!(parse_log_format(Some("JSON")), LogFormat::Json);
        assert_eq!(parse_log_format(Some("pretty")), LogFormat::Pretty);
        assert_eq!(parse_log_format(Some("xml")), LogFormat::Pretty);
        assert_eq!(parse_log_format(None), LogFormat::Pretty);
    }

    #[test]
    fn missing_env_uses_default() {
        let size = parse_env("CHAT_API_TEST_UNSET_VARIABLE", DEFAULT_PAGE_SIZE);
        assert_eq!(size, DEFAULT_PAGE_SIZE);
    }
}
