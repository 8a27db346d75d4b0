//! Bridge connection configuration.

use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;
use std::time::Duration;

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Connection settings for a Hue bridge.
///
/// Every field is an immutable input: the values are read once at startup and
/// consumed by [`BridgeClient`](crate::BridgeClient) and
/// [`RateLimiter`](crate::RateLimiter) construction.
///
/// # Examples
///
/// ```
/// use std::net::{IpAddr, Ipv4Addr};
/// use hue_lights_rs::BridgeConfig;
///
/// let config = BridgeConfig::new(
///     IpAddr::V4(Ipv4Addr::new(192, 168, 1, 64)),
///     "cJdzxhKlxr2h92jwDkTv",
/// ).unwrap();
/// assert_eq!(config.base_url(), "http://192.168.1.64/api/cJdzxhKlxr2h92jwDkTv");
/// ```
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// IP address of the bridge on the local network.
    pub bridge_ip: IpAddr,
    /// Bridge-issued credential from the one-time pairing flow.
    pub username: String,
    /// TCP connect timeout.
    pub timeout_connect: Duration,
    /// Read timeout covering the whole response.
    pub timeout_read: Duration,
    /// Upper bound on pooled HTTP connections.
    pub max_connections: usize,
    /// Upper bound on idle keepalive connections.
    pub max_keepalive: usize,
    /// Light commands per second (token bucket capacity and refill rate).
    pub light_rate_limit: u32,
    /// Minimum interval between group commands.
    pub group_rate_limit: Duration,
}

impl BridgeConfig {
    const DEFAULT_BRIDGE_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 64));
    const DEFAULT_TIMEOUT_CONNECT: Duration = Duration::from_secs(5);
    const DEFAULT_TIMEOUT_READ: Duration = Duration::from_secs(10);
    const DEFAULT_MAX_CONNECTIONS: usize = 10;
    const DEFAULT_MAX_KEEPALIVE: usize = 5;
    const DEFAULT_LIGHT_RATE_LIMIT: u32 = 10;
    const DEFAULT_GROUP_RATE_LIMIT: Duration = Duration::from_secs(1);

    /// Create a config for the given bridge with default timeouts, pool
    /// limits, and rate limits.
    ///
    /// Returns an error if the credential is shorter than 10 characters.
    pub fn new(bridge_ip: IpAddr, username: &str) -> Result<Self> {
        validate_username(username)?;
        Ok(BridgeConfig {
            bridge_ip,
            username: username.to_string(),
            timeout_connect: Self::DEFAULT_TIMEOUT_CONNECT,
            timeout_read: Self::DEFAULT_TIMEOUT_READ,
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            max_keepalive: Self::DEFAULT_MAX_KEEPALIVE,
            light_rate_limit: Self::DEFAULT_LIGHT_RATE_LIMIT,
            group_rate_limit: Self::DEFAULT_GROUP_RATE_LIMIT,
        })
    }

    /// Load the configuration from environment variables.
    ///
    /// `HUE_USERNAME` is required; everything else falls back to a default:
    /// `HUE_BRIDGE_IP` (192.168.1.64), `HUE_TIMEOUT_CONNECT` (5s, 1-30),
    /// `HUE_TIMEOUT_READ` (10s, 1-60), `HUE_MAX_CONNECTIONS` (10, 1-50),
    /// `HUE_MAX_KEEPALIVE` (5, 1-20), `HUE_LIGHT_RATE_LIMIT` (10/s, 1-100),
    /// `HUE_GROUP_RATE_LIMIT` (1.0s, 0.1-10).
    pub fn from_env() -> Result<Self> {
        let bridge_ip = match env::var("HUE_BRIDGE_IP") {
            Ok(raw) => IpAddr::from_str(raw.trim())
                .map_err(|_| Error::config("bridge_ip", format!("invalid IP address: {raw}")))?,
            Err(_) => Self::DEFAULT_BRIDGE_IP,
        };

        let username = env::var("HUE_USERNAME")
            .map_err(|_| Error::config("username", "HUE_USERNAME is not set"))?;
        validate_username(&username)?;

        let timeout_connect = parse_ranged(
            "timeout_connect",
            env::var("HUE_TIMEOUT_CONNECT").ok(),
            5.0,
            1.0,
            30.0,
        )?;
        let timeout_read = parse_ranged(
            "timeout_read",
            env::var("HUE_TIMEOUT_READ").ok(),
            10.0,
            1.0,
            60.0,
        )?;
        let max_connections = parse_ranged(
            "max_connections",
            env::var("HUE_MAX_CONNECTIONS").ok(),
            Self::DEFAULT_MAX_CONNECTIONS,
            1,
            50,
        )?;
        let max_keepalive = parse_ranged(
            "max_keepalive",
            env::var("HUE_MAX_KEEPALIVE").ok(),
            Self::DEFAULT_MAX_KEEPALIVE,
            1,
            20,
        )?;
        let light_rate_limit = parse_ranged(
            "light_rate_limit",
            env::var("HUE_LIGHT_RATE_LIMIT").ok(),
            Self::DEFAULT_LIGHT_RATE_LIMIT,
            1,
            100,
        )?;
        let group_rate_limit = parse_ranged(
            "group_rate_limit",
            env::var("HUE_GROUP_RATE_LIMIT").ok(),
            1.0,
            0.1,
            10.0,
        )?;

        Ok(BridgeConfig {
            bridge_ip,
            username,
            timeout_connect: Duration::from_secs_f64(timeout_connect),
            timeout_read: Duration::from_secs_f64(timeout_read),
            max_connections,
            max_keepalive,
            light_rate_limit,
            group_rate_limit: Duration::from_secs_f64(group_rate_limit),
        })
    }

    /// Base URL for every bridge API call.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/{}", self.bridge_ip, self.username)
    }
}

fn validate_username(username: &str) -> Result<()> {
    if username.len() < 10 {
        return Err(Error::config(
            "username",
            "must be at least 10 characters long",
        ));
    }
    Ok(())
}

/// Parse an optional raw value, falling back to the default and rejecting
/// anything outside [min, max].
fn parse_ranged<T>(field: &'static str, raw: Option<String>, default: T, min: T, max: T) -> Result<T>
where
    T: FromStr + PartialOrd + Copy + fmt::Display,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value: T = raw
        .trim()
        .parse()
        .map_err(|_| Error::config(field, format!("could not parse '{raw}'")))?;
    if value < min || value > max {
        return Err(Error::config(
            field,
            format!("{value} is out of range ({min}-{max})"),
        ));
    }
    Ok(value)
}
