//! Configuration types.
//!
//! Everything is read from the environment. Each `from_env` has a
//! `from_lookup` twin taking a key lookup closure so parsing can be tested
//! without touching process state.

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::error::ConfigError;

pub const DEFAULT_UPSTREAM_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:8787/";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 200;

/// Which browser origin the relay admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigin {
    /// `Access-Control-Allow-Origin: *`
    Any,
    /// A single fixed origin, e.g. `https://example.github.io`.
    Exact(HeaderValue),
}

impl AllowedOrigin {
    /// `*` or an empty value means any origin.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return Ok(Self::Any);
        }
        HeaderValue::from_str(raw)
            .map(Self::Exact)
            .map_err(|e| ConfigError::InvalidValue {
                key: "RELAY_ALLOWED_ORIGIN".to_string(),
                message: e.to_string(),
            })
    }
}

impl Default for AllowedOrigin {
    fn default() -> Self {
        Self::Any
    }
}

/// Relay proxy configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Address the relay listens on.
    pub bind: SocketAddr,
    /// Provider base URL, without the `/{model}:generateContent` suffix.
    pub upstream_base_url: String,
    pub model: String,
    /// Provider credential. Appended to the upstream URL, never logged.
    pub api_key: SecretString,
    pub allowed_origin: AllowedOrigin,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;

        let bind = parse_var(&lookup, "RELAY_BIND", || SocketAddr::from(([0, 0, 0, 0], 8787)))?;

        let upstream_base_url =
            lookup("RELAY_UPSTREAM_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        let model = lookup("RELAY_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let allowed_origin = match lookup("RELAY_ALLOWED_ORIGIN") {
            Some(raw) => AllowedOrigin::parse(&raw)?,
            None => AllowedOrigin::Any,
        };

        Ok(Self {
            bind,
            upstream_base_url,
            model,
            api_key: SecretString::from(api_key),
            allowed_origin,
        })
    }

    /// Full provider endpoint, without the credential.
    pub fn upstream_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.upstream_base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Conversation controller tuning.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// `generationConfig.maxOutputTokens` for interview turns.
    pub max_output_tokens: u32,
    /// Send the opening question as the first (`model`) history entry.
    pub include_seed_in_history: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            include_seed_in_history: true,
        }
    }
}

/// Terminal chat front end configuration.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub relay_url: String,
    pub controller: ControllerConfig,
}

impl ChatConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let relay_url =
            lookup("LIFESTYLE_RELAY_URL").unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());
        let max_output_tokens = parse_var(&lookup, "LIFESTYLE_MAX_OUTPUT_TOKENS", || {
            DEFAULT_MAX_OUTPUT_TOKENS
        })?;
        let include_seed_in_history = parse_var(&lookup, "LIFESTYLE_INCLUDE_SEED", || true)?;

        Ok(Self {
            relay_url,
            controller: ControllerConfig {
                max_output_tokens,
                include_seed_in_history,
            },
        })
    }
}

fn parse_var<T, F, D>(lookup: &F, key: &str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    D: FnOnce() -> T,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            }),
        None => Ok(default()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn relay_requires_api_key() {
        let err = RelayConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref k) if k == "GEMINI_API_KEY"));

        let err = RelayConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }

    #[test]
    fn relay_defaults() {
        let config = RelayConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "k")])).unwrap();
        assert_eq!(config.bind.port(), 8787);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.allowed_origin, AllowedOrigin::Any);
        assert_eq!(config.api_key.expose_secret(), "k");
        assert_eq!(
            config.upstream_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn relay_overrides() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("RELAY_BIND", "127.0.0.1:9000"),
            ("RELAY_UPSTREAM_URL", "http://localhost:1234/models/"),
            ("RELAY_MODEL", "gemini-2.5-flash"),
            ("RELAY_ALLOWED_ORIGIN", "https://sm2909.github.io"),
        ]))
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.upstream_url(),
            "http://localhost:1234/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(
            config.allowed_origin,
            AllowedOrigin::Exact(HeaderValue::from_static("https://sm2909.github.io"))
        );
    }

    #[test]
    fn relay_rejects_bad_bind() {
        let err = RelayConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("RELAY_BIND", "not-an-addr"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "RELAY_BIND"));
    }

    #[test]
    fn debug_output_redacts_key() {
        let config =
            RelayConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "super-secret")])).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn allowed_origin_parse() {
        assert_eq!(AllowedOrigin::parse("*").unwrap(), AllowedOrigin::Any);
        assert_eq!(AllowedOrigin::parse("").unwrap(), AllowedOrigin::Any);
        assert!(matches!(
            AllowedOrigin::parse("https://a.example").unwrap(),
            AllowedOrigin::Exact(_)
        ));
        assert!(AllowedOrigin::parse("bad\norigin").is_err());
    }

    #[test]
    fn chat_defaults_and_overrides() {
        let config = ChatConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.relay_url, DEFAULT_RELAY_URL);
        assert_eq!(config.controller.max_output_tokens, 200);
        assert!(config.controller.include_seed_in_history);

        let config = ChatConfig::from_lookup(lookup_from(&[
            ("LIFESTYLE_RELAY_URL", "https://relay.example/"),
            ("LIFESTYLE_MAX_OUTPUT_TOKENS", "512"),
            ("LIFESTYLE_INCLUDE_SEED", "false"),
        ]))
        .unwrap();
        assert_eq!(config.relay_url, "https://relay.example/");
        assert_eq!(config.controller.max_output_tokens, 512);
        assert!(!config.controller.include_seed_in_history);

        let err = ChatConfig::from_lookup(lookup_from(&[("LIFESTYLE_INCLUDE_SEED", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
