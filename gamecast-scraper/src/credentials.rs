use crate::config::ConfigFile;
use crate::error::ScrapeError;

/// Environment variable holding the YouTube Data API key.
pub const API_KEY_ENV: &str = "GAMECAST_YOUTUBE_API_KEY";

/// Where a credential's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Passed on the command line.
    Flag,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// A resolved API key and its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey {
    pub value: String,
    pub source: CredentialSource,
}

impl ApiKey {
    /// Resolve the YouTube API key.
    ///
    /// Priority: command-line flag > environment variable > config file.
    pub fn load(flag: Option<String>, config: &ConfigFile) -> Result<Self, ScrapeError> {
        resolve_api_key(flag, std::env::var(API_KEY_ENV).ok(), config).ok_or_else(|| {
            ScrapeError::config(format!(
                "Missing YouTube API key. Pass --api-key, set {API_KEY_ENV}, or add \
                 [youtube] api_key to the config file"
            ))
        })
    }

    /// The key with all but its last four characters hidden.
    pub fn masked(&self) -> String {
        mask(&self.value)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Pick the first of flag, environment and config file that holds a key.
pub fn resolve_api_key(
    flag: Option<String>,
    env: Option<String>,
    config: &ConfigFile,
) -> Option<ApiKey> {
    if let Some(value) = non_blank(flag) {
        return Some(ApiKey {
            value,
            source: CredentialSource::Flag,
        });
    }
    if let Some(value) = non_blank(env) {
        return Some(ApiKey {
            value,
            source: CredentialSource::EnvVar(API_KEY_ENV),
        });
    }
    config.youtube_api_key().map(|value| ApiKey {
        value: value.to_string(),
        source: CredentialSource::ConfigFile,
    })
}

/// Hide all but the last four characters of a secret.
pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::YouTubeConfig;

    fn config_with_key(key: &str) -> ConfigFile {
        ConfigFile {
            youtube: Some(YouTubeConfig {
                api_key: Some(key.to_string()),
            }),
            convert: None,
        }
    }

    #[test]
    fn flag_beats_env_and_config() {
        let key = resolve_api_key(
            Some("flag".to_string()),
            Some("env".to_string()),
            &config_with_key("file"),
        )
        .unwrap();
        assert_eq!(key.value, "flag");
        assert_eq!(key.source, CredentialSource::Flag);
    }

    #[test]
    fn env_beats_config() {
        let key = resolve_api_key(None, Some("env".to_string()), &config_with_key("file")).unwrap();
        assert_eq!(key.value, "env");
        assert_eq!(key.source, CredentialSource::EnvVar(API_KEY_ENV));
    }

    #[test]
    fn config_is_the_fallback() {
        let key = resolve_api_key(Some(String::new()), None, &config_with_key("file")).unwrap();
        assert_eq!(key.value, "file");
        assert_eq!(key.source, CredentialSource::ConfigFile);
    }

    #[test]
    fn nothing_set_is_none() {
        assert!(resolve_api_key(None, None, &ConfigFile::default()).is_none());
    }

    #[test]
    fn masking_keeps_last_four() {
        assert_eq!(mask("AIzaSyABCDEF"), "********CDEF");
        assert_eq!(mask("abc"), "***");
        assert_eq!(mask(""), "");
    }
}
