//! Config command handler

use url::Url;

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;
use crate::domain::translation::LanguageCode;

use super::args::{is_valid_config_key, ConfigAction, LANGUAGES_KEY_PREFIX, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: format!(
            "Unknown key. Valid keys: {}, {}<code>",
            VALID_CONFIG_KEYS.join(", "),
            LANGUAGES_KEY_PREFIX
        ),
    }
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(unknown_key(key));
    }

    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "endpoint" => config.endpoint = Some(value.trim().to_string()),
        "target" => config.target = Some(value.trim().to_lowercase()),
        "report_empty" => config.report_empty = parse_bool(value),
        _ => {
            if let Some(code) = key.strip_prefix(LANGUAGES_KEY_PREFIX) {
                config
                    .languages
                    .get_or_insert_with(Default::default)
                    .insert(code.to_lowercase(), value.trim().to_string());
            }
        }
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, display_value(key, value)));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(unknown_key(key));
    }

    let config = store.load().await?;

    let value = match key {
        "api_key" => config.api_key.map(|s| mask_api_key(&s)),
        "endpoint" => config.endpoint,
        "target" => config.target,
        "report_empty" => config.report_empty.map(|b| b.to_string()),
        _ => key.strip_prefix(LANGUAGES_KEY_PREFIX).and_then(|code| {
            config
                .languages
                .as_ref()
                .and_then(|l| l.get(&code.to_lowercase()).cloned())
        }),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "api_key",
        &config
            .api_key
            .map(|s| mask_api_key(&s))
            .unwrap_or_else(|| NOT_SET.to_string()),
    );
    presenter.key_value("endpoint", config.endpoint.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("target", config.target.as_deref().unwrap_or(NOT_SET));
    presenter.key_value(
        "report_empty",
        &config
            .report_empty
            .map(|b| b.to_string())
            .unwrap_or_else(|| NOT_SET.to_string()),
    );
    for (code, label) in config.languages.iter().flatten() {
        presenter.key_value(&format!("{}{}", LANGUAGES_KEY_PREFIX, code), label);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "endpoint" => {
            let url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(invalid("Endpoint must be an http or https URL".to_string()));
            }
        }
        "target" => {
            value
                .parse::<LanguageCode>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "report_empty" => {
            parse_bool(value).ok_or_else(|| invalid("Value must be 'true' or 'false'".to_string()))?;
        }
        "api_key" => {
            if value.trim().is_empty() {
                return Err(invalid("API key must not be empty".to_string()));
            }
        }
        _ => {
            if value.trim().is_empty() {
                return Err(invalid("Language label must not be empty".to_string()));
            }
        }
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn display_value(key: &str, value: &str) -> String {
    if key == "api_key" {
        mask_api_key(value)
    } else {
        value.to_string()
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
