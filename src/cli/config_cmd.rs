//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

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

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let mut config = store.load().await?;

    match key {
        "minutes" => config.minutes = Some(parse_number(key, value)?),
        "interval" => config.interval = Some(parse_number(key, value)?),
        "lang" => config.lang = Some(value.to_string()),
        "voice" => config.voice = Some(parse_bool(key, value)?),
        "voice_name" => config.voice_name = Some(value.to_string()),
        "rate" => config.rate = Some(parse_number(key, value)? as u32),
        "voice_input" => config.voice_input = Some(parse_bool(key, value)?),
        "save_path" => config.save_path = Some(value.to_string()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "minutes" => config.minutes.map(|n| n.to_string()),
        "interval" => config.interval.map(|n| n.to_string()),
        "lang" => config.lang,
        "voice" => config.voice.map(|b| b.to_string()),
        "voice_name" => config.voice_name,
        "rate" => config.rate.map(|n| n.to_string()),
        "voice_input" => config.voice_input.map(|b| b.to_string()),
        "save_path" => config.save_path,
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.info(&format!("{} is not set", key)),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    let show = |v: Option<String>| v.unwrap_or_else(|| "(not set)".to_string());

    presenter.key_value("minutes", &show(config.minutes.map(|n| n.to_string())));
    presenter.key_value("interval", &show(config.interval.map(|n| n.to_string())));
    presenter.key_value("lang", &show(config.lang));
    presenter.key_value("voice", &show(config.voice.map(|b| b.to_string())));
    presenter.key_value("voice_name", &show(config.voice_name));
    presenter.key_value("rate", &show(config.rate.map(|n| n.to_string())));
    presenter.key_value("voice_input", &show(config.voice_input.map(|b| b.to_string())));
    presenter.key_value("save_path", &show(config.save_path));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }
    Ok(())
}

fn parse_number(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse().map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be a positive number".to_string(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be 'true' or 'false'".to_string(),
        }),
    }
}
