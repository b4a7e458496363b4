//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;
use crate::domain::playback::DeviceKind;
use crate::domain::timing::UnitDuration;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Audible tone range accepted for `tone_hz`
const TONE_RANGE_HZ: std::ops::RangeInclusive<u32> = 100..=4000;

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
    check_key(key)?;

    let mut config = store.load().await?;

    match key {
        "unit" => {
            let unit = parse_unit(key, value)?;
            config.unit = Some(unit.to_string());
        }
        "device" => {
            let device = parse_device(key, value)?;
            config.device = Some(device.to_string());
        }
        "tone_hz" => config.tone_hz = Some(parse_tone(key, value)?),
        "letter_gap_units" => config.letter_gap_units = Some(parse_letter_gap(key, value)?),
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
    check_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "unit" => config.unit,
        "device" => config.device,
        "tone_hz" => config.tone_hz.map(|hz| hz.to_string()),
        "letter_gap_units" => config.letter_gap_units.map(|u| u.to_string()),
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or("(not set)"));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value("unit", config.unit.as_deref().unwrap_or("(not set)"));
    presenter.key_value("device", config.device.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "tone_hz",
        &config
            .tone_hz
            .map(|hz| hz.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "letter_gap_units",
        &config
            .letter_gap_units
            .map(|u| u.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.into(),
    }
}

fn parse_unit(key: &str, value: &str) -> Result<UnitDuration, ConfigError> {
    value
        .parse::<UnitDuration>()
        .map_err(|e| invalid(key, e.to_string()))
}

fn parse_device(key: &str, value: &str) -> Result<DeviceKind, ConfigError> {
    value
        .parse::<DeviceKind>()
        .map_err(|e| invalid(key, e.to_string()))
}

fn parse_tone(key: &str, value: &str) -> Result<u32, ConfigError> {
    let hz: u32 = value
        .trim()
        .parse()
        .map_err(|_| invalid(key, "Value must be a whole number of Hz"))?;
    if !TONE_RANGE_HZ.contains(&hz) {
        return Err(invalid(
            key,
            format!(
                "Value must be between {} and {} Hz",
                TONE_RANGE_HZ.start(),
                TONE_RANGE_HZ.end()
            ),
        ));
    }
    Ok(hz)
}

fn parse_letter_gap(key: &str, value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(units) if units >= 1 => Ok(units),
        _ => Err(invalid(key, "Value must be a whole number of units, at least 1")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;
    use crate::infrastructure::XdgConfigStore;

    fn temp_store() -> (tempfile::TempDir, XdgConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        (dir, store)
    }

    #[test]
    fn unit_values() {
        assert_eq!(parse_unit("unit", "120ms").unwrap().as_millis(), 120);
        assert!(parse_unit("unit", "0").is_err());
    }

    #[test]
    fn device_values() {
        assert_eq!(parse_device("device", "light").unwrap(), DeviceKind::Light);
        assert!(parse_device("device", "torch").is_err());
    }

    #[test]
    fn tone_values() {
        assert_eq!(parse_tone("tone_hz", "700").unwrap(), 700);
        assert!(parse_tone("tone_hz", "loud").is_err());
        assert!(parse_tone("tone_hz", "5").is_err());
        assert!(parse_tone("tone_hz", "20000").is_err());
    }

    #[test]
    fn letter_gap_values() {
        assert_eq!(parse_letter_gap("letter_gap_units", "3").unwrap(), 3);
        assert!(parse_letter_gap("letter_gap_units", "0").is_err());
        assert!(parse_letter_gap("letter_gap_units", "-1").is_err());
    }

    #[test]
    fn unknown_key_lists_valid_keys() {
        let err = check_key("speed").unwrap_err();
        assert!(err.to_string().contains("letter_gap_units"));
    }

    #[tokio::test]
    async fn set_normalises_and_saves() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "unit", "1000").await.unwrap();
        handle_set(&store, &presenter, "device", "LIGHT").await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.unit, Some("1s".to_string()));
        assert_eq!(config.device, Some("light".to_string()));
    }

    #[tokio::test]
    async fn set_invalid_value_leaves_file_untouched() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        let result = handle_set(&store, &presenter, "tone_hz", "loud").await;

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn init_then_list() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        handle_config_command(ConfigAction::Init, &store, &presenter)
            .await
            .unwrap();
        assert_eq!(store.load().await.unwrap(), AppConfig::defaults());
        assert!(handle_list(&store, &presenter).await.is_ok());
    }
}
