//! Command runners for encode, decode and play

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::AsyncReadExt;

use crate::application::ports::ConfigStore;
use crate::application::{ProgressCallback, Sequencer};
use crate::domain::config::AppConfig;
use crate::domain::morse::{self, MorseString};
use crate::domain::playback::{DeviceKind, PlaybackOutcome};
use crate::domain::timing::{Timing, UnitDuration};
use crate::infrastructure::{create_output_device, TokioClock, XdgConfigStore};

use super::args::{PlayArgs, PlayOptions};
use super::presenter::Presenter;
use super::signals::InterruptGuard;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the unit duration
pub const ENV_UNIT: &str = "MORSE_SIGNAL_UNIT";
/// Environment variable overriding the output device
pub const ENV_DEVICE: &str = "MORSE_SIGNAL_DEVICE";

/// Print the Morse encoding of the input
pub async fn run_encode(text: Option<String>, presenter: &Presenter) -> ExitCode {
    match read_input(text).await {
        Ok(text) => {
            presenter.output(&morse::encode(&text));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Print the text decoded from the input
pub async fn run_decode(input: Option<String>, presenter: &Presenter) -> ExitCode {
    match read_input(input).await {
        Ok(input) => {
            presenter.output(&morse::decode(&input));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Resolve play arguments against the merged config and play the result
pub async fn run_play_command(args: PlayArgs, presenter: &mut Presenter) -> ExitCode {
    let cli_config = AppConfig {
        unit: args.unit.clone(),
        device: args.device.map(|d| DeviceKind::from(d).to_string()),
        tone_hz: args.tone,
        letter_gap_units: args.letter_gap,
    };
    let config = load_merged_config(cli_config).await;

    let input = match read_input(args.text).await {
        Ok(input) => input,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let morse = if args.morse {
        MorseString::new(input)
    } else {
        MorseString::encode(&input)
    };

    match resolve_play_options(&config, morse) {
        Ok(options) => run_play(options, presenter).await,
        Err(e) => {
            presenter.error(&e);
            ExitCode::from(EXIT_USAGE_ERROR)
        }
    }
}

/// Build play options, rejecting values a user set explicitly but wrongly
pub fn resolve_play_options(config: &AppConfig, morse: MorseString) -> Result<PlayOptions, String> {
    let unit = match config.unit.as_ref() {
        Some(s) => s.parse::<UnitDuration>().map_err(|e| e.to_string())?,
        None => UnitDuration::default(),
    };
    let device = match config.device.as_ref() {
        Some(s) => s.parse::<DeviceKind>().map_err(|e| e.to_string())?,
        None => DeviceKind::default(),
    };
    let letter_gap_units = config.letter_gap_units_or_default();
    if letter_gap_units == 0 {
        return Err("Invalid letter gap: must be at least 1 unit".to_string());
    }

    Ok(PlayOptions {
        morse,
        timing: Timing::new(unit).with_letter_gap_units(letter_gap_units),
        device,
        tone_hz: config.tone_hz_or_default(),
    })
}

/// Play Morse on the selected device until done or interrupted
pub async fn run_play(options: PlayOptions, presenter: &mut Presenter) -> ExitCode {
    if options.morse.is_empty() {
        presenter.warn("Nothing to play");
        return ExitCode::from(EXIT_SUCCESS);
    }

    // Opening the audio device blocks
    let kind = options.device;
    let tone_hz = options.tone_hz;
    let device = match tokio::task::spawn_blocking(move || create_output_device(kind, tone_hz)).await
    {
        Ok(Ok(device)) => device,
        Ok(Err(e)) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        Err(e) => {
            presenter.error(&format!("Task join error: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.info(&format!(
        "{} at {} per unit",
        kind.label(),
        options.timing.unit
    ));

    let sequencer = Arc::new(Sequencer::new(
        device,
        TokioClock::new(),
        options.timing,
        kind.pulse_shape(),
    ));
    let interrupt = InterruptGuard::install(Arc::clone(&sequencer));

    // The lamp draws on the terminal itself, so it gets no progress bar
    let total = options.morse.token_count();
    let on_progress: Option<ProgressCallback> = if kind == DeviceKind::Light {
        None
    } else {
        presenter.start_progress(total as u64, &format!("Playing ({})", options.timing.unit));
        presenter.progress_handle().map(|bar| {
            Arc::new(move |done: usize, _total: usize| bar.set_position(done as u64))
                as ProgressCallback
        })
    };

    let report = sequencer.run_with_progress(&options.morse, on_progress).await;

    presenter.finish_progress();
    if kind == DeviceKind::Light {
        presenter.output("");
    }

    match report.outcome {
        PlaybackOutcome::Completed => {
            presenter.success(&format!("Played {} symbols", report.emitted));
            ExitCode::from(EXIT_SUCCESS)
        }
        PlaybackOutcome::Cancelled => {
            presenter.warn(&format!(
                "Playback stopped after {}/{} symbols",
                report.emitted, report.total
            ));
            if interrupt.was_interrupted() {
                ExitCode::from(EXIT_ERROR)
            } else {
                ExitCode::from(EXIT_SUCCESS)
            }
        }
        PlaybackOutcome::Faulted => {
            presenter.error("Playback stopped: output device fault");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Use the argument if given, otherwise read all of stdin.
/// A single trailing line break from stdin is dropped.
pub async fn read_input(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        return Ok(text);
    }

    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .map_err(|e| format!("Failed to read stdin: {}", e))?;

    Ok(strip_line_break(buffer))
}

fn strip_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %store.path().display(), error = %e, "ignoring unreadable config file");
            AppConfig::empty()
        }
    };

    let env_config = AppConfig {
        unit: env::var(ENV_UNIT).ok().filter(|s| !s.is_empty()),
        device: env::var(ENV_DEVICE).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_single_line_break() {
        assert_eq!(strip_line_break("sos\n".to_string()), "sos");
        assert_eq!(strip_line_break("sos\r\n".to_string()), "sos");
        assert_eq!(strip_line_break("a\n\n".to_string()), "a\n");
        assert_eq!(strip_line_break("sos".to_string()), "sos");
    }

    #[tokio::test]
    async fn read_input_prefers_argument() {
        let input = read_input(Some("hello".to_string())).await.unwrap();
        assert_eq!(input, "hello");
    }

    #[test]
    fn resolve_defaults() {
        let options = resolve_play_options(&AppConfig::empty(), MorseString::new(".")).unwrap();
        assert_eq!(options.timing, Timing::default());
        assert_eq!(options.device, DeviceKind::Beep);
        assert_eq!(options.tone_hz, 700);
    }

    #[test]
    fn resolve_configured_values() {
        let config = AppConfig {
            unit: Some("50ms".to_string()),
            device: Some("light".to_string()),
            tone_hz: Some(550),
            letter_gap_units: Some(3),
        };
        let options = resolve_play_options(&config, MorseString::new(".")).unwrap();
        assert_eq!(options.timing.unit.as_millis(), 50);
        assert_eq!(options.timing.letter_gap_units, 3);
        assert_eq!(options.device, DeviceKind::Light);
        assert_eq!(options.tone_hz, 550);
    }

    #[test]
    fn resolve_rejects_invalid_unit() {
        let config = AppConfig {
            unit: Some("fast".to_string()),
            ..Default::default()
        };
        let err = resolve_play_options(&config, MorseString::default()).unwrap_err();
        assert!(err.contains("Invalid unit"));
    }

    #[test]
    fn resolve_rejects_invalid_device() {
        let config = AppConfig {
            device: Some("torch".to_string()),
            ..Default::default()
        };
        let err = resolve_play_options(&config, MorseString::default()).unwrap_err();
        assert!(err.contains("Invalid device"));
    }

    #[test]
    fn resolve_rejects_zero_letter_gap() {
        let config = AppConfig {
            letter_gap_units: Some(0),
            ..Default::default()
        };
        assert!(resolve_play_options(&config, MorseString::default()).is_err());
    }

    #[tokio::test]
    async fn empty_input_plays_nothing() {
        let mut presenter = Presenter::new();
        let options = PlayOptions {
            morse: MorseString::encode(""),
            timing: Timing::default(),
            device: DeviceKind::Silent,
            tone_hz: 700,
        };
        let code = run_play(options, &mut presenter).await;
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::from(EXIT_SUCCESS)));
    }

    #[tokio::test(start_paused = true)]
    async fn silent_playback_completes() {
        let mut presenter = Presenter::new();
        let options = PlayOptions {
            morse: MorseString::encode("et"),
            timing: Timing::default(),
            device: DeviceKind::Silent,
            tone_hz: 700,
        };
        let code = run_play(options, &mut presenter).await;
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::from(EXIT_SUCCESS)));
    }
}
