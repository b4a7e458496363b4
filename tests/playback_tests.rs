//! Playback integration tests against the public library API

use std::sync::Arc;
use std::time::Duration;

use morse_signal::application::Sequencer;
use morse_signal::domain::morse::MorseString;
use morse_signal::domain::playback::PlaybackOutcome;
use morse_signal::domain::timing::{PulseShape, Timing, UnitDuration};
use morse_signal::infrastructure::{SilentDevice, TokioClock};

fn sequencer(unit_ms: u64) -> Arc<Sequencer<Arc<SilentDevice>, TokioClock>> {
    let unit = UnitDuration::from_millis(unit_ms).unwrap();
    Arc::new(Sequencer::new(
        Arc::new(SilentDevice::new()),
        TokioClock::new(),
        Timing::new(unit),
        PulseShape::Steady,
    ))
}

#[tokio::test(start_paused = true)]
async fn sos_takes_expected_time() {
    let sequencer = sequencer(100);
    let morse = MorseString::encode("sos");

    let started = tokio::time::Instant::now();
    let report = sequencer.run(&morse).await;

    // s = 3, o = 9, plus three letter gaps
    assert_eq!(report.outcome, PlaybackOutcome::Completed);
    assert_eq!(started.elapsed(), Duration::from_millis(1800));
    assert_eq!(sequencer.device().pulses(), 9);
    assert!(!sequencer.device().is_on());
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_running_playback() {
    let sequencer = sequencer(100);
    let morse = MorseString::encode("paris paris");

    let runner = {
        let sequencer = Arc::clone(&sequencer);
        tokio::spawn(async move { sequencer.run(&morse).await })
    };

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(sequencer.is_running());
    sequencer.stop();

    let report = runner.await.unwrap();
    assert_eq!(report.outcome, PlaybackOutcome::Cancelled);
    assert!(report.emitted < report.total);
    assert!(!sequencer.is_running());
    assert!(!sequencer.device().is_on());
}

#[tokio::test(start_paused = true)]
async fn sequencer_is_reusable_after_stop() {
    let sequencer = sequencer(50);
    sequencer.stop();

    let report = sequencer.run(&MorseString::encode("e")).await;

    assert_eq!(report.outcome, PlaybackOutcome::Completed);
    assert_eq!(report.emitted, 2);
}
