pub mod input;

use crate::{config::Config, countdown::Countdown, util::Ticker};

use input::{parse_field, FieldValue};

use anyhow::Result;
use log::{debug, info, warn};

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The countdown reached zero. Emitted once per countdown.
    Finished,
    /// The alarm should sound. Repeats until the done dialog is acknowledged.
    RingAlarm,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fields {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl Fields {
    fn clear(&mut self) {
        self.hours.clear();
        self.minutes.clear();
        self.seconds.clear();
    }
}

/// Button and tick handling for the timer window, free of any toolkit types.
///
/// The controller is idle when the countdown is done, paused when it is stopped with time
/// remaining, and running otherwise. Time is always passed in so the caller decides what "now"
/// means.
pub struct App {
    config: Config,
    countdown: Countdown,
    fields: Fields,
    ticker: Option<Ticker>,
    alarm: Option<Ticker>,
}

impl App {
    pub fn new(config: Config) -> App {
        let mut fields = Fields::default();
        if let Some(preset) = &config.preset {
            fields.hours = preset.hours.to_string();
            fields.minutes = preset.minutes.to_string();
            fields.seconds = preset.seconds.to_string();
        }

        App {
            config,
            countdown: Countdown::new(),
            fields,
            ticker: None,
            alarm: None,
        }
    }

    /// Start/Stop button.
    pub fn toggle(&mut self, now: Instant) -> Result<()> {
        if self.done_dialog_open() {
            debug!("Ignoring start/stop while the done dialog is open");
            return Ok(());
        }

        if self.countdown.is_running() {
            self.countdown.stop();
            self.ticker = None;
            info!("Countdown paused at {}", self.countdown);
            return Ok(());
        }

        // A paused countdown resumes where it left off, only an idle one reads the fields
        if self.countdown.is_done() && !self.load_fields() {
            return Ok(());
        }

        self.countdown.start()?;
        self.ticker = Some(Ticker::new(now, self.config.tick_period));
        info!("Countdown started at {}", self.countdown);

        Ok(())
    }

    /// Reset button.
    pub fn reset(&mut self) {
        self.countdown.reset();
        self.ticker = None;
        self.fields.clear();
        info!("Countdown reset");
    }

    /// Processes every tick due at `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<AppEvent> {
        let mut events = Vec::new();

        let mut finished = false;
        if let Some(ticker) = &mut self.ticker {
            while ticker.tick(now) {
                self.countdown.decrement();
                debug!("Tick, {} remaining", self.countdown);

                if self.countdown.is_done() {
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            info!("Countdown finished");
            self.ticker = None;
            self.countdown.reset();
            self.alarm = Some(Ticker::new(now, self.config.alarm_period));
            events.push(AppEvent::Finished);
            events.push(AppEvent::RingAlarm);
        } else if let Some(alarm) = &mut self.alarm {
            let mut ring = false;
            while alarm.tick(now) {
                ring = true;
            }

            if ring {
                events.push(AppEvent::RingAlarm);
            }
        }

        events
    }

    /// Dismisses the done dialog and stops the alarm from repeating.
    pub fn acknowledge(&mut self) {
        if self.alarm.take().is_some() {
            debug!("Done dialog acknowledged");
        }
    }

    /// How long until `poll` has something to do, if ever.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        [&self.ticker, &self.alarm]
            .into_iter()
            .flatten()
            .map(|ticker| ticker.until_next(now))
            .min()
    }

    pub fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn remaining_label(&self) -> String {
        self.countdown.format_remaining()
    }

    pub fn start_button_label(&self) -> &'static str {
        if self.countdown.is_running() {
            "Stop"
        } else {
            "Start"
        }
    }

    pub fn inputs_enabled(&self) -> bool {
        !self.countdown.is_running() && self.countdown.is_done()
    }

    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn done_dialog_open(&self) -> bool {
        self.alarm.is_some()
    }

    /// Loads the fields into the countdown. Returns false if there is nothing to count down.
    fn load_fields(&mut self) -> bool {
        let [hours, minutes, seconds] = [
            ("hours", &mut self.fields.hours),
            ("minutes", &mut self.fields.minutes),
            ("seconds", &mut self.fields.seconds),
        ]
        .map(|(name, field)| {
            let value = parse_field(field);
            if value == FieldValue::Invalid {
                warn!("Clearing invalid {} field: {:?}", name, field);
                field.clear();
            }
            value.as_u32()
        });

        self.countdown.set_time(hours, minutes, seconds);

        if self.countdown.is_done() {
            warn!("No time entered, clearing fields");
            self.fields.clear();
            return false;
        }

        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Preset;

    const SECOND: Duration = Duration::from_secs(1);

    fn app_with(hours: &str, minutes: &str, seconds: &str) -> App {
        let mut app = App::new(Config::default());
        let fields = app.fields_mut();
        fields.hours = hours.to_string();
        fields.minutes = minutes.to_string();
        fields.seconds = seconds.to_string();
        app
    }

    #[test]
    fn test_initial_state() {
        let app = App::new(Config::default());
        assert_eq!(app.remaining_label(), "00:00:00");
        assert_eq!(app.start_button_label(), "Start");
        assert!(app.inputs_enabled());
        assert!(!app.is_running());
        assert!(!app.done_dialog_open());
        assert_eq!(app.next_wakeup(Instant::now()), None);
        assert_eq!(app.fields(), &Fields::default());
    }

    #[test]
    fn test_preset_fills_fields() {
        let config = Config {
            preset: Some(Preset {
                hours: 1,
                minutes: 30,
                seconds: 0,
            }),
            ..Default::default()
        };
        let app = App::new(config);
        assert_eq!(app.fields().hours, "1");
        assert_eq!(app.fields().minutes, "30");
        assert_eq!(app.fields().seconds, "0");
    }

    #[test]
    fn test_start() {
        let start = Instant::now();
        let mut app = app_with("1", "2", "3");
        app.toggle(start).unwrap();

        assert!(app.is_running());
        assert_eq!(app.remaining_label(), "01:02:03");
        assert_eq!(app.start_button_label(), "Stop");
        assert!(!app.inputs_enabled());
        assert_eq!(app.next_wakeup(start), Some(SECOND));
    }

    #[test]
    fn test_two_second_scenario() {
        let start = Instant::now();
        let mut app = app_with("", "", "2");
        app.toggle(start).unwrap();

        assert!(app.poll(start + SECOND / 2).is_empty());

        assert!(app.poll(start + SECOND).is_empty());
        assert_eq!(app.remaining_label(), "00:00:01");
        assert!(app.is_running());

        let events = app.poll(start + 2 * SECOND);
        assert_eq!(events, vec![AppEvent::Finished, AppEvent::RingAlarm]);
        assert!(!app.is_running());
        assert!(app.inputs_enabled());
        assert!(app.done_dialog_open());
        assert_eq!(app.remaining_label(), "00:00:00");
        assert_eq!(app.start_button_label(), "Start");

        // Finished never fires again for the same countdown
        for i in 3..10 {
            let events = app.poll(start + i * SECOND);
            assert!(!events.contains(&AppEvent::Finished));
        }
    }

    #[test]
    fn test_missed_frames_finish_once() {
        let start = Instant::now();
        let mut app = app_with("", "", "3");
        app.toggle(start).unwrap();

        let events = app.poll(start + 10 * SECOND);
        assert_eq!(events, vec![AppEvent::Finished, AppEvent::RingAlarm]);
        assert_eq!(app.remaining_label(), "00:00:00");
        assert_eq!(app.next_wakeup(start + 10 * SECOND), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_alarm_repeats_until_acknowledged() {
        let start = Instant::now();
        let mut app = app_with("", "", "1");
        app.toggle(start).unwrap();
        app.poll(start + SECOND);

        let finished = start + SECOND;
        assert!(app.poll(finished + SECOND).is_empty());
        assert_eq!(app.poll(finished + 2 * SECOND), vec![AppEvent::RingAlarm]);
        // Several missed periods still only ring once
        assert_eq!(app.poll(finished + 10 * SECOND), vec![AppEvent::RingAlarm]);

        app.acknowledge();
        assert!(!app.done_dialog_open());
        assert!(app.poll(finished + 20 * SECOND).is_empty());
        assert_eq!(app.next_wakeup(finished + 20 * SECOND), None);
    }

    #[test]
    fn test_fields_kept_after_finish() {
        let start = Instant::now();
        let mut app = app_with("", "", "1");
        app.toggle(start).unwrap();
        app.poll(start + SECOND);
        app.acknowledge();

        assert_eq!(app.fields().seconds, "1");
        app.toggle(start + 2 * SECOND).unwrap();
        assert!(app.is_running());
        assert_eq!(app.remaining_label(), "00:00:01");
    }

    #[test]
    fn test_toggle_ignored_while_dialog_open() {
        let start = Instant::now();
        let mut app = app_with("", "", "1");
        app.toggle(start).unwrap();
        app.poll(start + SECOND);

        app.toggle(start + SECOND).unwrap();
        assert!(!app.is_running());
    }

    #[test]
    fn test_pause_and_resume() {
        let start = Instant::now();
        let mut app = app_with("", "1", "0");
        app.toggle(start).unwrap();
        app.poll(start + 5 * SECOND);
        assert_eq!(app.remaining_label(), "00:00:55");

        app.toggle(start + 5 * SECOND).unwrap();
        assert!(!app.is_running());
        assert_eq!(app.start_button_label(), "Start");
        assert!(!app.inputs_enabled());
        assert_eq!(app.next_wakeup(start + 5 * SECOND), None);

        // Paused time does not count
        assert!(app.poll(start + 100 * SECOND).is_empty());
        assert_eq!(app.remaining_label(), "00:00:55");

        // Resuming ignores edits to the fields
        app.fields_mut().minutes = "30".to_string();
        let resumed = start + 100 * SECOND;
        app.toggle(resumed).unwrap();
        assert!(app.is_running());
        assert_eq!(app.remaining_label(), "00:00:55");

        app.poll(resumed + SECOND);
        assert_eq!(app.remaining_label(), "00:00:54");
    }

    #[test]
    fn test_blank_fields_count_as_zero() {
        let mut app = app_with("", "  ", "30");
        app.toggle(Instant::now()).unwrap();
        assert!(app.is_running());
        assert_eq!(app.remaining_label(), "00:00:30");
    }

    #[test]
    fn test_invalid_field_cleared() {
        let mut app = app_with("abc", "-3", "10");
        app.toggle(Instant::now()).unwrap();

        assert!(app.is_running());
        assert_eq!(app.remaining_label(), "00:00:10");
        assert_eq!(app.fields().hours, "");
        assert_eq!(app.fields().minutes, "");
        assert_eq!(app.fields().seconds, "10");
    }

    #[test]
    fn test_zero_total_clears_fields() {
        let mut app = app_with("0", "x", "0");
        app.toggle(Instant::now()).unwrap();

        assert!(!app.is_running());
        assert!(app.inputs_enabled());
        assert_eq!(app.fields(), &Fields::default());
        assert_eq!(app.remaining_label(), "00:00:00");
    }

    #[test]
    fn test_reset() {
        let start = Instant::now();
        let mut app = app_with("0", "10", "0");
        app.toggle(start).unwrap();
        app.poll(start + 3 * SECOND);

        app.reset();
        assert!(!app.is_running());
        assert!(app.inputs_enabled());
        assert_eq!(app.remaining_label(), "00:00:00");
        assert_eq!(app.start_button_label(), "Start");
        assert_eq!(app.fields(), &Fields::default());
        assert!(app.poll(start + 100 * SECOND).is_empty());

        // Reset while paused
        let mut app = app_with("0", "10", "0");
        app.toggle(start).unwrap();
        app.toggle(start).unwrap();
        app.reset();
        assert!(app.inputs_enabled());
        assert_eq!(app.remaining_label(), "00:00:00");
    }
}
