use anyhow::{bail, Result};

use std::fmt;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;

/// Whole seconds left on the clock plus whether they are being counted down.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
    running: bool,
}

impl Countdown {
    pub fn new() -> Countdown {
        Default::default()
    }

    /// Replaces the remaining time. Minutes and seconds above 59 carry over.
    pub fn set_time(&mut self, hours: u32, minutes: u32, seconds: u32) {
        self.remaining = (hours as u64 * SECS_PER_HOUR)
            .saturating_add(minutes as u64 * SECS_PER_MINUTE)
            .saturating_add(seconds as u64);
    }

    pub fn start(&mut self) -> Result<()> {
        if self.is_done() {
            bail!("Cannot start a countdown with no time remaining");
        }
        self.running = true;
        Ok(())
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.remaining = 0;
        self.running = false;
    }

    /// Removes one second. Hitting zero stops the countdown.
    pub fn decrement(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.is_done() {
            self.running = false;
        }
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining
    }

    pub fn format_remaining(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.remaining / SECS_PER_HOUR;
        let minutes = (self.remaining % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let seconds = self.remaining % SECS_PER_MINUTE;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}
