use crate::app::input::{parse_field, FieldValue};

use anyhow::{bail, Context, Error, Result};

use std::{str::FromStr, time::Duration};

/// Initial contents of the hours/minutes/seconds boxes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl FromStr for Preset {
    type Err = Error;

    /// Accepts `SS`, `MM:SS` or `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Preset> {
        let mut values = Vec::new();
        for part in s.split(':') {
            match parse_field(part) {
                FieldValue::Value(v) => values.push(v),
                FieldValue::Blank | FieldValue::Invalid => {
                    bail!("Invalid component \"{}\" in preset {}", part, s)
                }
            }
        }

        let preset = match values[..] {
            [seconds] => Preset {
                seconds,
                ..Default::default()
            },
            [minutes, seconds] => Preset {
                minutes,
                seconds,
                ..Default::default()
            },
            [hours, minutes, seconds] => Preset {
                hours,
                minutes,
                seconds,
            },
            _ => bail!("Expected HH:MM:SS, MM:SS or SS, got {}", s),
        };

        Ok(preset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_period: Duration,
    /// How often the alarm repeats while the done dialog is up
    pub alarm_period: Duration,
    pub preset: Option<Preset>,
}

impl Config {
    const TICK_PERIOD: Duration = Duration::from_secs(1);
    const ALARM_PERIOD: Duration = Duration::from_secs(2);

    /// Builds a config from the program arguments, excluding the program name.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Config> {
        let mut config = Config::default();
        if let Some(preset) = args.into_iter().next() {
            let preset = preset
                .parse()
                .with_context(|| format!("Failed to parse preset duration {}", preset))?;
            config.preset = Some(preset);
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_period: Config::TICK_PERIOD,
            alarm_period: Config::ALARM_PERIOD,
            preset: None,
        }
    }
}
