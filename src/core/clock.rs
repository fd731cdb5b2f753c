use crate::domain::model::{PlayEvent, TimedEvent};
use crate::utils::error::{OnCourtError, Result};
use std::str::FromStr;

pub const REGULATION_PERIODS: u32 = 4;
pub const REGULATION_PERIOD_SECONDS: i64 = 720;
pub const OVERTIME_PERIOD_SECONDS: i64 = 300;

/// Countdown clock as shown in `PCTIMESTRING` (`11:42`, `0:34.5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    pub minutes: i64,
    /// Seconds field in tenths.
    pub seconds_tenths: i64,
}

impl GameClock {
    /// Saturates instead of overflowing on absurd minute values.
    pub fn remaining_tenths(&self) -> i64 {
        self.minutes
            .saturating_mul(600)
            .saturating_add(self.seconds_tenths)
    }
}

impl FromStr for GameClock {
    type Err = OnCourtError;

    fn from_str(s: &str) -> Result<Self> {
        let parse_err = |reason: &str| OnCourtError::ClockParseError {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (minutes, seconds) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| parse_err("expected MM:SS"))?;

        let minutes: i64 = minutes
            .parse()
            .map_err(|_| parse_err("minutes field is not an integer"))?;

        let (whole, fraction) = seconds.split_once('.').unwrap_or((seconds, ""));
        let whole: i64 = whole
            .parse()
            .map_err(|_| parse_err("seconds field is not a number"))?;
        // 小數部分只取到十分之一秒，其餘位數捨去
        let tenth: i64 = if seconds.contains('.') {
            if fraction.is_empty() || !fraction.chars().all(|c| c.is_ascii_digit()) {
                return Err(parse_err("fractional seconds must be digits"));
            }
            i64::from(fraction.as_bytes()[0] - b'0')
        } else {
            0
        };

        Ok(Self {
            minutes,
            seconds_tenths: whole.saturating_mul(10).saturating_add(tenth),
        })
    }
}

/// Seconds from tip-off to the start of `period`.
pub fn period_start_seconds(period: u32) -> i64 {
    let period = i64::from(period);
    let regulation = i64::from(REGULATION_PERIODS);
    if period > regulation {
        REGULATION_PERIOD_SECONDS * regulation + OVERTIME_PERIOD_SECONDS * (period - regulation)
    } else {
        REGULATION_PERIOD_SECONDS * (period - 1)
    }
}

pub fn period_length_seconds(period: u32) -> i64 {
    if period > REGULATION_PERIODS {
        OVERTIME_PERIOD_SECONDS
    } else {
        REGULATION_PERIOD_SECONDS
    }
}

/// Tenths of a second since tip-off for a clock reading in `period`.
///
/// Out-of-range clock fields are not rejected; they just produce an
/// elapsed value outside the period, saturated at the `i64` bounds.
pub fn elapsed_tenths(period: u32, clock: &GameClock) -> i64 {
    (period_start_seconds(period) + period_length_seconds(period))
        .saturating_mul(10)
        .saturating_sub(clock.remaining_tenths())
}

pub fn elapsed_tenths_str(period: u32, clock: &str) -> Result<i64> {
    Ok(elapsed_tenths(period, &clock.parse()?))
}

pub fn derive_elapsed(events: Vec<PlayEvent>) -> Result<Vec<TimedEvent>> {
    events
        .into_iter()
        .map(|event| {
            let elapsed = elapsed_tenths_str(event.period, &event.clock)?;
            Ok(TimedEvent {
                period: event.period,
                clock: event.clock,
                elapsed,
            })
        })
        .collect()
}
