// File: ./src/clock.rs
// Wall clock, localized formatting and the dashboard tick.
use anyhow::{Result, anyhow, bail};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Locale, TimeZone};
use std::fmt::Write;
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant. Handy for rendering tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct DateTimeFormat {
    pub locale: Locale,
    /// strftime pattern for the long date line.
    pub date_pattern: String,
    pub hour12: bool,
}

impl Default for DateTimeFormat {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            date_pattern: "%A, %B %-d, %Y".to_string(),
            hour12: false,
        }
    }
}

impl DateTimeFormat {
    pub fn new(locale: &str, date_pattern: &str, hour12: bool) -> Result<Self> {
        check_pattern(date_pattern)?;
        Ok(Self {
            locale: parse_locale(locale)?,
            date_pattern: date_pattern.to_string(),
            hour12,
        })
    }

    pub fn format_date<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        let mut out = String::new();
        if write!(out, "{}", at.format_localized(&self.date_pattern, self.locale)).is_err() {
            log::warn!("date pattern {:?} failed to render", self.date_pattern);
            out.clear();
            let fallback = Self::default().date_pattern;
            let _ = write!(out, "{}", at.format_localized(&fallback, self.locale));
        }
        out
    }

    /// Medium time style: seconds included.
    pub fn format_time<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        let pattern = if self.hour12 { "%-I:%M:%S %p" } else { "%H:%M:%S" };
        at.format_localized(pattern, self.locale).to_string()
    }
}

/// Rejects strftime patterns chrono cannot render, e.g. `%Q` or a trailing `%`.
pub fn check_pattern(pattern: &str) -> Result<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        bail!("Invalid date format: {:?}", pattern);
    }
    Ok(())
}

/// Accepts both "de_DE" and "de-DE".
pub fn parse_locale(name: &str) -> Result<Locale> {
    let normalized = name.replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| anyhow!("Unknown locale: {}", name))
}

/// Periodic tick owned by a view. Dropping it, or calling [`Ticker::stop`],
/// cancels the timer.
#[derive(Debug, Default)]
pub struct Ticker {
    interval: Option<Interval>,
    period: Duration,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            interval: None,
            period,
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Must be called from inside a tokio runtime. Restarting a running ticker is a no-op.
    pub fn start(&mut self) {
        if self.interval.is_none() {
            let mut interval = tokio::time::interval(self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            self.interval = Some(interval);
        }
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    /// Resolves on the next tick; pends forever while stopped so it can sit
    /// in a `select!` next to other event sources.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
