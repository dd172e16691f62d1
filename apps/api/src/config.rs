use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub quiz: QuizTiming,
    /// Simulated "bot is typing" delay before a chat reply is returned.
    pub chat_typing_delay: Duration,
}

/// Timing knobs for the quiz runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizTiming {
    /// Countdown budget in ticks (seconds by default).
    pub time_budget: u32,
    pub tick: Duration,
    /// Pause between an answer and the next question (or the results).
    pub advance_delay: Duration,
}

impl Default for QuizTiming {
    fn default() -> Self {
        Self {
            time_budget: 1800,
            tick: Duration::from_secs(1),
            advance_delay: Duration::from_millis(300),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = QuizTiming::default();

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            quiz: QuizTiming {
                time_budget: env_or("QUIZ_TIME_BUDGET_SECS", defaults.time_budget)?,
                tick: env_period_ms("QUIZ_TICK_MS", 1000)?,
                advance_delay: Duration::from_millis(env_or("QUIZ_ADVANCE_DELAY_MS", 300)?),
            },
            chat_typing_delay: Duration::from_millis(env_or("CHAT_TYPING_DELAY_MS", 1500)?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            quiz: QuizTiming::default(),
            chat_typing_delay: Duration::from_millis(1500),
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_var(key, &raw),
        Err(_) => Ok(default),
    }
}

/// A timer period in milliseconds. Zero is rejected: tokio intervals require
/// a non-zero period.
fn env_period_ms(key: &str, default_ms: u64) -> Result<Duration> {
    match std::env::var(key) {
        Ok(raw) => parse_period_ms(key, &raw),
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}

fn parse_period_ms(key: &str, raw: &str) -> Result<Duration> {
    let ms: u64 = parse_var(key, raw)?;
    if ms == 0 {
        bail!("Environment variable '{key}' must be greater than zero");
    }
    Ok(Duration::from_millis(ms))
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing_matches_quiz_budget() {
        let timing = QuizTiming::default();
        assert_eq!(timing.time_budget, 1800);
        assert_eq!(timing.tick, Duration::from_secs(1));
        assert_eq!(timing.advance_delay, Duration::from_millis(300));
    }

    #[test]
    fn test_parse_var_trims_whitespace() {
        let port: u16 = parse_var("PORT", " 9090 ").unwrap();
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_zero_tick_period_is_rejected() {
        let err = parse_period_ms("QUIZ_TICK_MS", "0").unwrap_err();
        assert!(err.to_string().contains("QUIZ_TICK_MS"), "got: {err}");

        let tick = parse_period_ms("QUIZ_TICK_MS", "250").unwrap();
        assert_eq!(tick, Duration::from_millis(250));
    }

    #[test]
    fn test_parse_var_error_names_variable() {
        let err = parse_var::<u16>("PORT", "eighty").unwrap_err();
        assert!(err.to_string().contains("PORT"), "got: {err}");
    }
}
