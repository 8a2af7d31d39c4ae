use humantime::format_duration;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
    time::Duration,
};

/// Duration read from configuration in human form, e.g. `10s`, `500ms`, `1m 30s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LoadDuration {
    duration: Duration,
}

impl LoadDuration {
    pub const fn new(duration: Duration) -> LoadDuration {
        LoadDuration { duration }
    }

    pub const fn from_secs(secs: u64) -> LoadDuration {
        LoadDuration::new(Duration::from_secs(secs))
    }

    pub const fn from_millis(millis: u64) -> LoadDuration {
        LoadDuration::new(Duration::from_millis(millis))
    }

    pub fn as_human_time_string(&self) -> String {
        format!("{}", format_duration(self.duration))
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn get_duration(&self) -> Duration {
        self.duration
    }

    pub fn is_zero(&self) -> bool {
        self.duration.is_zero()
    }
}

impl FromStr for LoadDuration {
    type Err = humantime::DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LoadDuration {
            duration: humantime::parse_duration(s.trim())?,
        })
    }
}

impl From<Duration> for LoadDuration {
    fn from(duration: Duration) -> Self {
        LoadDuration { duration }
    }
}

impl Display for LoadDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_human_time_string())
    }
}
