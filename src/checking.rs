use std::fmt::{Display, Formatter, Result as FormatResult};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum State {
    Ok,
    Warn,
    Crit,
    Unknown,
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warn => write!(f, "WARNING"),
            Self::Crit => write!(f, "CRITICAL"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl From<State> for i32 {
    fn from(value: State) -> Self {
        match value {
            State::Ok => 0,
            State::Warn => 1,
            State::Crit => 2,
            State::Unknown => 3,
        }
    }
}

/// Final verdict of the check: the severity plus the human-readable
/// message that goes in front of the perfdata pipe.
#[derive(Debug, PartialEq)]
pub struct Outcome {
    pub state: State,
    pub summary: String,
}

impl Outcome {
    pub fn ok(summary: impl Into<String>) -> Self {
        Self {
            state: State::Ok,
            summary: summary.into(),
        }
    }

    pub fn warn(summary: impl Into<String>) -> Self {
        Self {
            state: State::Warn,
            summary: summary.into(),
        }
    }

    pub fn crit(summary: impl Into<String>) -> Self {
        Self {
            state: State::Crit,
            summary: summary.into(),
        }
    }

    pub fn unknown(summary: impl Into<String>) -> Self {
        Self {
            state: State::Unknown,
            summary: summary.into(),
        }
    }
}

/// Performance data block of the status line.
///
/// Starts out all zeros so that early-exit paths still emit a
/// syntactically complete perfdata block. The semicolon suffixes mark
/// empty warn/crit/min/max fields; the last three fields carry five
/// semicolons, which downstream graph templates rely on.
#[derive(Debug, Default, PartialEq)]
pub struct PerfData {
    pub time: f64,
    pub total: f64,
    pub sources: f64,
    pub throughput: f64,
    pub index_failures: f64,
    pub uncommitted: f64,
    pub process_buffer_time: f64,
    pub input_buffer_rate_m15: f64,
}

impl Display for PerfData {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(
            f,
            "time={:.6};;;; total={:.0};;;; sources={:.0};;;; throughput={:.0};;;; \
             index_failures={:.0};;;; uncommited={:.0};;;;; processbuffertime={:.10};;;;; \
             inputbufferate_m15={:.6}",
            self.time,
            self.total,
            self.sources,
            self.throughput,
            self.index_failures,
            self.uncommitted,
            self.process_buffer_time,
            self.input_buffer_rate_m15,
        )
    }
}

#[cfg(test)]
mod test_state {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(State::Ok.to_string(), "OK");
        assert_eq!(State::Warn.to_string(), "WARNING");
        assert_eq!(State::Crit.to_string(), "CRITICAL");
        assert_eq!(State::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(State::Ok), 0);
        assert_eq!(i32::from(State::Warn), 1);
        assert_eq!(i32::from(State::Crit), 2);
        assert_eq!(i32::from(State::Unknown), 3);
    }

    #[test]
    fn test_ordering() {
        assert!(State::Ok < State::Warn);
        assert!(State::Warn < State::Crit);
        assert!(State::Crit < State::Unknown);
    }
}
