use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::checking::{Outcome, PerfData, State};

/// The single status line handed to the monitoring host:
/// `SEVERITY - message|perfdata`.
pub struct Output {
    outcome: Outcome,
    perfdata: PerfData,
}

impl Output {
    pub fn new(outcome: Outcome, perfdata: PerfData) -> Self {
        Self { outcome, perfdata }
    }

    pub fn state(&self) -> State {
        self.outcome.state.clone()
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(
            f,
            "{} - {}|{}",
            self.outcome.state, self.outcome.summary, self.perfdata
        )
    }
}

#[cfg(test)]
mod test_output_format {
    use super::*;

    #[test]
    fn test_early_exit_keeps_perfdata_well_formed() {
        let output = Output::new(Outcome::crit("no thresholds set"), PerfData::default());
        assert_eq!(
            output.to_string(),
            "CRITICAL - no thresholds set|time=0.000000;;;; total=0;;;; sources=0;;;; \
             throughput=0;;;; index_failures=0;;;; uncommited=0;;;;; \
             processbuffertime=0.0000000000;;;;; inputbufferate_m15=0.000000"
        );
    }

    #[test]
    fn test_message_may_span_lines() {
        let output = Output::new(
            Outcome::ok("Service is running!\nCheck took 0.25\n"),
            PerfData::default(),
        );
        let rendered = output.to_string();
        assert!(rendered.starts_with("OK - Service is running!\n"));
        assert!(rendered.contains("|time=0.000000;;;;"));
    }

    #[test]
    fn test_state_accessor() {
        let output = Output::new(Outcome::warn("lifecycle: paused"), PerfData::default());
        assert_eq!(i32::from(output.state()), 1);
    }
}
