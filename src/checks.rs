use std::time::Duration;

use crate::checking::{Outcome, PerfData};

/// Threshold options resolved from the command line. All optional, but
/// the evaluator refuses to run with none of them set.
#[derive(Debug, Default)]
pub struct Thresholds {
    pub index_warn: Option<f64>,
    pub index_crit: Option<f64>,
    pub uncommitted_crit: Option<f64>,
    pub process_buffer_time_crit: Option<f64>,
    pub input_buffer_crit: Option<f64>,
}

impl Thresholds {
    fn is_empty(&self) -> bool {
        self.index_warn.is_none()
            && self.index_crit.is_none()
            && self.uncommitted_crit.is_none()
            && self.process_buffer_time_crit.is_none()
            && self.input_buffer_crit.is_none()
    }
}

/// Parses a single threshold option. A provided but unparsable value is a
/// configuration error and maps to UNKNOWN, naming the offending option.
pub fn parse_threshold(raw: Option<&str>, description: &str) -> Result<Option<f64>, Outcome> {
    match raw {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| Outcome::unknown(format!("Cannot parse given {description} value."))),
    }
}

/// Scalar health signals folded together from the sampled endpoints.
pub struct ClusterSample {
    pub total_cluster_nodes: f64,
    pub alive_nodes: Vec<String>,
    pub index_failures_total: f64,
    pub throughput: f64,
    pub inputs_total: f64,
    pub events_total: f64,
    pub uncommitted: f64,
    pub process_buffer_p95: f64,
    pub input_buffer_m15: f64,
    pub elapsed: Duration,
}

impl ClusterSample {
    pub fn perfdata(&self) -> PerfData {
        PerfData {
            time: self.elapsed.as_secs_f64(),
            total: self.events_total,
            sources: self.inputs_total,
            throughput: self.throughput,
            index_failures: self.index_failures_total,
            uncommitted: self.uncommitted,
            process_buffer_time: self.process_buffer_p95,
            input_buffer_rate_m15: self.input_buffer_m15,
        }
    }
}

/// Maps the sampled values against the configured thresholds.
///
/// Precedence is fixed: index warn, index crit, uncommitted journal
/// entries, process buffer p95, input buffer m15 rate. The index warn
/// window is bounded above by the critical limit so that a value past
/// both limits escalates straight to CRITICAL; an absent critical limit
/// counts as infinity there.
pub fn evaluate(thresholds: &Thresholds, sample: &ClusterSample) -> Outcome {
    if thresholds.is_empty() {
        return Outcome::crit("no thresholds set");
    }

    if let Some(warn) = thresholds.index_warn {
        let crit = thresholds.index_crit.unwrap_or(f64::INFINITY);
        if sample.index_failures_total >= warn && sample.index_failures_total < crit {
            return Outcome::warn(format!(
                "Index Failure above Warning Limit!\nService is running\n{}",
                index_summary(sample)
            ));
        }
    }
    if let Some(crit) = thresholds.index_crit {
        if sample.index_failures_total >= crit {
            return Outcome::crit(format!(
                "Index Failure above Critical Limit!\nService is running\n{}",
                index_summary(sample)
            ));
        }
    }
    if let Some(limit) = thresholds.uncommitted_crit {
        if sample.uncommitted > limit {
            return Outcome::crit(format!(
                "Uncommited above Warning Limit!\nService is running\n{}",
                console_summary(sample)
            ));
        }
    }
    if let Some(limit) = thresholds.process_buffer_time_crit {
        if sample.process_buffer_p95 > limit {
            return Outcome::crit(format!(
                "Process Buffer Time critical!\nService is running\n{}",
                console_summary(sample)
            ));
        }
    }
    if let Some(limit) = thresholds.input_buffer_crit {
        if sample.input_buffer_m15 < limit {
            return Outcome::crit(format!(
                "Input Buffer rate below threshold!\nService is running\n{}",
                console_summary(sample)
            ));
        }
    }

    Outcome::ok(format!("Service is running!\n{}", console_summary(sample)))
}

/// Short summary used by the index failure verdicts.
fn index_summary(sample: &ClusterSample) -> String {
    format!(
        "{:.0} total events processed\n{:.0} index failures\n{:.0} throughput\n{:.0} sources\nCheck took {:?}\n",
        sample.events_total,
        sample.index_failures_total,
        sample.throughput,
        sample.inputs_total,
        sample.elapsed,
    )
}

/// Full console summary used by the OK and metric-threshold verdicts.
fn console_summary(sample: &ClusterSample) -> String {
    let running_nodes: String = sample
        .alive_nodes
        .iter()
        .map(|hostname| format!("\tNode: {hostname} - is alive\n"))
        .collect();
    format!(
        "All nodes in the Cluster: {}\nRunning nodes:\n{}\n{:.0} total events processed\n{:.0} index failures\n{:.0} throughput\n{:.0} sources\n{:.0} uncommited\n{:.10} processbuffertime\n{:.6} inputbufferrate m_15 \nCheck took {}\n",
        sample.total_cluster_nodes,
        running_nodes,
        sample.events_total,
        sample.index_failures_total,
        sample.throughput,
        sample.inputs_total,
        sample.uncommitted,
        sample.process_buffer_p95,
        sample.input_buffer_m15,
        sample.elapsed.as_secs_f64(),
    )
}

#[cfg(test)]
mod test_parse_threshold {
    use super::*;
    use crate::checking::State;

    #[test]
    fn test_unset_is_ok() {
        assert_eq!(parse_threshold(None, "index warning error"), Ok(None));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(parse_threshold(Some("12.5"), "index warning error"), Ok(Some(12.5)));
    }

    #[test]
    fn test_integer() {
        assert_eq!(parse_threshold(Some("100"), "index critical error"), Ok(Some(100.0)));
    }

    #[test]
    fn test_garbage_is_unknown() {
        let err = parse_threshold(Some("lots"), "index warning error").unwrap_err();
        assert_eq!(err.state, State::Unknown);
        assert_eq!(err.summary, "Cannot parse given index warning error value.");
    }

    #[test]
    fn test_error_names_the_option() {
        let err = parse_threshold(Some("x"), "process buffer time critical").unwrap_err();
        assert_eq!(
            err.summary,
            "Cannot parse given process buffer time critical value."
        );
    }
}
