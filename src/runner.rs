use std::time::{Duration, Instant};

use crate::checking::{Outcome, PerfData};
use crate::checks::{self, ClusterSample, Thresholds};
use crate::http::{self, require_array, require_bool, require_f64, require_str, ApiClient, ApiError};

const CLUSTER_NODES: &str = "/system/cluster/nodes";
const CLUSTER_STATUS: &str = "/cluster";
const SYSTEM: &str = "/system";
const INDEXER_FAILURES: &str = "/system/indexer/failures?limit=1&offset=0";
const THROUGHPUT: &str = "/system/throughput";
const INPUTS: &str = "/system/inputs";
const INDEXER_OVERVIEW: &str = "/system/indexer/overview";
const JOURNAL_UNCOMMITTED: &str = "/system/metrics/org.graylog2.journal.entries-uncommitted";
const PROCESS_BUFFER_TIME: &str =
    "/system/metrics/org.graylog2.shared.buffers.processors.ProcessBufferProcessor.processTime";
const INPUT_BUFFER_RATE: &str =
    "/system/metrics/org.graylog2.shared.buffers.InputBufferImpl.incomingMessages";

pub struct CheckConfig {
    pub base_url: String,
    pub user: String,
    pub password: String,
    pub timeout: Duration,
    pub debug: bool,
}

/// Runs the whole check pipeline and always produces a reportable pair.
/// The perfdata stays zeroed on every path that bails out before the
/// metric sampling stage.
pub async fn collect_check(config: CheckConfig, thresholds: Thresholds) -> (Outcome, PerfData) {
    let debug = config.debug;
    let client = match http::build(http::ClientConfig {
        timeout: config.timeout,
    }) {
        Ok(client) => client,
        Err(_) => {
            return (
                Outcome::unknown("Error building the HTTP client"),
                PerfData::default(),
            )
        }
    };
    let api = ApiClient::new(
        client,
        config.base_url,
        config.user,
        config.password,
        debug,
    );

    match sample_and_evaluate(&api, &thresholds).await {
        Ok(result) => result,
        Err(err) => {
            if debug {
                println!("{err:?}");
            }
            (
                Outcome {
                    state: err.state(),
                    summary: err.to_string(),
                },
                PerfData::default(),
            )
        }
    }
}

/// Samples the endpoints in their fixed order. Cluster-health verdicts
/// short-circuit with zeroed perfdata; the metric stage always completes
/// before thresholds are applied.
async fn sample_and_evaluate(
    api: &ApiClient,
    thresholds: &Thresholds,
) -> Result<(Outcome, PerfData), ApiError> {
    let started = Instant::now();

    // Roster vs. liveness map
    let roster = api.get(CLUSTER_NODES).await?;
    let total_cluster_nodes = require_f64(&roster, "/total")?;
    let nodes = require_array(&roster, "/nodes")?;
    let liveness = api.get(CLUSTER_STATUS).await?;

    let mut alive_nodes = Vec::new();
    let mut dead_nodes = Vec::new();
    for node in nodes {
        let node_id = require_str(node, "/node_id")?;
        let hostname = require_str(node, "/hostname")?;
        match liveness.get(node_id.as_str()) {
            Some(status) if !status.is_null() => alive_nodes.push(hostname),
            _ => dead_nodes.push(hostname),
        }
    }
    if !dead_nodes.is_empty() {
        let listing = dead_nodes
            .iter()
            .map(|hostname| format!("Node: {hostname} - not alive"))
            .collect::<Vec<_>>()
            .join(", ");
        return Ok((Outcome::crit(listing), PerfData::default()));
    }

    // Service state
    let system = api.get(SYSTEM).await?;
    if !require_bool(&system, "/is_processing")? {
        return Ok((
            Outcome::crit("Service is not processing!"),
            PerfData::default(),
        ));
    }
    let lifecycle = require_str(&system, "/lifecycle")?;
    if lifecycle != "running" {
        return Ok((
            Outcome::warn(format!("lifecycle: {lifecycle}")),
            PerfData::default(),
        ));
    }
    let lb_status = require_str(&system, "/lb_status")?;
    if lb_status != "alive" {
        return Ok((
            Outcome::warn(format!("lb_status: {lb_status}")),
            PerfData::default(),
        ));
    }

    // Metric sampling, no short-circuit
    let failures = api.get(INDEXER_FAILURES).await?;
    let throughput = api.get(THROUGHPUT).await?;
    let inputs = api.get(INPUTS).await?;
    let overview = api.get(INDEXER_OVERVIEW).await?;
    let uncommitted = api.get(JOURNAL_UNCOMMITTED).await?;
    let process_buffer = api.get(PROCESS_BUFFER_TIME).await?;
    let input_buffer = api.get(INPUT_BUFFER_RATE).await?;
    let elapsed = started.elapsed();

    let sample = ClusterSample {
        total_cluster_nodes,
        alive_nodes,
        index_failures_total: require_f64(&failures, "/total")?,
        throughput: require_f64(&throughput, "/throughput")?,
        inputs_total: require_f64(&inputs, "/total")?,
        events_total: require_f64(&overview, "/counts/events")?,
        uncommitted: require_f64(&uncommitted, "/value")?,
        process_buffer_p95: require_f64(&process_buffer, "/p95")?,
        input_buffer_m15: require_f64(&input_buffer, "/m15_rate")?,
        elapsed,
    };

    let perfdata = sample.perfdata();
    Ok((checks::evaluate(thresholds, &sample), perfdata))
}
