//! Integration tests for record delivery
//!
//! These tests verify how each delivery policy reacts to a failing sink and that the
//! file sink writes one parseable record per line.

mod common;

use airport_ops_simulator::simulation::{ShutdownSignal, SimulationError, SimulationOrchestrator};
use airport_ops_simulator::sink::build_sink;
use airport_ops_simulator::types::{DeliveryPolicy, SimulationConfig, SinkConfig, SinkKind};
use common::{test_config, RecordingSink};
use std::fs;
use tempfile::TempDir;

fn config_with(policy: DeliveryPolicy) -> SimulationConfig {
    SimulationConfig { delivery_policy: policy, max_ticks: Some(2), ..test_config(21) }
}

#[test]
fn test_fail_fast_drops_the_rest_of_the_tick_only() {
    let mut orchestrator =
        SimulationOrchestrator::new(config_with(DeliveryPolicy::FailFastTick)).unwrap();
    let mut sink = RecordingSink::failing_on([5]);

    let first = orchestrator.tick(&mut sink).unwrap();
    assert_eq!(first.delivered, 5);
    assert_eq!(first.failed, 1);
    assert_eq!(first.skipped, 19);

    let second = orchestrator.tick(&mut sink).unwrap();
    assert_eq!(second.delivered, 25);
    assert_eq!(second.failed, 0);

    let stats = orchestrator.statistics();
    assert_eq!(stats.records_emitted, 50);
    assert_eq!(stats.records_delivered, 30);
    assert_eq!(stats.records_failed, 1);
    assert_eq!(stats.records_skipped, 19);
    assert_eq!(stats.ticks_cut_short, 1);
    assert_eq!(orchestrator.fleet().len(), 25);
}

#[test]
fn test_skip_and_continue_delivers_everything_else() {
    let mut orchestrator =
        SimulationOrchestrator::new(config_with(DeliveryPolicy::SkipAndContinue)).unwrap();
    let mut sink = RecordingSink::failing_on([5, 6, 30]);

    orchestrator.run(&mut sink, &ShutdownSignal::new()).unwrap();

    let stats = orchestrator.statistics();
    assert_eq!(stats.ticks, 2);
    assert_eq!(stats.records_delivered, 47);
    assert_eq!(stats.records_failed, 3);
    assert_eq!(stats.records_skipped, 0);
    assert_eq!(stats.ticks_cut_short, 0);
    assert_eq!(sink.records.len(), 47);
}

#[test]
fn test_halt_stops_the_run_with_a_delivery_error() {
    let config = SimulationConfig { max_ticks: Some(10), ..config_with(DeliveryPolicy::Halt) };
    let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
    let mut sink = RecordingSink::failing_on([30]);

    let result = orchestrator.run(&mut sink, &ShutdownSignal::new());

    match result {
        Err(SimulationError::DeliveryError(message)) => assert!(message.contains("rejected")),
        other => panic!("expected delivery error, got {:?}", other),
    }
    let stats = orchestrator.statistics();
    assert_eq!(stats.ticks, 2);
    assert_eq!(stats.records_delivered, 30);
    assert_eq!(stats.records_failed, 1);
    assert_eq!(stats.records_skipped, 19);
    assert_eq!(stats.ticks_cut_short, 1);
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_disk_is_a_delivery_failure() {
    let config = SimulationConfig {
        max_active_flights: 4,
        sink: SinkConfig {
            kind: SinkKind::File,
            path: Some("/dev/full".to_string()),
            ..Default::default()
        },
        ..config_with(DeliveryPolicy::FailFastTick)
    };
    let mut sink = build_sink(&config.sink).unwrap();
    let mut orchestrator = SimulationOrchestrator::new(config).unwrap();

    let report = orchestrator.tick(&mut sink).unwrap();

    assert_eq!(report.emitted, 4);
    assert_eq!(report.delivered, 0);
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 3);
    assert_eq!(orchestrator.statistics().ticks_cut_short, 1);
}

#[test]
fn test_delivery_failure_leaves_fleet_state_intact() {
    let run = |fail_on: Vec<usize>| {
        let config = SimulationConfig {
            delivery_policy: DeliveryPolicy::FailFastTick,
            max_ticks: Some(8),
            ..test_config(22)
        };
        let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
        let mut sink = RecordingSink::failing_on(fail_on);
        orchestrator.run(&mut sink, &ShutdownSignal::new()).unwrap();
        orchestrator
            .fleet()
            .iter()
            .map(|flight| (flight.designator().clone(), flight.status()))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(vec![]), run(vec![0, 40, 41, 100]));
}

#[test]
fn test_file_sink_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("events.jsonl");
    let config = SimulationConfig {
        max_ticks: Some(3),
        max_active_flights: 4,
        sink: SinkConfig {
            kind: SinkKind::File,
            path: Some(path.to_string_lossy().to_string()),
            ..Default::default()
        },
        ..test_config(23)
    };

    let mut sink = build_sink(&config.sink).unwrap();
    let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
    orchestrator.run(&mut sink, &ShutdownSignal::new()).unwrap();
    drop(sink);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 12);
    for line in lines {
        let record: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(record["source_system_id"], "simulator-v8.0-time-compressed");
        let timestamp = &record["event_timestamp"];
        assert!(timestamp.is_i64() || timestamp.is_string());
    }
}

#[test]
fn test_unreachable_http_sink_is_fatal_at_startup() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = SinkConfig {
        kind: SinkKind::Http,
        endpoint: Some(format!("http://127.0.0.1:{}/ingest", port)),
        timeout_secs: 2,
        ..Default::default()
    };

    let error = SimulationError::from(build_sink(&config).unwrap_err());
    assert!(!error.is_recoverable());
    assert_eq!(error.category(), "Sink");
}
