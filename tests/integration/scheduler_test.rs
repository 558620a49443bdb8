use std::sync::Arc;
use std::time::Duration;

use sysdash::core::system_monitor::{CyclePhase, MetricSource, Scheduler, SnapshotCollector};
use sysdash::ui::JsonLines;
use sysdash::MonitorError;

use super::support::{FakeProvider, RecordingSink};

fn scheduler(provider: Arc<FakeProvider>) -> Scheduler<RecordingSink> {
    Scheduler::new(SnapshotCollector::new(provider), RecordingSink::default())
        .with_interval(Duration::from_millis(1))
}

#[tokio::test]
async fn test_first_cycle_without_data_is_fatal() {
    let provider = Arc::new(FakeProvider::healthy().failing_everything());
    let mut scheduler = scheduler(provider);

    let err = scheduler.run().await.unwrap_err();
    assert!(matches!(err, MonitorError::ProviderUnavailable(_)));
    assert!(err.to_string().contains("scripted failure"));
    assert_eq!(scheduler.cycles(), 0);
    assert!(scheduler.sink().presented.is_empty());
}

#[tokio::test]
async fn test_partial_first_cycle_is_presented() {
    let provider = Arc::new(
        FakeProvider::healthy()
            .failing(MetricSource::Temperature)
            .failing(MetricSource::Network),
    );
    let mut scheduler = scheduler(provider);

    scheduler.run_cycles(1).await.unwrap();

    let snapshot = scheduler.sink().last_snapshot().unwrap();
    assert_eq!(snapshot.errors.len(), 2);
    assert_eq!(snapshot.cpu_usage_percent(), Some(42.0));
    assert_eq!(scheduler.sink().deltas(), vec![0]);
}

#[tokio::test]
async fn test_throughput_delta_across_cycles() {
    let provider = Arc::new(FakeProvider::healthy().with_rx(1000, 1500));
    let mut scheduler = scheduler(provider);

    scheduler.run_cycles(3).await.unwrap();

    // The first cycle has no baseline to compare against
    assert_eq!(scheduler.sink().deltas(), vec![0, 1500, 1500]);
    assert_eq!(scheduler.cycles(), 3);
    assert_eq!(scheduler.phase(), CyclePhase::Rendering);
}

#[tokio::test]
async fn test_missing_interfaces_keep_delta_at_zero() {
    let provider = Arc::new(FakeProvider::healthy().without_interfaces());
    let mut scheduler = scheduler(provider);

    scheduler.run_cycles(2).await.unwrap();
    assert_eq!(scheduler.sink().deltas(), vec![0, 0]);
}

#[tokio::test]
async fn test_later_total_failure_is_not_fatal() {
    let provider = Arc::new(FakeProvider::healthy().with_rx(5000, 100));
    let mut scheduler = scheduler(provider.clone());

    assert_eq!(scheduler.cycle().await.unwrap(), 0);

    provider.set_down(true);
    assert_eq!(scheduler.cycle().await.unwrap(), 0);

    let snapshot = scheduler.sink().last_snapshot().unwrap();
    assert_eq!(snapshot.errors.len(), MetricSource::ALL.len());
    assert!(!snapshot.has_usable_data());

    // Tracking restarts once the interface comes back
    provider.set_down(false);
    assert_eq!(scheduler.cycle().await.unwrap(), 0);
    assert_eq!(scheduler.cycle().await.unwrap(), 100);
    assert_eq!(scheduler.cycles(), 4);
}

#[tokio::test]
async fn test_json_sink_through_scheduler() {
    let provider = Arc::new(FakeProvider::healthy().with_rx(0, 4096));
    let mut scheduler = Scheduler::new(
        SnapshotCollector::new(provider),
        JsonLines::new(Vec::new()),
    )
    .with_interval(Duration::from_millis(1));

    scheduler.run_cycles(2).await.unwrap();

    let output = String::from_utf8(scheduler.into_sink().into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["rx_delta_bytes"], 4096);
    assert_eq!(second["snapshot"]["network"][0]["name"], "eth0");
}
