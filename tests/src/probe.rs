//! Latency probing and selection against scripted ping outcomes.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use netswitch_common::address::NetworkAddress;
use netswitch_core::executor::{CommandName, CommandOutcome};
use netswitch_core::probe::{self, CANDIDATES, ProbeCallback};

use crate::mock::MockRunner;

fn reply() -> CommandOutcome {
    CommandOutcome::success("Reply from host: time=9ms\n".to_string(), String::new())
}

#[tokio::test]
async fn probe_sends_a_single_ping_with_its_own_deadline() {
    let runner = MockRunner::always(reply());
    let address = NetworkAddress::parse("1.1.1.1").unwrap();

    let result = probe::probe(&runner, &address).await;

    assert!(result.latency_ms.is_some());
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].command, CommandName::Ping);
    assert_eq!(calls[0].args, vec!["-n", "1", "1.1.1.1"]);
    assert_eq!(calls[0].timeout, Duration::from_secs(10));
}

#[tokio::test]
async fn probe_timeout_is_an_absent_latency_not_an_error() {
    let runner = MockRunner::always(CommandOutcome::timeout());
    let address = NetworkAddress::parse("8.8.8.8").unwrap();

    let result = probe::probe(&runner, &address).await;

    assert_eq!(result.address, address);
    assert_eq!(result.latency_ms, None);
}

#[tokio::test]
async fn selection_probes_the_whole_trusted_pool() {
    let runner = Arc::new(MockRunner::always(reply()));

    let fastest = probe::select_fastest(runner.clone(), None).await;

    assert!(fastest.is_some());
    let calls = runner.calls();
    assert_eq!(calls.len(), CANDIDATES.len());
    for candidate in CANDIDATES {
        assert!(
            calls.iter().any(|call| call.args.contains(&candidate.to_string())),
            "{candidate} was never probed"
        );
    }
}

#[tokio::test]
async fn selection_never_picks_an_unreachable_candidate() {
    let runner = Arc::new(MockRunner::new(|_, args| {
        if args.iter().any(|arg| arg == "9.9.9.9") {
            CommandOutcome::success("Reply from host\n".to_string(), String::new())
        } else {
            CommandOutcome::failure(String::new(), "Request timed out.".to_string())
        }
    }));

    let fastest = probe::select_fastest(runner, None).await;

    let (address, latency) = fastest.expect("one candidate answers");
    assert_eq!(address.as_str(), "9.9.9.9");
    assert!(latency >= 0.0);
}

#[tokio::test]
async fn all_candidates_unreachable_selects_nothing() {
    let runner = Arc::new(MockRunner::always(CommandOutcome::timeout()));
    assert_eq!(probe::select_fastest(runner, None).await, None);
}

#[tokio::test]
async fn per_candidate_results_are_reported_as_they_arrive() {
    let runner = Arc::new(MockRunner::always(reply()));
    let reported: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let sink = reported.clone();
    let on_probe: ProbeCallback = Box::new(move |result| {
        sink.lock().unwrap().push(result.address.to_string());
    });

    let _ = probe::select_fastest(runner, Some(on_probe)).await;

    let mut reported = reported.lock().unwrap().clone();
    reported.sort();
    let mut expected: Vec<String> = CANDIDATES.iter().map(|c| c.to_string()).collect();
    expected.sort();
    assert_eq!(reported, expected);
}
