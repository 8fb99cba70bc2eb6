//! End-to-end apply flow against the scripted runner.

use std::sync::Arc;
use std::time::Duration;

use netswitch_common::adapter::AdapterName;
use netswitch_common::preset::{DnsServerPair, Preset};
use netswitch_core::dns::DnsService;
use netswitch_core::executor::{CommandName, CommandOutcome};

use crate::mock::MockRunner;

fn service(runner: &Arc<MockRunner>) -> DnsService {
    DnsService::new(runner.clone())
}

#[tokio::test]
async fn google_preset_on_wifi_issues_the_two_expected_commands() {
    let runner = Arc::new(MockRunner::always(CommandOutcome::success(
        String::new(),
        String::new(),
    )));
    let pair = DnsServerPair::from_preset(Preset::Google, AdapterName::new("Wi-Fi")).unwrap();

    let report = service(&runner).apply(&pair).await;
    assert!(report.ok);

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);

    assert_eq!(calls[0].command, CommandName::Netsh);
    assert_eq!(
        calls[0].args,
        vec!["interface", "ip", "set", "dns", "name=Wi-Fi", "static", "8.8.8.8"]
    );

    assert_eq!(calls[1].command, CommandName::Netsh);
    assert_eq!(
        calls[1].args,
        vec!["interface", "ip", "add", "dns", "name=Wi-Fi", "8.8.4.4", "index=2"]
    );

    for call in calls {
        assert_eq!(call.timeout, Duration::from_secs(30));
    }
}

#[tokio::test]
async fn preset_labels_route_to_their_pairs() {
    let cases = [
        ("AU - Cloudflare (1.1.1.1, 1.0.0.1)", "1.1.1.1", "1.0.0.1"),
        ("Google (8.8.8.8, 8.8.4.4)", "8.8.8.8", "8.8.4.4"),
        ("Quad9 (9.9.9.9, 149.112.112.112)", "9.9.9.9", "149.112.112.112"),
    ];

    for (label, primary, secondary) in cases {
        let preset = Preset::from_label(label).expect("label is in the closed set");
        let pair = DnsServerPair::from_preset(preset, AdapterName::default()).unwrap();
        assert_eq!(pair.primary.as_str(), primary);
        assert_eq!(pair.secondary.as_str(), secondary);
    }
}

#[tokio::test]
async fn mixed_family_pair_never_reaches_the_executor() {
    let runner = Arc::new(MockRunner::always(CommandOutcome::success(
        String::new(),
        String::new(),
    )));

    let report = service(&runner)
        .apply_raw("8.8.8.8", "::1", "Wi-Fi")
        .await;

    assert!(!report.ok);
    assert_eq!(
        report.message,
        "Please enter valid IPv4 or IPv6 addresses for DNS."
    );
    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn malformed_addresses_never_reach_the_executor() {
    let runner = Arc::new(MockRunner::always(CommandOutcome::success(
        String::new(),
        String::new(),
    )));

    for (primary, secondary) in [
        ("256.1.1.1", "8.8.4.4"),
        ("01.1.1.1", "8.8.4.4"),
        ("8.8.8.8", "gggg::1"),
        ("", ""),
    ] {
        let report = service(&runner).apply_raw(primary, secondary, "Wi-Fi").await;
        assert!(!report.ok, "{primary}/{secondary} must be rejected");
    }
    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn first_command_timeout_stops_the_flow() {
    let runner = Arc::new(MockRunner::sequence(vec![CommandOutcome::timeout()]));
    let pair = DnsServerPair::from_preset(Preset::Quad9, AdapterName::new("Ethernet")).unwrap();

    let report = service(&runner).apply(&pair).await;

    assert!(!report.ok);
    assert_eq!(report.message, "Command timed out. Please try again.");
    assert_eq!(runner.call_count(), 1);
}

#[tokio::test]
async fn secondary_failure_reports_partial_apply() {
    let runner = Arc::new(MockRunner::sequence(vec![
        CommandOutcome::success(String::new(), String::new()),
        CommandOutcome::failure(String::new(), "The object already exists.".to_string()),
    ]));
    let pair = DnsServerPair::from_preset(Preset::Cloudflare, AdapterName::default()).unwrap();

    let report = service(&runner).apply(&pair).await;

    assert!(!report.ok);
    assert!(report.message.contains("Primary DNS set"));
    assert!(report.message.contains("The object already exists."));
    assert_eq!(runner.call_count(), 2);
}

#[tokio::test]
async fn adapter_names_are_sanitized_into_the_argument() {
    let runner = Arc::new(MockRunner::always(CommandOutcome::success(
        String::new(),
        String::new(),
    )));

    let report = service(&runner)
        .apply_raw("1.1.1.1", "1.0.0.1", "Ethernet; shutdown")
        .await;

    assert!(report.ok);
    let calls = runner.calls();
    assert_eq!(calls[0].args[4], "name=Ethernet shutdown");
}

#[tokio::test]
async fn flush_uses_the_fixed_command_only() {
    let runner = Arc::new(MockRunner::always(CommandOutcome::success(
        String::new(),
        String::new(),
    )));

    let report = service(&runner).flush().await;

    assert!(report.ok);
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].command, CommandName::Ipconfig);
    assert_eq!(calls[0].args, vec!["/flushdns"]);
    assert_eq!(calls[0].timeout, Duration::from_secs(30));
}
