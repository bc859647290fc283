mod common;

use claimguard::claim::{ClaimField, ClaimInput};
use claimguard::config::Config;
use claimguard::error::PredictionError;
use claimguard::kernel::event::{Event, PredictionOutcome};
use claimguard::kernel::reactor::{Reactor, SideEffect};
use claimguard::kernel::state::FAILURE_MESSAGE;
use claimguard::services::predict::PredictionService;
use serde_json::json;
use std::time::Duration;
use tokio::sync::mpsc;

fn service_for(endpoint: &str) -> PredictionService {
    PredictionService::new(&Config::from_vars(Some(endpoint.to_string()), None))
}

#[tokio::test]
async fn test_posts_claim_as_json() {
    let (url, server) = common::serve_once(
        "200 OK",
        r#"{"denial_risk": 0.82, "reasons": ["icd_code_S43.421A (+0.32)", "payer_Blue Cross (+0.11)"]}"#,
    )
    .await;

    let mut claim = ClaimInput::default();
    claim.set(ClaimField::ProviderType, "Primary Care");

    let result = service_for(&url).predict(&claim).await.expect("prediction should succeed");
    assert_eq!(result.denial_risk, 0.82);
    assert_eq!(result.reasons, vec!["icd_code_S43.421A (+0.32)", "payer_Blue Cross (+0.11)"]);

    let raw = server.await.unwrap();
    let (head, body) = common::split_request(&raw);
    assert!(head.starts_with("POST /predict HTTP/1.1"));
    assert!(head.to_ascii_lowercase().contains("content-type: application/json"));

    let body: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        body,
        json!({
            "icd_code": "S43.421A",
            "cpt_code": "73721",
            "payer": "Blue Cross",
            "provider_type": "Primary Care",
        })
    );
}

#[tokio::test]
async fn test_missing_reasons_is_empty() {
    let (url, _server) = common::serve_once("200 OK", r#"{"denial_risk": 0.1}"#).await;

    let result = service_for(&url).predict(&ClaimInput::default()).await.unwrap();
    assert_eq!(result.denial_risk, 0.1);
    assert!(result.reasons.is_empty());
}

#[tokio::test]
async fn test_non_success_status() {
    let (url, _server) = common::serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#).await;

    let err = service_for(&url).predict(&ClaimInput::default()).await.unwrap_err();
    match err {
        PredictionError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let (url, _server) = common::serve_once("200 OK", "not json").await;

    let err = service_for(&url).predict(&ClaimInput::default()).await.unwrap_err();
    assert!(matches!(err, PredictionError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_connection_refused() {
    let url = common::dead_endpoint().await;

    let err = service_for(&url).predict(&ClaimInput::default()).await.unwrap_err();
    assert!(matches!(err, PredictionError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_configured_timeout_is_applied() {
    let (url, _server) = common::serve_silent().await;
    let service = PredictionService::new(&Config::from_vars(Some(url), Some("1".to_string())));

    let err = tokio::time::timeout(Duration::from_secs(10), service.predict(&ClaimInput::default()))
        .await
        .expect("client timeout should fire before the test guard");

    match err {
        Err(PredictionError::Transport(e)) => assert!(e.is_timeout(), "got {:?}", e),
        other => panic!("expected a transport timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_round_trip_through_reactor() {
    let (url, _server) = common::serve_once(
        "200 OK",
        r#"{"denial_risk": 0.4571, "reasons": ["cpt_code_73721 (+0.15)"]}"#,
    )
    .await;

    let config = Config::from_vars(Some(url), None);
    let (tx, rx) = mpsc::channel(100);
    let mut reactor = Reactor::new(rx, tx.clone(), &config);

    let (submission, claim) = reactor
        .tick_step(vec![Event::Submit])
        .into_iter()
        .find_map(|effect| match effect {
            SideEffect::Predict { submission, claim } => Some((submission, claim)),
            _ => None,
        })
        .expect("submit should emit Predict");

    PredictionService::new(&config).dispatch(submission, claim, tx).await.unwrap();

    let event = reactor.receiver.recv().await.expect("completion event");
    match &event {
        Event::PredictionCompleted { submission: id, outcome: PredictionOutcome::Succeeded(_) } => {
            assert_eq!(*id, submission)
        }
        other => panic!("unexpected event {:?}", other),
    }

    let effects = reactor.tick_step(vec![event]);
    match effects.last() {
        Some(SideEffect::Render(view)) => {
            assert!(view.contains("Denial Risk: 46%"));
            assert!(view.contains("CPT code \"73721\" is associated with higher denial risk."));
        }
        other => panic!("expected Render, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_dispatch_reaches_shell_as_generic_error() {
    let config = Config::from_vars(Some(common::dead_endpoint().await), None);
    let (tx, rx) = mpsc::channel(100);
    let mut reactor = Reactor::new(rx, tx.clone(), &config);

    let (submission, claim) = match reactor.tick_step(vec![Event::Submit]).into_iter().next() {
        Some(SideEffect::Predict { submission, claim }) => (submission, claim),
        other => panic!("expected Predict first, got {:?}", other),
    };

    PredictionService::new(&config).dispatch(submission, claim, tx).await.unwrap();
    let event = reactor.receiver.recv().await.expect("completion event");
    assert!(matches!(
        event,
        Event::PredictionCompleted { outcome: PredictionOutcome::Failed(_), .. }
    ));

    reactor.tick_step(vec![event]);
    assert_eq!(reactor.state.error(), Some(FAILURE_MESSAGE));
    assert!(!reactor.state.is_loading());
}
