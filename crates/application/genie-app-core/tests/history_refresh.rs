mod support;

use chrono::Utc;
use genie_app_core::app_core::{reduce, AppCommand};
use genie_app_core::domain::AppState;
use genie_app_core::DomainEvent;
use genie_pipeline::PipelineError;

use support::{asset, kernel, pump_until, Call, FakeService, RecordingPreview};

#[tokio::test]
async fn failed_refresh_keeps_the_cached_list() {
    let service = FakeService::new();
    service.history_result(Ok(vec![asset("1", "Macro Tracker"), asset("2", "ROI Sheet")]));
    let preview = RecordingPreview::default();
    let (mut kernel, store) = kernel(&service, &preview, 0);

    kernel.dispatch(AppCommand::LoadInitialState);
    assert!(store.state().history.is_refreshing());
    pump_until(&mut kernel, |s| !s.history.is_refreshing()).await;

    let loaded = store.state().history;
    assert_eq!(loaded.assets.len(), 2);
    assert!(loaded.last_refreshed.is_some());

    service.history_result(Err(PipelineError::Transport("timed out".into())));
    kernel.dispatch(AppCommand::RefreshHistory);
    pump_until(&mut kernel, |s| !s.history.is_refreshing()).await;

    let after = store.state().history;
    assert_eq!(after.assets, loaded.assets);
    assert_eq!(after.last_refreshed, loaded.last_refreshed);
    assert_eq!(after.requested_seq, 2);
    assert_eq!(
        service.calls(),
        [Call::ListHistory, Call::ListHistory]
    );
}

#[tokio::test]
async fn history_is_shown_in_service_order() {
    let service = FakeService::new();
    service.history_result(Ok(vec![asset("9", "Newest"), asset("3", "Older")]));
    let preview = RecordingPreview::default();
    let (mut kernel, store) = kernel(&service, &preview, 0);

    kernel.dispatch(AppCommand::RefreshHistory);
    pump_until(&mut kernel, |s| s.history.applied_seq == 1).await;

    let titles: Vec<_> = store
        .state()
        .history
        .assets
        .iter()
        .map(|a| a.title().to_string())
        .collect();
    assert_eq!(titles, ["Newest", "Older"]);
}

#[test]
fn late_refresh_does_not_replace_a_newer_list() {
    let mut state = AppState::default();
    state = reduce(state, DomainEvent::HistoryRefreshStarted { seq: 1 });
    state = reduce(state, DomainEvent::HistoryRefreshStarted { seq: 2 });

    state = reduce(
        state,
        DomainEvent::HistoryLoaded {
            seq: 2,
            assets: vec![asset("new", "Newer")],
            at: Utc::now(),
        },
    );
    assert!(state.history.is_refreshing());

    state = reduce(
        state,
        DomainEvent::HistoryLoaded {
            seq: 1,
            assets: vec![asset("old", "Older")],
            at: Utc::now(),
        },
    );

    assert!(!state.history.is_refreshing());
    assert_eq!(state.history.assets.len(), 1);
    assert_eq!(state.history.assets[0].id.as_str(), "new");
    assert_eq!(state.history.applied_seq, 2);
}

#[test]
fn indicator_stays_on_until_every_refresh_settles() {
    let mut state = AppState::default();
    state = reduce(state, DomainEvent::HistoryRefreshStarted { seq: 1 });
    state = reduce(state, DomainEvent::HistoryRefreshStarted { seq: 2 });

    state = reduce(state, DomainEvent::HistoryRefreshFailed { seq: 2 });
    assert!(state.history.is_refreshing());
    assert!(state.history.assets.is_empty());

    state = reduce(
        state,
        DomainEvent::HistoryLoaded {
            seq: 1,
            assets: vec![asset("old", "Older")],
            at: Utc::now(),
        },
    );
    assert!(!state.history.is_refreshing());
    assert_eq!(state.history.assets[0].id.as_str(), "old");
    assert_eq!(state.history.in_flight, 0);
}
