use crate::domain::{AppState, Screen};
use crate::pipeline::{PipelineRun, PipelineRunEvent, RunStage, StageSignal, RETRY_PROMPT};

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::RouteChanged(screen) => state.screen = screen,

        DomainEvent::BriefEdited(brief) => state.form.brief = brief,
        DomainEvent::AvoidTopicsEdited(topics) => state.form.avoid_topics = topics,

        DomainEvent::PipelineEvent { run_id, ev } => {
            if let PipelineRunEvent::Started = ev {
                if !state.run.is_generating() {
                    state.run = PipelineRun::starting(run_id);
                }
            } else if state.run.run_id == Some(run_id) {
                apply_pipeline_event(&mut state, ev);
            }
        }

        DomainEvent::HistoryRefreshStarted { seq } => {
            state.history.requested_seq = state.history.requested_seq.max(seq);
            state.history.in_flight += 1;
        }

        DomainEvent::HistoryLoaded { seq, assets, at } => {
            state.history.in_flight = state.history.in_flight.saturating_sub(1);
            // An older refresh finishing late must not replace a newer list.
            if seq > state.history.applied_seq {
                state.history.assets = assets;
                state.history.applied_seq = seq;
                state.history.last_refreshed = Some(at);
            }
        }

        DomainEvent::HistoryRefreshFailed { seq: _ } => {
            // The cached list stays exactly as it was.
            state.history.in_flight = state.history.in_flight.saturating_sub(1);
        }
    }
    state
}

fn apply_pipeline_event(state: &mut AppState, ev: PipelineRunEvent) {
    match ev {
        PipelineRunEvent::Started => {}

        PipelineRunEvent::StageEntered { stage, asset_id } => {
            if state.run.enter(StageSignal::Succeeded, stage) && asset_id.is_some() {
                state.run.asset_id = asset_id;
            }
        }

        PipelineRunEvent::Failed { stage, error } => {
            if state.run.stage == stage && state.run.enter(StageSignal::Failed, RunStage::Idle) {
                state.run.log_message = RETRY_PROMPT.to_string();
                state.run.failure = Some(error);
            }
        }

        PipelineRunEvent::Completed { asset_id } => {
            if state.run.stage == RunStage::Completing
                && state.run.enter(StageSignal::Settled, RunStage::Idle)
            {
                state.run.asset_id = Some(asset_id.clone());
                state.last_completed = Some(asset_id);
                state.screen = Screen::Dashboard;
                state.form.brief.clear();
                state.form.avoid_topics.clear();
            }
        }

        PipelineRunEvent::Cancelled => {
            state.run.enter(StageSignal::Cancelled, RunStage::Idle);
        }
    }
}
