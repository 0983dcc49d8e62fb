#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Semaphore;

use genie_app_core::app_core::AppStore;
use genie_app_core::domain::{AppState, ConsoleSettings};
use genie_app_core::kernel::AppKernel;
use genie_app_core::ports::PreviewPort;
use genie_core::{AssetId, GeneratedAsset, IdeaCreated, IdeaParams};
use genie_pipeline::{Endpoints, PipelineClient, PipelineError};

pub const API_BASE: &str = "http://localhost:8000/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateIdea(IdeaParams),
    ExpandAsset(AssetId),
    ListHistory,
}

struct Script {
    calls: Mutex<Vec<Call>>,
    idea: Mutex<Result<IdeaCreated, PipelineError>>,
    expand: Mutex<Result<(), PipelineError>>,
    history: Mutex<Result<Vec<GeneratedAsset>, PipelineError>>,
    expand_gate: Mutex<Option<Arc<Semaphore>>>,
}

/// In-memory service whose answers are set per test.
#[derive(Clone)]
pub struct FakeService {
    script: Arc<Script>,
}

impl FakeService {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Script {
                calls: Mutex::new(Vec::new()),
                idea: Mutex::new(Ok(idea("a1"))),
                expand: Mutex::new(Ok(())),
                history: Mutex::new(Ok(Vec::new())),
                expand_gate: Mutex::new(None),
            }),
        }
    }

    pub fn idea_result(&self, result: Result<IdeaCreated, PipelineError>) {
        *self.script.idea.lock().unwrap() = result;
    }

    pub fn expand_result(&self, result: Result<(), PipelineError>) {
        *self.script.expand.lock().unwrap() = result;
    }

    pub fn history_result(&self, result: Result<Vec<GeneratedAsset>, PipelineError>) {
        *self.script.history.lock().unwrap() = result;
    }

    /// Holds every expand call until a permit is added to the returned gate.
    pub fn gate_expand(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.script.expand_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.script.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl PipelineClient for FakeService {
    async fn create_idea(&self, params: &IdeaParams) -> Result<IdeaCreated, PipelineError> {
        self.record(Call::CreateIdea(params.clone()));
        self.script.idea.lock().unwrap().clone()
    }

    async fn expand_asset(&self, id: &AssetId) -> Result<(), PipelineError> {
        self.record(Call::ExpandAsset(id.clone()));
        let gate = self.script.expand_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.acquire().await.unwrap().forget();
        }
        self.script.expand.lock().unwrap().clone()
    }

    async fn list_history(&self) -> Result<Vec<GeneratedAsset>, PipelineError> {
        self.record(Call::ListHistory);
        self.script.history.lock().unwrap().clone()
    }
}

#[derive(Clone, Default)]
pub struct RecordingPreview {
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl PreviewPort for RecordingPreview {
    fn open_preview(&self, url: &str) -> anyhow::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

pub fn idea(id: &str) -> IdeaCreated {
    IdeaCreated {
        id: AssetId::new(id),
        strategy: serde_json::json!({ "title": "Macro Tracker" }),
    }
}

pub fn asset(id: &str, title: &str) -> GeneratedAsset {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "idea_type": "Checklist",
        "idea_title": title,
        "conversion_score": 88,
    }))
    .unwrap()
}

pub fn kernel(
    service: &FakeService,
    preview: &RecordingPreview,
    settle_delay_ms: u64,
) -> (AppKernel<FakeService, RecordingPreview>, AppStore) {
    let settings = ConsoleSettings {
        api_base: API_BASE.to_string(),
        settle_delay_ms,
        ..ConsoleSettings::default()
    };
    let store = AppStore::new(AppState::default());
    let kernel = AppKernel::new(
        store.clone(),
        service.clone(),
        preview.clone(),
        Endpoints::new(API_BASE).unwrap(),
        &settings,
    );
    (kernel, store)
}

/// Applies remote events until `done` holds, failing the test after 5s.
pub async fn pump_until(
    kernel: &mut AppKernel<FakeService, RecordingPreview>,
    done: impl Fn(&AppState) -> bool,
) {
    let wait = async {
        while !done(&kernel.store.state()) {
            assert!(kernel.next_event().await, "event channel closed");
        }
    };
    tokio::time::timeout(Duration::from_secs(5), wait)
        .await
        .expect("state never reached");
}
