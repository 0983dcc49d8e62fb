use crate::domain::Screen;
use genie_core::AssetId;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Boot
    LoadInitialState,

    // Navigation
    Navigate(Screen),

    // Inputs
    EditBrief(String),
    EditAvoidTopics(String),

    // Pipeline
    StartGeneration,

    // History
    RefreshHistory,
    OpenPreview(AssetId),
}
