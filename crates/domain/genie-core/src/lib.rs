pub mod asset;
pub mod brief;

pub use asset::{AssetId, GeneratedAsset, IdeaCreated};
pub use brief::{GenerationRequest, IdeaParams};
