/// Opens the externally rendered preview of a generated asset.
pub trait PreviewPort: Send + Sync + 'static {
    fn open_preview(&self, url: &str) -> anyhow::Result<()>;
}
