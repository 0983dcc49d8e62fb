pub mod asset_card;
pub mod header;
