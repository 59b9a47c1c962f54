#[path = "drafting/export.rs"]
mod export;
#[path = "drafting/tiers.rs"]
mod tiers;
