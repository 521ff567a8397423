pub mod dto;
pub mod model;
pub mod validation;

pub use dto::{SlotRecord, UnitSummaryRecord};
pub use model::{Slot, SlotKey, UnitSummary};
pub use validation::{validate_slots, IgnoredRank, RecordError, RejectedRecord, SlotBatch};

/// Backend endpoint returning the full slot list
pub const SLOTS_ENDPOINT: &str = "/goods/heatmap";
