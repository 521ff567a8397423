use contracts::dashboards::d410_yard_heatmap::{validate_slots, SlotBatch, SLOTS_ENDPOINT};

use crate::shared::api_client::{ApiClient, ApiError};

/// Fetch the full slot list and validate it.
///
/// A body that is not a JSON array fails the call; individual bad records
/// are dropped and logged.
pub async fn fetch_slots(client: &ApiClient) -> Result<SlotBatch, ApiError> {
    let values: Vec<serde_json::Value> = client.get_json(SLOTS_ENDPOINT).await?;
    let batch = validate_slots(values);

    for rejected in &batch.rejected {
        log::warn!(
            "Skipping slot record #{}: {}",
            rejected.index,
            rejected.reason
        );
    }
    for ignored in &batch.ignored_ranks {
        log::warn!(
            "Slot {} has fifoRank {}, treating the unit as unranked",
            ignored.key.location(),
            ignored.value
        );
    }
    let duplicate_ranks = batch.duplicate_ranks();
    if !duplicate_ranks.is_empty() {
        log::warn!("FIFO ranks shared by several units: {:?}", duplicate_ranks);
    }

    Ok(batch)
}
