use crate::enums::UnitStatus;
use serde::{Deserialize, Serialize};

/// Slot as it arrives from `GET /goods/heatmap`, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecord {
    pub zone: String,
    pub row: i64,
    pub lane: i64,
    pub is_active: bool,
    /// The backend calls the occupant `goods`
    #[serde(default, alias = "goods")]
    pub occupant: Option<UnitSummaryRecord>,
}

/// Occupant summary embedded in a slot record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSummaryRecord {
    pub id: String,
    pub status: UnitStatus,
    #[serde(default)]
    pub fifo_rank: Option<i64>,
    pub aging: i64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub engine_number: Option<String>,
    #[serde(default)]
    pub chassis_number: Option<String>,
    #[serde(default)]
    pub bl_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goods_key_decodes_as_occupant() {
        let raw = r#"{
            "zone": "A", "row": 1, "lane": 2, "isActive": true,
            "goods": {
                "id": "g-1", "status": "READY", "fifoRank": 3, "aging": 10,
                "brand": "Hino", "engineNumber": "ENG-1", "chassisNumber": "CH-1"
            }
        }"#;
        let record: SlotRecord = serde_json::from_str(raw).unwrap();
        let occupant = record.occupant.unwrap();
        assert_eq!(occupant.id, "g-1");
        assert_eq!(occupant.fifo_rank, Some(3));
        assert_eq!(occupant.bl_number, None);
    }

    #[test]
    fn test_occupant_key_and_null() {
        let with_occupant = r#"{"zone":"B","row":2,"lane":1,"isActive":true,
            "occupant":{"id":"u","status":"PDI","fifoRank":null,"aging":0}}"#;
        let record: SlotRecord = serde_json::from_str(with_occupant).unwrap();
        assert_eq!(record.occupant.unwrap().status, UnitStatus::Pdi);

        let empty = r#"{"zone":"B","row":2,"lane":2,"isActive":true,"goods":null}"#;
        let record: SlotRecord = serde_json::from_str(empty).unwrap();
        assert!(record.occupant.is_none());
    }
}
