use serde::{Deserialize, Serialize};

/// Lifecycle stage of a unit, set exclusively by the backend.
///
/// Codes the frontend does not know yet are kept in `Other` so the unit is
/// still drawn on the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnitStatus {
    Incoming,
    Received,
    Pdi,
    Repair,
    Ready,
    Delivered,
    Other(String),
}

impl UnitStatus {
    pub fn code(&self) -> &str {
        match self {
            UnitStatus::Incoming => "INCOMING",
            UnitStatus::Received => "RECEIVED",
            UnitStatus::Pdi => "PDI",
            UnitStatus::Repair => "REPAIR",
            UnitStatus::Ready => "READY",
            UnitStatus::Delivered => "DELIVERED",
            UnitStatus::Other(code) => code,
        }
    }

    /// Statuses offered in the status filter
    pub fn filterable() -> Vec<UnitStatus> {
        vec![
            UnitStatus::Incoming,
            UnitStatus::Received,
            UnitStatus::Pdi,
            UnitStatus::Repair,
            UnitStatus::Ready,
        ]
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "INCOMING" => UnitStatus::Incoming,
            "RECEIVED" => UnitStatus::Received,
            "PDI" => UnitStatus::Pdi,
            "REPAIR" => UnitStatus::Repair,
            "READY" => UnitStatus::Ready,
            "DELIVERED" => UnitStatus::Delivered,
            _ => UnitStatus::Other(code.trim().to_string()),
        }
    }
}

impl From<String> for UnitStatus {
    fn from(code: String) -> Self {
        UnitStatus::from_code(&code)
    }
}

impl From<UnitStatus> for String {
    fn from(status: UnitStatus) -> Self {
        status.code().to_string()
    }
}

impl std::fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(UnitStatus::from_code("READY"), UnitStatus::Ready);
        assert_eq!(UnitStatus::from_code("repair"), UnitStatus::Repair);
        assert_eq!(UnitStatus::Pdi.code(), "PDI");
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let status: UnitStatus = serde_json::from_str("\"ON_HOLD\"").unwrap();
        assert_eq!(status, UnitStatus::Other("ON_HOLD".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"ON_HOLD\"");
    }
}
