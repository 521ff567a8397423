use serde::{Deserialize, Serialize};

/// Yard zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    A,
    B,
    C,
    D,
    /// Pre-delivery inspection staging
    E,
}

impl Zone {
    /// Zone code as sent by the backend
    pub fn code(&self) -> &'static str {
        match self {
            Zone::A => "A",
            Zone::B => "B",
            Zone::C => "C",
            Zone::D => "D",
            Zone::E => "E",
        }
    }

    /// Human readable panel title
    pub fn display_name(&self) -> &'static str {
        match self {
            Zone::A => "Zone A",
            Zone::B => "Zone B",
            Zone::C => "Zone C",
            Zone::D => "Zone D",
            Zone::E => "PDI Area (E)",
        }
    }

    pub fn is_pdi_area(&self) -> bool {
        matches!(self, Zone::E)
    }

    /// Order in which zone panels are drawn: the PDI area on the west side,
    /// then the storage blocks north to south.
    pub fn display_order() -> [Zone; 5] {
        [Zone::E, Zone::D, Zone::C, Zone::B, Zone::A]
    }

    /// Parse a zone code, case-insensitive, surrounding whitespace ignored
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Zone::A),
            "B" => Some(Zone::B),
            "C" => Some(Zone::C),
            "D" => Some(Zone::D),
            "E" => Some(Zone::E),
            _ => None,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Zone::from_code("A"), Some(Zone::A));
        assert_eq!(Zone::from_code(" e "), Some(Zone::E));
        assert_eq!(Zone::from_code("F"), None);
        assert_eq!(Zone::from_code(""), None);
    }

    #[test]
    fn test_display_order_covers_all_zones() {
        let mut order = Zone::display_order().to_vec();
        order.sort();
        assert_eq!(order, vec![Zone::A, Zone::B, Zone::C, Zone::D, Zone::E]);
        assert!(Zone::display_order()[0].is_pdi_area());
    }
}
