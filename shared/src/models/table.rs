//! Table registry model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy status of a dining table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Cleaning,
}

/// Composite key identifying a table within a room
///
/// The externally visible display id is `"{room} - {table}"`. Room names
/// must not contain the `" - "` delimiter; parsing splits on the first
/// occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TableKey {
    pub room: String,
    pub table: String,
}

impl TableKey {
    pub fn new(room: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            table: table.into(),
        }
    }

    /// Parse a display id of the form `"{room} - {table}"`
    ///
    /// Returns `None` for synthetic ids (e.g. `"Online-1234"`) and anything
    /// else that does not carry the delimiter.
    pub fn parse(display_id: &str) -> Option<Self> {
        let (room, table) = display_id.split_once(" - ")?;
        if room.is_empty() || table.is_empty() {
            return None;
        }
        Some(Self::new(room, table))
    }

    /// The display id used by order records and the billing surface
    pub fn display_id(&self) -> String {
        format!("{} - {}", self.room, self.table)
    }
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.room, self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let key = TableKey::parse("Restaurant - T1").unwrap();
        assert_eq!(key.room, "Restaurant");
        assert_eq!(key.table, "T1");
        assert_eq!(key.display_id(), "Restaurant - T1");
    }

    #[test]
    fn test_parse_splits_on_first_delimiter() {
        let key = TableKey::parse("Majlis(RM6&7) - T12").unwrap();
        assert_eq!(key.room, "Majlis(RM6&7)");
        assert_eq!(key.table, "T12");
    }

    #[test]
    fn test_parse_rejects_synthetic_ids() {
        assert!(TableKey::parse("Online-1712345678901").is_none());
        assert!(TableKey::parse("T5").is_none());
        assert!(TableKey::parse(" - T1").is_none());
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&TableStatus::Available).unwrap();
        assert_eq!(json, "\"Available\"");
        let parsed: TableStatus = serde_json::from_str("\"Cleaning\"").unwrap();
        assert_eq!(parsed, TableStatus::Cleaning);
    }
}
