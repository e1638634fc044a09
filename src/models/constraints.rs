//! Printer capacity limits.

use serde::{Deserialize, Serialize};

/// Simultaneous capacity of one printer.
///
/// A batch is admissible only while both limits hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrinterConstraints {
    /// Maximum total volume printed at once.
    pub max_volume: f64,
    /// Maximum number of parts printed at once.
    pub max_items: usize,
}

impl PrinterConstraints {
    /// Creates printer constraints.
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }

    /// Whether a batch holding `volume` across `items` parts is within limits.
    #[inline]
    pub fn admits(&self, volume: f64, items: usize) -> bool {
        volume <= self.max_volume && items <= self.max_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_both_limits() {
        let printer = PrinterConstraints::new(300.0, 2);
        assert!(printer.admits(300.0, 2));
        assert!(!printer.admits(300.5, 1));
        assert!(!printer.admits(10.0, 3));
    }

    #[test]
    fn test_constraints_from_record() {
        let printer: PrinterConstraints =
            serde_json::from_str(r#"{"max_volume": 300, "max_items": 2}"#).unwrap();
        assert_eq!(printer, PrinterConstraints::new(300.0, 2));
    }
}
