//! Order document reading.
//!
//! Order documents are plain JSON files (see [`Order`] for the schema). The
//! reader deserializes the document, rejects duplicate line ids and rebuilds
//! the parent/child indexes so the order is ready for rendering and
//! computation.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::order::Order;

/// Reads sales order documents from JSON files.
pub struct OrderReader;

impl OrderReader {
    pub fn new() -> Self {
        OrderReader
    }

    /// Reads and links an order from the given path.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Order> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open order file {}", path.display()))?;
        let order: Order = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse order file {}", path.display()))?;
        finish(order)
    }
}

impl Default for OrderReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses an order from an in-memory JSON string.
pub fn parse_order(json: &str) -> Result<Order> {
    let order: Order = serde_json::from_str(json).context("failed to parse order document")?;
    finish(order)
}

fn finish(mut order: Order) -> Result<Order> {
    let mut seen: HashSet<u64> = HashSet::with_capacity(order.lines.len());
    for line in &order.lines {
        if !seen.insert(line.id) {
            bail!("duplicate line id {} in order {}", line.id, order.name);
        }
    }
    order.link();
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::ParentRef;

    const SAMPLE: &str = r#"{
        "name": "SO0042",
        "customer": "Dupont Construction",
        "date": "2025-11-03",
        "currency": "EUR",
        "lines": [
            {"id": 1, "product": "Ouvrage A", "quantity": 1.0,
             "price_unit": 35.0, "is_ouvrage": true, "hide_prices": true},
            {"id": 2, "product": "Component B", "quantity": 2.0,
             "price_unit": 10.0, "cost": 6.0, "parent": [1, "Ouvrage A"]},
            {"id": 3, "product": "Component C", "quantity": 1.0,
             "price_unit": 15.0, "cost": 9.0, "parent": 1},
            {"id": 4, "product": "Delivery", "price_unit": 50.0, "parent": false}
        ]
    }"#;

    #[test]
    fn parses_and_links_sample_order() {
        let order = parse_order(SAMPLE).unwrap();
        assert_eq!(order.name, "SO0042");
        assert_eq!(order.lines.len(), 4);
        assert_eq!(order.component_indices(1), &[1, 2]);
        assert!(order.line(1).unwrap().hide_prices);
    }

    #[test]
    fn both_parent_encodings_normalize_to_the_same_id() {
        let order = parse_order(SAMPLE).unwrap();
        assert_eq!(order.line(2).unwrap().parent, ParentRef::Id(1));
        assert_eq!(order.line(3).unwrap().parent, ParentRef::Id(1));
    }

    #[test]
    fn false_parent_is_no_parent() {
        let order = parse_order(SAMPLE).unwrap();
        assert_eq!(order.line(4).unwrap().parent, ParentRef::None);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{
            "name": "SO0001",
            "lines": [
                {"id": 1, "product": "A"},
                {"id": 1, "product": "B"}
            ]
        }"#;
        let err = parse_order(json).unwrap_err();
        assert!(err.to_string().contains("duplicate line id 1"));
    }

    #[test]
    fn unknown_parent_id_is_tolerated() {
        let json = r#"{
            "name": "SO0002",
            "lines": [
                {"id": 1, "product": "Orphan", "parent": 99}
            ]
        }"#;
        let order = parse_order(json).unwrap();
        assert_eq!(order.line(1).unwrap().parent, ParentRef::Id(99));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = OrderReader::new()
            .read("/nonexistent/order.json")
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/order.json"));
    }
}
