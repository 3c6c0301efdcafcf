//! Sales order data model.
//!
//! An [`Order`] holds a flat, display-ordered list of [`OrderLine`]s. Lines
//! referencing a parent through [`ParentRef`] are components of an ouvrage
//! (composite work item); the parent line itself carries `is_ouvrage`.
//!
//! Parent references arrive in two encodings depending on how the document
//! was produced: a bare line id, or an `[id, label]` pair. Both are
//! normalized to `ParentRef::Id` once, at deserialization, so nothing
//! downstream ever re-checks the shape.

use serde::{Deserialize, Serialize};
use serde::de::Deserializer;
use serde::ser::Serializer;
use std::collections::HashMap;

/// Identifier of an order line, unique within one order.
pub type LineId = u64;

/// Normalized reference from a component line to its parent ouvrage line.
///
/// Deserialization is permissive: `null`, `false` or an absent field mean
/// "no parent"; a bare integer or a `[id, label]` pair mean "child of id".
/// Any other shape is treated as "no parent" rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentRef {
    #[default]
    None,
    Id(LineId),
}

impl ParentRef {
    /// Builds a parent reference from a raw JSON value.
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => match n.as_u64() {
                Some(id) => ParentRef::Id(id),
                None => ParentRef::None,
            },
            serde_json::Value::Array(items) => items
                .first()
                .and_then(|v| v.as_u64())
                .map(ParentRef::Id)
                .unwrap_or(ParentRef::None),
            _ => ParentRef::None,
        }
    }

    /// Returns the parent line id, or None for top-level lines.
    pub fn id(&self) -> Option<LineId> {
        match self {
            ParentRef::None => None,
            ParentRef::Id(id) => Some(*id),
        }
    }

    /// True for top-level lines.
    pub fn is_none(&self) -> bool {
        matches!(self, ParentRef::None)
    }
}

impl<'de> Deserialize<'de> for ParentRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(ParentRef::from_value(&value))
    }
}

impl Serialize for ParentRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ParentRef::None => serializer.serialize_none(),
            ParentRef::Id(id) => serializer.serialize_u64(*id),
        }
    }
}

/// One line of a sales order.
///
/// An ouvrage line (`is_ouvrage`) is exploded into component lines parented
/// to it; its unit price is understood as the sum of its component prices,
/// so order totals skip ouvrage lines to avoid double counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: LineId,
    pub product: String,
    #[serde(default)]
    pub description: String,
    /// Ordered quantity.
    #[serde(default = "default_qty")]
    pub quantity: f64,
    /// Unit of measure label ("u", "m²", "h", ...).
    #[serde(default)]
    pub uom: String,
    /// Sale price per unit.
    #[serde(default)]
    pub price_unit: f64,
    /// Purchase cost per unit.
    #[serde(default)]
    pub cost: f64,
    /// Discount in percent.
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub is_ouvrage: bool,
    /// Hide component prices on printed output and in the line table.
    #[serde(default)]
    pub hide_prices: bool,
    /// Hide the component breakdown entirely (no expand control).
    #[serde(default)]
    pub hide_structure: bool,
    /// Code of the BoM this ouvrage was exploded from, if any.
    #[serde(default)]
    pub bom_code: Option<String>,
    #[serde(default)]
    pub parent: ParentRef,
}

fn default_qty() -> f64 {
    1.0
}

impl OrderLine {
    /// Effective unit price after discount.
    pub fn price_reduced(&self) -> f64 {
        self.price_unit * (1.0 - self.discount / 100.0)
    }

    /// Line subtotal (pre-tax).
    pub fn price_subtotal(&self) -> f64 {
        self.price_reduced() * self.quantity
    }

    /// Total purchase cost of the line.
    pub fn cost_total(&self) -> f64 {
        self.cost * self.quantity
    }

    /// True for lines that are components of an ouvrage.
    pub fn is_component(&self) -> bool {
        self.parent.id().is_some()
    }
}

/// Margin of a line, in currency and as a percentage of its subtotal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub amount: f64,
    pub percent: f64,
}

impl Margin {
    fn from_price_and_cost(price: f64, cost: f64) -> Self {
        let amount = price - cost;
        let percent = if price != 0.0 { amount / price * 100.0 } else { 0.0 };
        Self { amount, percent }
    }
}

/// A sales order with linked lines.
///
/// `by_id` and `children` are rebuilt by [`Order::link`] after
/// deserialization or any structural change; they are never serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    pub name: String,
    #[serde(default)]
    pub customer: String,
    /// Order date, ISO `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub lines: Vec<OrderLine>,

    #[serde(skip)]
    by_id: HashMap<LineId, usize>,
    #[serde(skip)]
    children: HashMap<LineId, Vec<usize>>,
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Order {
    /// Creates an empty order with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            currency: default_currency(),
            ..Default::default()
        }
    }

    /// Rebuilds the id and parent/child indexes from `lines`.
    ///
    /// Must be called after deserialization and after any mutation that
    /// adds, removes or reparents lines. Unknown parent ids are tolerated:
    /// the child entry is indexed under the referenced id regardless, which
    /// matches the permissive behavior of the source documents.
    pub fn link(&mut self) {
        self.by_id.clear();
        self.children.clear();
        for (index, line) in self.lines.iter().enumerate() {
            self.by_id.insert(line.id, index);
            if let Some(parent_id) = line.parent.id() {
                self.children.entry(parent_id).or_default().push(index);
            }
        }
    }

    /// Returns the line with the given id, if present.
    pub fn line(&self, id: LineId) -> Option<&OrderLine> {
        self.by_id.get(&id).map(|&i| &self.lines[i])
    }

    /// Returns the index of the line with the given id.
    pub fn line_index(&self, id: LineId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Indices of the component lines of the given parent, in display order.
    pub fn component_indices(&self, parent_id: LineId) -> &[usize] {
        self.children
            .get(&parent_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Component lines of the given parent, in display order.
    pub fn components(&self, parent_id: LineId) -> impl Iterator<Item = &OrderLine> {
        self.component_indices(parent_id).iter().map(|&i| &self.lines[i])
    }

    /// Appends a line and updates the indexes.
    pub fn push_line(&mut self, line: OrderLine) {
        let index = self.lines.len();
        self.by_id.insert(line.id, index);
        if let Some(parent_id) = line.parent.id() {
            self.children.entry(parent_id).or_default().push(index);
        }
        self.lines.push(line);
    }

    /// Smallest id not yet used by any line.
    pub fn next_line_id(&self) -> LineId {
        self.lines.iter().map(|l| l.id).max().map_or(1, |m| m + 1)
    }

    /// Margin of a line.
    ///
    /// For an ordinary line this is subtotal minus cost. For an ouvrage line
    /// the cost side is the summed cost of its components, since the ouvrage
    /// itself carries no purchase cost of its own.
    pub fn line_margin(&self, id: LineId) -> Option<Margin> {
        let line = self.line(id)?;
        let margin = if line.is_ouvrage {
            let component_cost: f64 = self.components(id).map(|c| c.cost_total()).sum();
            Margin::from_price_and_cost(line.price_subtotal(), component_cost)
        } else {
            Margin::from_price_and_cost(line.price_subtotal(), line.cost_total())
        };
        Some(margin)
    }

    /// Order total (pre-tax), excluding ouvrage parent lines.
    ///
    /// Component lines carry the amounts; an ouvrage line's price is the sum
    /// of its components, so including both would count everything twice.
    pub fn amount_untaxed(&self) -> f64 {
        self.lines
            .iter()
            .filter(|l| !l.is_ouvrage)
            .map(|l| l.price_subtotal())
            .sum()
    }

    /// Number of ouvrage lines.
    pub fn ouvrage_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_ouvrage).count()
    }

    /// Number of component lines.
    pub fn component_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_component()).count()
    }

    /// Ids of all ouvrage lines, in display order.
    pub fn ouvrage_ids(&self) -> Vec<LineId> {
        self.lines
            .iter()
            .filter(|l| l.is_ouvrage)
            .map(|l| l.id)
            .collect()
    }

    /// Changes the quantity of an ouvrage line, scaling its components.
    ///
    /// Each component quantity is multiplied by new/old ratio so the
    /// composition stays proportional. Unit prices and costs are left
    /// untouched; only subtotals follow. A zero previous quantity leaves the
    /// components as they are (no meaningful ratio exists).
    pub fn set_ouvrage_quantity(&mut self, id: LineId, new_qty: f64) {
        let Some(index) = self.line_index(id) else {
            return;
        };
        if !self.lines[index].is_ouvrage {
            self.lines[index].quantity = new_qty;
            return;
        }
        let old_qty = self.lines[index].quantity;
        self.lines[index].quantity = new_qty;
        if old_qty == 0.0 || new_qty == old_qty {
            return;
        }
        let ratio = new_qty / old_qty;
        let component_indices: Vec<usize> = self.component_indices(id).to_vec();
        for child_index in component_indices {
            self.lines[child_index].quantity *= ratio;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: LineId, parent: ParentRef) -> OrderLine {
        OrderLine {
            id,
            product: format!("P{id}"),
            description: String::new(),
            quantity: 1.0,
            uom: "u".to_string(),
            price_unit: 10.0,
            cost: 6.0,
            discount: 0.0,
            is_ouvrage: false,
            hide_prices: false,
            hide_structure: false,
            bom_code: None,
            parent,
        }
    }

    #[test]
    fn parent_ref_from_bare_id() {
        let v = serde_json::json!(7);
        assert_eq!(ParentRef::from_value(&v), ParentRef::Id(7));
    }

    #[test]
    fn parent_ref_from_pair() {
        let v = serde_json::json!([3, "Ouvrage A"]);
        assert_eq!(ParentRef::from_value(&v), ParentRef::Id(3));
    }

    #[test]
    fn parent_ref_falsy_means_no_parent() {
        for v in [
            serde_json::Value::Null,
            serde_json::json!(false),
            serde_json::json!(""),
        ] {
            assert_eq!(ParentRef::from_value(&v), ParentRef::None);
        }
    }

    #[test]
    fn parent_ref_malformed_is_tolerated() {
        // Neither null, scalar id, nor [id, label]: treated as no parent.
        for v in [
            serde_json::json!({"id": 3}),
            serde_json::json!(["three"]),
            serde_json::json!(-2),
        ] {
            assert_eq!(ParentRef::from_value(&v), ParentRef::None);
        }
    }

    #[test]
    fn subtotal_applies_discount() {
        let mut l = line(1, ParentRef::None);
        l.quantity = 3.0;
        l.price_unit = 100.0;
        l.discount = 10.0;
        assert!((l.price_subtotal() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn link_indexes_lines_and_components() {
        let mut order = Order::new("SO0001");
        order.lines = vec![
            {
                let mut l = line(1, ParentRef::None);
                l.is_ouvrage = true;
                l
            },
            line(2, ParentRef::Id(1)),
            line(3, ParentRef::Id(1)),
            line(4, ParentRef::None),
        ];
        order.link();

        assert_eq!(order.line(4).unwrap().id, 4);
        assert_eq!(order.component_indices(1), &[1, 2]);
        assert!(order.component_indices(4).is_empty());
    }

    #[test]
    fn ouvrage_margin_uses_component_costs() {
        let mut order = Order::new("SO0002");
        let mut parent = line(1, ParentRef::None);
        parent.is_ouvrage = true;
        parent.price_unit = 50.0;
        parent.cost = 0.0;
        let mut comp_a = line(2, ParentRef::Id(1));
        comp_a.quantity = 2.0;
        comp_a.price_unit = 15.0;
        comp_a.cost = 10.0;
        let mut comp_b = line(3, ParentRef::Id(1));
        comp_b.price_unit = 20.0;
        comp_b.cost = 12.0;
        order.lines = vec![parent, comp_a, comp_b];
        order.link();

        // Subtotal 50, component cost 2*10 + 12 = 32.
        let margin = order.line_margin(1).unwrap();
        assert!((margin.amount - 18.0).abs() < 1e-9);
        assert!((margin.percent - 36.0).abs() < 1e-9);
    }

    #[test]
    fn margin_percent_is_zero_for_free_line() {
        let mut order = Order::new("SO0003");
        let mut l = line(1, ParentRef::None);
        l.price_unit = 0.0;
        order.lines = vec![l];
        order.link();

        let margin = order.line_margin(1).unwrap();
        assert_eq!(margin.percent, 0.0);
    }

    #[test]
    fn totals_exclude_ouvrage_lines() {
        let mut order = Order::new("SO0004");
        let mut parent = line(1, ParentRef::None);
        parent.is_ouvrage = true;
        parent.price_unit = 35.0;
        let mut comp_a = line(2, ParentRef::Id(1));
        comp_a.price_unit = 15.0;
        let mut comp_b = line(3, ParentRef::Id(1));
        comp_b.price_unit = 20.0;
        let mut plain = line(4, ParentRef::None);
        plain.price_unit = 100.0;
        order.lines = vec![parent, comp_a, comp_b, plain];
        order.link();

        // 15 + 20 + 100: the ouvrage's own 35 would double-count.
        assert!((order.amount_untaxed() - 135.0).abs() < 1e-9);
    }

    #[test]
    fn quantity_scaling_scales_components() {
        let mut order = Order::new("SO0005");
        let mut parent = line(1, ParentRef::None);
        parent.is_ouvrage = true;
        parent.quantity = 1.0;
        let mut comp = line(2, ParentRef::Id(1));
        comp.quantity = 2.0;
        order.lines = vec![parent, comp];
        order.link();

        order.set_ouvrage_quantity(1, 2.0);
        assert_eq!(order.line(1).unwrap().quantity, 2.0);
        assert_eq!(order.line(2).unwrap().quantity, 4.0);

        order.set_ouvrage_quantity(1, 1.0);
        assert_eq!(order.line(2).unwrap().quantity, 2.0);
    }

    #[test]
    fn quantity_scaling_from_zero_leaves_components() {
        let mut order = Order::new("SO0006");
        let mut parent = line(1, ParentRef::None);
        parent.is_ouvrage = true;
        parent.quantity = 0.0;
        let mut comp = line(2, ParentRef::Id(1));
        comp.quantity = 3.0;
        order.lines = vec![parent, comp];
        order.link();

        order.set_ouvrage_quantity(1, 5.0);
        assert_eq!(order.line(1).unwrap().quantity, 5.0);
        assert_eq!(order.line(2).unwrap().quantity, 3.0);
    }

    #[test]
    fn push_line_keeps_indexes_current() {
        let mut order = Order::new("SO0007");
        let mut parent = line(1, ParentRef::None);
        parent.is_ouvrage = true;
        order.push_line(parent);
        order.push_line(line(2, ParentRef::Id(1)));

        assert_eq!(order.next_line_id(), 3);
        assert_eq!(order.component_indices(1), &[1]);
    }
}
