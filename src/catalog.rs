//! Product and bill-of-materials catalog.
//!
//! An ouvrage product is defined by a [`Bom`] listing its component products
//! and quantities. Exploding a BoM against an ouvrage order line produces
//! the component [`OrderLine`]s, scaled by the ordered quantity.
//!
//! Nesting is single-level: a BoM whose component is itself an ouvrage is
//! rejected at validation time, so the renderer never has to resolve more
//! than one parent hop.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::order::{LineId, OrderLine, ParentRef};

/// A sellable product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Sale price per unit.
    pub list_price: f64,
    /// Purchase cost per unit.
    #[serde(default)]
    pub standard_price: f64,
    #[serde(default)]
    pub uom: String,
    #[serde(default)]
    pub is_ouvrage: bool,
}

/// One component of a BoM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomLine {
    pub product: Product,
    /// Quantity per unit of the finished ouvrage.
    pub quantity: f64,
}

/// Bill of materials for an ouvrage product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bom {
    pub code: String,
    pub product: Product,
    /// Quantity of finished product this BoM describes.
    #[serde(default = "default_bom_qty")]
    pub quantity: f64,
    /// Default for the hide-prices flag of exploded lines.
    #[serde(default)]
    pub hide_prices: bool,
    /// Default for the hide-structure flag of exploded lines.
    #[serde(default)]
    pub hide_structure: bool,
    pub lines: Vec<BomLine>,
}

fn default_bom_qty() -> f64 {
    1.0
}

impl Bom {
    /// Checks the single-level nesting constraint.
    ///
    /// A product flagged as ouvrage may not appear among the components of
    /// another BoM.
    pub fn validate(&self) -> Result<()> {
        for line in &self.lines {
            if line.product.is_ouvrage {
                bail!(
                    "BoM {}: component {} is itself an ouvrage; nested ouvrages are not allowed",
                    self.code,
                    line.product.name
                );
            }
        }
        Ok(())
    }

    /// Builds the ouvrage order line for this BoM.
    ///
    /// The line's unit price is the summed component sale price per finished
    /// unit; hide flags default from the BoM.
    pub fn ouvrage_line(&self, id: LineId, quantity: f64) -> OrderLine {
        let factor = 1.0 / self.quantity.max(f64::MIN_POSITIVE);
        let unit_price: f64 = self
            .lines
            .iter()
            .map(|l| l.product.list_price * l.quantity * factor)
            .sum();
        OrderLine {
            id,
            product: self.product.name.clone(),
            description: String::new(),
            quantity,
            uom: self.product.uom.clone(),
            price_unit: unit_price,
            cost: 0.0,
            discount: 0.0,
            is_ouvrage: true,
            hide_prices: self.hide_prices,
            hide_structure: self.hide_structure,
            bom_code: Some(self.code.clone()),
            parent: ParentRef::None,
        }
    }

    /// Explodes this BoM into component lines for the given ouvrage line.
    ///
    /// Component quantities are BoM quantities scaled by the ordered
    /// quantity (relative to the BoM's own finished quantity). Ids are
    /// allocated sequentially starting at `first_id`.
    pub fn explode(&self, parent: &OrderLine, first_id: LineId) -> Vec<OrderLine> {
        let factor = parent.quantity / self.quantity.max(f64::MIN_POSITIVE);
        self.lines
            .iter()
            .enumerate()
            .map(|(offset, bom_line)| OrderLine {
                id: first_id + offset as LineId,
                product: bom_line.product.name.clone(),
                description: String::new(),
                quantity: bom_line.quantity * factor,
                uom: bom_line.product.uom.clone(),
                price_unit: bom_line.product.list_price,
                cost: bom_line.product.standard_price,
                discount: 0.0,
                is_ouvrage: false,
                hide_prices: false,
                hide_structure: false,
                bom_code: None,
                parent: ParentRef::Id(parent.id),
            })
            .collect()
    }
}
