//! In-memory demo order generation.
//!
//! Builds a deterministic sample order from a built-in construction catalog,
//! for demonstrations and tests that should not depend on an order file on
//! disk. Quantities and discounts are drawn from a seeded RNG so repeated
//! runs produce the same order.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Bom, BomLine, Product};
use crate::order::{Order, OrderLine, ParentRef};

/// Seed used for all demo orders.
pub const DEMO_SEED: u64 = 42;

fn product(name: &str, uom: &str, list_price: f64, standard_price: f64) -> Product {
    Product {
        name: name.to_string(),
        list_price,
        standard_price,
        uom: uom.to_string(),
        is_ouvrage: false,
    }
}

fn ouvrage_product(name: &str) -> Product {
    Product {
        name: name.to_string(),
        list_price: 0.0,
        standard_price: 0.0,
        uom: "u".to_string(),
        is_ouvrage: true,
    }
}

/// Built-in demo catalog: a few typical construction ouvrages.
static DEMO_BOMS: Lazy<Vec<Bom>> = Lazy::new(|| {
    vec![
        Bom {
            code: "OUV-CLOISON".to_string(),
            product: ouvrage_product("Cloison placo 72/48"),
            quantity: 1.0,
            hide_prices: true,
            hide_structure: false,
            lines: vec![
                BomLine { product: product("Plaque BA13", "m²", 4.50, 2.80), quantity: 2.0 },
                BomLine { product: product("Rail 48", "m", 1.90, 1.10), quantity: 0.9 },
                BomLine { product: product("Montant 48", "m", 2.10, 1.30), quantity: 2.6 },
                BomLine { product: product("Laine de verre 45mm", "m²", 3.20, 2.00), quantity: 1.0 },
                BomLine { product: product("Main d'œuvre pose", "h", 38.0, 26.0), quantity: 0.5 },
            ],
        },
        Bom {
            code: "OUV-PEINTURE".to_string(),
            product: ouvrage_product("Peinture murale 2 couches"),
            quantity: 1.0,
            hide_prices: false,
            hide_structure: false,
            lines: vec![
                BomLine { product: product("Sous-couche", "L", 6.80, 4.20), quantity: 0.12 },
                BomLine { product: product("Peinture acrylique", "L", 9.50, 5.90), quantity: 0.25 },
                BomLine { product: product("Main d'œuvre peinture", "h", 34.0, 24.0), quantity: 0.3 },
            ],
        },
        Bom {
            code: "OUV-ELEC".to_string(),
            product: ouvrage_product("Point lumineux simple allumage"),
            quantity: 1.0,
            hide_prices: true,
            hide_structure: true,
            lines: vec![
                BomLine { product: product("Gaine ICTA 20", "m", 0.80, 0.45), quantity: 8.0 },
                BomLine { product: product("Fil 1.5mm²", "m", 0.35, 0.18), quantity: 24.0 },
                BomLine { product: product("Interrupteur", "u", 7.90, 4.60), quantity: 1.0 },
                BomLine { product: product("Boîte d'encastrement", "u", 1.20, 0.60), quantity: 2.0 },
                BomLine { product: product("Main d'œuvre électricité", "h", 42.0, 30.0), quantity: 1.2 },
            ],
        },
    ]
});

/// Plain (non-ouvrage) catalog entries mixed into the demo order.
static DEMO_EXTRAS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        product("Location échafaudage", "j", 55.0, 40.0),
        product("Évacuation gravats", "u", 180.0, 120.0),
    ]
});

/// Generates the deterministic demo order.
pub fn generate_demo_order() -> Order {
    generate_order_with_seed(DEMO_SEED)
}

/// Generates a demo order from the built-in catalog with the given seed.
pub fn generate_order_with_seed(seed: u64) -> Order {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut order = Order::new("SO-DEMO");
    order.customer = "Chantier Beaulieu".to_string();
    order.date = "2026-03-14".to_string();

    for bom in DEMO_BOMS.iter() {
        let quantity = rng.gen_range(1..=20) as f64;
        let parent_id = order.next_line_id();
        let mut parent = bom.ouvrage_line(parent_id, quantity);
        parent.description = format!("{} ({})", bom.product.name, bom.code);
        let components = bom.explode(&parent, parent_id + 1);
        order.push_line(parent);
        for component in components {
            order.push_line(component);
        }
    }

    for extra in DEMO_EXTRAS.iter() {
        let mut line = OrderLine {
            id: order.next_line_id(),
            product: extra.name.clone(),
            description: String::new(),
            quantity: rng.gen_range(1..=4) as f64,
            uom: extra.uom.clone(),
            price_unit: extra.list_price,
            cost: extra.standard_price,
            discount: 0.0,
            is_ouvrage: false,
            hide_prices: false,
            hide_structure: false,
            bom_code: None,
            parent: ParentRef::None,
        };
        if rng.gen_bool(0.5) {
            line.discount = 5.0;
        }
        order.push_line(line);
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_order_is_deterministic() {
        let a = generate_demo_order();
        let b = generate_demo_order();
        assert_eq!(a.lines.len(), b.lines.len());
        for (la, lb) in a.lines.iter().zip(&b.lines) {
            assert_eq!(la.id, lb.id);
            assert_eq!(la.quantity, lb.quantity);
        }
    }

    #[test]
    fn demo_order_is_properly_linked() {
        let order = generate_demo_order();
        assert_eq!(order.ouvrage_count(), DEMO_BOMS.len());
        for id in order.ouvrage_ids() {
            let line = order.line(id).unwrap();
            assert!(line.is_ouvrage);
            assert!(!order.component_indices(id).is_empty());
            for component in order.components(id) {
                assert_eq!(component.parent.id(), Some(id));
            }
        }
    }

    #[test]
    fn demo_boms_pass_validation() {
        for bom in DEMO_BOMS.iter() {
            bom.validate().unwrap();
        }
    }

    #[test]
    fn demo_order_components_follow_bom_ratios() {
        let order = generate_demo_order();
        let cloison_id = order
            .ouvrage_ids()
            .into_iter()
            .find(|&id| order.line(id).unwrap().bom_code.as_deref() == Some("OUV-CLOISON"))
            .unwrap();
        let parent_qty = order.line(cloison_id).unwrap().quantity;
        let plaque = order
            .components(cloison_id)
            .find(|c| c.product == "Plaque BA13")
            .unwrap();
        assert!((plaque.quantity - 2.0 * parent_qty).abs() < 1e-9);
    }
}
