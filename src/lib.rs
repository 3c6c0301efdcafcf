pub mod order;
pub mod parser;
pub mod catalog;
pub mod virtual_order;
pub mod theme;

// Export order model
pub use order::{LineId, Margin, Order, OrderLine, ParentRef};

// Export order reading
pub use parser::{parse_order, OrderReader};

// Export catalog
pub use catalog::{Bom, BomLine, Product};

// Export demo order generation
pub use virtual_order::{generate_demo_order, generate_order_with_seed, DEMO_SEED};

// Export theme support
pub use theme::{hex_to_color32, Theme, ThemeColors, ThemeManager};
