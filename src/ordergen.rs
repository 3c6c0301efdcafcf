//! Demo order generator.
//!
//! Writes a generated sales order, with ouvrages exploded from the built-in
//! BoM catalog, to a JSON file that the viewer can open.
//!
//! Usage: ouvrage-ordergen <output.json> [seed]

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::BufWriter;

use ouvrage::virtual_order::{generate_demo_order, generate_order_with_seed};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        bail!("usage: {} <output.json> [seed]", args[0]);
    }

    let output_path = &args[1];
    let order = match args.get(2) {
        Some(seed_text) => {
            let seed: u64 = seed_text
                .parse()
                .with_context(|| format!("invalid seed: {seed_text}"))?;
            generate_order_with_seed(seed)
        }
        None => generate_demo_order(),
    };

    let file = File::create(output_path)
        .with_context(|| format!("failed to create {output_path}"))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &order)
        .with_context(|| format!("failed to write {output_path}"))?;

    println!(
        "wrote {} ({} lines, {} ouvrages, {} components, total {:.2} {})",
        output_path,
        order.lines.len(),
        order.ouvrage_count(),
        order.component_count(),
        order.amount_untaxed(),
        order.currency,
    );

    Ok(())
}
