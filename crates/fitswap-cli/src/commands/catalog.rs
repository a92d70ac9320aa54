use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fitswap_core::format_price;

use super::load_store_config;

#[derive(Args)]
pub struct CatalogArgs {
    /// Store config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &CatalogArgs) -> Result<()> {
    let config = load_store_config(args.config.as_deref())?;
    let catalog = config.catalog()?;

    println!(
        "{:>4}  {:<32}  {:<12}  {:<16}  {:>12}",
        "ID", "Name", "Category", "Spec", "Price"
    );
    println!("{}", "-".repeat(84));
    for product in catalog.iter() {
        println!(
            "{:>4}  {:<32}  {:<12}  {:<16}  {:>12}",
            product.id.0,
            product.name,
            product.category,
            product.spec,
            format_price(&config.currency, product.price)
        );
    }
    println!("\n{} products", catalog.len());

    Ok(())
}
