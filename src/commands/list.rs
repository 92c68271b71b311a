//! One-shot catalog listing (`storefront list`)

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::print_json;
use crate::catalog::{CatalogLoader, HttpCatalogSource, Product};
use crate::config::Config;
use crate::error::Result;
use crate::view::{NameOrder, PriceOrder, RatingOrder, ViewController};

/// Options for the list command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub search: String,
    pub name: NameOrder,
    pub price: PriceOrder,
    pub rating: RatingOrder,
    pub endpoint: Option<String>,
    pub limit: Option<u32>,
    pub json: bool,
}

/// A row in the product table
#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

/// Fetch the catalog once and print the derived display list.
///
/// A failed fetch is not an error: it prints an empty result.
pub async fn cmd_list(options: ListOptions) -> Result<()> {
    let config = Config::load()?;
    let endpoint = options.endpoint.unwrap_or_else(|| config.endpoint());
    let limit = options.limit.unwrap_or(config.limit);

    let source = HttpCatalogSource::new(&endpoint, config.request_timeout())?;
    let mut loader = CatalogLoader::new(limit);
    loader.load(&source).await;

    let mut view = ViewController::new();
    view.set_search(options.search);
    view.set_name_order(options.name);
    view.set_price_order(options.price);
    view.set_rating_order(options.rating);

    let products = view.display_list(loader.catalog());

    if options.json {
        print_json(&serde_json::to_value(&products)?)?;
    } else if products.is_empty() {
        println!("No products found.");
    } else {
        println!("{}", render_table(&products));
        println!("\n{} product(s)", products.len());
    }

    Ok(())
}

/// Render products as a rounded table
pub fn render_table(products: &[&Product]) -> String {
    let rows: Vec<ProductRow> = products
        .iter()
        .map(|p| ProductRow {
            id: p.id,
            title: p.title.clone(),
            price: p.price_label(),
            rating: p.rating_label(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
