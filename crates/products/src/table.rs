//! Fixed-width table rendering for a [`Catalog`].
//!
//! Column widths never adapt to content: wider values are printed in full
//! and simply push the row out of alignment.

use std::fmt;

use crate::catalog::Catalog;
use crate::product::Product;

/// Printed instead of a table when there is nothing to show.
pub const EMPTY_CATALOG_MESSAGE: &str = "The product list is empty.";

const INDEX_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const PRICE_WIDTH: usize = 14;
const SHOP_WIDTH: usize = 17;

fn rule() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(NAME_WIDTH),
        "-".repeat(PRICE_WIDTH),
        "-".repeat(SHOP_WIDTH),
    )
}

fn header() -> String {
    format!(
        "| {:^iw$} | {:^nw$} | {:^pw$} | {:^sw$} |",
        "№",
        "Name",
        "Price",
        "Shop",
        iw = INDEX_WIDTH,
        nw = NAME_WIDTH,
        pw = PRICE_WIDTH,
        sw = SHOP_WIDTH,
    )
}

fn row(index: usize, product: &Product) -> String {
    let price = match product.price {
        Some(price) => format!("{:<pw$.2}", price, pw = PRICE_WIDTH),
        None => format!("{:<pw$}", "", pw = PRICE_WIDTH),
    };

    format!(
        "| {:>iw$} | {:<nw$} | {} | {:>sw$} |",
        index,
        product.name,
        price,
        product.shop,
        iw = INDEX_WIDTH,
        nw = NAME_WIDTH,
        sw = SHOP_WIDTH,
    )
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{EMPTY_CATALOG_MESSAGE}");
        }

        let line = rule();
        writeln!(f, "{line}")?;
        writeln!(f, "{}", header())?;
        writeln!(f, "{line}")?;
        for (idx, product) in self.iter().enumerate() {
            writeln!(f, "{}", row(idx + 1, product))?;
        }
        writeln!(f, "{line}")
    }
}

impl Catalog {
    /// Render as a table (or the empty-list message).
    pub fn render(&self) -> String {
        self.to_string()
    }
}
