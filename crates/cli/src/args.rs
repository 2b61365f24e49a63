//! Argument model.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};

/// Legacy two-letter short flag for the shop, kept for existing scripts.
const LEGACY_SHOP_FLAG: &str = "-sh";
const SHOP_FLAG: &str = "--shope";

#[derive(Debug, Parser)]
#[command(name = "products", version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new product
    Add(AddArgs),
    /// Display all products
    Display(DisplayArgs),
    /// Select the products
    Select(SelectArgs),
}

impl Command {
    /// Data file the command operates on.
    pub fn filename(&self) -> &Path {
        match self {
            Command::Add(args) => &args.filename,
            Command::Display(args) => &args.filename,
            Command::Select(args) => &args.filename,
        }
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// The data file name
    pub filename: PathBuf,

    /// The product's name
    #[arg(short = 'n', long, value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// The product's price
    #[arg(short = 'p', long, allow_negative_numbers = true, value_parser = parse_price)]
    pub price: Option<f64>,

    /// The product's shop (short form: -sh)
    #[arg(
        long = "shope",
        visible_alias = "shop",
        value_name = "SHOP",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub shop: String,
}

#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// The data file name
    pub filename: PathBuf,
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// The data file name
    pub filename: PathBuf,

    /// The product name to select (exact match)
    #[arg(short = 's', long = "select", value_name = "NAME")]
    pub select: String,
}

/// Parse a price, rejecting `NaN` and infinities, which JSON cannot hold.
fn parse_price(value: &str) -> Result<f64, String> {
    let price: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid price `{value}`: {e}"))?;
    if !price.is_finite() {
        return Err(format!("price must be a finite number, got `{value}`"));
    }
    Ok(price)
}

/// Rewrite `-sh VALUE` / `-sh=VALUE` to `--shope`, which clap can parse.
///
/// Tokens after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::<OsString>::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            if text == LEGACY_SHOP_FLAG {
                return OsString::from(SHOP_FLAG);
            }
            text.strip_prefix(LEGACY_SHOP_FLAG)
                .and_then(|rest| rest.strip_prefix('='))
                .map(|value| OsString::from(format!("{SHOP_FLAG}={value}")))
                .unwrap_or(arg)
        })
        .collect()
}
