//! Print a service's OpenAPI document as JSON.
//!
//! Usage: `openapi-dump [products|users]` (defaults to `products`).

use color_eyre::eyre::{Result, eyre};
use storefront::{ProductsApiDoc, UsersApiDoc};
use utoipa::OpenApi;

fn main() -> Result<()> {
    color_eyre::install()?;
    let service = std::env::args().nth(1);
    let doc = match service.as_deref() {
        None | Some("products") => ProductsApiDoc::openapi(),
        Some("users") => UsersApiDoc::openapi(),
        Some(other) => return Err(eyre!("unknown service `{other}`; expected products or users")),
    };
    println!("{}", doc.to_pretty_json()?);
    Ok(())
}
