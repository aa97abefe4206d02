//! Typed model of Shopify's public `products.json` response.
//!
//! ## Observed shape
//!
//! ### Option slots
//! Every variant carries `option1`, `option2` and `option3`. Unused slots
//! are explicitly `null`, not omitted. A product created without options
//! gets a single variant whose `title` and `option1` are both
//! `"Default Title"`, with `option2`/`option3` null.
//!
//! ### `tags`
//! A JSON array of strings, possibly empty.
//!
//! ### `available` / `position`
//! May be absent on older stores. Modeled as optional.
//!
//! Both [`ShopifyProduct`] and [`ShopifyVariant`] implement [`Record`], so a
//! decoded response can be classified through the typed object path as well
//! as through the raw JSON map path.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::record::{Attr, Record};

/// Top-level response from `GET /products.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShopifyProductsResponse {
    pub products: Vec<ShopifyProduct>,
}

/// A single product from the Shopify storefront.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShopifyProduct {
    /// Shopify numeric product ID (e.g., `6789012345678`).
    pub id: i64,

    pub title: String,

    /// URL slug for the product page.
    #[serde(default)]
    pub handle: Option<String>,

    #[serde(default)]
    pub vendor: Option<String>,

    /// Product category string. May be empty.
    #[serde(default)]
    pub product_type: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// All purchasable variants for this product.
    #[serde(default)]
    pub variants: Vec<ShopifyVariant>,
}

/// A single purchasable variant of a [`ShopifyProduct`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShopifyVariant {
    /// Shopify numeric variant ID.
    pub id: i64,

    /// Display title, `"Default Title"` for option-less products.
    pub title: String,

    #[serde(default)]
    pub option1: Option<String>,

    #[serde(default)]
    pub option2: Option<String>,

    /// Exposed for completeness. The matcher never inspects it.
    #[serde(default)]
    pub option3: Option<String>,

    #[serde(default)]
    pub sku: Option<String>,

    /// Current price as a decimal string (e.g., `"30.00"`).
    #[serde(default)]
    pub price: Option<String>,

    #[serde(default)]
    pub available: Option<bool>,

    /// 1-based position; `1` is the storefront-default variant.
    #[serde(default)]
    pub position: Option<i32>,
}

impl Record for ShopifyProduct {
    fn field(&self, name: &str) -> Field<Attr<'_>> {
        match name {
            "title" => self.title.as_str().into(),
            "handle" => self.handle.as_deref().into(),
            "vendor" => self.vendor.as_deref().into(),
            "product_type" => self.product_type.as_deref().into(),
            "tags" => Field::Present(Attr::Other),
            "variants" => Field::Present(Attr::records(&self.variants)),
            _ => Field::Absent,
        }
    }
}

impl Record for ShopifyVariant {
    fn field(&self, name: &str) -> Field<Attr<'_>> {
        match name {
            "title" => self.title.as_str().into(),
            "option1" => self.option1.as_deref().into(),
            "option2" => self.option2.as_deref().into(),
            "option3" => self.option3.as_deref().into(),
            "sku" => self.sku.as_deref().into(),
            "price" => self.price.as_deref().into(),
            "available" | "position" => Field::Present(Attr::Other),
            _ => Field::Absent,
        }
    }
}
