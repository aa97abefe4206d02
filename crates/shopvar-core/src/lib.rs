//! Detects Shopify products that only have the "Default Title" variant.
//!
//! Shopify gives every product at least one variant. A product created
//! without options gets a single placeholder variant titled
//! `"Default Title"`. Integrations usually need to tell those simple
//! products apart from products with real variant combinations, and the
//! data arrives in several shapes:
//!
//! - typed objects implementing [`Record`] (see [`types`]),
//! - decoded REST JSON (`{"variants": [{"title": ..., "option1": ...}]}`),
//! - decoded Admin GraphQL JSON (`hasOnlyDefaultVariant`, `totalVariants`,
//!   `variants { edges { node { title selectedOptions } } }`).
//!
//! ```
//! use serde_json::json;
//!
//! let product = json!({
//!     "totalVariants": 1,
//!     "variants": {"edges": [{"node": {"title": "Default Title"}}]}
//! });
//! assert!(shopvar_core::is_default_variant(&product));
//! ```

pub mod dispatch;
pub mod field;
pub mod flat;
pub mod graph;
pub mod record;
pub mod types;

pub use dispatch::{classify, is_default_variant, MatchPath, Subject, Verdict};
pub use field::{Field, Key, DEFAULT_TITLE};
pub use record::{Attr, Record};
pub use types::{ShopifyProduct, ShopifyProductsResponse, ShopifyVariant};
