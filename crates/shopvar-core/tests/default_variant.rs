//! End-to-end tests for `shopvar_core::is_default_variant`.
//!
//! Fixtures mirror what the storefront and Admin APIs actually return for
//! two products: one created without options ("without variants") and one
//! created with a `Color` option whose only variant is `Red`.

use serde_json::{json, Value};

use shopvar_core::{
    classify, is_default_variant, Attr, Field, MatchPath, Record, ShopifyProductsResponse, Subject,
};

/// Digs into a GraphQL response the way callers do before classifying.
fn dig<'a>(response: &'a Value, pointer: &str) -> &'a Value {
    response
        .pointer(pointer)
        .unwrap_or_else(|| panic!("fixture has no {pointer}"))
}

fn gql_product(product: Value) -> Value {
    json!({"data": {"product": product}})
}

// ---------------------------------------------------------------------------
// Admin GraphQL: product created without options
// ---------------------------------------------------------------------------

#[test]
fn graphql_default_product_matches_on_flag() {
    let response = gql_product(json!({"hasOnlyDefaultVariant": true}));
    assert!(is_default_variant(dig(&response, "/data/product")));
}

#[test]
fn graphql_default_product_matches_on_selected_options() {
    let response = gql_product(json!({
        "variants": {"edges": [{"node": {
            "selectedOptions": [{"name": "Title", "value": "Default Title"}]
        }}]}
    }));
    assert!(is_default_variant(dig(&response, "/data/product")));
}

#[test]
fn graphql_default_product_matches_on_title() {
    let response = gql_product(json!({
        "variants": {"edges": [{"node": {"title": "Default Title"}}]}
    }));
    assert!(is_default_variant(dig(&response, "/data/product")));
}

#[test]
fn graphql_default_product_matches_on_title_and_selected_options() {
    let response = gql_product(json!({
        "variants": {"edges": [{"node": {
            "title": "Default Title",
            "selectedOptions": [{"name": "Title", "value": "Default Title"}]
        }}]}
    }));
    assert!(is_default_variant(dig(&response, "/data/product")));
}

#[test]
fn graphql_default_product_matches_with_total_variants() {
    let response = gql_product(json!({
        "totalVariants": 1,
        "variants": {"edges": [{"node": {"title": "Default Title"}}]}
    }));
    let verdict = classify(dig(&response, "/data/product"));
    assert!(verdict.matched);
    assert_eq!(verdict.path, Some(MatchPath::Edges));
}

#[test]
fn graphql_default_variant_node_matches() {
    let response = gql_product(json!({
        "variants": {"edges": [{"node": {
            "title": "Default Title",
            "selectedOptions": [{"name": "Title", "value": "Default Title"}]
        }}]}
    }));
    let node = dig(&response, "/data/product/variants/edges/0/node");
    assert!(is_default_variant(node));
}

// ---------------------------------------------------------------------------
// Admin GraphQL: product created with a Color option
// ---------------------------------------------------------------------------

#[test]
fn graphql_optioned_product_fails_on_flag() {
    let response = gql_product(json!({"hasOnlyDefaultVariant": false}));
    assert!(!is_default_variant(dig(&response, "/data/product")));
}

#[test]
fn graphql_optioned_product_fails_on_selected_options() {
    let response = gql_product(json!({
        "variants": {"edges": [{"node": {
            "selectedOptions": [{"name": "Color", "value": "Red"}]
        }}]}
    }));
    assert!(!is_default_variant(dig(&response, "/data/product")));
}

#[test]
fn graphql_optioned_product_fails_on_title() {
    let response = gql_product(json!({
        "totalVariants": 1,
        "variants": {"edges": [{"node": {"title": "Red"}}]}
    }));
    assert!(!is_default_variant(dig(&response, "/data/product")));
}

#[test]
fn graphql_optioned_variant_node_does_not_match() {
    let response = gql_product(json!({
        "variants": {"edges": [{"node": {
            "title": "Red",
            "selectedOptions": [{"name": "Color", "value": "Red"}]
        }}]}
    }));
    let node = dig(&response, "/data/product/variants/edges/0/node");
    assert!(!is_default_variant(node));
}

#[test]
fn graphql_product_with_two_variants_does_not_match() {
    let product = json!({
        "totalVariants": 2,
        "variants": {"edges": [
            {"node": {"title": "Default Title"}},
            {"node": {"title": "Default Title"}}
        ]}
    });
    assert!(!is_default_variant(&product));
}

#[test]
fn graphql_default_title_with_total_variants_two_does_not_match() {
    let product = json!({
        "totalVariants": 2,
        "variants": {"edges": [{"node": {"title": "Default Title"}}]}
    });
    assert!(!is_default_variant(&product));
}

// ---------------------------------------------------------------------------
// REST JSON maps, camelCase and snake_case keys
// ---------------------------------------------------------------------------

#[test]
fn rest_products_response_classifies_each_product() {
    let response = json!({
        "products": [
            {"id": 1, "title": "Simple", "variants": [
                {"id": 11, "title": "Default Title", "option1": "Default Title", "option2": null, "option3": null}
            ]},
            {"id": 2, "title": "Colors", "variants": [
                {"id": 21, "title": "Red", "option1": "Red", "option2": null, "option3": null},
                {"id": 22, "title": "Blue", "option1": "Blue", "option2": null, "option3": null}
            ]}
        ]
    });
    let verdicts: Vec<bool> = response["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|product| is_default_variant(product))
        .collect();
    assert_eq!(verdicts, vec![true, false]);
}

#[test]
fn snake_case_graphql_keys_are_accepted() {
    let product = json!({
        "total_variants": 1,
        "variants": {"edges": [{"node": {
            "selected_options": [{"name": "Title", "value": "Default Title"}]
        }}]}
    });
    assert!(is_default_variant(&product));
}

#[test]
fn mixed_key_encodings_are_accepted() {
    let product = json!({
        "has_only_default_variant": false,
        "totalVariants": 1
    });
    assert!(!is_default_variant(&product));

    let product = json!({
        "totalVariants": 1,
        "variants": {"edges": [{"node": {"selected_options": [{"name": "Title", "value": "Default Title"}]}}]}
    });
    assert!(is_default_variant(&product));
}

#[test]
fn scenario_variant_title_flips_the_result() {
    let mut product = json!({"variants": [{"title": "Foo"}]});
    assert!(!is_default_variant(&product));

    product["variants"][0]["title"] = json!("Default Title");
    assert!(is_default_variant(&product));
}

#[test]
fn scenario_option2_collection_is_not_default() {
    let variant = json!({"title": "Default Title", "option1": "Default Title", "option2": ["x"]});
    assert!(!is_default_variant(&variant));
}

// ---------------------------------------------------------------------------
// Typed objects
// ---------------------------------------------------------------------------

struct TitleOnly {
    title: String,
}

impl Record for TitleOnly {
    fn field(&self, name: &str) -> Field<Attr<'_>> {
        match name {
            "title" => self.title.as_str().into(),
            _ => Field::Absent,
        }
    }
}

#[test]
fn object_exposing_only_a_default_title_matches() {
    let variant = TitleOnly {
        title: "Default Title".to_owned(),
    };
    assert!(is_default_variant(Subject::object(&variant)));
}

#[test]
fn typed_rest_response_matches_like_raw_json() {
    let raw = json!({
        "products": [
            {"id": 1, "title": "Simple", "variants": [
                {"id": 11, "title": "Default Title", "option1": "Default Title", "option2": null}
            ]},
            {"id": 2, "title": "Colors", "variants": [
                {"id": 21, "title": "Red", "option1": "Red", "option2": null}
            ]}
        ]
    });
    let typed: ShopifyProductsResponse = serde_json::from_value(raw.clone()).unwrap();

    for (index, product) in typed.products.iter().enumerate() {
        assert_eq!(
            is_default_variant(Subject::object(product)),
            is_default_variant(&raw["products"][index]),
            "object and map paths disagree for product {index}"
        );
    }
}
