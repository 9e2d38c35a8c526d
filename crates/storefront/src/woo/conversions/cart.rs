//! Cart conversion functions.

use woo_storefront_core::{Cart, CartLine, Price, ProductId, VariationId};

use super::super::queries::{CartItemNode, CartNode, add_to_cart};
use super::super::types::AddedCartItem;

fn to_count(value: Option<i64>) -> u32 {
    value
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or_default()
}

fn convert_line(node: CartItemNode) -> Option<CartLine> {
    let product = node.product.and_then(|edge| edge.node)?;
    let variation = node.variation.and_then(|edge| edge.node);
    Some(CartLine {
        key: node.key,
        quantity: to_count(node.quantity),
        product_id: ProductId::new(product.database_id),
        product_name: product.name.unwrap_or_default(),
        product_slug: product.slug,
        variation_id: variation.as_ref().map(|v| VariationId::new(v.database_id)),
        variation_name: variation.and_then(|v| v.name),
        subtotal: Price::parse(node.subtotal.as_deref()),
        total: Price::parse(node.total.as_deref()),
    })
}

/// Convert a cart node. Lines whose product has been deleted are dropped.
pub fn convert_cart(cart: CartNode) -> Cart {
    let (item_count, nodes) = cart
        .contents
        .map(|c| (c.item_count, c.nodes))
        .unwrap_or_default();
    let lines: Vec<CartLine> = nodes.into_iter().filter_map(convert_line).collect();
    let item_count = item_count.map_or_else(|| lines.iter().map(|l| l.quantity).sum(), |n| to_count(Some(n)));

    Cart {
        lines,
        item_count,
        subtotal: Price::parse(cart.subtotal.as_deref()),
        total: Price::parse(cart.total.as_deref()),
    }
}

/// Convert an `addToCart` payload.
pub fn convert_added_item(payload: add_to_cart::AddToCartPayload) -> AddedCartItem {
    let (key, quantity) = payload
        .cart_item
        .map(|item| (item.key.filter(|k| !k.trim().is_empty()), item.quantity))
        .unwrap_or_default();
    AddedCartItem {
        key,
        quantity,
        cart: payload.cart.map(convert_cart),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cart_node(json: serde_json::Value) -> CartNode {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_convert_cart_lines() {
        let cart = convert_cart(cart_node(serde_json::json!({
            "contents": {
                "itemCount": 3,
                "nodes": [
                    {
                        "key": "a1b2",
                        "quantity": 2,
                        "total": "300.000 ₫",
                        "product": { "node": { "databaseId": 100, "name": "Áo sơ mi", "slug": "ao-so-mi" } },
                        "variation": { "node": { "databaseId": 101, "name": "Áo sơ mi - Trắng" } }
                    },
                    {
                        "key": "c3d4",
                        "quantity": 1,
                        "product": { "node": { "databaseId": 200, "name": "Mũ" } },
                        "variation": null
                    },
                    { "key": "orphan", "quantity": 1, "product": null }
                ]
            },
            "subtotal": "350.000 ₫",
            "total": "350.000 ₫"
        })));

        assert_eq!(cart.item_count, 3);
        assert_eq!(cart.lines.len(), 2);
        let first = cart.line("a1b2").unwrap();
        assert_eq!(first.variation_id, Some(VariationId::new(101)));
        assert_eq!(first.quantity, 2);
        assert_eq!(cart.line("c3d4").unwrap().variation_id, None);
        assert!(cart.total.unwrap().has_amount());
    }

    #[test]
    fn test_convert_empty_cart() {
        let cart = convert_cart(cart_node(serde_json::json!({ "contents": null })));
        assert!(cart.is_empty());
        assert_eq!(cart.item_count, 0);
    }

    #[test]
    fn test_added_item_blank_key_is_absent() {
        let payload: add_to_cart::AddToCartPayload = serde_json::from_value(serde_json::json!({
            "cartItem": { "key": "", "quantity": 1 },
            "cart": null
        }))
        .unwrap();
        assert_eq!(convert_added_item(payload).key, None);
    }
}
