//! Product conversion functions.

use tracing::warn;
use woo_storefront_core::{
    Attribute, Category, CategoryId, GlobalId, GroupChild, Image, PageInfo, Price, Pricing,
    Product, ProductId, ProductKind, ProductKindTag, ProductPage, ProductSummary, Variation,
    VariationId,
};

use super::super::queries::{
    ImageNode, Nodes, get_product, get_product_categories, get_products,
};

fn convert_image(image: Option<ImageNode>) -> Option<Image> {
    let image = image?;
    Some(Image {
        source_url: image.source_url.filter(|url| !url.is_empty())?,
        alt_text: image.alt_text.filter(|alt| !alt.is_empty()),
    })
}

fn convert_pricing(
    price: Option<&str>,
    regular_price: Option<&str>,
    sale_price: Option<&str>,
) -> Pricing {
    Pricing {
        price: Price::parse(price),
        regular_price: Price::parse(regular_price),
        sale_price: Price::parse(sale_price),
    }
}

fn term_names(terms: Option<Nodes<get_product::TermNode>>) -> Vec<String> {
    terms
        .unwrap_or_default()
        .nodes
        .into_iter()
        .filter_map(|term| term.name)
        .collect()
}

fn convert_variation(node: get_product::VariationNode) -> Variation {
    let attributes = node
        .attributes
        .unwrap_or_default()
        .nodes
        .into_iter()
        .filter_map(|attr| Some(Attribute::new(attr.name?, attr.value.unwrap_or_default())))
        .collect();

    Variation {
        id: GlobalId::new(node.id),
        database_id: VariationId::new(node.database_id),
        name: node.name.unwrap_or_default(),
        stock_status: node.stock_status.unwrap_or_default(),
        stock_quantity: node.stock_quantity,
        purchasable: node.purchasable.unwrap_or(true),
        on_sale: node.on_sale.unwrap_or(false),
        pricing: convert_pricing(
            node.price.as_deref(),
            node.regular_price.as_deref(),
            node.sale_price.as_deref(),
        ),
        attributes,
    }
}

fn convert_group_child(node: get_product::GroupChildNode) -> Option<GroupChild> {
    Some(GroupChild {
        id: GlobalId::new(node.id?),
        database_id: ProductId::new(node.database_id?),
        name: node.name.unwrap_or_default(),
        price: Price::parse(node.price.as_deref()),
    })
}

fn with_fields(fields: get_product::ProductFields, kind: ProductKind) -> Product {
    Product {
        id: GlobalId::new(fields.id),
        database_id: ProductId::new(fields.database_id),
        slug: fields.slug.unwrap_or_default(),
        name: fields.name.unwrap_or_default(),
        description: fields.description.filter(|d| !d.is_empty()),
        on_sale: fields.on_sale.unwrap_or(false),
        average_rating: fields.average_rating,
        image: convert_image(fields.image),
        kind,
    }
}

/// Convert a product detail node into a [`Product`].
pub fn convert_product(node: get_product::ProductNode) -> Product {
    use get_product::ProductNode;

    match node {
        ProductNode::SimpleProduct(p) => {
            let kind = ProductKind::Simple {
                pricing: convert_pricing(
                    p.price.as_deref(),
                    p.regular_price.as_deref(),
                    p.sale_price.as_deref(),
                ),
                stock_quantity: p.stock_quantity,
            };
            with_fields(p.fields, kind)
        }
        ProductNode::VariableProduct(p) => {
            let kind = ProductKind::Variable {
                pricing: convert_pricing(
                    p.price.as_deref(),
                    p.regular_price.as_deref(),
                    p.sale_price.as_deref(),
                ),
                variations: p
                    .variations
                    .unwrap_or_default()
                    .nodes
                    .into_iter()
                    .map(convert_variation)
                    .collect(),
                color_terms: term_names(p.all_pa_color),
                size_terms: term_names(p.all_pa_size),
            };
            with_fields(p.fields, kind)
        }
        ProductNode::ExternalProduct(p) => {
            let kind = ProductKind::External {
                price: Price::parse(p.price.as_deref()),
                external_url: p.external_url.unwrap_or_default(),
            };
            with_fields(p.fields, kind)
        }
        ProductNode::GroupProduct(p) => {
            let kind = ProductKind::Group {
                children: p
                    .products
                    .unwrap_or_default()
                    .nodes
                    .into_iter()
                    .filter_map(convert_group_child)
                    .collect(),
            };
            with_fields(p.fields, kind)
        }
    }
}

fn kind_tag(typename: &str) -> Option<ProductKindTag> {
    match typename {
        "SimpleProduct" => Some(ProductKindTag::Simple),
        "VariableProduct" => Some(ProductKindTag::Variable),
        "ExternalProduct" => Some(ProductKindTag::External),
        "GroupProduct" => Some(ProductKindTag::Group),
        _ => None,
    }
}

fn convert_summary(node: get_products::ProductSummaryNode) -> Option<ProductSummary> {
    let Some(kind) = kind_tag(&node.typename) else {
        warn!(typename = %node.typename, id = node.database_id, "Skipping product of unknown type");
        return None;
    };
    let price = Price::parse(node.price.as_deref())
        .or_else(|| Price::parse(node.regular_price.as_deref()));
    Some(ProductSummary {
        id: GlobalId::new(node.id),
        database_id: ProductId::new(node.database_id),
        slug: node.slug.unwrap_or_default(),
        name: node.name.unwrap_or_default(),
        kind,
        price,
        image: convert_image(node.image),
    })
}

/// Convert a listing connection into a [`ProductPage`].
pub fn convert_product_page(connection: get_products::ProductConnection) -> ProductPage {
    let page_info = connection
        .page_info
        .map(|info| PageInfo {
            has_next_page: info.has_next_page,
            end_cursor: info.end_cursor,
        })
        .unwrap_or_default();
    ProductPage {
        products: connection
            .nodes
            .into_iter()
            .filter_map(convert_summary)
            .collect(),
        page_info,
    }
}

/// Convert a category node.
pub fn convert_category(node: get_product_categories::CategoryNode) -> Category {
    Category {
        id: GlobalId::new(node.id),
        database_id: CategoryId::new(node.database_id),
        name: node.name.unwrap_or_default(),
        slug: node.slug.unwrap_or_default(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product_node(json: serde_json::Value) -> get_product::ProductNode {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_convert_variable_product() {
        let product = convert_product(product_node(serde_json::json!({
            "__typename": "VariableProduct",
            "id": "cHJvZHVjdDoxMDA=",
            "databaseId": 100,
            "slug": "ao-so-mi",
            "name": "Áo sơ mi",
            "description": "",
            "image": { "sourceUrl": "https://shop.example/ao.jpg", "altText": "" },
            "price": "150.000&nbsp;₫",
            "allPaColor": { "nodes": [{ "name": "Trắng" }, { "name": null }] },
            "allPaSize": null,
            "variations": { "nodes": [{
                "id": "v1",
                "databaseId": 101,
                "name": "Áo sơ mi - Trắng, M",
                "stockStatus": "OUT_OF_STOCK",
                "attributes": { "nodes": [
                    { "name": "pa_color", "value": "trang" },
                    { "name": "pa_size", "value": null },
                    { "name": null, "value": "ignored" }
                ]}
            }]}
        })));

        assert_eq!(product.database_id, ProductId::new(100));
        assert_eq!(product.description, None);
        assert_eq!(product.image.as_ref().unwrap().alt_text, None);
        let ProductKind::Variable {
            variations,
            color_terms,
            size_terms,
            pricing,
        } = &product.kind
        else {
            panic!("expected variable product");
        };
        assert_eq!(color_terms, &["Trắng"]);
        assert!(size_terms.is_empty());
        assert!(pricing.price.as_ref().unwrap().has_amount());

        let variation = variations.first().unwrap();
        assert_eq!(variation.database_id, VariationId::new(101));
        assert!(variation.purchasable);
        assert_eq!(
            variation.attributes,
            [Attribute::new("pa_color", "trang"), Attribute::new("pa_size", "")]
        );
    }

    #[test]
    fn test_convert_group_product_skips_non_simple_children() {
        let product = convert_product(product_node(serde_json::json!({
            "__typename": "GroupProduct",
            "id": "g",
            "databaseId": 300,
            "products": { "nodes": [
                { "id": "c1", "databaseId": 301, "name": "Mũ", "price": "50.000 ₫" },
                {}
            ]}
        })));
        let ProductKind::Group { children } = product.kind else {
            panic!("expected group product");
        };
        assert_eq!(children.len(), 1);
        assert_eq!(children.first().unwrap().database_id, ProductId::new(301));
    }

    #[test]
    fn test_convert_external_product() {
        let product = convert_product(product_node(serde_json::json!({
            "__typename": "ExternalProduct",
            "id": "e",
            "databaseId": 400,
            "externalUrl": "https://partner.example/item"
        })));
        assert!(matches!(
            product.kind,
            ProductKind::External { ref external_url, price: None }
                if external_url == "https://partner.example/item"
        ));
    }

    #[test]
    fn test_product_page_skips_unknown_types() {
        let connection: get_products::ProductConnection = serde_json::from_value(serde_json::json!({
            "pageInfo": { "hasNextPage": true, "endCursor": "YXJyYXljb25uZWN0aW9uOjEy" },
            "nodes": [
                { "__typename": "SimpleProduct", "id": "a", "databaseId": 1, "slug": "a", "name": "A", "regularPrice": "10 ₫" },
                { "__typename": "SubscriptionProduct", "id": "b", "databaseId": 2 }
            ]
        }))
        .unwrap();
        let page = convert_product_page(connection);
        assert_eq!(page.products.len(), 1);
        assert!(page.page_info.has_next_page);
        let first = page.products.first().unwrap();
        assert_eq!(first.kind, ProductKindTag::Simple);
        assert_eq!(first.price.as_ref().map(|p| p.display.as_str()), Some("10 ₫"));
    }
}
