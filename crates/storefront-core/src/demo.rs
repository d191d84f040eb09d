//! Built-in catalog shown when no spreadsheet is configured or an import
//! fails.

use crate::products::{Product, Storage};

/// Category shared by watches, headphones and other add-ons.
pub const ACCESSORIES_CATEGORY: &str = "Accessories";

fn demo_product(
    id: u32,
    category: &str,
    model: &str,
    price: f64,
    color: &str,
    storage: Option<&str>,
) -> Product {
    Product {
        id,
        brand: "Apple".to_string(),
        category: category.to_string(),
        model: model.to_string(),
        price,
        color: color.to_string(),
        storage: storage.map_or(Storage::NotApplicable, Storage::from_capacity),
    }
}

/// The ten-product demo catalog, in id order.
#[must_use]
pub fn demo_catalog() -> Vec<Product> {
    vec![
        demo_product(1, "iPhone", "iPhone 15 Pro Max", 119_990.0, "Titanium", Some("256")),
        demo_product(2, "iPhone", "iPhone 15 Pro", 99_990.0, "Titanium", Some("128")),
        demo_product(3, "iPhone", "iPhone 15", 79_990.0, "Blue", Some("128")),
        demo_product(4, "iPhone", "iPhone 14 Pro", 89_990.0, "Purple", Some("128")),
        demo_product(5, "iPad", "iPad Pro 12.9\"", 89_990.0, "Gray", Some("256")),
        demo_product(6, "iPad", "iPad Air", 59_990.0, "Pink", Some("64")),
        demo_product(7, "Mac", "MacBook Air M2", 119_990.0, "Silver", Some("256")),
        demo_product(8, "Mac", "MacBook Pro 14\"", 199_990.0, "Gray", Some("512")),
        demo_product(9, ACCESSORIES_CATEGORY, "AirPods Pro 2", 19_990.0, "White", None),
        demo_product(10, ACCESSORIES_CATEGORY, "Apple Watch Series 9", 29_990.0, "Pink", None),
    ]
}
