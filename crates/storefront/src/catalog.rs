//! Static product catalog.
//!
//! The catalog is external, fixed sample data in this system: three bakery
//! products with display-only extended fields. The shell resolves a product
//! here and hands it to the cart store.

use bestcakes_core::{Price, ProductId};

use crate::models::Product;

/// All catalog products, in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Торт Шоколадный Восторг".to_owned(),
            price: Price::new(2500),
            image: "https://cdn.poehali.dev/files/6b17a54b-b7b7-4c72-8925-3ba4a054cdaf.jpg"
                .to_owned(),
            category: "traditional".to_owned(),
            description: "Нежный шоколадный торт с бельгийским шоколадом, воздушным кремом \
                          и хрустящими слоями. Идеально подходит для особых случаев."
                .to_owned(),
            weight: "1.5 кг".to_owned(),
            ingredients: vec![
                "Бельгийский шоколад".to_owned(),
                "Сливочный крем".to_owned(),
                "Бисквит".to_owned(),
                "Какао".to_owned(),
            ],
        },
        Product {
            id: ProductId::new(2),
            name: "Набор Капкейков".to_owned(),
            price: Price::new(1200),
            image: "https://cdn.poehali.dev/files/6b17a54b-b7b7-4c72-8925-3ba4a054cdaf.jpg"
                .to_owned(),
            category: "cupcakes".to_owned(),
            description: "Ассорти из 12 капкейков с различными начинками: ванильные, \
                          шоколадные, клубничные. Украшены цветным кремом."
                .to_owned(),
            weight: "12 шт".to_owned(),
            ingredients: vec![
                "Ванильный крем".to_owned(),
                "Шоколадный крем".to_owned(),
                "Клубничная начинка".to_owned(),
                "Бисквит".to_owned(),
            ],
        },
        Product {
            id: ProductId::new(3),
            name: "Праздничный Торт".to_owned(),
            price: Price::new(3500),
            image: "https://cdn.poehali.dev/files/6b17a54b-b7b7-4c72-8925-3ba4a054cdaf.jpg"
                .to_owned(),
            category: "birthday".to_owned(),
            description: "Трехъярусный торт с фруктовой начинкой, покрытый нежным кремом \
                          и украшенный свежими ягодами."
                .to_owned(),
            weight: "2.5 кг".to_owned(),
            ingredients: vec![
                "Свежие ягоды".to_owned(),
                "Сливочный крем".to_owned(),
                "Бисквит".to_owned(),
                "Фруктовая начинка".to_owned(),
            ],
        },
    ]
}

/// Look up a product by id, falling back to the first catalog entry.
///
/// The fallback matches the product page behavior: an unknown or missing id
/// in the URL still renders a product rather than an error page.
#[must_use]
pub fn product_or_first(id: ProductId) -> Product {
    let mut products = products();
    let index = products
        .iter()
        .position(|product| product.id == id)
        .unwrap_or(0);
    products.swap_remove(index)
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_products() {
        let products = products();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].price, Price::new(2500));
        assert_eq!(products[1].price, Price::new(1200));
        assert_eq!(products[2].price, Price::new(3500));
    }

    #[test]
    fn test_lookup_by_id() {
        let product = product_or_first(ProductId::new(2));
        assert_eq!(product.name, "Набор Капкейков");
    }

    #[test]
    fn test_unknown_id_falls_back_to_first() {
        let product = product_or_first(ProductId::new(99));
        assert_eq!(product.id, ProductId::new(1));
    }
}
