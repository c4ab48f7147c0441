//! Mock product catalog for the competitor selection demo.
//!
//! Simulates marketplace search results: a reference product plus 50
//! candidates mixing strong competitors, marginal matches, accessories,
//! and premium outliers.

use xray_core::Value;

/// A catalog entry, keyed by its marketplace listing id.
#[derive(Debug, Clone)]
pub(crate) struct Product {
    pub asin: String,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub reviews: i64,
}

impl Product {
    pub fn to_value(&self) -> Value {
        Value::object([
            ("asin", Value::from(self.asin.as_str())),
            ("title", Value::from(self.title.as_str())),
            ("category", Value::from(self.category.as_str())),
            ("price", Value::from(self.price)),
            ("rating", Value::from(self.rating)),
            ("reviews", Value::from(self.reviews)),
        ])
    }
}

fn product(asin: &str, title: &str, category: &str, price: f64, rating: f64, reviews: i64) -> Product {
    Product {
        asin: asin.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        price,
        rating,
        reviews,
    }
}

const BOTTLES: &str = "Sports & Outdoors > Water Bottles";

/// The seller's own product, used as the filter baseline.
pub(crate) fn reference_product() -> Product {
    product(
        "B0XYZ123",
        "ProBrand Stainless Steel Water Bottle 32oz Insulated",
        BOTTLES,
        29.99,
        4.2,
        1247,
    )
}

/// 50 mock candidates returned by the search stage.
pub(crate) fn candidate_products() -> Vec<Product> {
    let mut products = vec![
        // Strong competitors: appropriate price, good rating, many reviews
        product("B0COMP01", "HydroFlask 32oz Wide Mouth Stainless Steel Water Bottle", BOTTLES, 44.99, 4.5, 8932),
        product("B0COMP02", "Yeti Rambler 26oz Vacuum Insulated Stainless Steel Bottle", BOTTLES, 34.99, 4.4, 5621),
        product("B0COMP07", "Stanley Adventure Quencher 30oz Insulated Tumbler", BOTTLES, 35.00, 4.3, 4102),
        product("B0COMP08", "Contigo AUTOSEAL Stainless Steel Travel Mug 24oz", BOTTLES, 28.99, 4.4, 3854),
        product("B0COMP09", "Simple Modern Summit Water Bottle 32oz Vacuum Insulated", BOTTLES, 26.99, 4.5, 3201),
        product("B0COMP10", "Thermos Stainless King 40oz Beverage Bottle", BOTTLES, 32.99, 4.3, 2847),
        product("B0COMP11", "CamelBak Chute Mag 32oz BPA Free Water Bottle", BOTTLES, 18.99, 4.2, 2156),
        product("B0COMP12", "Nalgene Tritan Wide Mouth BPA-Free Water Bottle 32oz", BOTTLES, 15.99, 4.6, 1892),
        // Marginal: each fails exactly one filter
        product("B0COMP13", "Iron Flask Sports Water Bottle 40oz", BOTTLES, 29.99, 3.7, 1543),
        product("B0COMP14", "MIRA Stainless Steel Vacuum Insulated Water Bottle 32oz", BOTTLES, 24.99, 4.4, 87),
        // Poor matches: fail multiple filters
        product("B0COMP03", "Generic Plastic Water Bottle 24oz", BOTTLES, 8.99, 3.2, 45),
        product("B0COMP15", "Budget Water Bottle 20oz BPA Free", BOTTLES, 7.49, 3.5, 234),
        // Accessories and false positives from the same search keyword
        product("B0COMP04", "Water Bottle Cleaning Brush Set with Sponge", "Sports & Outdoors > Cleaning Supplies", 12.99, 4.6, 3421),
        product("B0COMP05", "Replacement Lid for HydroFlask Wide Mouth Bottles", "Sports & Outdoors > Replacement Parts", 9.99, 4.3, 892),
        product("B0COMP06", "Insulated Water Bottle Carrier Bag with Shoulder Strap", "Sports & Outdoors > Bags & Cases", 14.99, 4.2, 567),
        product("B0COMP16", "Silicone Sleeve for 32oz Water Bottles - Protection Cover", "Sports & Outdoors > Accessories", 11.99, 4.1, 423),
        // Premium outliers: priced out of range
        product("B0COMP17", "Premium Titanium Water Bottle 32oz Ultra-Light", BOTTLES, 89.00, 4.8, 234),
        product("B0COMP18", "Luxury Stainless Steel Bottle with Smart Temperature Display", "Sports & Outdoors > Smart Water Bottles", 79.99, 4.3, 156),
        // Additional competitive products
        product("B0COMP19", "Owala FreeSip Insulated Stainless Steel Water Bottle 32oz", BOTTLES, 32.99, 4.6, 1678),
        product("B0COMP20", "Takeya Actives Insulated Stainless Steel Bottle 32oz", BOTTLES, 24.99, 4.5, 1432),
    ];

    // Fill remaining slots with varied generated products
    for i in 21..=50i64 {
        let is_competitor = i % 3 != 0;
        let is_good_match = i % 4 == 0;

        let price = if is_good_match {
            25.0 + (i % 20) as f64
        } else if i % 2 == 0 {
            9.99
        } else {
            65.99
        };
        let rating = if is_good_match {
            4.0 + (i % 10) as f64 * 0.05
        } else {
            3.0 + (i % 8) as f64 * 0.1
        };
        let reviews = if is_good_match { 500 + i * 50 } else { 20 + i * 10 };

        products.push(product(
            &format!("B0COMP{i:02}"),
            &generated_title(i, is_competitor),
            if is_competitor {
                BOTTLES
            } else {
                "Sports & Outdoors > Accessories"
            },
            price,
            rating,
            reviews,
        ));
    }

    products
}

fn generated_title(index: i64, is_competitor: bool) -> String {
    if is_competitor {
        let brands = ["TechBottle", "AquaFlow", "HydroMax", "SteelPro", "CoolFlow"];
        let features = ["Insulated", "Vacuum Sealed", "Double Wall", "Leak-Proof", "Wide Mouth"];
        let brand = brands[(index as usize) % brands.len()];
        let feature = features[(index as usize) % features.len()];
        let size = 20 + (index % 3) * 8;
        format!("{brand} {feature} Stainless Steel Water Bottle {size}oz")
    } else {
        let accessories = ["Bottle Brush", "Carrying Strap", "Cleaning Tablets", "Ice Cube Tray"];
        format!("{} for Water Bottles", accessories[(index as usize) % accessories.len()])
    }
}
