//! The static product catalog.
//!
//! The menu is build-time data: it changes by shipping a new build, never at
//! runtime. Browsing supports the same filters the menu page offers - a
//! category tab (with "All" meaning no filter) and a case-insensitive name
//! search.

use std::sync::LazyLock;

use morris_cakes_core::{Category, Product};

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(build_catalog);

/// Shorthand for the hosted product images.
fn img(id: &str) -> String {
    format!("https://i.ibb.co/{id}/image.jpg")
}

fn entry(
    id: &str,
    name: &str,
    category: Category,
    price: u64,
    description: &str,
    image_id: &str,
    featured: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price,
        description: description.to_string(),
        image: img(image_id),
        featured,
    }
}

#[allow(clippy::too_many_lines)]
fn build_catalog() -> Vec<Product> {
    vec![
        // Premium cakes
        entry(
            "n1",
            "Grand Celebration Tiered Cake",
            Category::Cakes,
            210_000,
            "A magnificent multi-tiered masterpiece for weddings and grand milestones.",
            "HfTd3ktB",
            true,
        ),
        entry(
            "n2",
            "Tropical Fruit Cream Delight",
            Category::Cakes,
            125_000,
            "Light sponge layered with fresh tropical fruit extracts and whipped cream.",
            "mCRhBSNP",
            false,
        ),
        entry(
            "n3",
            "Midnight Cocoa Forest Cake",
            Category::Cakes,
            155_000,
            "Rich dark chocolate layers with a signature berry compote filling.",
            "4g4sLGs4",
            true,
        ),
        entry(
            "c1",
            "Royal Ribbon Celebration",
            Category::Cakes,
            165_000,
            "A masterpiece of sponge and silk buttercream, perfect for weddings and milestones.",
            "ycpzsCKH",
            false,
        ),
        entry(
            "c2",
            "Vanilla Pearl Gateau",
            Category::Cakes,
            130_000,
            "Classic Ugandan vanilla bean cake with delicate pearl frosting accents.",
            "xqcnPKbk",
            false,
        ),
        entry(
            "c3",
            "Red Velvet Heart",
            Category::Cakes,
            145_000,
            "Deep cocoa velvet layers with our signature cream cheese whip.",
            "VcDmhKj9",
            false,
        ),
        // Snacks & bakery
        entry(
            "n4",
            "Golden Crust Savory Platter",
            Category::Snacks,
            45_000,
            "A bulk selection of our famous meat pies and samosas, perfect for meetings.",
            "tw2Myr5m",
            false,
        ),
        entry(
            "n5",
            "Rustic Heritage Brown Bread",
            Category::Bakery,
            10_000,
            "Hearty, fiber-rich artisan brown bread baked with traditional methods.",
            "dsyp6NDm",
            false,
        ),
        // Local delights
        entry(
            "l1",
            "Morris Special Rolex",
            Category::LocalDelights,
            3_500,
            "Three fresh eggs, onions, tomatoes, and greens rolled in a buttery chapati.",
            "nq2Qf2ft",
            true,
        ),
        entry(
            "l2",
            "Kikomando King Platter",
            Category::LocalDelights,
            4_500,
            "A generous serving of spiced beans and sliced layered chapatis.",
            "MkgMCg7Y",
            false,
        ),
        // Fast food & chicken
        entry(
            "f2",
            "The Morris Beast Burger",
            Category::FastFood,
            18_000,
            "Juicy beef patty, melted cheddar, and caramelized onions on a brioche bun.",
            "v4Q37j1j",
            false,
        ),
        entry(
            "ch1",
            "Roasted Herb Whole Chicken",
            Category::Chicken,
            32_000,
            "Full chicken marinated for 24 hours in local herbs and slow-roasted.",
            "kgTQ86B2",
            true,
        ),
    ]
}

/// The full catalog, in menu order.
#[must_use]
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Look up a product by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Browse the catalog with an optional category filter and name search.
#[must_use]
pub fn browse(category: Option<Category>, query: &str) -> Vec<&'static Product> {
    let needle = query.to_lowercase();
    PRODUCTS
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}
