/// Grocery aisle for shopping-list grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    DairyEggs,
    MeatSeafood,
    Vegetables,
    Fruits,
    GrainsBakery,
    PantryItems,
}

impl Category {
    /// Categories in display order. `PantryItems` is the catch-all and
    /// always comes last.
    pub const ALL: [Category; 6] = [
        Category::DairyEggs,
        Category::MeatSeafood,
        Category::Vegetables,
        Category::Fruits,
        Category::GrainsBakery,
        Category::PantryItems,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::DairyEggs => "Dairy & Eggs",
            Category::MeatSeafood => "Meat & Seafood",
            Category::Vegetables => "Vegetables",
            Category::Fruits => "Fruits",
            Category::GrainsBakery => "Grains & Bakery",
            Category::PantryItems => "Pantry Items",
        }
    }
}

/// Map an ingredient to its aisle. Matching is case-insensitive on
/// substrings and the first rule wins, so "cheese bread" lands in
/// Dairy & Eggs rather than Grains & Bakery. Anything unmatched falls
/// through to Pantry Items.
pub fn categorize(ingredient: &str) -> Category {
    let name = ingredient.to_lowercase();

    if is_dairy(&name) {
        return Category::DairyEggs;
    }

    if is_meat(&name) {
        return Category::MeatSeafood;
    }

    if is_vegetable(&name) {
        return Category::Vegetables;
    }

    if is_fruit(&name) {
        return Category::Fruits;
    }

    if is_grain(&name) {
        return Category::GrainsBakery;
    }

    Category::PantryItems
}

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}

fn is_dairy(name: &str) -> bool {
    contains_any(name, &["milk", "cheese", "egg", "butter", "yogurt"])
}

fn is_meat(name: &str) -> bool {
    contains_any(name, &["chicken", "beef", "pork", "fish", "meat"])
}

fn is_vegetable(name: &str) -> bool {
    contains_any(
        name,
        &["lettuce", "tomato", "onion", "pepper", "carrot", "vegetable"],
    )
}

fn is_fruit(name: &str) -> bool {
    contains_any(name, &["apple", "banana", "orange", "berry", "fruit"])
}

fn is_grain(name: &str) -> bool {
    contains_any(name, &["bread", "pasta", "rice", "flour", "cereal"])
}
