use crate::catalog::FoodCatalog;
use crate::models::Category;

/// Foods excluded by a vegetarian restriction.
pub const MEAT_AND_FISH: [&str; 3] = ["chicken_breast", "salmon", "ground_beef"];

/// Animal products a vegan restriction excludes on top of meat and fish.
pub const ANIMAL_PRODUCTS: [&str; 4] = ["eggs", "milk", "greek_yogurt", "cheese"];

/// Compatibility predicate derived from free-text dietary restrictions.
///
/// Restriction keywords are matched as case-insensitive substrings, so
/// "Vegan, gluten-free" enables both rules.
#[derive(Debug, Clone)]
pub struct DietaryFilter<'a> {
    catalog: &'a FoodCatalog,
    vegetarian: bool,
    vegan: bool,
    gluten_free: bool,
    dairy_free: bool,
}

impl<'a> DietaryFilter<'a> {
    pub fn new(catalog: &'a FoodCatalog, restrictions: Option<&str>) -> Self {
        let text = restrictions.unwrap_or_default().to_lowercase();
        Self {
            catalog,
            vegetarian: text.contains("vegetarian"),
            vegan: text.contains("vegan"),
            gluten_free: text.contains("gluten-free"),
            dairy_free: text.contains("dairy-free") || text.contains("lactose"),
        }
    }

    /// Whether any rule is active.
    pub fn is_restricted(&self) -> bool {
        self.vegetarian || self.vegan || self.gluten_free || self.dairy_free
    }

    /// Whether `food_name` may be served. Foods missing from the catalog never are.
    pub fn is_compatible(&self, food_name: &str) -> bool {
        let Some(food) = self.catalog.get(food_name) else {
            return false;
        };
        let name = food.name.as_str();

        if self.vegetarian && MEAT_AND_FISH.contains(&name) {
            return false;
        }

        if self.vegan
            && (food.category == Category::Dairy
                || MEAT_AND_FISH.contains(&name)
                || ANIMAL_PRODUCTS.contains(&name))
        {
            return false;
        }

        if self.gluten_free && (name.contains("bread") || name.contains("pasta")) {
            return false;
        }

        if self.dairy_free && food.category == Category::Dairy {
            return false;
        }

        true
    }
}

/// One-shot form of [`DietaryFilter::is_compatible`].
pub fn is_compatible(catalog: &FoodCatalog, food_name: &str, restrictions: Option<&str>) -> bool {
    DietaryFilter::new(catalog, restrictions).is_compatible(food_name)
}
