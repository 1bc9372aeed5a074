use crate::models::{Category, FoodProfile};

#[allow(clippy::too_many_arguments)]
fn food(
    name: &str,
    category: Category,
    cost_per_100: f64,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    fiber: f64,
    serving_size: f64,
    unit: &str,
) -> FoodProfile {
    FoodProfile {
        name: name.to_string(),
        category,
        cost_per_100,
        calories,
        protein,
        carbs,
        fats,
        fiber,
        serving_size,
        unit: unit.to_string(),
    }
}

/// Built-in reference foods, in declaration order.
///
/// Order matters: it is the tie-break when two candidates score equally.
pub(crate) fn builtin_profiles() -> Vec<FoodProfile> {
    use Category::*;

    vec![
        // Proteins
        food("chicken_breast", Protein, 32.0, 165.0, 31.0, 0.0, 3.6, 0.0, 150.0, "g"),
        food("eggs", Protein, 14.0, 155.0, 13.0, 1.1, 11.0, 0.0, 100.0, "g"),
        food("salmon", Protein, 160.0, 208.0, 20.0, 0.0, 13.0, 0.0, 150.0, "g"),
        food("ground_beef", Protein, 45.0, 250.0, 26.0, 0.0, 15.0, 0.0, 150.0, "g"),
        food("tofu", Protein, 25.0, 76.0, 8.0, 1.9, 4.8, 0.3, 150.0, "g"),
        // Grains
        food("brown_rice", Grain, 7.0, 370.0, 7.9, 77.0, 2.9, 3.5, 75.0, "g"),
        food("whole_wheat_bread", Grain, 10.0, 247.0, 13.0, 41.0, 3.4, 7.0, 60.0, "g"),
        food("oatmeal", Grain, 12.0, 389.0, 16.9, 66.0, 6.9, 10.6, 50.0, "g"),
        food("pasta", Grain, 8.0, 371.0, 13.0, 74.0, 1.5, 3.2, 80.0, "g"),
        // Vegetables
        food("broccoli", Vegetable, 8.0, 34.0, 2.8, 7.0, 0.4, 2.6, 150.0, "g"),
        food("spinach", Vegetable, 6.0, 23.0, 2.9, 3.6, 0.4, 2.2, 100.0, "g"),
        food("carrots", Vegetable, 5.0, 41.0, 0.9, 10.0, 0.2, 2.8, 100.0, "g"),
        food("bell_peppers", Vegetable, 12.0, 31.0, 1.0, 6.0, 0.3, 2.1, 150.0, "g"),
        food("tomatoes", Vegetable, 6.0, 18.0, 0.9, 3.9, 0.2, 1.2, 150.0, "g"),
        // Fruits
        food("banana", Fruit, 8.0, 89.0, 1.1, 23.0, 0.3, 2.6, 120.0, "g"),
        food("apple", Fruit, 18.0, 52.0, 0.3, 14.0, 0.2, 2.4, 150.0, "g"),
        food("orange", Fruit, 15.0, 47.0, 0.9, 12.0, 0.1, 2.4, 130.0, "g"),
        food("berries", Fruit, 35.0, 57.0, 0.7, 14.0, 0.3, 2.4, 100.0, "g"),
        // Dairy
        food("milk", Dairy, 11.0, 42.0, 3.4, 5.0, 1.0, 0.0, 250.0, "ml"),
        food("greek_yogurt", Dairy, 44.0, 59.0, 10.0, 3.6, 0.4, 0.0, 170.0, "g"),
        food("cheese", Dairy, 90.0, 402.0, 25.0, 1.3, 33.0, 0.0, 30.0, "g"),
        // Healthy fats (avocado is grouped with vegetables, almonds with proteins)
        food("avocado", Vegetable, 40.0, 160.0, 2.0, 9.0, 15.0, 7.0, 100.0, "g"),
        food("olive_oil", Fat, 60.0, 884.0, 0.0, 0.0, 100.0, 0.0, 15.0, "ml"),
        food("nuts_almonds", Protein, 80.0, 579.0, 21.0, 22.0, 50.0, 12.5, 30.0, "g"),
    ]
}
