//! The back bar — every bottle the mixing counter can pour.
//!
//! Emotion rows are authored as free weights (roughly percentages, the
//! way a designer thinks about them) and normalized into distributions
//! on insert, so the blending math only ever sees rows that sum to 1.

use crate::shared::*;

/// weights = [joy, sadness, anger, fear, disgust, surprise, neutral]
fn add(registry: &mut IngredientRegistry, id: &str, name: &str, abv: f32, weights: [f32; 7]) {
    let [joy, sadness, anger, fear, disgust, surprise, neutral] = weights;
    registry.ingredients.insert(
        id.to_string(),
        IngredientDef {
            id: id.to_string(),
            name: name.to_string(),
            abv,
            emotions: EmotionVector {
                joy,
                sadness,
                anger,
                fear,
                disgust,
                surprise,
                neutral,
            }
            .into_distribution(),
        },
    );
}

pub fn populate_ingredients(registry: &mut IngredientRegistry) {
    // Spirits
    add(registry, "frost_vodka", "Frost Vodka", 40.0,
        [0.0, 0.0, 0.0, 0.0, 0.0, 15.0, 85.0]);
    add(registry, "juniper_gin", "Juniper Gin", 43.0,
        [10.0, 15.0, 0.0, 25.0, 0.0, 10.0, 40.0]);
    add(registry, "amber_whiskey", "Amber Whiskey", 45.0,
        [20.0, 45.0, 0.0, 0.0, 0.0, 0.0, 35.0]);
    add(registry, "dark_rum", "Dark Rum", 40.0,
        [50.0, 0.0, 0.0, 0.0, 0.0, 30.0, 20.0]);
    add(registry, "smoke_mezcal", "Smoke Mezcal", 46.0,
        [0.0, 0.0, 0.0, 40.0, 25.0, 35.0, 0.0]);

    // Fortified & sparkling
    add(registry, "bitter_aperitivo", "Bitter Aperitivo", 24.0,
        [0.0, 0.0, 55.0, 0.0, 25.0, 0.0, 20.0]);
    add(registry, "sweet_vermouth", "Sweet Vermouth", 16.0,
        [30.0, 30.0, 0.0, 0.0, 0.0, 0.0, 40.0]);
    add(registry, "pale_sherry", "Pale Sherry", 15.0,
        [0.0, 60.0, 0.0, 0.0, 0.0, 0.0, 40.0]);
    add(registry, "sparkling_wine", "Sparkling Wine", 12.0,
        [60.0, 0.0, 0.0, 0.0, 0.0, 40.0, 0.0]);
    add(registry, "cherry_liqueur", "Sour Cherry Liqueur", 25.0,
        [35.0, 35.0, 20.0, 0.0, 0.0, 0.0, 10.0]);

    // Soft shelf
    add(registry, "citrus_cordial", "Citrus Cordial", 0.0,
        [45.0, 0.0, 0.0, 0.0, 0.0, 25.0, 30.0]);
    add(registry, "cold_brew", "Cold Brew", 0.0,
        [0.0, 0.0, 10.0, 0.0, 0.0, 30.0, 60.0]);
    add(registry, "ginger_syrup", "Ginger Syrup", 0.0,
        [0.0, 0.0, 30.0, 0.0, 0.0, 40.0, 30.0]);
    add(registry, "smoked_honey", "Smoked Honey", 0.0,
        [40.0, 0.0, 0.0, 0.0, 10.0, 0.0, 50.0]);
    add(registry, "nettle_tea", "Nettle Tea", 0.0,
        [0.0, 0.0, 0.0, 0.0, 30.0, 0.0, 70.0]);
    add(registry, "soda_water", "Soda Water", 0.0,
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 100.0]);
}
