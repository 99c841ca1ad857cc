//! Secondary emotions — what a customer actually asks for.
//!
//! Each keyword names a feeling a drink can't express with a single base
//! emotion, described as a blend over the seven.

use crate::shared::*;

fn add(registry: &mut KeywordRegistry, id: &str, name: &str, weights: [f32; 7]) {
    let [joy, sadness, anger, fear, disgust, surprise, neutral] = weights;
    registry.keywords.insert(
        id.to_string(),
        KeywordDef {
            id: id.to_string(),
            name: name.to_string(),
            profile: EmotionVector {
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

pub fn populate_keywords(registry: &mut KeywordRegistry) {
    // weights = [joy, sadness, anger, fear, disgust, surprise, neutral]
    add(registry, "comfort", "Comfort", [30.0, 20.0, 0.0, 0.0, 0.0, 0.0, 50.0]);
    add(registry, "nostalgia", "Nostalgia", [30.0, 50.0, 0.0, 0.0, 0.0, 0.0, 20.0]);
    add(registry, "courage", "Courage", [20.0, 0.0, 40.0, 0.0, 0.0, 40.0, 0.0]);
    add(registry, "thrill", "Thrill", [20.0, 0.0, 0.0, 30.0, 0.0, 50.0, 0.0]);
    add(registry, "melancholy", "Melancholy", [0.0, 70.0, 0.0, 0.0, 0.0, 0.0, 30.0]);
    add(registry, "spite", "Spite", [0.0, 0.0, 60.0, 0.0, 40.0, 0.0, 0.0]);
    add(registry, "wonder", "Wonder", [40.0, 0.0, 0.0, 0.0, 0.0, 60.0, 0.0]);
    add(registry, "oblivion", "Oblivion", [0.0, 30.0, 0.0, 0.0, 0.0, 0.0, 70.0]);
    add(registry, "dread", "Dread", [0.0, 20.0, 0.0, 60.0, 20.0, 0.0, 0.0]);
}
