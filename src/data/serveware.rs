//! Serve-ware — techniques, glasses and garnishes the counter offers.

use crate::shared::*;

pub fn populate_serveware(registry: &mut ServewareRegistry) {
    for (id, name) in [
        ("stir", "Stirred"),
        ("shake", "Shaken"),
        ("build", "Built in glass"),
        ("layer", "Layered"),
    ] {
        registry.techniques.insert(
            id.to_string(),
            TechniqueDef {
                id: id.to_string(),
                name: name.to_string(),
            },
        );
    }

    for (id, name) in [
        ("coupe", "Coupe"),
        ("rocks", "Rocks Glass"),
        ("highball", "Highball"),
        ("tankard", "Tankard"),
        ("flute", "Flute"),
    ] {
        registry.glasses.insert(
            id.to_string(),
            GlassDef {
                id: id.to_string(),
                name: name.to_string(),
            },
        );
    }

    for (id, name) in [
        ("lemon_twist", "Lemon Twist"),
        ("olive", "Olive"),
        ("mint_sprig", "Mint Sprig"),
        ("candied_cherry", "Candied Cherry"),
        ("orange_peel", "Orange Peel"),
        ("salt_rim", "Salt Rim"),
    ] {
        registry.garnishes.insert(
            id.to_string(),
            GarnishDef {
                id: id.to_string(),
                name: name.to_string(),
            },
        );
    }
}
