//! Data layer — populates every catalog registry while the bar loads.
//!
//! Runs once in `OnEnter(ServiceState::Loading)`, fills the ingredient,
//! keyword, serve-ware and customer registries from the hard-coded
//! design data in the submodules, then moves service to `Closed` (ready
//! for the first `StartDayRequest`). Domain plugins can safely read the
//! registries once the state has advanced past `Loading`.
//!
//! Every type involved derives serde, so an external authoring layer can
//! replace these tables with parsed files without touching the core.

mod customers;
mod ingredients;
mod keywords;
mod serveware;

use bevy::prelude::*;

use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ServiceState::Loading), load_all_data);
    }
}

/// Single system that populates every registry, then opens the way to
/// day one.
fn load_all_data(
    mut ingredient_registry: ResMut<IngredientRegistry>,
    mut keyword_registry: ResMut<KeywordRegistry>,
    mut serveware_registry: ResMut<ServewareRegistry>,
    mut customer_pool: ResMut<CustomerPool>,
    mut next_state: ResMut<NextState<ServiceState>>,
) {
    info!("[Data] Populating registries…");

    ingredients::populate_ingredients(&mut ingredient_registry);
    info!(
        "  Ingredients loaded: {}",
        ingredient_registry.ingredients.len()
    );

    keywords::populate_keywords(&mut keyword_registry);
    info!("  Keywords loaded: {}", keyword_registry.keywords.len());

    serveware::populate_serveware(&mut serveware_registry);
    info!(
        "  Serve-ware loaded: {} techniques, {} glasses, {} garnishes",
        serveware_registry.techniques.len(),
        serveware_registry.glasses.len(),
        serveware_registry.garnishes.len()
    );

    customers::populate_customers(&mut customer_pool);
    info!(
        "  Customers loaded: {} walk-ins, {} day plans",
        customer_pool.walk_ins.len(),
        customer_pool.day_plans.len()
    );

    info!("[Data] All registries populated. The bar is ready to open.");
    next_state.set(ServiceState::Closed);
}
