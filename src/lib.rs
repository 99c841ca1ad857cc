//! Last Call — the simulation core of a cocktail-bar game.
//!
//! This crate is the scoring/simulation engine only: volume-weighted
//! emotion blending, order matching, satisfaction scoring, intoxication
//! staging, and the day-scoped economy around them. Rendering, input and
//! scene flow live in the embedding layer, which drives the core through
//! the request events in [`shared`] and listens for its notification
//! events.
//!
//! Add [`BarCorePlugin`] to an `App` that already carries Bevy's base
//! plugins (`MinimalPlugins` + `StatesPlugin` is enough — the headless
//! test suite runs exactly that).

pub mod data;
pub mod day;
pub mod economy;
pub mod intox;
pub mod mixing;
pub mod orders;
pub mod serving;
pub mod shared;

use bevy::prelude::*;

use shared::*;

/// Registers the whole core: service state, catalog registries, the full
/// event contract, and every domain plugin.
pub struct BarCorePlugin;

impl Plugin for BarCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ServiceState>();

        // Catalog registries (populated by the data plugin during Loading)
        app.init_resource::<IngredientRegistry>()
            .init_resource::<KeywordRegistry>()
            .init_resource::<ServewareRegistry>()
            .init_resource::<CustomerPool>();

        // Request events — the command API
        app.add_event::<StartDayRequest>()
            .add_event::<EndDayRequest>()
            .add_event::<NextCustomerRequest>()
            .add_event::<PourRequest>()
            .add_event::<ResetMixRequest>()
            .add_event::<SetIceRequest>()
            .add_event::<SelectTechniqueRequest>()
            .add_event::<SelectGlassRequest>()
            .add_event::<ToggleGarnishRequest>()
            .add_event::<ServeDrinkRequest>()
            .add_event::<FinishCustomerRequest>()
            .add_event::<InnSleepRequest>()
            .add_event::<InnEvictRequest>()
            .add_event::<BarUpgradeRequest>();

        // Notification events — what the core reports back
        app.add_event::<DayStartedEvent>()
            .add_event::<DayEndedEvent>()
            .add_event::<DayReportEvent>()
            .add_event::<CustomerGreetedEvent>()
            .add_event::<DrinkServedEvent>()
            .add_event::<ServeRejectedEvent>()
            .add_event::<CustomerFinishedEvent>()
            .add_event::<TillChangeEvent>()
            .add_event::<CustomerSleptEvent>();

        app.add_plugins((
            data::DataPlugin,
            day::DayCyclePlugin,
            mixing::MixingPlugin,
            orders::OrdersPlugin,
            serving::ServingPlugin,
            economy::EconomyPlugin,
        ));
    }
}
