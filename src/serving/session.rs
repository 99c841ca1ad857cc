//! Customer session lifecycle: seat, serve, settle.
//!
//! One customer is seated at a time. Each serve submits the current mix
//! against the active order slot; the session concludes on an explicit
//! finish request, when the final slot is served, or the moment a drink
//! is bad enough that the customer walks out. Every conclusion produces
//! exactly one `CustomerFinishedEvent` for the economy side to consume.

use bevy::prelude::*;

use crate::mixing::blend::compute_drink;
use crate::orders::{self, DailyDocket};
use crate::shared::*;

use super::score;

/// The customer currently at the counter, if any.
#[derive(Resource, Debug, Default)]
pub struct ActiveSession(pub Option<CustomerSession>);

#[derive(Debug, Clone)]
pub struct CustomerSession {
    pub profile: CustomerProfile,
    pub slots: Vec<Order>,
    pub slot_index: usize,
    /// Drinks and their score cards, parallel, in serve order.
    pub drinks: Vec<Drink>,
    pub results: Vec<DrinkResult>,
    pub left_early: bool,
}

impl CustomerSession {
    pub fn current_order(&self) -> Option<&Order> {
        self.slots.get(self.slot_index)
    }

    fn on_last_slot(&self) -> bool {
        self.slot_index + 1 >= self.slots.len()
    }
}

// ─── Systems ─────────────────────────────────────────────────────────────────

/// Seats the next customer from today's docket and builds their orders.
pub fn begin_customer(
    mut requests: EventReader<NextCustomerRequest>,
    mut session: ResMut<ActiveSession>,
    mut docket: ResMut<DailyDocket>,
    keywords: Res<KeywordRegistry>,
    serveware: Res<ServewareRegistry>,
    mut mix: ResMut<MixState>,
    mut greeted: EventWriter<CustomerGreetedEvent>,
) {
    for _ in requests.read() {
        if session.0.is_some() {
            warn!("[Serving] A customer is already seated.");
            continue;
        }
        let Some(def) = docket.pop() else {
            warn!("[Serving] No customers left today — time to settle up.");
            continue;
        };

        let slots: Vec<Order> = def
            .slots
            .iter()
            .take(MAX_ORDER_SLOTS)
            .map(|spec| orders::build_order(spec, &keywords, &serveware))
            .collect();
        if slots.is_empty() {
            error!(
                "[Serving] Customer '{}' arrived with no orders — sending them off.",
                def.profile.name
            );
            continue;
        }

        info!(
            "[Serving] {} sits down ({} drink{}).",
            def.profile.name,
            slots.len(),
            if slots.len() == 1 { "" } else { "s" }
        );
        greeted.send(CustomerGreetedEvent {
            profile: def.profile.clone(),
            slot_count: slots.len(),
        });

        mix.clear_all();
        session.0 = Some(CustomerSession {
            profile: def.profile,
            slots,
            slot_index: 0,
            drinks: Vec::new(),
            results: Vec::new(),
            left_early: false,
        });
    }
}

/// Submits the current mix for the active order slot.
///
/// Blocked — with a reason the embedding layer surfaces — when nobody is
/// seated or a required selection (technique, glass, at least one
/// garnish) is missing. A blocked serve keeps the mix intact.
pub fn serve_drink(
    mut requests: EventReader<ServeDrinkRequest>,
    mut session: ResMut<ActiveSession>,
    mut mix: ResMut<MixState>,
    ingredients: Res<IngredientRegistry>,
    keywords: Res<KeywordRegistry>,
    mut served: EventWriter<DrinkServedEvent>,
    mut rejected: EventWriter<ServeRejectedEvent>,
    mut finished: EventWriter<CustomerFinishedEvent>,
) {
    for _ in requests.read() {
        if let Some(reason) = serve_blocked_reason(&session, &mix) {
            warn!("[Serving] Serve blocked: {}", reason);
            rejected.send(ServeRejectedEvent { reason });
            continue;
        }

        let Some(state) = session.0.as_mut() else {
            continue;
        };
        let order = state.slots[state.slot_index].clone();
        let slot_index = state.slot_index;

        let drink = compute_drink(&mix.portions, &ingredients, mix.use_ice);
        let meta = ServeMeta::from_mix(&mix);
        let result = score::score_drink(&order, &drink, &meta, &state.profile, &keywords);

        let (feeling, share) = drink.emotions.dominant();
        info!(
            "[Serving] Drink {}/{}: {:.0} ml at {:.1}% ({} {:.0}%) → satisfaction {:.1} (raw {:.1}), tip {}.",
            slot_index + 1,
            state.slots.len(),
            drink.total_ml,
            drink.final_abv,
            feeling,
            share * 100.0,
            result.satisfaction,
            result.satisfaction_raw,
            result.tip
        );

        state.drinks.push(drink);
        state.results.push(result.clone());
        mix.clear_pour();

        served.send(DrinkServedEvent {
            slot_index,
            result: result.clone(),
        });

        let session_over = if result.customer_left {
            warn!("[Serving] {} has had enough and storms out.", state.profile.name);
            state.left_early = true;
            true
        } else if state.on_last_slot() {
            true
        } else {
            state.slot_index += 1;
            false
        };

        if session_over {
            conclude(&mut session, &mut finished);
        }
    }
}

/// Explicit settle-up from the embedding layer. A session with no drinks
/// served yet cannot be finished.
pub fn finish_customer(
    mut requests: EventReader<FinishCustomerRequest>,
    mut session: ResMut<ActiveSession>,
    mut finished: EventWriter<CustomerFinishedEvent>,
) {
    for _ in requests.read() {
        let ready = match &session.0 {
            None => {
                warn!("[Serving] Nobody is seated.");
                false
            }
            Some(state) if state.results.is_empty() => {
                warn!("[Serving] {} has not been served anything yet.", state.profile.name);
                false
            }
            Some(_) => true,
        };
        if ready {
            conclude(&mut session, &mut finished);
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn serve_blocked_reason(session: &ActiveSession, mix: &MixState) -> Option<String> {
    let Some(state) = &session.0 else {
        return Some("no customer seated".to_string());
    };
    if state.current_order().is_none() {
        return Some("no open order slot".to_string());
    }
    if mix.technique.is_none() {
        return Some("technique required".to_string());
    }
    if mix.glass.is_none() {
        return Some("glass required".to_string());
    }
    if mix.garnishes.is_empty() {
        return Some("at least one garnish required".to_string());
    }
    None
}

fn conclude(session: &mut ActiveSession, finished: &mut EventWriter<CustomerFinishedEvent>) {
    let Some(state) = session.0.take() else {
        return;
    };
    let result = score::build_customer_result(
        &state.profile,
        &state.drinks,
        &state.results,
        state.left_early,
    );
    info!(
        "[Serving] {} settles up: avg {:.1}, tips {}, {} ({:.1} pts){}{}.",
        state.profile.name,
        result.average_satisfaction,
        result.total_tip,
        result.intox_stage.label(),
        result.intox_points,
        if result.can_sleep_at_inn { ", fit for a room" } else { "" },
        if result.left_early { ", left early" } else { "" },
    );
    finished.send(CustomerFinishedEvent { result });
}
