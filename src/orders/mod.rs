//! Orders domain — turning authoring data into immutable orders and
//! lining up the day's customers.
//!
//! On each day start the docket is filled from the scripted plan for that
//! day when one exists; otherwise walk-ins are drawn at random from the
//! pool. Matching and scoring live in the serving domain — this module
//! only constructs and hands out `Order` values.

use bevy::prelude::*;
use rand::Rng;
use std::collections::VecDeque;

use crate::shared::*;

/// Today's remaining customers, front first.
#[derive(Resource, Debug, Default)]
pub struct DailyDocket {
    queue: VecDeque<CustomerOrdersDef>,
}

impl DailyDocket {
    pub fn pop(&mut self) -> Option<CustomerOrdersDef> {
        self.queue.pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

pub struct OrdersPlugin;

impl Plugin for OrdersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DailyDocket>()
            .add_systems(Update, prepare_docket);
    }
}

/// Builds a validated order from authoring data.
///
/// Sloppy authoring is repaired rather than rejected: an inverted ABV
/// range is swapped, bounds are clamped to 0–100, unknown keyword and
/// serve-ware IDs are dropped, and a non-positive time limit falls back
/// to one minute. Every repair is logged.
pub fn build_order(
    spec: &OrderSpec,
    keywords: &KeywordRegistry,
    serveware: &ServewareRegistry,
) -> Order {
    let (mut lo, mut hi) = (spec.abv_min, spec.abv_max);
    if lo > hi {
        warn!("[Orders] ABV range {}–{} is inverted — swapping.", lo, hi);
        std::mem::swap(&mut lo, &mut hi);
    }
    let lo = lo.clamp(0.0, 100.0);
    let hi = hi.clamp(0.0, 100.0);

    let kept_keywords: Vec<KeywordId> = spec
        .keywords
        .iter()
        .filter(|id| {
            let known = keywords.get(id).is_some();
            if !known {
                warn!("[Orders] Dropping unknown keyword '{}'.", id);
            }
            known
        })
        .cloned()
        .collect();

    let expected_technique = spec.expected_technique.clone().filter(|id| {
        let known = serveware.techniques.contains_key(id);
        if !known {
            warn!("[Orders] Dropping unknown expected technique '{}'.", id);
        }
        known
    });
    let expected_glass = spec.expected_glass.clone().filter(|id| {
        let known = serveware.glasses.contains_key(id);
        if !known {
            warn!("[Orders] Dropping unknown expected glass '{}'.", id);
        }
        known
    });
    let expected_garnish = spec.expected_garnish.clone().filter(|id| {
        let known = serveware.garnishes.contains_key(id);
        if !known {
            warn!("[Orders] Dropping unknown expected garnish '{}'.", id);
        }
        known
    });

    let time_limit_secs = if spec.time_limit_secs > 0.0 {
        spec.time_limit_secs
    } else {
        warn!(
            "[Orders] Time limit {} is not positive — defaulting to 60 s.",
            spec.time_limit_secs
        );
        60.0
    };

    Order {
        keywords: kept_keywords,
        abv_min: lo,
        abv_max: hi,
        time_limit_secs,
        expected_technique,
        expected_glass,
        expected_garnish,
        request_line: spec.request_line.clone(),
    }
}

/// Fills the docket when a new day starts: the scripted plan for the day
/// if there is one, otherwise random walk-ins from the pool.
pub fn prepare_docket(
    mut day_started: EventReader<DayStartedEvent>,
    pool: Res<CustomerPool>,
    mut docket: ResMut<DailyDocket>,
) {
    for event in day_started.read() {
        docket.queue.clear();

        if let Some(plan) = pool.plan_for_day(event.day) {
            docket
                .queue
                .extend(plan.customers.iter().take(DEFAULT_CUSTOMERS_PER_DAY).cloned());
            info!(
                "[Orders] Day {}: scripted roster, {} customer(s).",
                event.day,
                docket.remaining()
            );
            continue;
        }

        if pool.walk_ins.is_empty() {
            warn!("[Orders] Day {}: the customer pool is empty.", event.day);
            continue;
        }

        // Walk-ins are drawn with replacement, like regulars who keep
        // coming back.
        let mut rng = rand::thread_rng();
        for _ in 0..DEFAULT_CUSTOMERS_PER_DAY {
            let pick = rng.gen_range(0..pool.walk_ins.len());
            docket.queue.push_back(pool.walk_ins[pick].clone());
        }
        info!(
            "[Orders] Day {}: no plan, drew {} walk-in(s).",
            event.day,
            docket.remaining()
        );
    }
}
