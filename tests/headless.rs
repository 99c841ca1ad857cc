//! Headless integration tests for the Last Call core.
//!
//! These exercise the full event-driven loop without a window or GPU:
//! `MinimalPlugins` + `StatesPlugin` + `BarCorePlugin`, driven purely
//! through the request events the embedding layer would send.
//!
//! Run with: `cargo test --test headless`

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use lastcall::day::DayCycle;
use lastcall::economy::inn::{InnRooms, PendingInnDecisions};
use lastcall::economy::ledger::DailyLedger;
use lastcall::economy::reputation::Reputation;
use lastcall::economy::till::Till;
use lastcall::economy::upgrades::BarLevel;
use lastcall::orders::DailyDocket;
use lastcall::serving::session::ActiveSession;
use lastcall::shared::*;
use lastcall::BarCorePlugin;

// ─────────────────────────────────────────────────────────────────────────────
// Harness
// ─────────────────────────────────────────────────────────────────────────────

/// Full app: core plugins plus the shipped catalogs. Two updates bring it
/// through Loading into Closed.
fn boot_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.add_plugins(BarCorePlugin);
    app.update(); // enter Loading, populate registries
    app.update(); // apply NextState → Closed
    app
}

/// Replaces the shipped customer roster with a test-controlled one.
fn override_roster(app: &mut App, walk_ins: Vec<CustomerOrdersDef>, day_plans: Vec<DayPlan>) {
    let mut pool = app.world_mut().resource_mut::<CustomerPool>();
    pool.walk_ins = walk_ins;
    pool.day_plans = day_plans;
}

/// Sends a request event and runs two updates so every downstream system
/// (and the state transition, if any) has observed it.
fn send_and_settle<E: Event>(app: &mut App, event: E) {
    app.world_mut().send_event(event);
    app.update();
    app.update();
}

fn service_state(app: &App) -> ServiceState {
    *app.world().resource::<State<ServiceState>>().get()
}

/// A customer whose every expectation is trivially met: any valid serve
/// scores raw 100 → satisfaction 120 → tip 18.
fn easygoing(id: &str, slots: usize, ice: IcePreference) -> CustomerOrdersDef {
    CustomerOrdersDef {
        profile: CustomerProfile {
            id: id.to_string(),
            name: id.to_string(),
            portrait_index: 0,
            tolerance: Tolerance::Normal,
            ice_preference: ice,
        },
        slots: vec![
            OrderSpec {
                keywords: vec![],
                abv_min: 0.0,
                abv_max: 100.0,
                time_limit_secs: 60.0,
                ..OrderSpec::default()
            };
            slots
        ],
    }
}

/// A customer whose order the test will deliberately fail on every axis:
/// wrong feeling, wrong proof, wrong serve-ware.
fn impossible_to_please(id: &str) -> CustomerOrdersDef {
    CustomerOrdersDef {
        profile: CustomerProfile {
            id: id.to_string(),
            name: id.to_string(),
            portrait_index: 0,
            tolerance: Tolerance::Normal,
            ice_preference: IcePreference::Neutral,
        },
        slots: vec![
            OrderSpec {
                keywords: vec!["spite".to_string()],
                abv_min: 30.0,
                abv_max: 40.0,
                time_limit_secs: 60.0,
                expected_technique: Some("shake".to_string()),
                expected_glass: Some("flute".to_string()),
                expected_garnish: Some("olive".to_string()),
                request_line: None,
            };
            2
        ],
    }
}

/// Makes the mix servable: a pour plus the three required selections.
fn prepare_basic_mix(app: &mut App) {
    app.world_mut().send_event(PourRequest {
        ingredient: "frost_vodka".to_string(),
        ml: JIGGER_SMALL_ML,
    });
    app.world_mut()
        .send_event(SelectTechniqueRequest(Some("stir".to_string())));
    app.world_mut()
        .send_event(SelectGlassRequest(Some("coupe".to_string())));
    app.world_mut().send_event(ToggleGarnishRequest {
        garnish: "mint_sprig".to_string(),
        on: true,
    });
    app.update();
}

// ─────────────────────────────────────────────────────────────────────────────
// Boot
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_boot_populates_catalogs_and_closes_the_doors() {
    let app = boot_app();

    assert_eq!(service_state(&app), ServiceState::Closed);

    let world = app.world();
    assert!(!world.resource::<IngredientRegistry>().ingredients.is_empty());
    assert!(!world.resource::<KeywordRegistry>().keywords.is_empty());
    assert!(!world.resource::<ServewareRegistry>().garnishes.is_empty());
    assert!(!world.resource::<CustomerPool>().walk_ins.is_empty());
    assert_eq!(world.resource::<DayCycle>().day, 1);
    assert_eq!(world.resource::<Till>().money, 0);
    assert_eq!(world.resource::<Reputation>().value, REPUTATION_START);
}

// ─────────────────────────────────────────────────────────────────────────────
// Day lifecycle
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_start_day_opens_service_and_fills_the_docket() {
    let mut app = boot_app();
    override_roster(
        &mut app,
        vec![],
        vec![DayPlan {
            day: 1,
            customers: vec![
                easygoing("a", 1, IcePreference::Neutral),
                easygoing("b", 2, IcePreference::Neutral),
            ],
        }],
    );

    send_and_settle(&mut app, StartDayRequest);

    assert_eq!(service_state(&app), ServiceState::Open);
    assert_eq!(app.world().resource::<DailyDocket>().remaining(), 2);
}

#[test]
fn test_unplanned_day_draws_walk_ins() {
    let mut app = boot_app();
    override_roster(&mut app, vec![easygoing("reg", 1, IcePreference::Neutral)], vec![]);

    send_and_settle(&mut app, StartDayRequest);

    assert_eq!(
        app.world().resource::<DailyDocket>().remaining(),
        DEFAULT_CUSTOMERS_PER_DAY
    );
}

#[test]
fn test_start_day_is_refused_while_open() {
    let mut app = boot_app();
    send_and_settle(&mut app, StartDayRequest);
    assert_eq!(service_state(&app), ServiceState::Open);

    // A second start must not double-fire the day or reopen anything.
    send_and_settle(&mut app, StartDayRequest);
    assert_eq!(app.world().resource::<DayCycle>().day, 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// A full service day
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_full_day_one_customer_two_perfect_drinks() {
    let mut app = boot_app();
    override_roster(
        &mut app,
        vec![],
        vec![DayPlan {
            day: 1,
            customers: vec![easygoing("regular", 2, IcePreference::Neutral)],
        }],
    );

    send_and_settle(&mut app, StartDayRequest);
    send_and_settle(&mut app, NextCustomerRequest);
    assert!(app.world().resource::<ActiveSession>().0.is_some());

    // Two serves; the second lands on the last slot and settles the
    // customer automatically.
    for _ in 0..2 {
        prepare_basic_mix(&mut app);
        send_and_settle(&mut app, ServeDrinkRequest);
    }
    assert!(app.world().resource::<ActiveSession>().0.is_none());

    // Perfect raw score, no ice: 120 satisfaction, 18 tip per drink.
    let till = app.world().resource::<Till>();
    assert_eq!(till.money, 36);
    let reputation = app.world().resource::<Reputation>();
    assert!((reputation.value - (REPUTATION_START + 0.25)).abs() < 1e-5);

    send_and_settle(&mut app, EndDayRequest);

    assert_eq!(service_state(&app), ServiceState::Closed);
    assert_eq!(app.world().resource::<DayCycle>().day, 2);
    let ledger = app.world().resource::<DailyLedger>();
    assert_eq!(ledger.served_customers, 1);
    assert_eq!(ledger.served_drinks, 2);
    assert_eq!(ledger.income_delta(app.world().resource::<Till>()), 36);
}

#[test]
fn test_welcome_ice_tops_out_at_135() {
    let mut app = boot_app();
    override_roster(
        &mut app,
        vec![],
        vec![DayPlan {
            day: 1,
            customers: vec![easygoing("ice_lover", 1, IcePreference::Like)],
        }],
    );

    send_and_settle(&mut app, StartDayRequest);
    send_and_settle(&mut app, NextCustomerRequest);
    prepare_basic_mix(&mut app);
    send_and_settle(&mut app, SetIceRequest(true));
    send_and_settle(&mut app, ServeDrinkRequest);

    // 120 + 15 = the 135 ceiling still tips the top bracket and lands
    // well above the +0.25 reputation line.
    assert_eq!(app.world().resource::<Till>().money, 18);
    let reputation = app.world().resource::<Reputation>();
    assert!((reputation.value - (REPUTATION_START + 0.25)).abs() < 1e-5);
}

#[test]
fn test_awful_drink_walks_the_customer_and_costs_reputation() {
    let mut app = boot_app();
    override_roster(
        &mut app,
        vec![],
        vec![DayPlan {
            day: 1,
            customers: vec![impossible_to_please("harbormaster")],
        }],
    );

    send_and_settle(&mut app, StartDayRequest);
    send_and_settle(&mut app, NextCustomerRequest);

    // Soda water against a 30–40 ABV spite order, with every serve-ware
    // expectation missed: satisfaction 0, instant walk-out on slot 1 of 2.
    app.world_mut().send_event(PourRequest {
        ingredient: "soda_water".to_string(),
        ml: 50.0,
    });
    app.world_mut()
        .send_event(SelectTechniqueRequest(Some("stir".to_string())));
    app.world_mut()
        .send_event(SelectGlassRequest(Some("coupe".to_string())));
    app.world_mut().send_event(ToggleGarnishRequest {
        garnish: "mint_sprig".to_string(),
        on: true,
    });
    app.update();
    send_and_settle(&mut app, ServeDrinkRequest);

    assert!(app.world().resource::<ActiveSession>().0.is_none());
    assert_eq!(app.world().resource::<Till>().money, 0);

    let ledger = app.world().resource::<DailyLedger>();
    assert_eq!(ledger.served_customers, 1);
    assert_eq!(ledger.served_drinks, 1, "second slot never happened");

    let reputation = app.world().resource::<Reputation>();
    assert!((reputation.value - (REPUTATION_START - 0.25)).abs() < 1e-5);

    // Sober and stormed out: nothing for the inn queue.
    assert!(!app.world().resource::<PendingInnDecisions>().has_pending());
}

#[test]
fn test_serve_without_required_selections_is_rejected() {
    let mut app = boot_app();
    override_roster(
        &mut app,
        vec![],
        vec![DayPlan {
            day: 1,
            customers: vec![easygoing("patient", 1, IcePreference::Neutral)],
        }],
    );

    send_and_settle(&mut app, StartDayRequest);
    send_and_settle(&mut app, NextCustomerRequest);

    // Pour but skip technique/glass/garnish.
    app.world_mut().send_event(PourRequest {
        ingredient: "frost_vodka".to_string(),
        ml: JIGGER_LARGE_ML,
    });
    app.update();
    send_and_settle(&mut app, ServeDrinkRequest);

    // The serve was blocked: session untouched, mix kept.
    let session = app.world().resource::<ActiveSession>();
    let state = session.0.as_ref().expect("customer still seated");
    assert!(state.results.is_empty());
    assert_eq!(app.world().resource::<MixState>().portion_count(), 1);
    assert_eq!(app.world().resource::<Till>().money, 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Intoxication and the inn queue
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_heavy_night_queues_the_customer_for_a_room() {
    let mut app = boot_app();
    let mut sailor = easygoing("sailor", 3, IcePreference::Neutral);
    sailor.profile.tolerance = Tolerance::Weak;
    override_roster(
        &mut app,
        vec![],
        vec![DayPlan {
            day: 1,
            customers: vec![sailor],
        }],
    );

    send_and_settle(&mut app, StartDayRequest);
    send_and_settle(&mut app, NextCustomerRequest);

    // Three double whiskeys: 90 ml at 45% = 40.5 points each,
    // 121.5 × 1.25 for a weak drinker — far past the fit-to-rest gate.
    for _ in 0..3 {
        app.world_mut().send_event(PourRequest {
            ingredient: "amber_whiskey".to_string(),
            ml: 2.0 * JIGGER_LARGE_ML,
        });
        app.world_mut()
            .send_event(SelectTechniqueRequest(Some("build".to_string())));
        app.world_mut()
            .send_event(SelectGlassRequest(Some("rocks".to_string())));
        app.world_mut().send_event(ToggleGarnishRequest {
            garnish: "orange_peel".to_string(),
            on: true,
        });
        app.update();
        send_and_settle(&mut app, ServeDrinkRequest);
    }

    let pending = app.world().resource::<PendingInnDecisions>();
    assert_eq!(pending.count(), 1);

    // Bed them; the ledger records the successful sleep.
    send_and_settle(&mut app, InnSleepRequest);
    assert_eq!(app.world().resource::<DailyLedger>().slept_customers, 1);
    assert_eq!(
        app.world().resource::<InnRooms>().free,
        INN_ROOMS_PER_DAY - 1
    );
    assert!(!app.world().resource::<PendingInnDecisions>().has_pending());
}

#[test]
fn test_inn_runs_out_of_rooms() {
    let mut app = boot_app();
    send_and_settle(&mut app, StartDayRequest);

    // Queue three sleep-worthy results directly.
    for i in 0..3 {
        app.world_mut().send_event(CustomerFinishedEvent {
            result: CustomerResult {
                customer_id: format!("guest_{}", i),
                drink_results: vec![],
                average_satisfaction: 90.0,
                average_satisfaction_raw: 75.0,
                total_tip: 0,
                reputation_delta: 0.25,
                left_early: false,
                intox_points: 45.0,
                intox_stage: IntoxStage::Sloshed,
                can_sleep_at_inn: true,
                is_over: false,
            },
        });
    }
    app.update();
    assert_eq!(app.world().resource::<PendingInnDecisions>().count(), 3);

    for _ in 0..3 {
        app.world_mut().send_event(InnSleepRequest);
    }
    app.update();
    app.update();

    // Two beds, three hopefuls: the third went home unbedded but still
    // left the queue.
    assert_eq!(app.world().resource::<DailyLedger>().slept_customers, 2);
    assert_eq!(app.world().resource::<InnRooms>().free, 0);
    assert!(!app.world().resource::<PendingInnDecisions>().has_pending());
}

#[test]
fn test_evict_clears_the_queue_without_sleeping_anyone() {
    let mut app = boot_app();
    send_and_settle(&mut app, StartDayRequest);

    app.world_mut().send_event(CustomerFinishedEvent {
        result: CustomerResult {
            customer_id: "snorer".to_string(),
            drink_results: vec![],
            average_satisfaction: 70.0,
            average_satisfaction_raw: 58.0,
            total_tip: 0,
            reputation_delta: 0.1,
            left_early: false,
            intox_points: 40.0,
            intox_stage: IntoxStage::Sloshed,
            can_sleep_at_inn: true,
            is_over: false,
        },
    });
    app.update();

    send_and_settle(&mut app, InnEvictRequest);

    assert!(!app.world().resource::<PendingInnDecisions>().has_pending());
    assert_eq!(app.world().resource::<DailyLedger>().slept_customers, 0);
    assert_eq!(app.world().resource::<InnRooms>().free, INN_ROOMS_PER_DAY);
}

// ─────────────────────────────────────────────────────────────────────────────
// Upgrades and garnish slots
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_second_garnish_needs_a_bar_upgrade() {
    let mut app = boot_app();
    send_and_settle(&mut app, StartDayRequest);

    for garnish in ["olive", "lemon_twist"] {
        app.world_mut().send_event(ToggleGarnishRequest {
            garnish: garnish.to_string(),
            on: true,
        });
    }
    app.update();

    // Level 1 = one slot; the second toggle is refused.
    assert_eq!(app.world().resource::<MixState>().garnishes.len(), 1);

    // Fund and buy level 2, then the second garnish fits.
    app.world_mut().resource_mut::<Till>().money = 250;
    send_and_settle(&mut app, BarUpgradeRequest);
    assert_eq!(app.world().resource::<BarLevel>().level, 2);
    assert_eq!(app.world().resource::<Till>().money, 50);

    app.world_mut().send_event(ToggleGarnishRequest {
        garnish: "lemon_twist".to_string(),
        on: true,
    });
    app.update();
    assert_eq!(app.world().resource::<MixState>().garnishes.len(), 2);

    // 50 in the till can't cover the 500 for level 3.
    send_and_settle(&mut app, BarUpgradeRequest);
    assert_eq!(app.world().resource::<BarLevel>().level, 2);
    assert_eq!(app.world().resource::<Till>().money, 50);
}

// ─────────────────────────────────────────────────────────────────────────────
// Ledger across days
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_ledger_counters_reset_on_the_next_day() {
    let mut app = boot_app();
    override_roster(
        &mut app,
        vec![easygoing("reg", 1, IcePreference::Neutral)],
        vec![DayPlan {
            day: 1,
            customers: vec![easygoing("reg", 1, IcePreference::Neutral)],
        }],
    );

    send_and_settle(&mut app, StartDayRequest);
    send_and_settle(&mut app, NextCustomerRequest);
    prepare_basic_mix(&mut app);
    send_and_settle(&mut app, ServeDrinkRequest);
    send_and_settle(&mut app, EndDayRequest);

    assert_eq!(app.world().resource::<DailyLedger>().served_customers, 1);

    send_and_settle(&mut app, StartDayRequest);

    let ledger = app.world().resource::<DailyLedger>();
    assert_eq!(ledger.served_customers, 0);
    assert_eq!(ledger.served_drinks, 0);
    assert_eq!(ledger.slept_customers, 0);
    // The new snapshot starts from yesterday's closing balance.
    assert_eq!(ledger.day_start_money, 18);
    assert_eq!(ledger.income_delta(app.world().resource::<Till>()), 0);
}

#[test]
fn test_end_day_is_refused_with_a_customer_seated() {
    let mut app = boot_app();
    override_roster(
        &mut app,
        vec![],
        vec![DayPlan {
            day: 1,
            customers: vec![easygoing("lingerer", 2, IcePreference::Neutral)],
        }],
    );

    send_and_settle(&mut app, StartDayRequest);
    send_and_settle(&mut app, NextCustomerRequest);

    send_and_settle(&mut app, EndDayRequest);

    // Still open, still day 1 — the lingerer has to be finished first.
    assert_eq!(service_state(&app), ServiceState::Open);
    assert_eq!(app.world().resource::<DayCycle>().day, 1);
}
