//! Shared types, resources, events, and states for Last Call.
//!
//! This is the type contract. Every domain plugin imports from here.
//! The embedding layer (rendering, input, dialogue — all outside this
//! crate) drives the core exclusively through the request events below
//! and observes it through the notification events.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// SERVICE STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

/// `Loading` exists only while the data registries are populated.
/// Service alternates `Closed ⇄ Open` at day boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum ServiceState {
    #[default]
    Loading,
    Closed,
    Open,
}

// ═══════════════════════════════════════════════════════════════════════
// EMOTIONS
// ═══════════════════════════════════════════════════════════════════════

/// A drink's (or ingredient's) emotional profile across the seven base
/// feelings. Ingredient rows are authored as free weights; the data layer
/// normalizes them into distributions, so every vector that reaches the
/// blending math sums to 1 — and a blend of distributions, divided by its
/// total volume, sums to 1 again.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionVector {
    pub joy: f32,
    pub sadness: f32,
    pub anger: f32,
    pub fear: f32,
    pub disgust: f32,
    pub surprise: f32,
    pub neutral: f32,
}

impl EmotionVector {
    pub const ZERO: EmotionVector = EmotionVector {
        joy: 0.0,
        sadness: 0.0,
        anger: 0.0,
        fear: 0.0,
        disgust: 0.0,
        surprise: 0.0,
        neutral: 0.0,
    };

    /// Pure "no feeling at all" — what ice and water taste like.
    pub const NEUTRAL: EmotionVector = EmotionVector {
        joy: 0.0,
        sadness: 0.0,
        anger: 0.0,
        fear: 0.0,
        disgust: 0.0,
        surprise: 0.0,
        neutral: 1.0,
    };

    pub fn components(&self) -> [f32; 7] {
        [
            self.joy,
            self.sadness,
            self.anger,
            self.fear,
            self.disgust,
            self.surprise,
            self.neutral,
        ]
    }

    pub fn component_sum(&self) -> f32 {
        self.components().iter().sum()
    }

    /// Adds `other * ml` component-wise. Consumes and returns the
    /// accumulator so blending reads as a fold — commutative and
    /// associative over any set of portions.
    pub fn add_weighted(self, other: &EmotionVector, ml: f32) -> EmotionVector {
        EmotionVector {
            joy: self.joy + other.joy * ml,
            sadness: self.sadness + other.sadness * ml,
            anger: self.anger + other.anger * ml,
            fear: self.fear + other.fear * ml,
            disgust: self.disgust + other.disgust * ml,
            surprise: self.surprise + other.surprise * ml,
            neutral: self.neutral + other.neutral * ml,
        }
    }

    /// Divides every component by `total_ml`. A non-positive total yields
    /// the zero vector — never a division, never a panic.
    pub fn normalized(self, total_ml: f32) -> EmotionVector {
        if total_ml <= 0.0 {
            return EmotionVector::ZERO;
        }
        self.scaled(1.0 / total_ml)
    }

    /// Rescales authored weights into a distribution. An all-zero row is
    /// treated as flavorless, i.e. pure neutral.
    pub fn into_distribution(self) -> EmotionVector {
        let sum = self.component_sum();
        if sum <= 0.0 {
            return EmotionVector::NEUTRAL;
        }
        self.scaled(1.0 / sum)
    }

    fn scaled(self, factor: f32) -> EmotionVector {
        EmotionVector {
            joy: self.joy * factor,
            sadness: self.sadness * factor,
            anger: self.anger * factor,
            fear: self.fear * factor,
            disgust: self.disgust * factor,
            surprise: self.surprise * factor,
            neutral: self.neutral * factor,
        }
    }

    /// Histogram intersection with another distribution: 1.0 on an exact
    /// match, 0.0 when the profiles share nothing.
    pub fn overlap(&self, other: &EmotionVector) -> f32 {
        self.components()
            .iter()
            .zip(other.components().iter())
            .map(|(a, b)| a.min(*b))
            .sum()
    }

    /// The strongest component and its share, for logs and tooltips.
    pub fn dominant(&self) -> (&'static str, f32) {
        const LABELS: [&str; 7] = [
            "joy", "sadness", "anger", "fear", "disgust", "surprise", "neutral",
        ];
        let values = self.components();
        let mut best = 0;
        for i in 1..values.len() {
            if values[i] > values[best] {
                best = i;
            }
        }
        (LABELS[best], values[best])
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CATALOG DEFINITIONS — populated by the data layer
// ═══════════════════════════════════════════════════════════════════════

/// String IDs throughout, for data-driven flexibility.
pub type IngredientId = String;
pub type KeywordId = String;
pub type TechniqueId = String;
pub type GlassId = String;
pub type GarnishId = String;
pub type CustomerId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientDef {
    pub id: IngredientId,
    pub name: String,
    /// Alcohol by volume, 0–100.
    pub abv: f32,
    /// Stored as a distribution (see `EmotionVector::into_distribution`).
    pub emotions: EmotionVector,
}

/// A secondary emotion a customer can ask for ("nostalgia", "courage"…),
/// described as a blend over the seven base feelings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordDef {
    pub id: KeywordId,
    pub name: String,
    pub profile: EmotionVector,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueDef {
    pub id: TechniqueId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlassDef {
    pub id: GlassId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarnishDef {
    pub id: GarnishId,
    pub name: String,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct IngredientRegistry {
    pub ingredients: HashMap<IngredientId, IngredientDef>,
}

impl IngredientRegistry {
    pub fn get(&self, id: &str) -> Option<&IngredientDef> {
        self.ingredients.get(id)
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct KeywordRegistry {
    pub keywords: HashMap<KeywordId, KeywordDef>,
}

impl KeywordRegistry {
    pub fn get(&self, id: &str) -> Option<&KeywordDef> {
        self.keywords.get(id)
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ServewareRegistry {
    pub techniques: HashMap<TechniqueId, TechniqueDef>,
    pub glasses: HashMap<GlassId, GlassDef>,
    pub garnishes: HashMap<GarnishId, GarnishDef>,
}

// ═══════════════════════════════════════════════════════════════════════
// CUSTOMERS & ORDERS
// ═══════════════════════════════════════════════════════════════════════

/// How fast a customer racks up intoxication points. Weak drinkers feel
/// the same drink harder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tolerance {
    Weak,
    #[default]
    Normal,
    Strong,
}

impl Tolerance {
    pub fn multiplier(&self) -> f32 {
        match self {
            Tolerance::Weak => 1.25,
            Tolerance::Normal => 1.0,
            Tolerance::Strong => 0.75,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IcePreference {
    #[default]
    Neutral,
    Like,
    Dislike,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: CustomerId,
    pub name: String,
    pub portrait_index: u32,
    pub tolerance: Tolerance,
    pub ice_preference: IcePreference,
}

/// Authoring data for one requested drink.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSpec {
    pub keywords: Vec<KeywordId>,
    pub abv_min: f32,
    pub abv_max: f32,
    pub time_limit_secs: f32,
    pub expected_technique: Option<TechniqueId>,
    pub expected_glass: Option<GlassId>,
    pub expected_garnish: Option<GarnishId>,
    /// What the customer says when ordering; the UI falls back to the
    /// keyword names when empty.
    pub request_line: Option<String>,
}

/// A validated, immutable order. One per drink slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub keywords: Vec<KeywordId>,
    pub abv_min: f32,
    pub abv_max: f32,
    pub time_limit_secs: f32,
    pub expected_technique: Option<TechniqueId>,
    pub expected_glass: Option<GlassId>,
    pub expected_garnish: Option<GarnishId>,
    pub request_line: Option<String>,
}

impl Order {
    pub fn abv_in_range(&self, abv: f32) -> bool {
        abv >= self.abv_min && abv <= self.abv_max
    }
}

/// One customer visit: who they are and what they will order, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerOrdersDef {
    pub profile: CustomerProfile,
    pub slots: Vec<OrderSpec>,
}

/// A scripted roster for one specific day. Days without a plan draw
/// walk-ins from the pool instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub customers: Vec<CustomerOrdersDef>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CustomerPool {
    pub walk_ins: Vec<CustomerOrdersDef>,
    pub day_plans: Vec<DayPlan>,
}

impl CustomerPool {
    pub fn plan_for_day(&self, day: u32) -> Option<&DayPlan> {
        self.day_plans.iter().find(|p| p.day == day)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// MIXING
// ═══════════════════════════════════════════════════════════════════════

/// A single pour of one ingredient, not yet blended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    pub ingredient: IngredientId,
    pub ml: f32,
}

/// The mix-in-progress plus the bartender's presentation selections.
/// Pours accumulate here until the drink is submitted or the mix reset.
#[derive(Resource, Debug, Clone, Default)]
pub struct MixState {
    pub portions: Vec<Portion>,
    pub use_ice: bool,
    pub technique: Option<TechniqueId>,
    pub glass: Option<GlassId>,
    pub garnishes: Vec<GarnishId>,
}

impl MixState {
    pub fn portion_count(&self) -> usize {
        self.portions.len()
    }

    /// Discards the accumulated pours but keeps the serve-ware
    /// selections — what happens between two drinks for one customer.
    pub fn clear_pour(&mut self) {
        self.portions.clear();
        self.use_ice = false;
    }

    /// Full reset for a fresh customer.
    pub fn clear_all(&mut self) {
        self.clear_pour();
        self.technique = None;
        self.glass = None;
        self.garnishes.clear();
    }
}

/// The computed result of blending all current portions (plus optional
/// ice). Immutable once produced; one per serve action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub portions: Vec<Portion>,
    pub emotions: EmotionVector,
    pub final_abv: f32,
    pub total_ml: f32,
}

/// Presentation choices accompanying a served drink.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServeMeta {
    pub technique: Option<TechniqueId>,
    pub glass: Option<GlassId>,
    pub garnishes: Vec<GarnishId>,
    pub used_ice: bool,
}

impl ServeMeta {
    pub fn from_mix(mix: &MixState) -> Self {
        Self {
            technique: mix.technique.clone(),
            glass: mix.glass.clone(),
            garnishes: mix.garnishes.clone(),
            used_ice: mix.use_ice,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// RESULTS
// ═══════════════════════════════════════════════════════════════════════

/// Score card for one served drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkResult {
    /// Post-scaling satisfaction, 0–135. Above 120 means the ice landed.
    pub satisfaction: f32,
    /// The pre-scaling composite, 0–100.
    pub satisfaction_raw: f32,
    pub tip: i64,
    /// The drink was bad enough that the customer walked out.
    pub customer_left: bool,
}

/// Discrete drunkenness ladder. `Sloshed` customers are fit to be put to
/// bed upstairs; `Blackout` customers were over-served.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum IntoxStage {
    #[default]
    Sober,
    Tipsy,
    Flushed,
    Woozy,
    Sloshed,
    Blackout,
}

impl IntoxStage {
    pub fn label(&self) -> &'static str {
        match self {
            IntoxStage::Sober => "sober",
            IntoxStage::Tipsy => "tipsy",
            IntoxStage::Flushed => "flushed",
            IntoxStage::Woozy => "woozy",
            IntoxStage::Sloshed => "sloshed",
            IntoxStage::Blackout => "blackout",
        }
    }

    pub fn fit_to_rest(&self) -> bool {
        *self >= IntoxStage::Sloshed
    }

    pub fn over_served(&self) -> bool {
        *self >= IntoxStage::Blackout
    }
}

/// Produced once when a customer session ends — by finishing every
/// ordered drink or by the customer leaving early.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResult {
    pub customer_id: CustomerId,
    pub drink_results: Vec<DrinkResult>,
    pub average_satisfaction: f32,
    pub average_satisfaction_raw: f32,
    pub total_tip: i64,
    pub reputation_delta: f32,
    pub left_early: bool,
    pub intox_points: f32,
    pub intox_stage: IntoxStage,
    pub can_sleep_at_inn: bool,
    pub is_over: bool,
}

/// End-of-day summary published when the bar closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    pub day: u32,
    pub income_delta: i64,
    pub reputation_delta: f32,
    pub served_customers: u32,
    pub served_drinks: u32,
    pub slept_customers: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// REQUEST EVENTS — the command API the embedding layer writes
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone)]
pub struct StartDayRequest;

#[derive(Event, Debug, Clone)]
pub struct EndDayRequest;

/// Seat the next customer from today's roster.
#[derive(Event, Debug, Clone)]
pub struct NextCustomerRequest;

#[derive(Event, Debug, Clone)]
pub struct PourRequest {
    pub ingredient: IngredientId,
    pub ml: f32,
}

#[derive(Event, Debug, Clone)]
pub struct ResetMixRequest;

#[derive(Event, Debug, Clone)]
pub struct SetIceRequest(pub bool);

#[derive(Event, Debug, Clone)]
pub struct SelectTechniqueRequest(pub Option<TechniqueId>);

#[derive(Event, Debug, Clone)]
pub struct SelectGlassRequest(pub Option<GlassId>);

#[derive(Event, Debug, Clone)]
pub struct ToggleGarnishRequest {
    pub garnish: GarnishId,
    pub on: bool,
}

/// Submit the current mix for the active order slot.
#[derive(Event, Debug, Clone)]
pub struct ServeDrinkRequest;

#[derive(Event, Debug, Clone)]
pub struct FinishCustomerRequest;

/// Put the front of the inn queue to bed.
#[derive(Event, Debug, Clone)]
pub struct InnSleepRequest;

/// Send the front of the inn queue home instead.
#[derive(Event, Debug, Clone)]
pub struct InnEvictRequest;

#[derive(Event, Debug, Clone)]
pub struct BarUpgradeRequest;

// ═══════════════════════════════════════════════════════════════════════
// NOTIFICATION EVENTS — what the core reports back
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone)]
pub struct DayStartedEvent {
    pub day: u32,
}

#[derive(Event, Debug, Clone)]
pub struct DayEndedEvent {
    pub day: u32,
}

/// Ledger summary for the day that just ended.
#[derive(Event, Debug, Clone)]
pub struct DayReportEvent {
    pub report: DayReport,
}

#[derive(Event, Debug, Clone)]
pub struct CustomerGreetedEvent {
    pub profile: CustomerProfile,
    pub slot_count: usize,
}

#[derive(Event, Debug, Clone)]
pub struct DrinkServedEvent {
    /// 0-based order slot the drink answered.
    pub slot_index: usize,
    pub result: DrinkResult,
}

/// A serve attempt was blocked; the embedding layer surfaces `reason`.
#[derive(Event, Debug, Clone)]
pub struct ServeRejectedEvent {
    pub reason: String,
}

#[derive(Event, Debug, Clone)]
pub struct CustomerFinishedEvent {
    pub result: CustomerResult,
}

/// Money movement through the till. Positive = income, negative = spend.
#[derive(Event, Debug, Clone)]
pub struct TillChangeEvent {
    pub amount: i64,
    pub reason: String,
}

/// A queued customer was successfully bedded at the inn.
#[derive(Event, Debug, Clone)]
pub struct CustomerSleptEvent {
    pub customer_id: CustomerId,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

/// Ice always adds exactly this much melt volume to the blend.
pub const ICE_VOLUME_ML: f32 = 20.0;

/// Jigger capacities available to the pouring UI.
pub const JIGGER_SMALL_ML: f32 = 30.0;
pub const JIGGER_LARGE_ML: f32 = 45.0;

/// Satisfaction scale. Raw scores run 0–100; the presented score runs to
/// 135 so an exceptional drink can read above "perfect".
pub const SATISFACTION_MAX: f32 = 135.0;
pub const SATISFACTION_SCALE: f32 = 1.2;
pub const ICE_LIKED_BONUS: f32 = 15.0;
pub const ICE_DISLIKED_PENALTY: f32 = -10.0;

/// Below this the customer walks out on the spot.
pub const WALK_AWAY_THRESHOLD: f32 = 21.0;

/// ABV distance (in percentage points) over which an out-of-range drink
/// decays from "close enough" to undrinkable.
pub const ABV_FALLOFF: f32 = 20.0;

pub const REPUTATION_START: f32 = 2.5;
pub const REPUTATION_MIN: f32 = 0.0;
pub const REPUTATION_MAX: f32 = 5.0;

/// Walk-in head-count on days without a scripted plan.
pub const DEFAULT_CUSTOMERS_PER_DAY: usize = 3;
pub const MAX_ORDER_SLOTS: usize = 3;

pub const BAR_MAX_LEVEL: u8 = 3;
pub const INN_ROOMS_PER_DAY: u8 = 2;
