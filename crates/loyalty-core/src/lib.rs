#![deny(warnings)]

//! Core domain models for the cruise-loyalty simulator.
//!
//! This crate defines the serializable inputs shared across the engine
//! (player standing, booked cruises, casino offers, what-if scenarios) and
//! the ordered threshold ladders that map cumulative points/nights to named
//! tiers and levels. Validation helpers are opt-in: the calculators accept
//! whatever numbers they are handed and let them propagate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Default dollar value of a single casino point.
pub const DEFAULT_DOLLARS_PER_POINT: f64 = 0.01;

/// The player's present loyalty standing plus historical averages used to
/// extrapolate future behavior. Supplied fresh by the caller; never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerContext {
    /// Cumulative casino points earned to date.
    pub current_points: f64,
    /// Cumulative cruise nights sailed to date.
    pub current_nights: f64,
    /// Casino tier name as the caller believes it to be.
    pub current_tier: String,
    /// Cruise-program level name as the caller believes it to be.
    pub current_level: String,
    /// Average points earned per cruise night.
    pub average_points_per_night: f64,
    /// Average nights sailed per calendar month.
    pub average_nights_per_month: f64,
    /// Average spend per booked cruise in USD.
    pub average_spend_per_cruise: f64,
}

/// A booked cruise as the caller's storage layer hands it over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookedCruise {
    pub id: String,
    pub nights: f64,
    /// Amount actually paid in USD.
    pub price: f64,
    /// What the cruise would retail for without casino discounts.
    #[serde(default)]
    pub retail_value: f64,
    /// Points already credited for this booking, when known.
    #[serde(default)]
    pub earned_points: Option<f64>,
    /// Freeplay/OBC and similar comps attached to this booking, in USD.
    #[serde(default)]
    pub comp_value: f64,
}

impl BookedCruise {
    /// Points for this cruise: the credited amount when known, otherwise
    /// estimated from nights at the player's average earn rate.
    pub fn points_or_estimate(&self, average_points_per_night: f64) -> f64 {
        self.earned_points
            .unwrap_or(self.nights * average_points_per_night)
    }
}

/// A casino offer the player could book.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CasinoOffer {
    pub id: String,
    /// Minimum sailing length the offer applies to.
    #[serde(default)]
    pub min_nights: Option<f64>,
    #[serde(default)]
    pub freeplay_amount: f64,
    #[serde(default)]
    pub obc_amount: f64,
    #[serde(default)]
    pub discount_percent: f64,
}

/// A hypothetical change to simulate. Exactly one variant applies per run;
/// variants without a delta rule (currently `AdjustSpend`) simulate as a
/// no-op rather than an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Scenario {
    /// Book one more cruise at (or near) the player's usual spend.
    AddCruise {
        #[serde(default)]
        nights: Option<f64>,
        #[serde(default)]
        spend: Option<f64>,
    },
    /// Cancel an existing booking. An unknown id is a silent no-op.
    RemoveCruise { cruise_id: String },
    /// Rebook the usual cruise in a different cabin class.
    ChangeCabin { cabin: String },
    /// Reserved: spend adjustments currently have no delta rule.
    AdjustSpend { spend: f64 },
    /// Book a specific casino offer. An unknown id is a silent no-op.
    BookOffer { offer_id: String },
    /// Free-form deltas supplied by the caller.
    Custom {
        #[serde(default)]
        points: f64,
        #[serde(default)]
        nights: f64,
        #[serde(default)]
        spend: Option<f64>,
    },
}

impl Scenario {
    /// The zero-effect scenario used as a comparison baseline.
    pub fn no_op() -> Self {
        Scenario::Custom {
            points: 0.0,
            nights: 0.0,
            spend: None,
        }
    }
}

/// Spend multiplier for a cabin class relative to the player's average.
/// Unrecognized names fall back to 1.0 (no change).
pub fn cabin_multiplier(cabin: &str) -> f64 {
    if cabin.eq_ignore_ascii_case("interior") {
        0.8
    } else if cabin.eq_ignore_ascii_case("oceanview") {
        1.0
    } else if cabin.eq_ignore_ascii_case("balcony") {
        1.3
    } else if cabin.eq_ignore_ascii_case("suite") {
        2.0
    } else {
        1.0
    }
}

/// One rung of a threshold ladder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LadderEntry {
    pub name: String,
    /// Cumulative points/nights required to hold this rung.
    pub threshold: f64,
}

impl LadderEntry {
    pub fn new(name: impl Into<String>, threshold: f64) -> Self {
        Self {
            name: name.into(),
            threshold,
        }
    }
}

/// Errors rejected at ladder construction time. Lookups never fail.
#[derive(Debug, Error, PartialEq)]
pub enum LadderError {
    /// A ladder needs at least one rung.
    #[error("ladder has no entries")]
    Empty,
    /// The bottom rung must start at zero so every value resolves.
    #[error("base threshold must be 0, got {0}")]
    NonZeroBase(f64),
    /// Thresholds must be finite and strictly ascending.
    #[error("threshold at index {0} is not strictly ascending")]
    NotAscending(usize),
    /// Rung names must be unique.
    #[error("duplicate rung name: {0}")]
    DuplicateName(String),
}

/// A strictly-ordered lookup table mapping a cumulative total to a named
/// tier or level. The business thresholds are configuration data injected
/// by the caller, not baked into the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Ladder {
    entries: Vec<LadderEntry>,
}

impl Ladder {
    /// Build a ladder, enforcing the total-order invariant the lookups
    /// rely on.
    pub fn new(entries: Vec<LadderEntry>) -> Result<Self, LadderError> {
        let first = entries.first().ok_or(LadderError::Empty)?;
        if first.threshold != 0.0 {
            return Err(LadderError::NonZeroBase(first.threshold));
        }
        let mut names: BTreeSet<&str> = BTreeSet::new();
        let mut prev = f64::NEG_INFINITY;
        for (i, e) in entries.iter().enumerate() {
            if !e.threshold.is_finite() || e.threshold <= prev {
                return Err(LadderError::NotAscending(i));
            }
            prev = e.threshold;
            if !names.insert(e.name.as_str()) {
                return Err(LadderError::DuplicateName(e.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LadderEntry] {
        &self.entries
    }

    /// Index of the highest rung whose threshold is <= `value`. Values
    /// below the base (negative totals are reachable via cruise removal)
    /// and NaN both land on the bottom rung.
    pub fn resolve_index(&self, value: f64) -> usize {
        self.entries
            .iter()
            .rposition(|e| value >= e.threshold)
            .unwrap_or(0)
    }

    /// The rung held at `value`.
    pub fn resolve(&self, value: f64) -> &LadderEntry {
        &self.entries[self.resolve_index(value)]
    }

    /// The rung immediately above the one held at `value`, or `None` at
    /// the top of the ladder.
    pub fn next_above(&self, value: f64) -> Option<&LadderEntry> {
        self.entries.get(self.resolve_index(value) + 1)
    }
}

/// The loyalty program the engine simulates against: a points-based casino
/// tier ladder, a nights-based cruise level ladder, and the point-to-dollar
/// conversion. Swappable wholesale as long as the ladders stay ordered.
#[derive(Clone, Debug)]
pub struct LoyaltyProgram {
    pub tiers: Ladder,
    pub levels: Ladder,
    pub dollars_per_point: f64,
}

impl LoyaltyProgram {
    pub fn new(tiers: Ladder, levels: Ladder) -> Self {
        Self {
            tiers,
            levels,
            dollars_per_point: DEFAULT_DOLLARS_PER_POINT,
        }
    }

    pub fn with_dollars_per_point(mut self, dollars_per_point: f64) -> Self {
        self.dollars_per_point = dollars_per_point;
        self
    }
}

/// Validation errors for callers that opt into strict input checking.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Numeric field must be finite.
    #[error("non-finite value in field `{0}`")]
    NonFinite(&'static str),
    /// Monetary field must be non-negative.
    #[error("negative monetary value in field `{0}`")]
    NegativeMoney(&'static str),
    /// Nights must be non-negative.
    #[error("negative nights in field `{0}`")]
    NegativeNights(&'static str),
}

/// Strict check of a player context. The engine itself never calls this;
/// it exists for callers that want to reject bad storage data up front.
pub fn validate_player_context(ctx: &PlayerContext) -> Result<(), ValidationError> {
    let fields = [
        ("current_points", ctx.current_points),
        ("current_nights", ctx.current_nights),
        ("average_points_per_night", ctx.average_points_per_night),
        ("average_nights_per_month", ctx.average_nights_per_month),
        ("average_spend_per_cruise", ctx.average_spend_per_cruise),
    ];
    for (name, v) in fields {
        if !v.is_finite() {
            return Err(ValidationError::NonFinite(name));
        }
    }
    if ctx.current_nights < 0.0 {
        return Err(ValidationError::NegativeNights("current_nights"));
    }
    if ctx.average_spend_per_cruise < 0.0 {
        return Err(ValidationError::NegativeMoney("average_spend_per_cruise"));
    }
    Ok(())
}

/// Strict check of a booked cruise, same contract as
/// [`validate_player_context`].
pub fn validate_booked_cruise(cruise: &BookedCruise) -> Result<(), ValidationError> {
    let fields = [
        ("nights", cruise.nights),
        ("price", cruise.price),
        ("retail_value", cruise.retail_value),
        ("comp_value", cruise.comp_value),
    ];
    for (name, v) in fields {
        if !v.is_finite() {
            return Err(ValidationError::NonFinite(name));
        }
    }
    if let Some(p) = cruise.earned_points {
        if !p.is_finite() {
            return Err(ValidationError::NonFinite("earned_points"));
        }
    }
    if cruise.nights < 0.0 {
        return Err(ValidationError::NegativeNights("nights"));
    }
    if cruise.price < 0.0 || cruise.retail_value < 0.0 || cruise.comp_value < 0.0 {
        return Err(ValidationError::NegativeMoney("price"));
    }
    Ok(())
}
