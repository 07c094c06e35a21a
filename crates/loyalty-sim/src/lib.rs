#![deny(warnings)]

//! Scenario engine for the cruise-loyalty simulator.
//!
//! Maps a tagged what-if scenario to numeric deltas, composes the forecast
//! calculators into a single [`SimulationResult`], runs baseline-vs-scenario
//! comparisons, and projects the loyalty timeline month by month under the
//! annual point-expiration rule.
//!
//! Everything here is a single synchronous pass over the inputs; nothing is
//! cached or mutated across calls. Unknown cruise/offer ids resolve to an
//! all-zero delta set: a silent no-op by contract, never an error.

use chrono::{Datelike, Duration, NaiveDate};
use loyalty_core::{cabin_multiplier, BookedCruise, CasinoOffer, LoyaltyProgram, PlayerContext, Scenario};
use loyalty_forecast::{
    calculate_loyalty_forecast, calculate_risk_analysis, calculate_roi_projection,
    calculate_tier_forecast, LoyaltyForecast, RiskAnalysis, RoiProjection, TierForecast,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// ROI horizon used by the scenario engine.
const ROI_HORIZON_MONTHS: u32 = 12;

/// Nights assumed for a booking when the scenario does not say.
const DEFAULT_CRUISE_NIGHTS: f64 = 7.0;

/// Numeric effect of a scenario on the player's position. All zero for
/// no-op scenarios and failed id lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDeltas {
    pub nights: f64,
    pub points: f64,
    pub spend: f64,
    pub retail_value: f64,
    pub comp_value: f64,
}

/// Full output of one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub tier_forecast: TierForecast,
    pub loyalty_forecast: LoyaltyForecast,
    pub roi_projection: RoiProjection,
    pub risk_analysis: RiskAnalysis,
    /// Present only on results produced by [`run_comparison_simulation`].
    pub comparison: Option<Comparison>,
}

/// Baseline run plus the element-wise difference against it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub baseline: Box<SimulationResult>,
    pub difference: SimulationDiff,
}

/// Element-wise difference between the scenario run and the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationDiff {
    pub points_delta: f64,
    pub nights_delta: f64,
    pub roi_delta: f64,
    /// Projected tier names differ between the two runs.
    pub tier_changed: bool,
    /// Projected level names differ between the two runs.
    pub level_changed: bool,
}

/// One month of the forward loyalty timeline. `month == 0` is the present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub month: u32,
    pub points: f64,
    pub nights: f64,
    pub tier: String,
    pub level: String,
}

/// Translate a scenario into point/night/money deltas against the player's
/// current position.
///
/// Lookups by id that miss leave every delta at zero. `AdjustSpend` has no
/// delta rule yet and behaves the same way.
pub fn scenario_deltas(
    ctx: &PlayerContext,
    cruises: &[BookedCruise],
    offers: &[CasinoOffer],
    scenario: &Scenario,
) -> ScenarioDeltas {
    match scenario {
        Scenario::AddCruise { nights, spend } => {
            let nights = nights.unwrap_or(DEFAULT_CRUISE_NIGHTS);
            let spend = spend.unwrap_or(ctx.average_spend_per_cruise);
            ScenarioDeltas {
                nights,
                points: nights * ctx.average_points_per_night,
                spend,
                retail_value: spend * 1.3,
                comp_value: 0.0,
            }
        }
        Scenario::RemoveCruise { cruise_id } => {
            match cruises.iter().find(|c| &c.id == cruise_id) {
                Some(c) => ScenarioDeltas {
                    nights: -c.nights,
                    points: -c.points_or_estimate(ctx.average_points_per_night),
                    spend: -c.price,
                    retail_value: 0.0,
                    comp_value: 0.0,
                },
                None => ScenarioDeltas::default(),
            }
        }
        Scenario::ChangeCabin { cabin } => {
            let spend = ctx.average_spend_per_cruise * cabin_multiplier(cabin)
                - ctx.average_spend_per_cruise;
            ScenarioDeltas {
                nights: 0.0,
                points: (spend * 0.5).floor(),
                spend,
                retail_value: 0.0,
                comp_value: 0.0,
            }
        }
        Scenario::BookOffer { offer_id } => {
            match offers.iter().find(|o| &o.id == offer_id) {
                Some(o) => {
                    let nights = o.min_nights.unwrap_or(DEFAULT_CRUISE_NIGHTS);
                    ScenarioDeltas {
                        nights,
                        points: nights * ctx.average_points_per_night,
                        spend: ctx.average_spend_per_cruise * (1.0 - o.discount_percent / 100.0),
                        retail_value: ctx.average_spend_per_cruise,
                        comp_value: o.freeplay_amount + o.obc_amount,
                    }
                }
                None => ScenarioDeltas::default(),
            }
        }
        Scenario::Custom {
            points,
            nights,
            spend,
        } => {
            let spend = spend.unwrap_or(0.0);
            ScenarioDeltas {
                nights: *nights,
                points: *points,
                spend,
                retail_value: spend * 1.2,
                comp_value: 0.0,
            }
        }
        Scenario::AdjustSpend { .. } => ScenarioDeltas::default(),
    }
}

/// Run a single what-if scenario against the player's booked portfolio.
///
/// The scenario's deltas feed the tier and level forecasts; the ROI is
/// projected over the summed portfolio totals plus the deltas; the risk
/// analysis sees the unmodified cruise list. The result carries no
/// comparison block.
pub fn run_simulation(
    program: &LoyaltyProgram,
    ctx: &PlayerContext,
    cruises: &[BookedCruise],
    scenario: &Scenario,
    offers: &[CasinoOffer],
    today: NaiveDate,
) -> SimulationResult {
    let d = scenario_deltas(ctx, cruises, offers, scenario);
    debug!(
        nights = d.nights,
        points = d.points,
        spend = d.spend,
        retail = d.retail_value,
        comp = d.comp_value,
        "scenario deltas"
    );

    let tier_forecast = calculate_tier_forecast(&program.tiers, ctx, d.points, d.nights, today);
    let loyalty_forecast = calculate_loyalty_forecast(&program.levels, ctx, d.nights, today);

    let mut total_spend = d.spend;
    let mut total_retail = d.retail_value;
    let mut total_points = d.points;
    let mut total_comp = d.comp_value;
    for c in cruises {
        total_spend += c.price;
        total_retail += c.retail_value;
        total_points += c.points_or_estimate(ctx.average_points_per_night);
        total_comp += c.comp_value;
    }

    let roi_projection = calculate_roi_projection(
        total_spend,
        total_retail,
        total_points,
        total_comp,
        ROI_HORIZON_MONTHS,
        program.dollars_per_point,
        today,
    );
    let risk_analysis = calculate_risk_analysis(cruises, roi_projection.projected_roi, &tier_forecast);

    SimulationResult {
        tier_forecast,
        loyalty_forecast,
        roi_projection,
        risk_analysis,
        comparison: None,
    }
}

/// Run the scenario against a zero-effect baseline and attach the
/// element-wise difference.
pub fn run_comparison_simulation(
    program: &LoyaltyProgram,
    ctx: &PlayerContext,
    cruises: &[BookedCruise],
    scenario: &Scenario,
    offers: &[CasinoOffer],
    today: NaiveDate,
) -> SimulationResult {
    let baseline = run_simulation(program, ctx, cruises, &Scenario::no_op(), offers, today);
    let mut projected = run_simulation(program, ctx, cruises, scenario, offers, today);

    let difference = SimulationDiff {
        points_delta: projected.tier_forecast.projected_points
            - baseline.tier_forecast.projected_points,
        nights_delta: projected.loyalty_forecast.projected_nights
            - baseline.loyalty_forecast.projected_nights,
        roi_delta: projected.roi_projection.projected_roi - baseline.roi_projection.projected_roi,
        tier_changed: projected.tier_forecast.projected_tier
            != baseline.tier_forecast.projected_tier,
        level_changed: projected.loyalty_forecast.projected_level
            != baseline.loyalty_forecast.projected_level,
    };
    projected.comparison = Some(Comparison {
        baseline: Box::new(baseline),
        difference,
    });
    projected
}

/// Whole months from `today` until the next April 1 point-expiration
/// boundary. On or after April 1 the boundary rolls to next year, so the
/// result is always in 1..=12.
pub fn months_until_points_expiry(today: NaiveDate) -> u32 {
    let target_year = if (today.month(), today.day()) >= (4, 1) {
        today.year() + 1
    } else {
        today.year()
    };
    ((target_year - today.year()) * 12 + (4 - today.month() as i32)) as u32
}

/// Project the loyalty standing forward month by month at the player's
/// average earn rates.
///
/// Points reset to zero at every April 1 boundary (and every 12 months
/// after it) before that month's snapshot is recorded; nights never reset.
/// Returns `months_ahead + 1` snapshots, with `month == 0` the present.
pub fn project_timeline(
    program: &LoyaltyProgram,
    ctx: &PlayerContext,
    months_ahead: u32,
    today: NaiveDate,
) -> Vec<TimelineSnapshot> {
    let expiry_offset = months_until_points_expiry(today);
    debug!(months_ahead, expiry_offset, "projecting timeline");

    let points_per_month = ctx.average_points_per_night * ctx.average_nights_per_month;
    let mut points = ctx.current_points;
    let mut nights = ctx.current_nights;
    let mut snapshots = Vec::with_capacity(months_ahead as usize + 1);
    for month in 0..=months_ahead {
        if month > 0 && month >= expiry_offset && (month - expiry_offset) % 12 == 0 {
            points = 0.0;
        }
        snapshots.push(TimelineSnapshot {
            month,
            points,
            nights,
            tier: program.tiers.resolve(points).name.clone(),
            level: program.levels.resolve(nights).name.clone(),
        });
        points += points_per_month;
        nights += ctx.average_nights_per_month;
    }
    snapshots
}

/// Calendar date a snapshot month falls on, using the engine's constant
/// 30-day month.
pub fn snapshot_date(today: NaiveDate, month: u32) -> NaiveDate {
    today + Duration::days(30 * i64::from(month))
}
