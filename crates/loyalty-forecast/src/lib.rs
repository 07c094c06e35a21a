#![deny(warnings)]

//! Pure forecast calculators for the cruise-loyalty simulator.
//!
//! This crate provides the stateless math the scenario engine composes:
//! - Tier forecasting against the points ladder
//! - Cruise-level forecasting against the nights ladder
//! - Return-on-investment projection with a naive break-even date
//! - A heuristic risk score over the booked portfolio
//!
//! All functions are permissive by contract: inputs are not validated,
//! negative totals flow through, and non-finite values propagate silently.
//! Date-dependent results take an explicit `today` so callers control the
//! clock; one projected month is a constant 30 days.

use chrono::{Duration, NaiveDate};
use loyalty_core::{BookedCruise, Ladder, PlayerContext};
use serde::{Deserialize, Serialize};

/// Days in one projected month.
const DAYS_PER_MONTH: i64 = 30;

/// Fixed haircut applied to the projected ROI.
const RISK_HAIRCUT: f64 = 0.85;

/// Forecast of the player's casino tier after a hypothetical point/night
/// delta. Tier names come from the injected ladder, not the caller's
/// self-reported standing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierForecast {
    pub current_points: f64,
    pub projected_points: f64,
    pub current_nights: f64,
    pub projected_nights: f64,
    pub current_tier: String,
    pub projected_tier: String,
    /// True when the projected rung outranks the current one. A projection
    /// that nets a loss simply reports `false`; there is no downgrade flag.
    pub tier_upgrade: bool,
    /// Points still missing to the rung above the projection, floored at 0.
    pub points_to_next_tier: f64,
    /// Whole months to close that gap at the player's average earn rate;
    /// 0 when there is nothing left to earn or no earn rate.
    pub months_to_next_tier: u32,
    /// `today + months * 30d`, absent when no further progress is forecast
    /// or the span runs past the calendar range.
    pub projected_date: Option<NaiveDate>,
}

/// Forecast of the cruise-program level, same shape as [`TierForecast`]
/// but keyed on cumulative nights. The two ladders never interact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyForecast {
    pub current_nights: f64,
    pub projected_nights: f64,
    pub current_level: String,
    pub projected_level: String,
    pub level_upgrade: bool,
    pub nights_to_next_level: f64,
    pub months_to_next_level: u32,
    pub projected_date: Option<NaiveDate>,
}

/// Projected return on the booked portfolio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiProjection {
    pub total_spend: f64,
    pub retail_value: f64,
    /// Dollar value of the points earned.
    pub points_value: f64,
    pub comp_value: f64,
    /// Retail value minus spend, floored at 0.
    pub savings: f64,
    pub total_value: f64,
    /// Percentage return; 0 when nothing was spent.
    pub projected_roi: f64,
    pub monthly_roi: f64,
    pub risk_adjusted_roi: f64,
    /// Naive date at which the spend deficit is recovered. `None` when
    /// spend does not exceed retail, when the recovery rate is zero, or
    /// when the horizon runs past the calendar range.
    pub break_even_date: Option<NaiveDate>,
}

/// Qualitative risk band, a pure step function of the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

/// Direction a heuristic signal pushes the assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskImpact {
    Positive,
    Negative,
    Neutral,
}

/// One heuristic signal that was evaluated, whether or not it moved the
/// score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub impact: RiskImpact,
    /// Signed score contribution of this signal.
    pub weight: i32,
    pub detail: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Heuristic risk assessment of the booked portfolio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    /// Clamped to [0, 100].
    pub risk_score: f64,
    pub overall_risk: RiskBand,
    /// Signals in rule-evaluation order.
    pub factors: Vec<RiskFactor>,
    /// Fixed guidance keyed off the band alone.
    pub recommendations: Vec<String>,
    /// `|roi - 25| / 100`; a unitless spread heuristic, not a variance.
    pub volatility: f64,
    /// `roi ± risk_score * 0.5`.
    pub confidence_interval: ConfidenceInterval,
}

/// Months needed to cover `remaining` at `per_month`, or 0 when there is
/// nothing left or no rate to earn it at.
fn months_to_cover(remaining: f64, per_month: f64) -> u32 {
    if remaining > 0.0 && per_month > 0.0 {
        (remaining / per_month).ceil() as u32
    } else {
        0
    }
}

fn projected_date(today: NaiveDate, months: u32) -> Option<NaiveDate> {
    if months == 0 {
        return None;
    }
    // A tiny earn rate can forecast billions of months out; a span past
    // the calendar range degrades to "no date" instead of panicking.
    Duration::try_days(DAYS_PER_MONTH * i64::from(months))
        .and_then(|span| today.checked_add_signed(span))
}

/// Forecast the casino tier after applying a point/night delta to the
/// player's standing.
///
/// Deltas may be negative (cruise removal); the projected total is not
/// floored and a net loss resolves to a lower rung silently.
pub fn calculate_tier_forecast(
    tiers: &Ladder,
    ctx: &PlayerContext,
    additional_points: f64,
    additional_nights: f64,
    today: NaiveDate,
) -> TierForecast {
    let projected_points = ctx.current_points + additional_points;
    let current_idx = tiers.resolve_index(ctx.current_points);
    let projected_idx = tiers.resolve_index(projected_points);

    let points_to_next_tier = tiers
        .next_above(projected_points)
        .map(|next| (next.threshold - projected_points).max(0.0))
        .unwrap_or(0.0);
    let earn_per_month = ctx.average_points_per_night * ctx.average_nights_per_month;
    let months_to_next_tier = months_to_cover(points_to_next_tier, earn_per_month);

    TierForecast {
        current_points: ctx.current_points,
        projected_points,
        current_nights: ctx.current_nights,
        projected_nights: ctx.current_nights + additional_nights,
        current_tier: tiers.entries()[current_idx].name.clone(),
        projected_tier: tiers.entries()[projected_idx].name.clone(),
        tier_upgrade: projected_idx > current_idx,
        points_to_next_tier,
        months_to_next_tier,
        projected_date: projected_date(today, months_to_next_tier),
    }
}

/// Forecast the cruise-program level after applying a nights delta.
/// Identical algorithm to [`calculate_tier_forecast`] on the nights ladder.
pub fn calculate_loyalty_forecast(
    levels: &Ladder,
    ctx: &PlayerContext,
    additional_nights: f64,
    today: NaiveDate,
) -> LoyaltyForecast {
    let projected_nights = ctx.current_nights + additional_nights;
    let current_idx = levels.resolve_index(ctx.current_nights);
    let projected_idx = levels.resolve_index(projected_nights);

    let nights_to_next_level = levels
        .next_above(projected_nights)
        .map(|next| (next.threshold - projected_nights).max(0.0))
        .unwrap_or(0.0);
    let months_to_next_level =
        months_to_cover(nights_to_next_level, ctx.average_nights_per_month);

    LoyaltyForecast {
        current_nights: ctx.current_nights,
        projected_nights,
        current_level: levels.entries()[current_idx].name.clone(),
        projected_level: levels.entries()[projected_idx].name.clone(),
        level_upgrade: projected_idx > current_idx,
        nights_to_next_level,
        months_to_next_level,
        projected_date: projected_date(today, months_to_next_level),
    }
}

/// Project the return on a spend/retail/points/comp position.
///
/// Savings floor at zero: overspending relative to retail shows up in the
/// break-even date, not as negative savings. Zero spend yields a 0% ROI
/// rather than a division by zero. The break-even date is `None` whenever
/// there is no deficit to recover, and also when a deficit exists but the
/// implied monthly recovery rate is zero or non-finite.
pub fn calculate_roi_projection(
    total_spend: f64,
    retail_value: f64,
    points_earned: f64,
    comp_value: f64,
    horizon_months: u32,
    dollars_per_point: f64,
    today: NaiveDate,
) -> RoiProjection {
    let points_value = points_earned * dollars_per_point;
    let savings = (retail_value - total_spend).max(0.0);
    let total_value = retail_value + points_value + comp_value;

    let projected_roi = if total_spend > 0.0 {
        (savings + points_value + comp_value) / total_spend * 100.0
    } else {
        0.0
    };
    let monthly_roi = projected_roi / f64::from(horizon_months.max(1));
    let risk_adjusted_roi = projected_roi * RISK_HAIRCUT;

    let break_even_date = if total_spend > retail_value {
        let deficit = total_spend - retail_value;
        // Dollars recovered per month at the projected monthly rate.
        let recovery_per_month = monthly_roi * total_spend / 100.0;
        if recovery_per_month > 0.0 && recovery_per_month.is_finite() {
            let months = (deficit / recovery_per_month).ceil();
            // Saturating cast plus checked date math: a recovery horizon
            // past the calendar range yields no date rather than a panic.
            Duration::try_days((DAYS_PER_MONTH as f64 * months) as i64)
                .and_then(|span| today.checked_add_signed(span))
        } else {
            None
        }
    } else {
        None
    };

    RoiProjection {
        total_spend,
        retail_value,
        points_value,
        comp_value,
        savings,
        total_value,
        projected_roi,
        monthly_roi,
        risk_adjusted_roi,
        break_even_date,
    }
}

fn factor(name: &str, impact: RiskImpact, weight: i32, detail: &str) -> RiskFactor {
    RiskFactor {
        name: name.to_string(),
        impact,
        weight,
        detail: detail.to_string(),
    }
}

/// Score the riskiness of the booked portfolio on a 0-100 scale.
///
/// Deterministic additive rules over portfolio size, ROI magnitude, tier
/// trajectory, and committed spend, evaluated in a fixed order from a base
/// of 50. Every rule except the moderate-ROI middle case appends a factor,
/// whether or not it moved the score.
pub fn calculate_risk_analysis(
    cruises: &[BookedCruise],
    projected_roi: f64,
    tier_forecast: &TierForecast,
) -> RiskAnalysis {
    let mut score: f64 = 50.0;
    let mut factors: Vec<RiskFactor> = Vec::new();

    let booked = cruises.len();
    if booked >= 5 {
        score -= 10.0;
        factors.push(factor(
            "Portfolio size",
            RiskImpact::Positive,
            -10,
            "Five or more booked cruises spread exposure across sailings",
        ));
    } else if booked < 2 {
        score += 10.0;
        factors.push(factor(
            "Portfolio size",
            RiskImpact::Negative,
            10,
            "Fewer than two booked cruises concentrate the outcome",
        ));
    } else {
        factors.push(factor(
            "Portfolio size",
            RiskImpact::Neutral,
            0,
            "Booking count is in the typical range",
        ));
    }

    if projected_roi >= 50.0 {
        score -= 15.0;
        factors.push(factor(
            "Projected return",
            RiskImpact::Positive,
            -15,
            "Projected ROI of 50% or better cushions downside",
        ));
    } else if projected_roi < 10.0 {
        score += 15.0;
        factors.push(factor(
            "Projected return",
            RiskImpact::Negative,
            15,
            "Projected ROI under 10% leaves little margin",
        ));
    }
    // Moderate ROI adds no factor for this rule.

    if tier_forecast.tier_upgrade {
        score -= 10.0;
        factors.push(factor(
            "Tier trajectory",
            RiskImpact::Positive,
            -10,
            "Scenario reaches the next casino tier",
        ));
    }

    if tier_forecast.points_to_next_tier > 50_000.0 {
        score += 5.0;
        factors.push(factor(
            "Runway to next tier",
            RiskImpact::Neutral,
            5,
            "More than 50,000 points remain to the next tier",
        ));
    }

    let total_spend: f64 = cruises.iter().map(|c| c.price).sum();
    if total_spend > 50_000.0 {
        score += 5.0;
        factors.push(factor(
            "Committed spend",
            RiskImpact::Neutral,
            5,
            "Total booked spend exceeds $50,000",
        ));
    }

    let risk_score = score.clamp(0.0, 100.0);
    let overall_risk = if risk_score < 35.0 {
        RiskBand::Low
    } else if risk_score < 65.0 {
        RiskBand::Medium
    } else {
        RiskBand::High
    };

    let recommendations = match overall_risk {
        RiskBand::Low => vec![
            "Current plan is well positioned; keep the booking cadence".to_string(),
            "Consider locking in offers before they expire".to_string(),
        ],
        RiskBand::Medium => vec![
            "Compare this scenario against the baseline before committing".to_string(),
            "Favor offers with freeplay or onboard credit to lift the return".to_string(),
            "Watch the points runway to the next tier".to_string(),
        ],
        RiskBand::High => vec![
            "Reduce committed spend or spread it across more sailings".to_string(),
            "Re-run the scenario with a cheaper cabin class".to_string(),
            "Hold off on new bookings until the projected return improves".to_string(),
        ],
    };

    RiskAnalysis {
        risk_score,
        overall_risk,
        factors,
        recommendations,
        volatility: (projected_roi - 25.0).abs() / 100.0,
        confidence_interval: ConfidenceInterval {
            lower: projected_roi - risk_score * 0.5,
            upper: projected_roi + risk_score * 0.5,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loyalty_core::LadderEntry;
    use proptest::prelude::*;

    fn tiers() -> Ladder {
        Ladder::new(vec![
            LadderEntry::new("Choice", 0.0),
            LadderEntry::new("Prime", 2_500.0),
            LadderEntry::new("Signature", 25_000.0),
            LadderEntry::new("Masters", 100_000.0),
        ])
        .unwrap()
    }

    fn levels() -> Ladder {
        Ladder::new(vec![
            LadderEntry::new("Gold", 0.0),
            LadderEntry::new("Platinum", 30.0),
            LadderEntry::new("Emerald", 55.0),
            LadderEntry::new("Diamond", 80.0),
        ])
        .unwrap()
    }

    fn ctx() -> PlayerContext {
        PlayerContext {
            current_points: 3_000.0,
            current_nights: 40.0,
            current_tier: "Prime".to_string(),
            current_level: "Platinum".to_string(),
            average_points_per_night: 100.0,
            average_nights_per_month: 2.0,
            average_spend_per_cruise: 1_500.0,
        }
    }

    fn cruise(id: &str, price: f64) -> BookedCruise {
        BookedCruise {
            id: id.to_string(),
            nights: 7.0,
            price,
            retail_value: price * 1.3,
            earned_points: None,
            comp_value: 0.0,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn zero_delta_is_identity() {
        let f = calculate_tier_forecast(&tiers(), &ctx(), 0.0, 0.0, today());
        assert_eq!(f.projected_points, 3_000.0);
        assert_eq!(f.current_tier, "Prime");
        assert_eq!(f.projected_tier, "Prime");
        assert!(!f.tier_upgrade);
    }

    #[test]
    fn upgrade_flag_fires_on_threshold_cross() {
        let f = calculate_tier_forecast(&tiers(), &ctx(), 22_000.0, 0.0, today());
        assert_eq!(f.projected_tier, "Signature");
        assert!(f.tier_upgrade);
        assert_eq!(f.points_to_next_tier, 75_000.0);
    }

    #[test]
    fn net_loss_downgrades_silently() {
        let f = calculate_tier_forecast(&tiers(), &ctx(), -2_000.0, -7.0, today());
        assert_eq!(f.projected_points, 1_000.0);
        assert_eq!(f.projected_tier, "Choice");
        assert!(!f.tier_upgrade);
        assert_eq!(f.projected_nights, 33.0);
    }

    #[test]
    fn months_and_date_follow_earn_rate() {
        // 22,000 points to Signature at 100 pts/night * 2 nights/month.
        let f = calculate_tier_forecast(&tiers(), &ctx(), 0.0, 0.0, today());
        assert_eq!(f.points_to_next_tier, 22_000.0);
        assert_eq!(f.months_to_next_tier, 110);
        assert_eq!(
            f.projected_date,
            Some(today() + Duration::days(110 * 30))
        );
    }

    #[test]
    fn glacial_earn_rate_forecasts_without_a_date() {
        // 22,000 points to Signature at 0.001 pts/night * 0.01 nights/month
        // is ~2.2e9 months: far past the calendar range, so the forecast
        // reports the months but no date instead of panicking.
        let mut c = ctx();
        c.average_points_per_night = 0.001;
        c.average_nights_per_month = 0.01;
        let f = calculate_tier_forecast(&tiers(), &c, 0.0, 0.0, today());
        assert!(f.months_to_next_tier > 1_000_000_000);
        assert_eq!(f.projected_date, None);
    }

    #[test]
    fn zero_earn_rate_means_no_projection() {
        let mut c = ctx();
        c.average_nights_per_month = 0.0;
        let f = calculate_tier_forecast(&tiers(), &c, 0.0, 0.0, today());
        assert_eq!(f.months_to_next_tier, 0);
        assert_eq!(f.projected_date, None);
    }

    #[test]
    fn top_rung_has_nothing_left_to_earn() {
        let mut c = ctx();
        c.current_points = 150_000.0;
        let f = calculate_tier_forecast(&tiers(), &c, 0.0, 0.0, today());
        assert_eq!(f.projected_tier, "Masters");
        assert_eq!(f.points_to_next_tier, 0.0);
        assert_eq!(f.months_to_next_tier, 0);
        assert_eq!(f.projected_date, None);
    }

    #[test]
    fn level_forecast_uses_nights_ladder() {
        let f = calculate_loyalty_forecast(&levels(), &ctx(), 16.0, today());
        assert_eq!(f.current_level, "Platinum");
        assert_eq!(f.projected_level, "Emerald");
        assert!(f.level_upgrade);
        assert_eq!(f.nights_to_next_level, 24.0);
        // 24 nights at 2 nights/month.
        assert_eq!(f.months_to_next_level, 12);
    }

    #[test]
    fn roi_zero_spend_is_zero_not_infinite() {
        let r = calculate_roi_projection(0.0, 0.0, 0.0, 0.0, 12, 0.01, today());
        assert_eq!(r.projected_roi, 0.0);
        assert_eq!(r.monthly_roi, 0.0);
        assert_eq!(r.break_even_date, None);
    }

    #[test]
    fn roi_spot_check() {
        let r = calculate_roi_projection(1_000.0, 1_200.0, 0.0, 0.0, 12, 0.01, today());
        assert_eq!(r.savings, 200.0);
        assert_eq!(r.points_value, 0.0);
        assert_eq!(r.projected_roi, 20.0);
        assert!((r.monthly_roi - 20.0 / 12.0).abs() < 1e-12);
        assert_eq!(r.risk_adjusted_roi, 17.0);
        assert_eq!(r.break_even_date, None);
    }

    #[test]
    fn savings_floor_at_zero() {
        let r = calculate_roi_projection(2_000.0, 1_000.0, 0.0, 0.0, 12, 0.01, today());
        assert_eq!(r.savings, 0.0);
        assert_eq!(r.projected_roi, 0.0);
        // Deficit exists but the recovery rate is zero: guarded to None.
        assert_eq!(r.break_even_date, None);
    }

    #[test]
    fn break_even_projects_forward_in_30_day_units() {
        // 60,000 points at $0.01 = $600 value on a $2,000 spend against
        // $1,000 retail: ROI 30%, monthly 2.5%, recovery $50/month,
        // $1,000 deficit -> 20 months.
        let r = calculate_roi_projection(2_000.0, 1_000.0, 60_000.0, 0.0, 12, 0.01, today());
        assert!((r.projected_roi - 30.0).abs() < 1e-9);
        assert_eq!(
            r.break_even_date,
            Some(today() + Duration::days(20 * 30))
        );
    }

    #[test]
    fn distant_break_even_yields_no_date() {
        // $1 of point value against a $1,000,000 deficit implies a
        // recovery horizon of ~1.2e9 months; out of calendar range, so
        // the deficit stands with no break-even date.
        let r = calculate_roi_projection(1_000_000.0, 0.0, 100.0, 0.0, 12, 0.01, today());
        assert!(r.projected_roi > 0.0);
        assert_eq!(r.break_even_date, None);
    }

    #[test]
    fn horizon_is_floored_at_one_month() {
        let r = calculate_roi_projection(1_000.0, 1_200.0, 0.0, 0.0, 0, 0.01, today());
        assert_eq!(r.monthly_roi, r.projected_roi);
    }

    #[test]
    fn moderate_portfolio_and_roi_is_one_neutral_factor() {
        let booked = vec![cruise("a", 1_000.0), cruise("b", 1_000.0), cruise("c", 1_000.0)];
        let tf = calculate_tier_forecast(&tiers(), &ctx(), 0.0, 0.0, today());
        let r = calculate_risk_analysis(&booked, 25.0, &tf);
        assert_eq!(r.risk_score, 50.0);
        assert_eq!(r.overall_risk, RiskBand::Medium);
        assert_eq!(r.factors.len(), 1);
        assert_eq!(r.factors[0].impact, RiskImpact::Neutral);
        assert_eq!(r.volatility, 0.0);
    }

    #[test]
    fn thin_portfolio_and_weak_roi_score_high() {
        let tf = calculate_tier_forecast(&tiers(), &ctx(), 0.0, 0.0, today());
        let r = calculate_risk_analysis(&[], 0.0, &tf);
        // 50 + 10 (thin portfolio) + 15 (weak ROI) = 75.
        assert_eq!(r.risk_score, 75.0);
        assert_eq!(r.overall_risk, RiskBand::High);
        assert_eq!(r.factors.len(), 2);
        assert_eq!(r.recommendations.len(), 3);
    }

    #[test]
    fn strong_portfolio_upgrade_scores_low() {
        let booked: Vec<BookedCruise> =
            (0..5).map(|i| cruise(&format!("c{i}"), 1_000.0)).collect();
        let tf = calculate_tier_forecast(&tiers(), &ctx(), 22_000.0, 0.0, today());
        let r = calculate_risk_analysis(&booked, 60.0, &tf);
        // 50 - 10 (portfolio) - 15 (ROI) - 10 (upgrade) + 5 (long runway).
        assert_eq!(r.risk_score, 20.0);
        assert_eq!(r.overall_risk, RiskBand::Low);
        let weights: Vec<i32> = r.factors.iter().map(|f| f.weight).collect();
        assert_eq!(weights, vec![-10, -15, -10, 5]);
    }

    #[test]
    fn heavy_spend_adds_neutral_factor() {
        let booked = vec![cruise("a", 30_000.0), cruise("b", 30_000.0)];
        let tf = calculate_tier_forecast(&tiers(), &ctx(), 0.0, 0.0, today());
        let r = calculate_risk_analysis(&booked, 25.0, &tf);
        assert!(r
            .factors
            .iter()
            .any(|f| f.name == "Committed spend" && f.impact == RiskImpact::Neutral));
        assert_eq!(r.risk_score, 55.0);
    }

    #[test]
    fn confidence_interval_brackets_roi() {
        let tf = calculate_tier_forecast(&tiers(), &ctx(), 0.0, 0.0, today());
        let r = calculate_risk_analysis(&[cruise("a", 1_000.0)], 30.0, &tf);
        assert_eq!(r.confidence_interval.lower, 30.0 - r.risk_score * 0.5);
        assert_eq!(r.confidence_interval.upper, 30.0 + r.risk_score * 0.5);
    }

    proptest! {
        #[test]
        fn risk_score_always_clamped(
            n_cruises in 0usize..20,
            roi in -1.0e6f64..1.0e6,
            points in -1.0e6f64..1.0e6,
        ) {
            let booked: Vec<BookedCruise> =
                (0..n_cruises).map(|i| cruise(&format!("c{i}"), 10_000.0)).collect();
            let tf = calculate_tier_forecast(&tiers(), &ctx(), points, 0.0, today());
            let r = calculate_risk_analysis(&booked, roi, &tf);
            prop_assert!((0.0..=100.0).contains(&r.risk_score));
        }

        #[test]
        fn tier_forecast_projection_is_additive(points in -1.0e5f64..1.0e5) {
            let f = calculate_tier_forecast(&tiers(), &ctx(), points, 0.0, today());
            prop_assert_eq!(f.projected_points, 3_000.0 + points);
        }

        #[test]
        fn roi_never_negative_savings(spend in 0.0f64..1.0e6, retail in 0.0f64..1.0e6) {
            let r = calculate_roi_projection(spend, retail, 0.0, 0.0, 12, 0.01, today());
            prop_assert!(r.savings >= 0.0);
        }
    }
}
