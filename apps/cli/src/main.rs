#![deny(warnings)]

//! Headless CLI for running what-if simulations against a player profile.
//!
//! Loads a YAML profile (player standing, booked cruises, casino offers)
//! and an optional YAML scenario, runs a baseline-vs-scenario comparison
//! plus a forward timeline projection, and prints a summary. Without a
//! profile file a built-in sample profile is used.

use anyhow::{Context, Result};
use chrono::Utc;
use loyalty_core::{
    validate_booked_cruise, validate_player_context, BookedCruise, CasinoOffer, Ladder,
    LadderEntry, LoyaltyProgram, PlayerContext, Scenario,
};
use loyalty_forecast::RiskBand;
use loyalty_sim::{project_timeline, run_comparison_simulation, snapshot_date};
use serde::Deserialize;
use std::fs;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

struct Args {
    profile: Option<String>,
    scenario: Option<String>,
    months: u32,
    json: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        profile: None,
        scenario: None,
        months: 24,
        json: false,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--profile" => args.profile = it.next(),
            "--scenario" => args.scenario = it.next(),
            "--months" => {
                if let Some(m) = it.next().and_then(|s| s.parse().ok()) {
                    args.months = m;
                }
            }
            "--json" => args.json = true,
            _ => {}
        }
    }
    args
}

/// On-disk profile: the player plus their booked portfolio and offers.
#[derive(Debug, Deserialize)]
struct ProfileFile {
    player: PlayerContext,
    #[serde(default)]
    cruises: Vec<BookedCruise>,
    #[serde(default)]
    offers: Vec<CasinoOffer>,
}

/// Club Royale tier and Crown & Anchor level tables. Program data lives
/// here, not in the engine, so alternate tables can be swapped in.
fn default_program() -> Result<LoyaltyProgram> {
    let tiers = Ladder::new(vec![
        LadderEntry::new("Choice", 0.0),
        LadderEntry::new("Prime", 2_500.0),
        LadderEntry::new("Signature", 25_000.0),
        LadderEntry::new("Masters", 100_000.0),
    ])?;
    let levels = Ladder::new(vec![
        LadderEntry::new("Gold", 0.0),
        LadderEntry::new("Platinum", 30.0),
        LadderEntry::new("Emerald", 55.0),
        LadderEntry::new("Diamond", 80.0),
        LadderEntry::new("Diamond Plus", 175.0),
        LadderEntry::new("Pinnacle", 700.0),
    ])?;
    Ok(LoyaltyProgram::new(tiers, levels))
}

fn sample_profile() -> ProfileFile {
    ProfileFile {
        player: PlayerContext {
            current_points: 3_200.0,
            current_nights: 42.0,
            current_tier: "Prime".to_string(),
            current_level: "Platinum".to_string(),
            average_points_per_night: 110.0,
            average_nights_per_month: 1.5,
            average_spend_per_cruise: 1_400.0,
        },
        cruises: vec![
            BookedCruise {
                id: "harmony-7n".to_string(),
                nights: 7.0,
                price: 1_350.0,
                retail_value: 1_950.0,
                earned_points: Some(820.0),
                comp_value: 150.0,
            },
            BookedCruise {
                id: "liberty-4n".to_string(),
                nights: 4.0,
                price: 520.0,
                retail_value: 780.0,
                earned_points: None,
                comp_value: 0.0,
            },
        ],
        offers: vec![CasinoOffer {
            id: "spring-freeplay".to_string(),
            min_nights: Some(5.0),
            freeplay_amount: 400.0,
            obc_amount: 100.0,
            discount_percent: 15.0,
        }],
    }
}

fn load_profile(path: Option<&str>) -> Result<ProfileFile> {
    match path {
        Some(p) => {
            let text = fs::read_to_string(p).with_context(|| format!("reading profile {p}"))?;
            let profile: ProfileFile =
                serde_yaml::from_str(&text).with_context(|| format!("parsing profile {p}"))?;
            validate_player_context(&profile.player)?;
            for c in &profile.cruises {
                validate_booked_cruise(c)?;
            }
            Ok(profile)
        }
        None => Ok(sample_profile()),
    }
}

fn load_scenario(path: Option<&str>) -> Result<Scenario> {
    match path {
        Some(p) => {
            let text = fs::read_to_string(p).with_context(|| format!("reading scenario {p}"))?;
            serde_yaml::from_str(&text).with_context(|| format!("parsing scenario {p}"))
        }
        None => Ok(Scenario::AddCruise {
            nights: Some(7.0),
            spend: None,
        }),
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .init();

    let args = parse_args();
    info!(
        git_sha = env!("GIT_SHA"),
        profile = ?args.profile,
        scenario = ?args.scenario,
        months = args.months,
        "starting cruisecast"
    );

    let program = default_program()?;
    let profile = load_profile(args.profile.as_deref())?;
    let scenario = load_scenario(args.scenario.as_deref())?;
    let today = Utc::now().date_naive();

    let result = run_comparison_simulation(
        &program,
        &profile.player,
        &profile.cruises,
        &scenario,
        &profile.offers,
        today,
    );
    let timeline = project_timeline(&program, &profile.player, args.months, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let tf = &result.tier_forecast;
    println!(
        "Tier   | {} -> {} | {:.0} -> {:.0} pts | next tier in {:.0} pts{}",
        tf.current_tier,
        tf.projected_tier,
        tf.current_points,
        tf.projected_points,
        tf.points_to_next_tier,
        match tf.projected_date {
            Some(d) => format!(" (~{d})"),
            None => String::new(),
        }
    );
    let lf = &result.loyalty_forecast;
    println!(
        "Level  | {} -> {} | {:.0} -> {:.0} nights",
        lf.current_level, lf.projected_level, lf.current_nights, lf.projected_nights
    );
    let roi = &result.roi_projection;
    println!(
        "ROI    | {:.1}% projected | {:.2}%/month | {:.1}% risk-adjusted | break-even: {}",
        roi.projected_roi,
        roi.monthly_roi,
        roi.risk_adjusted_roi,
        match roi.break_even_date {
            Some(d) => d.to_string(),
            None => "n/a".to_string(),
        }
    );
    let risk = &result.risk_analysis;
    let band = match risk.overall_risk {
        RiskBand::Low => "low",
        RiskBand::Medium => "medium",
        RiskBand::High => "high",
    };
    println!("Risk   | {:.0}/100 ({band})", risk.risk_score);
    for rec in &risk.recommendations {
        println!("       | {rec}");
    }
    if let Some(cmp) = &result.comparison {
        println!(
            "Delta  | {:+.0} pts | {:+.1} nights | {:+.2}% ROI | tier change: {} | level change: {}",
            cmp.difference.points_delta,
            cmp.difference.nights_delta,
            cmp.difference.roi_delta,
            cmp.difference.tier_changed,
            cmp.difference.level_changed
        );
    }

    println!("Timeline ({} months):", args.months);
    for (i, snap) in timeline.iter().enumerate() {
        // Print the present plus tier/level transitions only.
        let changed = i > 0
            && (timeline[i - 1].tier != snap.tier || timeline[i - 1].level != snap.level);
        if i == 0 || changed {
            println!(
                "  m{:>3} {} | {:>8.0} pts {:<10} | {:>5.1} nights {}",
                snap.month,
                snapshot_date(today, snap.month),
                snap.points,
                snap.tier,
                snap.nights,
                snap.level
            );
        }
    }

    Ok(())
}
