use chrono::{Duration, NaiveDate};

use crate::models::rate_override::RateOverride;

/// Tie-break rule for dates covered by more than one override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverridePrecedence {
    /// First override in fetch order wins. Matches what the legacy booking
    /// screens did.
    FirstMatch,
    /// The override spanning the fewest days wins; ties keep fetch order.
    NarrowestRange,
    /// The most recently created override wins; rules without a creation
    /// timestamp lose to any that have one.
    MostRecent,
}

impl Default for OverridePrecedence {
    fn default() -> Self {
        OverridePrecedence::NarrowestRange
    }
}

impl OverridePrecedence {
    /// Read the rule from RATE_OVERRIDE_PRECEDENCE or use the default.
    pub fn from_env() -> Self {
        match std::env::var("RATE_OVERRIDE_PRECEDENCE").as_deref() {
            Ok("first_match") => OverridePrecedence::FirstMatch,
            Ok("narrowest_range") => OverridePrecedence::NarrowestRange,
            Ok("most_recent") => OverridePrecedence::MostRecent,
            _ => OverridePrecedence::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightlyRate {
    pub date: NaiveDate,
    pub rate: f64,
}

/// Resolve the nightly rate for every date in [check_in, check_out).
///
/// Each night takes the rate of the winning override covering it, or the base
/// rate when none does. An inverted or empty range yields no nights.
pub fn resolve_nightly_rates(
    base_rate: f64,
    overrides: &[RateOverride],
    check_in: NaiveDate,
    check_out: NaiveDate,
    precedence: OverridePrecedence,
) -> Vec<NightlyRate> {
    let mut nights = Vec::new();
    if check_out <= check_in {
        return nights;
    }

    let mut date = check_in;
    while date < check_out {
        let rate = pick_override(date, overrides, precedence)
            .map(|rule| rule.price_per_night)
            .unwrap_or(base_rate);
        nights.push(NightlyRate { date, rate });
        date += Duration::days(1);
    }
    nights
}

fn pick_override<'a>(
    date: NaiveDate,
    overrides: &'a [RateOverride],
    precedence: OverridePrecedence,
) -> Option<&'a RateOverride> {
    let mut candidates = overrides
        .iter()
        .filter(|rule| rule.is_available && rule.covers(date));

    match precedence {
        OverridePrecedence::FirstMatch => candidates.next(),
        OverridePrecedence::NarrowestRange => {
            let mut best: Option<&RateOverride> = None;
            for rule in candidates {
                let narrower = match best {
                    Some(current) => rule.span_days() < current.span_days(),
                    None => true,
                };
                if narrower {
                    best = Some(rule);
                }
            }
            best
        }
        OverridePrecedence::MostRecent => {
            let mut best: Option<&RateOverride> = None;
            for rule in candidates {
                let newer = match best {
                    Some(current) => rule.created_at > current.created_at,
                    None => true,
                };
                if newer {
                    best = Some(rule);
                }
            }
            best
        }
    }
}
