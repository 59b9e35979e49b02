use crate::models::breakdown::{Adjusted, DiscountedTotal, PriceBreakdown};
use crate::models::hotel::{HotelPricingProfile, MealPlan};
use crate::models::rate_override::RateOverride;
use crate::models::stay::StayRequest;
use crate::services::rate_resolver::{self, NightlyRate, OverridePrecedence};

pub struct PricingService;

impl PricingService {
    /// Average nightly rate and room subtotal over the resolved nights.
    /// The average is the single figure shown to users as "price per night",
    /// even when individual nights differ.
    pub fn aggregate(nightly_rates: &[NightlyRate], rooms: u32) -> (f64, f64) {
        if nightly_rates.is_empty() {
            return (0.0, 0.0);
        }
        let sum: f64 = nightly_rates.iter().map(|night| night.rate).sum();
        let average = sum / nightly_rates.len() as f64;
        let subtotal = sum * rooms as f64;
        (average, subtotal)
    }

    /// Charge for guests beyond `max_guests_per_room × rooms`. Zero when the
    /// hotel has no extra-guest price or no per-room capacity configured.
    pub fn extra_guest_charge(
        guests: u32,
        rooms: u32,
        max_guests_per_room: u32,
        extra_guest_price: f64,
        nights: u32,
    ) -> f64 {
        if extra_guest_price <= 0.0 || max_guests_per_room == 0 {
            return 0.0;
        }
        let included = max_guests_per_room * rooms;
        let extra_guests = guests.saturating_sub(included);
        extra_guests as f64 * extra_guest_price * nights as f64
    }

    /// Extra meals needed when the party exceeds what the plan covers across
    /// all rooms.
    pub fn required_extra_meals(guests: u32, rooms: u32, plan: &MealPlan) -> u32 {
        guests.saturating_sub(plan.max_persons * rooms)
    }

    pub fn extra_meal_charge(plan: Option<&MealPlan>, count: Adjusted<u32>, nights: u32) -> f64 {
        match plan {
            Some(plan) => count.value() as f64 * plan.extra_meal_price * nights as f64,
            None => 0.0,
        }
    }

    /// Tax amount and taxed total for a combined pre-tax figure. A tax
    /// percentage of zero or below means untaxed.
    pub fn apply_tax(amount: f64, tax_percentage: f64) -> (f64, f64) {
        if tax_percentage <= 0.0 {
            return (0.0, amount);
        }
        let tax = amount * tax_percentage / 100.0;
        (tax, amount + tax)
    }

    /// Inverse of [`Self::apply_tax`]: split a tax-inclusive figure into its
    /// pre-tax subtotal and tax amount.
    pub fn split_tax_inclusive(total: f64, tax_percentage: f64) -> (f64, f64) {
        if tax_percentage <= 0.0 {
            return (total, 0.0);
        }
        let subtotal = total / (1.0 + tax_percentage / 100.0);
        (subtotal, total - subtotal)
    }

    /// Full pipeline: resolve nightly rates, aggregate, add surcharges, apply
    /// tax. A stay with zero nights, zero rooms or an empty party prices to an
    /// all-zero breakdown instead of erroring, since callers hit those states
    /// while a form is still being filled in.
    pub fn price_stay(
        profile: &HotelPricingProfile,
        overrides: &[RateOverride],
        stay: &StayRequest,
        extra_meal_override: Option<u32>,
        precedence: OverridePrecedence,
    ) -> PriceBreakdown {
        let nights = stay.nights();
        if nights == 0 || stay.rooms == 0 || stay.guests() == 0 {
            return PriceBreakdown::zero();
        }

        let nightly_rates = rate_resolver::resolve_nightly_rates(
            profile.base_rate,
            overrides,
            stay.check_in,
            stay.check_out,
            precedence,
        );
        let (average_nightly_rate, room_subtotal) = Self::aggregate(&nightly_rates, stay.rooms);

        let extra_guest_charge = Self::extra_guest_charge(
            stay.guests(),
            stay.rooms,
            profile.max_guests_per_room,
            profile.extra_guest_price,
            nights,
        );

        let extra_meal_count = match (extra_meal_override, profile.meal_plan.as_ref()) {
            (Some(count), _) => Adjusted::Overridden(count),
            (None, Some(plan)) => {
                Adjusted::Computed(Self::required_extra_meals(stay.guests(), stay.rooms, plan))
            }
            (None, None) => Adjusted::Computed(0),
        };
        let extra_meal_charge =
            Self::extra_meal_charge(profile.meal_plan.as_ref(), extra_meal_count, nights);

        let combined = room_subtotal + extra_guest_charge + extra_meal_charge;
        let (tax_amount, grand_total) = Self::apply_tax(combined, profile.tax_percentage);

        PriceBreakdown {
            nights,
            average_nightly_rate,
            room_subtotal,
            extra_guest_charge,
            extra_meal_count,
            extra_meal_charge,
            tax_amount,
            grand_total,
        }
    }

    /// Apply a manual discount to the tax-inclusive grand total and split the
    /// discounted figure back into pre-tax subtotal and tax.
    pub fn discounted_total(
        breakdown: &PriceBreakdown,
        discount: f64,
        tax_percentage: f64,
    ) -> DiscountedTotal {
        let total = (breakdown.grand_total - discount).max(0.0);
        let (pre_tax_subtotal, tax_amount) = Self::split_tax_inclusive(total, tax_percentage);
        DiscountedTotal {
            discount,
            total,
            pre_tax_subtotal,
            tax_amount,
        }
    }
}
