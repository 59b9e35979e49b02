use serde::Serialize;

/// A value that is either derived by the pricing pipeline or manually entered
/// by an operator. The tag survives serialization so the back office can show
/// which one it is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Adjusted<T> {
    Computed(T),
    Overridden(T),
}

impl<T: Copy> Adjusted<T> {
    pub fn value(&self) -> T {
        match self {
            Adjusted::Computed(v) | Adjusted::Overridden(v) => *v,
        }
    }

    pub fn is_overridden(&self) -> bool {
        matches!(self, Adjusted::Overridden(_))
    }
}

/// Computed result of one price calculation. Built once, rendered or
/// submitted, then discarded; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub nights: u32,
    pub average_nightly_rate: f64,
    pub room_subtotal: f64,
    pub extra_guest_charge: f64,
    pub extra_meal_count: Adjusted<u32>,
    pub extra_meal_charge: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
}

impl PriceBreakdown {
    /// All-zero breakdown, used for stays that do not price (zero nights,
    /// missing party).
    pub fn zero() -> Self {
        Self {
            nights: 0,
            average_nightly_rate: 0.0,
            room_subtotal: 0.0,
            extra_guest_charge: 0.0,
            extra_meal_count: Adjusted::Computed(0),
            extra_meal_charge: 0.0,
            tax_amount: 0.0,
            grand_total: 0.0,
        }
    }
}

/// Tax-inclusive view of a grand total after a manual discount, split back
/// into its pre-tax and tax parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountedTotal {
    pub discount: f64,
    pub total: f64,
    pub pre_tax_subtotal: f64,
    pub tax_amount: f64,
}
