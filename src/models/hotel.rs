use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Hotel {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub city: Option<String>,
    pub description: Option<String>,
    pub price_per_night: f64,
    #[serde(default)]
    pub max_guests_per_room: u32,
    #[serde(default)]
    pub extra_guest_price: f64,
    #[serde(default)]
    pub tax_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_plan: Option<MealPlanField>,
    pub images: Option<Vec<String>>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

/// Meal plan as stored: older documents hold a single-element array instead of
/// an object, and the price field appears as either `extra_price` or
/// `extra_meal_price`. Normalized via [`MealPlanField::normalize`] before any
/// pricing code sees it.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum MealPlanField {
    One(RawMealPlan),
    Many(Vec<RawMealPlan>),
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RawMealPlan {
    #[serde(default)]
    pub max_persons: Option<u32>,
    #[serde(default, alias = "extra_price")]
    pub extra_meal_price: Option<f64>,
}

/// Normalized meal plan: positive coverage and a positive per-night price for
/// each meal beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealPlan {
    pub max_persons: u32,
    pub extra_meal_price: f64,
}

impl MealPlanField {
    pub fn normalize(&self) -> Option<MealPlan> {
        let raw = match self {
            MealPlanField::One(raw) => raw,
            MealPlanField::Many(raws) => raws.first()?,
        };
        let max_persons = raw.max_persons?;
        let extra_meal_price = raw.extra_meal_price?;
        if max_persons == 0 || extra_meal_price <= 0.0 {
            return None;
        }
        Some(MealPlan {
            max_persons,
            extra_meal_price,
        })
    }
}

/// The pricing-relevant slice of a hotel document, with the meal plan already
/// normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelPricingProfile {
    pub base_rate: f64,
    pub max_guests_per_room: u32,
    pub extra_guest_price: f64,
    pub tax_percentage: f64,
    pub meal_plan: Option<MealPlan>,
}

impl HotelPricingProfile {
    /// Profile for when only a base rate is known: no surcharges, no tax.
    pub fn base_only(base_rate: f64) -> Self {
        Self {
            base_rate,
            max_guests_per_room: 0,
            extra_guest_price: 0.0,
            tax_percentage: 0.0,
            meal_plan: None,
        }
    }
}

impl Hotel {
    pub fn pricing_profile(&self) -> HotelPricingProfile {
        HotelPricingProfile {
            base_rate: self.price_per_night,
            max_guests_per_room: self.max_guests_per_room,
            extra_guest_price: self.extra_guest_price,
            tax_percentage: self.tax_percentage,
            meal_plan: self.meal_plan.as_ref().and_then(MealPlanField::normalize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meal_plan_object_shape_normalizes() {
        let field: MealPlanField = serde_json::from_value(json!({
            "max_persons": 2,
            "extra_meal_price": 10.0
        }))
        .unwrap();
        assert_eq!(
            field.normalize(),
            Some(MealPlan {
                max_persons: 2,
                extra_meal_price: 10.0
            })
        );
    }

    #[test]
    fn test_meal_plan_array_shape_normalizes_to_first_element() {
        let field: MealPlanField = serde_json::from_value(json!([
            { "max_persons": 3, "extra_price": 12.5 }
        ]))
        .unwrap();
        assert_eq!(
            field.normalize(),
            Some(MealPlan {
                max_persons: 3,
                extra_meal_price: 12.5
            })
        );
    }

    #[test]
    fn test_meal_plan_legacy_price_field_name() {
        let field: MealPlanField = serde_json::from_value(json!({
            "max_persons": 2,
            "extra_price": 8.0
        }))
        .unwrap();
        assert_eq!(field.normalize().unwrap().extra_meal_price, 8.0);
    }

    #[test]
    fn test_meal_plan_missing_or_zero_fields_normalize_to_none() {
        let no_price: MealPlanField =
            serde_json::from_value(json!({ "max_persons": 2 })).unwrap();
        assert_eq!(no_price.normalize(), None);

        let zero_persons: MealPlanField =
            serde_json::from_value(json!({ "max_persons": 0, "extra_meal_price": 10.0 }))
                .unwrap();
        assert_eq!(zero_persons.normalize(), None);

        let empty_array: MealPlanField = serde_json::from_value(json!([])).unwrap();
        assert_eq!(empty_array.normalize(), None);
    }

    #[test]
    fn test_pricing_profile_carries_normalized_plan() {
        let hotel: Hotel = serde_json::from_value(json!({
            "name": "Alpenhof",
            "city": "Innsbruck",
            "description": null,
            "price_per_night": 100.0,
            "max_guests_per_room": 2,
            "extra_guest_price": 20.0,
            "tax_percentage": 15.0,
            "meal_plan": [{ "max_persons": 2, "extra_price": 10.0 }],
            "images": null,
            "created_at": null,
            "updated_at": null
        }))
        .unwrap();

        let profile = hotel.pricing_profile();
        assert_eq!(profile.base_rate, 100.0);
        assert_eq!(profile.max_guests_per_room, 2);
        assert_eq!(
            profile.meal_plan,
            Some(MealPlan {
                max_persons: 2,
                extra_meal_price: 10.0
            })
        );
    }

    #[test]
    fn test_profile_defaults_when_pricing_fields_missing() {
        let hotel: Hotel = serde_json::from_value(json!({
            "name": "Bare Minimum Inn",
            "city": null,
            "description": null,
            "price_per_night": 75.0,
            "images": null,
            "created_at": null,
            "updated_at": null
        }))
        .unwrap();

        let profile = hotel.pricing_profile();
        assert_eq!(profile, HotelPricingProfile::base_only(75.0));
    }
}
