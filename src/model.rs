//! Wish entity, its request body, and list ordering parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

/// Maximum length of `product`, matching the `VARCHAR(256)` column.
pub const PRODUCT_MAX_LEN: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Middle,
    Low,
}

/// Display labels, indexed by [`Priority::rank`].
const PRIORITY_LABELS: [&str; 3] = ["Hoch", "Mittel", "Niedrig"];

impl Priority {
    /// Declaration order; also the sort order used for `sort_by=priority`.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Middle, Priority::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Middle => "middle",
            Priority::Low => "low",
        }
    }

    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        PRIORITY_LABELS[self.rank()]
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown priority '{0}'")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPriority(s.to_string()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for create and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WishIn {
    #[schema(max_length = 256)]
    pub product: String,
    #[serde(default)]
    pub price: f64,
    pub url: String,
    pub priority: Priority,
}

impl WishIn {
    /// Checks the constraints serde cannot express.
    pub fn check(&self) -> Result<(), String> {
        if self.product.chars().count() > PRODUCT_MAX_LEN {
            return Err(format!("product must be at most {} characters", PRODUCT_MAX_LEN));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Wish {
    pub id: i64,
    pub product: String,
    pub price: f64,
    pub url: String,
    pub priority: Priority,
}

impl Wish {
    pub fn from_input(id: i64, input: WishIn) -> Self {
        Wish {
            id,
            product: input.product,
            price: input.price,
            url: input.url,
            priority: input.priority,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Product,
    Price,
    Url,
    Priority,
}

impl SortBy {
    pub fn column(self) -> &'static str {
        match self {
            SortBy::Product => "product",
            SortBy::Price => "price",
            SortBy::Url => "url",
            SortBy::Priority => "priority",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderBy {
    #[default]
    #[serde(rename = "ascending")]
    Ascending,
    #[serde(rename = "descending")]
    Descending,
}

/// Query string of `GET /wishes`.
#[derive(Clone, Copy, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub order_by: OrderBy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn priority_uses_variant_names_on_the_wire() {
        assert_eq!(serde_json::to_value(Priority::Middle).unwrap(), json!("middle"));
        let p: Priority = serde_json::from_value(json!("low")).unwrap();
        assert_eq!(p, Priority::Low);
        assert!(serde_json::from_value::<Priority>(json!("Hoch")).is_err());
    }

    #[test]
    fn priority_labels_are_separate_from_values() {
        assert_eq!(Priority::High.label(), "Hoch");
        assert_eq!(Priority::Middle.label(), "Mittel");
        assert_eq!(Priority::Low.label(), "Niedrig");
        assert_eq!("high".parse::<Priority>(), Ok(Priority::High));
        assert_eq!("Hoch".parse::<Priority>(), Err(UnknownPriority("Hoch".into())));
    }

    #[test]
    fn wish_in_price_defaults_to_zero() {
        let w: WishIn = serde_json::from_value(json!({
            "product": "Lamp",
            "url": "http://lamp",
            "priority": "low"
        }))
        .unwrap();
        assert_eq!(w.price, 0.0);
    }

    #[test]
    fn wish_in_requires_url() {
        let res = serde_json::from_value::<WishIn>(json!({
            "product": "Lamp",
            "price": 3.0,
            "priority": "low"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn product_length_is_bounded() {
        let mut w = WishIn {
            product: "x".repeat(PRODUCT_MAX_LEN),
            price: 1.0,
            url: "http://x".into(),
            priority: Priority::High,
        };
        assert!(w.check().is_ok());
        w.product.push('y');
        assert!(w.check().is_err());
    }

    #[test]
    fn list_params_default_to_product_ascending() {
        let p: ListParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.sort_by, SortBy::Product);
        assert_eq!(p.order_by, OrderBy::Ascending);
        let p: ListParams = serde_json::from_value(json!({"sort_by": "price", "order_by": "descending"})).unwrap();
        assert_eq!(p.sort_by.column(), "price");
        assert_eq!(p.order_by, OrderBy::Descending);
    }
}
