use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-form ingredient quantity as authored in a recipe: either a plain
/// number ("2") or loose text ("1 can", "to taste").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Quantity {
    Count(f64),
    Text(String),
}

impl Quantity {
    /// Numeric view of the quantity. Text that trims to a finite number
    /// counts as numeric, matching how recipe authors mix "2" and 2.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Quantity::Count(value) if value.is_finite() => Some(*value),
            Quantity::Count(_) => None,
            Quantity::Text(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// True when the quantity carries no information at all.
    pub fn is_blank(&self) -> bool {
        match self {
            Quantity::Count(_) => false,
            Quantity::Text(text) => text.trim().is_empty(),
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Count(value)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity::Text(value.to_string())
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Count(value) => write!(f, "{value}"),
            Quantity::Text(text) => f.write_str(text),
        }
    }
}

/// One ingredient line of a recipe. The aggregation key is the
/// case-insensitive trimmed `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
}

impl IngredientReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<Quantity>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientReference>,
    #[serde(default)]
    pub steps: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            image_url: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_ingredients(mut self, ingredients: Vec<IngredientReference>) -> Self {
        self.ingredients = ingredients;
        self
    }
}
