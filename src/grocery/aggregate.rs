use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{IngredientReference, Quantity};

/// One line of the generated shopping list. `name` keeps the casing of
/// the first occurrence; `quantity` follows the merge rule of
/// [`QuantityMerger`]. Absence is distinct from zero: an ingredient that
/// never carried a quantity stays quantity-less.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
}

impl From<AggregatedIngredient> for IngredientReference {
    fn from(value: AggregatedIngredient) -> Self {
        Self {
            name: value.name,
            quantity: value.quantity,
        }
    }
}

/// Accumulates the quantities contributed under one aggregation key.
///
/// Numeric contributions sum; non-numeric, non-blank contributions join
/// with `", "` in encounter order. At [`finish`](Self::finish) a numeric
/// sum wins outright and any collected text is dropped, matching the
/// observed product behavior for mixed input like `2` + `"a pinch"`.
#[derive(Debug, Default)]
pub struct QuantityMerger {
    sum: Option<f64>,
    text: Option<String>,
}

impl QuantityMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, quantity: Option<&Quantity>) {
        let Some(quantity) = quantity else {
            return;
        };
        if quantity.is_blank() {
            return;
        }
        if let Some(value) = quantity.as_number() {
            self.sum = Some(self.sum.unwrap_or(0.0) + value);
        } else if let Quantity::Text(raw) = quantity {
            let piece = raw.trim();
            match self.text.as_mut() {
                Some(joined) => {
                    joined.push_str(", ");
                    joined.push_str(piece);
                }
                None => self.text = Some(piece.to_string()),
            }
        }
    }

    pub fn finish(self) -> Option<Quantity> {
        if let Some(sum) = self.sum {
            Some(Quantity::Count(sum))
        } else {
            self.text.map(Quantity::Text)
        }
    }
}

#[derive(Debug)]
struct Bucket {
    display_name: String,
    merger: QuantityMerger,
}

/// Collapses a multiset of ingredient references into one entry per
/// case-insensitive trimmed name, sorted for deterministic output.
///
/// Never fails: blank names are skipped, unparsable quantities degrade
/// to text, and an empty input yields an empty list.
pub fn aggregate_ingredients<'a, I>(references: I) -> Vec<AggregatedIngredient>
where
    I: IntoIterator<Item = &'a IngredientReference>,
{
    let mut buckets: HashMap<String, Bucket> = HashMap::new();

    for reference in references {
        let display_name = reference.name.trim();
        if display_name.is_empty() {
            continue;
        }
        let key = display_name.to_lowercase();
        let bucket = buckets.entry(key).or_insert_with(|| Bucket {
            display_name: display_name.to_string(),
            merger: QuantityMerger::new(),
        });
        bucket.merger.push(reference.quantity.as_ref());
    }

    let mut out: Vec<AggregatedIngredient> = buckets
        .into_values()
        .map(|bucket| AggregatedIngredient {
            name: bucket.display_name,
            quantity: bucket.merger.finish(),
        })
        .collect();
    // Keys are unique case-insensitively, so the lowercase name is a
    // total order here.
    out.sort_by(|left, right| left.name.to_lowercase().cmp(&right.name.to_lowercase()));
    out
}
