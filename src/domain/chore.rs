use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CoreError, CoreResult};

const DEFAULT_CURRENCY: &str = "USD";

/// Urgency bucket for a chore. Serialized in the lowercase wire form
/// used by the surrounding application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Med,
    High,
}

/// Inline "assigned to" info. Kept only when at least one field survives
/// trimming; a fully blank pair normalizes away to `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignedTo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

impl AssignedTo {
    pub fn normalized(name: &str, role: &str) -> Option<Self> {
        let name = name.trim();
        let role = role.trim();
        if name.is_empty() && role.is_empty() {
            None
        } else {
            Some(Self {
                name: name.to_string(),
                role: role.to_string(),
            })
        }
    }
}

/// One recorded instance of a chore being finished.
///
/// `paid` is monotonic: it starts `false` and only ever flips to `true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionEntry {
    pub occurred_on: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    #[serde(default)]
    pub paid: bool,
}

impl CompletionEntry {
    pub fn new(member_id: Option<String>) -> Self {
        Self {
            occurred_on: Utc::now(),
            member_id: member_id.and_then(|id| {
                let id = id.trim().to_string();
                if id.is_empty() {
                    None
                } else {
                    Some(id)
                }
            }),
            paid: false,
        }
    }

    pub fn is_attributed_to(&self, member_id: &str) -> bool {
        self.member_id.as_deref() == Some(member_id)
    }
}

/// A household task carrying an optional monetary reward and its
/// completion history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoreRecord {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub reward_amount: f64,
    #[serde(default = "ChoreRecord::default_currency")]
    pub reward_currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<AssignedTo>,
    #[serde(default)]
    pub completions: Vec<CompletionEntry>,
    #[serde(default = "ChoreRecord::default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChoreRecord {
    pub fn new(title: impl Into<String>) -> CoreResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: normalize_title(&title.into())?,
            notes: None,
            priority: Priority::default(),
            due_date: None,
            reward_amount: 0.0,
            reward_currency: DEFAULT_CURRENCY.to_string(),
            assigned_to: None,
            completions: Vec::new(),
            active: true,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn from_draft(draft: ChoreDraft) -> CoreResult<Self> {
        let mut chore = Self::new(draft.title)?;
        chore.notes = draft.notes.filter(|notes| !notes.trim().is_empty());
        chore.priority = draft.priority;
        chore.due_date = draft.due_date;
        chore.reward_amount = coerce_reward_amount(draft.reward_amount);
        chore.reward_currency = normalize_currency(draft.reward_currency.as_deref())?;
        chore.assigned_to = draft
            .assigned_to
            .and_then(|assigned| AssignedTo::normalized(&assigned.name, &assigned.role));
        chore.active = draft.active;
        Ok(chore)
    }

    /// Appends a completion entry, keeping chronological insertion order.
    /// Reward fields are untouched.
    pub fn record_completion(&mut self, member_id: Option<String>) -> &CompletionEntry {
        self.completions.push(CompletionEntry::new(member_id));
        self.touch();
        let index = self.completions.len() - 1;
        &self.completions[index]
    }

    /// Flips every unpaid completion entry to paid. Returns how many
    /// entries changed; zero means the call was a no-op.
    pub fn mark_all_paid(&mut self) -> usize {
        let mut flipped = 0;
        for entry in self.completions.iter_mut().filter(|entry| !entry.paid) {
            entry.paid = true;
            flipped += 1;
        }
        if flipped > 0 {
            self.touch();
        }
        flipped
    }

    /// Flips the unpaid entries attributed to `member_id`. Returns how
    /// many entries changed.
    pub fn pay_member(&mut self, member_id: &str) -> usize {
        let mut flipped = 0;
        for entry in self
            .completions
            .iter_mut()
            .filter(|entry| !entry.paid && entry.is_attributed_to(member_id))
        {
            entry.paid = true;
            flipped += 1;
        }
        if flipped > 0 {
            self.touch();
        }
        flipped
    }

    pub fn has_unpaid_for(&self, member_id: &str) -> bool {
        self.completions
            .iter()
            .any(|entry| !entry.paid && entry.is_attributed_to(member_id))
    }

    /// Outstanding reward owed to `member_id` from this chore alone.
    /// A zero-reward chore contributes nothing regardless of history.
    pub fn outstanding_for(&self, member_id: &str) -> f64 {
        self.reward_total_for(member_id, false)
    }

    /// Already-paid reward credited to `member_id` from this chore.
    pub fn settled_for(&self, member_id: &str) -> f64 {
        self.reward_total_for(member_id, true)
    }

    fn reward_total_for(&self, member_id: &str, paid: bool) -> f64 {
        if self.reward_amount == 0.0 {
            return 0.0;
        }
        let matching = self
            .completions
            .iter()
            .filter(|entry| entry.paid == paid && entry.is_attributed_to(member_id))
            .count();
        self.reward_amount * matching as f64
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn default_currency() -> String {
        DEFAULT_CURRENCY.to_string()
    }

    fn default_active() -> bool {
        true
    }
}

/// Raw creation input, normalized and validated by
/// [`ChoreRecord::from_draft`].
#[derive(Debug, Clone, Default)]
pub struct ChoreDraft {
    pub title: String,
    pub notes: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub reward_amount: f64,
    pub reward_currency: Option<String>,
    pub assigned_to: Option<AssignedTo>,
    pub active: bool,
}

impl ChoreDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            active: true,
            ..Self::default()
        }
    }

    pub fn with_reward(mut self, amount: f64, currency: impl Into<String>) -> Self {
        self.reward_amount = amount;
        self.reward_currency = Some(currency.into());
        self
    }
}

/// Partial update. `None` leaves a field alone; the nested `Option`s
/// distinguish "clear this field" from "do not touch it".
#[derive(Debug, Clone, Default)]
pub struct ChoreUpdate {
    pub title: Option<String>,
    pub notes: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub reward_amount: Option<f64>,
    pub reward_currency: Option<String>,
    pub assigned_to: Option<Option<AssignedTo>>,
    pub active: Option<bool>,
}

impl ChoreUpdate {
    /// Applies the patch with the same normalization rules as creation.
    /// Validation failures leave the record untouched.
    pub fn apply(self, chore: &mut ChoreRecord) -> CoreResult<()> {
        let title = self.title.map(|raw| normalize_title(&raw)).transpose()?;
        let currency = self
            .reward_currency
            .map(|raw| normalize_currency(Some(&raw)))
            .transpose()?;

        if let Some(title) = title {
            chore.title = title;
        }
        if let Some(notes) = self.notes {
            chore.notes = notes.filter(|value| !value.trim().is_empty());
        }
        if let Some(priority) = self.priority {
            chore.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            chore.due_date = due_date;
        }
        if let Some(amount) = self.reward_amount {
            chore.reward_amount = coerce_reward_amount(amount);
        }
        if let Some(currency) = currency {
            chore.reward_currency = currency;
        }
        if let Some(assigned) = self.assigned_to {
            chore.assigned_to =
                assigned.and_then(|value| AssignedTo::normalized(&value.name, &value.role));
        }
        if let Some(active) = self.active {
            chore.active = active;
        }
        chore.touch();
        Ok(())
    }
}

fn normalize_title(raw: &str) -> CoreResult<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(CoreError::validation("title is required"));
    }
    Ok(title.to_string())
}

/// Negative, NaN, and infinite rewards all coerce to zero instead of
/// failing the whole create/update.
fn coerce_reward_amount(raw: f64) -> f64 {
    if raw.is_finite() && raw >= 0.0 {
        raw
    } else {
        0.0
    }
}

fn normalize_currency(raw: Option<&str>) -> CoreResult<String> {
    let code = raw.map(str::trim).unwrap_or("");
    if code.is_empty() {
        return Ok(DEFAULT_CURRENCY.to_string());
    }
    if code.len() < 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::validation(format!(
            "invalid currency code: {code:?}"
        )));
    }
    Ok(code.to_uppercase())
}
