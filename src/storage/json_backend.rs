use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::{ChoreRecord, Member, Recipe};
use crate::errors::{CoreError, CoreResult};
use crate::grocery::AggregatedIngredient;

pub const SNAPSHOT_SCHEMA_VERSION: u8 = 1;

const TMP_SUFFIX: &str = "tmp";

/// Everything the surrounding application persists for one household.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HouseholdSnapshot {
    #[serde(default = "HouseholdSnapshot::schema_version_default")]
    pub schema_version: u8,
    #[serde(default)]
    pub chores: Vec<ChoreRecord>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub grocery: Vec<AggregatedIngredient>,
}

impl HouseholdSnapshot {
    pub fn schema_version_default() -> u8 {
        SNAPSHOT_SCHEMA_VERSION
    }
}

/// Filesystem-backed JSON persistence for a household snapshot.
///
/// Writes go to a sibling temp file first and land via rename, so a
/// crash mid-save never leaves a truncated snapshot behind. When and how
/// often to save stays with the caller.
#[derive(Debug, Clone)]
pub struct JsonHouseholdStorage {
    path: PathBuf,
}

impl JsonHouseholdStorage {
    pub fn new(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot, or an empty one when no file exists yet.
    pub fn load_or_default(&self) -> CoreResult<HouseholdSnapshot> {
        if !self.path.exists() {
            return Ok(HouseholdSnapshot::default());
        }
        self.load()
    }

    pub fn load(&self) -> CoreResult<HouseholdSnapshot> {
        let contents = fs::read_to_string(&self.path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                CoreError::not_found(format!("snapshot file {}", self.path.display()))
            } else {
                CoreError::from(err)
            }
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, snapshot: &HouseholdSnapshot) -> CoreResult<()> {
        let payload = serde_json::to_string_pretty(snapshot)?;
        let tmp_path = self.path.with_extension(TMP_SUFFIX);
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(payload.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
