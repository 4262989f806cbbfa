//! Filter evaluation over the method catalog
//!
//! A [`FilterSelection`] holds one chosen value per [`FilterKey`]. A record is
//! kept when every key either carries a no-op value or matches under that
//! key's [`MatchPolicy`]. Evaluation is a stable filter: matching records
//! keep their input order.

mod policy;

pub use policy::{MatchPolicy, WILDCARD_VALUES};

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use crate::catalog::AsphaltMethod;
use crate::Fa2msError;

/// Selection value meaning "do not constrain on this field"
pub const NO_OP: &str = "all";

/// True when a selection value leaves its field unconstrained
pub fn is_noop(value: &str) -> bool {
    value.is_empty() || value == NO_OP
}

/// The recognized filter keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    MaterialType,
    MaterialSubtype,
    ClimateZone,
    SimulationGoal,
    Status,
    Sustainability,
    Equipment,
    Realism,
}

impl FilterKey {
    pub const ALL: [FilterKey; 8] = [
        FilterKey::MaterialType,
        FilterKey::MaterialSubtype,
        FilterKey::ClimateZone,
        FilterKey::SimulationGoal,
        FilterKey::Status,
        FilterKey::Sustainability,
        FilterKey::Equipment,
        FilterKey::Realism,
    ];

    /// Key name as it appears in the method JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::MaterialType => "materialType",
            FilterKey::MaterialSubtype => "materialSubtype",
            FilterKey::ClimateZone => "climateZone",
            FilterKey::SimulationGoal => "simulationGoal",
            FilterKey::Status => "status",
            FilterKey::Sustainability => "sustainability",
            FilterKey::Equipment => "equipment",
            FilterKey::Realism => "realism",
        }
    }

    pub fn policy(&self) -> MatchPolicy {
        match self {
            FilterKey::MaterialType
            | FilterKey::MaterialSubtype
            | FilterKey::Status
            | FilterKey::Sustainability => MatchPolicy::Exact,
            FilterKey::ClimateZone | FilterKey::SimulationGoal => MatchPolicy::ExactOrWildcard,
            FilterKey::Equipment => MatchPolicy::Contains,
            FilterKey::Realism => MatchPolicy::ContainsIgnoreCase,
        }
    }

    /// The record field this key constrains
    pub fn field<'a>(&self, method: &'a AsphaltMethod) -> &'a str {
        match self {
            FilterKey::MaterialType => method.material_type.as_str(),
            FilterKey::MaterialSubtype => &method.material_subtype,
            FilterKey::ClimateZone => &method.climate_zone,
            FilterKey::SimulationGoal => &method.simulation_goal,
            FilterKey::Status => method.status.as_str(),
            FilterKey::Sustainability => method.sustainability.as_str(),
            FilterKey::Equipment => &method.equipment,
            FilterKey::Realism => &method.realism,
        }
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = Fa2msError;

    /// Accepts the camelCase key names and their kebab-case spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s || kebab_case(key.as_str()) == s)
            .ok_or_else(|| Fa2msError::InvalidFilter(format!("unknown filter key '{}'", s)))
    }
}

fn kebab_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 4);
    for c in camel.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// One chosen value per filter key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSelection {
    pub material_type: String,
    pub material_subtype: String,
    pub climate_zone: String,
    pub simulation_goal: String,
    pub status: String,
    pub sustainability: String,
    pub equipment: String,
    pub realism: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            material_type: NO_OP.to_string(),
            material_subtype: NO_OP.to_string(),
            climate_zone: NO_OP.to_string(),
            simulation_goal: NO_OP.to_string(),
            status: NO_OP.to_string(),
            sustainability: NO_OP.to_string(),
            equipment: NO_OP.to_string(),
            realism: NO_OP.to_string(),
        }
    }
}

impl FilterSelection {
    /// A selection that constrains nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from arbitrary key/value pairs
    ///
    /// Unrecognized keys are skipped; keys that never appear stay no-op.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut selection = Self::new();
        for (key, value) in pairs {
            match key.as_ref().parse::<FilterKey>() {
                Ok(key) => selection.set(key, value),
                Err(_) => debug!(key = key.as_ref(), "Ignoring unrecognized filter key"),
            }
        }
        selection
    }

    /// Builder-style [`FilterSelection::set`]
    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::MaterialType => &self.material_type,
            FilterKey::MaterialSubtype => &self.material_subtype,
            FilterKey::ClimateZone => &self.climate_zone,
            FilterKey::SimulationGoal => &self.simulation_goal,
            FilterKey::Status => &self.status,
            FilterKey::Sustainability => &self.sustainability,
            FilterKey::Equipment => &self.equipment,
            FilterKey::Realism => &self.realism,
        }
    }

    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let slot = match key {
            FilterKey::MaterialType => &mut self.material_type,
            FilterKey::MaterialSubtype => &mut self.material_subtype,
            FilterKey::ClimateZone => &mut self.climate_zone,
            FilterKey::SimulationGoal => &mut self.simulation_goal,
            FilterKey::Status => &mut self.status,
            FilterKey::Sustainability => &mut self.sustainability,
            FilterKey::Equipment => &mut self.equipment,
            FilterKey::Realism => &mut self.realism,
        };
        *slot = value.into();
    }

    /// Return every key to the no-op value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Keys carrying a concrete value, with that value
    pub fn active(&self) -> impl Iterator<Item = (FilterKey, &str)> + '_ {
        FilterKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
            .filter(|(_, value)| !is_noop(value))
    }

    /// Number of keys that currently constrain the result
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// True when `method` satisfies every active key
    pub fn matches(&self, method: &AsphaltMethod) -> bool {
        self.active()
            .all(|(key, value)| key.policy().matches(key.field(method), value))
    }
}

/// Stable filter of `methods` by `selection`
pub fn evaluate<'a>(
    methods: &'a [AsphaltMethod],
    selection: &FilterSelection,
) -> Vec<&'a AsphaltMethod> {
    methods.iter().filter(|m| selection.matches(m)).collect()
}
