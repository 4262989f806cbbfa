//! Record types held by the method catalog

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store at insertion time
pub type MethodId = u32;

/// Identifier for the auxiliary user records
pub type UserId = u32;

/// Which material an aging method applies to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MaterialType {
    Binder,
    Mixture,
    #[serde(rename = "Binder/Mixture")]
    BinderMixture,
}

impl MaterialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Binder => "Binder",
            MaterialType::Mixture => "Mixture",
            MaterialType::BinderMixture => "Binder/Mixture",
        }
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adoption status of a method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MethodStatus {
    Standard,
    Emerging,
    Experimental,
    Obsolete,
}

impl MethodStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodStatus::Standard => "Standard",
            MethodStatus::Emerging => "Emerging",
            MethodStatus::Experimental => "Experimental",
            MethodStatus::Obsolete => "Obsolete",
        }
    }
}

impl std::fmt::Display for MethodStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative environmental-impact rating
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sustainability {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Sustainability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sustainability::Low => "Low",
            Sustainability::Medium => "Medium",
            Sustainability::High => "High",
            Sustainability::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for Sustainability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored aging method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AsphaltMethod {
    /// Store-assigned identifier, starting at 1
    pub id: MethodId,

    /// Display name (not unique)
    pub method: String,

    pub material_type: MaterialType,

    /// Open-ended subtype such as "SBS" or "All Mixtures"
    pub material_subtype: String,

    /// Free-form, possibly slash-joined ("Thermal/UV/Moisture")
    pub category: String,

    /// Descriptive realism assessment, matched by substring
    pub realism: String,

    /// One or more equipment names, comma-separated
    pub equipment: String,

    pub status: MethodStatus,

    /// Target climate; "All" and "Multiple" act as wildcards
    pub climate_zone: String,

    /// Aging objective; "All" and "Multiple" act as wildcards
    pub simulation_goal: String,

    pub sustainability: Sustainability,

    /// Referenced standards, "NA" when none were given
    pub standards: String,
}

/// A method record before the store has assigned its id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAsphaltMethod {
    pub method: String,
    pub material_type: MaterialType,
    pub material_subtype: String,
    pub category: String,
    pub realism: String,
    pub equipment: String,
    pub status: MethodStatus,
    pub climate_zone: String,
    pub simulation_goal: String,
    pub sustainability: Sustainability,
    #[serde(default)]
    pub standards: Option<String>,
}

impl NewAsphaltMethod {
    /// Attach an id, filling in the "NA" default for missing standards
    pub fn into_method(self, id: MethodId) -> AsphaltMethod {
        AsphaltMethod {
            id,
            method: self.method,
            material_type: self.material_type,
            material_subtype: self.material_subtype,
            category: self.category,
            realism: self.realism,
            equipment: self.equipment,
            status: self.status,
            climate_zone: self.climate_zone,
            simulation_goal: self.simulation_goal,
            sustainability: self.sustainability,
            standards: self
                .standards
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| NO_STANDARDS.to_string()),
        }
    }
}

/// Placeholder stored when a method references no standards
pub const NO_STANDARDS: &str = "NA";

/// Auxiliary user record. Nothing in the catalog or HTTP layer reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
