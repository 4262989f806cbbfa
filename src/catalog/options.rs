//! Known values offered as filter choices
//!
//! These lists are what a selector UI presents. They are not enforced on
//! records: subtypes, climate zones, goals and equipment are open-ended.

pub const MATERIAL_TYPES: &[&str] = &["Binder", "Mixture", "Binder/Mixture"];

pub const MATERIAL_SUBTYPES: &[&str] = &[
    "All",
    "SBS",
    "CRMB",
    "PMB",
    "OGFC",
    "SMA",
    "WMA",
    "Cold Mix",
    "Bio-Asphalt",
    "Cold Regions",
    "Emulsion",
];

pub const CATEGORIES: &[&str] = &[
    "Thermal",
    "UV",
    "Moisture",
    "Other",
    "Field",
    "Thermal/UV/Moisture",
    "Thermal/Other",
    "Thermal/Moisture",
    "UV/Moisture",
];

pub const STATUSES: &[&str] = &["Standard", "Emerging", "Experimental", "Obsolete"];

pub const CLIMATE_ZONES: &[&str] = &[
    "All",
    "Hot",
    "Cold",
    "Temperate",
    "UVThermal",
    "FreezeThaw",
    "Hydrothermal",
    "High-UV",
    "Urban / High-UV",
    "Hot Desert",
    "Cold Regions",
];

pub const SIMULATION_GOALS: &[&str] = &[
    "Short-Term",
    "Long-Term",
    "Short-Term/Long-Term",
    "Lifecycle",
    "UV Resistance",
    "Moisture",
    "Thermal",
    "Accelerated Aging",
    "Environmental",
];

pub const SUSTAINABILITY_LEVELS: &[&str] = &["Low", "Medium", "High", "Very High"];

pub const EQUIPMENT_TYPES: &[&str] = &[
    "TFOT Oven",
    "RTFOT Oven",
    "PAV",
    "Modified PAV",
    "RCAT Device",
    "VBA",
    "Pressure Vessel",
    "Oven",
    "UV Chamber",
    "Climate Chamber",
    "QUV",
    "Steam Oven",
    "Water Bath",
    "Environmental Chamber",
];

pub const REALISM_LEVELS: &[&str] = &["Low", "Medium", "High", "Very High"];

/// Every option list paired with a display label, in selector order
pub fn option_catalogs() -> Vec<(&'static str, &'static [&'static str])> {
    vec![
        ("Material Type", MATERIAL_TYPES),
        ("Material Subtype", MATERIAL_SUBTYPES),
        ("Category", CATEGORIES),
        ("Climate Zone", CLIMATE_ZONES),
        ("Simulation Goal", SIMULATION_GOALS),
        ("Equipment", EQUIPMENT_TYPES),
        ("Realism", REALISM_LEVELS),
        ("Status", STATUSES),
        ("Sustainability", SUSTAINABILITY_LEVELS),
    ]
}
