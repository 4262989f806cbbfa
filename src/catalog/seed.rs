//! Literal seed content for the method catalog
//!
//! Order matters: the store assigns ids 1..N in exactly this sequence.

use super::model::{MaterialType, MethodStatus, NewAsphaltMethod, Sustainability};

/// One literal catalog row
#[derive(Debug, Clone, Copy)]
pub struct SeedEntry {
    pub method: &'static str,
    pub material_type: MaterialType,
    pub material_subtype: &'static str,
    pub category: &'static str,
    pub realism: &'static str,
    pub equipment: &'static str,
    pub status: MethodStatus,
    pub climate_zone: &'static str,
    pub simulation_goal: &'static str,
    pub sustainability: Sustainability,
    pub standards: Option<&'static str>,
}

impl From<&SeedEntry> for NewAsphaltMethod {
    fn from(entry: &SeedEntry) -> Self {
        NewAsphaltMethod {
            method: entry.method.to_string(),
            material_type: entry.material_type,
            material_subtype: entry.material_subtype.to_string(),
            category: entry.category.to_string(),
            realism: entry.realism.to_string(),
            equipment: entry.equipment.to_string(),
            status: entry.status,
            climate_zone: entry.climate_zone.to_string(),
            simulation_goal: entry.simulation_goal.to_string(),
            sustainability: entry.sustainability,
            standards: entry.standards.map(str::to_string),
        }
    }
}

/// The fixed catalog of known aging methods
pub fn seed_entries() -> &'static [SeedEntry] {
    SEED_METHODS
}

const SEED_METHODS: &[SeedEntry] = &[
    SeedEntry {
        method: "TFOT",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Thermal",
        realism: "Low",
        equipment: "TFOT Oven",
        status: MethodStatus::Obsolete,
        climate_zone: "All",
        simulation_goal: "Short-Term",
        sustainability: Sustainability::Medium,
        standards: Some("ASTM D1754, EN 12607-2, JTG E20-T0609"),
    },
    SeedEntry {
        method: "RTFOT",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Thermal",
        realism: "Medium - Low for PMA and WMA, None for COLD and OGFC",
        equipment: "RTFOT Oven",
        status: MethodStatus::Standard,
        climate_zone: "All",
        simulation_goal: "Short-Term/Long-Term",
        sustainability: Sustainability::Medium,
        standards: Some("ASTM D2872, AASHTO T240, UNE-EN 12607-1, JTG E20 T 0610, AASHTO TP70"),
    },
    SeedEntry {
        method: "PAV",
        material_type: MaterialType::BinderMixture,
        material_subtype: "All",
        category: "Thermal",
        realism: "Medium - Low for PMA, Low-Medium for WMA, None for COLD",
        equipment: "PAV",
        status: MethodStatus::Standard,
        climate_zone: "All",
        simulation_goal: "Short-Term/Long-Term",
        sustainability: Sustainability::Medium,
        standards: Some("ASTM D6521, ASTM PS 36, AASHTO R 28, JTG E20, UNE-EN 14769"),
    },
    SeedEntry {
        method: "HiPAT",
        material_type: MaterialType::Binder,
        material_subtype: "SBS",
        category: "Thermal",
        realism: "High",
        equipment: "Modified PAV",
        status: MethodStatus::Emerging,
        climate_zone: "All",
        simulation_goal: "Long-Term",
        sustainability: Sustainability::Low,
        standards: Some("EN 14769 (draft)"),
    },
    SeedEntry {
        method: "RCAT",
        material_type: MaterialType::Binder,
        material_subtype: "SBS",
        category: "Thermal",
        realism: "High - Low/Moderate for PMB, Moderate for CRMB, Medium for WMA, None for OGFC",
        equipment: "RCAT Device",
        status: MethodStatus::Standard,
        climate_zone: "All",
        simulation_goal: "Short-Term/Long-Term",
        sustainability: Sustainability::Low,
        standards: Some("EN 15323 (variant), CE TC 336"),
    },
    SeedEntry {
        method: "VBA",
        material_type: MaterialType::Binder,
        material_subtype: "SBS",
        category: "Thermal/Other",
        realism: "High - Partial for OGFC",
        equipment: "VBA",
        status: MethodStatus::Emerging,
        climate_zone: "All",
        simulation_goal: "Long-Term",
        sustainability: Sustainability::Medium,
        standards: Some("NA"),
    },
    SeedEntry {
        method: "IDT",
        material_type: MaterialType::Binder,
        material_subtype: "SBS",
        category: "Thermal",
        realism: "High",
        equipment: "Pressure Vessel",
        status: MethodStatus::Experimental,
        climate_zone: "All",
        simulation_goal: "Long-Term",
        sustainability: Sustainability::Medium,
        standards: Some("NA"),
    },
    SeedEntry {
        method: "STOA",
        material_type: MaterialType::Mixture,
        material_subtype: "All Mixtures",
        category: "Thermal",
        realism: "Medium - Low for PMA, Low-Medium for WMA, None for COLD",
        equipment: "Oven",
        status: MethodStatus::Standard,
        climate_zone: "All",
        simulation_goal: "Short-Term",
        sustainability: Sustainability::Medium,
        standards: Some("AASHTO R 30, SHRP-A-383, T 0734 (JTG E20), CEN/TS 12697-52, NCHRP 815"),
    },
    SeedEntry {
        method: "LTOA",
        material_type: MaterialType::Mixture,
        material_subtype: "All Mixtures",
        category: "Thermal",
        realism: "High - Low for PMA, None for COLD",
        equipment: "Oven",
        status: MethodStatus::Standard,
        climate_zone: "Temperate",
        simulation_goal: "Long-Term",
        sustainability: Sustainability::Low,
        standards: Some("AASHTO R30, T 0734 (JTG E20), JTJ 052, NCHRP Report 871, CEN/TS 12697-52"),
    },
    SeedEntry {
        method: "Oven Aging",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Thermal",
        realism: "Medium",
        equipment: "Oven",
        status: MethodStatus::Standard,
        climate_zone: "All",
        simulation_goal: "Short-Term",
        sustainability: Sustainability::Medium,
        standards: Some("ASTM D2872, ASTM D6521"),
    },
    SeedEntry {
        method: "Dynamic Thermal Aging",
        material_type: MaterialType::BinderMixture,
        material_subtype: "All",
        category: "Thermal",
        realism: "Medium",
        equipment: "TFOT/Dynamic Chamber",
        status: MethodStatus::Experimental,
        climate_zone: "All",
        simulation_goal: "Lifecycle",
        sustainability: Sustainability::Medium,
        standards: Some("NA"),
    },
    SeedEntry {
        method: "Thermal Cycling",
        material_type: MaterialType::Binder,
        material_subtype: "Cold Regions",
        category: "Thermal",
        realism: "High",
        equipment: "Thermal Cycling Setup",
        status: MethodStatus::Experimental,
        climate_zone: "Cold",
        simulation_goal: "Lifecycle",
        sustainability: Sustainability::Low,
        standards: Some("NA"),
    },
    SeedEntry {
        method: "UV Chamber",
        material_type: MaterialType::BinderMixture,
        material_subtype: "OGFC",
        category: "UV",
        realism: "High",
        equipment: "UV Chamber",
        status: MethodStatus::Standard,
        climate_zone: "UVThermal",
        simulation_goal: "UV Resistance",
        sustainability: Sustainability::Medium,
        standards: Some("ASTM G154"),
    },
    SeedEntry {
        method: "Accelerated Weathering Machine",
        material_type: MaterialType::BinderMixture,
        material_subtype: "All",
        category: "Thermal/UV/Moisture",
        realism: "High",
        equipment: "QUV, APWS, Weatherometer, Weathering Oven",
        status: MethodStatus::Standard,
        climate_zone: "UVThermal",
        simulation_goal: "UV Resistance",
        sustainability: Sustainability::Medium,
        standards: Some("ASTM G154 / G155"),
    },
    SeedEntry {
        method: "TEAGE",
        material_type: MaterialType::Mixture,
        material_subtype: "All",
        category: "UV/Moisture",
        realism: "Very High - High for PMB, CRMB, COLD, WMA, Moderate for OGFC",
        equipment: "Climate Chamber",
        status: MethodStatus::Emerging,
        climate_zone: "All",
        simulation_goal: "Lifecycle",
        sustainability: Sustainability::Low,
        standards: Some("NA"),
    },
    SeedEntry {
        method: "Bespoke Aging",
        material_type: MaterialType::Binder,
        material_subtype: "PMB",
        category: "Thermal",
        realism: "Very High",
        equipment: "Custom Setup",
        status: MethodStatus::Emerging,
        climate_zone: "All",
        simulation_goal: "Lifecycle",
        sustainability: Sustainability::Low,
        standards: None,
    },
    SeedEntry {
        method: "Photocatalytic Degradation",
        material_type: MaterialType::Binder,
        material_subtype: "SBS",
        category: "UV",
        realism: "High",
        equipment: "UV Source",
        status: MethodStatus::Experimental,
        climate_zone: "Hot",
        simulation_goal: "UV Resistance",
        sustainability: Sustainability::Medium,
        standards: None,
    },
    SeedEntry {
        method: "Natural Aging",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "UV",
        realism: "Very High",
        equipment: "Natural Exposure",
        status: MethodStatus::Standard,
        climate_zone: "All",
        simulation_goal: "Lifecycle",
        sustainability: Sustainability::VeryHigh,
        standards: None,
    },
    SeedEntry {
        method: "Steam Aging",
        material_type: MaterialType::Mixture,
        material_subtype: "OGFC",
        category: "Moisture",
        realism: "High",
        equipment: "Steam Oven",
        status: MethodStatus::Experimental,
        climate_zone: "Hot",
        simulation_goal: "Moisture",
        sustainability: Sustainability::Medium,
        standards: None,
    },
    SeedEntry {
        method: "Water Aging",
        material_type: MaterialType::Binder,
        material_subtype: "PMB",
        category: "Moisture",
        realism: "High",
        equipment: "Water Bath",
        status: MethodStatus::Standard,
        climate_zone: "Hot",
        simulation_goal: "Moisture",
        sustainability: Sustainability::High,
        standards: None,
    },
    SeedEntry {
        method: "VAPro",
        material_type: MaterialType::Mixture,
        material_subtype: "CRMB",
        category: "Thermal",
        realism: "High",
        equipment: "VAPro",
        status: MethodStatus::Emerging,
        climate_zone: "Hot",
        simulation_goal: "Lifecycle",
        sustainability: Sustainability::Low,
        standards: None,
    },
    SeedEntry {
        method: "Vacuum Furnace",
        material_type: MaterialType::Mixture,
        material_subtype: "SMA",
        category: "Thermal",
        realism: "Very High",
        equipment: "Vacuum Furnace",
        status: MethodStatus::Experimental,
        climate_zone: "All",
        simulation_goal: "Moisture",
        sustainability: Sustainability::Low,
        standards: None,
    },
    SeedEntry {
        method: "POVs",
        material_type: MaterialType::Binder,
        material_subtype: "WMA",
        category: "Thermal",
        realism: "High",
        equipment: "POVs",
        status: MethodStatus::Emerging,
        climate_zone: "Hot",
        simulation_goal: "Long-Term",
        sustainability: Sustainability::Low,
        standards: None,
    },
    SeedEntry {
        method: "Environmental Room",
        material_type: MaterialType::Mixture,
        material_subtype: "Cold Mix",
        category: "Moisture",
        realism: "Very High",
        equipment: "Environmental Chamber",
        status: MethodStatus::Emerging,
        climate_zone: "All",
        simulation_goal: "Lifecycle",
        sustainability: Sustainability::Low,
        standards: None,
    },
    SeedEntry {
        method: "Aging Cycles",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Thermal",
        realism: "High",
        equipment: "RTFOT/PAV/Thermal Chamber",
        status: MethodStatus::Emerging,
        climate_zone: "All",
        simulation_goal: "Lifecycle",
        sustainability: Sustainability::Low,
        standards: None,
    },
    SeedEntry {
        method: "Anaerobic Aging",
        material_type: MaterialType::Binder,
        material_subtype: "SBS",
        category: "Other",
        realism: "Medium",
        equipment: "Anaerobic Setup",
        status: MethodStatus::Experimental,
        climate_zone: "All",
        simulation_goal: "Long-Term",
        sustainability: Sustainability::High,
        standards: None,
    },
    SeedEntry {
        method: "Microwave Aging",
        material_type: MaterialType::Binder,
        material_subtype: "CRMB",
        category: "Other",
        realism: "Medium",
        equipment: "Microwave Chamber",
        status: MethodStatus::Experimental,
        climate_zone: "All",
        simulation_goal: "Short-Term",
        sustainability: Sustainability::High,
        standards: None,
    },
    SeedEntry {
        method: "SAT/USAT",
        material_type: MaterialType::Binder,
        material_subtype: "PMB",
        category: "Other",
        realism: "High",
        equipment: "SAT Plate",
        status: MethodStatus::Standard,
        climate_zone: "All",
        simulation_goal: "Long-Term",
        sustainability: Sustainability::High,
        standards: None,
    },
    SeedEntry {
        method: "RRT",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Other",
        realism: "Low",
        equipment: "Rolling Bottle",
        status: MethodStatus::Obsolete,
        climate_zone: "All",
        simulation_goal: "Short-Term",
        sustainability: Sustainability::Medium,
        standards: None,
    },
    SeedEntry {
        method: "RFT",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Other",
        realism: "Low",
        equipment: "RFT Equipment",
        status: MethodStatus::Obsolete,
        climate_zone: "All",
        simulation_goal: "Short-Term",
        sustainability: Sustainability::Medium,
        standards: None,
    },
    SeedEntry {
        method: "SMT",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Other",
        realism: "Medium",
        equipment: "Thin Film Setup",
        status: MethodStatus::Obsolete,
        climate_zone: "All",
        simulation_goal: "Short-Term",
        sustainability: Sustainability::Medium,
        standards: None,
    },
    SeedEntry {
        method: "Simple Stove Aging",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Other",
        realism: "Low",
        equipment: "Stove",
        status: MethodStatus::Obsolete,
        climate_zone: "All",
        simulation_goal: "Short-Term",
        sustainability: Sustainability::High,
        standards: None,
    },
    SeedEntry {
        method: "Normal Aging",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Other",
        realism: "Medium",
        equipment: "Outdoor Setup",
        status: MethodStatus::Experimental,
        climate_zone: "Temperate",
        simulation_goal: "Lifecycle",
        sustainability: Sustainability::VeryHigh,
        standards: None,
    },
    SeedEntry {
        method: "Field Aging",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Field",
        realism: "Very High",
        equipment: "Field",
        status: MethodStatus::Standard,
        climate_zone: "All",
        simulation_goal: "Lifecycle",
        sustainability: Sustainability::High,
        standards: None,
    },
    SeedEntry {
        method: "TODT",
        material_type: MaterialType::Binder,
        material_subtype: "PMB",
        category: "Thermal",
        realism: "High",
        equipment: "Tilted Oven",
        status: MethodStatus::Obsolete,
        climate_zone: "Hot",
        simulation_goal: "Short-Term",
        sustainability: Sustainability::Medium,
        standards: None,
    },
    SeedEntry {
        method: "RMFOT",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Thermal",
        realism: "Medium",
        equipment: "RTFOT + Capillary",
        status: MethodStatus::Obsolete,
        climate_zone: "Temperate",
        simulation_goal: "Short-Term",
        sustainability: Sustainability::Low,
        standards: None,
    },
    SeedEntry {
        method: "TFAAT",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Thermal",
        realism: "High",
        equipment: "Column Oxidation Chamber",
        status: MethodStatus::Experimental,
        climate_zone: "All",
        simulation_goal: "Long-Term",
        sustainability: Sustainability::Medium,
        standards: None,
    },
    SeedEntry {
        method: "POB",
        material_type: MaterialType::Binder,
        material_subtype: "All",
        category: "Thermal",
        realism: "Very High",
        equipment: "Pressure Bomb",
        status: MethodStatus::Experimental,
        climate_zone: "All",
        simulation_goal: "Long-Term",
        sustainability: Sustainability::Medium,
        standards: None,
    },
    SeedEntry {
        method: "SAFT",
        material_type: MaterialType::Binder,
        material_subtype: "PMB",
        category: "Thermal",
        realism: "Medium",
        equipment: "Stirred Airflow Reactor",
        status: MethodStatus::Experimental,
        climate_zone: "All",
        simulation_goal: "Short-Term",
        sustainability: Sustainability::Low,
        standards: None,
    },
    SeedEntry {
        method: "Laboratory Aging",
        material_type: MaterialType::Mixture,
        material_subtype: "All",
        category: "Thermal",
        realism: "Very High",
        equipment: "Oven / Environmental Chamber",
        status: MethodStatus::Experimental,
        climate_zone: "All",
        simulation_goal: "Long-Term",
        sustainability: Sustainability::High,
        standards: None,
    },
    SeedEntry {
        method: "NOx Degradation (Photocatalytic Degradation)",
        material_type: MaterialType::Binder,
        material_subtype: "SBS",
        category: "UV",
        realism: "High",
        equipment: "Photocatalytic Reactor",
        status: MethodStatus::Experimental,
        climate_zone: "Hot",
        simulation_goal: "UV Resistance",
        sustainability: Sustainability::VeryHigh,
        standards: None,
    },
    SeedEntry {
        method: "Low-Temperature Hardening",
        material_type: MaterialType::Binder,
        material_subtype: "Bio-Asphalt",
        category: "Thermal",
        realism: "Medium",
        equipment: "Low-Temperature Chamber",
        status: MethodStatus::Experimental,
        climate_zone: "Cold",
        simulation_goal: "Short-Term",
        sustainability: Sustainability::Medium,
        standards: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_size() {
        assert_eq!(seed_entries().len(), 42);
    }

    #[test]
    fn test_seed_names_are_distinct() {
        let names: HashSet<_> = seed_entries().iter().map(|e| e.method).collect();
        assert_eq!(names.len(), seed_entries().len());
    }

    #[test]
    fn test_later_entries_omit_standards() {
        let bespoke = seed_entries()
            .iter()
            .position(|e| e.method == "Bespoke Aging")
            .unwrap();
        assert!(seed_entries()[..bespoke].iter().all(|e| e.standards.is_some()));
        assert!(seed_entries()[bespoke..].iter().all(|e| e.standards.is_none()));
    }
}
