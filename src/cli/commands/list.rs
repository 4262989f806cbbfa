use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::debug;

use super::CommandHandler;
use crate::catalog::{AsphaltMethod, MemStorage};
use crate::filter::{evaluate, FilterSelection};
use crate::Result;

/// Handler for the `list` command
pub struct ListCommand {
    pub selection: FilterSelection,
    pub json: bool,
}

#[derive(Tabled)]
struct MethodRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Material")]
    material_type: String,
    #[tabled(rename = "Subtype")]
    material_subtype: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Climate")]
    climate_zone: String,
    #[tabled(rename = "Goal")]
    simulation_goal: String,
    #[tabled(rename = "Sustainability")]
    sustainability: String,
}

impl From<&AsphaltMethod> for MethodRow {
    fn from(m: &AsphaltMethod) -> Self {
        Self {
            id: m.id,
            method: m.method.clone(),
            material_type: m.material_type.to_string(),
            material_subtype: m.material_subtype.clone(),
            status: m.status.to_string(),
            climate_zone: m.climate_zone.clone(),
            simulation_goal: m.simulation_goal.clone(),
            sustainability: m.sustainability.to_string(),
        }
    }
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<()> {
        let storage = MemStorage::new();
        println!("{}", self.render(storage.methods())?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    pub fn new(selection: FilterSelection, json: bool) -> Self {
        Self { selection, json }
    }

    /// Filter `methods` and format the result for the terminal
    pub fn render(&self, methods: &[AsphaltMethod]) -> Result<String> {
        let matches = evaluate(methods, &self.selection);
        debug!(
            total = methods.len(),
            matched = matches.len(),
            active_filters = self.selection.active_count(),
            "Evaluated filters"
        );

        if self.json {
            return Ok(serde_json::to_string_pretty(&matches)?);
        }

        if matches.is_empty() {
            return Ok("No methods found.".to_string());
        }

        let rows: Vec<MethodRow> = matches.iter().map(|m| MethodRow::from(*m)).collect();
        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        Ok(format!(
            "{}\n{} of {} methods ({} filters active)",
            table,
            matches.len(),
            methods.len(),
            self.selection.active_count()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterKey;

    #[test]
    fn test_table_output_with_summary() {
        let storage = MemStorage::new();
        let command = ListCommand::new(
            FilterSelection::new().with(FilterKey::Status, "Obsolete"),
            false,
        );

        let output = command.render(storage.methods()).unwrap();
        assert!(output.contains("TFOT"));
        assert!(output.contains("RMFOT"));
        assert!(!output.contains("RTFOT"));
        assert!(output.ends_with("7 of 42 methods (1 filters active)"));
    }

    #[test]
    fn test_empty_result() {
        let storage = MemStorage::new();
        let command = ListCommand::new(
            FilterSelection::new().with(FilterKey::Equipment, "Centrifuge"),
            false,
        );

        assert_eq!(command.render(storage.methods()).unwrap(), "No methods found.");
    }

    #[test]
    fn test_json_output_is_array_of_records() {
        let storage = MemStorage::new();
        let command = ListCommand::new(
            FilterSelection::new().with(FilterKey::Equipment, "Centrifuge"),
            true,
        );
        assert_eq!(command.render(storage.methods()).unwrap(), "[]");

        let command = ListCommand::new(
            FilterSelection::new().with(FilterKey::MaterialSubtype, "SMA"),
            true,
        );
        let value: serde_json::Value =
            serde_json::from_str(&command.render(storage.methods()).unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["method"], "Vacuum Furnace");
    }
}
