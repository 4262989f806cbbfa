use super::CommandHandler;
use crate::api;
use crate::catalog::{AsphaltMethod, MemStorage};
use crate::Result;

/// Handler for the `show` command
pub struct ShowCommand {
    pub id: String,
    pub json: bool,
}

impl CommandHandler for ShowCommand {
    fn execute(&self) -> Result<()> {
        let storage = MemStorage::new();

        let method = match api::get_method(&storage, &self.id) {
            Ok(method) => method,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };

        println!("{}", self.render(&method)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

impl ShowCommand {
    pub fn new(id: String, json: bool) -> Self {
        Self { id, json }
    }

    pub fn render(&self, method: &AsphaltMethod) -> Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(method)?);
        }

        let fields = [
            ("Material Type", method.material_type.as_str()),
            ("Material Subtype", method.material_subtype.as_str()),
            ("Category", method.category.as_str()),
            ("Realism", method.realism.as_str()),
            ("Equipment", method.equipment.as_str()),
            ("Status", method.status.as_str()),
            ("Climate Zone", method.climate_zone.as_str()),
            ("Simulation Goal", method.simulation_goal.as_str()),
            ("Sustainability", method.sustainability.as_str()),
            ("Standards", method.standards.as_str()),
        ];

        let mut out = format!("#{} {}\n", method.id, method.method);
        for (label, value) in fields {
            out.push_str(&format!("  {:<18}{}\n", label, value));
        }
        Ok(out.trim_end().to_string())
    }
}
