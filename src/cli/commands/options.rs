use super::CommandHandler;
use crate::catalog::options::option_catalogs;
use crate::filter::WILDCARD_VALUES;
use crate::Result;

/// Handler for the `options` command
pub struct OptionsCommand;

impl CommandHandler for OptionsCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "options"
    }
}

impl OptionsCommand {
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (label, values) in option_catalogs() {
            out.push_str(label);
            out.push('\n');
            for value in values {
                out.push_str(&format!("  - {}\n", value));
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "Records tagged {} match every climate zone and simulation goal.\nUse \"all\" to leave a filter unset.",
            WILDCARD_VALUES.join(" or ")
        ));
        out
    }
}
