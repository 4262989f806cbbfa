pub mod list;
pub mod options;
pub mod serve;
pub mod show;

use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}
