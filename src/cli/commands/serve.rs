use std::sync::Arc;
use tracing::info;

use super::CommandHandler;
use crate::catalog::MemStorage;
use crate::config::ServerConfig;
use crate::{server, Result};

/// Handler for the `serve` command
pub struct ServeCommand {
    pub server: ServerConfig,
}

impl CommandHandler for ServeCommand {
    fn execute(&self) -> Result<()> {
        let addr = self.server.socket_addr()?;

        let storage = Arc::new(MemStorage::new());
        info!(methods = storage.method_count(), "Catalog ready");

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(server::serve(storage, addr))
    }

    fn name(&self) -> &'static str {
        "serve"
    }
}

impl ServeCommand {
    pub fn new(server: ServerConfig) -> Self {
        Self { server }
    }
}
