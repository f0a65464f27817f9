use crate::utils::error::{IntakeError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "task-intake")]
#[command(about = "HTTP endpoint that validates tasks and records them in Notion")]
pub struct CliConfig {
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: String,

    #[arg(long, default_value = "/api/add-task")]
    pub route: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| IntakeError::InvalidConfigValue {
                field: "bind".to_string(),
                value: self.bind.clone(),
                reason: format!("{}", e),
            })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if !self.route.starts_with('/') {
            return Err(IntakeError::InvalidConfigValue {
                field: "route".to_string(),
                value: self.route.clone(),
                reason: "Route must start with '/'".to_string(),
            });
        }
        Ok(())
    }
}
