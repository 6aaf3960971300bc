//! `config show`: display the effective configuration.

use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::Result;
use crate::types::Field;

/// Show the configuration the other commands would run with
pub fn cmd_config_show(config: &Config, output_json: bool) -> Result<()> {
    config_output(config)?.print(output_json)
}

fn config_output(config: &Config) -> Result<CommandOutput> {
    Ok(CommandOutput::new(json!({
        "base_url": config.base_url,
        "results": config.results,
        "fields": config.fields,
        "inc": Field::join(&config.fields),
    }))
    .with_text(config.to_yaml()?.trim_end()))
}
