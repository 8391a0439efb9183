use comfy_table::{presets::UTF8_FULL, Table};
use wagerdeck_core::Result;

use crate::config::CliConfig;
use crate::store;

pub async fn handle_targets_command(config: &CliConfig) -> Result<()> {
    let state = store::load_state(&config.data_dir)?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Id", "Label", "Multiplier"]);

    for cell in &state.targets {
        table.add_row(vec![
            cell.id.clone(),
            cell.label.clone(),
            format!("{:.2}", cell.multiplier),
        ]);
    }

    println!("{}", table);
    Ok(())
}
