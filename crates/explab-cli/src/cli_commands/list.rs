use clap::ValueEnum;
use colored::Colorize;

use crate::logging::EXPLAB_TEAL;
use crate::print_info;
use crate::registry::{self, PresetName};

pub(crate) fn handle_command() -> anyhow::Result<()> {
    print_info!("Available experiment presets:");
    for preset in PresetName::value_variants() {
        print_info!("{}", format_preset(preset));
    }
    Ok(())
}

fn format_preset(preset: &PresetName) -> String {
    format!(
        "  {} {}: {}",
        "-".custom_color(EXPLAB_TEAL),
        preset.to_string().bold(),
        registry::summary(preset)
    )
}
