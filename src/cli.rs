// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::DemoConfig;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    /// Phong-lit cube with an orbiting diamond
    LitCube,
    /// Lit Rubik's cube with a light and camera panel
    Rubik,
    /// Unlit Rubik's cube, keyboard only
    RubikFlat,
    /// Catch the falling spheres
    Catch,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "cube-demos")]
#[command(about = "Real-time cube rendering demos", long_about = None)]
pub struct Cli {
    /// Demo to run
    #[arg(long, value_enum, default_value_t = DemoKind::LitCube)]
    pub demo: DemoKind,

    /// Disable the GUI overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// JSON file with tuning values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// OBJ mesh used for the falling objects in the catch demo
    #[arg(long)]
    pub mesh: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,
}

impl Cli {
    /// Load the config file if one was given, then apply command-line overrides
    pub fn resolve_config(&self) -> anyhow::Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_lit_cube_with_ui() {
        let cli = Cli::parse_from(["cube-demos"]);
        assert_eq!(cli.demo, DemoKind::LitCube);
        assert!(!cli.no_ui);
    }

    #[test]
    fn demo_names_are_kebab_case() {
        let cli = Cli::parse_from(["cube-demos", "--demo", "rubik-flat", "--no-ui"]);
        assert_eq!(cli.demo, DemoKind::RubikFlat);
        assert!(cli.no_ui);
    }

    #[test]
    fn size_flags_override_config() {
        let cli = Cli::parse_from(["cube-demos", "--width", "300"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.window.width, 300);
        assert_eq!(config.window.height, DemoConfig::default().window.height);
    }
}
