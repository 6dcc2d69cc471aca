//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Render a procedural sky cubemap to PNG faces.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "cubemap-demo", about = "Render a procedural sky cubemap")]
pub struct CliArgs {
    /// Face resolution in pixels.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Render faces on worker threads.
    #[arg(long)]
    pub parallel: Option<bool>,

    /// Output directory for face images.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Noise seed for the sky.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(resolution) = args.resolution {
            self.render.resolution = resolution;
        }
        if let Some(parallel) = args.parallel {
            self.render.parallel = parallel;
        }
        if let Some(ref dir) = args.output {
            self.output.directory = dir.clone();
        }
        if let Some(seed) = args.seed {
            self.sky.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            resolution: Some(128),
            output: Some(PathBuf::from("/tmp/sky")),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.render.resolution, 128);
        assert_eq!(config.output.directory, PathBuf::from("/tmp/sky"));
        // Non-overridden fields retain defaults
        assert!(!config.render.parallel);
        assert_eq!(config.sky.seed, 1);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "cubemap-demo",
            "--resolution",
            "64",
            "--parallel",
            "true",
            "--seed",
            "7",
        ]);
        assert_eq!(args.resolution, Some(64));
        assert_eq!(args.parallel, Some(true));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.log_level, None);
    }
}
