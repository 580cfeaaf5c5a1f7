use std::path::PathBuf;

use clap::Parser;
use resan_core::ConfigError;
use resan_core::ConfigLoader;
use resan_core::ResanConfig;

/// Self-assessment of a school library's development.
#[derive(Parser, Debug, Default)]
#[command(name = "biblioteksresan", version)]
pub struct Cli {
    /// School name to start with; shown in the summary and used in export
    /// file names.
    #[arg(long = "school", value_name = "NAME")]
    pub school: Option<String>,

    /// Directory exported PDFs are written to.
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Directory holding `config.toml` and the log directory.
    #[arg(long, value_name = "DIR")]
    pub home: Option<PathBuf>,
}

impl Cli {
    /// Resolve configuration with these flags as the top layer.
    pub fn load_config(&self) -> Result<ResanConfig, ConfigError> {
        let mut loader = ConfigLoader::new();
        if let Some(home) = &self.home {
            loader = loader.with_home(home.clone());
        }
        Ok(self.apply_overrides(loader.load()?))
    }

    fn apply_overrides(&self, mut config: ResanConfig) -> ResanConfig {
        if let Some(dir) = &self.export_dir {
            config.export_dir = dir.clone();
        }
        if let Some(school) = &self.school {
            config.school_name = Some(school.clone());
        }
        config
    }
}
