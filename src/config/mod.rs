use crate::core::{Backend, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{validate_command_token, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

const DEFAULT_PYTHON: &str = if cfg!(windows) { "python" } else { "python3" };

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mdpipe")]
#[command(about = "Convert files named on stdin to markdown, NUL-delimited on stdout")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value_t = Backend::Native)]
    pub backend: Backend,

    #[arg(
        long,
        default_value = DEFAULT_PYTHON,
        help = "Python interpreter used by the markitdown backend"
    )]
    pub python: String,

    #[arg(long, help = "Fail instead of installing markitdown when it is missing")]
    pub no_install: bool,

    #[arg(long, help = "Forward converter diagnostics instead of silencing them")]
    pub loud: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn python_command(&self) -> &str {
        &self.python
    }

    fn auto_install(&self) -> bool {
        !self.no_install
    }

    fn suppress_warnings(&self) -> bool {
        !self.loud
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_command_token("python", &self.python)
    }
}
