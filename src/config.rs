use crate::{catalog::DEFAULT_BASE_URL, fs::DEFAULT_OUTPUT_DIR};
use seahorse::{Flag, FlagType};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output_dir: PathBuf,
    /// Default for the `baseUrl` variable. Never substituted into URLs.
    pub base_url: String,
    pub stdout: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            stdout: false,
        }
    }
}

impl Config {
    pub fn flags() -> Vec<Flag> {
        vec![
            Flag::new("output", FlagType::String)
                .description("Directory the collection is written to [default: target/postman]")
                .alias("o"),
            Flag::new("base-url", FlagType::String)
                .description("Default value of the baseUrl variable [default: http://localhost:8080]")
                .alias("b"),
            Flag::new("stdout", FlagType::Bool)
                .description("Print the collection instead of writing it"),
        ]
    }

    pub fn from_context(c: &seahorse::Context) -> Self {
        let default = Self::default();
        Self {
            output_dir: c
                .string_flag("output")
                .map(PathBuf::from)
                .unwrap_or(default.output_dir),
            base_url: c.string_flag("base-url").unwrap_or(default.base_url),
            stdout: c.bool_flag("stdout"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("target/postman"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(!config.stdout);
    }

    #[rstest]
    fn declares_every_flag() {
        assert_eq!(Config::flags().len(), 3);
    }
}
