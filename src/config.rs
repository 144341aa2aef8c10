use crate::chain::LogChain;
use crate::error::ConfigError;
use crate::sink::{ConsoleFormat, ConsoleSink, FileSink};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log file written by the file sink
    #[arg(long, env = "RASK_LOG_FILE", default_value = "logs/rask.log")]
    pub file_path: PathBuf,

    /// Maximum lines kept in the log file. Applies to every file sink in the process.
    #[arg(long, env = "RASK_LOG_MAX_LINES")]
    pub max_lines: Option<u64>,

    /// Console output format
    #[arg(long, env = "RASK_CONSOLE_FORMAT", value_enum, default_value_t = ConsoleFormat::Plain)]
    pub console_format: ConsoleFormat,

    /// Do not echo entries to stdout
    #[arg(long)]
    pub no_console: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Log file path cannot be empty".to_string(),
            ));
        }

        if self.max_lines == Some(0) {
            return Err(ConfigError::InvalidConfig(
                "Max lines must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Build `[console, file]` (console omitted with `no_console`).
    ///
    /// A configured `max_lines` replaces the shared file sink threshold.
    pub fn build_chain(&self) -> Result<LogChain, ConfigError> {
        self.validate()?;

        let mut builder = LogChain::builder();
        if !self.no_console {
            builder = builder.sink(ConsoleSink::new().format(self.console_format));
        }

        let file_sink = match self.max_lines {
            Some(max_lines) => FileSink::with_max_lines(&self.file_path, max_lines),
            None => FileSink::new(&self.file_path),
        };

        Ok(builder.sink(file_sink).build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{DEFAULT_MAX_LINES, max_lines, set_max_lines};
    use serial_test::serial;

    fn parse(args: &[&str]) -> Config {
        let argv = std::iter::once("rask-log-chain").chain(args.iter().copied());
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    #[serial]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.file_path, PathBuf::from("logs/rask.log"));
        assert_eq!(config.max_lines, None);
        assert_eq!(config.console_format, ConsoleFormat::Plain);
        assert!(!config.no_console);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_cli_arguments() {
        let config = parse(&[
            "--file-path",
            "/var/log/app.log",
            "--max-lines",
            "25",
            "--console-format",
            "json",
            "--no-console",
        ]);
        assert_eq!(config.file_path, PathBuf::from("/var/log/app.log"));
        assert_eq!(config.max_lines, Some(25));
        assert_eq!(config.console_format, ConsoleFormat::Json);
        assert!(config.no_console);
    }

    #[test]
    #[serial]
    fn test_env_fallback() {
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            std::env::set_var("RASK_LOG_MAX_LINES", "7");
        }
        let config = parse(&[]);
        unsafe {
            std::env::remove_var("RASK_LOG_MAX_LINES");
        }
        assert_eq!(config.max_lines, Some(7));
    }

    #[test]
    #[serial]
    fn test_zero_max_lines_fails() {
        let config = parse(&["--max-lines", "0"]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Max lines must be greater than 0"));
    }

    #[test]
    #[serial]
    fn test_empty_path_fails() {
        let mut config = parse(&[]);
        config.file_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_build_chain_order_and_threshold() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let config = parse(&["--file-path", path.to_str().unwrap(), "--max-lines", "12"]);

        let chain = config.build_chain().unwrap();

        let names: Vec<&str> = chain.sinks().map(|sink| sink.name()).collect();
        assert_eq!(names, vec!["console", "file"]);
        assert_eq!(max_lines(), 12);
        set_max_lines(DEFAULT_MAX_LINES);
    }

    #[test]
    #[serial]
    fn test_build_chain_without_console() {
        let config = parse(&["--no-console"]);
        let chain = config.build_chain().unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.sink(0).unwrap().name(), "file");
    }
}
