//! Command-line interface for the cowpoke utility
//!
//! Renders messages in speech bubbles, optionally above a piece of art, and
//! rotates through the built-in jokes the way the web view did.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use cowpoke::core::logging::init_logging;
use cowpoke::gallery::{builtin_catalog, load_catalog, Rotation, Showcase, JOKES};
use cowpoke::{compose_with_width, BubbleRenderer, DEFAULT_WIDTH};

/// Cowpoke - ASCII speech bubbles over ASCII art
#[derive(Parser)]
#[command(name = "cowpoke")]
#[command(about = "Print messages in ASCII speech bubbles above ASCII art")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a message in a speech bubble
    Say {
        /// Message to render; read from --input or stdin when omitted
        message: Option<String>,

        /// Input file containing the message (use - for stdin)
        #[arg(short, long, conflicts_with = "message")]
        input: Option<PathBuf>,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap width; values below 10 are raised to 10
        #[arg(short, long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
        width: i64,

        /// File holding art to print under the bubble
        #[arg(long)]
        art: Option<PathBuf>,
    },

    /// Show the next joke and art in the rotation
    Show {
        /// JSON catalog of art (array of strings); the built-in art when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Index shown last time; -1 starts from the beginning
        #[arg(long, default_value_t = Rotation::START, allow_negative_numbers = true)]
        previous: i64,

        /// Wrap width; values below 10 are raised to 10
        #[arg(short, long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
        width: i64,
    },

    /// List the built-in jokes
    Jokes {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Main CLI application
pub struct CowpokeApp;

impl CowpokeApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("COWPOKE_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("COWPOKE_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Cowpoke v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Say {
                message,
                input,
                output,
                width,
                art,
            } => self.say_command(message, input, output, width, art, cli.verbose),
            Commands::Show {
                catalog,
                previous,
                width,
            } => self.show_command(catalog, previous, width, cli.verbose),
            Commands::Jokes { json } => self.jokes_command(json),
        }
    }

    /// Handle the say command
    fn say_command(
        &self,
        message: Option<String>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        width: i64,
        art: Option<PathBuf>,
        verbose: bool,
    ) -> Result<()> {
        let message = match message {
            Some(message) => message,
            None => self.read_input(input)?,
        };

        if verbose {
            eprintln!("Read {} bytes of message", message.len());
        }

        let rendered = self.render_message(&message, width, art)?;
        self.write_output(output, &rendered)
    }

    /// Render `message`, composing it with the art file when one is given
    pub fn render_message(
        &self,
        message: &str,
        width: i64,
        art: Option<PathBuf>,
    ) -> Result<String> {
        match art {
            Some(path) => {
                let art = fs::read_to_string(&path).map_err(|e| {
                    anyhow!("Failed to read art file '{}': {}", path.display(), e)
                })?;
                let art = art.trim_end_matches(['\r', '\n']);
                debug!(art_len = art.len(), "Composing with art file");
                Ok(compose_with_width(message, art, width))
            }
            None => Ok(BubbleRenderer::with_width(width).render(message)),
        }
    }

    /// Handle the show command
    fn show_command(
        &self,
        catalog: Option<PathBuf>,
        previous: i64,
        width: i64,
        verbose: bool,
    ) -> Result<()> {
        let arts = match catalog {
            Some(ref path) => load_catalog(path),
            None => builtin_catalog(),
        };
        let showcase = Showcase::with_jokes(arts).with_width(width);
        let mut rotation = Rotation::from_index(previous);

        let (index, text) = showcase
            .next(&mut rotation)
            .ok_or_else(|| anyhow!("Nothing to show: the art catalog is empty"))?;

        info!(index, "Rendered showcase entry");
        if verbose {
            eprintln!("Index: {}", index);
        }

        self.write_output(None, &text)
    }

    /// Handle the jokes command
    fn jokes_command(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(JOKES)?);
        } else {
            for (index, joke) in JOKES.iter().enumerate() {
                println!("{:>2}. {}", index, joke);
            }
        }
        Ok(())
    }

    /// Read input from file or stdin, without the final line terminator
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        let mut content = match input {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::read_to_string(&path).map_err(|e| {
                    anyhow!("Failed to read input file '{}': {}", path.display(), e)
                })?
            }
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                content
            }
        };

        if content.ends_with('\n') {
            content.pop();
            if content.ends_with('\r') {
                content.pop();
            }
        }
        Ok(content)
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

impl Default for CowpokeApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use cowpoke::render_bubble;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing_say_command() {
        let args = vec!["cowpoke", "say", "Howdy", "--width", "20", "--art", "cow.txt"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Say {
                message,
                input,
                output,
                width,
                art,
            } => {
                assert_eq!(message.as_deref(), Some("Howdy"));
                assert!(input.is_none());
                assert!(output.is_none());
                assert_eq!(width, 20);
                assert_eq!(art.unwrap().to_string_lossy(), "cow.txt");
            }
            _ => panic!("Expected Say command"),
        }
    }

    #[test]
    fn test_cli_parsing_negative_width() {
        let cli = Cli::try_parse_from(["cowpoke", "say", "hi", "-w", "-3"]).unwrap();
        match cli.command {
            Commands::Say { width, .. } => assert_eq!(width, -3),
            _ => panic!("Expected Say command"),
        }
    }

    #[test]
    fn test_cli_parsing_message_conflicts_with_input() {
        let result = Cli::try_parse_from(["cowpoke", "say", "hi", "--input", "msg.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_show_defaults() {
        let cli = Cli::try_parse_from(["cowpoke", "show"]).unwrap();
        match cli.command {
            Commands::Show {
                catalog,
                previous,
                width,
            } => {
                assert!(catalog.is_none());
                assert_eq!(previous, -1);
                assert_eq!(width, DEFAULT_WIDTH);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_parsing_jokes_command() {
        let cli = Cli::try_parse_from(["cowpoke", "jokes", "--json"]).unwrap();
        match cli.command {
            Commands::Jokes { json } => assert!(json),
            _ => panic!("Expected Jokes command"),
        }
    }

    #[test]
    fn test_verbose_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["cowpoke", "show", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_render_message_without_art() {
        let app = CowpokeApp::new();
        let rendered = app.render_message("Howdy", 42, None).unwrap();
        assert_eq!(rendered, render_bubble("Howdy", 42));
    }

    #[test]
    fn test_render_message_keeps_trailing_break() {
        let app = CowpokeApp::new();
        let rendered = app.render_message("a\n", 42, None).unwrap();
        assert_eq!(rendered, render_bubble("a\n", 42));
        assert!(rendered.contains("< a >\n<   >"));
    }

    #[test]
    fn test_render_message_with_art() {
        let app = CowpokeApp::new();
        let dir = tempdir().unwrap();
        let art_path = dir.path().join("cow.txt");
        fs::write(&art_path, "  (oo)\n").unwrap();

        let rendered = app.render_message("Moo", 42, Some(art_path)).unwrap();
        assert_eq!(rendered, format!("{}\n  (oo)", render_bubble("Moo", 42)));
    }

    #[test]
    fn test_render_message_missing_art() {
        let app = CowpokeApp::new();
        let result = app.render_message("Moo", 42, Some(PathBuf::from("/no/such/art.txt")));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_input_from_file() {
        let app = CowpokeApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("message.txt");
        fs::write(&file_path, "Yeehaw").unwrap();

        assert_eq!(app.read_input(Some(file_path)).unwrap(), "Yeehaw");
    }

    #[test]
    fn test_read_input_drops_final_newline_only() {
        let app = CowpokeApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("message.txt");

        fs::write(&file_path, "Yeehaw\r\n").unwrap();
        assert_eq!(app.read_input(Some(file_path.clone())).unwrap(), "Yeehaw");

        fs::write(&file_path, "Yeehaw\n\n").unwrap();
        assert_eq!(app.read_input(Some(file_path)).unwrap(), "Yeehaw\n");
    }

    #[test]
    fn test_log_formats_understood_by_library() {
        use clap::ValueEnum;
        use cowpoke::core::logging::LogFormat as LibraryLogFormat;
        use std::str::FromStr;

        for format in LogFormat::value_variants() {
            assert!(LibraryLogFormat::from_str(format.as_str()).is_ok());
        }
    }

    #[test]
    fn test_write_output_to_file() {
        let app = CowpokeApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("output.txt");

        app.write_output(Some(file_path.clone()), "Test output").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "Test output");
    }

    #[test]
    fn test_show_empty_catalog_fails() {
        let app = CowpokeApp::new();
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("arts.json");
        fs::write(&catalog, "[]").unwrap();

        assert!(app.show_command(Some(catalog), -1, 42, false).is_err());
    }

    #[test]
    fn test_jokes_command() {
        let app = CowpokeApp::new();
        assert!(app.jokes_command(true).is_ok());
        assert!(app.jokes_command(false).is_ok());
    }
}
