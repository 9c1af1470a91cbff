//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::prompt::PromptMode;

/// MindScribe - prompt builder and voice journaling sessions
#[derive(Parser, Debug)]
#[command(name = "mindscribe")]
#[command(version = "1.0.0")]
#[command(about = "Build text prompts and run timed voice journaling sessions")]
#[command(long_about = None)]
pub struct Cli {
    /// Prompt type to build
    #[arg(value_enum, default_value_t = ModeArg::Chat)]
    pub mode: ModeArg,

    /// Free text seeding the prompt
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,

    /// Diary title
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Diary body
    #[arg(long, value_name = "TEXT")]
    pub body: Option<String>,

    /// Music genre
    #[arg(long, value_name = "TEXT")]
    pub genre: Option<String>,

    /// Music tempo
    #[arg(long, value_name = "BPM")]
    pub bpm: Option<u32>,

    /// Music mood
    #[arg(long, value_name = "TEXT")]
    pub mood: Option<String>,

    /// Image subject
    #[arg(long, value_name = "TEXT")]
    pub subject: Option<String>,

    /// Image style
    #[arg(long, value_name = "TEXT")]
    pub style: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a timed journaling session
    Session(SessionArgs),
    /// Serve the current directory with dev endpoints
    Serve(ServeArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Session flags; unset values fall back to the config file, then defaults
#[derive(clap::Args, Debug, Clone)]
pub struct SessionArgs {
    /// Session length in minutes
    #[arg(short = 'm', long, value_name = "MIN")]
    pub minutes: Option<u64>,

    /// Seconds between spoken nudges
    #[arg(short = 'i', long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Language tag for voice transcription (e.g. en-US, ja-JP)
    #[arg(short = 'l', long, value_name = "TAG")]
    pub lang: Option<String>,

    /// Disable spoken feedback
    #[arg(long)]
    pub no_voice: bool,

    /// TTS voice name
    #[arg(long, value_name = "NAME")]
    pub voice_name: Option<String>,

    /// TTS speech rate in words per minute
    #[arg(long, value_name = "WPM")]
    pub rate: Option<u32>,

    /// Capture input by voice when a microphone is available
    #[arg(short = 'V', long)]
    pub voice_input: bool,

    /// Default path for /save without an argument
    #[arg(short = 's', long, value_name = "PATH")]
    pub save: Option<String>,

    /// Replace all audio I/O with deterministic simulated adapters
    #[arg(long)]
    pub simulate: bool,

    /// Utterance the simulated voice engine hears (repeatable)
    #[arg(long, value_name = "TEXT", requires = "simulate")]
    pub heard: Vec<String>,
}

/// Dev server flags
#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port to bind
    #[arg(short = 'p', long, default_value_t = 8000)]
    pub port: u16,

    /// Directory to serve
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: String,

    /// Page to open after binding
    #[arg(long, value_name = "PATH")]
    pub open: Option<String>,

    /// Don't open a browser tab
    #[arg(long)]
    pub no_browser: bool,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Prompt mode argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Chat,
    Diary,
    Music,
    Image,
}

impl From<ModeArg> for PromptMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Chat => PromptMode::Chat,
            ModeArg::Diary => PromptMode::Diary,
            ModeArg::Music => PromptMode::Music,
            ModeArg::Image => PromptMode::Image,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "minutes",
    "interval",
    "lang",
    "voice",
    "voice_name",
    "rate",
    "voice_input",
    "save_path",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["mindscribe"]);
        assert_eq!(cli.mode, ModeArg::Chat);
        assert!(cli.text.is_empty());
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_mode_and_seed() {
        let cli = Cli::parse_from(["mindscribe", "music", "late", "night"]);
        assert_eq!(cli.mode, ModeArg::Music);
        assert_eq!(cli.text, vec!["late", "night"]);
    }

    #[test]
    fn cli_parses_payload_flags() {
        let cli = Cli::parse_from([
            "mindscribe", "image", "--subject", "cat", "--style", "cartoon",
        ]);
        assert_eq!(cli.subject.as_deref(), Some("cat"));
        assert_eq!(cli.style.as_deref(), Some("cartoon"));
    }

    #[test]
    fn cli_parses_session_flags() {
        let cli = Cli::parse_from([
            "mindscribe", "session", "-m", "5", "-i", "30", "--voice-input",
        ]);
        let Some(Commands::Session(args)) = cli.command else {
            panic!("Expected session subcommand");
        };
        assert_eq!(args.minutes, Some(5));
        assert_eq!(args.interval, Some(30));
        assert!(args.voice_input);
        assert!(!args.simulate);
    }

    #[test]
    fn cli_parses_simulate_with_heard() {
        let cli = Cli::parse_from([
            "mindscribe", "session", "--simulate", "--heard", "hello", "--heard", "/done",
        ]);
        let Some(Commands::Session(args)) = cli.command else {
            panic!("Expected session subcommand");
        };
        assert!(args.simulate);
        assert_eq!(args.heard, vec!["hello", "/done"]);
    }

    #[test]
    fn heard_requires_simulate() {
        assert!(Cli::try_parse_from(["mindscribe", "session", "--heard", "x"]).is_err());
    }

    #[test]
    fn cli_parses_serve() {
        let cli = Cli::parse_from(["mindscribe", "serve", "-p", "9000", "--no-browser"]);
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("Expected serve subcommand");
        };
        assert_eq!(args.port, 9000);
        assert!(args.no_browser);
        assert_eq!(args.root, ".");
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["mindscribe", "config", "set", "minutes", "20"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "minutes");
            assert_eq!(value, "20");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn mode_arg_converts_to_prompt_mode() {
        assert_eq!(PromptMode::from(ModeArg::Diary), PromptMode::Diary);
        assert_eq!(PromptMode::from(ModeArg::Chat), PromptMode::Chat);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("minutes"));
        assert!(is_valid_config_key("save_path"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
