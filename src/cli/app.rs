//! CLI application orchestration

use std::path::PathBuf;

use crate::application::ports::{ConfigStore, LineInput};
use crate::application::SessionRunner;
use crate::domain::config::AppConfig;
use crate::domain::prompt::{build_prompt, PromptPayload};
use crate::domain::session::SessionConfig;
use crate::infrastructure::{
    create_audio_cue, create_speech, create_voice_input, SimulatedSpeech, StdinLineInput,
    XdgConfigStore,
};
use crate::web::{self, ServeOptions};

use super::args::{Cli, Commands, ServeArgs, SessionArgs};
use super::config_cmd::handle_config_command;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE_ERROR: i32 = 2;

/// Run the CLI application
pub async fn run(cli: Cli) -> i32 {
    let presenter = Presenter::new();

    match cli.command {
        Some(Commands::Session(args)) => run_session(args, &presenter).await,
        Some(Commands::Serve(args)) => run_serve(args, &presenter).await,
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            match handle_config_command(action, &store, &presenter).await {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    presenter.error(&e.to_string());
                    EXIT_USAGE_ERROR
                }
            }
        }
        None => run_prompt(cli, &presenter).await,
    }
}

/// Build and print a prompt from the top-level arguments.
///
/// Chat mode with no seed text and no payload flags collects lines
/// interactively until EOF, then renders them as one block.
async fn run_prompt(cli: Cli, presenter: &Presenter) -> i32 {
    let mut payload = PromptPayload {
        seed: non_empty(cli.text.join(" ")),
        title: cli.title,
        body: cli.body,
        genre: cli.genre,
        bpm: cli.bpm,
        mood: cli.mood,
        subject: cli.subject,
        style: cli.style,
        ..Default::default()
    };

    let mode = cli.mode.into();

    if payload.seed.is_none() && payload_is_empty(&payload) {
        presenter.info("Enter prompt lines, Ctrl-D to finish:");
        payload.lines = match collect_lines().await {
            Ok(lines) => lines,
            Err(e) => {
                presenter.error(&format!("Failed to read input: {}", e));
                return EXIT_ERROR;
            }
        };
    }

    presenter.output(&build_prompt(mode, &payload));
    EXIT_SUCCESS
}

fn payload_is_empty(payload: &PromptPayload) -> bool {
    payload.title.is_none()
        && payload.body.is_none()
        && payload.genre.is_none()
        && payload.bpm.is_none()
        && payload.mood.is_none()
        && payload.subject.is_none()
        && payload.style.is_none()
}

async fn collect_lines() -> std::io::Result<Vec<String>> {
    let mut input = StdinLineInput::new();
    let mut lines = Vec::new();
    while let Some(line) = input.next_line().await? {
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Run a timed journaling session
async fn run_session(args: SessionArgs, presenter: &Presenter) -> i32 {
    let store = XdgConfigStore::new();
    let cfg = match load_merged_config(&args, &store).await {
        Ok(cfg) => cfg,
        Err(e) => {
            presenter.error(&e.to_string());
            return EXIT_ERROR;
        }
    };

    presenter.info(&format!(
        "Session: {} min, nudge every {}s ({})",
        cfg.minutes, cfg.interval_secs, cfg.lang
    ));

    let transcript = if args.simulate {
        // Keep a handle on the recording adapter so spoken feedback can be
        // echoed after the run.
        let speech = SimulatedSpeech::new();
        let cue = create_audio_cue(cfg.use_voice, true);
        let heard = if args.heard.is_empty() {
            vec!["/done".to_string()]
        } else {
            args.heard.clone()
        };
        let voice = create_voice_input(Some(heard));
        let lines = StdinLineInput::new();

        let mut runner = SessionRunner::new(speech.clone(), cue, voice, lines);
        let transcript = runner.run(&cfg).await;

        for line in speech.spoken() {
            presenter.info(&format!("spoke: {}", line));
        }
        transcript
    } else {
        let speech = create_speech(
            cfg.use_voice,
            false,
            cfg.voice_name.clone(),
            cfg.rate,
        );
        let cue = create_audio_cue(cfg.use_voice, false);
        let voice = create_voice_input(None);
        let lines = StdinLineInput::new();

        let mut runner = SessionRunner::new(speech, cue, voice, lines);
        runner.run(&cfg).await
    };

    if transcript.is_empty() {
        presenter.warn("Nothing captured this session.");
        return EXIT_SUCCESS;
    }

    presenter.divider("Transcript");
    for entry in transcript.entries() {
        presenter.output(entry);
    }

    EXIT_SUCCESS
}

/// Resolve session settings with CLI flags winning over the config file,
/// and the config file winning over built-in defaults.
async fn load_merged_config(
    args: &SessionArgs,
    store: &impl ConfigStore,
) -> Result<SessionConfig, crate::domain::error::ConfigError> {
    let from_cli = AppConfig {
        minutes: args.minutes,
        interval: args.interval,
        lang: args.lang.clone(),
        voice: if args.no_voice { Some(false) } else { None },
        voice_name: args.voice_name.clone(),
        rate: args.rate,
        voice_input: if args.voice_input { Some(true) } else { None },
        save_path: args.save.clone(),
    };

    let from_file = store.load().await?;

    // Simulated runs never reach for a real microphone.
    let mut cfg = from_cli.merge(from_file).into_session_config();
    if args.simulate {
        cfg.use_voice_input = true;
    }

    Ok(cfg)
}

/// Run the local dev server
async fn run_serve(args: ServeArgs, presenter: &Presenter) -> i32 {
    tracing_subscriber::fmt::init();

    let root = PathBuf::from(&args.root);
    if !root.is_dir() {
        presenter.error(&format!("Not a directory: {}", root.display()));
        return EXIT_USAGE_ERROR;
    }

    presenter.info(&format!(
        "Serving {} on http://localhost:{}",
        root.display(),
        args.port
    ));

    let options = ServeOptions {
        port: args.port,
        root,
        open_path: args.open,
        no_browser: args.no_browser,
    };

    match web::serve(options).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            presenter.error(&format!("Server failed: {}", e));
            EXIT_ERROR
        }
    }
}
