//! Timed journaling session use case
//!
//! Drives a time-boxed, command-interruptible capture loop producing an
//! ordered transcript. Input comes from voice capture when configured and
//! available, otherwise from a blocking line source. All spoken/chimed
//! feedback is best-effort; adapter failures never end the session.

use std::path::PathBuf;
use std::time::Instant;

use crate::domain::command::{parse_command, CommandName};
use crate::domain::session::{IntervalTimer, SessionConfig, Transcript};

use super::ports::{AudioCue, AudioCueType, LineInput, ListenOptions, Speech, VoiceInput};

/// Spoken feedback lines
const MSG_OPENING: &str =
    "Session starting. When you're ready, bring your attention to your breath.";
const MSG_NUDGE: &str =
    "Whenever you're ready, say what you're noticing. Slash done ends the session.";
const MSG_PAUSED: &str = "Pausing. Say slash resume to continue.";
const MSG_RESUMED: &str = "Resuming.";
const MSG_READ_EMPTY: &str = "Nothing captured yet.";
const MSG_UNDONE: &str = "Removed the last entry.";
const MSG_UNDO_EMPTY: &str = "Nothing to undo.";
const MSG_SAVED: &str = "Saved.";
const MSG_SAVE_FAILED: &str = "Saving failed.";
const MSG_SAVE_NEEDS_PATH: &str = "Tell me where to save, with slash save and a path.";
const MSG_HELP: &str =
    "Available commands: pause, resume, skip, read, undo, save, and done.";
const MSG_CAPTURED: &str = "Got it.";
const MSG_CLOSING: &str = "Session complete. Well done.";

/// Timestamp prefix for captured entries (local time, second precision)
fn now_stamp() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Runs one journaling session over injected port implementations.
pub struct SessionRunner<S, C, V, L>
where
    S: Speech,
    C: AudioCue,
    V: VoiceInput,
    L: LineInput,
{
    speech: S,
    cue: C,
    voice: V,
    lines: L,
}

impl<S, C, V, L> SessionRunner<S, C, V, L>
where
    S: Speech,
    C: AudioCue,
    V: VoiceInput,
    L: LineInput,
{
    pub fn new(speech: S, cue: C, voice: V, lines: L) -> Self {
        Self {
            speech,
            cue,
            voice,
            lines,
        }
    }

    /// Run the session to completion and return the captured transcript.
    ///
    /// Exits on `/done`, input exhaustion, or the configured deadline. The
    /// closing chime and remark are emitted exactly once on every path.
    pub async fn run(&mut self, cfg: &SessionConfig) -> Transcript {
        let mut transcript = Transcript::new();
        let mut timer = IntervalTimer::start(Instant::now(), cfg.total(), cfg.interval());
        let mut paused = false;

        self.say(MSG_OPENING).await;
        self.chime(AudioCueType::SessionStart).await;

        while !timer.expired(Instant::now()) {
            // Interval prompt fires before input is consumed, so a due
            // nudge isn't starved by a slow typist.
            let now = Instant::now();
            if !paused && timer.prompt_due(now) {
                self.chime(AudioCueType::IntervalPrompt).await;
                self.say(MSG_NUDGE).await;
                timer.advance(now);
            }

            let text = self.capture_turn(cfg).await;
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            let Some(cmd) = parse_command(text) else {
                // Content is captured even while paused; pausing only
                // suppresses interval prompts.
                transcript.push(format!("[{}] {}", now_stamp(), text));
                self.say(MSG_CAPTURED).await;
                continue;
            };

            match cmd.name {
                CommandName::Pause => {
                    paused = true;
                    self.say(MSG_PAUSED).await;
                }
                CommandName::Resume => {
                    paused = false;
                    timer.rearm(Instant::now());
                    self.say(MSG_RESUMED).await;
                }
                CommandName::Skip => {
                    timer.rearm(Instant::now());
                    self.chime(AudioCueType::IntervalPrompt).await;
                }
                CommandName::Read => {
                    if transcript.is_empty() {
                        self.say(MSG_READ_EMPTY).await;
                    } else {
                        self.say(&transcript.joined()).await;
                    }
                }
                CommandName::Undo => {
                    if transcript.undo().is_some() {
                        self.say(MSG_UNDONE).await;
                    } else {
                        self.say(MSG_UNDO_EMPTY).await;
                    }
                }
                CommandName::Save => {
                    self.handle_save(cmd.arg, cfg, &transcript).await;
                }
                CommandName::Done => break,
                CommandName::Help => {
                    self.say(MSG_HELP).await;
                }
            }
        }

        self.chime(AudioCueType::SessionEnd).await;
        self.say(MSG_CLOSING).await;
        transcript
    }

    /// Acquire one line of input: a voice utterance when configured and an
    /// engine is present, otherwise a typed line. An exhausted text source
    /// becomes an implicit `/done`.
    async fn capture_turn(&mut self, cfg: &SessionConfig) -> String {
        if cfg.use_voice_input && self.voice.is_available() {
            let opts = ListenOptions {
                lang: cfg.lang.clone(),
                ..Default::default()
            };
            return self.voice.listen_once(&opts).await.unwrap_or_default();
        }

        match self.lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) | Err(_) => "/done".to_string(),
        }
    }

    async fn handle_save(
        &self,
        arg: Option<String>,
        cfg: &SessionConfig,
        transcript: &Transcript,
    ) {
        let path = arg.map(PathBuf::from).or_else(|| cfg.save_path.clone());
        let Some(path) = path else {
            self.say(MSG_SAVE_NEEDS_PATH).await;
            return;
        };

        match tokio::fs::write(&path, transcript.joined()).await {
            Ok(()) => self.say(MSG_SAVED).await,
            Err(_) => self.say(MSG_SAVE_FAILED).await,
        }
    }

    async fn say(&self, text: &str) {
        let _ = self.speech.speak(text).await;
    }

    async fn chime(&self, cue_type: AudioCueType) {
        let _ = self.cue.play(cue_type).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{AudioCueError, SpeechError, VoiceError};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    // Mock implementations for testing

    #[derive(Clone, Default)]
    struct RecordingSpeech {
        spoken: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingSpeech {
        fn lines(&self) -> Vec<String> {
            self.spoken.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Speech for RecordingSpeech {
        async fn speak(&self, text: &str) -> Result<bool, SpeechError> {
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(true)
        }
    }

    #[derive(Clone, Default)]
    struct CountingCue {
        played: Arc<Mutex<Vec<AudioCueType>>>,
    }

    impl CountingCue {
        fn count(&self, cue_type: AudioCueType) -> usize {
            self.played
                .lock()
                .unwrap()
                .iter()
                .filter(|c| **c == cue_type)
                .count()
        }
    }

    #[async_trait]
    impl AudioCue for CountingCue {
        async fn play(&self, cue_type: AudioCueType) -> Result<bool, AudioCueError> {
            self.played.lock().unwrap().push(cue_type);
            Ok(true)
        }
    }

    struct NoVoice;

    #[async_trait]
    impl VoiceInput for NoVoice {
        fn is_available(&self) -> bool {
            false
        }

        async fn listen_once(&self, _opts: &ListenOptions) -> Result<String, VoiceError> {
            Err(VoiceError::NoInputDevice)
        }
    }

    struct ScriptedVoice {
        utterances: Mutex<VecDeque<String>>,
    }

    impl ScriptedVoice {
        fn new(utterances: &[&str]) -> Self {
            Self {
                utterances: Mutex::new(utterances.iter().map(|s| s.to_string()).collect()),
            }
        }
    }

    #[async_trait]
    impl VoiceInput for ScriptedVoice {
        fn is_available(&self) -> bool {
            true
        }

        async fn listen_once(&self, _opts: &ListenOptions) -> Result<String, VoiceError> {
            Ok(self
                .utterances
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| "/done".to_string()))
        }
    }

    struct ScriptedLines {
        lines: VecDeque<String>,
    }

    impl ScriptedLines {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl LineInput for ScriptedLines {
        async fn next_line(&mut self) -> std::io::Result<Option<String>> {
            Ok(self.lines.pop_front())
        }
    }

    fn runner(
        lines: &[&str],
    ) -> (
        SessionRunner<RecordingSpeech, CountingCue, NoVoice, ScriptedLines>,
        RecordingSpeech,
        CountingCue,
    ) {
        let speech = RecordingSpeech::default();
        let cue = CountingCue::default();
        let r = SessionRunner::new(speech.clone(), cue.clone(), NoVoice, ScriptedLines::new(lines));
        (r, speech, cue)
    }

    fn quiet_config() -> SessionConfig {
        SessionConfig {
            minutes: 60,
            interval_secs: 100_000,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn done_returns_transcript_accumulated_so_far() {
        let (mut r, _speech, _cue) = runner(&["first thought", "second thought", "/done", "never"]);
        let transcript = r.run(&quiet_config()).await;

        assert_eq!(transcript.len(), 2);
        assert!(transcript.entries()[0].ends_with("first thought"));
        assert!(transcript.entries()[1].ends_with("second thought"));
    }

    #[tokio::test]
    async fn entries_carry_a_timestamp_prefix() {
        let (mut r, _speech, _cue) = runner(&["hello", "/done"]);
        let transcript = r.run(&quiet_config()).await;

        let entry = &transcript.entries()[0];
        assert!(entry.starts_with('['));
        assert!(entry.contains("] hello"));
        // [YYYY-MM-DDTHH:MM:SS] is 21 chars of prefix
        assert_eq!(&entry[11..12], "T");
    }

    #[tokio::test]
    async fn input_exhaustion_acts_as_done() {
        let (mut r, speech, cue) = runner(&["only line"]);
        let transcript = r.run(&quiet_config()).await;

        assert_eq!(transcript.len(), 1);
        assert_eq!(cue.count(AudioCueType::SessionEnd), 1);
        assert!(speech.lines().contains(&MSG_CLOSING.to_string()));
    }

    #[tokio::test]
    async fn undo_on_empty_transcript_is_harmless() {
        let (mut r, speech, _cue) = runner(&["/undo", "/done"]);
        let transcript = r.run(&quiet_config()).await;

        assert!(transcript.is_empty());
        assert!(speech.lines().contains(&MSG_UNDO_EMPTY.to_string()));
    }

    #[tokio::test]
    async fn undo_removes_latest_entry() {
        let (mut r, speech, _cue) = runner(&["keep", "drop", "/undo", "/done"]);
        let transcript = r.run(&quiet_config()).await;

        assert_eq!(transcript.len(), 1);
        assert!(transcript.entries()[0].ends_with("keep"));
        assert!(speech.lines().contains(&MSG_UNDONE.to_string()));
    }

    #[tokio::test]
    async fn read_speaks_joined_transcript_or_fallback() {
        let (mut r, speech, _cue) = runner(&["/read", "a line", "/read", "/done"]);
        r.run(&quiet_config()).await;

        let spoken = speech.lines();
        assert!(spoken.contains(&MSG_READ_EMPTY.to_string()));
        assert!(spoken.iter().any(|s| s.ends_with("a line")));
    }

    #[tokio::test]
    async fn unknown_command_speaks_help_and_captures_nothing() {
        let (mut r, speech, _cue) = runner(&["/export all", "/done"]);
        let transcript = r.run(&quiet_config()).await;

        assert!(transcript.is_empty());
        assert!(speech.lines().contains(&MSG_HELP.to_string()));
    }

    #[tokio::test]
    async fn empty_lines_are_ignored() {
        let (mut r, _speech, _cue) = runner(&["", "   ", "real", "/done"]);
        let transcript = r.run(&quiet_config()).await;
        assert_eq!(transcript.len(), 1);
    }

    #[tokio::test]
    async fn pause_suppresses_interval_prompts_but_not_capture() {
        // Zero interval: every running iteration would emit a prompt.
        let cfg = SessionConfig {
            minutes: 60,
            interval_secs: 0,
            ..Default::default()
        };
        let (mut r, _speech, cue) = runner(&["/pause", "still here", "/done"]);
        let transcript = r.run(&cfg).await;

        // Only the first iteration (before /pause was consumed) prompts.
        assert_eq!(cue.count(AudioCueType::IntervalPrompt), 1);
        assert_eq!(transcript.len(), 1);
        assert!(transcript.entries()[0].ends_with("still here"));
    }

    #[tokio::test]
    async fn resume_rearms_the_interval_prompt() {
        // Huge interval: after the opening prompt, no further prompt would
        // fire unless something rearms the timer.
        let (mut r, _speech, cue) = runner(&["/pause", "/resume", "x", "/done"]);
        let transcript = r.run(&quiet_config()).await;

        assert_eq!(cue.count(AudioCueType::IntervalPrompt), 2);
        assert_eq!(transcript.len(), 1);
    }

    #[tokio::test]
    async fn skip_rearms_and_chimes() {
        let (mut r, _speech, cue) = runner(&["/skip", "/done"]);
        r.run(&quiet_config()).await;

        // Opening prompt chime, /skip chime, then the rearmed prompt fires
        // on the following iteration.
        assert_eq!(cue.count(AudioCueType::IntervalPrompt), 3);
    }

    #[tokio::test]
    async fn save_writes_joined_transcript_to_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let save = format!("/save {}", path.display());

        let (mut r, speech, _cue) = runner(&["one", "two", &save, "/done"]);
        r.run(&quiet_config()).await;

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("one"));
        assert!(lines[1].ends_with("two"));
        assert!(speech.lines().contains(&MSG_SAVED.to_string()));
    }

    #[tokio::test]
    async fn save_without_path_asks_for_one_and_continues() {
        let (mut r, speech, _cue) = runner(&["note", "/save", "after", "/done"]);
        let transcript = r.run(&quiet_config()).await;

        assert!(speech.lines().contains(&MSG_SAVE_NEEDS_PATH.to_string()));
        // The loop keeps going; later content is still captured.
        assert_eq!(transcript.len(), 2);
    }

    #[tokio::test]
    async fn save_falls_back_to_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.txt");
        let cfg = SessionConfig {
            minutes: 60,
            interval_secs: 100_000,
            save_path: Some(path.clone()),
            ..Default::default()
        };

        let (mut r, _speech, _cue) = runner(&["entry", "/save", "/done"]);
        r.run(&cfg).await;

        assert!(std::fs::read_to_string(&path).unwrap().ends_with("entry"));
    }

    #[tokio::test]
    async fn save_failure_is_spoken_and_nonfatal() {
        let (mut r, speech, _cue) =
            runner(&["note", "/save /nonexistent-dir/deep/out.txt", "more", "/done"]);
        let transcript = r.run(&quiet_config()).await;

        assert!(speech.lines().contains(&MSG_SAVE_FAILED.to_string()));
        assert_eq!(transcript.len(), 2);
    }

    #[tokio::test]
    async fn voice_input_is_used_when_available_and_configured() {
        let cfg = SessionConfig {
            minutes: 60,
            interval_secs: 100_000,
            use_voice_input: true,
            ..Default::default()
        };
        let speech = RecordingSpeech::default();
        let cue = CountingCue::default();
        let voice = ScriptedVoice::new(&["spoken thought", "/done"]);
        // Text lines would poison the transcript if the loop fell back.
        let mut r = SessionRunner::new(speech, cue, voice, ScriptedLines::new(&["typed"]));

        let transcript = r.run(&cfg).await;
        assert_eq!(transcript.len(), 1);
        assert!(transcript.entries()[0].ends_with("spoken thought"));
    }

    #[tokio::test]
    async fn voice_config_without_engine_falls_back_to_text() {
        let cfg = SessionConfig {
            minutes: 60,
            interval_secs: 100_000,
            use_voice_input: true,
            ..Default::default()
        };
        let speech = RecordingSpeech::default();
        let cue = CountingCue::default();
        let mut r = SessionRunner::new(speech, cue, NoVoice, ScriptedLines::new(&["typed", "/done"]));

        let transcript = r.run(&cfg).await;
        assert_eq!(transcript.len(), 1);
        assert!(transcript.entries()[0].ends_with("typed"));
    }

    #[tokio::test]
    async fn closing_feedback_fires_exactly_once() {
        let (mut r, speech, cue) = runner(&["/done"]);
        r.run(&quiet_config()).await;

        assert_eq!(cue.count(AudioCueType::SessionStart), 1);
        assert_eq!(cue.count(AudioCueType::SessionEnd), 1);
        let closings = speech
            .lines()
            .iter()
            .filter(|s| *s == MSG_CLOSING)
            .count();
        assert_eq!(closings, 1);
    }
}
