//! MindScribe - prompt builder and voice journaling sessions
//!
//! This crate builds text prompts from small templates and runs timed,
//! command-driven journaling sessions with spoken feedback, audio cues,
//! and optional voice input. It also ships a small local dev server with
//! git staging endpoints.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects and pure logic (commands, prompts, timers, transcripts)
//! - **Application**: The session loop and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (TTS, audio cues, voice capture, config)
//! - **CLI**: Command-line interface and argument parsing
//! - **Web**: The local dev server and its git endpoints

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod web;
