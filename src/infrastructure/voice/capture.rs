//! One-utterance microphone capture
//!
//! Opens the default cpal input device, calibrates an energy threshold
//! against ambient noise, then records until trailing silence or the
//! phrase limit. Output is mono i16 at 16kHz, ready for FLAC encoding.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, SampleRate, StreamConfig};
use rubato::{FftFixedIn, Resampler};

use super::flac::TARGET_SAMPLE_RATE;
use crate::application::ports::VoiceError;

/// How long to sample ambient noise before listening
const CALIBRATION: Duration = Duration::from_millis(300);

/// Trailing silence that ends an utterance
const END_SILENCE: Duration = Duration::from_millis(800);

/// Polling step while watching the capture buffer
const POLL_STEP: Duration = Duration::from_millis(50);

/// Energy floor below which calibration never pushes the threshold
const MIN_THRESHOLD: f32 = 0.01;

/// Whether a default input device exists.
pub fn input_device_available() -> bool {
    cpal::default_host().default_input_device().is_some()
}

/// Capture one utterance, blocking the calling thread.
///
/// `timeout` bounds the wait for speech to start; `phrase_limit` bounds the
/// utterance itself. Errors cover missing devices and stream failures; a
/// timeout with no speech is `CaptureFailed`.
pub fn capture_utterance_sync(
    timeout: Duration,
    phrase_limit: Duration,
) -> Result<Vec<i16>, VoiceError> {
    let device = cpal::default_host()
        .default_input_device()
        .ok_or(VoiceError::NoInputDevice)?;

    let (config, sample_format) = pick_input_config(&device)?;
    let sample_rate = config.sample_rate.0;
    let channels = config.channels;

    let buffer: Arc<Mutex<Vec<i16>>> = Arc::new(Mutex::new(Vec::new()));

    let stream = match sample_format {
        SampleFormat::I16 => {
            let buffer = Arc::clone(&buffer);
            device
                .build_input_stream(
                    &config,
                    move |data: &[i16], _: &cpal::InputCallbackInfo| {
                        let mono = mix_to_mono(data, channels);
                        if let Ok(mut buf) = buffer.lock() {
                            buf.extend_from_slice(&mono);
                        }
                    },
                    |err| tracing::warn!("audio stream error: {}", err),
                    None,
                )
                .map_err(|e| VoiceError::CaptureFailed(e.to_string()))?
        }
        SampleFormat::F32 => {
            let buffer = Arc::clone(&buffer);
            device
                .build_input_stream(
                    &config,
                    move |data: &[f32], _: &cpal::InputCallbackInfo| {
                        let i16_data: Vec<i16> =
                            data.iter().map(|&s| (s * 32767.0) as i16).collect();
                        let mono = mix_to_mono(&i16_data, channels);
                        if let Ok(mut buf) = buffer.lock() {
                            buf.extend_from_slice(&mono);
                        }
                    },
                    |err| tracing::warn!("audio stream error: {}", err),
                    None,
                )
                .map_err(|e| VoiceError::CaptureFailed(e.to_string()))?
        }
        _ => {
            return Err(VoiceError::CaptureFailed(
                "Unsupported sample format".into(),
            ))
        }
    };

    stream
        .play()
        .map_err(|e| VoiceError::CaptureFailed(e.to_string()))?;

    // Ambient-noise calibration
    std::thread::sleep(CALIBRATION);
    let threshold = {
        let buf = buffer.lock().unwrap();
        (rms(&buf) * 1.5).max(MIN_THRESHOLD)
    };
    let calibration_len = buffer.lock().unwrap().len();

    // Wait for speech to start
    let wait_start = Instant::now();
    let mut scanned = calibration_len;
    let speech_start = loop {
        if wait_start.elapsed() > timeout {
            return Err(VoiceError::CaptureFailed("No speech detected".into()));
        }
        std::thread::sleep(POLL_STEP);

        let buf = buffer.lock().unwrap();
        if buf.len() > scanned && rms(&buf[scanned..]) > threshold {
            break scanned;
        }
        scanned = buf.len();
    };

    // Record until trailing silence or the phrase limit
    let phrase_start = Instant::now();
    let mut quiet_since: Option<Instant> = None;
    loop {
        if phrase_start.elapsed() >= phrase_limit {
            break;
        }
        std::thread::sleep(POLL_STEP);

        let buf = buffer.lock().unwrap();
        let tail = &buf[scanned.min(buf.len())..];
        let loud = !tail.is_empty() && rms(tail) > threshold;
        scanned = buf.len();
        drop(buf);

        if loud {
            quiet_since = None;
        } else {
            let since = *quiet_since.get_or_insert_with(Instant::now);
            if since.elapsed() >= END_SILENCE {
                break;
            }
        }
    }

    drop(stream);

    let samples = {
        let buf = buffer.lock().unwrap();
        buf[speech_start..].to_vec()
    };

    resample_to_16k(&samples, sample_rate)
}

/// Pick an i16/f32 input config, preferring mono and the 16kHz target rate.
fn pick_input_config(device: &cpal::Device) -> Result<(StreamConfig, SampleFormat), VoiceError> {
    let supported = device
        .supported_input_configs()
        .map_err(|e| VoiceError::CaptureFailed(format!("Failed to get configs: {}", e)))?;

    let mut best: Option<cpal::SupportedStreamConfigRange> = None;
    for config in supported {
        if config.sample_format() != SampleFormat::I16
            && config.sample_format() != SampleFormat::F32
        {
            continue;
        }

        let includes_target = config.min_sample_rate().0 <= TARGET_SAMPLE_RATE
            && config.max_sample_rate().0 >= TARGET_SAMPLE_RATE;

        let better = match &best {
            None => true,
            Some(current) => {
                let fewer_channels = config.channels() < current.channels();
                let better_rate =
                    includes_target && current.min_sample_rate().0 > TARGET_SAMPLE_RATE;
                fewer_channels || better_rate
            }
        };
        if better {
            best = Some(config);
        }
    }

    let range = best.ok_or_else(|| VoiceError::CaptureFailed("No suitable config found".into()))?;

    let sample_rate = if range.min_sample_rate().0 <= TARGET_SAMPLE_RATE
        && range.max_sample_rate().0 >= TARGET_SAMPLE_RATE
    {
        SampleRate(TARGET_SAMPLE_RATE)
    } else {
        range.min_sample_rate()
    };

    let sample_format = range.sample_format();
    let config = StreamConfig {
        channels: range.channels(),
        sample_rate,
        buffer_size: cpal::BufferSize::Default,
    };

    Ok((config, sample_format))
}

/// Root-mean-square energy of a sample window, normalized to [0, 1].
fn rms(samples: &[i16]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples
        .iter()
        .map(|&s| {
            let f = s as f64 / 32768.0;
            f * f
        })
        .sum();
    (sum / samples.len() as f64).sqrt() as f32
}

/// Mix interleaved multi-channel samples down to mono.
fn mix_to_mono(samples: &[i16], channels: u16) -> Vec<i16> {
    if channels == 1 {
        return samples.to_vec();
    }

    samples
        .chunks(channels as usize)
        .map(|chunk| {
            let sum: i32 = chunk.iter().map(|&s| s as i32).sum();
            (sum / channels as i32) as i16
        })
        .collect()
}

/// Resample mono audio from the device rate to 16kHz.
fn resample_to_16k(samples: &[i16], source_rate: u32) -> Result<Vec<i16>, VoiceError> {
    if source_rate == TARGET_SAMPLE_RATE {
        return Ok(samples.to_vec());
    }

    let samples_f32: Vec<f32> = samples.iter().map(|&s| s as f32 / 32768.0).collect();
    let ratio = TARGET_SAMPLE_RATE as f64 / source_rate as f64;
    let output_len = (samples_f32.len() as f64 * ratio).ceil() as usize;

    let mut resampler = FftFixedIn::<f32>::new(
        source_rate as usize,
        TARGET_SAMPLE_RATE as usize,
        1024,
        2,
        1,
    )
    .map_err(|e| VoiceError::CaptureFailed(format!("Resampler init failed: {}", e)))?;

    let mut output = Vec::with_capacity(output_len);
    let mut input_pos = 0;

    while input_pos < samples_f32.len() {
        let frames_needed = resampler.input_frames_next();
        let end_pos = (input_pos + frames_needed).min(samples_f32.len());
        let mut chunk = samples_f32[input_pos..end_pos].to_vec();
        chunk.resize(frames_needed, 0.0);

        let resampled = resampler
            .process(&[chunk], None)
            .map_err(|e| VoiceError::CaptureFailed(format!("Resampling failed: {}", e)))?;

        output.extend(resampled[0].iter().map(|&s| (s * 32767.0) as i16));
        input_pos = end_pos;
    }

    output.truncate(output_len);

    Ok(output)
}
