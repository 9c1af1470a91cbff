//! FLAC encoding for the speech recognition backend
//!
//! The recognition endpoint accepts lossless FLAC directly, so captured
//! speech is sent without lossy re-encoding. 16kHz mono, 16-bit.

use flacenc::bitsink::ByteSink;
use flacenc::component::BitRepr;
use flacenc::config;
use flacenc::error::Verify;
use flacenc::source::MemSource;

use crate::application::ports::VoiceError;

/// Sample rate the backend expects for speech
pub const TARGET_SAMPLE_RATE: u32 = 16000;

const BITS_PER_SAMPLE: usize = 16;
const CHANNELS: usize = 1;

/// Encode mono 16kHz i16 PCM to FLAC bytes.
pub fn encode_to_flac(pcm_samples: &[i16]) -> Result<Vec<u8>, VoiceError> {
    let samples_i32: Vec<i32> = pcm_samples.iter().map(|&s| s as i32).collect();

    let config = config::Encoder::default()
        .into_verified()
        .map_err(|(_, e)| VoiceError::EncodingFailed(format!("{:?}", e)))?;

    let source = MemSource::from_samples(
        &samples_i32,
        CHANNELS,
        BITS_PER_SAMPLE,
        TARGET_SAMPLE_RATE as usize,
    );

    let flac_stream = flacenc::encode_with_fixed_block_size(&config, source, config.block_size)
        .map_err(|e| VoiceError::EncodingFailed(format!("{:?}", e)))?;

    let mut sink = ByteSink::new();
    flac_stream
        .write(&mut sink)
        .map_err(|e| VoiceError::EncodingFailed(e.to_string()))?;

    Ok(sink.into_inner())
}
