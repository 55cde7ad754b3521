// ============================================================================
// soundlab-core/src/edit/format.rs
// ============================================================================
//
// FORMAT CONSTRAINTS: Legalizing Quality Settings per Output Container
//
// Maps a requested container and its quality knobs (sample rate, bit depth,
// MP3 bitrate) onto values the target codec accepts, plus the concrete codec
// identifier to hand to ffmpeg.
//
// The resolver is total: an illegal value is silently replaced by a
// documented default rather than rejected.
//
// SUBSTITUTION TABLE:
// - WAV: bit depth 16/24/32 -> pcm_s16le/pcm_s24le/pcm_f32le, other -> pcm_s16le;
//   sample rate unchanged
// - MP3: bit depth ignored; sample rate 96000 -> 48000, 44100 and 48000 kept,
//   anything else -> 44100; bitrate clamped to 32..=320 kbps, default 192

use log::debug;
use std::fmt;

/// Default sample rate for exports and fallback for MP3.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Default PCM bit depth for WAV exports.
pub const DEFAULT_BIT_DEPTH: u32 = 16;

/// Default MP3 bitrate in kbps.
pub const DEFAULT_MP3_BITRATE: u32 = 192;

/// Lowest MP3 bitrate accepted, in kbps.
pub const MIN_MP3_BITRATE: u32 = 32;

/// Highest MP3 bitrate accepted, in kbps.
pub const MAX_MP3_BITRATE: u32 = 320;

/// Output container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioFormat {
    #[default]
    Wav,
    Mp3,
}

impl AudioFormat {
    /// Lenient name lookup: `mp3` in any case selects MP3, everything else WAV.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("mp3") {
            AudioFormat::Mp3
        } else {
            AudioFormat::Wav
        }
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Mp3 => "mp3",
        }
    }

    /// MIME type of the exported artifact.
    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Mp3 => "audio/mpeg",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Audio codecs the exporter can request from ffmpeg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCodec {
    PcmS16Le,
    PcmS24Le,
    PcmF32Le,
    Mp3Lame,
}

impl AudioCodec {
    /// Get the ffmpeg codec name.
    pub fn ffmpeg_name(&self) -> &'static str {
        match self {
            AudioCodec::PcmS16Le => "pcm_s16le",
            AudioCodec::PcmS24Le => "pcm_s24le",
            AudioCodec::PcmF32Le => "pcm_f32le",
            AudioCodec::Mp3Lame => "libmp3lame",
        }
    }

    /// PCM codec for a WAV bit depth; unknown depths fall back to 16-bit.
    pub fn pcm_for_bit_depth(bit_depth: u32) -> Self {
        match bit_depth {
            16 => AudioCodec::PcmS16Le,
            24 => AudioCodec::PcmS24Le,
            32 => AudioCodec::PcmF32Le,
            _ => AudioCodec::PcmS16Le,
        }
    }
}

/// Quality knobs as requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityRequest {
    pub format: AudioFormat,
    pub sample_rate_hz: u32,
    pub bit_depth: u32,
    /// Only meaningful for MP3; `None` means the default bitrate.
    pub mp3_bitrate_kbps: Option<u32>,
}

impl Default for QualityRequest {
    fn default() -> Self {
        Self {
            format: AudioFormat::Wav,
            sample_rate_hz: DEFAULT_SAMPLE_RATE,
            bit_depth: DEFAULT_BIT_DEPTH,
            mp3_bitrate_kbps: Some(DEFAULT_MP3_BITRATE),
        }
    }
}

/// Legal encoding parameters for the external engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingTarget {
    pub format: AudioFormat,
    pub codec: AudioCodec,
    pub sample_rate_hz: u32,
    /// Constant bitrate in kbps, for compressed output only.
    pub bitrate_kbps: Option<u32>,
    /// Forced output channel count, if any.
    pub channels: Option<u8>,
    /// Whether the encoder writes a Xing/LAME header.
    pub write_xing: bool,
}

/// Resolves requested quality knobs into a legal [`EncodingTarget`].
pub fn resolve_quality(request: &QualityRequest) -> EncodingTarget {
    match request.format {
        AudioFormat::Wav => {
            let codec = AudioCodec::pcm_for_bit_depth(request.bit_depth);
            if !matches!(request.bit_depth, 16 | 24 | 32) {
                debug!(
                    "Unsupported WAV bit depth {}, using {}",
                    request.bit_depth,
                    codec.ffmpeg_name()
                );
            }
            EncodingTarget {
                format: AudioFormat::Wav,
                codec,
                sample_rate_hz: request.sample_rate_hz,
                bitrate_kbps: None,
                channels: None,
                write_xing: true,
            }
        }
        AudioFormat::Mp3 => {
            let sample_rate_hz = quantize_mp3_sample_rate(request.sample_rate_hz);
            let bitrate = request
                .mp3_bitrate_kbps
                .unwrap_or(DEFAULT_MP3_BITRATE)
                .clamp(MIN_MP3_BITRATE, MAX_MP3_BITRATE);

            if sample_rate_hz != request.sample_rate_hz {
                debug!(
                    "MP3 sample rate {} Hz not supported, using {} Hz",
                    request.sample_rate_hz, sample_rate_hz
                );
            }

            EncodingTarget {
                format: AudioFormat::Mp3,
                codec: AudioCodec::Mp3Lame,
                sample_rate_hz,
                bitrate_kbps: Some(bitrate),
                channels: Some(2),
                write_xing: false,
            }
        }
    }
}

fn quantize_mp3_sample_rate(sample_rate_hz: u32) -> u32 {
    match sample_rate_hz {
        96_000 => 48_000,
        44_100 => 44_100,
        48_000 => 48_000,
        _ => DEFAULT_SAMPLE_RATE,
    }
}
