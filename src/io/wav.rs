//! WAV reading and writing using hound
//!
//! Reads 8/16/24/32-bit integer PCM and 32-bit float, mono or stereo.
//! Always writes 16-bit PCM.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::{debug, info};

use crate::error::{Result, WavError};
use crate::io::AudioData;

const OUTPUT_BITS: u16 = 16;

/// Load a WAV file as interleaved, normalized samples.
pub fn read_wav(path: impl AsRef<Path>) -> Result<AudioData> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = WavReader::new(BufReader::new(file))?;
    let spec = reader.spec();

    debug!(
        path = %path.display(),
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        bits = spec.bits_per_sample,
        format = ?spec.sample_format,
        "reading WAV"
    );

    if !(1..=2).contains(&spec.channels) {
        return Err(WavError::UnsupportedChannels(spec.channels));
    }
    if spec.sample_rate == 0 {
        return Err(WavError::InvalidSampleRate(spec.sample_rate));
    }

    let samples = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 8) => read_int::<i8, _>(reader, 8)?,
        (SampleFormat::Int, 16) => read_int::<i16, _>(reader, 16)?,
        (SampleFormat::Int, bits @ (24 | 32)) => read_int::<i32, _>(reader, bits)?,
        (SampleFormat::Float, 32) => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        (_, bits) => return Err(WavError::UnsupportedBitDepth(bits)),
    };

    let data = AudioData::new(spec.sample_rate, spec.channels, samples);
    info!(
        path = %path.display(),
        sample_rate = data.sample_rate,
        channels = data.channels,
        frames = data.frames(),
        "loaded WAV"
    );
    Ok(data)
}

fn read_int<S, R>(reader: WavReader<R>, bits: u16) -> Result<Vec<f32>>
where
    S: hound::Sample + Into<i32>,
    R: std::io::Read,
{
    let scale = 1.0 / (1i64 << (bits - 1)) as f32;
    reader
        .into_samples::<S>()
        .map(|s| {
            s.map(|v| (v.into() as f32 * scale).clamp(-1.0, 1.0))
                .map_err(WavError::from)
        })
        .collect()
}

/// Write interleaved samples as 16-bit PCM.
///
/// Samples are clamped to [-1, 1] and scaled by 32767. The file is encoded
/// next to `path` and renamed into place only once complete, so a failed
/// write never leaves a truncated file behind.
pub fn write_wav(path: impl AsRef<Path>, data: &AudioData) -> Result<()> {
    let path = path.as_ref();
    if !(1..=2).contains(&data.channels) {
        return Err(WavError::UnsupportedChannels(data.channels));
    }
    if data.sample_rate == 0 {
        return Err(WavError::InvalidSampleRate(data.sample_rate));
    }

    let spec = WavSpec {
        channels: data.channels,
        sample_rate: data.sample_rate,
        bits_per_sample: OUTPUT_BITS,
        sample_format: SampleFormat::Int,
    };

    let partial = partial_path(path);
    let written = encode_pcm16(&partial, spec, &data.samples)
        .and_then(|()| fs::rename(&partial, path).map_err(WavError::from));
    if let Err(e) = written {
        let _ = fs::remove_file(&partial);
        return Err(e);
    }

    info!(
        path = %path.display(),
        sample_rate = data.sample_rate,
        channels = data.channels,
        frames = data.frames(),
        "wrote WAV"
    );
    Ok(())
}

fn encode_pcm16(path: &Path, spec: WavSpec, samples: &[f32]) -> Result<()> {
    let mut writer = WavWriter::create(path, spec)?;
    for &x in samples {
        writer.write_sample(to_pcm16(x))?;
    }
    writer.finalize()?;
    Ok(())
}

#[inline]
fn to_pcm16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".partial");
    PathBuf::from(name)
}
