//! Media duration lookup from the extracted audio track.

use eyre::{Result, WrapErr, ensure};
use hound::WavReader;
use std::path::Path;

/// Read the duration of a WAV file in seconds from its header.
pub fn wav_duration(path: &Path) -> Result<f64> {
    let reader = WavReader::open(path)
        .wrap_err_with(|| format!("failed to open audio: {}", path.display()))?;

    let spec = reader.spec();
    ensure!(spec.sample_rate > 0, "invalid sample rate in {}", path.display());

    let duration = reader.duration() as f64 / spec.sample_rate as f64;

    tracing::debug!(
        path = %path.display(),
        duration = %format!("{duration:.2}s"),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits_per_sample = spec.bits_per_sample,
        format = ?spec.sample_format,
        "wav spec"
    );

    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{SampleFormat, WavSpec, WavWriter};

    #[test]
    fn reads_duration_from_header() {
        let path = std::env::temp_dir().join("wordcut-media-duration.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let mut writer = WavWriter::create(&path, spec).expect("failed to create wav");
        for _ in 0..24000 {
            writer.write_sample(0i16).expect("failed to write sample");
        }
        writer.finalize().expect("failed to finalize wav");

        let duration = wav_duration(&path).unwrap();

        assert!((duration - 1.5).abs() < 1e-9);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_error() {
        assert!(wav_duration(Path::new("/nonexistent/audio.wav")).is_err());
    }
}
