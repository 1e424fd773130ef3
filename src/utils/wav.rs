use tracing::info;

/// Load the first channel of a WAV file as `f64` samples.
///
/// Integer formats are normalized to roughly [-1, 1); the quantizer only
/// cares about the observed range, so the exact scale is cosmetic.
pub fn read_wav_samples(path: &str) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let samples: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .step_by(channels)
            .map(|s| s.map(|v| v as f64))
            .collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .step_by(channels)
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<_, _>>()?
        }
    };

    info!(
        "loaded {} samples from {} ({} Hz, {} channel(s))",
        samples.len(),
        path,
        spec.sample_rate,
        spec.channels
    );

    Ok(samples)
}
