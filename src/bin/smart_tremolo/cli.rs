//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// SmartTremolo - LFO tremolo with an adaptive control loop (16-bit PCM WAV out)
#[derive(Parser, Debug)]
#[command(name = "smart-tremolo")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "If the input file is missing, a short test pad is generated at that path.")]
pub(crate) struct Args {
    /// Input WAV (mono or stereo; 16/24-bit PCM or 32-bit float)
    #[arg(long = "in", default_value = "assets/input.wav")]
    pub input: PathBuf,

    /// Output WAV (16-bit PCM)
    #[arg(long = "out", default_value = "assets/output.wav")]
    pub output: PathBuf,

    /// LFO rate in Hz
    #[arg(long, default_value_t = 5.0, value_parser = positive)]
    pub rate: f32,

    /// Modulation depth, 0..1
    #[arg(long, default_value_t = 0.6, value_parser = unit)]
    pub depth: f32,

    /// Wet/dry balance, 0..1
    #[arg(long, default_value_t = 1.0, value_parser = unit)]
    pub wet: f32,

    /// Right-channel phase lead in degrees, 0..180
    #[arg(long, default_value_t = 0.0, value_parser = stereo_phase)]
    pub stereophase: f32,

    /// LFO shape: sine, triangle, square or square-soft
    #[arg(long, default_value = "sine")]
    pub shape: String,

    /// Lock the rate to a tempo, e.g. bpm:120,div:1/8
    #[arg(long = "rate-sync")]
    pub rate_sync: Option<String>,

    /// Log average loudness once per second of audio
    #[arg(long, default_value_t = false)]
    pub analyze: bool,

    /// Scripted depth ramp between 5 s and 8 s
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Adaptive controller run on each analysis frame
    #[arg(long, default_value = "none", value_parser = ["none", "loudness"])]
    pub controller: String,
}

fn parse_f32(s: &str) -> Result<f32, String> {
    s.parse::<f32>()
        .map_err(|e| format!("`{s}` is not a number: {e}"))
}

fn positive(s: &str) -> Result<f32, String> {
    let v = parse_f32(s)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err("rate must be > 0".to_string())
    }
}

fn unit(s: &str) -> Result<f32, String> {
    let v = parse_f32(s)?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err("must be in [0..1]".to_string())
    }
}

fn stereo_phase(s: &str) -> Result<f32, String> {
    let v = parse_f32(s)?;
    if (0.0..=180.0).contains(&v) {
        Ok(v)
    } else {
        Err("stereophase must be in [0..180]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["smart-tremolo"]).unwrap();
        assert_eq!(args.input, PathBuf::from("assets/input.wav"));
        assert_eq!(args.output, PathBuf::from("assets/output.wav"));
        assert_eq!(args.rate, 5.0);
        assert_eq!(args.depth, 0.6);
        assert_eq!(args.wet, 1.0);
        assert_eq!(args.stereophase, 0.0);
        assert_eq!(args.shape, "sine");
        assert_eq!(args.controller, "none");
        assert!(args.rate_sync.is_none());
        assert!(!args.analyze && !args.demo);
    }

    #[test]
    fn range_violations_are_rejected() {
        let cases: [&[&str]; 5] = [
            &["smart-tremolo", "--rate", "0"],
            &["smart-tremolo", "--depth", "1.5"],
            &["smart-tremolo", "--wet=-0.1"],
            &["smart-tremolo", "--stereophase", "181"],
            &["smart-tremolo", "--controller", "psychic"],
        ];
        for bad in cases {
            assert!(Args::try_parse_from(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn full_flag_set() {
        let args = Args::try_parse_from([
            "smart-tremolo",
            "--in",
            "a.wav",
            "--out",
            "b.wav",
            "--stereophase",
            "90",
            "--shape",
            "square-soft",
            "--rate-sync",
            "bpm:120,div:1/8",
            "--analyze",
            "--demo",
            "--controller",
            "loudness",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("a.wav"));
        assert_eq!(args.stereophase, 90.0);
        assert_eq!(args.rate_sync.as_deref(), Some("bpm:120,div:1/8"));
        assert!(args.analyze && args.demo);
        assert_eq!(args.controller, "loudness");
    }
}
