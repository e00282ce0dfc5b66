//! One offline run: load, configure, process, write.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};

use smart_tremolo::{
    control::LoudnessFollower,
    io::{read_wav, write_wav, AudioData},
    sequencing::TempoSync,
    Controller, LfoShape, NoOpController, Session, TremoloParams, BLOCK_FRAMES,
};

use crate::analyze::SecondReport;
use crate::cli::Args;
use crate::demo::DepthRamp;

const TEST_PAD_SECONDS: f32 = 10.0;
const TEST_PAD_SAMPLE_RATE: u32 = 44_100;

pub(crate) fn run(args: Args) -> Result<()> {
    ensure_input(&args.input)?;

    let mut audio = read_wav(&args.input)
        .wrap_err_with(|| format!("failed to read input WAV {}", args.input.display()))?;

    let shape = LfoShape::parse(&args.shape);
    if shape.name() != args.shape.trim().to_ascii_lowercase() {
        warn!("Unknown shape {:?}, using {}", args.shape, shape);
    }
    let params = TremoloParams {
        rate_hz: args.rate,
        depth: args.depth,
        wet: args.wet,
        stereo_phase_deg: args.stereophase,
        shape,
    };
    let mut tremolo = params.build(f64::from(audio.sample_rate));

    if let Some(text) = args.rate_sync.as_deref() {
        match text.parse::<TempoSync>() {
            Ok(sync) => {
                let hz = sync.rate_hz();
                info!(
                    "rate-sync: bpm={} div={} -> rate={} Hz",
                    sync.bpm, sync.division, hz
                );
                tremolo.set_rate_hz(hz);
            }
            Err(e) => warn!("{e} (ignored)"),
        }
    }

    print_banner(&args, &audio);

    let controller: Box<dyn Controller> = match args.controller.as_str() {
        "loudness" => Box::new(LoudnessFollower::default()),
        _ => Box::new(NoOpController),
    };
    let mut session =
        Session::with_controller(tremolo, usize::from(audio.channels), controller);

    let mut ramp = args.demo.then(|| DepthRamp::new(args.depth));
    let mut report = args.analyze.then(SecondReport::default);

    let block_len = BLOCK_FRAMES * usize::from(audio.channels);
    for block in audio.samples.chunks_mut(block_len) {
        session.analyze_block(block, |_, features| {
            if let Some(report) = report.as_mut() {
                report.record(features);
            }
        });

        let now = session.elapsed_seconds();
        if let Some(depth) = ramp.as_mut().and_then(|r| r.depth_at(now)) {
            session.tremolo_mut().set_depth(depth);
        }

        session.render_block(block);

        if let Some(report) = report.as_mut() {
            report.log_tick(session.elapsed_seconds());
        }
    }

    write_wav(&args.output, &audio)
        .wrap_err_with(|| format!("failed to write output WAV {}", args.output.display()))?;

    println!("Done. Stereo phase offset = {} deg.", args.stereophase);
    Ok(())
}

/// Generate a test pad at `path` when nothing is there yet.
fn ensure_input(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    info!(
        "Input file not found: {} -> generating a test pad",
        path.display()
    );
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    }
    let pad = AudioData::test_pad(TEST_PAD_SECONDS, TEST_PAD_SAMPLE_RATE);
    write_wav(path, &pad)
        .wrap_err_with(|| format!("failed to write generated input to {}", path.display()))
}

fn print_banner(args: &Args, audio: &AudioData) {
    println!("SmartTremolo");
    println!("  Input          : {}", args.input.display());
    println!("  Output         : {}", args.output.display());
    println!("  SampleRate     : {}", audio.sample_rate);
    println!("  Channels       : {}", audio.channels);
    println!("  Duration       : {:.3} s", audio.duration_seconds());
    println!(
        "  Params         : rate={} depth={} shape={} stereophase={} wet={}",
        args.rate, args.depth, args.shape, args.stereophase, args.wet
    );
    if args.controller != "none" {
        println!("  Controller     : {}", args.controller);
    }
}
