//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;

use crate::engine::{ChannelType, FixtureAudio, Patch};
use crate::error::Result;
use crate::session::{Session, SessionConfig};

/// Suffix appended to the input stem when suggesting an export name.
const OUTPUT_SUFFIX: &str = "_declicked";

/// Resolve the session config: the given file, or the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    match path {
        Some(path) => {
            info!("Loading session config: {}", path.display());
            SessionConfig::load(path)
        }
        None => Ok(SessionConfig::default()),
    }
}

/// Export file name suggested for an input file.
pub fn output_name_for(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("audio");
    format!("{}{}.wav", stem, OUTPUT_SUFFIX)
}

/// Print the fallback parameters.
pub fn show_defaults(config: Option<&Path>) -> Result<()> {
    let session = Session::with_config(load_config(config)?);

    println!("Threshold:  {}", session.threshold());
    println!("Max length: {}", session.max_length());

    Ok(())
}

/// Build a session with the fixture loaded and overrides applied.
pub fn open_session(
    fixture: &Path,
    config: SessionConfig,
    threshold: Option<f64>,
    max_length: Option<i32>,
) -> Result<Session> {
    let audio = FixtureAudio::load(fixture)?;
    let name = audio.name().to_string();

    let mut session = Session::with_config(config);
    session.subscribe(move |event| {
        info!(
            "Active audio is now '{}' (load #{}, threshold {}, max length {})",
            name,
            event.generation,
            event.audio.settings().threshold_for_detection,
            event.audio.settings().max_length_of_correction
        );
        Ok(())
    });
    session.load_audio(audio);
    session.set_output_name_suggestion(output_name_for(fixture));

    if let Some(threshold) = threshold {
        session.set_threshold(threshold);
    }
    if let Some(max_length) = max_length {
        session.set_max_length(max_length);
    }

    Ok(session)
}

/// Load a fixture and list its patches.
pub fn inspect(
    fixture: &Path,
    channel: Option<ChannelType>,
    threshold: Option<f64>,
    max_length: Option<i32>,
    config: Option<&Path>,
) -> Result<()> {
    info!("Inspecting fixture: {}", fixture.display());

    let channels = match channel {
        Some(channel) => vec![channel],
        None => FixtureAudio::load(fixture)?.channels(),
    };
    let session = open_session(fixture, load_config(config)?, threshold, max_length)?;

    println!("Fixture:    {}", fixture.display());
    println!("Threshold:  {}", session.threshold());
    println!("Max length: {}", session.max_length());
    println!("Export as:  {}", session.output_name_suggestion());

    if channels.is_empty() {
        println!("Fixture carries no channels.");
        return Ok(());
    }

    for channel in channels {
        let patches = session.patches(channel)?.unwrap_or_default();
        print_patches(channel, &patches);
    }

    Ok(())
}

fn print_patches(channel: ChannelType, patches: &[Patch]) {
    println!("{:-<60}", "");
    if patches.is_empty() {
        println!("{}: no patches", channel);
        return;
    }

    println!("{}: {} patch(es)", channel, patches.len());
    for patch in patches {
        println!(
            "    @{:>10}  len {:>5}  error {:.2}",
            patch.start_position, patch.length, patch.error_level_at_detection
        );
    }
}
