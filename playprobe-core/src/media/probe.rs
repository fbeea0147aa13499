//! Capability probe: load a file into the player and read its descriptor.
//!
//! The probe never fails outward. Load failures, property failures and an
//! undetectable codec all end up inside the returned [`ProbeResult`] so that a
//! batch can carry on past a bad file.

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::media::info::{MediaDescriptor, ProbeResult};
use crate::player::{PlayerControl, names};

/// Error message recorded when no codec could be read.
pub const CODEC_UNDETECTABLE: &str = "codec undetectable";

/// Probes `file_path` through `player`.
///
/// Loads the file, waits `settle_delay` for the player to finish opening it,
/// then reads each property independently. The recorded load time covers the
/// whole sequence, settle delay included.
pub fn probe_file<P>(player: &mut P, file_path: &Path, settle_delay: Duration) -> ProbeResult
where
    P: PlayerControl + ?Sized,
{
    log::debug!("Probing {}", file_path.display());
    let start = Instant::now();

    if let Err(e) = player.load(file_path) {
        let elapsed = elapsed_millis(start);
        log::warn!("Load failed for {}: {}", file_path.display(), e);
        return ProbeResult::failure(file_path, MediaDescriptor::default(), elapsed, e.to_string());
    }

    if !settle_delay.is_zero() {
        thread::sleep(settle_delay);
    }

    let descriptor = read_descriptor(player);
    let elapsed = elapsed_millis(start);

    if descriptor.codec.is_none() {
        log::warn!("No codec reported for {}", file_path.display());
        return ProbeResult::failure(file_path, descriptor, elapsed, CODEC_UNDETECTABLE);
    }

    log::debug!("Probed {} in {} ms: {}", file_path.display(), elapsed, descriptor);
    ProbeResult::success(file_path, descriptor, elapsed)
}

/// Reads every descriptor property; each failure only blanks its own field.
pub fn read_descriptor<P>(player: &mut P) -> MediaDescriptor
where
    P: PlayerControl + ?Sized,
{
    let codec = read_string(player, names::VIDEO_CODEC).and_then(|raw| first_token(&raw));
    let container = read_string(player, names::FILE_FORMAT);
    let width = read_dimension(player, names::WIDTH);
    let height = read_dimension(player, names::HEIGHT);
    let frame_rate = read_positive_f64(player, names::CONTAINER_FPS)
        .or_else(|| read_positive_f64(player, names::VIDEO_PARAMS_FPS));
    let duration_seconds = read_f64(player, names::DURATION).filter(|d| *d >= 0.0);

    MediaDescriptor {
        codec,
        container,
        width,
        height,
        frame_rate,
        duration_seconds,
    }
}

/// The player decorates codec names ("h264 (H.264 / AVC ...)"); keep the id.
fn first_token(raw: &str) -> Option<String> {
    raw.split_whitespace().next().map(str::to_string)
}

fn read_property<P>(player: &mut P, name: &str) -> Option<Value>
where
    P: PlayerControl + ?Sized,
{
    match player.get_property(name) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("{}", e);
            None
        }
    }
}

fn read_string<P>(player: &mut P, name: &str) -> Option<String>
where
    P: PlayerControl + ?Sized,
{
    match read_property(player, name)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::String(_) => None,
        other => {
            log::debug!("Property '{}' is not a string: {}", name, other);
            None
        }
    }
}

fn read_f64<P>(player: &mut P, name: &str) -> Option<f64>
where
    P: PlayerControl + ?Sized,
{
    let value = read_property(player, name)?;
    let number = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    if number.is_none() {
        log::debug!("Property '{}' is not numeric: {}", name, value);
    }
    number.filter(|n| n.is_finite())
}

fn read_positive_f64<P>(player: &mut P, name: &str) -> Option<f64>
where
    P: PlayerControl + ?Sized,
{
    read_f64(player, name).filter(|n| *n > 0.0)
}

fn read_dimension<P>(player: &mut P, name: &str) -> Option<u32>
where
    P: PlayerControl + ?Sized,
{
    read_positive_f64(player, name)
        .filter(|n| n.fract() == 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
}

fn elapsed_millis(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
