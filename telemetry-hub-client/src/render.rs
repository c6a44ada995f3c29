//! Console rendering for gateway output.

use telemetry_hub_common::{DeviceState, Sample};

/// Horizontal rule used around the banner and the final report blocks.
pub const SEPARATOR: &str =
    "======================================================================";

/// The indented reading line for one poll, or the explicit no-sample
/// marker when the gateway reported none.
///
/// Absence of a sample is an expected state (device idle, first reading
/// not produced yet), so it renders as a visible marker rather than a
/// blank line.
pub fn sample_line(sample: Option<&Sample>) -> String {
    match sample {
        Some(sample) => format!("  {}", sample),
        None => "  (no sample available)".to_string(),
    }
}

/// Announcement line for a device state change observed between polls.
pub fn state_change_line(previous: &DeviceState, current: &DeviceState) -> String {
    format!("  State changed: {} -> {}", previous, current)
}
