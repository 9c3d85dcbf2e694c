//! Instance-related pure helpers: console offsets, exec parameters, and
//! option parsing.

use rlc_common::{FileInfo, InstanceParams, InstanceState, OutputStream};

/// Bytes of recent output replayed when attaching to a running instance.
pub const LOOKBACK_WINDOW: u64 = 500;

/// Starting offset when attaching to a stream that is already `size` bytes
/// long.
#[must_use]
pub fn reattach_offset(size: u64) -> u64 {
    size.saturating_sub(LOOKBACK_WINDOW)
}

/// Current size of the capture file for `stream`, if the launcher lists one.
#[must_use]
pub fn stream_size(files: &[FileInfo], stream: OutputStream) -> Option<u64> {
    files.iter().find(|f| f.captures(stream)).map(|f| f.size)
}

/// Creation parameters for a one-shot exec: started immediately, discarded
/// after it stops, stderr folded into stdout.
#[must_use]
pub fn exec_params(args: &[String]) -> InstanceParams {
    InstanceParams {
        state: Some(InstanceState::Running),
        persistent: Some(false),
        unifystdout: Some(true),
        cmdline: (!args.is_empty()).then(|| args.join(" ")),
        user: None,
    }
}

/// Parse a boolean option value (`1|yes|true|0|no|false`, any case).
///
/// # Errors
///
/// Returns a message naming the rejected value.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" => Ok(true),
        "0" | "no" | "false" => Ok(false),
        _ => Err(format!("invalid boolean value: {value} (use 1|0|yes|no|true|false)")),
    }
}
