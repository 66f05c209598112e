// vidslider-cli/src/config.rs
//
// Defaults the CLI derives from its arguments.

use std::path::PathBuf;

/// Extension of generated clips.
pub const OUTPUT_EXTENSION: &str = "mp4";

/// Default output file for `generate`: the color string with every
/// non-alphanumeric character replaced by `_`, plus `.mp4`.
#[must_use]
pub fn default_output_path(color: &str) -> PathBuf {
    let stem: String = color
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    PathBuf::from(format!("{stem}.{OUTPUT_EXTENSION}"))
}
