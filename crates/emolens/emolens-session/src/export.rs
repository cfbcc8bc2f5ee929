//! Timeline export to JSON.

use std::path::{Path, PathBuf};

use emolens_core::errors::EmolensResult;

use crate::context::SessionContext;

/// Serialize a session's timeline as a pretty-printed JSON array.
pub fn export_timeline(ctx: &SessionContext) -> EmolensResult<String> {
    Ok(serde_json::to_string_pretty(&ctx.timeline)?)
}

/// File name for a session's timeline. Characters outside `[A-Za-z0-9_-]` become `_`.
pub fn timeline_file_name(session_id: &str) -> String {
    let safe: String = session_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("session_{safe}.json")
}

/// Write the timeline to `dir/session_<id>.json` and return the path.
pub fn write_timeline(ctx: &SessionContext, dir: &Path) -> EmolensResult<PathBuf> {
    let path = dir.join(timeline_file_name(&ctx.session_id));
    std::fs::write(&path, export_timeline(ctx)?)?;
    tracing::debug!(session_id = %ctx.session_id, path = %path.display(), "timeline written");
    Ok(path)
}
