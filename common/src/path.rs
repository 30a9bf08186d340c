//! # Inventory Path Parser
//!
//! Inventory paths look like file system paths: `/dc1/vm/web-*`.
//!
//! * A leading `/` makes the path absolute, resolved from the inventory root.
//! * Anything else is relative and gets an implicit leading [`PIVOT`] segment,
//!   so it resolves against the anchor of the lookup (e.g. a datacenter's VM folder).
//! * A leading [`PARENT`] segment is kept as-is; the finder rejects it.

/// Segment that anchors a path to the lookup's pivot object.
pub const PIVOT: &str = ".";

/// Segment requesting upward traversal.
pub const PARENT: &str = "..";

/// Splits `path` into its segments.
///
/// Empty segments and `.` segments past the first position are dropped.
pub fn to_parts(path: &str) -> Vec<String> {
    let mut parts: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != PIVOT)
        .map(str::to_owned)
        .collect();

    let relative = !path.starts_with('/');
    let upward = parts.first().is_some_and(|segment| segment == PARENT);
    if relative && !upward {
        parts.insert(0, PIVOT.to_owned());
    }

    parts
}

/// Appends `name` to the inventory path `base`.
pub fn join(base: &str, name: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{name}")
    } else {
        format!("{base}/{name}")
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
