//! Type definitions for JSON Pointer.

/// A step in a JSON Pointer path.
///
/// Object keys are used verbatim; array indices are rendered as decimal
/// strings.
pub type PathStep = String;

/// A JSON Pointer path. The empty path addresses the document root.
pub type Path = Vec<PathStep>;

/// Last-step value that addresses the position after the last array element.
///
/// Only meaningful to `add`; lookups never resolve it.
pub const AFTER_LAST_ARRAY_ELEMENT: &str = "-";
