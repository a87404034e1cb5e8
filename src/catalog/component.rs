use std::path::PathBuf;

use serde::Serialize;

/// One catalog entry surfaced in the generated document.
///
/// `img` starts out as an absolute path anchored at the source file's
/// directory and is rewritten exactly once by the asset relocator to a path
/// relative to the build output root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<PathBuf>,
}
