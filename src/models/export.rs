use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Target format for an export.
///
/// Serialized with the wire discriminators the Exporter expects
/// (`doc` and `ppt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    #[serde(rename = "doc")]
    Document,
    #[serde(rename = "ppt")]
    Presentation,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "doc",
            Self::Presentation => "ppt",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "doc" => Some(Self::Document),
            "ppt" => Some(Self::Presentation),
            _ => None,
        }
    }

    /// Download filename implied by the format.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Document => "minidoc.docx",
            Self::Presentation => "minidoc.pptx",
        }
    }
}

/// An exported document as returned by the Exporter.
///
/// The payload is opaque to the workflow; its content and encoding are the
/// Exporter's concern. The workflow's responsibility ends at handing the
/// bytes to a delivery mechanism such as a file save.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// Filename implied by the requested format.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportedDocument {
    /// Write the payload into `dir` under the format-implied filename and
    /// return the resulting path.
    pub fn save_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}
