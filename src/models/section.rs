use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-authored description of one desired output section.
///
/// Section specs carry the user's intent into generation; the Generator is
/// not required to honor them one-to-one. Ids are minted client-side and are
/// never transmitted to the services, which define their own output
/// identities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Minted locally when absent, so seed files can omit ids.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, rename = "section_name")]
    pub name: String,
    /// Free text guiding generation for this section.
    #[serde(default)]
    pub description: String,
}

impl SectionSpec {
    /// Create an empty spec with a freshly minted unique id.
    ///
    /// UUID v4 keeps ids collision-safe under rapid successive adds.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
        }
    }
}

impl Default for SectionSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// The mutable fields of a [`SectionSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionField {
    Name,
    Description,
}

/// One produced unit of content.
///
/// Never created by the client from scratch: the Generator (or Evaluator,
/// when it revises) assigns the id. A successful generation pass replaces
/// the whole sequence wholesale; entries are individually editable and
/// removable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSection {
    pub id: String,
    #[serde(default, rename = "section_name")]
    pub name: String,
    /// Markdown body of the section.
    #[serde(default)]
    pub content: String,
}

/// The mutable fields of a [`GeneratedSection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratedField {
    Name,
    Content,
}
