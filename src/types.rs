//! Data types used throughout php_sfc_types.
//!
//! This module contains the "model" structs and enums shared between the
//! PHP analysis (bindings and exported variables), the code generator
//! (`Code`, `CodeFeatures`) and the host-facing plugin layer (`Sfc`,
//! `SfcBlock`).
use serde::{Deserialize, Serialize};

/// Feature flags attached to a mapped code fragment.
///
/// The host reads these to decide which language features (go-to-definition,
/// find-references, rename) may cross from the generated code back into the
/// source block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFeatures {
    pub navigation: bool,
}

/// One unit of generated code handed to the host.
///
/// `Text` is appended verbatim.  `Mapped` carries a source coordinate:
/// `(text, source, offset, features)` where `source` is the name of the
/// originating SFC block and `offset` a byte offset into that block's
/// content.  Serialized as a bare JSON string or a JSON 4-tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Code {
    Text(String),
    Mapped(String, String, u32, CodeFeatures),
}

impl Code {
    /// The text this fragment contributes to the generated code.
    pub fn text(&self) -> &str {
        match self {
            Code::Text(text) | Code::Mapped(text, ..) => text,
        }
    }
}

impl From<&str> for Code {
    fn from(text: &str) -> Self {
        Code::Text(text.to_string())
    }
}

impl From<String> for Code {
    fn from(text: String) -> Self {
        Code::Text(text)
    }
}

/// The recorded first occurrence of a top-level PHP variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableBinding {
    /// The variable name WITHOUT the `$` prefix (e.g. "title").
    pub name: String,
    /// Byte offset into the fragment, pointing just past the `$`.
    pub offset: u32,
    /// Semantic type name inferred from the initializer (e.g. "string").
    pub ty: &'static str,
}

/// A binding that was named in at least one `export(...)` call.
pub type ExportedVariable = VariableBinding;

/// One top-level block of a single-file component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfcBlock {
    /// Host-assigned identity of the block (e.g. "customBlock_0").  Mapped
    /// code fragments refer back to the block through this name.
    pub name: String,
    /// The tag name of the block (e.g. "php", "i18n").
    pub block_type: String,
    /// Raw inner text of the block.
    pub content: String,
    /// Byte offset of `content` within the whole file.
    pub start: usize,
}

/// The parts of a parsed single-file component this crate consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sfc {
    /// Non-standard top-level blocks, in file order.
    pub custom_blocks: Vec<SfcBlock>,
}
