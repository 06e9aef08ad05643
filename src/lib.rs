//! php_sfc_types: typed members for `<php>` blocks in Vue components.
//!
//! A `<php>` custom block declares variables and lists the ones the
//! template may use with `export(...)`:
//!
//! ```php
//! $title = 'Orders';
//! $rows = [];
//! export($title, $rows);
//! ```
//!
//! The [`PhpBlockPlugin`] turns that into a suffix for the generated
//! script's context type, ` & { title: string; rows: unknown[]; }`, with
//! every member name mapped back to the variable's first occurrence so
//! go-to-definition lands inside the block.
//!
//! Modules:
//! - [`parser`]: fragment parsing, node classification, type inference and
//!   variable collection
//! - [`codegen`]: rendering exported variables as mapped code
//! - [`cache`]: per-block cache keyed on the exact block text
//! - [`plugin`]: the host-facing [`LanguagePlugin`] trait and its
//!   implementation
//! - [`sfc`]: a small `.vue` block scanner used by the CLI
//! - [`config`]: plugin options and the crate's error type
pub mod cache;
pub mod codegen;
pub mod config;
pub mod parser;
pub mod plugin;
pub mod sfc;
pub mod types;

pub use cache::{CacheKey, FragmentCache};
pub use config::{Error, PluginOptions, Result};
pub use parser::analyze_fragment;
pub use plugin::{EmbeddedCode, EmbeddedCodeSink, LanguagePlugin, PhpBlockPlugin};
pub use types::{Code, CodeFeatures, ExportedVariable, Sfc, SfcBlock, VariableBinding};
