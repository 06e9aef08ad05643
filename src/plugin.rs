//! The host-facing plugin layer.
//!
//! A host (a Vue language service) resolves every embedded code of a
//! single-file component through its registered [`LanguagePlugin`]s.  The
//! [`PhpBlockPlugin`] reacts to generated script codes: it analyses each
//! `<php>` custom block, and injects the resulting intersection suffix at
//! the end of the template context type.
use crate::cache::{CacheKey, FragmentCache};
use crate::codegen;
use crate::config::PluginOptions;
use crate::parser;
use crate::types::{Code, Sfc};

/// Version of the host plugin API this crate implements.
pub const PLUGIN_API_VERSION: f32 = 2.1;

/// Where a plugin writes generated code for one embedded file.
pub trait EmbeddedCodeSink {
    /// Host identity of the embedded code (e.g. "script_ts").
    fn id(&self) -> &str;

    /// Append `codes` at the end of the context type.
    fn inject_codes_end_of_ctx(&mut self, codes: Vec<Code>);
}

/// A capability the host invokes once per embedded-code resolution pass.
///
/// Implementations may write to `embedded` zero or more times; they must
/// never fail the pass.
pub trait LanguagePlugin {
    fn version(&self) -> f32 {
        PLUGIN_API_VERSION
    }

    fn resolve_embedded_code(
        &self,
        file_name: &str,
        sfc: &Sfc,
        embedded: &mut dyn EmbeddedCodeSink,
    );
}

/// In-memory embedded code with a movable context-end insertion point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedCode {
    pub id: String,
    pub content: Vec<Code>,
    /// Index in `content` where context members are injected; `None`
    /// means "at the end".
    pub ctx_end: Option<usize>,
}

impl EmbeddedCode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Concatenated text of the whole embedded code.
    pub fn to_source(&self) -> String {
        codegen::to_source(&self.content)
    }
}

impl EmbeddedCodeSink for EmbeddedCode {
    fn id(&self) -> &str {
        &self.id
    }

    fn inject_codes_end_of_ctx(&mut self, codes: Vec<Code>) {
        match self.ctx_end {
            Some(index) => {
                let index = index.min(self.content.len());
                let count = codes.len();
                self.content.splice(index..index, codes);
                self.ctx_end = Some(index + count);
            }
            None => self.content.extend(codes),
        }
    }
}

/// Exposes variables exported from `<php>` blocks as typed members.
#[derive(Debug, Default)]
pub struct PhpBlockPlugin {
    options: PluginOptions,
    cache: FragmentCache,
}

impl PhpBlockPlugin {
    pub fn new(options: PluginOptions) -> Self {
        Self {
            options,
            cache: FragmentCache::new(),
        }
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// The per-block code cache, for hosts that want to evict closed files.
    pub fn cache(&self) -> &FragmentCache {
        &self.cache
    }

    /// Codes for every matching block of `sfc`, in block order.
    ///
    /// Each block is cached on its own, so an edit in one block does not
    /// regenerate the others.
    pub fn generate(&self, file_name: &str, sfc: &Sfc) -> Vec<Code> {
        sfc.custom_blocks
            .iter()
            .filter(|block| block.block_type == self.options.block_type)
            .flat_map(|block| {
                let key = CacheKey::new(file_name, block.name.as_str());
                let codes = self.cache.get_or_compute(&key, &block.content, |content| {
                    let variables = parser::analyze_fragment(content);
                    tracing::debug!(
                        file = file_name,
                        block = %block.name,
                        exported = variables.len(),
                        "analysed php block"
                    );
                    codegen::render(&block.name, &variables)
                });
                codes.to_vec()
            })
            .collect()
    }
}

impl LanguagePlugin for PhpBlockPlugin {
    fn resolve_embedded_code(
        &self,
        file_name: &str,
        sfc: &Sfc,
        embedded: &mut dyn EmbeddedCodeSink,
    ) {
        if !embedded.id().starts_with(&self.options.embedded_prefix) {
            return;
        }
        if !sfc
            .custom_blocks
            .iter()
            .any(|block| block.block_type == self.options.block_type)
        {
            return;
        }

        let codes = self.generate(file_name, sfc);
        embedded.inject_codes_end_of_ctx(codes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injection_advances_the_context_end() {
        let mut code = EmbeddedCode::new("script_ts");
        code.content = vec![Code::from("type Ctx = {}"), Code::from(";")];
        code.ctx_end = Some(1);

        code.inject_codes_end_of_ctx(vec![Code::from(" & A")]);
        code.inject_codes_end_of_ctx(vec![Code::from(" & B")]);

        assert_eq!(code.to_source(), "type Ctx = {} & A & B;");
        assert_eq!(code.ctx_end, Some(3));
    }

    #[test]
    fn reports_plugin_api_version() {
        assert_eq!(PhpBlockPlugin::default().version(), 2.1);
    }

    #[test]
    fn injection_without_context_end_appends() {
        let mut code = EmbeddedCode::new("script_ts");
        code.inject_codes_end_of_ctx(vec![Code::from("x")]);
        assert_eq!(code.to_source(), "x");
        assert_eq!(code.ctx_end, None);
    }
}
