#![allow(dead_code)]

use php_sfc_types::{Code, EmbeddedCode, LanguagePlugin, PhpBlockPlugin, Sfc, SfcBlock};

pub fn create_test_plugin() -> PhpBlockPlugin {
    PhpBlockPlugin::default()
}

/// Build an SFC holding one `<php>` block per entry of `blocks`.
pub fn php_sfc(blocks: &[&str]) -> Sfc {
    Sfc {
        custom_blocks: blocks
            .iter()
            .enumerate()
            .map(|(i, content)| SfcBlock {
                name: format!("customBlock_{i}"),
                block_type: "php".to_string(),
                content: content.to_string(),
                start: 0,
            })
            .collect(),
    }
}

/// Run one resolution pass against a fresh `script_ts` embedded code.
pub fn resolve(plugin: &PhpBlockPlugin, file: &str, sfc: &Sfc) -> EmbeddedCode {
    let mut embedded = EmbeddedCode::new("script_ts");
    plugin.resolve_embedded_code(file, sfc, &mut embedded);
    embedded
}

/// Generated source for a single-block file holding `fragment`.
pub fn generated(fragment: &str) -> String {
    let plugin = create_test_plugin();
    resolve(&plugin, "Test.vue", &php_sfc(&[fragment])).to_source()
}

/// The `(name, offset)` pairs of every mapped code.
pub fn mapped(codes: &[Code]) -> Vec<(&str, u32)> {
    codes
        .iter()
        .filter_map(|code| match code {
            Code::Mapped(name, _, offset, _) => Some((name.as_str(), *offset)),
            Code::Text(_) => None,
        })
        .collect()
}
