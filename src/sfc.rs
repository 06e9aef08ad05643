//! Minimal single-file-component block scanner.
//!
//! Splits a `.vue` file into its top-level blocks just far enough to hand
//! custom blocks to the plugin: `<template>`, `<script>` and `<style>` are
//! recognised and skipped, every other top-level tag becomes a custom
//! block named `customBlock_<n>`.  Block bodies are treated as raw text,
//! so PHP like `$a < $b` inside a block is never mistaken for markup.
use crate::types::{Sfc, SfcBlock};

const STANDARD_BLOCKS: [&str; 3] = ["template", "script", "style"];

/// Scan `source` for top-level blocks.
pub fn parse_sfc(source: &str) -> Sfc {
    let mut sfc = Sfc::default();
    let mut pos = 0;

    while let Some(rel) = source[pos..].find('<') {
        let tag_start = pos + rel;
        let rest = &source[tag_start..];

        if rest.starts_with("<!--") {
            pos = match rest.find("-->") {
                Some(end) => tag_start + end + 3,
                None => break,
            };
            continue;
        }

        let Some(name) = tag_name(&rest[1..]) else {
            pos = tag_start + 1;
            continue;
        };
        let Some(open_end) = opening_tag_end(source, tag_start + 1 + name.len()) else {
            break;
        };
        if source[..open_end].ends_with("/>") {
            pos = open_end;
            continue;
        }

        let content_start = open_end;
        let Some((content_end, close_end)) = find_closing_tag(source, name, content_start) else {
            tracing::debug!(tag = name, "unterminated block");
            break;
        };

        if !STANDARD_BLOCKS.contains(&name) {
            sfc.custom_blocks.push(SfcBlock {
                name: format!("customBlock_{}", sfc.custom_blocks.len()),
                block_type: name.to_string(),
                content: source[content_start..content_end].to_string(),
                start: content_start,
            });
        }
        pos = close_end;
    }

    sfc
}

/// Read a tag name at the start of `s`.
fn tag_name(s: &str) -> Option<&str> {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(s.len());
    let name = &s[..end];
    if name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        Some(name)
    } else {
        None
    }
}

/// Byte offset just past the `>` closing an opening tag, skipping quoted
/// attribute values.
fn opening_tag_end(source: &str, from: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in source[from..].char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(from + i + 1),
            _ => {}
        }
    }
    None
}

/// Find `</name>` for a block opened before `from`.
///
/// Returns the offset where the content ends and the offset just past the
/// closing tag.  `<template>` may nest, so inner template tags are counted;
/// every other block is raw text up to its first closing tag.
fn find_closing_tag(source: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let open = format!("<{name}");
    let close = format!("</{name}");
    let mut depth = 0usize;
    let mut pos = from;

    loop {
        let next_close = source[pos..].find(&close).map(|i| pos + i)?;
        if name == "template" {
            let mut scan = pos;
            while let Some(i) = source[scan..next_close].find(&open) {
                let at = scan + i;
                if is_tag_boundary(source, at + open.len()) {
                    depth += 1;
                }
                scan = at + open.len();
            }
        }
        let after = next_close + close.len();
        if !is_tag_boundary(source, after) {
            pos = after;
            continue;
        }
        let close_end = source[after..].find('>').map(|i| after + i + 1)?;
        if depth == 0 {
            return Some((next_close, close_end));
        }
        depth -= 1;
        pos = close_end;
    }
}

fn is_tag_boundary(source: &str, at: usize) -> bool {
    source[at..]
        .chars()
        .next()
        .is_none_or(|c| c == '>' || c == '/' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_custom_blocks_in_order() {
        let source = concat!(
            "<template><div>{{ title }}</div></template>\n",
            "<php>\n$title = 'Hi';\nexport($title);\n</php>\n",
            "<script setup lang=\"ts\">const a = 1;</script>\n",
            "<i18n lang=\"json\">{}</i18n>\n",
        );
        let sfc = parse_sfc(source);

        assert_eq!(sfc.custom_blocks.len(), 2);
        let php = &sfc.custom_blocks[0];
        assert_eq!(php.name, "customBlock_0");
        assert_eq!(php.block_type, "php");
        assert_eq!(php.content, "\n$title = 'Hi';\nexport($title);\n");
        assert_eq!(&source[php.start..php.start + php.content.len()], php.content);
        assert_eq!(sfc.custom_blocks[1].name, "customBlock_1");
        assert_eq!(sfc.custom_blocks[1].block_type, "i18n");
    }

    #[test]
    fn block_bodies_are_raw_text() {
        let sfc = parse_sfc("<php>if ($a < $b) { $c = '</div>'; }</php>");
        assert_eq!(sfc.custom_blocks[0].content, "if ($a < $b) { $c = '</div>'; }");
    }

    #[test]
    fn nested_templates_and_comments_are_skipped() {
        let source = concat!(
            "<!-- <php>$hidden = 1;</php> -->\n",
            "<template><template v-if=\"ok\"><p/></template></template>\n",
            "<php>$x = 1;</php>\n",
        );
        let sfc = parse_sfc(source);
        assert_eq!(sfc.custom_blocks.len(), 1);
        assert_eq!(sfc.custom_blocks[0].content, "$x = 1;");
    }

    #[test]
    fn unterminated_block_is_ignored() {
        assert!(parse_sfc("<php>$x = 1;").custom_blocks.is_empty());
    }
}
