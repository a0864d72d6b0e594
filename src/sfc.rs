//! Vue single-file-component block extraction
//!
//! Parses the top-level structure of a `.vue` file (template, script and
//! style sections) and returns the `<style>` blocks. Section boundaries are
//! recognized line by line; nothing inside a block is interpreted here.

use regex::Regex;
use std::sync::LazyLock;

// Static regex patterns compiled once
static TEMPLATE_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<template(\s+[^>]*)?>").unwrap());
static SCRIPT_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<script(\s+[^>]*)?>").unwrap());
static STYLE_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<style(\s+[^>]*)?>").unwrap());
static SECTION_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^</(template|script|style)>").unwrap());
static LANG_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"lang=["']?([^"'\s>]+)"#).unwrap());
static MODULE_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:^|\s)module(?:=|\s|$)").unwrap());

/// One `<style>` block of a Vue single-file component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBlock {
    /// The declared stylesheet dialect (`lang` attribute), `"css"` when absent.
    pub lang: String,
    /// Whether the block carries a `module` attribute.
    pub is_module: bool,
    /// Raw block content, tags excluded.
    pub content: String,
    /// 1-based line of the first content line within the component source.
    pub start_line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Template,
    Script,
    Style,
}

struct StyleBlockBuilder {
    lang: String,
    is_module: bool,
    start_line: usize,
}

impl StyleBlockBuilder {
    fn build(self, lines: &[&str]) -> StyleBlock {
        StyleBlock {
            lang: self.lang,
            is_module: self.is_module,
            content: lines.join("\n"),
            start_line: self.start_line,
        }
    }
}

/// Extract the ordered `<style>` blocks of a Vue component.
///
/// Template and script sections are tracked so their content is never
/// misattributed to a style block, but only style blocks are returned.
/// An unclosed section runs to the end of the file.
pub fn extract_style_blocks(source: &str) -> Vec<StyleBlock> {
    let mut blocks = Vec::new();
    let lines: Vec<&str> = source.lines().collect();

    let mut current: Option<Section> = None;
    let mut builder: Option<StyleBlockBuilder> = None;
    let mut content: Vec<&str> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if current.is_none() {
            let (section, attrs) = if let Some(m) = TEMPLATE_START_RE.captures(trimmed) {
                (Section::Template, m)
            } else if let Some(m) = SCRIPT_START_RE.captures(trimmed) {
                (Section::Script, m)
            } else if let Some(m) = STYLE_START_RE.captures(trimmed) {
                (Section::Style, m)
            } else {
                continue;
            };

            current = Some(section);
            if section == Section::Style {
                let attrs = attrs.get(1).map(|m| m.as_str()).unwrap_or("");
                builder = Some(StyleBlockBuilder {
                    lang: LANG_ATTR_RE
                        .captures(attrs)
                        .and_then(|m| m.get(1))
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_else(|| "css".to_string()),
                    is_module: MODULE_ATTR_RE.is_match(attrs),
                    start_line: i + 2,
                });
                content.clear();
            }
            continue;
        }

        if SECTION_END_RE.is_match(trimmed) {
            if let Some(builder) = builder.take() {
                blocks.push(builder.build(&content));
                content.clear();
            }
            current = None;
            continue;
        }

        if builder.is_some() {
            content.push(line);
        }
    }

    // Unclosed style block runs to end of file
    if let Some(builder) = builder.take() {
        blocks.push(builder.build(&content));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_basic_style_block() {
        let source = "<template>\n  <div>Hello</div>\n</template>\n\n<style module>\n.foo { color: red; }\n</style>";
        let blocks = extract_style_blocks(source);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lang, "css");
        assert!(blocks[0].is_module);
        assert_eq!(blocks[0].content, ".foo { color: red; }");
        assert_eq!(blocks[0].start_line, 6);
    }

    #[test]
    fn defaults_lang_to_css() {
        let blocks = extract_style_blocks("<style>\n</style>");
        assert_eq!(blocks[0].lang, "css");
        assert!(!blocks[0].is_module);
    }

    #[test]
    fn reads_lang_attribute_variants() {
        for source in [
            "<style lang=\"scss\" module>\n</style>",
            "<style lang='scss' module>\n</style>",
            "<style module lang=scss>\n</style>",
        ] {
            let blocks = extract_style_blocks(source);
            assert_eq!(blocks[0].lang, "scss", "source: {source}");
            assert!(blocks[0].is_module, "source: {source}");
        }
    }

    #[test]
    fn module_attribute_with_value() {
        let blocks = extract_style_blocks("<style module=\"classes\">\n.a {}\n</style>");
        assert!(blocks[0].is_module);
    }

    #[test]
    fn lang_module_is_not_the_module_attribute() {
        let blocks = extract_style_blocks("<style lang=\"module\">\n</style>");
        assert!(!blocks[0].is_module);
    }

    #[test]
    fn skips_template_and_script_content() {
        let source = "<template>\n<style module>\n</template>\n<script>\nconst css = '</style>';\n</script>\n<style module>\n.real {}\n</style>";
        let blocks = extract_style_blocks(source);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, ".real {}");
    }

    #[test]
    fn keeps_block_order() {
        let source = "<style>\n.a {}\n</style>\n<style module>\n.b {}\n</style>\n<style module lang=\"less\">\n.c {}\n</style>";
        let blocks = extract_style_blocks(source);
        assert_eq!(blocks.len(), 3);
        assert!(!blocks[0].is_module);
        assert_eq!(blocks[1].content, ".b {}");
        assert_eq!(blocks[2].lang, "less");
    }

    #[test]
    fn unclosed_style_block_runs_to_eof() {
        let source = "<style module>\n.open {\n  color: red;\n}";
        let blocks = extract_style_blocks(source);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, ".open {\n  color: red;\n}");
    }

    #[test]
    fn no_style_blocks() {
        let source = "<template>\n  <p>plain</p>\n</template>";
        assert!(extract_style_blocks(source).is_empty());
    }
}
