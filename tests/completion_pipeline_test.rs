//! End-to-end tests for the completion rebuild pipeline: Vue source in,
//! flat completion list out.

use pretty_assertions::assert_eq;
use tower_lsp::lsp_types::CompletionItemKind;
use vuemod_ls::lsp::completion::completions_for_source;

fn labels(source: &str) -> Vec<String> {
    completions_for_source(source).into_iter().map(|i| i.label).collect()
}

#[test]
fn document_without_module_block_yields_nothing() {
    let source = "<template>\n  <div class=\"foo\"/>\n</template>\n<style>\n.foo { color: red }\n</style>";
    assert_eq!(labels(source), Vec::<String>::new());
}

#[test]
fn module_block_classes_become_labels() {
    let source = "<style module>\n.foo { color: red }\n.foo-bar { color: blue }\n</style>";
    assert_eq!(labels(source), vec!["foo", "foo-bar"]);
}

#[test]
fn duplicate_classes_collapse_to_one_item() {
    let source = "<style module>\n.foo { color: red }\n.foo { color: blue }\n</style>";
    assert_eq!(labels(source), vec!["foo"]);
}

#[test]
fn duplicates_across_blocks_collapse_too() {
    let source = "<style module>\n.shared { }\n.first { }\n</style>\n<style module>\n.shared { }\n.second { }\n</style>";
    assert_eq!(labels(source), vec!["shared", "first", "second"]);
}

#[test]
fn non_module_blocks_contribute_nothing() {
    let source = "<style>\n.plain { }\n</style>\n<style module>\n.scoped { }\n</style>";
    assert_eq!(labels(source), vec!["scoped"]);
}

#[test]
fn id_selectors_are_not_admitted() {
    // Inherited behavior, see DESIGN.md
    let source = "<style module>\n#bar { }\n.foo { }\n</style>";
    assert_eq!(labels(source), vec!["foo"]);
}

#[test]
fn scss_blocks_use_the_scss_service() {
    let source = "<style lang=\"scss\" module>\n// comment\n.outer {\n  .inner { }\n  &.skipped { }\n}\n</style>";
    assert_eq!(labels(source), vec!["outer", "inner"]);
}

#[test]
fn less_blocks_use_the_less_service() {
    let source = "<style lang=\"less\" module>\n@w: 10px; // width\n.panel { width: @w }\n</style>";
    assert_eq!(labels(source), vec!["panel"]);
}

#[test]
fn unknown_lang_falls_back_to_css() {
    let source = "<style lang=\"stylus\" module>\n.still-found { }\n</style>";
    assert_eq!(labels(source), vec!["still-found"]);
}

#[test]
fn items_are_property_kind() {
    let source = "<style module>\n.foo { }\n</style>";
    let items = completions_for_source(source);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, Some(CompletionItemKind::PROPERTY));
}

#[test]
fn empty_and_garbage_sources_yield_nothing() {
    assert_eq!(labels(""), Vec::<String>::new());
    assert_eq!(labels("not a vue file"), Vec::<String>::new());
    assert_eq!(labels("<style module>\n{{{ garbage ;;\n</style>"), Vec::<String>::new());
}
