//! Integration tests for the tree renderer, driven through a recording backend

use hamlc::hamlc::compiler::CompilerOptions;
use hamlc::hamlc::error::{BraceError, CompileError};
use hamlc::hamlc::parsing::parse;
use hamlc::hamlc::rendering::{render, Renderer};
use hamlc::hamlc::testing::{AbstractBackend, RecordingBackend};
use hamlc::Compiler;

fn render_recorded(source: &str) -> (String, RecordingBackend) {
    let backend = RecordingBackend::new();
    let tree = parse(source).unwrap();
    let output = render(&tree, &backend).unwrap();
    (output, backend)
}

#[test]
fn test_element_with_inline_text() {
    let (output, _) = render_recorded("%p Hello");
    assert_eq!(output, "[line 1]\n<p >\nHello\n</p>");
}

#[test]
fn test_children_are_spliced_between_tags() {
    let (output, _) = render_recorded("%ul\n  %li a\n  %li b\n");
    assert_eq!(
        output,
        [
            "[line 1]", "<ul >", "[line 2]", "<li >", "a", "</li>", "[line 3]", "<li >", "b",
            "</li>", "</ul>",
        ]
        .join("\n")
    );
}

#[test]
fn test_children_win_over_inline_content() {
    let (output, _) = render_recorded("%p inline\n  nested\n");
    assert_eq!(output, "[line 1]\n<p >\n[line 2]\nnested\n</p>");
}

#[test]
fn test_statement_wraps_children_without_marker() {
    let (output, backend) = render_recorded("- if (x)\n  hi\n");
    assert_eq!(output, "[stmt - if (x)]\n[line 2]\nhi\n[end]");
    assert_eq!(backend.call_count("emit_line_marker"), 1);
    assert_eq!(backend.call_count("emit_statement"), 1);
}

#[test]
fn test_statement_without_body() {
    let (output, _) = render_recorded("- var x = 1\n= x\n");
    assert_eq!(output, "[stmt - var x = 1]\n[end]\n[line 2]\n[expr x]");
}

#[test]
fn test_expression_lines_lose_their_marker() {
    let (output, _) = render_recorded("= a + b\n!= raw\n");
    assert_eq!(output, "[line 1]\n[expr a + b]\n[line 2]\n[expr = raw]");
}

#[test]
fn test_children_of_text_and_expression_lines_are_dropped() {
    let (output, backend) = render_recorded("hello\n  world\n= x\n  y\n");
    assert_eq!(output, "[line 1]\nhello\n[line 3]\n[expr x]");
    // the dropped children were still rendered
    assert_eq!(backend.call_count("emit_line_marker"), 4);
}

#[test]
fn test_self_closing_element_discards_children() {
    let (output, backend) = render_recorded("%img{src: u}\n  %p x\n");
    assert_eq!(output, "[line 1]\n<img {{attrs({src: u}, {})}}/>");
    assert_eq!(backend.call_count("emit_line_marker"), 2);
}

#[test]
fn test_initialize_is_called_once() {
    let (_, backend) = render_recorded("%a\n  %b\n    %c\n%d\n");
    assert_eq!(backend.call_count("initialize"), 1);

    let (output, backend) = render_recorded("");
    assert_eq!(output, "");
    assert_eq!(backend.call_count("initialize"), 1);
}

#[test]
fn test_doctype_lines_when_enabled() {
    let options = CompilerOptions {
        doctypes: true,
        ..CompilerOptions::default()
    };
    let backend = RecordingBackend::new();
    let tree = parse("!!! 5\n%html\n").unwrap();
    let output = Renderer::new(&backend, &options).render(&tree).unwrap();
    assert_eq!(output, "[line 1]\n<!DOCTYPE html>\n[line 2]\n<html >\n</html>");
}

#[test]
fn test_doctype_lines_are_expressions_by_default() {
    let (output, _) = render_recorded("!!! 5\n");
    assert_eq!(output, "[line 1]\n[expr !! 5]");
}

#[test]
fn test_unknown_doctype_is_unsupported() {
    let options = CompilerOptions {
        doctypes: true,
        ..CompilerOptions::default()
    };
    let tree = parse("!!! html6\n").unwrap();
    let err = Renderer::new(&RecordingBackend::new(), &options)
        .render(&tree)
        .unwrap_err();
    assert_eq!(err, CompileError::unsupported("doctype `html6`"));
}

#[test]
fn test_custom_self_closing_tags() {
    let options = CompilerOptions {
        self_closing: vec!["source".to_string()],
        doctypes: false,
    };
    let backend = RecordingBackend::new();
    let tree = parse("%source\n%img\n").unwrap();
    let output = Renderer::new(&backend, &options).render(&tree).unwrap();
    assert_eq!(output, "[line 1]\n<source />\n[line 2]\n<img >\n</img>");
}

#[test]
fn test_backend_without_capabilities_fails() {
    let tree = parse("%p Hello").unwrap();
    assert_eq!(
        render(&tree, &AbstractBackend),
        Err(CompileError::unsupported("emit_line_marker"))
    );
    assert_eq!(
        render(&parse("").unwrap(), &AbstractBackend),
        Err(CompileError::unsupported("initialize"))
    );
}

#[test]
fn test_unbalanced_attribute_block_reports_source_line() {
    let compiler = Compiler::new(RecordingBackend::new());
    assert_eq!(
        compiler.convert("%p ok\n\n%a{href: x\n"),
        Err(CompileError::UnbalancedAttributeBlock {
            line: 3,
            text: "%a{href: x".to_string(),
            source: BraceError::Unclosed { depth: 1 },
        })
    );
}

#[test]
fn test_nested_errors_abort_compilation() {
    let compiler = Compiler::new(RecordingBackend::new());
    let err = compiler.convert("%div\n  %span\n    %a}\n").unwrap_err();
    assert!(matches!(
        err,
        CompileError::UnbalancedAttributeBlock { line: 3, .. }
    ));
}
