//! Integration tests for recovering the line tree from indentation

use hamlc::hamlc::error::CompileError;
use hamlc::hamlc::parsing::{detect_indentation_unit, parse};
use hamlc::hamlc::testing::{assert_tree, flatten_texts};
use rstest::rstest;

#[test]
fn test_box_with_nested_span() {
    let tree = parse(".box#main\n  %span Hi").unwrap();

    assert_tree(&tree).child_count(1).child(0, |node| {
        node.text(".box#main")
            .line_number(1)
            .child_count(1)
            .child(0, |span| {
                span.text("%span Hi").line_number(2).leaf();
            });
    });
}

#[test]
fn test_siblings_and_dedent() {
    let source = "%html\n  %head\n    %title T\n  %body\n    %p one\n    %p two\n%footer\n";
    let tree = parse(source).unwrap();

    assert_tree(&tree)
        .child_texts(&["%html", "%footer"])
        .child(0, |html| {
            html.child_texts(&["%head", "%body"])
                .child(0, |head| {
                    head.child_texts(&["%title T"]);
                })
                .child(1, |body| {
                    body.line_number(4)
                        .child_texts(&["%p one", "%p two"])
                        .child(1, |p| {
                            p.line_number(6).leaf();
                        });
                });
        })
        .child(1, |footer| {
            footer.line_number(7).leaf();
        });
}

#[test]
fn test_blank_lines_do_not_count() {
    let tree = parse("%a\n\n   \n%b\n").unwrap();
    assert_tree(&tree)
        .child_count(2)
        .child(1, |b| {
            b.text("%b").line_number(2);
        });
    assert_eq!(tree.children[1].source_line, 4);
}

#[test]
fn test_empty_template_has_no_children() {
    let tree = parse("").unwrap();
    assert!(tree.is_root());
    assert_tree(&tree).leaf();
    assert_tree(&parse("\n  \n\n").unwrap()).leaf();
}

#[rstest]
#[case::two_spaces("%a\n  %b\n", 2)]
#[case::four_spaces("%a\n    %b\n", 4)]
#[case::tab("%a\n\t%b\n", 1)]
#[case::flat("%a\n%b\n", 1)]
#[case::blank_first("\n   \n%a\n   %b\n", 3)]
fn test_detect_indentation_unit(#[case] source: &str, #[case] unit: usize) {
    assert_eq!(detect_indentation_unit(source), unit);
}

#[rstest]
#[case::not_a_multiple("%a\n  %b\n   %c\n", 3)]
#[case::skipped_level("%a\n  %b\n      %c\n", 3)]
#[case::orphan_first_line("  %a\n%b\n", 1)]
#[case::after_blank_lines("%a\n\n  %b\n\n     %c\n", 5)]
fn test_malformed_indentation(#[case] source: &str, #[case] expected_line: usize) {
    match parse(source) {
        Err(CompileError::MalformedIndentation { line, .. }) => assert_eq!(line, expected_line),
        other => panic!("expected MalformedIndentation, got {:?}", other),
    }
}

#[test]
fn test_text_keeps_inner_spacing() {
    let tree = parse("%pre\n  a  b   c\n").unwrap();
    assert_tree(&tree).child(0, |pre| {
        pre.child(0, |text| {
            text.text("a  b   c");
        });
    });
}

#[test]
fn test_flatten_follows_document_order() {
    let source = "%a\n  %b\n    %c\n  %d\n%e\n";
    let tree = parse(source).unwrap();
    assert_eq!(flatten_texts(&tree), vec!["%a", "%b", "%c", "%d", "%e"]);
    let numbers: Vec<usize> = tree.descendants().iter().map(|n| n.line_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_each_parse_numbers_from_one() {
    let first = parse("%a\n%b\n").unwrap();
    let second = parse("%c\n").unwrap();
    assert_eq!(first.children[1].line_number, 2);
    assert_eq!(second.children[0].line_number, 1);
}
