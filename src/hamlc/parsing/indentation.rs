//! Indentation parser
//!
//!     Turns template text into a [LineNode] tree.
//!
//!     Indentation is measured in characters (spaces and tabs count the same) and converted to
//!     depth by dividing by the indentation unit. The unit is not fixed: it is whatever the
//!     first indented line uses, so templates indented by 2, 3 or 4 spaces (or by tabs) all
//!     parse to the same shape.
//!
//! Algorithm
//!
//!     1. Scan every non-blank line once, recording its physical line number, its depth and its
//!        text with the indentation removed. A line whose indentation is not a multiple of the
//!        unit fails here.
//!     2. Group recursively, starting at depth 0. Lines at the target depth become nodes; runs
//!        of deeper lines are buffered and, once the run ends, grouped one level deeper and
//!        attached as children of the node that precedes them.
//!     3. A buffered run with no preceding node (the first line of the block is too deep) has
//!        nowhere to go and is rejected. This also catches skipped levels.
//!
//!     Line numbers are assigned from one counter threaded through the recursion. A node is
//!     numbered when it is met and its children are numbered when its block is flushed, which
//!     happens before the next sibling is numbered, so numbering follows document order.

use crate::hamlc::error::{CompileError, CompileResult};
use crate::hamlc::tree::LineNode;
use tracing::debug;

/// A non-blank source line after the indentation scan.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScannedLine<'a> {
    source_line: usize,
    depth: usize,
    text: &'a str,
}

/// Parse template source into a tree. The returned node is the synthetic root.
pub fn parse(source: &str) -> CompileResult<LineNode> {
    let unit = detect_indentation_unit(source);
    let lines = scan_lines(source, unit)?;

    let mut line_counter = 0;
    let children = group_lines(&lines, 0, &mut line_counter)?;

    debug!(unit, nodes = line_counter, "parsed template");
    Ok(LineNode::root(children))
}

/// Number of whitespace characters making up one level of indentation.
///
/// Taken from the first non-blank line that is indented at all; 1 when no line is.
pub fn detect_indentation_unit(source: &str) -> usize {
    source
        .lines()
        .filter(|line| !is_blank(line))
        .map(leading_whitespace)
        .find(|&count| count > 0)
        .unwrap_or(1)
}

/// Depth of a line in indentation units.
pub fn indentation_depth(line: &str, unit: usize, source_line: usize) -> CompileResult<usize> {
    let count = leading_whitespace(line);
    if count % unit != 0 {
        return Err(CompileError::MalformedIndentation {
            line: source_line,
            message: format!(
                "{} leading whitespace characters is not a multiple of the indentation unit ({})",
                count, unit
            ),
        });
    }
    Ok(count / unit)
}

fn is_spacing_character(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| is_spacing_character(*b)).count()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn scan_lines(source: &str, unit: usize) -> CompileResult<Vec<ScannedLine<'_>>> {
    let mut scanned = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if is_blank(line) {
            continue;
        }
        let source_line = index + 1;
        let depth = indentation_depth(line, unit, source_line)?;
        scanned.push(ScannedLine {
            source_line,
            depth,
            // spaces and tabs are single bytes, so the character count is a byte offset
            text: &line[leading_whitespace(line)..],
        });
    }
    Ok(scanned)
}

/// Group `lines` into the nodes found at `depth`, attaching deeper runs as children.
///
/// Every line handed in is at `depth` or deeper.
fn group_lines(
    lines: &[ScannedLine<'_>],
    depth: usize,
    line_counter: &mut usize,
) -> CompileResult<Vec<LineNode>> {
    let mut nodes: Vec<LineNode> = Vec::new();
    let mut pending_block: Option<usize> = None;

    for (index, line) in lines.iter().enumerate() {
        if line.depth > depth {
            pending_block.get_or_insert(index);
            continue;
        }

        if let Some(start) = pending_block.take() {
            attach_block(&mut nodes, &lines[start..index], depth, line_counter)?;
        }
        *line_counter += 1;
        nodes.push(LineNode::new(line.text, *line_counter, line.source_line));
    }

    if let Some(start) = pending_block {
        attach_block(&mut nodes, &lines[start..], depth, line_counter)?;
    }

    Ok(nodes)
}

fn attach_block(
    nodes: &mut [LineNode],
    block: &[ScannedLine<'_>],
    depth: usize,
    line_counter: &mut usize,
) -> CompileResult<()> {
    let Some(parent) = nodes.last_mut() else {
        let first = &block[0];
        return Err(CompileError::MalformedIndentation {
            line: first.source_line,
            message: format!(
                "line is nested {} level(s) deep but has no parent line at depth {}",
                first.depth, depth
            ),
        });
    };
    parent.children = group_lines(block, depth + 1, line_counter)?;
    Ok(())
}
