//! File transformer: walks a file's lines and inserts doc blocks.

use crate::classify;
use crate::model::{DeclarationKind, KindCounts, SourceLine, TransformResult};
use crate::synth;

/// Insert a doc block above every undocumented declaration in `text`.
///
/// Each line is classified against the raw line before it in the input.
/// Lines are split on `\n` and written back unchanged, so a file without
/// declarations to document comes back byte-identical.
pub fn transform(text: &str) -> TransformResult {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut by_kind = KindCounts::default();
    let mut lines_processed = 0;

    let mut previous = "";
    let mut pieces = text.split('\n').peekable();
    while let Some(raw) = pieces.next() {
        let is_last = pieces.peek().is_none();
        // A trailing newline leaves an empty final piece, which is not a line
        if is_last && raw.is_empty() {
            break;
        }
        lines_processed += 1;

        let line = SourceLine::new(raw);
        let kind = classify::classify(line.trimmed, previous);
        if kind != DeclarationKind::None {
            log::trace!("{} at line {}: {}", kind.label(), lines_processed, line.trimmed);
            if let Some(block) = synth::synthesize(kind, line.trimmed, line.indentation) {
                out.push_str(&block.render(line.eol()));
                by_kind.record(kind);
            }
        }

        out.push_str(raw);
        if !is_last {
            out.push('\n');
        }
        previous = raw;
    }

    TransformResult {
        text: out,
        lines_processed,
        blocks_inserted: by_kind.total(),
        by_kind,
    }
}
