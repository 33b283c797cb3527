//! Horizontal rule markup for LaTeX table generation

use crate::core::model::{LineStyle, RuleKind, Trim};

/// Position of a full-width booktabs rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulePosition {
    Top,
    Middle,
    Bottom,
}

/// A horizontal line on one row boundary
#[derive(Debug, Clone, PartialEq)]
pub enum LatexHLine {
    /// Spans every column
    Full {
        style: LineStyle,
        position: RulePosition,
    },
    /// Spans columns `start..end` (0-indexed, end exclusive)
    Partial {
        start: usize,
        end: usize,
        style: LineStyle,
    },
}

impl LatexHLine {
    /// Generate LaTeX code for this line
    pub fn to_latex(&self) -> String {
        match self {
            LatexHLine::Full { style, position } => {
                let cmd = match (style.kind, position) {
                    (RuleKind::Plain, _) => "\\hline",
                    (RuleKind::Booktabs, RulePosition::Top) => "\\toprule",
                    (RuleKind::Booktabs, RulePosition::Middle) => "\\midrule",
                    (RuleKind::Booktabs, RulePosition::Bottom) => "\\bottomrule",
                };
                cmd.repeat(style.count)
            }
            LatexHLine::Partial { start, end, style } => {
                // LaTeX columns are 1-indexed
                let cols = format!("{{{}-{}}}", start + 1, end);
                match style.kind {
                    RuleKind::Plain => format!("\\cline{}", cols).repeat(style.count),
                    RuleKind::Booktabs => {
                        let rule = format!("\\cmidrule{}{}", style.trim.arg(), cols);
                        vec![rule; style.count].join("\\morecmidrules")
                    }
                }
            }
        }
    }
}

/// Collapse per-column segments into lines
///
/// `segments[c]` is the style drawn over column `c`, if any. A boundary
/// where every column carries the same untrimmed style becomes one full
/// line; otherwise each run of equal styles becomes a partial line.
pub fn collapse_segments(segments: &[Option<LineStyle>], position: RulePosition) -> Vec<LatexHLine> {
    if let Some(Some(first)) = segments.first() {
        let uniform = segments.iter().all(|s| s.as_ref() == Some(first));
        if uniform && first.trim == Trim::None {
            return vec![LatexHLine::Full {
                style: *first,
                position,
            }];
        }
    }

    let mut lines = Vec::new();
    let mut c = 0;
    while c < segments.len() {
        let Some(style) = segments[c] else {
            c += 1;
            continue;
        };
        let start = c;
        while c < segments.len() && segments[c] == Some(style) {
            c += 1;
        }
        lines.push(LatexHLine::Partial {
            start,
            end: c,
            style,
        });
    }
    lines
}
