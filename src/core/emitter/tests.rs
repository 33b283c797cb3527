//! Tests for LaTeX table emission

use pretty_assertions::assert_eq;
use regex::Regex;

use super::*;
use crate::core::model::{
    BorderSpec, CellAlign, CellValue, Color, Environment, FloatOptions, FontSize, Length,
    LineStyle, Location, LongOptions, MergeSpec, Style, Table, TabularKind, Trim, VLine,
};
use crate::core::range::{CellPos, Range};
use crate::features::formatters::{NumberFormat, StarSide};
use crate::utils::error::ErrorKind;

fn latex(table: &Table) -> String {
    table.to_latex().unwrap()
}

fn nine() -> Table {
    Table::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
}

#[test]
fn test_basic_table() {
    let mut table = Table::new(vec![vec!["A", "B", "C"]]).unwrap();
    table.push_row([1, 2, 3]).unwrap();
    table.set_column_align(0, CellAlign::Left).unwrap();
    table.set_column_align(2, CellAlign::Right).unwrap();

    let expected = "\
\\begin{tabular}{lcr}
  A & B & C \\\\
  1 & 2 & 3 \\\\
\\end{tabular}";
    assert_eq!(latex(&table), expected);
}

#[test]
fn test_plain_grid_has_one_token_per_cell() {
    let out = latex(&nine());
    let rows: Vec<&str> = out.lines().filter(|l| l.ends_with("\\\\")).collect();
    assert_eq!(rows.len(), 3);

    let tokens: usize = rows.iter().map(|l| l.matches('&').count() + 1).sum();
    assert_eq!(tokens, 9);
    for cmd in ["\\hline", "\\cline", "rule", "|"] {
        assert!(!out.contains(cmd), "unexpected {} in {}", cmd, out);
    }
}

#[test]
fn test_colspan() {
    let mut table = Table::new(vec![vec!["Header", "", "X"], vec!["1", "2", "3"]]).unwrap();
    for b in 0..=3 {
        table.add_border(BorderSpec::vline(b)).unwrap();
    }
    table.merge(Range::region(0, 0..2)).unwrap();

    let out = latex(&table);
    assert!(out.contains("\\begin{tabular}{|c|c|c|}"));
    assert!(out.contains("  \\multicolumn{2}{|c|}{Header} & X \\\\"));
    assert!(out.contains("  1 & 2 & 3 \\\\"));
}

#[test]
fn test_rowspan() {
    let mut table = Table::new(vec![vec!["Span", "1", "2"], vec!["", "3", "4"]]).unwrap();
    table.merge(Range::region(0..2, 0)).unwrap();

    let expected = "\
\\begin{tabular}{ccc}
  \\multirow{2}{*}{Span} & 1 & 2 \\\\
  & 3 & 4 \\\\
\\end{tabular}";
    assert_eq!(latex(&table), expected);
}

#[test]
fn test_two_by_two_merge_single_span() {
    let mut table = Table::new(vec![vec!["M", ""], vec!["", ""]]).unwrap();
    table.merge(Range::region(0..2, 0..2)).unwrap();

    let out = latex(&table);
    assert_eq!(out.matches("\\multicolumn").count(), 1);
    assert_eq!(out.matches("\\multirow").count(), 1);
    assert!(out.contains("  \\multicolumn{2}{c}{\\multirow{2}{*}{M}} \\\\"));
    // the covered row only holds empty slots
    assert!(out.contains("\n  & \\\\\n"));
}

#[test]
fn test_bold_and_gray_scenario() {
    let mut table = nine();
    table.apply(Range::row(0), Style::Bold(true)).unwrap();
    table
        .apply(Range::column(0), Style::Background(Some(Color::new("gray").unwrap())))
        .unwrap();

    let expected = "\
\\begin{tabular}{ccc}
  \\cellcolor{gray} \\textbf{1} & \\textbf{2} & \\textbf{3} \\\\
  \\cellcolor{gray} 4 & 5 & 6 \\\\
  \\cellcolor{gray} 7 & 8 & 9 \\\\
\\end{tabular}";
    assert_eq!(latex(&table), expected);
}

#[test]
fn test_token_order() {
    let mut table = Table::new(vec![vec![5]]).unwrap();
    let cell = Range::cell(0, 0);
    table.apply(cell.clone(), Style::TextColor(Some(Color::new("red").unwrap()))).unwrap();
    table.apply(cell.clone(), Style::FontSize(Some(FontSize::Small))).unwrap();
    table.apply(cell.clone(), Style::Bold(true)).unwrap();
    table.apply(cell.clone(), Style::Italic(true)).unwrap();
    table.apply(cell.clone(), Style::Underline(true)).unwrap();
    table.apply(cell.clone(), Style::Rotation(Some(90))).unwrap();
    let tint = Color::new("gray").unwrap().with_opacity(20).unwrap();
    table.apply(cell.clone(), Style::Background(Some(tint))).unwrap();
    table.apply(cell, Style::Align(Some(CellAlign::Right))).unwrap();

    let out = latex(&table);
    assert!(out.contains(
        "\\multicolumn{1}{r}{\\cellcolor{gray!20} \\rotatebox{90}{\\uline{\\emph{\\textbf{{\\small \\textcolor{red}{5}}}}}}}"
    ));

    // identical input, identical output
    assert_eq!(out, latex(&table));
}

#[test]
fn test_empty_cell_gets_background_only() {
    let mut table = Table::new(vec![vec!["", "x"]]).unwrap();
    table.apply(Range::row(0), Style::Bold(true)).unwrap();
    table
        .apply(Range::cell(0, 0), Style::Background(Some(Color::new("yellow").unwrap())))
        .unwrap();
    assert!(latex(&table).contains("  \\cellcolor{yellow} & \\textbf{x} \\\\"));
}

#[test]
fn test_row_spacing() {
    let mut table = Table::new(vec![vec!["a", "b"], vec!["c", "d"]]).unwrap();
    table
        .apply(Range::cell(0, 1), Style::SpaceBelow(Some(Length::cm(1.0))))
        .unwrap();
    table
        .apply(Range::row(1), Style::SpaceAbove(Some(Length::new("2pt").unwrap())))
        .unwrap();

    let expected = "\
\\begin{tabular}{cc}
  a & b \\\\[1cm]
  \\addlinespace[2pt]
  c & d \\\\
\\end{tabular}";
    assert_eq!(latex(&table), expected);
}

#[test]
fn test_full_and_partial_lines() {
    let mut table = Table::new(vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]).unwrap();
    table.line_above(Range::row(0), LineStyle::double()).unwrap();
    table.line_below(Range::region(0, 1..3), LineStyle::single()).unwrap();
    table.line_below(Range::row(1), LineStyle::single()).unwrap();

    let expected = "\
\\begin{tabular}{ccc}
  \\hline\\hline
  a & b & c \\\\
  \\cline{2-3}
  d & e & f \\\\
  \\hline
\\end{tabular}";
    assert_eq!(latex(&table), expected);
}

#[test]
fn test_booktabs_rules() {
    let mut table = Table::new(vec![vec!["x", "y"], vec!["1", "2"], vec!["3", "4"]]).unwrap();
    table.line_above(Range::row(0), LineStyle::booktabs()).unwrap();
    table.line_below(Range::row(0), LineStyle::booktabs()).unwrap();
    table
        .line_below(Range::region(1, 1), LineStyle::booktabs().trimmed(Trim::Left))
        .unwrap();
    table.line_below(Range::row(2), LineStyle::booktabs()).unwrap();

    let out = latex(&table);
    let rules: Vec<&str> = out
        .lines()
        .map(str::trim)
        .filter(|l| l.contains("rule"))
        .collect();
    assert_eq!(
        rules,
        vec!["\\toprule", "\\midrule", "\\cmidrule(l){2-2}", "\\bottomrule"]
    );
}

#[test]
fn test_rule_inside_merge_is_dropped() {
    let mut table = Table::new(vec![vec!["m", "a"], vec!["", "b"], vec!["c", "d"]]).unwrap();
    table.merge(Range::region(0..2, 0)).unwrap();
    table.line_below(Range::row(0), LineStyle::single()).unwrap();
    table.line_below(Range::row(1), LineStyle::single()).unwrap();

    let out = latex(&table);
    assert!(out.contains("  \\multirow{2}{*}{m} & a \\\\\n  \\cline{2-2}\n  & b \\\\\n  \\hline\n"));
}

#[test]
fn test_vertical_lines_through_merge_continuation() {
    let mut table = Table::new(vec![vec!["m", "", "a"], vec!["", "", "b"]]).unwrap();
    table.merge(Range::region(0..2, 0..2)).unwrap();
    table.vline_after(0, VLine::Single).unwrap();
    table.vline_after(2, VLine::Double).unwrap();

    let expected = "\
\\begin{tabular}{c|cc||}
  \\multicolumn{2}{c}{\\multirow{2}{*}{m}} & a \\\\
  \\multicolumn{2}{c}{} & b \\\\
\\end{tabular}";
    assert_eq!(latex(&table), expected);
}

#[test]
fn test_merge_continuation_keeps_background() {
    let mut table = Table::new(vec![vec!["m", "a"], vec!["", "b"]]).unwrap();
    table.merge(Range::region(0..2, 0)).unwrap();
    table
        .apply(Range::cell(0, 0), Style::Background(Some(Color::new("cyan").unwrap())))
        .unwrap();

    let out = latex(&table);
    assert!(out.contains("  \\cellcolor{cyan} \\multirow{2}{*}{m} & a \\\\"));
    assert!(out.contains("  \\cellcolor{cyan} & b \\\\"));
}

#[test]
fn test_number_formats() {
    let mut table = Table::new(vec![vec![
        CellValue::Int(1234567),
        CellValue::Float(3.14159),
        CellValue::Float(0.03),
    ]])
    .unwrap();
    table
        .apply(Range::cell(0, 0), Style::Format(NumberFormat::Thousands))
        .unwrap();
    table
        .apply(Range::cell(0, 1), Style::Format(NumberFormat::Fixed(2)))
        .unwrap();
    table
        .apply(
            Range::cell(0, 2),
            Style::Format(NumberFormat::Fixed(2).with_stars(StarSide::Right, vec![0.1, 0.05, 0.01])),
        )
        .unwrap();

    assert!(latex(&table).contains("  1,234,567 & 3.14 & 0.03** \\\\"));
}

#[test]
fn test_render_errors() {
    let mut table = Table::new(vec![vec!["Mean", "1"]]).unwrap();
    table
        .apply(Range::all(), Style::Format(NumberFormat::Fixed(1)))
        .unwrap();
    assert_eq!(table.render().unwrap_err().kind(), ErrorKind::Render);

    let mut table = nine();
    table.merge_span(MergeSpec::new((2, 2), 2, 1).unwrap()).unwrap();
    assert_eq!(table.render().unwrap_err().kind(), ErrorKind::Render);

    let mut table = Table::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let huge = MergeSpec {
        anchor: CellPos::new(1, 0),
        rows: usize::MAX,
        cols: 1,
    };
    table.merge_span(huge).unwrap();
    assert_eq!(table.render().unwrap_err().kind(), ErrorKind::Render);

    let mut table = nine();
    table.add_border(BorderSpec::hline(4)).unwrap();
    assert_eq!(table.render().unwrap_err().kind(), ErrorKind::Render);

    let mut table = nine();
    table.add_border(BorderSpec::vline(4)).unwrap();
    assert_eq!(table.render().unwrap_err().kind(), ErrorKind::Render);
}

#[test]
fn test_deferred_bounds_resolved_by_growth() {
    let mut table = Table::new(vec![vec!["a"], vec!["b"]]).unwrap();
    table.add_border(BorderSpec::hline(3)).unwrap();
    table.merge_span(MergeSpec::new((1, 0), 2, 1).unwrap()).unwrap();
    assert!(table.render().is_err());

    table.push_row([""]).unwrap();
    let out = latex(&table);
    assert!(out.contains("\\multirow{2}{*}{b}"));
    assert!(out.ends_with("  \\hline\n\\end{tabular}"));
}

#[test]
fn test_float_presentation() {
    let mut table = Table::new(vec![vec!["a", "b"]]).unwrap();
    table.set_float(FloatOptions::new("Results").with_label("tab:res"));

    let expected = "\
\\begin{table}[htbp]
  \\centering
  \\captionsetup{singlelinecheck=false,justification=centering}
  \\caption{Results \\label{tab:res}}
  \\begin{tabular}{cc}
    a & b \\\\
  \\end{tabular}
\\end{table}";
    assert_eq!(latex(&table), expected);
}

#[test]
fn test_float_location_and_indent() {
    let mut table = Table::new(vec![vec!["a"]]).unwrap();
    table.set_float(FloatOptions::new("Left").with_location(Location::Left));
    table.set_kind(TabularKind::Tabu);

    let out = table
        .render_with_options(&RenderOptions::new().with_indent(4))
        .unwrap()
        .content;
    assert!(out.contains("    \\raggedright\n"));
    assert!(out.contains("justification=raggedright"));
    assert!(out.contains("    \\begin{tabu}{c}\n        a \\\\\n    \\end{tabu}"));
}

#[test]
fn test_notes() {
    let mut table = Table::new(vec![vec!["a", "b"]]).unwrap();
    table.add_note("Source: survey", FontSize::ScriptSize);

    let expected = "\
\\begin{ThreePartTable}
  \\begin{tabular}{cc}
    a & b \\\\
  \\end{tabular}
  \\begin{tablenotes}
    \\scriptsize
    \\item Source: survey
  \\end{tablenotes}
\\end{ThreePartTable}";
    assert_eq!(latex(&table), expected);
}

#[test]
fn test_long_table() {
    let mut table = Table::new(vec![vec!["h1", "h2"], vec!["1", "2"], vec!["3", "4"]]).unwrap();
    table.line_below(Range::row(0), LineStyle::single()).unwrap();
    table.set_long(LongOptions::new("Long").with_label("tab:long"));

    let expected = "\
\\begin{longtable}[c]{cc}
  \\caption{Long \\label{tab:long}} \\\\
  h1 & h2 \\\\
  \\hline
  \\endfirsthead
  \\multicolumn{2}{c}{\\tablename\\ \\thetable\\ -- \\emph{Continued from previous page}} \\\\
  h1 & h2 \\\\
  \\hline
  \\endhead
  \\multicolumn{2}{r}{\\emph{Continued on next page}} \\\\
  \\endfoot
  \\endlastfoot
  1 & 2 \\\\
  3 & 4 \\\\
\\end{longtable}";
    assert_eq!(latex(&table), expected);
}

#[test]
fn test_long_table_with_notes() {
    let mut table = Table::new(vec![vec!["h"], vec!["1"]]).unwrap();
    table.set_kind(TabularKind::Tabu);
    table.set_long(LongOptions::uncaptioned(1));
    table.add_note("n1", FontSize::Tiny);

    let out = latex(&table);
    assert!(out.starts_with("\\begin{ThreePartTable}\n  \\begin{TableNotes}\n    \\tiny\n"));
    assert!(out.contains("  \\begin{longtabu}{c}\n"));
    assert!(out.contains("\\multicolumn{1}{c}{\\emph{Continued from previous page}} \\\\"));
    assert!(out.contains("    \\insertTableNotes \\\\\n    \\endlastfoot\n    1 \\\\\n"));
    assert!(!out.contains("\\caption"));
}

#[test]
fn test_long_kind_without_presentation() {
    let mut table = Table::new(vec![vec!["a"], vec!["b"]]).unwrap();
    table.set_kind(TabularKind::LongTable);

    let expected = "\
\\begin{longtable}[c]{c}
  a \\\\
  b \\\\
\\end{longtable}";
    assert_eq!(latex(&table), expected);

    table.set_float(FloatOptions::default());
    assert_eq!(table.render().unwrap_err().kind(), ErrorKind::Render);
}

#[test]
fn test_environments_wrap_outermost_last() {
    let mut table = Table::new(vec![vec!["a"]]).unwrap();
    table.add_environment(Environment::new("landscape"), false);
    table.add_environment(Environment::new("adjustbox").with_post("{max width=\\textwidth}"), true);

    let expected = "\
\\begin{landscape}
  \\begin{adjustbox}{max width=\\textwidth}
    \\begin{tabular}{c}
      a \\\\
    \\end{tabular}
  \\end{adjustbox}
\\end{landscape}";
    assert_eq!(latex(&table), expected);
}

#[test]
fn test_raw_column_spec() {
    let mut table = Table::new(vec![vec!["a", "b"]]).unwrap();
    table.set_column_spec("p{3cm}r");
    table.vline_after(0, VLine::Single).unwrap();
    table
        .apply(Range::cell(0, 1), Style::Align(Some(CellAlign::Left)))
        .unwrap();

    let out = latex(&table);
    assert!(out.starts_with("\\begin{tabular}{p{3cm}r}"));
    assert!(out.contains("a & \\multicolumn{1}{l}{b} \\\\"));
}

#[test]
fn test_warnings_forwarded() {
    let table = Table::new(vec![vec!["50%", "ok"]]).unwrap();
    let out = table.render().unwrap();
    assert!(out.has_warnings());
    assert_eq!(out.warnings[0].position, Some(CellPos::new(0, 0)));
}

/// Re-extract values, bold flags, spans and full rules from the markup
#[test]
fn test_round_trip_structure() {
    let mut table = Table::new(vec![
        vec!["h", "", "x"],
        vec!["", "", "y"],
        vec!["1", "2", "3"],
    ])
    .unwrap();
    table.merge(Range::region(0..2, 0..2)).unwrap();
    table.apply(Range::row(2), Style::Bold(true)).unwrap();
    table.line_below(Range::row(1), LineStyle::single()).unwrap();

    let out = latex(&table);

    let multicolumn = Regex::new(r"^\\multicolumn\{(\d+)\}\{[^}]*\}\{(.*)\}$").unwrap();
    let multirow = Regex::new(r"^\\multirow\{(\d+)\}\{\*\}\{(.*)\}$").unwrap();
    let bold = Regex::new(r"^\\textbf\{(.*)\}$").unwrap();

    let mut values = Vec::new();
    let mut bolds = Vec::new();
    let mut spans = Vec::new();
    let mut rules = Vec::new();
    let mut row = 0;

    for line in out.lines().map(str::trim) {
        if line == "\\hline" {
            rules.push(row);
            continue;
        }
        let Some(content) = line.strip_suffix("\\\\") else {
            continue;
        };
        let mut col = 0;
        for token in content.split('&').map(str::trim) {
            let (mut cols, mut rows, mut text) = (1, 1, token.to_string());
            if let Some(caps) = multicolumn.captures(&text.clone()) {
                cols = caps[1].parse().unwrap();
                text = caps[2].to_string();
            }
            if let Some(caps) = multirow.captures(&text.clone()) {
                rows = caps[1].parse().unwrap();
                text = caps[2].to_string();
            }
            if rows > 1 || cols > 1 {
                spans.push((CellPos::new(row, col), rows, cols));
            }
            if let Some(caps) = bold.captures(&text.clone()) {
                bolds.push(CellPos::new(row, col));
                text = caps[1].to_string();
            }
            if !text.is_empty() {
                values.push((CellPos::new(row, col), text));
            }
            col += cols;
        }
        row += 1;
    }

    assert_eq!(row, 3);
    assert_eq!(spans, vec![(CellPos::new(0, 0), 2, 2)]);
    assert_eq!(rules, vec![2]);
    assert_eq!(
        bolds,
        vec![CellPos::new(2, 0), CellPos::new(2, 1), CellPos::new(2, 2)]
    );
    let expected: Vec<(CellPos, String)> = [
        ((0, 0), "h"),
        ((0, 2), "x"),
        ((1, 2), "y"),
        ((2, 0), "1"),
        ((2, 1), "2"),
        ((2, 2), "3"),
    ]
    .into_iter()
    .map(|(p, v)| (CellPos::from(p), v.to_string()))
    .collect();
    assert_eq!(values, expected);
}
