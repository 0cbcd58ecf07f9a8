//! Output renderers: plain-text preview, JSON, and the bare layout plan.
//!
//! The text preview is a diagnostic view of what goes on each page. Practice
//! cells are drawn as `□`, one per cell the layout plan allows.

use super::Worksheet;
use crate::layout::LayoutPlan;
use crate::model::{PrintMode, Question, QuestionDetail, Relation};
use crate::pagination::{PageFooter, PageHeader};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

/// Display columns of the text preview.
pub const PREVIEW_WIDTH: usize = 64;

const CELL: &str = "□";
const BLANK: &str = "（　　　）";

/// How the CLI prints a worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Layout,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Layout => "layout",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "layout" => Ok(OutputFormat::Layout),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Renders `worksheet` in the requested format.
///
/// # Errors
///
/// Only JSON serialization can fail.
pub fn render(worksheet: &Worksheet, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(worksheet)),
        OutputFormat::Json => serde_json::to_string_pretty(worksheet),
        OutputFormat::Layout => render_layout(&worksheet.layout),
    }
}

/// The layout plan alone, as JSON.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn render_layout(plan: &LayoutPlan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(plan)
}

/// Plain-text preview, one block per page.
pub fn render_text(worksheet: &Worksheet) -> String {
    let practice_cells = worksheet.layout.practice_cells() as usize;
    let show_hint = worksheet.settings.show_hint;
    let mut out = String::new();

    for (i, page) in worksheet.pages.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_header(&mut out, &page.header);
        for (number, question) in page.page.numbered() {
            let body = question_line(question, worksheet.settings.mode, practice_cells, show_hint);
            out.push_str(&format!("{number:>3}. {body}\n"));
        }
        push_footer(&mut out, &page.footer);
    }

    out
}

fn push_header(out: &mut String, header: &PageHeader) {
    out.push_str(&"=".repeat(PREVIEW_WIDTH));
    out.push('\n');
    match header {
        PageHeader::Full {
            title,
            instruction,
            date,
            name_label,
        } => {
            out.push_str(&spread(title, date, PREVIEW_WIDTH));
            out.push('\n');
            out.push_str(&spread(instruction, &format!("{name_label}：＿＿＿＿＿＿"), PREVIEW_WIDTH));
        }
        PageHeader::Compact { title, date } => {
            out.push_str(&spread(title, date, PREVIEW_WIDTH));
        }
    }
    out.push('\n');
    out.push_str(&"-".repeat(PREVIEW_WIDTH));
    out.push('\n');
}

fn push_footer(out: &mut String, footer: &PageFooter) {
    out.push_str(&"-".repeat(PREVIEW_WIDTH));
    out.push('\n');
    let summary = footer.summary();
    out.push_str(&spread("", &summary, PREVIEW_WIDTH));
    out.push('\n');
    if let Some(attribution) = &footer.attribution {
        out.push_str(attribution);
        out.push('\n');
    }
}

/// `left` and `right` on one line, padded by display width.
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let used = left.width() + right.width();
    let gap = width.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}

fn cells(n: usize) -> String {
    CELL.repeat(n)
}

fn question_line(question: &Question, mode: PrintMode, practice_cells: usize, show_hint: bool) -> String {
    let target = question.kanji.character.as_str();

    match &question.detail {
        QuestionDetail::Example { example, sentence } => match mode {
            PrintMode::Reading => format!("{}{BLANK}", example.word),
            PrintMode::Writing => {
                let prompt = example.word.replace(target, CELL);
                let practice = if show_hint && practice_cells > 0 {
                    format!("{target}{}", cells(practice_cells - 1))
                } else {
                    cells(practice_cells)
                };
                format!("{prompt}（{}）  {practice}", example.reading)
            }
            PrintMode::StrokeCount => format!("{target}  {BLANK}画"),
            PrintMode::StrokeOrder => format!("{target}  {}", cells(practice_cells)),
            PrintMode::Sentence => {
                let text = sentence.as_deref().unwrap_or(&example.word);
                format!("{text}\n     {}", cells(practice_cells))
            }
            PrintMode::Homophone | PrintMode::Radical | PrintMode::Okurigana | PrintMode::Antonym => {
                format!("{}（{}）", example.word, example.reading)
            }
        },
        QuestionDetail::Homophone { reading, options } => {
            let context = options
                .iter()
                .find(|o| o.kanji == target)
                .map(|o| o.context.replace(target, "（　）"))
                .unwrap_or_default();
            let choices: Vec<&str> = options.iter().map(|o| o.kanji.as_str()).collect();
            format!("［{reading}］ {context}  {{{}}}", choices.join("・"))
        }
        QuestionDetail::Radical { target_kanji, .. } => {
            format!("{target_kanji}  部首{BLANK}  名前（　　　　　　）")
        }
        QuestionDetail::Okurigana { stem, hint, .. } => {
            let boxes = cells(practice_cells);
            match hint.as_deref().filter(|_| show_hint) {
                Some(hint) => format!("{stem}{boxes}  （{hint}）"),
                None => format!("{stem}{boxes}"),
            }
        }
        QuestionDetail::Antonym {
            relation,
            source_kanji,
            ..
        } => {
            let arrow = match relation {
                Relation::Antonym => "⇔",
                Relation::Synonym => "≒",
            };
            format!("{}  {source_kanji} {arrow} （　）", relation.label())
        }
    }
}
