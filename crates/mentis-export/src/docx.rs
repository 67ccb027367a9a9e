use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// What a rendered line contributes to the document.
enum Line<'a> {
    Empty,
    Heading1(&'a str),
    Heading2(&'a str),
    Bullet(&'a str),
    PageBreak,
    Body(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Line::Empty
    } else if let Some(text) = trimmed.strip_prefix("## ") {
        Line::Heading2(text)
    } else if let Some(text) = trimmed.strip_prefix("# ") {
        Line::Heading1(text)
    } else if let Some(text) = trimmed.strip_prefix("- ") {
        Line::Bullet(text)
    } else if trimmed == "---" {
        Line::PageBreak
    } else {
        Line::Body(trimmed)
    }
}

/// Generate a DOCX document from rendered template output.
///
/// The rendered content uses a simple subset:
/// - `# Heading` → DOCX Heading 1
/// - `## Heading` → DOCX Heading 2
/// - `- item` → bullet list item (prefixed with bullet character)
/// - `**bold**` → bold run
/// - `---` → page break
/// - Everything else → normal paragraph
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size));

    for line in rendered.lines() {
        let paragraph = match classify(line) {
            Line::Empty => Paragraph::new(),
            Line::Heading1(text) => heading_paragraph(text, "Heading1"),
            Line::Heading2(text) => heading_paragraph(text, "Heading2"),
            Line::Bullet(text) => bullet_paragraph(text, styles),
            Line::PageBreak => {
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
            }
            Line::Body(text) => body_paragraph(text, styles),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let bullet_run = Run::new()
        .add_text("\u{2022} ")
        .fonts(RunFonts::new().ascii(&styles.body_font));

    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(bullet_run);
    for run in inline_runs(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in inline_runs(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn text_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Parse simple inline formatting: `**bold**` segments. An unclosed marker
/// falls back to plain text.
fn inline_runs(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut rest = text;

    loop {
        let Some(open) = rest.find("**") else {
            if !rest.is_empty() {
                runs.push(text_run(rest, styles));
            }
            break;
        };

        let (plain, tail) = rest.split_at(open);
        if !plain.is_empty() {
            runs.push(text_run(plain, styles));
        }

        let tail = &tail[2..];
        match tail.find("**") {
            Some(close) => {
                runs.push(text_run(&tail[..close], styles).bold());
                rest = &tail[close + 2..];
            }
            None => {
                if !tail.is_empty() {
                    runs.push(text_run(tail, styles));
                }
                break;
            }
        }
    }

    runs
}
