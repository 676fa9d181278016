//! Markdown parser for terminal rendering.
//!
//! Converts markdown (lesson sections, chat replies, review card answers,
//! cheat sheets) into styled ratatui Lines. Handles headings, bold, italic,
//! inline code, fenced code blocks, and bullet lists; plain URLs are
//! highlighted via regex.

use once_cell::sync::Lazy;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

const STYLE_HEADING: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const STYLE_INLINE_CODE: Style = Style::new().fg(Color::Cyan);
const STYLE_CODE_BLOCK: Style = Style::new().fg(Color::Gray);
const STYLE_URL: Style = Style::new()
    .fg(Color::Blue)
    .add_modifier(Modifier::UNDERLINED);

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s<>\[\]]+").expect("valid URL regex"));

/// Render markdown text to a vector of styled Lines.
///
/// Gracefully handles malformed markdown by rendering whatever parses;
/// it never fails.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current_spans: Vec<Span<'static>> = Vec::new();

    // Style stack for nested formatting
    let mut style_stack: Vec<Style> = vec![Style::default()];
    let mut in_code_block = false;

    let flush =
        |lines: &mut Vec<Line<'static>>, current_spans: &mut Vec<Span<'static>>| {
            if !current_spans.is_empty() {
                lines.push(Line::from(std::mem::take(current_spans)));
            }
        };

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::CodeBlock(_) => {
                    flush(&mut lines, &mut current_spans);
                    in_code_block = true;
                    style_stack.push(STYLE_CODE_BLOCK);
                }
                Tag::Heading { .. } => {
                    flush(&mut lines, &mut current_spans);
                    style_stack.push(STYLE_HEADING);
                }
                Tag::Strong => {
                    let current = *style_stack.last().unwrap_or(&Style::default());
                    style_stack.push(current.add_modifier(Modifier::BOLD));
                }
                Tag::Emphasis => {
                    let current = *style_stack.last().unwrap_or(&Style::default());
                    style_stack.push(current.add_modifier(Modifier::ITALIC));
                }
                Tag::Paragraph => {
                    if !lines.is_empty() {
                        lines.push(Line::default());
                    }
                }
                Tag::Item => {
                    flush(&mut lines, &mut current_spans);
                    let current = *style_stack.last().unwrap_or(&Style::default());
                    current_spans.push(Span::styled("• ".to_string(), current));
                }
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::CodeBlock => {
                    flush(&mut lines, &mut current_spans);
                    in_code_block = false;
                    style_stack.pop();
                }
                TagEnd::Heading(_) => {
                    flush(&mut lines, &mut current_spans);
                    style_stack.pop();
                }
                TagEnd::Strong | TagEnd::Emphasis => {
                    style_stack.pop();
                }
                TagEnd::Paragraph | TagEnd::Item => {
                    flush(&mut lines, &mut current_spans);
                }
                _ => {}
            },
            Event::Text(text) => {
                let style = *style_stack.last().unwrap_or(&Style::default());
                if in_code_block {
                    // Preserve line structure inside code blocks
                    for (i, part) in text.split('\n').enumerate() {
                        if i > 0 {
                            flush(&mut lines, &mut current_spans);
                        }
                        if !part.is_empty() {
                            current_spans.push(Span::styled(part.to_string(), style));
                        }
                    }
                } else {
                    append_text_with_urls(&mut current_spans, &text, style);
                }
            }
            Event::Code(code) => {
                current_spans.push(Span::styled(code.to_string(), STYLE_INLINE_CODE));
            }
            Event::SoftBreak => {
                current_spans.push(Span::raw(" "));
            }
            Event::HardBreak => {
                flush(&mut lines, &mut current_spans);
            }
            _ => {}
        }
    }

    flush(&mut lines, &mut current_spans);
    lines
}

/// Append text spans, highlighting any plain `http(s)://` URLs.
fn append_text_with_urls(spans: &mut Vec<Span<'static>>, text: &str, style: Style) {
    let mut last_end = 0;
    for m in URL_PATTERN.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(text[last_end..m.start()].to_string(), style));
        }
        spans.push(Span::styled(m.as_str().to_string(), STYLE_URL));
        last_end = m.end();
    }
    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), style));
    }
}
