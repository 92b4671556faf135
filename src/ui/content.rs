//! Builds what the tool-list and tool-detail screens display.
//!
//! Everything here is a pure function of the catalog data and the requested
//! width.

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

use crate::catalog::{Phase, Tool};
use crate::ui::theme::Theme;
use crate::ui::widgets::ListEntry;

pub const DESCRIPTION_HEADER: &str = "Description:";
pub const START_COMMAND_HEADER: &str = "Start Command:";
pub const COMMANDS_HEADER: &str = "Commands:";
pub const DETAIL_HELP: &str = "↑/k up • ↓/j down • backspace back • q quit";
pub const RULE: &str = "─";

const COMMAND_INDENT: usize = 2;
const COMMAND_DESCRIPTION_INDENT: usize = 4;

/// One row per tool, in catalog order.
pub fn build_tool_list_items(phase: &Phase) -> Vec<ListEntry> {
    phase
        .tools
        .iter()
        .map(|tool| ListEntry::new(tool.name.clone(), tool.description.clone()))
        .collect()
}

/// The rendered detail page for one tool, wrapped to a fixed width.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailDocument {
    width: u16,
    text: Text<'static>,
}

impl DetailDocument {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn into_text(self) -> Text<'static> {
        self.text
    }

    pub fn line_count(&self) -> usize {
        self.text.lines.len()
    }

    /// The document without styling, one string per line.
    pub fn plain_lines(&self) -> Vec<String> {
        self.text.lines.iter().map(plain_line).collect()
    }
}

pub fn plain_line(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Compose the detail page: title, description, start command, numbered
/// commands, a rule exactly `content_width` wide and the help footer.
///
/// `content_width` must be at least 1.
pub fn build_detail_document(tool: &Tool, content_width: u16, theme: &Theme) -> DetailDocument {
    debug_assert!(content_width >= 1, "content width must be positive");
    let width = usize::from(content_width);
    let mut lines: Vec<Line<'static>> = Vec::new();

    // Title block, padded one column on each side when there is room
    let pad = if width > 2 { " " } else { "" };
    for piece in wrap(&tool.name, width - 2 * pad.len()) {
        let padded = format!("{pad}{piece}{pad}");
        lines.push(Line::from(Span::styled(padded, theme.title)));
    }
    lines.push(Line::default());

    push_header(&mut lines, DESCRIPTION_HEADER, width, theme);
    push_wrapped(&mut lines, &tool.description, width, 0, theme.content);
    lines.push(Line::default());

    push_header(&mut lines, START_COMMAND_HEADER, width, theme);
    push_wrapped(&mut lines, &tool.start_command, width, COMMAND_INDENT, theme.command);
    lines.push(Line::default());

    push_header(&mut lines, COMMANDS_HEADER, width, theme);
    // Ordinals are never split, so "N. " may overrun a width below its length
    for (i, command) in tool.commands.iter().enumerate() {
        let ordinal = format!("{}. ", i + 1);
        let indent = ordinal.chars().count();
        for (n, piece) in wrap(&command.command_text, width.saturating_sub(indent))
            .into_iter()
            .enumerate()
        {
            let lead = if n == 0 {
                ordinal.clone()
            } else {
                " ".repeat(indent)
            };
            lines.push(Line::from(vec![
                Span::raw(lead),
                Span::styled(piece, theme.command),
            ]));
        }
        push_wrapped(
            &mut lines,
            &command.description,
            width,
            COMMAND_DESCRIPTION_INDENT,
            theme.description,
        );
        lines.push(Line::default());
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(RULE.repeat(width), theme.dimmed)));
    push_wrapped(&mut lines, DETAIL_HELP, width, 0, theme.help);

    DetailDocument {
        width: content_width,
        text: Text::from(lines),
    }
}

fn push_header(lines: &mut Vec<Line<'static>>, header: &str, width: usize, theme: &Theme) {
    for piece in wrap(header, width) {
        lines.push(Line::from(Span::styled(piece, theme.section)));
    }
}

fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: usize,
    indent: usize,
    style: Style,
) {
    let indent = indent.min(width / 2);
    for piece in wrap(text, width - indent) {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(indent)),
            Span::styled(piece, style),
        ]));
    }
}

/// Wrap `text` to `width` columns. Empty text still yields one (empty) line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut pieces: Vec<String> = textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|piece| piece.into_owned())
        .collect();
    if pieces.is_empty() {
        pieces.push(String::new());
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Command;

    fn nmap() -> Tool {
        Tool {
            name: "Nmap".into(),
            description: "Port scanner".into(),
            start_command: "nmap -sV".into(),
            commands: vec![
                Command {
                    command_text: "nmap -p- target".into(),
                    description: "full port scan".into(),
                },
                Command {
                    command_text: "nmap -sU target".into(),
                    description: "UDP scan".into(),
                },
            ],
        }
    }

    fn position(lines: &[String], needle: &str) -> usize {
        lines
            .iter()
            .position(|l| l.trim() == needle)
            .unwrap_or_else(|| panic!("{needle:?} not found in {lines:#?}"))
    }

    #[test]
    fn test_tool_list_items_follow_tool_order() {
        let phase = Phase {
            name: "Scanning".into(),
            description: String::new(),
            tools: vec![
                nmap(),
                Tool {
                    name: "Masscan".into(),
                    description: "Fast scanner".into(),
                    start_command: String::new(),
                    commands: vec![],
                },
            ],
        };
        let items = build_tool_list_items(&phase);
        assert_eq!(
            items,
            vec![
                ListEntry::new("Nmap", "Port scanner"),
                ListEntry::new("Masscan", "Fast scanner"),
            ]
        );
        assert_eq!(items, build_tool_list_items(&phase));
    }

    #[test]
    fn test_tool_list_items_empty_phase() {
        let phase = Phase {
            name: "Reporting".into(),
            description: String::new(),
            tools: vec![],
        };
        assert!(build_tool_list_items(&phase).is_empty());
    }

    #[test]
    fn test_detail_sections_in_order() {
        let doc = build_detail_document(&nmap(), 60, &Theme::default());
        let lines = doc.plain_lines();

        let title = position(&lines, "Nmap");
        let desc_header = position(&lines, DESCRIPTION_HEADER);
        let desc = position(&lines, "Port scanner");
        let start_header = position(&lines, START_COMMAND_HEADER);
        let start = position(&lines, "nmap -sV");
        let commands_header = position(&lines, COMMANDS_HEADER);
        let first = position(&lines, "1. nmap -p- target");
        let first_desc = position(&lines, "full port scan");
        let second = position(&lines, "2. nmap -sU target");
        let rule = position(&lines, &RULE.repeat(60));
        let help = position(&lines, DETAIL_HELP);

        let order = [
            title,
            desc_header,
            desc,
            start_header,
            start,
            commands_header,
            first,
            first_desc,
            second,
            rule,
            help,
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{lines:#?}");
        assert_eq!(first_desc, first + 1);
        // blank line between entries
        assert!(lines[first_desc + 1].trim().is_empty());
    }

    #[test]
    fn test_empty_start_command_is_kept() {
        let mut tool = nmap();
        tool.start_command.clear();
        let lines = build_detail_document(&tool, 40, &Theme::default()).plain_lines();
        let header = position(&lines, START_COMMAND_HEADER);
        assert!(lines[header + 1].trim().is_empty());
        assert!(lines[header + 2].trim().is_empty());
        assert_eq!(lines[header + 3].trim(), COMMANDS_HEADER);
    }

    #[test]
    fn test_rule_matches_content_width() {
        for width in [1u16, 12, 73] {
            let doc = build_detail_document(&nmap(), width, &Theme::default());
            let lines = doc.plain_lines();
            let rule = lines
                .iter()
                .find(|l| !l.is_empty() && l.chars().all(|c| c == '─'))
                .unwrap();
            assert_eq!(rule.chars().count(), usize::from(width));
            assert_eq!(doc.width(), width);
        }
    }

    #[test]
    fn test_width_only_changes_line_breaks() {
        let mut tool = nmap();
        tool.description = "Network exploration tool and security or port scanner \
                            used for host discovery and service detection"
            .into();
        let theme = Theme::default();
        let wide = build_detail_document(&tool, 100, &theme).plain_lines();
        let narrow = build_detail_document(&tool, 24, &theme).plain_lines();
        assert!(narrow.len() > wide.len());

        let headers = |lines: &[String]| -> Vec<String> {
            lines
                .iter()
                .map(|l| l.trim().to_string())
                .filter(|l| {
                    [DESCRIPTION_HEADER, START_COMMAND_HEADER, COMMANDS_HEADER].contains(&l.as_str())
                })
                .collect()
        };
        assert_eq!(headers(&wide), headers(&narrow));

        let words = |lines: &[String]| -> Vec<String> {
            lines
                .iter()
                .filter(|l| !l.chars().all(|c| c == '─'))
                .flat_map(|l| l.split_whitespace().map(str::to_string).collect::<Vec<_>>())
                .collect()
        };
        assert_eq!(words(&wide), words(&narrow));
    }

    #[test]
    fn test_tiny_widths_stay_within_rule() {
        let mut tool = nmap();
        tool.commands.clear();
        for width in [1u16, 2, 3] {
            let lines = build_detail_document(&tool, width, &Theme::default()).plain_lines();
            for line in &lines {
                assert!(
                    line.chars().count() <= usize::from(width),
                    "{line:?} exceeds width {width}"
                );
            }
            assert!(lines.contains(&RULE.repeat(usize::from(width))));
        }

        let title: String = build_detail_document(&tool, 1, &Theme::default())
            .plain_lines()
            .into_iter()
            .take_while(|l| !l.is_empty())
            .collect();
        assert_eq!(title, "Nmap");
    }

    #[test]
    fn test_narrow_lines_fit_width() {
        let mut tool = nmap();
        tool.description = "a description that is definitely longer than twenty columns".into();
        let doc = build_detail_document(&tool, 20, &Theme::default());
        for line in doc.plain_lines() {
            assert!(line.chars().count() <= 20, "{line:?} exceeds width");
        }
    }
}
