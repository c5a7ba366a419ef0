use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
};
use medease_core::{
    document::{self, AUDIT_ITEMS, SIMPLIFIED_TEXT},
    summary::SUMMARY_AUDIT,
    ChatRole, Category, FileKind, Language, QaMode, ReadingLevel, Segment, SourceKind,
    SummaryContent, SummaryKind,
};
use crate::app::{App, InputMode, LineInput, PrefsField, Tab};

const SAFETY_NOTICE: &str = "This tool explains medical documents. It does not provide medical advice. Always consult your healthcare provider.";

// Key style: dark background with bright text for visibility on both light/dark terminals
fn key_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

fn label_style() -> Style {
    Style::default().bg(Color::Black).fg(Color::White)
}

fn hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [Span::styled(key, key_style()), Span::styled(label, label_style())]
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(2));
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, safety notice, body, footer
    let [header_area, notice_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    app.body_area = Some(body_area);

    render_header(app, frame, header_area);
    render_safety_notice(frame, notice_area);

    match app.tab {
        Tab::Upload => render_upload(app, frame, body_area),
        Tab::Simplify => render_simplify(app, frame, body_area),
        Tab::Glossary => render_glossary(app, frame, body_area),
        Tab::Summaries => render_summaries(app, frame, body_area),
    }

    render_footer(app, frame, footer_area);

    if app.chat_open {
        render_chat(app, frame, body_area);
    } else {
        app.chat_area = None;
    }

    // Render popups (in order of priority)
    if app.show_preferences {
        render_preferences(app, frame, area);
    } else if app.show_term_detail {
        render_term_detail(app, frame, area);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let [title_area, tabs_area, info_area] = Layout::horizontal([
        Constraint::Length(10),
        Constraint::Min(0),
        Constraint::Length(22),
    ])
    .areas(area);

    let title = Paragraph::new(Span::styled(" MedEase ", Style::default().fg(Color::Cyan).bold()))
        .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(title, title_area);

    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label())))
        .collect();
    let selected = Tab::all().iter().position(|t| *t == app.tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, tabs_area);

    let info = Line::from(vec![
        Span::styled(app.language.label(), Style::default().fg(Color::White)),
        Span::raw(" "),
        Span::styled(
            format!("v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        ),
    ])
    .right_aligned();
    frame.render_widget(
        Paragraph::new(info).style(Style::default().bg(Color::DarkGray)),
        info_area,
    );
}

fn render_safety_notice(frame: &mut Frame, area: Rect) {
    let notice = Paragraph::new(Line::from(vec![
        Span::styled(" ! ", Style::default().fg(Color::Black).bg(Color::Yellow).bold()),
        Span::styled(format!(" {}", SAFETY_NOTICE), Style::default().fg(Color::Yellow)),
    ]));
    frame.render_widget(notice, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = if app.show_preferences {
        " PREFS "
    } else if app.chat_open {
        " CHAT "
    } else {
        match app.input_mode {
            InputMode::Normal => " NORMAL ",
            InputMode::Editing => " INPUT ",
        }
    };

    let mut hints: Vec<Span> = Vec::new();

    if app.show_preferences {
        hints.extend(hint(" j/k ", " field "));
        hints.extend(hint(" h/l ", " change "));
        hints.extend(hint(" Enter ", " save "));
        hints.extend(hint(" Esc ", " cancel "));
    } else if app.show_term_detail {
        hints.extend(hint(" Esc ", " close "));
    } else if app.chat_open {
        match app.input_mode {
            InputMode::Editing => {
                hints.extend(hint(" Enter ", " send "));
                hints.extend(hint(" Tab ", " mode "));
                hints.extend(hint(" Esc ", " done "));
            }
            InputMode::Normal => {
                hints.extend(hint(" i ", " type "));
                hints.extend(hint(" m ", " mode "));
                hints.extend(hint(" s ", " save transcript "));
                hints.extend(hint(" j/k ", " scroll "));
                hints.extend(hint(" Esc ", " close "));
                hints.extend(hint(" q ", " quit "));
            }
        }
    } else if app.input_mode == InputMode::Editing {
        match app.tab {
            Tab::Upload => {
                hints.extend(hint(" Enter ", " upload "));
                hints.extend(hint(" Esc ", " cancel "));
            }
            _ => {
                hints.extend(hint(" Enter/Esc ", " done "));
            }
        }
    } else {
        match app.tab {
            Tab::Upload => {
                if app.uploaded_file.is_some() {
                    hints.extend(hint(" r ", " upload another "));
                } else {
                    hints.extend(hint(" i ", " path "));
                }
            }
            Tab::Simplify => {
                hints.extend(hint(" j/k ", " term "));
                hints.extend(hint(" Enter ", " define "));
                hints.extend(hint(" w ", " what changed "));
            }
            Tab::Glossary => {
                hints.extend(hint(" / ", " search "));
                hints.extend(hint(" j/k ", " scroll "));
            }
            Tab::Summaries => {
                hints.extend(hint(" h/l ", " format "));
                hints.extend(hint(" a ", " audit "));
            }
        }
        hints.extend(hint(" 1-4 ", " tabs "));
        hints.extend(hint(" c ", " chat "));
        hints.extend(hint(" p ", " prefs "));
        hints.extend(hint(" L ", " lang "));
        hints.extend(hint(" q ", " quit "));
    }

    let mut spans = vec![Span::styled(mode_text, mode_style), Span::raw(" ")];
    spans.extend(hints);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a single-line input with horizontal scrolling, placing the cursor when focused
fn render_line_input(
    frame: &mut Frame,
    area: Rect,
    input: &LineInput,
    placeholder: &str,
    title: &str,
    focused: bool,
) {
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title.to_string());

    // Inner width = total width - 2 (for borders)
    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll_offset = if inner_width > 0 && input.cursor >= inner_width {
        input.cursor - inner_width + 1
    } else {
        0
    };

    let paragraph = if input.text.is_empty() {
        Paragraph::new(Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)))
    } else {
        let visible: String = input.text.chars().skip(scroll_offset).take(inner_width).collect();
        Paragraph::new(visible).style(Style::default().fg(Color::Cyan))
    };

    frame.render_widget(paragraph.block(block), area);

    if focused {
        let cursor_x = (input.cursor - scroll_offset) as u16;
        frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
    }
}

fn render_upload(app: &App, frame: &mut Frame, area: Rect) {
    let [steps_area, file_area, trust_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(7),
        Constraint::Length(1),
    ])
    .areas(area);

    let steps = Text::from(vec![
        Line::from(Span::styled(
            "Understand your medical documents",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(vec![Span::styled(" 1 ", key_style()), Span::raw(" Upload your medical document")]),
        Line::from(vec![Span::styled(" 2 ", key_style()), Span::raw(" View the simplified explanation")]),
        Line::from(vec![Span::styled(" 3 ", key_style()), Span::raw(" Ask questions via the chatbot")]),
    ]);
    frame.render_widget(Paragraph::new(steps).block(Block::default().borders(Borders::BOTTOM)), steps_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.uploaded_file.is_some() { Color::Green } else { Color::DarkGray }))
        .title(" Upload ");
    let inner = block.inner(file_area);
    frame.render_widget(block, file_area);

    if let Some(file) = &app.uploaded_file {
        let badge = match file.kind() {
            FileKind::Pdf => "[PDF]",
            FileKind::Image => "[IMG]",
            FileKind::Other => "[FILE]",
        };
        let text = Text::from(vec![
            Line::from(Span::styled("File uploaded successfully!", Style::default().fg(Color::Green).bold())),
            Line::default(),
            Line::from(vec![
                Span::styled(badge, Style::default().fg(Color::Magenta).bold()),
                Span::raw(" "),
                Span::styled(file.name.clone(), Style::default().bold()),
            ]),
            Line::from(Span::styled(format!("{} MB", file.size_mb()), Style::default().fg(Color::DarkGray))),
            Line::default(),
            Line::from(Span::styled("Press r to Upload Another File", Style::default().fg(Color::DarkGray))),
        ]);
        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
    } else {
        let [prompt_area, input_area, error_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(inner);

        let prompt = Text::from(vec![
            Line::from(Span::styled("Drag and drop your file here", Style::default().bold())),
            Line::from(Span::styled(
                "or type its path. Supports PDF, PNG, JPG (max 10MB)",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(Paragraph::new(prompt), prompt_area);

        let editing = app.input_mode == InputMode::Editing && !app.chat_open;
        render_line_input(
            frame,
            input_area,
            &app.upload_input,
            "Press i to enter a file path",
            " File path ",
            editing,
        );

        if let Some(error) = &app.upload_error {
            let error = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            frame.render_widget(error, error_area);
        }
    }

    let trust = Line::from(vec![
        Span::styled(" Secure & Private ", Style::default().fg(Color::Green)),
        Span::raw("·"),
        Span::styled(" HIPAA Compliant ", Style::default().fg(Color::Green)),
        Span::raw("·"),
        Span::styled(" Encrypted ", Style::default().fg(Color::Green)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(trust), trust_area);
}

fn render_simplify(app: &App, frame: &mut Frame, area: Rect) {
    let audit_height = if app.show_audit { (AUDIT_ITEMS.len() * 3 + 4) as u16 } else { 3 };
    let [panes_area, audit_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(audit_height),
    ])
    .areas(area);

    let [original_area, simplified_area] = Layout::horizontal([
        Constraint::Percentage(50),
        Constraint::Percentage(50),
    ])
    .areas(panes_area);

    // Original text with glossary terms underlined; the selected one reversed
    let term_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
    let mut spans: Vec<Span> = Vec::new();
    let mut term_position = 0;
    for segment in document::highlighted_original() {
        match segment {
            Segment::Plain(text) => spans.push(Span::raw(text)),
            Segment::Term { text, .. } => {
                let style = if app.selected_term == Some(term_position) {
                    term_style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
                } else {
                    term_style
                };
                spans.push(Span::styled(text, style));
                term_position += 1;
            }
        }
    }

    let mut original_lines = vec![Line::from(spans), Line::default()];
    if let Some(term) = app.current_term() {
        original_lines.push(Line::from(vec![
            Span::styled(format!("{}: ", term.term), Style::default().fg(Color::Yellow).bold()),
            Span::raw(term.definition),
        ]));
    } else {
        original_lines.push(Line::from(Span::styled(
            "Use j/k to step through highlighted terms",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let original = Paragraph::new(Text::from(original_lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Original Document "),
        )
        .wrap(Wrap { trim: true })
        .scroll((app.simplify_scroll, 0));
    frame.render_widget(original, original_area);

    let simplified_lines: Vec<Line> = SIMPLIFIED_TEXT.lines().map(Line::from).collect();
    let simplified = Paragraph::new(Text::from(simplified_lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Simplified Explanation "),
        )
        .wrap(Wrap { trim: true })
        .scroll((app.simplify_scroll, 0));
    frame.render_widget(simplified, simplified_area);

    render_audit(app, frame, audit_area);
}

fn render_audit(app: &App, frame: &mut Frame, area: Rect) {
    let title = format!(" What changed? ({} simplifications made) ", AUDIT_ITEMS.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(title);

    if !app.show_audit {
        let collapsed = Paragraph::new(Span::styled("Press w to expand", Style::default().fg(Color::DarkGray)))
            .block(block);
        frame.render_widget(collapsed, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for item in AUDIT_ITEMS {
        lines.push(Line::from(vec![
            Span::styled(item.original, Style::default().fg(Color::Red).add_modifier(Modifier::CROSSED_OUT)),
            Span::raw(" -> "),
            Span::styled(item.simplified, Style::default().fg(Color::Green).bold()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", item.reason),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::default());
    }

    let report = document::numeric_protection();
    let (status, color) = if report.passed() {
        ("numbers preserved", Color::Green)
    } else {
        ("numbers changed", Color::Red)
    };
    lines.push(Line::from(vec![
        Span::styled("Numeric check: ", Style::default().bold()),
        Span::styled(status, Style::default().fg(color)),
        Span::styled(
            format!(" (protected: {})", report.protected.join(", ")),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    frame.render_widget(Paragraph::new(Text::from(lines)).block(block).wrap(Wrap { trim: true }), area);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Cardiovascular => Color::Red,
        Category::Respiratory => Color::Blue,
        Category::Diagnostic => Color::Magenta,
        Category::Medication => Color::Green,
        Category::General => Color::Gray,
    }
}

fn render_glossary(app: &App, frame: &mut Frame, area: Rect) {
    let [search_area, list_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let editing = app.input_mode == InputMode::Editing && !app.chat_open;
    render_line_input(
        frame,
        search_area,
        &app.glossary_input,
        "Search medical terms...",
        " Medical Glossary ",
        editing,
    );

    let results = app.glossary_results();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} terms ", results.len()));

    if results.is_empty() {
        let empty = Paragraph::new(Span::styled(
            format!("No terms found matching \"{}\"", app.glossary_input.text),
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, list_area);
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .skip(app.glossary_scroll as usize)
        .map(|item| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(item.term, Style::default().fg(Color::Yellow).bold()),
                    Span::raw(" "),
                    Span::styled(
                        format!("[{}]", item.category.as_str()),
                        Style::default().fg(category_color(item.category)),
                    ),
                ]),
                Line::from(item.definition),
                Line::default(),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), list_area);
}

fn render_summaries(app: &App, frame: &mut Frame, area: Rect) {
    let audit_height = if app.show_summary_audit { 6 } else { 0 };
    let [selector_area, content_area, audit_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(audit_height),
    ])
    .areas(area);

    let mut selector: Vec<Span> = vec![Span::raw(" ")];
    for kind in SummaryKind::all() {
        let style = if kind == app.summary_kind {
            Style::default().bg(Color::Blue).fg(Color::White).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        selector.push(Span::styled(format!(" {} ", kind.label()), style));
        selector.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(selector)), selector_area);

    let lines: Vec<Line> = match app.summary_kind.content() {
        SummaryContent::Sentence(text) => vec![Line::from(Span::styled(text, Style::default().bold()))],
        SummaryContent::Bullets(items) => items
            .iter()
            .map(|item| Line::from(vec![Span::styled(" • ", Style::default().fg(Color::Cyan)), Span::raw(*item)]))
            .collect(),
        SummaryContent::Paragraphs(paragraphs) => paragraphs
            .iter()
            .flat_map(|p| [Line::from(*p), Line::default()])
            .collect(),
    };

    let content = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", app.summary_kind.label())),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(content, content_area);

    if app.show_summary_audit {
        let row = |label: &'static str, value: &'static str| {
            Line::from(vec![
                Span::styled(format!("{:<15}", label), Style::default().fg(Color::DarkGray)),
                Span::raw(value),
            ])
        };
        let audit = Paragraph::new(Text::from(vec![
            row("Original:", SUMMARY_AUDIT.original),
            row("Simplified:", SUMMARY_AUDIT.simplified),
            row("Reading level:", SUMMARY_AUDIT.reading_level),
            row("Accuracy:", SUMMARY_AUDIT.accuracy),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" Audit Trail "),
        );
        frame.render_widget(audit, audit_area);
    }
}

fn mode_color(mode: QaMode) -> Color {
    match mode {
        QaMode::Grounded => Color::Blue,
        QaMode::Related => Color::Green,
        QaMode::Hybrid => Color::Magenta,
    }
}

/// Floating chat panel anchored to the bottom-right of the body
fn render_chat(app: &mut App, frame: &mut Frame, body: Rect) {
    let width = 56.min(body.width);
    let height = 26.min(body.height);
    let area = Rect::new(body.x + body.width - width, body.y + body.height - height, width, height);
    app.chat_area = Some(area);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::styled(" MedEase Assistant ", Style::default().fg(Color::Cyan).bold()),
            Span::styled("Always here to help ", Style::default().fg(Color::DarkGray)),
        ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [mode_area, messages_area, input_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(inner);

    let current = app.chat.mode();
    let mut mode_spans: Vec<Span> = Vec::new();
    for mode in QaMode::all() {
        let style = if mode == current {
            Style::default().bg(mode_color(mode)).fg(Color::White).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        mode_spans.push(Span::styled(format!(" {} ", mode.label()), style));
    }
    let mode_text = Text::from(vec![
        Line::from(mode_spans),
        Line::from(Span::styled(current.description(), Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(Paragraph::new(mode_text), mode_area);

    // Store chat area dimensions for scroll calculations
    app.chat_height = messages_area.height;
    app.chat_width = messages_area.width;

    let mut lines: Vec<Line> = Vec::new();
    for msg in app.chat.messages() {
        match msg.role {
            ChatRole::User => {
                lines.push(Line::from(Span::styled(
                    "You:",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )));
            }
            ChatRole::Assistant => {
                let mut header = vec![Span::styled(
                    "AI:",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )];
                if let Some(mode) = msg.mode {
                    header.push(Span::styled(
                        format!(" [{}]", mode.label()),
                        Style::default().fg(mode_color(mode)),
                    ));
                }
                lines.push(Line::from(header));
            }
        }

        for line in msg.content.lines() {
            lines.push(Line::from(line.to_string()));
        }

        if msg.role == ChatRole::Assistant && !msg.sources.is_empty() {
            lines.push(Line::from(Span::styled("Sources used:", Style::default().fg(Color::DarkGray).bold())));
            for source in &msg.sources {
                let tag = match source.kind {
                    SourceKind::Document => "[doc]",
                    SourceKind::General => "[web]",
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {} ", tag), Style::default().fg(Color::Magenta)),
                    Span::styled(source.title.clone(), Style::default().fg(Color::DarkGray)),
                ]));
            }
        }
        lines.push(Line::default());
    }

    if app.chat.is_typing() {
        lines.push(Line::from(Span::styled(
            "AI:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        // Animated ellipsis: cycles through ".", "..", "..."
        let dots = ".".repeat((app.animation_frame as usize) + 1);
        lines.push(Line::from(Span::styled(
            format!("Typing{}", dots),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    let messages = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .scroll((app.chat_scroll, 0));
    frame.render_widget(messages, messages_area);

    let focused = app.input_mode == InputMode::Editing && !app.show_preferences;
    let title = match &app.chat_notice {
        Some(notice) => format!(" {} ", notice),
        None => " Message ".to_string(),
    };
    render_line_input(frame, input_area, &app.chat_input, "Ask me anything...", &title, focused);
}

fn render_preferences(app: &App, frame: &mut Frame, area: Rect) {
    let height = (ReadingLevel::all().len() + Language::all().len() + 8) as u16;
    let popup_area = centered_popup(area, 60, height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Preferences (Enter to save, Esc to cancel) ");

    let section = |title: &'static str, focused: bool| {
        let style = if focused {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().bold()
        };
        Line::from(Span::styled(title, style))
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(section("Reading Level", app.prefs_field == PrefsField::ReadingLevel));
    for level in ReadingLevel::all() {
        let chosen = level == app.prefs_draft.reading_level;
        let marker = if chosen { "(*) " } else { "( ) " };
        let style = if chosen { Style::default().fg(Color::Green) } else { Style::default() };
        lines.push(Line::from(vec![
            Span::styled(format!("  {}{}", marker, level.label()), style),
            Span::styled(format!("  {}", level.description()), Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines.push(Line::default());

    lines.push(section("Language", app.prefs_field == PrefsField::Language));
    for language in Language::all() {
        let chosen = language == app.prefs_draft.language;
        let marker = if chosen { "(*) " } else { "( ) " };
        let style = if chosen { Style::default().fg(Color::Green) } else { Style::default() };
        lines.push(Line::from(Span::styled(format!("  {}{}", marker, language.label()), style)));
    }

    if let Some(status) = &app.prefs_status {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(status.clone(), Style::default().fg(Color::Red))));
    }

    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(block).wrap(Wrap { trim: true }),
        popup_area,
    );
}

fn render_term_detail(app: &App, frame: &mut Frame, area: Rect) {
    let Some(term) = app.current_term() else {
        return;
    };

    let popup_area = centered_popup(area, 50, 8);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" {} ", term.term));

    let definition = Paragraph::new(term.definition)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(definition, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use medease_core::preferences::PREFERENCES_FILE;
    use medease_core::PreferencesStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;
    use tempfile::TempDir;

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn test_app(dir: &TempDir) -> App {
        App::new(PreferencesStore::new(dir.path().join(PREFERENCES_FILE)), Duration::ZERO)
    }

    #[test]
    fn test_safety_notice_on_every_tab() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        for tab in Tab::all() {
            app.set_tab(tab);
            assert!(draw(&mut app).contains("does not provide medical advice"));
        }
    }

    #[test]
    fn test_glossary_empty_state() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.set_tab(Tab::Glossary);
        app.glossary_input.insert_str("zzz");
        assert!(draw(&mut app).contains("No terms found matching \"zzz\""));
    }

    #[test]
    fn test_chat_panel_records_area() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.toggle_chat();
        let screen = draw(&mut app);
        assert!(screen.contains("MedEase Assistant"));
        assert!(app.chat_area.is_some());
        assert!(app.chat_height > 0);
    }
}
