use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

use super::model::{RegisterField, SenderField, TuiModel, ViewMode};

const TAB_TITLES: [&str; 3] = ["Register [F2]", "Participants [F3]", "Draw [F4]"];

/// The View component of MVU - responsible for rendering the model
pub struct TuiView;

impl TuiView {
    /// Render the entire TUI based on the current model state
    pub fn render(model: &TuiModel, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab bar
                Constraint::Min(0),    // Main content
                Constraint::Length(2), // Status bar + key hints
            ])
            .split(size);

        Self::render_tab_bar(model, frame, chunks[0]);

        match &model.mode {
            ViewMode::Register => Self::render_register_form(model, frame, chunks[1]),
            ViewMode::Participants => Self::render_participants(model, frame, chunks[1]),
            ViewMode::Draw => Self::render_draw_tab(model, frame, chunks[1]),
            ViewMode::Reveal => Self::render_reveal(model, frame, chunks[1]),
            ViewMode::Help => Self::render_help(frame, chunks[1]),
        }

        Self::render_status_bar(model, frame, chunks[2]);

        // Error overlay goes on top of everything
        if !model.errors.is_empty() {
            Self::render_error_overlay(model, frame, size);
        }
    }

    fn render_tab_bar(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let selected = match model.mode {
            ViewMode::Register => 0,
            ViewMode::Participants | ViewMode::Reveal => 1,
            ViewMode::Draw => 2,
            ViewMode::Help => 0,
        };

        let tabs = Tabs::new(TAB_TITLES.to_vec())
            .select(selected)
            .style(Style::default().fg(Color::White).bg(Color::Blue))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }

    /// Render the registration form with the focused field highlighted
    fn render_register_form(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let fields = [
            RegisterField::Name,
            RegisterField::Contact,
            RegisterField::Suggestions,
            RegisterField::MinAmount,
            RegisterField::MaxAmount,
        ];

        let mut lines = vec![Line::from("")];
        for field in fields {
            let focused = model.register_form.focus == field;
            let marker = if focused { "> " } else { "  " };
            let value = model.register_form.field(field);

            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let mut spans = vec![
                Span::raw(marker),
                Span::styled(format!("{:<18}", field.label()), label_style),
                Span::raw(value.to_string()),
            ];
            if focused {
                spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Enter to register, Tab to move between fields",
            Style::default().fg(Color::Gray),
        )));

        let form = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("New Participant"))
            .wrap(Wrap { trim: false });

        frame.render_widget(form, area);
    }

    /// Render the participants table
    fn render_participants(model: &TuiModel, frame: &mut Frame, area: Rect) {
        if model.roster.is_empty() {
            let empty_msg = "No participants yet. Press F2 to register the first one.";
            let paragraph = Paragraph::new(empty_msg)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Participants"))
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
            return;
        }

        let header = Row::new(vec!["Name", "Email", "Min", "Max"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = model
            .roster
            .participants
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let row = Row::new(vec![
                    p.name.clone(),
                    p.contact.clone(),
                    format!("{:.2}", p.min_amount),
                    format!("{:.2}", p.max_amount),
                ]);
                if i == model.participants_cursor {
                    row.style(Style::default().bg(Color::DarkGray))
                } else {
                    row
                }
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(15),
                Constraint::Percentage(15),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Participants"));

        frame.render_widget(table, area);
    }

    /// Render the draw tab: local draw plus the email draw form
    fn render_draw_tab(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Local draw",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("  Press F5 to draw names and reveal them on this screen."),
            Line::from(""),
            Line::from(Span::styled(
                "  Email draw",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("  Fill in the sender account, then press Enter to draw"),
            Line::from("  names and email every participant their match."),
            Line::from(""),
        ];

        for (field, label, value) in [
            (
                SenderField::Address,
                "Sender email",
                model.sender_form.address.clone(),
            ),
            (
                SenderField::Credential,
                "App password",
                if model.ui_config.mask_credential {
                    "*".repeat(model.sender_form.credential.len())
                } else {
                    model.sender_form.credential.clone()
                },
            ),
        ] {
            let focused = model.sender_form.focus == field;
            let marker = if focused { "> " } else { "  " };
            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let mut spans = vec![
                Span::raw(marker),
                Span::styled(format!("{:<14}", label), label_style),
                Span::raw(value),
            ];
            if focused {
                spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        if let Some((sent, total)) = model.roster.last_notify_run {
            let (text, color) = if sent == total {
                (format!("  Last run: all {} emails sent", total), Color::Green)
            } else {
                (
                    format!("  Last run: stopped after {} of {} emails", sent, total),
                    Color::Red,
                )
            };
            lines.push(Line::from(Span::styled(text, Style::default().fg(color))));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Draw"))
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }

    /// Render the local reveal screen: one row per giver, hidden until toggled
    fn render_reveal(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = model
            .reveal
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let text = if entry.revealed {
                    format!("{} -> {}", entry.giver, entry.recipient)
                } else {
                    format!("{} -> (hidden)", entry.giver)
                };

                let mut style = Style::default();
                if entry.revealed {
                    style = style.fg(Color::Green);
                }
                if i == model.reveal_cursor {
                    style = style.bg(Color::DarkGray);
                }

                ListItem::new(Line::from(text)).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Draw Result - Enter toggles, hand the keyboard around"),
        );

        frame.render_widget(list, area);
    }

    /// Render help view
    fn render_help(frame: &mut Frame, area: Rect) {
        let help_text = vec![
            Line::from(Span::styled(
                "Secret Santa Help",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Tabs:",
                Style::default().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from("  F2 - Register a participant"),
            Line::from("  F3 - Participants table"),
            Line::from("  F4 - Draw"),
            Line::from(""),
            Line::from(Span::styled(
                "Register:",
                Style::default().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from("  Tab/Shift-Tab - Move between fields"),
            Line::from("  Enter - Register the participant"),
            Line::from(""),
            Line::from(Span::styled(
                "Participants:",
                Style::default().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from("  j/k or arrows - Move selection"),
            Line::from("  d - Remove selected participant"),
            Line::from(""),
            Line::from(Span::styled(
                "Draw:",
                Style::default().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from("  F5 - Local draw (reveal on screen)"),
            Line::from("  Enter - Draw and email every participant"),
            Line::from(""),
            Line::from(Span::styled(
                "Global:",
                Style::default().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from("  F1 - This help"),
            Line::from("  Ctrl+C / Esc - Quit"),
            Line::from(""),
            Line::from("Press any key to close help..."),
        ];

        let help = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });

        frame.render_widget(help, area);
    }

    /// Render the status/hint bar at the bottom
    fn render_status_bar(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        // Status line: participant count plus the latest message
        let mut status_parts = vec![format!("{} participants", model.roster.len())];
        if let Some(message) = model.messages.last() {
            status_parts.push(message.clone());
        }
        let status_paragraph = Paragraph::new(status_parts.join(" | "))
            .style(Style::default().fg(Color::White).bg(Color::DarkGray));
        frame.render_widget(status_paragraph, chunks[0]);

        // Key hints
        let hints = Self::get_key_hints(model);
        let hints_paragraph = Paragraph::new(hints).style(Style::default().fg(Color::Gray));
        frame.render_widget(hints_paragraph, chunks[1]);
    }

    /// Get key hints for current mode
    fn get_key_hints(model: &TuiModel) -> String {
        match &model.mode {
            ViewMode::Register => "Tab Next field | Enter Register | F1 Help | Esc Quit",
            ViewMode::Participants => "j/k Navigate | d Remove | F1 Help | q Quit",
            ViewMode::Draw => "F5 Local draw | Enter Draw & email | Tab Switch field | Esc Quit",
            ViewMode::Reveal => "j/k Navigate | Enter Toggle | b Back | q Quit",
            ViewMode::Help => "Any key to close",
        }
        .to_string()
    }

    /// Render error overlay
    fn render_error_overlay(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 20, area);

        frame.render_widget(Clear, popup_area);

        let mut error_text: Vec<Line> = model
            .errors
            .iter()
            .map(|error| Line::from(error.as_str()))
            .collect();
        error_text.push(Line::from(""));
        error_text.push(Line::from(Span::styled(
            "Press any key to dismiss",
            Style::default().fg(Color::Gray),
        )));

        let error_popup = Paragraph::new(error_text)
            .block(Block::default().borders(Borders::ALL).title("Error"))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });

        frame.render_widget(error_popup, popup_area);
    }

    /// Helper to create centered rectangle
    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
