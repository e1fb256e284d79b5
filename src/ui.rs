use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use dapp_form::TokenRequest;
use crate::app::{cursor_display_position, App, FocusField, PaneSize};

const RECOMMEND_INPUT_PLACEHOLDER: &str =
    "Write your question (example: How can I create a token on Solana?)";

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area);

    let [deploy_area, recommend_area] = Layout::vertical([
        Constraint::Percentage(55),
        Constraint::Percentage(45),
    ])
    .areas(body_area);

    render_deploy_section(app, frame, deploy_area);
    render_recommend_section(app, frame, recommend_area);

    render_footer(app, frame, footer_area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" Mini dApp with AI and Solana ", Style::default().fg(Color::Cyan).bold()),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = Style::default().bg(Color::Yellow).fg(Color::Black);
    let mode_text = match app.focus {
        FocusField::TokenDraft => " DEPLOY ",
        FocusField::RecommendDraft => " RECOMMEND ",
    };

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let mut hints = vec![
        Span::styled(" Ctrl+S ", key_style),
        Span::styled(" send ", label_style),
        Span::styled(" Tab ", key_style),
        Span::styled(" switch ", label_style),
    ];
    if app.focus == FocusField::TokenDraft {
        hints.extend(vec![
            Span::styled(" Ctrl+T ", key_style),
            Span::styled(" template ", label_style),
        ]);
    }
    hints.extend(vec![
        Span::styled(" Ctrl+U ", key_style),
        Span::styled(" clear ", label_style),
        Span::styled(" PgUp/PgDn ", key_style),
        Span::styled(" scroll ", label_style),
        Span::styled(" Ctrl+Q ", key_style),
        Span::styled(" quit ", label_style),
    ]);

    let footer_content = Line::from(
        vec![
            Span::styled(mode_text, mode_style),
            Span::styled(" ", label_style),
        ]
        .into_iter()
        .chain(hints)
        .collect::<Vec<_>>(),
    );

    let footer = Paragraph::new(footer_content).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}

fn render_deploy_section(app: &mut App, frame: &mut Frame, area: Rect) {
    let [input_area, response_area] = Layout::vertical([
        Constraint::Length(10),
        Constraint::Min(3),
    ])
    .areas(area);
    app.deploy_pane = inner_size(response_area);

    let placeholder = format!("Write your JSON here:\n{}", TokenRequest::example_json());
    render_draft(
        frame,
        input_area,
        " Deploy Token on Solana (test) ",
        &app.form.token_draft,
        &placeholder,
        app.token_cursor,
        app.focus == FocusField::TokenDraft,
    );
    render_response(
        frame,
        response_area,
        " Response ",
        &app.form.deploy_response,
        app.form.deploy_pane(),
        app.deploy_scroll,
    );
}

fn render_recommend_section(app: &mut App, frame: &mut Frame, area: Rect) {
    let [input_area, response_area] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(3),
    ])
    .areas(area);
    app.recommend_pane = inner_size(response_area);

    render_draft(
        frame,
        input_area,
        " Request Recommendations ",
        &app.form.recommend_draft,
        RECOMMEND_INPUT_PLACEHOLDER,
        app.recommend_cursor,
        app.focus == FocusField::RecommendDraft,
    );
    render_response(
        frame,
        response_area,
        " Recommendations ",
        &app.form.recommend_response,
        app.form.recommend_pane(),
        app.recommend_scroll,
    );
}

/// Space inside a bordered block.
fn inner_size(area: Rect) -> PaneSize {
    PaneSize {
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Multi-line input box. Long drafts scroll so the cursor stays visible.
fn render_draft(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    text: &str,
    placeholder: &str,
    cursor: usize,
    focused: bool,
) {
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title.to_string());

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    let (row, col) = cursor_display_position(text, cursor);
    let (row, col) = (row as u16, col as u16);
    let scroll_y = row.saturating_sub(inner_height.saturating_sub(1));
    let scroll_x = col.saturating_sub(inner_width.saturating_sub(1));

    let input = if text.is_empty() {
        Paragraph::new(placeholder.to_string()).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(text.to_string())
            .style(Style::default().fg(Color::Cyan))
            .scroll((scroll_y, scroll_x))
    };
    frame.render_widget(input.block(block), area);

    if focused && inner_width > 0 && inner_height > 0 {
        frame.set_cursor_position((
            area.x + 1 + col - scroll_x,
            area.y + 1 + row - scroll_y,
        ));
    }
}

/// Response pane: placeholder when empty, otherwise the literal text with
/// its line breaks kept.
fn render_response(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    response: &str,
    pane_text: &str,
    scroll: u16,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title.to_string());

    let style = if response.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else if response.starts_with('✅') {
        Style::default().fg(Color::Green)
    } else if response.starts_with('❌') {
        Style::default().fg(Color::Red)
    } else if response.starts_with('⚠') {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(pane_text.to_string())
        .style(style)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
