use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthChar;
use dapp_form::{BackendClient, FormView, TokenRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    TokenDraft,
    RecommendDraft,
}

impl FocusField {
    pub fn toggle(self) -> Self {
        match self {
            FocusField::TokenDraft => FocusField::RecommendDraft,
            FocusField::RecommendDraft => FocusField::TokenDraft,
        }
    }
}

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// (row, column) of a character index, both counted in characters.
pub fn cursor_position(text: &str, cursor: usize) -> (usize, usize) {
    let mut row = 0;
    let mut col = 0;
    for c in text.chars().take(cursor) {
        if c == '\n' {
            row += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (row, col)
}

/// Like `cursor_position`, but the column is in terminal cells so wide
/// characters count twice.
pub fn cursor_display_position(text: &str, cursor: usize) -> (usize, usize) {
    let mut row = 0;
    let mut width = 0;
    for c in text.chars().take(cursor) {
        if c == '\n' {
            row += 1;
            width = 0;
        } else {
            width += c.width().unwrap_or(0);
        }
    }
    (row, width)
}

/// Rows `text` occupies when wrapped the way response panes wrap it.
pub fn wrapped_rows(text: &str, width: u16) -> usize {
    if width == 0 {
        return text.lines().count();
    }
    Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(width)
}

/// Inner size of a response pane as of the last draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneSize {
    pub width: u16,
    pub height: u16,
}

/// Character index of (row, col), clamping col to the line length.
fn cursor_index(text: &str, row: usize, col: usize) -> usize {
    let mut index = 0;
    for (i, line) in text.split('\n').enumerate() {
        let len = line.chars().count();
        if i == row {
            return index + col.min(len);
        }
        index += len + 1;
    }
    text.chars().count()
}

pub struct App {
    pub should_quit: bool,
    pub focus: FocusField,
    pub form: FormView,

    // Cursor positions, in characters
    pub token_cursor: usize,
    pub recommend_cursor: usize,

    // Response pane scroll offsets
    pub deploy_scroll: u16,
    pub recommend_scroll: u16,

    // Updated during render
    pub deploy_pane: PaneSize,
    pub recommend_pane: PaneSize,

    pub backend: BackendClient,
}

impl App {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            should_quit: false,
            focus: FocusField::TokenDraft,
            form: FormView::new(),
            token_cursor: 0,
            recommend_cursor: 0,
            deploy_scroll: 0,
            recommend_scroll: 0,
            deploy_pane: PaneSize::default(),
            recommend_pane: PaneSize::default(),
            backend,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Focused draft text and its cursor.
    fn focused_draft(&mut self) -> (&mut String, &mut usize) {
        match self.focus {
            FocusField::TokenDraft => (&mut self.form.token_draft, &mut self.token_cursor),
            FocusField::RecommendDraft => {
                (&mut self.form.recommend_draft, &mut self.recommend_cursor)
            }
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let (text, cursor) = self.focused_draft();
        let byte_pos = char_to_byte_index(text, *cursor);
        text.insert(byte_pos, c);
        *cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        let normalized = s.replace("\r\n", "\n").replace('\r', "\n");
        let (text, cursor) = self.focused_draft();
        let byte_pos = char_to_byte_index(text, *cursor);
        text.insert_str(byte_pos, &normalized);
        *cursor += normalized.chars().count();
    }

    pub fn backspace(&mut self) {
        let (text, cursor) = self.focused_draft();
        if *cursor > 0 {
            *cursor -= 1;
            let byte_pos = char_to_byte_index(text, *cursor);
            text.remove(byte_pos);
        }
    }

    pub fn delete(&mut self) {
        let (text, cursor) = self.focused_draft();
        if *cursor < text.chars().count() {
            let byte_pos = char_to_byte_index(text, *cursor);
            text.remove(byte_pos);
        }
    }

    pub fn cursor_left(&mut self) {
        let (_, cursor) = self.focused_draft();
        *cursor = cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let (text, cursor) = self.focused_draft();
        *cursor = (*cursor + 1).min(text.chars().count());
    }

    pub fn cursor_up(&mut self) {
        let (text, cursor) = self.focused_draft();
        let (row, col) = cursor_position(text, *cursor);
        if row > 0 {
            *cursor = cursor_index(text, row - 1, col);
        }
    }

    pub fn cursor_down(&mut self) {
        let (text, cursor) = self.focused_draft();
        let (row, col) = cursor_position(text, *cursor);
        if row + 1 < text.split('\n').count() {
            *cursor = cursor_index(text, row + 1, col);
        }
    }

    pub fn cursor_line_start(&mut self) {
        let (text, cursor) = self.focused_draft();
        let (row, _) = cursor_position(text, *cursor);
        *cursor = cursor_index(text, row, 0);
    }

    pub fn cursor_line_end(&mut self) {
        let (text, cursor) = self.focused_draft();
        let (row, _) = cursor_position(text, *cursor);
        *cursor = cursor_index(text, row, usize::MAX);
    }

    pub fn clear_focused(&mut self) {
        let (text, cursor) = self.focused_draft();
        text.clear();
        *cursor = 0;
    }

    /// Replace the token draft with the example token JSON.
    pub fn insert_token_template(&mut self) {
        self.form.token_draft = TokenRequest::example_json();
        self.token_cursor = self.form.token_draft.chars().count();
        self.focus = FocusField::TokenDraft;
    }

    pub fn apply_deploy_response(&mut self, text: String) {
        self.form.deploy_response = text;
        self.deploy_scroll = 0;
    }

    pub fn apply_recommend_response(&mut self, text: String) {
        self.form.recommend_response = text;
        self.recommend_scroll = 0;
    }

    pub fn scroll_response_down(&mut self, lines: u16) {
        let (response, pane, scroll) = match self.focus {
            FocusField::TokenDraft => (
                &self.form.deploy_response,
                self.deploy_pane,
                &mut self.deploy_scroll,
            ),
            FocusField::RecommendDraft => (
                &self.form.recommend_response,
                self.recommend_pane,
                &mut self.recommend_scroll,
            ),
        };
        // Stop once the last wrapped row sits at the bottom of the pane
        let rows = wrapped_rows(response, pane.width);
        let max_scroll = rows.saturating_sub(pane.height.max(1) as usize);
        let max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX);
        *scroll = scroll.saturating_add(lines).min(max_scroll);
    }

    pub fn scroll_response_up(&mut self, lines: u16) {
        let scroll = match self.focus {
            FocusField::TokenDraft => &mut self.deploy_scroll,
            FocusField::RecommendDraft => &mut self.recommend_scroll,
        };
        *scroll = scroll.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(BackendClient::new("http://127.0.0.1:9"))
    }

    #[test]
    fn test_typing_goes_to_focused_draft_only() {
        let mut app = app();
        app.insert_char('{');
        app.toggle_focus();
        app.insert_str("¿Cómo creo un token?");
        assert_eq!(app.form.token_draft, "{");
        assert_eq!(app.form.recommend_draft, "¿Cómo creo un token?");
        assert_eq!(app.recommend_cursor, 20);
    }

    #[test]
    fn test_backspace_and_delete_are_utf8_safe() {
        let mut app = app();
        app.insert_str("añb");
        app.cursor_left();
        app.backspace();
        assert_eq!(app.form.token_draft, "ab");
        app.cursor_left();
        app.delete();
        assert_eq!(app.form.token_draft, "b");
        assert_eq!(app.token_cursor, 0);
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut app = app();
        app.insert_str("{\r\n  \"a\": 1\r\n}");
        assert_eq!(app.form.token_draft, "{\n  \"a\": 1\n}");
        assert_eq!(app.token_cursor, app.form.token_draft.chars().count());
    }

    #[test]
    fn test_vertical_cursor_movement_clamps_column() {
        let mut app = app();
        app.insert_str("abcdef\nxy\nlonger line");
        app.cursor_up();
        assert_eq!(cursor_position(&app.form.token_draft, app.token_cursor), (1, 2));
        app.cursor_up();
        assert_eq!(cursor_position(&app.form.token_draft, app.token_cursor), (0, 2));
        app.cursor_line_end();
        assert_eq!(cursor_position(&app.form.token_draft, app.token_cursor), (0, 6));
        app.cursor_down();
        app.cursor_down();
        assert_eq!(cursor_position(&app.form.token_draft, app.token_cursor), (2, 2));
        app.cursor_line_start();
        assert_eq!(cursor_position(&app.form.token_draft, app.token_cursor), (2, 0));
    }

    #[test]
    fn test_scroll_limit_counts_wrapped_rows() {
        let mut app = app();
        app.focus = FocusField::RecommendDraft;
        app.recommend_pane = PaneSize { width: 20, height: 4 };
        app.apply_recommend_response("abcd ".repeat(40));
        let rows = wrapped_rows(&app.form.recommend_response, 20);
        assert!(rows >= 10);
        for _ in 0..10 {
            app.scroll_response_down(5);
        }
        assert_eq!(app.recommend_scroll as usize, rows - 4);
    }

    #[test]
    fn test_display_position_counts_wide_chars() {
        assert_eq!(cursor_display_position("日本語", 2), (0, 4));
        assert_eq!(cursor_display_position("ab\n🚀x", 5), (1, 3));
        assert_eq!(cursor_position("ab\n🚀x", 5), (1, 2));
    }

    #[test]
    fn test_token_template_replaces_draft() {
        let mut app = app();
        app.toggle_focus();
        app.insert_str("question");
        app.insert_token_template();
        assert_eq!(app.focus, FocusField::TokenDraft);
        assert_eq!(app.form.token_draft, TokenRequest::example_json());
        assert_eq!(app.form.recommend_draft, "question");
    }

    #[test]
    fn test_responses_are_independent() {
        let mut app = app();
        app.apply_deploy_response("deploy text".to_string());
        assert_eq!(app.form.recommend_response, "");
        app.apply_recommend_response("recommend text".to_string());
        assert_eq!(app.form.deploy_response, "deploy text");
    }

    #[test]
    fn test_scroll_clamped_and_reset_on_new_response() {
        let mut app = app();
        app.apply_deploy_response("a\nb\nc".to_string());
        app.scroll_response_down(10);
        assert_eq!(app.deploy_scroll, 2);
        assert_eq!(app.recommend_scroll, 0);
        app.scroll_response_up(1);
        assert_eq!(app.deploy_scroll, 1);
        app.apply_deploy_response("new".to_string());
        assert_eq!(app.deploy_scroll, 0);
    }
}
