use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

use super::ViewMode;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, mode: ViewMode, message: Option<&str>) {
        let w = area.width as usize;
        let status = theme::current().status;

        let mode_str = match mode {
            ViewMode::Month => "[1]Month",
            ViewMode::Week => "[2]Week",
            ViewMode::Day => "[3]Day",
        };

        // Show a transient message if present, otherwise context hints.
        let right = match message {
            Some(msg) => format!(" {} ", msg),
            None => match mode {
                ViewMode::Month | ViewMode::Day if w >= 80 => {
                    " hjkl:Nav [/]:Mon t:Today click:Select r:Reload ?:Help q:Quit".to_string()
                }
                ViewMode::Week if w >= 70 => {
                    " hl:Day jk:Week [/]:Mon t:Today ?:Help q:Quit".to_string()
                }
                _ if w >= 40 => " arrows:Nav t:Today q:Quit".to_string(),
                _ => " q:Quit".to_string(),
            },
        };

        let left = format!(" {} ", mode_str);
        let padding = " ".repeat(w.saturating_sub(left.len() + right.len()));

        let line = Line::from(vec![
            Span::styled(left, status),
            Span::styled(padding, status),
            Span::styled(right, status),
        ]);

        frame.render_widget(Paragraph::new(line).style(status), area);
    }
}
