mod app;
mod args;
mod event;
mod store;
mod tui;

use std::time::Duration;

use app::App;
use args::Command;
use chrono::Local;
use color_eyre::Result;
use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Layout, Rect};
use remcal::components::{CalendarView, DayView, ReminderList, StatusBar};
use remcal::{theme, CalendarState, ViewMode};

fn main() -> Result<()> {
    color_eyre::install()?;

    match Command::from_parser(lexopt::Parser::from_env())? {
        Command::Help => {
            args::print_help();
            Ok(())
        }
        Command::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Run(options) => run_app(options),
    }
}

fn run_app(options: args::Options) -> Result<()> {
    theme::init(options.theme.as_deref());

    let file = options
        .file
        .clone()
        .or_else(|| store::default_path().filter(|p| p.exists()));
    let (calendars, reminders) = match &file {
        Some(path) => store::load(path)?,
        None => store::sample(),
    };

    let today = Local::now().date_naive();
    let state = CalendarState::new(today)
        .with_mode(options.mode)
        .with_week_start(options.week_start);
    let mut app = App::new(calendars, reminders, state, file);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            // Main layout: content + status bar
            let layout =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
            let content = layout[0];

            match app.calendar.mode {
                ViewMode::Month => render_month_layout(frame, content, app),
                ViewMode::Week => render_week_layout(frame, content, app),
                ViewMode::Day => {
                    CalendarView::render(frame, content, &mut app.calendar, &app.grouping)
                }
            }

            if app.show_help {
                render_help(frame, area);
            }

            StatusBar::render(
                frame,
                layout[1],
                app.calendar.mode,
                app.status_message.as_deref(),
            );
        })?;

        if let Some(ev) = event::poll_event(Duration::from_millis(100))? {
            match ev {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Clear the transient message on any key
                    app.status_message = None;

                    if app.show_help {
                        if matches!(
                            key.code,
                            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
                        ) {
                            app.show_help = false;
                        }
                        continue;
                    }
                    handle_key(app, key.code, key.modifiers);
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    app.click(column, row);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Char('1'), _) => app.calendar.set_mode(ViewMode::Month),
        (KeyCode::Char('2'), _) => app.calendar.set_mode(ViewMode::Week),
        (KeyCode::Char('3'), _) => app.calendar.set_mode(ViewMode::Day),
        (KeyCode::Char('t'), _) => app.calendar.go_to_today(),
        (KeyCode::Char('r'), _) => app.reload(),
        (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.calendar.prev_day(),
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.calendar.next_day(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => {
            if app.calendar.mode == ViewMode::Week {
                app.calendar.prev_week();
            } else {
                app.calendar.scroll_day_up();
            }
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
            if app.calendar.mode == ViewMode::Week {
                app.calendar.next_week();
            } else {
                app.calendar.scroll_day_down();
            }
        }
        (KeyCode::Char('['), _) => app.calendar.prev_month(),
        (KeyCode::Char(']'), _) => app.calendar.next_month(),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => {}
    }
}

/// Week mode: the row of day cells with the selected day's reminders
/// underneath when there is room.
fn render_week_layout(frame: &mut ratatui::Frame, area: Rect, app: &mut App) {
    if area.height < 12 {
        CalendarView::render(frame, area, &mut app.calendar, &app.grouping);
        return;
    }

    let rows = Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).split(area);
    CalendarView::render(frame, rows[0], &mut app.calendar, &app.grouping);

    let selected = app.calendar.selected;
    let title = selected.format("%A").to_string();
    ReminderList::render(frame, rows[1], &title, app.grouping.on_day(selected));
}

/// Month mode: the grid alone on narrow terminals, grid plus the selected
/// day's reminders side by side when there is room.
fn render_month_layout(frame: &mut ratatui::Frame, area: Rect, app: &mut App) {
    if area.width < 60 {
        CalendarView::render(frame, area, &mut app.calendar, &app.grouping);
        return;
    }

    let month_w = if area.width >= 100 { 44 } else { 37 };
    let content =
        Layout::horizontal([Constraint::Length(month_w), Constraint::Min(20)]).split(area);

    CalendarView::render(frame, content[0], &mut app.calendar, &app.grouping);
    DayView::render(frame, content[1], &mut app.calendar, &app.grouping);
}

fn render_help(frame: &mut ratatui::Frame, area: Rect) {
    use ratatui::style::{Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

    let theme = theme::current();

    let popup_w = area.width.min(52).max(30);
    let popup_h = area.height.min(18).max(10);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(theme.header)
        .borders(Borders::ALL)
        .border_style(theme.border);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = theme.highlight;
    let desc_style = Style::default();
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let lines = vec![
        Line::from(Span::styled("Navigation", section_style)),
        Line::from(vec![
            Span::styled("  h/l ", key_style),
            Span::styled("or ", theme.dim),
            Span::styled("\u{2190}/\u{2192}  ", key_style),
            Span::styled("Previous/next day", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  j/k ", key_style),
            Span::styled("or ", theme.dim),
            Span::styled("\u{2191}/\u{2193}  ", key_style),
            Span::styled("Scroll reminders / move a week", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  [/]       ", key_style),
            Span::styled("Previous/next month", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  t         ", key_style),
            Span::styled("Jump to today", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  click     ", key_style),
            Span::styled("Select a day", desc_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("Views", section_style)),
        Line::from(vec![
            Span::styled("  1/2/3     ", key_style),
            Span::styled("Month / Week / Day view", desc_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("Actions", section_style)),
        Line::from(vec![
            Span::styled("  r         ", key_style),
            Span::styled("Reload the reminder file", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  q", key_style),
            Span::styled(" / ", theme.dim),
            Span::styled("Esc     ", key_style),
            Span::styled("Quit / close popup", desc_style),
        ]),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
