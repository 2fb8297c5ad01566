use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

use tui_morphtext::{MorphConfig, MorphText, TextStyle, easing};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

    let result = run();

    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

fn run() -> io::Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut wordmark = MorphText::new(
        words(&["Design", "Develop", "Deliver", "Repeat"]),
        MorphConfig {
            style: TextStyle {
                fg: Color::Rgb(120, 220, 255),
                ..TextStyle::default()
            },
            duration: Duration::from_millis(600),
            pause: Duration::from_millis(900),
            loop_forever: true,
            ..MorphConfig::default()
        },
    )
    .map_err(io::Error::other)?;

    let status_done = Rc::new(Cell::new(false));
    let on_done = status_done.clone();

    let mut status = MorphText::new(
        words(&["connecting", "syncing", "ready"]),
        MorphConfig {
            style: TextStyle {
                fg: Color::Rgb(255, 200, 80),
                ..TextStyle::default()
            },
            duration: Duration::from_millis(350),
            pause: Duration::from_millis(1200),
            loop_count: 3,
            progress_ease: easing::ease_out_cubic,
            on_complete: Some(Box::new(move || on_done.set(true))),
            ..MorphConfig::default()
        },
    )
    .map_err(io::Error::other)?;

    loop {
        terminal.draw(|f| {
            let chunks =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(f.area());
            header(f, chunks[0]);

            let cols = Layout::horizontal([Constraint::Percentage(60), Constraint::Min(0)])
                .split(chunks[1]);

            let left = Block::bordered().title(" Wordmark ");
            let left_inner = left.inner(cols[0]);
            f.render_widget(left, cols[0]);
            f.render_widget(&mut wordmark, left_inner);

            let title = if status_done.get() {
                " Status (done) "
            } else {
                " Status (3 loops) "
            };
            let right = Block::bordered().title(title);
            let right_inner = right.inner(cols[1]);
            f.render_widget(right, cols[1]);
            f.render_widget(&mut status, right_inner);
        })?;

        if event::poll(FRAME_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
            }
        }
    }

    wordmark.dispose();
    status.dispose();

    Ok(())
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn header(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new("tui-morphtext  [q quit]").style(Style::new().fg(Color::DarkGray)),
        area,
    );
}
