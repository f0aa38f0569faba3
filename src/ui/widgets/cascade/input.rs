//! Keyboard input handling and interactive loop.

use crossterm::event::KeyEvent;

use super::picker::{CascadeAction, CascadePicker};

/// Convert a keyboard event to a CascadeAction
pub fn key_to_action(key: KeyEvent) -> Option<CascadeAction> {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(CascadeAction::Previous),
        KeyCode::Down | KeyCode::Char('j') => Some(CascadeAction::Next),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(CascadeAction::FocusUp),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(CascadeAction::FocusDown),
        KeyCode::Backspace | KeyCode::Delete => Some(CascadeAction::Clear),
        KeyCode::Enter => Some(CascadeAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(CascadeAction::Quit),
        _ => None,
    }
}

/// Run the picker interactively.
/// Returns the composed path if confirmed, None if quit.
pub fn run_interactive(
    picker: &mut CascadePicker,
    supports_unicode: bool,
    width: usize,
) -> anyhow::Result<Option<String>> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };
    use std::io::{stdout, Write};

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();

    let render_ui = |stdout: &mut std::io::Stdout, picker: &CascadePicker| -> std::io::Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        print!("Select a category\r\n\r\n");

        for line in picker.render(supports_unicode, width).lines() {
            print!("{}\r\n", line);
        }

        print!("{}\r\n", "─".repeat(width.min(64)));

        for line in picker.render_help_bar().lines() {
            print!("{}\r\n", line);
        }

        stdout.flush()
    };

    execute!(stdout, cursor::Hide)?;

    // Run the loop in a closure so the terminal is restored on every exit path
    let mut event_loop = || -> anyhow::Result<Option<String>> {
        render_ui(&mut stdout, picker)?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(action) = key_to_action(key) else {
                continue;
            };

            match action {
                CascadeAction::Confirm => return Ok(Some(picker.current_path().to_string())),
                CascadeAction::Quit => return Ok(None),
                _ => {
                    picker.handle_action(action)?;
                    render_ui(&mut stdout, picker)?;
                }
            }
        }
    };
    let result = event_loop();

    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    result
}
