//! Interactive partition view (`sb view`).
//!
//! Renders the score histogram in the terminal with draggable boundary
//! markers over it. Dragging a marker reshapes the five bands; counts in
//! the footer follow through the repartition throttle; `e` writes the
//! partition JSON, `q` or `Esc` quits.

pub(crate) mod app;
pub(crate) mod drag;
pub(crate) mod render;
pub(crate) mod throttle;

use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::{ingest, walk};
use app::App;

/// Terminal lifecycle around the [`App`] event loop.
struct Viewer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl Viewer {
    fn new(app: App) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, app })
    }

    fn run_loop(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            self.app.tick(Instant::now());
            self.terminal.draw(|frame| self.app.render(frame))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) => {
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            break;
                        }
                        self.app.handle_key(key);
                    }
                    Event::Mouse(mouse) => self.app.handle_mouse(mouse),
                    // The next draw re-reads the terminal size and resyncs
                    // the pixel width.
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }

            if self.app.should_quit() {
                break;
            }
        }

        self.cleanup()?;
        Ok(())
    }

    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Viewer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// `sb view`: load the dataset and run the interactive partition view.
pub fn run(
    path: &Path,
    config: &Config,
    excludes: &[String],
    output: PathBuf,
) -> Result<(), Box<dyn Error>> {
    let files = walk::data_files(path, excludes)?;
    let dataset = ingest::load(&files);
    if dataset.records.is_empty() {
        return Err("no records ingested; nothing to partition".into());
    }

    let app = App::new(dataset, config.labels().to_vec(), output);
    let mut viewer = Viewer::new(app)?;
    viewer.run_loop()
}
