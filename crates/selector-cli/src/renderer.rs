//! Terminal rendering for markdown output
//!
//! Uses termimad for rich display, with a plain text fallback for
//! `--no-color` and scripted use.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Visibility marker leading each step line of a form report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepMarker {
    Shown,
    Hidden,
}

impl StepMarker {
    /// Split a report line into its step marker and the remaining text
    fn split(line: &str) -> Option<(Self, &str)> {
        if let Some(rest) = line.strip_prefix('▸') {
            Some((StepMarker::Shown, rest))
        } else {
            line.strip_prefix('·').map(|rest| (StepMarker::Hidden, rest))
        }
    }
}

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                match StepMarker::split(line) {
                    Some((StepMarker::Shown, rest)) => {
                        print!("\x1b[32m▸\x1b[0m");
                        self.skin.print_inline(rest);
                        println!();
                    }
                    // Hidden sections are dimmed as a whole
                    Some((StepMarker::Hidden, _)) => println!("\x1b[90m{line}\x1b[0m"),
                    None if line.starts_with('#') => {
                        // Keep the hash marks visible, termimad strips them
                        println!("\x1b[34m{line}\x1b[0m");
                    }
                    None => {
                        self.skin.print_inline(line);
                        println!();
                    }
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Render a one-line event status, highlighting ignored input
    pub fn render_status(&self, status: &str) -> Result<()> {
        if self.rich_enabled {
            let color = if status.starts_with("Ignored:") {
                "33"
            } else {
                "32"
            };
            println!("\x1b[{color}m{}\x1b[0m", status.trim_end());
        } else {
            print!("{status}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
