//! Terminal renderer for tick results.
use std::io::{self, Stdout, Write};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor, Stylize};
use crossterm::{cursor, execute, queue, terminal};

use engine_core::{Classification, KillAssessment, TargetLockState};
use runtime::{OverlayRenderer, SkipReason, format_assessment, slot_line};

/// Redraws the verdict block in place on every assessment.
///
/// Skip notices are printed once per change so a paused replay does not
/// scroll the terminal.
pub struct TerminalRenderer {
    out: Stdout,
    last_notice: Option<SkipReason>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            last_notice: None,
        }
    }

    fn draw(&mut self, assessment: &KillAssessment, lock: &TargetLockState) -> io::Result<()> {
        let text = format_assessment(assessment);
        let (verdict, details) = text.split_once('\n').unwrap_or((text.as_str(), ""));

        queue!(
            self.out,
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::FromCursorDown),
            Print(verdict.with(verdict_color(assessment.classification())).bold()),
            Print("\n"),
        )?;
        for line in details.lines() {
            if line.starts_with('!') {
                queue!(self.out, SetForegroundColor(Color::Yellow), Print(line), ResetColor)?;
            } else {
                queue!(self.out, Print(line))?;
            }
            queue!(self.out, Print("\n"))?;
        }
        queue!(self.out, Print(slot_line(lock).dark_grey()), Print("\n\n"))?;
        self.out.flush()
    }

    fn print_notice(&mut self, text: &str) -> io::Result<()> {
        execute!(
            self.out,
            SetForegroundColor(Color::DarkGrey),
            Print(format!("-- {text}\n")),
            ResetColor
        )
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn verdict_color(classification: Classification) -> Color {
    match classification {
        Classification::Go => Color::Green,
        Classification::Risky => Color::Yellow,
        Classification::NoGo => Color::Red,
        Classification::Paused => Color::DarkGrey,
    }
}

impl OverlayRenderer for TerminalRenderer {
    fn show(&mut self, assessment: &KillAssessment, lock: &TargetLockState) {
        self.last_notice = None;
        if let Err(err) = self.draw(assessment, lock) {
            tracing::warn!(error = %err, "terminal write failed");
        }
    }

    fn notice(&mut self, reason: &SkipReason) {
        if self.last_notice.as_ref() == Some(reason) {
            return;
        }
        self.last_notice = Some(reason.clone());
        if let Err(err) = self.print_notice(&reason.describe()) {
            tracing::warn!(error = %err, "terminal write failed");
        }
    }

    fn hide(&mut self) {
        self.last_notice = None;
        if let Err(err) = self.print_notice("overlay hidden") {
            tracing::warn!(error = %err, "terminal write failed");
        }
    }
}
