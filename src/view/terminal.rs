use std::io::Write;

use colored::Colorize;

use crate::core::services::{DisplayRow, DisplaySummary, LedgerView, Polarity};
use crate::core::{Notice, Refresh, Severity};
use crate::domain::TransactionKind;
use crate::errors::Result;
use crate::view::View;

const SEPARATOR: &str = "----------------------------------------";

/// Draws refreshes as plain or coloured text.
pub struct TerminalView<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders a refresh to a string without writing it anywhere.
    pub fn format(&self, refresh: &Refresh) -> String {
        let mut lines = vec![self.header("Expense Tracker")];
        lines.extend(self.summary_lines(&refresh.summary));
        lines.push(SEPARATOR.to_string());
        match &refresh.view {
            LedgerView::Empty(empty) => {
                lines.push(format!("{} {}", empty.icon, empty.title));
                lines.push(format!("   {}", self.dim(&empty.hint)));
            }
            LedgerView::Rows(rows) => {
                lines.extend(rows.iter().map(|row| self.row_line(row)));
            }
        }
        if let Some(notice) = &refresh.notice {
            lines.push(self.notice_line(notice));
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    fn header(&self, title: &str) -> String {
        let text = format!("=== {title} ===");
        if self.color {
            text.bold().to_string()
        } else {
            text
        }
    }

    fn summary_lines(&self, summary: &DisplaySummary) -> Vec<String> {
        let balance = if self.color {
            match summary.polarity {
                Polarity::NonNegative => summary.balance.bright_cyan().bold().to_string(),
                Polarity::Negative => summary.balance.bright_magenta().bold().to_string(),
            }
        } else {
            summary.balance.clone()
        };
        vec![
            format!("Balance   {balance}"),
            format!("Income    {}", summary.income),
            format!("Expenses  {}", summary.expenses),
        ]
    }

    fn row_line(&self, row: &DisplayRow) -> String {
        let amount = if self.color {
            match row.kind {
                TransactionKind::Income => row.amount.bright_green().to_string(),
                TransactionKind::Expense => row.amount.bright_red().to_string(),
            }
        } else {
            row.amount.clone()
        };
        format!(
            "{} {}  {} • {}  {}  {}",
            row.icon,
            row.title,
            row.category_label,
            row.date,
            amount,
            self.dim(&format!("[#{}]", row.id)),
        )
    }

    fn notice_line(&self, notice: &Notice) -> String {
        let label = match notice.severity {
            Severity::Success => "SUCCESS",
            Severity::Error => "ERROR",
            Severity::Info => "INFO",
        };
        let text = format!("{label}: {}", notice.message);
        if !self.color {
            return text;
        }
        match notice.severity {
            Severity::Success => text.bright_green().to_string(),
            Severity::Error => text.bright_red().to_string(),
            Severity::Info => text.bright_cyan().to_string(),
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn render(&mut self, refresh: &Refresh) -> Result<()> {
        let text = self.format(refresh);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
