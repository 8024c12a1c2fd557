use std::io::Write;

use crate::core::Refresh;
use crate::errors::Result;
use crate::view::View;

/// Emits each refresh as one JSON object per line, for front ends that run
/// in another process.
pub struct JsonView<W: Write> {
    out: W,
}

impl<W: Write> JsonView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for JsonView<W> {
    fn render(&mut self, refresh: &Refresh) -> Result<()> {
        serde_json::to_writer(&mut self.out, refresh)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedClock, TrackerSession};
    use crate::core::services::DisplaySettings;
    use crate::domain::{Category, RawTransaction, TransactionKind};

    #[test]
    fn writes_one_line_per_refresh() {
        let mut session = TrackerSession::with_clock(
            DisplaySettings::default(),
            Box::new(FixedClock::on(2024, 3, 5).unwrap()),
        );
        let mut view = JsonView::new(Vec::new());
        view.render(&session.refresh()).unwrap();
        let added = session.add_transaction(RawTransaction::new(
            "Salary",
            "1000",
            Category::Other,
            TransactionKind::Income,
        ));
        view.render(&added).unwrap();

        let text = String::from_utf8(view.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["view"]["state"], "empty");
        assert!(lines[0].get("notice").is_none());
        assert_eq!(lines[1]["view"]["state"], "rows");
        assert_eq!(lines[1]["view"]["content"][0]["amount"], "+$1000.00");
        assert_eq!(lines[1]["summary"]["polarity"], "non_negative");
        assert_eq!(lines[1]["notice"]["severity"], "success");
        assert_eq!(lines[1]["notice"]["display_for_ms"], 3000);
    }
}
