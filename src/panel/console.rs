//! Terminal output for a rendered panel.

use std::io::Write;

use crate::error::Result;
use crate::i18n::TextDirection;

use super::render::RenderedPanel;

const GAUGE_CELLS: usize = 30;

/// Where rendered panels end up
pub trait PanelView: Send {
    /// Draw the whole panel
    fn render(&mut self, panel: &RenderedPanel) -> Result<()>;
    /// Print a one-off line below the panel
    fn notice(&mut self, message: &str) -> Result<()>;
}

/// Plain text panel on any writer. Right-to-left languages are right
/// aligned to `width` columns.
pub struct ConsoleView<W: Write + Send> {
    out: W,
    width: usize,
    direction: TextDirection,
}

impl<W: Write + Send> ConsoleView<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width,
            direction: TextDirection::Ltr,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> Result<()> {
        if self.direction.is_rtl() {
            writeln!(self.out, "{:>width$}", text, width = self.width)?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    fn rule(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "-".repeat(self.width))?;
        Ok(())
    }
}

/// `[#########.....................]` for a fill fraction
pub fn gauge_bar(fraction: Option<f64>) -> String {
    let filled = fraction.map_or(0, |f| {
        let cells = (f.clamp(0.0, 1.0) * GAUGE_CELLS as f64).round();
        cells as usize
    });
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(GAUGE_CELLS - filled)
    )
}

impl<W: Write + Send> PanelView for ConsoleView<W> {
    fn render(&mut self, panel: &RenderedPanel) -> Result<()> {
        self.direction = panel.direction;
        self.rule()?;
        self.line(&panel.title)?;
        self.line(&panel.language)?;
        self.rule()?;
        self.line(&panel.temperature)?;
        self.line(&gauge_bar(panel.gauge))?;
        self.line(&panel.last_update)?;
        self.line(&panel.status)?;
        self.line(&panel.target)?;
        self.line(&panel.showers)?;
        self.line(&format!(
            "[{}] [{}]",
            panel.toggle_action, panel.refresh_action
        ))?;

        if let Some(dialog) = &panel.dialog {
            self.rule()?;
            self.line(&dialog.title)?;
            self.line(&format!(
                "{} {} ({})",
                dialog.label, dialog.selection, dialog.range
            ))?;
            self.line(&dialog.info)?;
            self.line(&format!("[{}] [{}]", dialog.confirm, dialog.cancel))?;
        }

        if let Some(toast) = &panel.toast {
            self.rule()?;
            self.line(&format!("* {}", toast))?;
        }
        self.rule()?;
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        self.line(message)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocalizationStore;
    use crate::panel::Panel;
    use crate::persistence::MemoryPreferences;

    #[test]
    fn gauge_bar_fill() {
        assert_eq!(gauge_bar(None), format!("[{}]", ".".repeat(30)));
        assert_eq!(gauge_bar(Some(1.0)), format!("[{}]", "#".repeat(30)));
        assert_eq!(
            gauge_bar(Some(0.5)),
            format!("[{}{}]", "#".repeat(15), ".".repeat(15))
        );
        assert_eq!(gauge_bar(Some(7.0)), format!("[{}]", "#".repeat(30)));
    }

    #[test]
    fn renders_panel_lines() {
        let panel = Panel::new(LocalizationStore::new(Box::new(MemoryPreferences::new())));
        let mut view = ConsoleView::new(Vec::new(), 40);
        view.render(&panel.render()).unwrap();
        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.contains("Water Boiler Control\n"));
        assert!(text.contains("[Turn On] [Refresh Now]"));
    }

    #[test]
    fn rtl_lines_are_right_aligned() {
        let mut view = ConsoleView::new(Vec::new(), 10);
        view.direction = TextDirection::Rtl;
        view.notice("שלום").unwrap();
        let text = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(text, "      שלום\n");
    }
}
