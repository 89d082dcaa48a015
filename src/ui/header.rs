use crate::model::UniverseFilter;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PRIMARY_BLUE, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// State of the fighter list as shown in the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FighterCount {
    Loading,
    Failed,
    Loaded(usize),
}

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        selection: &UniverseFilter,
        fighters: FighterCount,
    ) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(PRIMARY_BLUE).add_modifier(Modifier::BOLD);

        let count = match fighters {
            FighterCount::Loading => Span::styled("loading", text_style),
            FighterCount::Failed => {
                Span::styled("unavailable", Style::default().fg(STATUS_ERROR))
            }
            FighterCount::Loaded(count) => {
                Span::styled(format!("{} fighters", count), text_style)
            }
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Fighterdex", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Universe: {}", selection), text_style),
            Span::styled("  │  ", separator_style),
            count,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
