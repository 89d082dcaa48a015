use crate::model::Fighter;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::{FighterCount, Header};
use crate::ui::home::{FighterRow, FightersView, HomeFocus, UniverseChip, UniversesView};
use crate::ui::layout::{horizontal_offset, layout_regions, Regions};
use crate::ui::navigation::Route;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, CHIP_TEXT, DARK_BLUE, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    PRIMARY_BLUE, RATING_STAR, STATUS_ERROR,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// Blank columns between two chips.
const CHIP_GAP: u16 = 1;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let home = app.home();

    let fighter_count = match home.render_fighters() {
        FightersView::Loading => FighterCount::Loading,
        FightersView::Failed { .. } => FighterCount::Failed,
        FightersView::Ready(rows) => FighterCount::Loaded(rows.len()),
    };
    frame.render_widget(
        Header::new().widget(home.selection(), fighter_count),
        regions.header,
    );

    match app.route() {
        Route::Home => {
            draw_universes(frame, app, regions.universes);
            draw_fighters(frame, app, regions.body);
            frame.render_widget(Footer::home().widget(regions.footer), regions.footer);
        }
        Route::FighterScreen { fighter } => {
            draw_fighter_detail(frame, fighter, detail_area(&regions));
            frame.render_widget(Footer::detail().widget(regions.footer), regions.footer);
        }
    }
}

fn detail_area(regions: &Regions) -> Rect {
    Rect {
        x: regions.universes.x,
        y: regions.universes.y,
        width: regions.universes.width,
        height: regions.universes.height + regions.body.height,
    }
}

fn section_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn loading_indicator(label: &str, ticks: u64) -> Line<'static> {
    let frame = SPINNER[(ticks % SPINNER.len() as u64) as usize];
    Line::from(vec![
        Span::styled(format!(" {} ", frame), Style::default().fg(PRIMARY_BLUE)),
        Span::styled(label.to_string(), Style::default().fg(MUTED_TEXT)),
    ])
}

fn draw_universes(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let home = app.home();
    let focused = home.focus() == HomeFocus::Universes;
    let view = home.render_universes(app.universes());

    let title = match &view {
        UniversesView::Failed { .. } => "Universes (offline)",
        _ => "Universes",
    };
    let block = section_block(title, focused);
    let inner_width = block.inner(area).width;

    let widget = match &view {
        UniversesView::Loading => {
            Paragraph::new(loading_indicator("Loading universes…", app.ticks())).block(block)
        }
        UniversesView::Ready(chips) | UniversesView::Failed { chips, .. } => {
            let cursor = focused.then_some(home.chip_cursor());
            let widths: Vec<u16> = chips.iter().map(chip_width).collect();
            let offset = horizontal_offset(&widths, home.chip_cursor(), inner_width);
            Paragraph::new(chip_line(chips, cursor))
                .scroll((0, offset))
                .block(block)
        }
    };
    frame.render_widget(widget, area);
}

fn chip_width(chip: &UniverseChip) -> u16 {
    (chip.label.chars().count() as u16).saturating_add(2 + CHIP_GAP)
}

fn chip_line(chips: &[UniverseChip], cursor: Option<usize>) -> Line<'static> {
    let mut spans = Vec::with_capacity(chips.len() * 2);
    for (idx, chip) in chips.iter().enumerate() {
        let background = if chip.active { DARK_BLUE } else { PRIMARY_BLUE };
        let mut style = Style::default().fg(CHIP_TEXT).bg(background);
        if chip.active {
            style = style.add_modifier(Modifier::BOLD);
        }
        if cursor == Some(idx) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {} ", chip.label), style));
        spans.push(Span::raw(" ".repeat(CHIP_GAP as usize)));
    }
    Line::from(spans)
}

fn draw_fighters(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let home = app.home();
    let focused = home.focus() == HomeFocus::Fighters;
    let block = section_block("Fighters", focused);

    match home.render_fighters() {
        FightersView::Loading => {
            let widget =
                Paragraph::new(loading_indicator("Loading fighters…", app.ticks())).block(block);
            frame.render_widget(widget, area);
        }
        FightersView::Failed { message } => {
            let lines = vec![
                Line::from(Span::styled(
                    format!(" {}", message),
                    Style::default().fg(STATUS_ERROR),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    " Press r to retry.",
                    Style::default().fg(MUTED_TEXT),
                )),
            ];
            let widget = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(block);
            frame.render_widget(widget, area);
        }
        FightersView::Ready(rows) if rows.is_empty() => {
            let widget = Paragraph::new(Line::from(Span::styled(
                format!(" No fighters in {}.", home.selection()),
                Style::default().fg(MUTED_TEXT),
            )))
            .block(block);
            frame.render_widget(widget, area);
        }
        FightersView::Ready(rows) => {
            let items: Vec<ListItem> = rows.iter().map(fighter_item).collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
            let mut state = ListState::default();
            if focused {
                state.select(Some(home.fighter_cursor()));
            }
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn fighter_item(row: &FighterRow<'_>) -> ListItem<'static> {
    let fighter = row.fighter;
    let title = Line::from(vec![
        Span::styled(
            format!("{:>3}. ", row.position + 1),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::styled(
            fighter.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]);

    let mut details = vec![
        Span::raw("     "),
        Span::styled(fighter.universe.clone(), Style::default().fg(MUTED_TEXT)),
    ];
    if let Some(rate) = fighter.rate {
        details.push(Span::raw("  "));
        details.push(Span::styled(
            format!("★ {:.1}", rate),
            Style::default().fg(RATING_STAR),
        ));
    }
    if let Some(price) = fighter.price {
        details.push(Span::raw("  "));
        details.push(Span::styled(
            format_price(price),
            Style::default().fg(HEADER_TEXT),
        ));
    }
    if fighter.popular == Some(true) {
        details.push(Span::raw("  "));
        details.push(Span::styled("popular", Style::default().fg(PRIMARY_BLUE)));
    }

    ListItem::new(vec![title, Line::from(details)])
}

fn format_price(price: f64) -> String {
    if price == 0.0 {
        "Free".to_string()
    } else {
        format!("${:.2}", price)
    }
}

fn detail_lines(fighter: &Fighter) -> Vec<Line<'static>> {
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let field = |name: &str, text: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", name), label),
            Span::styled(text, value),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            fighter.name.clone(),
            Style::default().fg(PRIMARY_BLUE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Universe", fighter.universe.clone()),
        field("ID", fighter.id.clone()),
    ];
    if let Some(rate) = fighter.rate {
        lines.push(field("Rating", format!("{:.1} / 5", rate)));
    }
    if let Some(price) = fighter.price {
        lines.push(field("Price", format_price(price)));
    }
    if let Some(downloads) = fighter.downloads {
        lines.push(field("Downloads", downloads.to_string()));
    }
    if let Some(popular) = fighter.popular {
        lines.push(field("Popular", if popular { "yes" } else { "no" }.to_string()));
    }
    if let Some(url) = &fighter.image_url {
        lines.push(field("Image", url.clone()));
    }
    for (key, extra) in &fighter.extra {
        let text = match extra {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        lines.push(field(key.as_str(), text));
    }
    if let Some(description) = &fighter.description {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(description.clone(), value)));
    }
    lines
}

fn draw_fighter_detail(frame: &mut Frame<'_>, fighter: &Fighter, area: Rect) {
    frame.render_widget(Clear, area);
    let widget = Paragraph::new(detail_lines(fighter))
        .wrap(Wrap { trim: false })
        .block(section_block("Fighter", true));
    frame.render_widget(widget, area);
}
