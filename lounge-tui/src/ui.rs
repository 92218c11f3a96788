//! UI rendering using ratatui

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use lounge_core::{CatalogItem, NavEntry, Region, RowId};

use crate::app::App;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: content above, status/help bar below
    let vertical = Layout::vertical([Constraint::Min(5), Constraint::Length(2)]).split(area);

    // Drawer expands while it holds focus, collapses to an icon rail
    // while the content area does.
    let drawer_width = if app.drawer_collapsed() {
        app.ui.collapsed_width
    } else {
        app.ui.drawer_width
    };

    let horizontal =
        Layout::horizontal([Constraint::Length(drawer_width), Constraint::Min(20)])
            .split(vertical[0]);

    render_drawer(frame, app, horizontal[0]);
    render_content(frame, app, horizontal[1]);
    render_status_bar(frame, app, vertical[1]);
}

/// Render the navigation drawer
fn render_drawer(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.screen.region() == Region::Drawer;
    let collapsed = app.drawer_collapsed();

    let border_style = if is_focused {
        Style::default().fg(app.theme.accent())
    } else {
        Style::default().fg(app.theme.secondary())
    };

    let block = Block::default()
        .title(if collapsed { "" } else { " Services " })
        .title_style(if is_focused {
            Style::default()
                .fg(app.theme.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.secondary())
        })
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = NavEntry::ALL
        .iter()
        .map(|&entry| {
            let is_owner = entry == app.screen.owner();
            let marker = if is_owner { "► " } else { "  " };
            let label = if collapsed {
                format!("{}{}", marker, entry.icon())
            } else {
                format!("{}{} {}", marker, entry.icon(), entry.title())
            };

            let style = if is_focused && app.screen.is_entry_focused(entry) {
                Style::default()
                    .fg(Color::Black)
                    .bg(app.theme.accent())
                    .add_modifier(Modifier::BOLD)
            } else if is_owner {
                Style::default().fg(app.theme.accent())
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the content area: two stacked card rows inside a padded
/// container, both showing the selected entry's catalog
fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.screen.region() == Region::Content;

    let border_style = if is_focused {
        Style::default().fg(app.theme.accent())
    } else {
        Style::default().fg(app.theme.secondary())
    };

    let block = Block::default()
        .title(format!(" {} ", app.screen.owner()))
        .title_style(if is_focused {
            Style::default()
                .fg(app.theme.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.secondary())
        })
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::uniform(app.ui.padding));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(app.cards.height),
        Constraint::Length(app.cards.row_gap),
        Constraint::Length(app.cards.height),
        Constraint::Min(0),
    ])
    .split(inner);

    render_row(frame, app, RowId::Top, rows[0]);
    render_row(frame, app, RowId::Bottom, rows[2]);
}

/// Render one horizontally-scrolling card row
fn render_row(frame: &mut Frame, app: &App, row: RowId, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let catalog = app.screen.catalog();
    let visible = app.cards_per_row(area.width).max(1);
    let offset = app.row_offset(row, visible);
    let step = app.cards.width + app.cards.gap;

    let focused_card = app.screen.focused_card();

    for (slot, index) in (offset..catalog.len()).take(visible).enumerate() {
        let Some(item) = catalog.get(index) else {
            break;
        };
        let x = area.x + slot as u16 * step;
        let card_area = Rect {
            x,
            y: area.y,
            width: app.cards.width.min(area.right().saturating_sub(x)),
            height: app.cards.height.min(area.height),
        };
        let focused = focused_card == Some((row, index));
        render_card(frame, app, item, focused, card_area);
    }

    // Truncation hints when cards hang off either edge.
    let hint_style = Style::default().fg(app.theme.dim());
    if offset > 0 {
        let hint = Rect { x: area.x, y: area.y + area.height / 2, width: 1, height: 1 };
        frame.render_widget(Paragraph::new("‹").style(hint_style), hint);
    }
    if offset + visible < catalog.len() {
        let hint = Rect {
            x: area.right().saturating_sub(1),
            y: area.y + area.height / 2,
            width: 1,
            height: 1,
        };
        frame.render_widget(Paragraph::new("›").style(hint_style), hint);
    }
}

/// Render a single card
fn render_card(frame: &mut Frame, app: &App, item: &CatalogItem, focused: bool, area: Rect) {
    let border_style = if focused {
        Style::default().fg(app.theme.accent())
    } else {
        Style::default().fg(app.theme.secondary())
    };

    let title_style = if focused {
        Style::default()
            .fg(app.theme.highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(app.theme.card_title())
            .add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(app.theme.card_bg()));

    let text = vec![
        Line::from(Span::styled(item.name, title_style)),
        Line::from(Span::styled(
            item.description,
            Style::default().fg(app.theme.card_text()),
        )),
    ];

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let region_badge = match app.screen.region() {
        Region::Drawer => Span::styled(
            " DRAWER ",
            Style::default().bg(app.theme.accent()).fg(Color::Black),
        ),
        Region::Content => Span::styled(
            " BROWSE ",
            Style::default().bg(app.theme.highlight()).fg(Color::Black),
        ),
    };

    let help_text = match app.screen.region() {
        Region::Drawer => "j/k:entry  l:browse  1-3:jump  Tab:region  q:quit",
        Region::Content => "h/l:card  j/k:row  h at first card:drawer  Tab:region  q:quit",
    };

    let status = app.status_message.as_deref().unwrap_or("");

    let line = Line::from(vec![
        region_badge,
        Span::raw(" "),
        Span::styled(help_text, Style::default().fg(app.theme.dim())),
    ]);
    let status_line = Line::from(Span::styled(
        status,
        Style::default().fg(app.theme.highlight()),
    ));

    frame.render_widget(Paragraph::new(vec![line, status_line]), area);
}
