use crate::app::App;
use pipfall_core::{CardCategory, CombatOutcome, Intent, Phase};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Line, Span, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(10),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);
    draw_dice(frame, root[1], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(root[2]);

    draw_hand(frame, middle[0], app);
    draw_side_pane(frame, middle[1], app);
    draw_events(frame, root[3], app);

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let combat = &app.run.combat;
    let phase = match app.run.phase {
        Phase::Combat => match combat.outcome {
            Some(CombatOutcome::Victory) => "Victory",
            Some(CombatOutcome::Defeat) => "Defeat",
            None => "Combat",
        },
        Phase::Shop => "Shop",
        Phase::Upgrade => "Upgrade",
    };
    let intent = match combat.intent {
        Intent::Attack(value) => format!("Attack {value}"),
        Intent::Block(value) => format!("Block {value}"),
    };
    let lines = vec![
        Line::from(format!("Pipfall | {phase} | seed {}", app.seed).bold()),
        Line::from(format!(
            "Turn {}  Player {}/{} (block {})  Enemy {}/{} (block {})",
            combat.turn,
            combat.player_hp.max(0),
            combat.player_max_hp,
            combat.player_block,
            combat.enemy_hp.max(0),
            combat.enemy_max_hp,
            combat.enemy_block,
        )),
        Line::from(format!(
            "Intent: {intent}  Gold {}  Draw {} / Discard {}",
            app.run.profile.gold,
            combat.deck.draw.len(),
            combat.deck.discard.len(),
        )),
        Line::from(format!("Status: {}", app.status_line)),
    ];
    let block = Block::default().borders(Borders::ALL).title("Overview");
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn draw_dice(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected_dice();
    let mut spans: Vec<Span> = Vec::new();
    for (index, die) in app.run.combat.dice.dice.iter().enumerate() {
        let mut style = Style::default();
        if selected.contains(&index) {
            style = style.fg(Color::Magenta).bold();
        } else if die.frozen() {
            style = style.fg(Color::Cyan);
        }
        let marker = if die.frozen() { "*" } else { " " };
        spans.push(Span::styled(
            format!(" {}:[{}]{}", index + 1, die.value, marker),
            style,
        ));
    }
    let block = Block::default().borders(Borders::ALL).title("Dice");
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_hand(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .run
        .combat
        .hand
        .iter()
        .map(|card| {
            let (name, color) = match app.card_def(&card.key) {
                Some(def) => (def.name.clone(), category_color(def.category)),
                None => (card.key.clone(), Color::Gray),
            };
            ListItem::new(Line::from(Span::styled(name, Style::default().fg(color))))
        })
        .collect();
    let title = match app.pending_summary() {
        Some(summary) => format!("Hand: {summary}"),
        None => "Hand".to_string(),
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    if !app.run.combat.hand.is_empty() {
        state.select(Some(app.hand_cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_side_pane(frame: &mut Frame, area: Rect, app: &App) {
    match app.run.phase {
        Phase::Combat => draw_card_detail(frame, area, app),
        Phase::Shop | Phase::Upgrade => draw_offers(frame, area, app),
    }
}

fn draw_card_detail(frame: &mut Frame, area: Rect, app: &App) {
    let text = app
        .run
        .combat
        .hand
        .get(app.hand_cursor)
        .and_then(|card| app.card_def(&card.key))
        .map(|def| format!("{}\n\n{}", def.name, def.description))
        .unwrap_or_else(|| "No card under the cursor.".to_string());
    let block = Block::default().borders(Borders::ALL).title("Card");
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }).block(block), area);
}

fn draw_offers(frame: &mut Frame, area: Rect, app: &App) {
    let rows = app.offer_rows();
    let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(row.clone())).collect();
    let title = match app.run.phase {
        Phase::Shop => "Shop (enter buys, g continues)",
        Phase::Upgrade => "Upgrade (enter enhances, g continues)",
        Phase::Combat => "Offers",
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(app.offer_cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let height = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = app
        .event_log
        .iter()
        .rev()
        .take(height.max(1))
        .rev()
        .map(|line| Line::from(line.clone()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Log");
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 50, frame.area());
    let text = "1-5  click a die\n\
        up/down  move cursor\n\
        enter/p  play card / buy / enhance\n\
        c  confirm selection\n\
        e  end turn\n\
        n  new battle\n\
        g  continue after victory\n\
        ?  toggle help\n\
        q  quit";
    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn category_color(category: CardCategory) -> Color {
    match category {
        CardCategory::Attack => Color::Red,
        CardCategory::Defense => Color::Cyan,
        CardCategory::Enhance => Color::Magenta,
        CardCategory::Manipulation => Color::Blue,
        CardCategory::Utility => Color::Gray,
    }
}
