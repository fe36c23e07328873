//! Frame rendering.
//!
//! Layout: title bar / tab bar / active view / status bar. One render
//! function per view. The Query view is the only one wired to live state;
//! Analytics and Archive render fixed illustrative data and Settings is a
//! static status sheet.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Sparkline, Table, Tabs, Wrap},
    Frame,
};

use crate::query::QueryState;
use crate::ui::answer::split_answer;
use crate::ui::state::{App, Tab};

/// One archive table entry (illustrative audit trail).
pub struct ArchiveRow {
    pub id: &'static str,
    pub question: &'static str,
    pub product: &'static str,
    pub date: &'static str,
    pub status: &'static str,
    pub source_count: u32,
}

/// Fixed case-archive rows.
pub const ARCHIVE_ROWS: &[ArchiveRow] = &[
    ArchiveRow {
        id: "TR-8291",
        question: "Why are credit card interest rates increasing in Florida?",
        product: "Credit card",
        date: "2026-02-06",
        status: "Grounded",
        source_count: 12,
    },
    ArchiveRow {
        id: "TR-8290",
        question: "Mortgage disclosure delays at Citibank.",
        product: "Mortgages",
        date: "2026-02-05",
        status: "Grounded",
        source_count: 8,
    },
    ArchiveRow {
        id: "TR-8289",
        question: "Inaccurate reporting of paid-off debt records.",
        product: "Credit reporting",
        date: "2026-02-05",
        status: "Refused",
        source_count: 0,
    },
    ArchiveRow {
        id: "TR-8288",
        question: "Late fee transparency for consumer bank accounts.",
        product: "Bank account",
        date: "2026-02-04",
        status: "Grounded",
        source_count: 22,
    },
    ArchiveRow {
        id: "TR-8287",
        question: "Illegal debt collection practices in high-risk zones.",
        product: "Debt collection",
        date: "2026-02-04",
        status: "Grounded",
        source_count: 15,
    },
];

/// Complaint volume per product category.
const CATEGORY_VOLUME: &[(&str, u64)] = &[
    ("Credit card", 4500),
    ("Debt collection", 3200),
    ("Mortgages", 2800),
    ("Bank account", 2100),
    ("Credit reporting", 1800),
];

/// Six-week complaint intensity trend.
const WEEKLY_COMPLAINTS: &[u64] = &[400, 600, 550, 800, 950, 1100];
const WEEKLY_RESOLVED: &[u64] = &[320, 480, 510, 650, 890, 980];

/// Most common grievance vectors.
const ISSUE_COUNTS: &[(&str, u64)] = &[
    ("Billing", 1200),
    ("Privacy", 900),
    ("Customer service", 850),
    ("Interest", 600),
    ("Fees", 400),
];

/// Headline KPI tiles: label, value, trend vs last month.
const KPIS: &[(&str, &str, &str)] = &[
    ("Total Narratives", "15,482", "+12%"),
    ("Critical Friction", "842", "-5%"),
    ("Affected Users", "125k", "+3%"),
    ("Resolution Alpha", "0.92", "stable"),
];

/// Render one frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(2), // Tabs
            Constraint::Min(0),    // Active view
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let title = Paragraph::new("CrediTrust | Complaint Intelligence Console").style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, chunks[0]);

    let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()).collect::<Vec<_>>())
        .block(Block::default().borders(Borders::BOTTOM))
        .select(app.tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[1]);

    match app.tab {
        Tab::Query => render_query(frame, app, chunks[2]),
        Tab::Analytics => render_analytics(frame, chunks[2]),
        Tab::Archive => render_archive(frame, app, chunks[2]),
        Tab::Settings => render_settings(frame, app, chunks[2]),
    }

    let status_text = match app.tab {
        Tab::Query => {
            "Enter submit | Shift+Enter newline | Ctrl+P filter | Ctrl+L clear | ↑↓ card | →/← expand | Tab views | Ctrl+C quit"
        }
        Tab::Analytics => "Market analytics (illustrative) | Tab views | q quit",
        Tab::Archive => "Case archive | ↑↓ select row | Tab views | q quit",
        Tab::Settings => "System core | Tab views | q quit",
    };
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, chunks[3]);
}

// ---------------------------------------------------------------------------
// Query view
// ---------------------------------------------------------------------------

fn render_query(frame: &mut Frame, app: &App, area: Rect) {
    let banner_height = match app.controller.state() {
        QueryState::Errored(_) => 4,
        _ => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),             // Input box
            Constraint::Length(banner_height), // Error banner
            Constraint::Min(0),                // Answer + evidence
        ])
        .split(area);

    render_input_box(frame, app, chunks[0]);

    if let QueryState::Errored(message) = app.controller.state() {
        render_error_banner(frame, message, chunks[1]);
    }

    match app.controller.state() {
        QueryState::Idle => render_idle_hero(frame, chunks[2]),
        QueryState::Loading => render_loading(frame, chunks[2]),
        QueryState::Errored(_) => {}
        QueryState::Answered(response) => {
            let sources = app.visible_sources();
            if sources.is_empty() {
                render_answer_panel(frame, &response.answer, chunks[2]);
            } else {
                let split = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(chunks[2]);
                render_answer_panel(frame, &response.answer, split[0]);
                render_evidence(frame, app, split[1]);
            }
        }
    }
}

fn render_input_box(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(format!(
        " Ask about customer complaints | filter: {} ",
        app.input.product_label()
    ));

    let input = if app.input.buffer().is_empty() {
        Paragraph::new(Span::styled(
            "Ask a question about customer complaints...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(app.input.buffer().to_string())
    };

    frame.render_widget(input.block(block).wrap(Wrap { trim: false }), area);
}

fn render_error_banner(frame: &mut Frame, message: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Engine Communication Failure",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message, Style::default().fg(Color::Red))),
    ];
    let banner = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(banner, area);
}

fn render_idle_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Turn complaints into insights.",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Grounded RAG intelligence over customer complaint narratives."),
        Line::from("Instant, factual analysis backed by real-world evidence."),
        Line::from(""),
        Line::from(Span::styled(
            "Zero hallucination · Evidence grounded · Traceable sources",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let hero = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new(Line::from(Span::styled(
        "Analyzing complaint narratives...",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    )))
    .block(Block::default().borders(Borders::ALL).title(" Working "));
    frame.render_widget(loading, area);
}

fn render_answer_panel(frame: &mut Frame, answer: &str, area: Rect) {
    let sections = split_answer(answer);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let summary = Paragraph::new(sections.summary)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Key Observations ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, columns[0]);

    let detail = Paragraph::new(sections.detail)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Detailed Analysis "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(detail, columns[1]);
}

fn render_evidence(frame: &mut Frame, app: &App, area: Rect) {
    let sources = app.visible_sources();
    // Empty evidence renders nothing at all: no block, no placeholder.
    if sources.is_empty() {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, source) in sources.iter().enumerate() {
        let selected = i == app.selected_card();
        let marker = if app.is_expanded(i) { "[-]" } else { "[+]" };
        let header_style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(Span::styled(
            format!(
                "{} 0{}  {}  |  {}  |  case {}",
                marker,
                i + 1,
                source.product,
                source.company,
                source.complaint_id
            ),
            header_style,
        )));

        if app.is_expanded(i) {
            lines.push(Line::from(Span::styled(
                format!("    \"{}\"", source.text),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Cited Evidence ({}) ", sources.len()));
    let list = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(list, area);
}

// ---------------------------------------------------------------------------
// Analytics view (fixed illustrative data)
// ---------------------------------------------------------------------------

fn render_analytics(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // KPI tiles
            Constraint::Min(8),     // Category volume
            Constraint::Length(6),  // Trend sparklines
        ])
        .split(area);

    render_kpis(frame, rows[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let volume = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Category Split: complaint volume "),
        )
        .data(CATEGORY_VOLUME)
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(volume, middle[0]);

    let issue_lines: Vec<Line> = ISSUE_COUNTS
        .iter()
        .map(|(issue, count)| {
            Line::from(vec![
                Span::styled(format!("{issue:<18}"), Style::default().fg(Color::White)),
                Span::styled(format!("{count:>6}"), Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();
    let issues = Paragraph::new(issue_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Common Grievance Vectors "),
    );
    frame.render_widget(issues, middle[1]);

    let trend = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let complaints = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Complaints / week "),
        )
        .data(WEEKLY_COMPLAINTS)
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(complaints, trend[0]);

    let resolved = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Resolved / week "),
        )
        .data(WEEKLY_RESOLVED)
        .style(Style::default().fg(Color::Green));
    frame.render_widget(resolved, trend[1]);
}

fn render_kpis(frame: &mut Frame, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (i, (label, value, trend)) in KPIS.iter().enumerate() {
        let trend_color = if trend.starts_with('+') {
            Color::Green
        } else if trend.starts_with('-') {
            Color::Red
        } else {
            Color::Cyan
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    *value,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(*trend, Style::default().fg(trend_color)),
            ]),
            Line::from(Span::styled(*label, Style::default().fg(Color::DarkGray))),
        ];
        let tile = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(tile, tiles[i]);
    }
}

// ---------------------------------------------------------------------------
// Archive view (fixed illustrative data)
// ---------------------------------------------------------------------------

fn render_archive(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let header = Row::new(vec!["Case ID", "Analysis Query", "Product", "Status", "Sources", "Date"])
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let rows: Vec<Row> = ARCHIVE_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let status_style = if row.status == "Grounded" {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            let base = if i == app.archive_row {
                Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(row.id),
                Cell::from(row.question),
                Cell::from(row.product),
                Cell::from(Span::styled(row.status, status_style)),
                Cell::from(row.source_count.to_string()),
                Cell::from(row.date),
            ])
            .style(base)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Min(30),
            Constraint::Length(17),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Case Archive: historical audit trail "),
    );
    frame.render_widget(table, chunks[0]);

    let footer = Paragraph::new("Showing top 5 of 842 records")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[1]);
}

// ---------------------------------------------------------------------------
// Settings view (static status sheet)
// ---------------------------------------------------------------------------

fn render_settings(frame: &mut Frame, app: &App, area: Rect) {
    let field = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let lines = vec![
        Line::from(Span::styled(
            "Neural Engine",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  Status         ", field),
            Span::styled("ACTIVE", Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("  Model weight   ", field),
            Span::styled("flan-t5-base", value),
        ]),
        Line::from(vec![
            Span::styled("  Vector cache   ", field),
            Span::styled("ChromaDB", value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Client",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  Backend URL    ", field),
            Span::styled(app.controller.api_url().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("  Endpoint       ", field),
            Span::styled("POST /ask", value),
        ]),
        Line::from(vec![
            Span::styled("  Console        ", field),
            Span::styled(concat!("creditrust v", env!("CARGO_PKG_VERSION")), value),
        ]),
    ];

    let sheet = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" System Core "),
    );
    frame.render_widget(sheet, area);
}
