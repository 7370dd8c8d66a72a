// services/helios-dash/src/main.rs
//
// Terminal dashboard for the Helios road-CCTV damage monitoring backend
// Polls the analysis/report APIs and renders cards, tables and donut charts
//
// Run with: cargo run --bin helios-dash -- --demo

use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::canvas::{Canvas, Points},
    widgets::*,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use helioskit::chart::{donut_arcs, DONUT_RADIUS};
use helioskit::config::{load_config, DashConfig};
use helioskit::stats::{
    self, breakdown_by_severity, breakdown_by_status, breakdown_by_type, ChartSlice, Rgb,
};
use helioskit::types::{DetectionRecord, ReportRecord};

mod api;
mod mock;
mod poll;
mod state;

use api::{ApiClient, ApiLatency, Endpoint};
use mock::MockBackend;
use poll::{spawn_poller, PollHandle};
use state::DashboardState;

#[derive(Parser, Debug)]
#[command(name = "helios-dash")]
#[command(about = "Terminal dashboard for the Helios road-CCTV damage monitoring backend")]
#[command(version = "0.1.0")]
struct Args {
    /// Run with simulated data (no backend required)
    #[arg(long, short)]
    demo: bool,

    /// Configuration file (HELIOS_* environment variables override it)
    #[arg(long)]
    config: Option<String>,

    /// Backend base URL override
    #[arg(long)]
    api_url: Option<String>,

    /// Poll interval override in seconds
    #[arg(long)]
    poll_secs: Option<u64>,

    /// Draw-loop tick in milliseconds
    #[arg(long, default_value = "250")]
    tick_ms: u64,

    /// Diagnostic log file
    #[arg(long, default_value = "helios-dash.log")]
    log_file: String,
}

// Color palette: Helios blue on dark slate
mod colors {
    use ratatui::style::Color;

    pub const BLUE: Color = Color::Rgb(59, 130, 246);
    pub const DARK_BLUE: Color = Color::Rgb(30, 58, 138);
    pub const WHITE: Color = Color::Rgb(243, 244, 246);
    pub const SILVER: Color = Color::Rgb(148, 163, 184);
    pub const GOLD: Color = Color::Rgb(234, 179, 8);
    pub const SUCCESS: Color = Color::Rgb(34, 197, 94);
    pub const ERROR: Color = Color::Rgb(239, 68, 68);
    pub const BG_DARK: Color = Color::Rgb(2, 6, 23);
    pub const BG_PANEL: Color = Color::Rgb(15, 23, 42);
}

fn tint(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_file)?;

    let mut config = load_config(args.config.as_deref())?;
    if let Some(url) = &args.api_url {
        config.api_url = url.clone();
    }
    if let Some(secs) = args.poll_secs {
        // interval(0) panics
        config.poll_interval_secs = secs.max(1);
        config.status_interval_secs = secs.max(1);
    } else if args.demo {
        // Demo data is cheap; tighten the loop so the panels visibly move.
        config.poll_interval_secs = 2;
        config.status_interval_secs = 5;
    }

    info!(
        "starting helios-dash (demo={}, api_url={})",
        args.demo, config.api_url
    );

    let pollers = if args.demo {
        Pollers::demo(&config)
    } else {
        Pollers::live(&config)
    };

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run app
    let result = run_app(&mut terminal, &args, pollers).await;

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn init_tracing(path: &str) -> Result<()> {
    // The alternate screen owns stdout; diagnostics go to a file instead.
    let file = std::fs::File::create(path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "helios_dash=info,helioskit=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

/// One polling loop per data source. Demo and live mode differ only in the
/// fetch closures handed to the pollers; everything downstream is shared.
struct Pollers {
    analyses: PollHandle<Vec<DetectionRecord>>,
    detections: PollHandle<Vec<DetectionRecord>>,
    reports: PollHandle<Vec<ReportRecord>>,
    latencies: PollHandle<Vec<ApiLatency>>,
}

impl Pollers {
    fn live(config: &DashConfig) -> Self {
        let client = Arc::new(ApiClient::new(config));
        let interval = config.poll_interval();

        let analyses = {
            let client = client.clone();
            spawn_poller("analyze", interval, move || {
                let client = client.clone();
                async move { client.fetch_analyses().await }
            })
        };
        let detections = {
            let client = client.clone();
            spawn_poller("detected", interval, move || {
                let client = client.clone();
                async move { client.fetch_detections().await }
            })
        };
        let reports = {
            let client = client.clone();
            spawn_poller("reports", interval, move || {
                let client = client.clone();
                async move { client.fetch_reports().await }
            })
        };
        let latencies = {
            let client = client.clone();
            spawn_poller("status", config.status_interval(), move || {
                let client = client.clone();
                async move { client.measure_all().await }
            })
        };

        Self {
            analyses,
            detections,
            reports,
            latencies,
        }
    }

    fn demo(config: &DashConfig) -> Self {
        let backend = MockBackend::new();
        let interval = config.poll_interval();

        let analyses = {
            let backend = backend.clone();
            spawn_poller("analyze", interval, move || {
                let backend = backend.clone();
                async move { backend.analyses().await }
            })
        };
        let detections = {
            let backend = backend.clone();
            spawn_poller("detected", interval, move || {
                let backend = backend.clone();
                async move { backend.detections().await }
            })
        };
        let reports = {
            let backend = backend.clone();
            spawn_poller("reports", interval, move || {
                let backend = backend.clone();
                async move { backend.reports().await }
            })
        };
        let latencies = {
            let backend = backend.clone();
            spawn_poller("status", config.status_interval(), move || {
                let backend = backend.clone();
                async move { backend.latencies().await }
            })
        };

        Self {
            analyses,
            detections,
            reports,
            latencies,
        }
    }

    fn refresh_all(&self) {
        self.analyses.refresh();
        self.detections.refresh();
        self.reports.refresh();
        self.latencies.refresh();
    }
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    args: &Args,
    pollers: Pollers,
) -> Result<()> {
    let mut state = DashboardState::new();

    if args.demo {
        state.add_log("INFO", "dashboard started in DEMO mode");
    } else {
        state.add_log("INFO", "dashboard started - polling backend");
    }

    let tick_rate = Duration::from_millis(args.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        // Copy the latest snapshots out of the polling loops
        state.apply(
            pollers.analyses.latest(),
            pollers.detections.latest(),
            pollers.reports.latest(),
            pollers.latencies.latest(),
        );

        // Draw UI
        terminal.draw(|frame| draw_ui(frame, &state, args.demo))?;

        // Handle input
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('r') => {
                            pollers.refresh_all();
                            state.add_log("INFO", "manual refresh requested");
                        }
                        KeyCode::Up => state.scroll_up(),
                        KeyCode::Down => state.scroll_down(),
                        _ => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
}

fn draw_ui(frame: &mut Frame, state: &DashboardState, demo_mode: bool) {
    let area = frame.area();

    // Background
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BG_DARK)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // API status cards
            Constraint::Min(20),   // Main panels
            Constraint::Length(8), // Activity log
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(frame, chunks[0], state, demo_mode);
    draw_api_status(frame, chunks[1], state);
    draw_main_content(frame, chunks[2], state);
    draw_activity_panel(frame, chunks[3], state);
    draw_footer(frame, chunks[4]);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &DashboardState, demo_mode: bool) {
    let (mode_text, mode_color) = if demo_mode {
        ("DEMO", colors::GOLD)
    } else if state.loading() {
        ("CONNECTING", colors::SILVER)
    } else if !state.connected() {
        ("DISCONNECTED", colors::ERROR)
    } else if state.analyses.error || state.detections.error || state.reports.error {
        ("DEGRADED", colors::GOLD)
    } else {
        ("LIVE", colors::SUCCESS)
    };

    let clock = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let title = Line::from(vec![
        Span::styled(
            " HELIOS ",
            Style::default().fg(colors::WHITE).bg(colors::DARK_BLUE).bold(),
        ),
        Span::raw("  "),
        Span::styled("CCTV 관리 시스템", Style::default().fg(colors::BLUE).bold()),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", mode_text),
            Style::default().fg(mode_color).bold(),
        ),
        Span::raw("  "),
        Span::styled(clock, Style::default().fg(colors::SILVER)),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors::DARK_BLUE))
                .style(Style::default().bg(colors::BG_DARK)),
        );

    frame.render_widget(header, area);
}

fn draw_api_status(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let probes = state.latencies.data.as_deref().unwrap_or(&[]);
    for (i, endpoint) in Endpoint::ALL.iter().enumerate() {
        let probe = probes.iter().find(|p| p.endpoint == *endpoint);
        let (value, color) = match probe {
            Some(p) if p.ok => (format!("{}ms", p.elapsed.as_millis()), colors::SUCCESS),
            Some(p) => (format!("{}ms", p.elapsed.as_millis()), colors::ERROR),
            None => ("-".to_string(), colors::SILVER),
        };
        draw_stat_box(frame, chunks[i], endpoint.title(), &value, color);
    }
}

fn draw_stat_box(frame: &mut Frame, area: Rect, label: &str, value: &str, value_color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(value_color).bold(),
        )),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

fn draw_main_content(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // report summary cards
            Constraint::Length(14), // breakdown donuts
            Constraint::Min(8),     // report table
        ])
        .split(columns[0]);

    draw_report_cards(frame, left[0], state);
    draw_breakdown_donuts(frame, left[1], state);
    draw_report_table(frame, left[2], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // cctv summary cards
            Constraint::Length(14), // top-5 detection donut
            Constraint::Length(10), // top-8 label bars
            Constraint::Min(6),     // fixed label grid
        ])
        .split(columns[1]);

    draw_cctv_cards(frame, right[0], state);
    draw_detection_donut(frame, right[1], state);
    draw_label_bars(frame, right[2], state);
    draw_label_grid(frame, right[3], state);
}

fn draw_report_cards(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let summary = state.report_summary();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    draw_stat_box(frame, chunks[0], "총 신고", &summary.total.to_string(), colors::WHITE);
    draw_stat_box(frame, chunks[1], "미확인", &summary.unchecked.to_string(), colors::GOLD);
    draw_stat_box(frame, chunks[2], "확인됨", &summary.checked.to_string(), colors::SUCCESS);
    draw_stat_box(
        frame,
        chunks[3],
        "위험",
        &summary.critical.to_string(),
        if summary.critical > 0 {
            colors::ERROR
        } else {
            colors::SILVER
        },
    );
}

fn draw_cctv_cards(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let summary = state.detection_summary();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    draw_stat_box(frame, chunks[0], "총 CCTV", &summary.total.to_string(), colors::WHITE);
    draw_stat_box(
        frame,
        chunks[1],
        "파손 도로",
        &summary.detected.to_string(),
        if summary.detected > 0 {
            colors::ERROR
        } else {
            colors::SILVER
        },
    );
    draw_stat_box(frame, chunks[2], "일반 도로", &summary.clean.to_string(), colors::SUCCESS);
    draw_stat_box(frame, chunks[3], "점검중", &summary.maintenance.to_string(), colors::GOLD);
}

fn draw_breakdown_donuts(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let reports = state.report_records();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let error = state.reports.error;
    draw_donut(frame, chunks[0], " 유형별 ", &breakdown_by_type(reports), error);
    draw_donut(frame, chunks[1], " 우선순위별 ", &breakdown_by_severity(reports), error);
    draw_donut(frame, chunks[2], " 처리 상태별 ", &breakdown_by_status(reports), error);
}

fn draw_detection_donut(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let counts = stats::top_labels(state.detection_records(), 5);
    let slices: Vec<ChartSlice> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| ChartSlice {
            label: c.label.clone(),
            value: c.count,
            color: stats::PALETTE[i % stats::PALETTE.len()],
        })
        .collect();

    draw_donut(frame, area, " 검출 상위 5 ", &slices, state.detections.error);
}

fn draw_donut(frame: &mut Frame, area: Rect, title: &str, slices: &[ChartSlice], error: bool) {
    let border_color = if error { colors::ERROR } else { colors::DARK_BLUE };
    let block = Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(colors::GOLD).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(slices.len().min(5) as u16),
        ])
        .split(inner);

    let total: u64 = slices.iter().map(|s| s.value).sum();
    let values: Vec<u64> = slices.iter().map(|s| s.value).collect();
    let arcs = donut_arcs(&values, DONUT_RADIUS);

    let canvas = Canvas::default()
        .background_color(colors::BG_PANEL)
        .marker(Marker::Braille)
        .x_bounds([-1.5, 1.5])
        .y_bounds([-1.5, 1.5])
        .paint(|ctx| {
            if total == 0 {
                ctx.print(
                    0.0,
                    0.0,
                    Line::styled("데이터 없음", Style::default().fg(colors::SILVER)),
                );
                return;
            }
            for (slice, arc) in slices.iter().zip(&arcs) {
                let start = arc.start_fraction(DONUT_RADIUS);
                let sweep = arc.sweep_fraction(DONUT_RADIUS);
                if sweep <= 0.0 {
                    continue;
                }
                // Ring starts at 12 o'clock and runs clockwise, like the
                // rotated SVG circle it replaces.
                let steps = ((sweep * 180.0).ceil() as usize).max(2);
                let mut points = Vec::with_capacity((steps + 1) * 2);
                for i in 0..=steps {
                    let f = start + sweep * (i as f64 / steps as f64);
                    let theta = std::f64::consts::FRAC_PI_2 - std::f64::consts::TAU * f;
                    for r in [0.82, 1.0] {
                        points.push((r * theta.cos(), r * theta.sin()));
                    }
                }
                ctx.draw(&Points {
                    coords: &points,
                    color: tint(slice.color),
                });
            }
            ctx.print(
                0.0,
                0.0,
                Line::styled(
                    total.to_string(),
                    Style::default().fg(colors::WHITE).bold(),
                ),
            );
        });

    frame.render_widget(canvas, rows[0]);

    let legend: Vec<Line> = slices
        .iter()
        .map(|slice| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(tint(slice.color))),
                Span::styled(slice.label.clone(), Style::default().fg(colors::WHITE)),
                Span::styled(
                    format!(" {}건", slice.value),
                    Style::default().fg(colors::SILVER),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(legend), rows[1]);
}

fn draw_label_bars(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(Span::styled(
            " 전체 라벨 TOP 8 ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let counts = stats::top_labels(state.analysis_records(), 8);
    if counts.is_empty() {
        let placeholder = Paragraph::new(Line::styled(
            "데이터 없음",
            Style::default().fg(colors::SILVER),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let max = counts.first().map(|c| c.count).unwrap_or(0).max(1);
    let bar_width = u64::from(area.width.saturating_sub(22));
    let lines: Vec<Line> = counts
        .iter()
        .map(|c| {
            let filled = (c.count.saturating_mul(bar_width) / max) as usize;
            Line::from(vec![
                Span::styled(format!("{:<10}", c.label), Style::default().fg(colors::WHITE)),
                Span::styled("█".repeat(filled), Style::default().fg(colors::BLUE)),
                Span::styled(format!(" {}", c.count), Style::default().fg(colors::SILVER)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_label_grid(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(Span::styled(
            " 도로 파손 라벨 현황 ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let counts = stats::count_fixed_labels(state.analysis_records());
    let rows: Vec<Row> = counts
        .iter()
        .map(|c| {
            let count_color = if c.count > 0 { colors::GOLD } else { colors::SILVER };
            Row::new(vec![
                Cell::from(Span::styled(
                    c.label.clone(),
                    Style::default().fg(colors::WHITE),
                )),
                Cell::from(Span::styled(
                    format!("{}개", c.count),
                    Style::default().fg(count_color),
                )),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Min(16), Constraint::Length(8)])
        .header(
            Row::new(vec![
                Cell::from(Span::styled(
                    "손상 유형",
                    Style::default().fg(colors::GOLD).bold(),
                )),
                Cell::from(Span::styled(
                    "검출",
                    Style::default().fg(colors::GOLD).bold(),
                )),
            ])
            .bottom_margin(1),
        )
        .block(block);

    frame.render_widget(table, area);
}

fn draw_report_table(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let error = state.reports.error;
    let title = if error {
        " 신고 목록 (연결 끊김 - R 재시도) "
    } else {
        " 신고 목록 "
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(if error { colors::ERROR } else { colors::WHITE })
                .bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if error { colors::ERROR } else { colors::SILVER }))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let reports = state.report_records();

    if state.reports.loading && reports.is_empty() {
        let placeholder = Paragraph::new(Line::styled(
            "불러오는 중…",
            Style::default().fg(colors::SILVER),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    if reports.is_empty() {
        let placeholder = Paragraph::new(Line::styled(
            "표시할 신고가 없습니다",
            Style::default().fg(colors::SILVER),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let rows: Vec<Row> = reports
        .iter()
        .skip(state.scroll_offset)
        .map(|r| {
            let kind = stats::DamageKind::from_code(&r.damage_type).style();
            let severity = stats::SeverityLevel::from_raw(r.severity).style();
            let status = stats::CheckStatus::from_flag(r.is_checked).style();

            Row::new(vec![
                Cell::from(Span::styled(kind.label, Style::default().fg(tint(kind.color)))),
                Cell::from(Span::styled(
                    r.location.clone(),
                    Style::default().fg(colors::WHITE),
                )),
                Cell::from(Span::styled(
                    severity.label,
                    Style::default().fg(tint(severity.color)),
                )),
                Cell::from(Span::styled(
                    status.label,
                    Style::default().fg(tint(status.color)),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from(Span::styled("유형", Style::default().fg(colors::GOLD).bold())),
            Cell::from(Span::styled("위치", Style::default().fg(colors::GOLD).bold())),
            Cell::from(Span::styled(
                "우선순위",
                Style::default().fg(colors::GOLD).bold(),
            )),
            Cell::from(Span::styled("상태", Style::default().fg(colors::GOLD).bold())),
        ])
        .bottom_margin(1),
    )
    .block(block);

    frame.render_widget(table, area);
}

fn draw_activity_panel(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(Span::styled(
            " ACTIVITY LOG ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let logs: Vec<Line> = state
        .activity_log
        .iter()
        .rev()
        .take(20)
        .map(|entry| {
            let (prefix, color) = match entry.level.as_str() {
                "ERROR" => ("[ERR]", colors::ERROR),
                "WARN" => ("[WRN]", colors::GOLD),
                "INFO" => ("[INF]", colors::SUCCESS),
                _ => ("[---]", colors::SILVER),
            };

            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
                ),
                Span::styled(format!("{} ", prefix), Style::default().fg(color)),
                Span::styled(entry.message.clone(), Style::default().fg(colors::WHITE)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(logs).block(block).wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled(" [Q] ", Style::default().fg(colors::BG_DARK).bg(colors::ERROR)),
        Span::styled(" Quit ", Style::default().fg(colors::SILVER)),
        Span::raw("  "),
        Span::styled(" [R] ", Style::default().fg(colors::BG_DARK).bg(colors::GOLD)),
        Span::styled(" Refresh ", Style::default().fg(colors::SILVER)),
        Span::raw("  "),
        Span::styled(
            " [UP/DOWN] ",
            Style::default().fg(colors::BG_DARK).bg(colors::SILVER),
        ),
        Span::styled(" Scroll ", Style::default().fg(colors::SILVER)),
    ]);

    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::DARK_BLUE))
                .style(Style::default().bg(colors::BG_DARK)),
        );

    frame.render_widget(footer, area);
}
