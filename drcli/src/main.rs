use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use libreach_storm::{
    export, list, report, BatchEvent, DomainResult, ProbeConfig, Prober, Progress, Scheme,
    Verdict,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    io::{self, Read, Write},
    path::PathBuf,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LARGE_LIST_THRESHOLD: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq)]
enum FilterMode {
    All,
    Reachable,
    Unreachable,
    Clean,
}

impl FilterMode {
    fn next(self) -> Self {
        match self {
            FilterMode::All => FilterMode::Reachable,
            FilterMode::Reachable => FilterMode::Unreachable,
            FilterMode::Unreachable => FilterMode::Clean,
            FilterMode::Clean => FilterMode::All,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct Config {
    #[serde(default)]
    probe: ProbeSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct ProbeSection {
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    batch_size: Option<usize>,
    #[serde(default)]
    pause_ms: Option<u64>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("dr").join("config.toml"))
}

fn load_config() -> Config {
    config_path()
        .and_then(|path| std::fs::read_to_string(&path).ok())
        .and_then(|content| toml::from_str(&content).ok())
        .unwrap_or_default()
}

fn get_default_config_toml() -> String {
    r#"# Domain Reach (dr) Configuration

[probe]
# Per-request timeout in seconds
# timeout_secs = 10

# Domains probed concurrently per group
# batch_size = 5

# Pause between groups in milliseconds
# pause_ms = 200
"#
    .to_string()
}

fn build_probe_config(args: &Args, config: &Config) -> ProbeConfig {
    let defaults = ProbeConfig::default();
    ProbeConfig {
        timeout: args
            .timeout_secs
            .or(config.probe.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout),
        batch_size: args
            .batch_size
            .or(config.probe.batch_size)
            .unwrap_or(defaults.batch_size)
            .max(1),
        inter_batch_pause: args
            .pause_ms
            .or(config.probe.pause_ms)
            .map(Duration::from_millis)
            .unwrap_or(defaults.inter_batch_pause),
    }
}

#[derive(Parser, Debug)]
#[command(name = "dr")]
#[command(
    about = "Domain Reach - batch HTTP/HTTPS reachability checks for domain lists",
    long_about = None
)]
struct Args {
    /// File with one domain per line ('-' for stdin); omit to type a list interactively
    file: Option<PathBuf>,

    /// Output results as NDJSON stream (one JSON object per line)
    #[arg(long, short = 'j')]
    ndjson: bool,

    /// Write the full result table as CSV to this path (runs without the TUI)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write only clean domains (reachable, no redirect) as CSV to this path
    #[arg(long)]
    clean_csv: Option<PathBuf>,

    /// Domains probed concurrently per group
    #[arg(long)]
    batch_size: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Pause between groups in milliseconds
    #[arg(long)]
    pause_ms: Option<u64>,

    /// Skip the confirmation prompt for large domain lists
    #[arg(long, short = 'y')]
    yes: bool,

    /// Print the default config to stdout and exit
    #[arg(long)]
    print_default_config: bool,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
enum RowStatus {
    Reachable,
    Unreachable,
    Error,
}

#[derive(Debug, Clone, Serialize)]
struct DomainCheckResult {
    domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    protocol: Option<String>,
    status: RowStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_time_ms: Option<u64>,
    redirected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_url: Option<String>,
    https_reachable: bool,
    http_reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    checked_at: String,
}

impl From<&DomainResult> for DomainCheckResult {
    fn from(result: &DomainResult) -> Self {
        let best = result.best();
        let status = match &result.verdict {
            Verdict::Reachable { .. } => RowStatus::Reachable,
            Verdict::Unreachable => RowStatus::Unreachable,
            Verdict::Faulted { .. } => RowStatus::Error,
        };
        let error = match &result.verdict {
            Verdict::Faulted { reason } => Some(reason.clone()),
            _ => None,
        };
        Self {
            domain: result.domain.clone(),
            protocol: result.verdict.scheme().map(|s| s.as_str().to_string()),
            status,
            status_code: best.and_then(|o| o.status_code()),
            status_text: best.and_then(|o| o.status_text()).map(str::to_string),
            response_time_ms: best.map(|o| o.elapsed_ms),
            redirected: best.is_some_and(|o| o.is_redirected()),
            final_url: best.and_then(|o| o.final_url()).map(str::to_string),
            https_reachable: result.https.as_ref().is_some_and(|o| o.is_reachable()),
            http_reachable: result.http.as_ref().is_some_and(|o| o.is_reachable()),
            error,
            checked_at: result.checked_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum DomainStatus {
    Pending,
    Checking,
    Reachable {
        scheme: Scheme,
        status_code: u16,
        elapsed_ms: u64,
        redirected: bool,
    },
    Unreachable,
    Error(String),
}

fn status_of(result: &DomainResult) -> DomainStatus {
    match &result.verdict {
        Verdict::Reachable { scheme } => {
            let best = result.best();
            DomainStatus::Reachable {
                scheme: *scheme,
                status_code: best.and_then(|o| o.status_code()).unwrap_or_default(),
                elapsed_ms: best.map(|o| o.elapsed_ms).unwrap_or_default(),
                redirected: best.is_some_and(|o| o.is_redirected()),
            }
        }
        Verdict::Unreachable => DomainStatus::Unreachable,
        Verdict::Faulted { reason } => DomainStatus::Error(reason.clone()),
    }
}

#[derive(Debug)]
struct BatchView {
    statuses: HashMap<String, DomainStatus>,
    records: Vec<DomainResult>,
    progress: Progress,
    running: bool,
}

impl BatchView {
    fn idle(domains: &[String]) -> Self {
        let statuses = domains
            .iter()
            .map(|d| (d.clone(), DomainStatus::Pending))
            .collect();
        Self {
            statuses,
            records: Vec::new(),
            progress: Progress {
                completed: 0,
                total: domains.len(),
            },
            running: false,
        }
    }
}

struct App {
    domains: Vec<String>,
    input: String,
    input_mode: bool,
    view: Arc<Mutex<BatchView>>,
    probe_config: ProbeConfig,
    list_state: ListState,
    quit: bool,
    tick: usize,
    filter_mode: FilterMode,
    toast_message: Option<(String, Instant)>,
}

impl App {
    fn new(domains: Vec<String>, probe_config: ProbeConfig) -> Self {
        let view = Arc::new(Mutex::new(BatchView::idle(&domains)));
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            input_mode: domains.is_empty(),
            domains,
            input: String::new(),
            view,
            probe_config,
            list_state,
            quit: false,
            tick: 0,
            filter_mode: FilterMode::All,
            toast_message: None,
        }
    }

    fn start_checking(&self) {
        if self.domains.is_empty() {
            return;
        }

        {
            let mut view = self.view.lock().unwrap();
            *view = BatchView::idle(&self.domains);
            view.running = true;
        }

        let domains = self.domains.clone();
        let config = self.probe_config.clone();
        let view = Arc::clone(&self.view);

        tokio::spawn(async move {
            let prober = Prober::with_config(config);
            let mut events = Box::pin(prober.batch_stream(domains));

            while let Some(event) = events.next().await {
                let mut view = view.lock().unwrap();
                match event {
                    BatchEvent::GroupStarted { domains } => {
                        for domain in domains {
                            view.statuses.insert(domain, DomainStatus::Checking);
                        }
                    }
                    BatchEvent::GroupCompleted { results, progress } => {
                        for result in &results {
                            view.statuses
                                .insert(result.domain.clone(), status_of(result));
                        }
                        view.records.extend(results);
                        view.progress = progress;
                    }
                }
            }

            view.lock().unwrap().running = false;
        });
    }

    fn submit_input(&mut self) {
        let raw = self.input.replace([',', ' '], "\n");
        let domains = list::parse_domain_list(&raw);
        if domains.is_empty() {
            return;
        }
        self.domains = domains;
        self.input_mode = false;
        self.filter_mode = FilterMode::All;
        self.list_state.select(Some(0));
        self.start_checking();
    }

    fn filtered_rows(&self) -> Vec<(String, DomainStatus)> {
        let view = self.view.lock().unwrap();
        self.domains
            .iter()
            .map(|d| {
                (
                    d.clone(),
                    view.statuses
                        .get(d)
                        .cloned()
                        .unwrap_or(DomainStatus::Pending),
                )
            })
            .filter(|(_, status)| match self.filter_mode {
                FilterMode::All => true,
                FilterMode::Reachable => matches!(status, DomainStatus::Reachable { .. }),
                FilterMode::Unreachable => {
                    matches!(status, DomainStatus::Unreachable | DomainStatus::Error(_))
                }
                FilterMode::Clean => matches!(
                    status,
                    DomainStatus::Reachable {
                        redirected: false,
                        ..
                    }
                ),
            })
            .collect()
    }

    fn counts(&self) -> (usize, usize, usize) {
        let view = self.view.lock().unwrap();
        (
            report::reachable_count(&view.records),
            report::unreachable_count(&view.records),
            report::clean_subset(&view.records).len(),
        )
    }

    fn progress(&self) -> (usize, usize, bool) {
        let view = self.view.lock().unwrap();
        (view.progress.completed, view.progress.total, view.running)
    }

    fn selected_row(&self) -> Option<(String, DomainStatus)> {
        let rows = self.filtered_rows();
        self.list_state.selected().and_then(|i| rows.get(i).cloned())
    }

    fn copy_selected_to_clipboard(&mut self) {
        if let Some((domain, _)) = self.selected_row() {
            if let Ok(mut clipboard) = arboard::Clipboard::new() {
                if clipboard.set_text(&domain).is_ok() {
                    self.toast_message = Some((format!("Copied: {}", domain), Instant::now()));
                }
            }
        }
    }

    fn open_selected_in_browser(&mut self) {
        if let Some((domain, status)) = self.selected_row() {
            let scheme = match status {
                DomainStatus::Reachable { scheme, .. } => scheme,
                _ => Scheme::Https,
            };
            let url = format!("{}://{}", scheme, domain);
            let _ = open::that(&url);
            self.toast_message = Some((format!("Opening: {}", url), Instant::now()));
        }
    }

    fn export_results(&mut self, clean: bool) {
        let csv = {
            let view = self.view.lock().unwrap();
            if view.records.is_empty() {
                None
            } else if clean {
                if report::clean_subset(&view.records).is_empty() {
                    self.toast_message =
                        Some(("No clean domains to export".to_string(), Instant::now()));
                    return;
                }
                Some(export::clean_csv(&view.records))
            } else {
                Some(export::full_csv(&view.records))
            }
        };

        let Some(csv) = csv else {
            self.toast_message = Some(("Nothing to export yet".to_string(), Instant::now()));
            return;
        };

        let suffix = if clean { "-clean" } else { "" };
        let path = format!("domain-check-{}{}.csv", chrono::Utc::now().timestamp(), suffix);
        let message = match std::fs::write(&path, csv) {
            Ok(()) => format!("Exported: {}", path),
            Err(e) => format!("Export failed: {}", e),
        };
        self.toast_message = Some((message, Instant::now()));
    }

    fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }

    fn scroll_down(&mut self) {
        let len = self.filtered_rows().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(len.saturating_sub(1)),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn scroll_up(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn scroll_page_down(&mut self) {
        let len = self.filtered_rows().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 20).min(len.saturating_sub(1)),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn scroll_page_up(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(20),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn scroll_to_top(&mut self) {
        self.list_state.select(Some(0));
    }

    fn scroll_to_bottom(&mut self) {
        let len = self.filtered_rows().len();
        self.list_state.select(Some(len.saturating_sub(1)));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.print_default_config {
        println!("{}", get_default_config_toml());
        return Ok(());
    }

    if args.write_default_config {
        if let Some(path) = config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, get_default_config_toml())?;
            println!("Default config written to: {}", path.display());
        } else {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
        return Ok(());
    }

    let config = load_config();
    let probe_config = build_probe_config(&args, &config);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let headless = args.ndjson || args.csv.is_some() || args.clean_csv.is_some();
        let domains = read_domains(&args)?.unwrap_or_default();

        if (headless || args.file.is_some()) && domains.is_empty() {
            eprintln!("Error: domain list is empty");
            std::process::exit(1);
        }

        if !args.yes && domains.len() > LARGE_LIST_THRESHOLD && !confirm_large_list(domains.len())
        {
            return Ok(());
        }

        if headless {
            run_headless(&args, probe_config, domains).await
        } else {
            run_tui(domains, probe_config).await
        }
    })
}

fn read_domains(args: &Args) -> Result<Option<Vec<String>>, Box<dyn std::error::Error>> {
    let Some(path) = &args.file else {
        // Headless modes take the list from stdin when no file is given
        let headless = args.ndjson || args.csv.is_some() || args.clean_csv.is_some();
        if !headless {
            return Ok(None);
        }
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        return Ok(Some(list::parse_domain_list(&raw)));
    };

    let raw = if path.as_os_str() == "-" {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        raw
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(Some(list::parse_domain_list(&raw)))
}

fn confirm_large_list(count: usize) -> bool {
    let term = console::Term::stderr();
    if !term.is_term() {
        return true;
    }
    let _ = term.write_str(&format!(
        "About to probe {} domains; this can take a while. Continue? [y/N] ",
        count
    ));
    match term.read_line() {
        Ok(line) => matches!(line.trim(), "y" | "Y" | "yes" | "YES"),
        Err(_) => false,
    }
}

async fn run_headless(
    args: &Args,
    config: ProbeConfig,
    domains: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let prober = Prober::with_config(config);
    let mut results: Vec<DomainResult> = Vec::with_capacity(domains.len());
    let mut events = Box::pin(prober.batch_stream(domains));
    let mut stdout = io::stdout();

    while let Some(event) = events.next().await {
        let BatchEvent::GroupCompleted {
            results: group,
            progress,
        } = event
        else {
            continue;
        };

        if args.ndjson {
            for result in &group {
                let row = DomainCheckResult::from(result);
                if let Ok(json) = serde_json::to_string(&row) {
                    println!("{}", json);
                    stdout.flush()?;
                }
            }
        } else {
            eprintln!("checked {}/{}", progress.completed, progress.total);
        }

        results.extend(group);
    }

    if let Some(path) = &args.csv {
        std::fs::write(path, export::full_csv(&results))?;
        eprintln!("Full CSV written to: {}", path.display());
    }

    if let Some(path) = &args.clean_csv {
        let clean_len = report::clean_subset(&results).len();
        if clean_len == 0 {
            eprintln!("No clean domains; skipping {}", path.display());
        } else {
            std::fs::write(path, export::clean_csv(&results))?;
            eprintln!(
                "Clean CSV written to: {} ({} domains)",
                path.display(),
                clean_len
            );
        }
    }

    eprintln!(
        "{} domains checked: {} reachable, {} unreachable, {} clean",
        results.len(),
        report::reachable_count(&results),
        report::unreachable_count(&results),
        report::clean_subset(&results).len()
    );

    Ok(())
}

async fn run_tui(
    domains: Vec<String>,
    probe_config: ProbeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(domains, probe_config);
    if !app.domains.is_empty() {
        app.input_mode = false;
        app.start_checking();
    }

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.tick = app.tick.wrapping_add(1);

        if let Some((_, created)) = &app.toast_message {
            if created.elapsed() > Duration::from_secs(2) {
                app.toast_message = None;
            }
        }

        terminal.draw(|f| ui(f, app))?;

        if app.quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.input_mode {
                    match key.code {
                        KeyCode::Enter => {
                            app.submit_input();
                        }
                        KeyCode::Char(c) => {
                            app.input.push(c);
                        }
                        KeyCode::Backspace => {
                            app.input.pop();
                        }
                        KeyCode::Esc => {
                            app.quit = true;
                        }
                        _ => {}
                    }
                } else {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.quit = true;
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.scroll_down();
                        }
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.scroll_up();
                        }
                        KeyCode::PageDown => {
                            app.scroll_page_down();
                        }
                        KeyCode::PageUp => {
                            app.scroll_page_up();
                        }
                        KeyCode::Home | KeyCode::Char('g') => {
                            app.scroll_to_top();
                        }
                        KeyCode::End | KeyCode::Char('G') => {
                            app.scroll_to_bottom();
                        }
                        KeyCode::Char('i') => {
                            app.input.clear();
                            app.input_mode = true;
                        }
                        KeyCode::Enter | KeyCode::Char('y') => {
                            app.copy_selected_to_clipboard();
                        }
                        KeyCode::Char('o') => {
                            app.open_selected_in_browser();
                        }
                        KeyCode::Char('e') => {
                            app.export_results(false);
                        }
                        KeyCode::Char('c') => {
                            app.export_results(true);
                        }
                        KeyCode::Tab | KeyCode::Char('f') => {
                            app.filter_mode = app.filter_mode.next();
                            app.list_state.select(Some(0));
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let has_toast = app.toast_message.is_some();

    let mut constraints = vec![Constraint::Length(3), Constraint::Length(1), Constraint::Min(1)];
    if has_toast {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let input_text = if app.input_mode {
        format!("Domains: {}_", app.input)
    } else {
        format!(
            "{} domains loaded (press 'i' to enter a new list)",
            app.domains.len()
        )
    };

    let input = Paragraph::new(input_text)
        .style(if app.input_mode {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        })
        .block(Block::default().borders(Borders::ALL).title("Domain Reach"));
    f.render_widget(input, chunks[0]);

    let (done, total, running) = app.progress();
    let pct = if total > 0 { (done * 100) / total } else { 0 };
    let bar_width = (f.area().width as usize).saturating_sub(20);
    let filled = if total > 0 { (bar_width * done) / total } else { 0 };
    let bar: String = "█".repeat(filled) + &"░".repeat(bar_width.saturating_sub(filled));

    let spinner = if running { app.spinner_frame() } else { " " };
    let progress_line = Line::from(vec![
        Span::styled(format!(" {} ", spinner), Style::default().fg(Color::Cyan)),
        Span::styled(bar, Style::default().fg(Color::Green)),
        Span::styled(
            format!(" {:>3}% ({}/{})", pct, done, total),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(progress_line), chunks[1]);

    let results_chunk = chunks[2];
    let (toast_chunk, help_chunk) = if has_toast {
        (Some(chunks[3]), chunks[4])
    } else {
        (None, chunks[3])
    };

    let rows = app.filtered_rows();
    let spinner = app.spinner_frame();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|(domain, status)| {
            let (symbol, color, text): (&str, Color, String) = match status {
                DomainStatus::Reachable {
                    scheme,
                    status_code,
                    elapsed_ms,
                    redirected,
                } => {
                    let color = match scheme {
                        Scheme::Https => Color::Green,
                        Scheme::Http => Color::Yellow,
                    };
                    let mut text = format!(
                        "{} {} {}ms",
                        scheme.as_str().to_uppercase(),
                        status_code,
                        elapsed_ms
                    );
                    if *redirected {
                        text.push_str(" (redirect)");
                    }
                    ("✓", color, text)
                }
                DomainStatus::Unreachable => ("✗", Color::Red, "Unreachable".to_string()),
                DomainStatus::Checking => (spinner, Color::Yellow, "Checking...".to_string()),
                DomainStatus::Pending => ("○", Color::DarkGray, "Pending".to_string()),
                DomainStatus::Error(e) => ("!", Color::Magenta, e.clone()),
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", symbol),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<36}", domain), Style::default().fg(Color::Cyan)),
                Span::styled(text, Style::default().fg(color)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let (reachable, unreachable, clean) = app.counts();
    let filter_indicator = match app.filter_mode {
        FilterMode::All => format!("[All:{}]", app.domains.len()),
        FilterMode::Reachable => format!("[Reachable:{}]", reachable),
        FilterMode::Unreachable => format!("[Unreachable:{}]", unreachable),
        FilterMode::Clean => format!("[Clean:{}]", clean),
    };

    let title = format!(
        "Results {} ✓{} ✗{} - Tab/f to filter",
        filter_indicator, reachable, unreachable
    );

    let results_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    f.render_stateful_widget(results_list, results_chunk, &mut app.list_state);

    if let Some(chunk) = toast_chunk {
        if let Some((msg, _)) = &app.toast_message {
            let toast = Paragraph::new(Line::from(vec![
                Span::styled(
                    " ✓ ",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::styled(msg.as_str(), Style::default().fg(Color::White)),
            ]));
            f.render_widget(toast, chunk);
        }
    }

    let help_text = if app.input_mode {
        "Enter: Check | Esc: Quit"
    } else {
        "↑↓/jk: Scroll | Tab/f: Filter | Enter/y: Copy | o: Open | e: CSV | c: Clean CSV | i: Edit | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(help, help_chunk);
}
