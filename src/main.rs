use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dungeon_terminal::overworld::{DungeonEntrance, EntranceSignal, PlayerController, Vec2};
use dungeon_terminal::puzzle::{
    load_terminals, MessageKind, Outcome, PuzzleEvent, PuzzleSession, SessionSnapshot,
    TerminalConfig, TimerUrgency,
};
use dungeon_terminal::words;

const TICK: Duration = Duration::from_millis(100);
const LOG_FILE: &str = "dungeon-terminal.log";
const TERMINALS_DIR: &str = "terminals";
const DUNGEON_SCENE: &str = "DungeonScene";
// One key press moves the player roughly one cell.
const PLAYER_SPEED: f32 = 10.0;

const MAP: [&str; 9] = [
    "##############################",
    "#............................#",
    "#...####..............~~~~...#",
    "#...#..#..............~~~~...#",
    "#...#..#.....................#",
    "#..........D.................#",
    "#....................####....#",
    "#............................#",
    "##############################",
];

enum GameState {
    TitleScreen,
    Overworld,
    Terminal,
    Debrief,
}

enum MenuOption {
    NewGame,
    Quit,
}

impl MenuOption {
    fn next(&self) -> Self {
        match self {
            MenuOption::NewGame => MenuOption::Quit,
            MenuOption::Quit => MenuOption::NewGame,
        }
    }
}

#[derive(PartialEq, Eq)]
enum Focus {
    Tiles,
    Answer,
}

struct App {
    terminals: Vec<TerminalConfig>,
    next_terminal: usize,
    session: Option<PuzzleSession>,
    player: PlayerController,
    entrance: DungeonEntrance,
    prompt: Option<String>,
    state: GameState,
    menu_selection: MenuOption,
    focus: Focus,
    tile_cursor: usize,
    answer_cursor: usize,
    message: String,
    message_style: Style,
    unlocked: u32,
    unlocked_by_default: u32,
}

impl App {
    fn new(terminals: Vec<TerminalConfig>) -> Self {
        let spawn = Vec2::new(2.5, 1.5);
        let door = map_cell(b'D').unwrap_or(Vec2::new(11.5, 5.5));

        App {
            terminals,
            next_terminal: 0,
            session: None,
            player: PlayerController::new(spawn).with_move_speed(PLAYER_SPEED),
            entrance: DungeonEntrance::new(door, DUNGEON_SCENE),
            prompt: None,
            state: GameState::TitleScreen,
            menu_selection: MenuOption::NewGame,
            focus: Focus::Tiles,
            tile_cursor: 0,
            answer_cursor: 0,
            message: String::new(),
            message_style: Style::default(),
            unlocked: 0,
            unlocked_by_default: 0,
        }
    }

    fn start_game(&mut self) {
        self.state = GameState::Overworld;
        self.unlocked = 0;
        self.unlocked_by_default = 0;
        self.message = String::from("Find the dungeon entrance (D). Arrows to move.");
        self.message_style = Style::default().fg(Color::Yellow);
    }

    fn step_player(&mut self, direction: Vec2) {
        let frame = self.player.update(direction, TICK.as_secs_f32(), walkable);
        if frame.footstep {
            tracing::trace!("footstep");
        }
        self.check_entrance(false);
    }

    fn check_entrance(&mut self, enter_pressed: bool) {
        match self.entrance.update(self.player.position(), enter_pressed) {
            EntranceSignal::ShowPrompt(text) => self.prompt = Some(text),
            EntranceSignal::HidePrompt => self.prompt = None,
            EntranceSignal::Enter(scene) => {
                info!(scene = %scene, "entering_dungeon");
                self.prompt = None;
                self.open_terminal();
            }
            EntranceSignal::None => {}
        }
    }

    fn open_terminal(&mut self) {
        let config = self.terminals[self.next_terminal % self.terminals.len()].clone();
        self.next_terminal += 1;

        match PuzzleSession::new(config) {
            Ok(session) => {
                self.session = Some(session);
                self.state = GameState::Terminal;
                self.focus = Focus::Tiles;
                self.tile_cursor = 0;
                self.answer_cursor = 0;
            }
            Err(e) => {
                warn!(error = %e, "terminal_config_rejected");
                self.message = format!("The terminal sparks and stays dark: {}", e);
                self.message_style = Style::default().fg(Color::Magenta);
            }
        }
    }

    fn send(&mut self, event: PuzzleEvent) {
        if let Some(session) = self.session.as_mut() {
            session.enqueue(event);
            session.process_events();
        }
        self.clamp_cursors();
    }

    fn clamp_cursors(&mut self) {
        let Some(snapshot) = self.snapshot() else {
            return;
        };
        self.tile_cursor = self.tile_cursor.min(snapshot.tiles.len().saturating_sub(1));
        self.answer_cursor = self
            .answer_cursor
            .min(snapshot.selection.len().saturating_sub(1));
        if snapshot.selection.is_empty() {
            self.focus = Focus::Tiles;
        }
    }

    fn snapshot(&self) -> Option<SessionSnapshot> {
        self.session.as_ref().map(PuzzleSession::snapshot)
    }

    fn on_tick(&mut self, elapsed: f32) {
        if !matches!(self.state, GameState::Terminal) {
            return;
        }
        self.send(PuzzleEvent::Tick(elapsed));

        let Some(session) = self.session.as_ref() else {
            return;
        };
        if session.is_visible() {
            return;
        }

        let snapshot = session.snapshot();
        match snapshot.outcome {
            Outcome::Unlocked => {
                self.unlocked += 1;
                self.message_style = Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD);
            }
            Outcome::UnlockedByDefault => {
                self.unlocked_by_default += 1;
                self.message_style = Style::default().fg(Color::Yellow);
            }
            Outcome::Pending => {}
        }
        let spelled = words::spell(i64::from(snapshot.number), session.locale())
            .unwrap_or_default();
        self.message = format!(
            "{}\n\nCode {} ({}).  Cracked: {}  |  opened by default: {}\n\n[ Press ENTER ]",
            snapshot.message, snapshot.number, spelled, self.unlocked, self.unlocked_by_default
        );
        self.session = None;
        self.state = GameState::Debrief;
    }

    /// Returns false when the player asked to quit.
    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match self.state {
            GameState::TitleScreen => match code {
                KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
                    self.menu_selection = self.menu_selection.next();
                }
                KeyCode::Enter => match self.menu_selection {
                    MenuOption::NewGame => self.start_game(),
                    MenuOption::Quit => return false,
                },
                KeyCode::Char('q') => return false,
                _ => {}
            },
            GameState::Overworld => match code {
                KeyCode::Up => self.step_player(Vec2::new(0.0, -1.0)),
                KeyCode::Down => self.step_player(Vec2::new(0.0, 1.0)),
                KeyCode::Left => self.step_player(Vec2::new(-1.0, 0.0)),
                KeyCode::Right => self.step_player(Vec2::new(1.0, 0.0)),
                KeyCode::Enter => self.check_entrance(true),
                KeyCode::Esc | KeyCode::Char('q') => return false,
                _ => {}
            },
            GameState::Terminal => self.handle_terminal_key(code),
            GameState::Debrief => {
                if code == KeyCode::Enter {
                    self.state = GameState::Overworld;
                    self.message = String::from("Back in the corridor.");
                    self.message_style = Style::default().fg(Color::Yellow);
                }
            }
        }
        true
    }

    fn handle_terminal_key(&mut self, code: KeyCode) {
        let Some(snapshot) = self.snapshot() else {
            return;
        };

        match code {
            KeyCode::Tab if !snapshot.selection.is_empty() => {
                self.focus = match self.focus {
                    Focus::Tiles => Focus::Answer,
                    Focus::Answer => Focus::Tiles,
                };
            }
            KeyCode::Left => match self.focus {
                Focus::Tiles => self.tile_cursor = self.tile_cursor.saturating_sub(1),
                Focus::Answer => self.answer_cursor = self.answer_cursor.saturating_sub(1),
            },
            KeyCode::Right => match self.focus {
                Focus::Tiles => self.tile_cursor += 1,
                Focus::Answer => self.answer_cursor += 1,
            },
            KeyCode::Enter => match self.focus {
                Focus::Tiles => {
                    if let Some(tile) = snapshot.tiles.get(self.tile_cursor) {
                        self.send(PuzzleEvent::WordPicked(tile.id));
                    }
                }
                Focus::Answer => {
                    if let Some(pick) = snapshot.selection.get(self.answer_cursor) {
                        self.send(PuzzleEvent::PickRemoved(pick.id));
                    }
                }
            },
            KeyCode::Backspace if !snapshot.selection.is_empty() => {
                self.send(PuzzleEvent::WordUnpicked(snapshot.selection.len() - 1));
            }
            KeyCode::F(5) | KeyCode::Char('s') => self.send(PuzzleEvent::Submit),
            KeyCode::Char('c') => self.send(PuzzleEvent::Clear),
            _ => {}
        }
        self.clamp_cursors();
    }
}

fn map_cell(marker: u8) -> Option<Vec2> {
    MAP.iter().enumerate().find_map(|(y, row)| {
        row.bytes()
            .position(|c| c == marker)
            .map(|x| Vec2::new(x as f32 + 0.5, y as f32 + 0.5))
    })
}

fn walkable(position: Vec2) -> bool {
    if position.x < 0.0 || position.y < 0.0 {
        return false;
    }
    MAP.get(position.y as usize)
        .and_then(|row| row.as_bytes().get(position.x as usize))
        .is_some_and(|cell| matches!(cell, b'.' | b'D'))
}

fn init_tracing() -> Result<()> {
    let file = std::fs::File::create(LOG_FILE)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .init();
    Ok(())
}

fn load_configs() -> Vec<TerminalConfig> {
    let dir = Path::new(TERMINALS_DIR);
    match load_terminals(dir) {
        Ok(terminals) if !terminals.is_empty() => terminals,
        Ok(_) => {
            info!(dir = %dir.display(), "no_terminal_configs_using_default");
            vec![TerminalConfig::default()]
        }
        Err(e) => {
            warn!(error = %format!("{e:#}"), "terminal_configs_unreadable_using_default");
            vec![TerminalConfig::default()]
        }
    }
}

fn main() -> Result<()> {
    init_tracing()?;
    let terminals = load_configs();
    info!(count = terminals.len(), "terminals_loaded");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(terminals);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| draw_ui(f, &app))?;

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= TICK {
            app.on_tick(last_tick.elapsed().as_secs_f32());
            last_tick = Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    println!(
        "\nTerminals cracked: {}  |  opened by default: {}\n",
        app.unlocked, app.unlocked_by_default
    );
    Ok(())
}

fn draw_ui(f: &mut Frame, app: &App) {
    match app.state {
        GameState::TitleScreen => draw_title_screen(f, app),
        GameState::Overworld => draw_overworld(f, app),
        GameState::Terminal => {
            if let Some(snapshot) = app.snapshot() {
                draw_terminal(f, app, &snapshot);
            }
        }
        GameState::Debrief => draw_debrief(f, app),
    }
}

fn draw_overworld(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAP.len() as u16 + 2), Constraint::Length(5)])
        .split(f.area());

    let player = app.player.position();
    let (px, py) = (player.x as usize, player.y as usize);
    let lines: Vec<Line> = MAP
        .iter()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .chars()
                .enumerate()
                .map(|(x, cell)| {
                    if (x, y) == (px, py) {
                        return Span::styled(
                            "@",
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        );
                    }
                    match cell {
                        '#' => Span::styled("#", Style::default().fg(Color::DarkGray)),
                        '~' => Span::styled("~", Style::default().fg(Color::Blue)),
                        'D' => Span::styled("D", Style::default().fg(Color::Red)),
                        _ => Span::raw("."),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let map = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Overworld [Arrows: Move | Enter: Interact | q: Quit] "),
    );
    f.render_widget(map, chunks[0]);

    let (text, style) = match &app.prompt {
        Some(prompt) => (
            prompt.clone(),
            Style::default()
                .fg(Color::Rgb(255, 230, 51))
                .add_modifier(Modifier::BOLD),
        ),
        None => (app.message.clone(), app.message_style),
    };
    let message = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .style(style);
    f.render_widget(message, chunks[1]);
}

fn draw_terminal(f: &mut Frame, app: &App, snapshot: &SessionSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(4),
        ])
        .split(f.area());

    let timer_color = match snapshot.timer_urgency {
        TimerUrgency::Normal => Color::White,
        TimerUrgency::Warning => Color::Yellow,
        TimerUrgency::Critical => Color::Red,
    };
    let status = Line::from(vec![
        Span::styled(
            format!(" {} ", snapshot.title),
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", snapshot.attempts_label),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", snapshot.timer_label),
            Style::default().fg(timer_color),
        ),
    ]);
    let status_block = Paragraph::new(status).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(status_block, chunks[0]);

    let number = Paragraph::new(snapshot.number.to_string())
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Access Code "));
    f.render_widget(number, chunks[1]);

    let tile_spans: Vec<Span> = snapshot
        .tiles
        .iter()
        .enumerate()
        .flat_map(|(i, tile)| {
            let mut style = if tile.enabled {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if app.focus == Focus::Tiles && i == app.tile_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            [Span::styled(format!("[{}]", tile.word), style), Span::raw(" ")]
        })
        .collect();
    let tiles = Paragraph::new(Line::from(tile_spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Words [←/→ | Enter: Pick | Tab: Answer] "),
        );
    f.render_widget(tiles, chunks[2]);

    let answer_spans: Vec<Span> = snapshot
        .selection
        .iter()
        .enumerate()
        .flat_map(|(i, pick)| {
            let mut style = Style::default().fg(Color::Cyan);
            if app.focus == Focus::Answer && i == app.answer_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            [Span::styled(pick.word.clone(), style), Span::raw(" ")]
        })
        .collect();
    let answer = Paragraph::new(Line::from(answer_spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Answer [Backspace: Undo | c: Clear | s/F5: Submit] "),
        );
    f.render_widget(answer, chunks[3]);

    let message_color = match snapshot.message_kind {
        MessageKind::Instruction => Color::White,
        MessageKind::Success => Color::Green,
        MessageKind::Failure | MessageKind::Timeout => Color::Red,
        MessageKind::AttemptsExhausted => Color::Yellow,
    };
    let message = Paragraph::new(snapshot.message.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Terminal "))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(message_color));
    f.render_widget(message, chunks[4]);
}

fn draw_debrief(f: &mut Frame, app: &App) {
    let message = Paragraph::new(app.message.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Terminal Closed "))
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center)
        .style(app.message_style);
    f.render_widget(message, f.area());
}

fn draw_title_screen(f: &mut Frame, app: &App) {
    let title_art = r#"
    ╔═══════════════════════════════════════════════╗
    ║                                               ║
    ║          D U N G E O N   T E R M I N A L      ║
    ║                                               ║
    ║        "Spell the code. Open the door."       ║
    ║                                               ║
    ╚═══════════════════════════════════════════════╝
"#;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(f.area());

    let title = Paragraph::new(title_art)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let selected = Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let idle = Style::default().fg(Color::White);

    let new_game = Paragraph::new("  NEW GAME  ")
        .style(if matches!(app.menu_selection, MenuOption::NewGame) {
            selected
        } else {
            idle
        })
        .alignment(Alignment::Center);
    f.render_widget(new_game, chunks[1]);

    let quit = Paragraph::new("  QUIT  ")
        .style(if matches!(app.menu_selection, MenuOption::Quit) {
            selected
        } else {
            idle
        })
        .alignment(Alignment::Center);
    f.render_widget(quit, chunks[2]);

    let help = Paragraph::new("↑/↓ to select  •  ENTER to confirm  •  q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}
