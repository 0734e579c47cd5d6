//! Interactive terminal session
//!
//! Layout, top to bottom: search input, recipe list container, status line.
//! Every keystroke that edits the input hands the whole input value to
//! the controller, which filters and re-renders synchronously before the
//! next event is read.

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph, Wrap};
use ratatui::{DefaultTerminal, Frame};
use recipe_common::render::Node;
use recipe_common::{Controller, Phase, RecipeSource};
use tracing::{debug, info};

/// Terminal application state
pub struct App<S> {
    controller: Controller<S>,
    input: String,
    should_quit: bool,
}

impl<S: RecipeSource> App<S> {
    pub fn new(controller: Controller<S>) -> Self {
        Self {
            controller,
            input: String::new(),
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                self.input_changed();
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                self.input_changed();
            }
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    self.input_changed();
                }
            }
            _ => {}
        }
    }

    fn input_changed(&mut self) {
        let handled = self.controller.on_input(&self.input);
        debug!(query = %self.input, handled, "Search input changed");
    }
}

impl<S> App<S> {
    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw the whole screen
    pub fn draw(&self, frame: &mut Frame) {
        let [input_area, list_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.draw_input(frame, input_area);
        self.draw_list(frame, list_area);
        frame.render_widget(Paragraph::new(self.status_line()).dim(), status_area);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let style = if self.controller.is_listening() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(self.input.as_str())
            .style(style)
            .block(Block::bordered().title(" Search recipes "));
        frame.render_widget(input, area);

        // Display columns, not chars; clamp inside the right border
        let width = u16::try_from(Line::from(self.input.as_str()).width()).unwrap_or(u16::MAX);
        let cursor_x = area.x.saturating_add(1).saturating_add(width);
        frame.set_cursor_position(Position::new(
            cursor_x.min(area.right().saturating_sub(2)),
            area.y.saturating_add(1),
        ));
    }

    fn draw_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Recipes ");
        let view = self.controller.view();

        if let Some(notice) = view.notice() {
            let paragraph = Paragraph::new(notice.message())
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = view
            .nodes()
            .iter()
            .filter_map(|node| match node {
                Node::Card(card) => Some(ListItem::new(vec![
                    Line::from(Span::styled(
                        card.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(vec![
                        Span::raw("  Category: "),
                        Span::styled(card.category.clone(), Style::default().fg(Color::Yellow)),
                    ]),
                    Line::from(Span::raw(format!("  {}", card.image))).dim(),
                ])),
                Node::Notice(_) => None,
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn status_line(&self) -> String {
        match self.controller.phase() {
            Phase::Loading => "Loading...".to_string(),
            Phase::Error => "Search disabled  |  Esc to quit".to_string(),
            Phase::Ready => format!(
                "Showing {} of {} recipes  |  Ctrl-U clear  |  Esc to quit",
                self.controller.view().card_count(),
                self.controller.records().len()
            ),
        }
    }
}

/// Run the session until the user quits
///
/// The loading notice is on screen while the single fetch is awaited;
/// key events are only read afterwards.
pub async fn run<S: RecipeSource>(app: &mut App<S>, terminal: &mut DefaultTerminal) -> Result<()> {
    terminal.draw(|frame| app.draw(frame))?;

    app.controller.on_page_ready().await;
    info!(phase = ?app.controller.phase(), "Initial load finished");

    while !app.should_quit {
        terminal.draw(|frame| app.draw(frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
