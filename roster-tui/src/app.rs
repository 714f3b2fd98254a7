//! Terminal app state and key handling
//!
//! Keys are translated into [`Action`]s for the manager; everything the
//! screen shows is read back from the manager's snapshot.

use crate::command::{self, Command};
use crossterm::event::{Event, KeyCode, KeyEvent};
use roster_core::{Action, Config, Dialog, EmployeeManager, Field, Notifier, Outcome, SortKey};
use shared::NotificationPayload;
use shared::models::EmployeeId;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Table navigation
    Normal,
    /// Add/edit form has focus
    Form,
    /// Delete confirmation has focus
    Confirm,
    /// Slash-command bar
    Command,
}

pub struct App {
    pub manager: EmployeeManager,
    /// Editor for the focused form field, or the command line
    pub input: Input,
    pub command_open: bool,
    /// Focused form field
    pub focus: Field,
    /// Selected row on the current page
    pub selected: usize,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            manager: EmployeeManager::new(config),
            input: Input::default(),
            command_open: false,
            focus: Field::Name,
            selected: 0,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
        }
    }

    pub fn input_mode(&self) -> InputMode {
        if self.command_open {
            return InputMode::Command;
        }
        match self.manager.active_dialog() {
            Some(Dialog::ConfirmDelete(_)) => InputMode::Confirm,
            Some(Dialog::Form(_)) => InputMode::Form,
            None => InputMode::Normal,
        }
    }

    /// Housekeeping between frames
    pub fn tick(&mut self) {
        self.manager.notifier_mut().prune();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode() {
            InputMode::Normal => self.handle_normal(key),
            InputMode::Form => self.handle_form(key),
            InputMode::Confirm => self.handle_confirm(key),
            InputMode::Command => self.handle_command_line(key),
        }
    }

    pub fn selected_id(&self) -> Option<EmployeeId> {
        self.manager.page().data.get(self.selected).map(|e| e.id)
    }

    // ========== Normal ==========

    fn handle_normal(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => {
                self.dispatch(Action::OpenAdd);
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Action::OpenEdit(id));
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Action::RequestDelete(id));
                }
            }
            KeyCode::Char('1') => {
                self.dispatch(Action::ToggleSort(SortKey::Name));
            }
            KeyCode::Char('2') => {
                self.dispatch(Action::ToggleSort(SortKey::Address));
            }
            KeyCode::Left => {
                let page = self.manager.page();
                if page.has_prev() {
                    self.dispatch(Action::SetPage(page.page - 1));
                }
            }
            KeyCode::Right => {
                let page = self.manager.page();
                if page.has_next() {
                    self.dispatch(Action::SetPage(page.page + 1));
                }
            }
            KeyCode::Char('+') => self.change_limit(true),
            KeyCode::Char('-') => self.change_limit(false),
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                let len = self.manager.page().data.len();
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Char('/') => {
                self.command_open = true;
                self.input = Input::new("/".to_string());
            }
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => {}
        }
    }

    fn change_limit(&mut self, larger: bool) {
        let current = self.manager.limit();
        let limit = if larger { current.next() } else { current.prev() };
        if limit != current {
            self.dispatch(Action::SetLimit(limit));
        }
    }

    // ========== Form ==========

    fn handle_form(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.dispatch(Action::Escape);
            }
            KeyCode::Enter => {
                self.dispatch(Action::Submit);
            }
            KeyCode::Tab | KeyCode::Down => self.focus_field(self.focus.next()),
            KeyCode::BackTab | KeyCode::Up => self.focus_field(self.focus.prev()),
            KeyCode::Left | KeyCode::Right if self.focus == Field::Gender => {
                let current = self.manager.draft().gender.unwrap_or_default();
                let gender = if key.code == KeyCode::Right {
                    current.next()
                } else {
                    current.prev()
                };
                self.dispatch(Action::FieldChanged(Field::Gender, gender.to_string()));
            }
            _ if self.focus == Field::Gender => {}
            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(&Event::Key(key));
                if self.input.value() != before {
                    let value = self.input.value().to_string();
                    self.dispatch(Action::FieldChanged(self.focus, value));
                }
            }
        }
    }

    fn focus_field(&mut self, field: Field) {
        self.focus = field;
        self.input = Input::new(self.manager.draft().value(field));
    }

    // ========== Confirm ==========

    fn handle_confirm(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                self.dispatch(Action::ConfirmDelete);
            }
            KeyCode::Char('n') => {
                self.dispatch(Action::CancelDelete);
            }
            KeyCode::Esc => {
                self.dispatch(Action::Escape);
            }
            _ => {}
        }
    }

    // ========== Command bar ==========

    fn handle_command_line(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let line = self.input.value().to_string();
                self.close_command_line();
                if !line.trim().is_empty() {
                    self.run_command(&line);
                }
            }
            KeyCode::Esc => self.close_command_line(),
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
    }

    fn close_command_line(&mut self) {
        self.command_open = false;
        self.input.reset();
    }

    fn run_command(&mut self, line: &str) {
        let command = match command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                tracing::debug!(
                    code = %err.code,
                    category = err.code.category().name(),
                    details = ?err.details,
                    "command rejected"
                );
                self.manager
                    .notifier_mut()
                    .notify(NotificationPayload::error("Command", err.message));
                return;
            }
        };

        let outcome = match command {
            Command::Help => {
                tracing::info!("Available commands:");
                for line in command::HELP {
                    tracing::info!("{line}");
                }
                self.manager.notifier_mut().notify(NotificationPayload::info(
                    "Help",
                    "Commands listed in the log pane",
                ));
                return;
            }
            Command::Quit => {
                self.should_quit = true;
                return;
            }
            Command::Add => self.dispatch(Action::OpenAdd),
            Command::Edit(id) => self.dispatch(Action::OpenEdit(id)),
            Command::Delete(id) => self.dispatch(Action::RequestDelete(id)),
            Command::Sort(key) => self.dispatch(Action::ToggleSort(key)),
            Command::Page(page) => self.dispatch(Action::SetPage(page)),
            Command::Limit(limit) => self.dispatch(Action::SetLimit(limit)),
        };

        if let (Command::Edit(id) | Command::Delete(id), Outcome::Ignored) = (command, &outcome) {
            self.manager.notifier_mut().notify(NotificationPayload::warning(
                "Command",
                format!("Employee {id} not found"),
            ));
        }
    }

    // ========== Dispatch ==========

    fn dispatch(&mut self, action: Action) -> Outcome {
        let opens_form = matches!(action, Action::OpenAdd | Action::OpenEdit(_));
        let outcome = self.manager.dispatch(action);
        tracing::debug!(?outcome, "action dispatched");

        match &outcome {
            Outcome::Applied if opens_form => self.focus_field(Field::Name),
            Outcome::Rejected(errors) => {
                if let Some(field) = errors.fields().first() {
                    self.focus_field(*field);
                }
            }
            Outcome::Added(id) => {
                if let Some(idx) = self.manager.page().data.iter().position(|e| e.id == *id) {
                    self.selected = idx;
                }
            }
            _ => {}
        }

        let len = self.manager.page().data.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use roster_core::{FormMode, PageLimit};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add_via_keys(app: &mut App, name: &str) {
        press(app, KeyCode::Char('a'));
        type_text(app, name);
        press(app, KeyCode::Tab);
        type_text(app, "1990-01-01");
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right);
        press(app, KeyCode::Tab);
        type_text(app, "someone@example.com");
        press(app, KeyCode::Tab);
        type_text(app, "Ha Noi");
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_add_through_form_keys() {
        let mut app = App::new(&Config::default());
        add_via_keys(&mut app, "Quan");

        assert_eq!(app.input_mode(), InputMode::Normal);
        assert_eq!(app.manager.total(), 1);
        let employee = &app.manager.employees()[0];
        assert_eq!(employee.name, "Quan");
        assert_eq!(employee.gender, shared::models::Gender::Female);
        assert_eq!(app.selected_id(), Some(employee.id));
    }

    #[test]
    fn test_rejected_submit_focuses_first_error() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode(), InputMode::Form);
        assert_eq!(app.focus, Field::Name);
        assert!(app.manager.errors().contains(Field::Address));

        // 'q' is text while the form is open
        type_text(&mut app, "q");
        assert_eq!(app.manager.draft().name, "q");
        assert!(!app.should_quit);
        assert!(!app.manager.errors().contains(Field::Name));
    }

    #[test]
    fn test_delete_selected_with_confirmation() {
        let mut app = App::new(&Config::default());
        add_via_keys(&mut app, "Tam");
        add_via_keys(&mut app, "Vy");

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input_mode(), InputMode::Confirm);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.manager.total(), 2);

        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.manager.total(), 1);
        assert_eq!(app.manager.employees()[0].name, "Vy");
    }

    #[test]
    fn test_escape_closes_topmost_dialog() {
        let mut app = App::new(&Config::default());
        add_via_keys(&mut app, "Minh");
        press(&mut app, KeyCode::Char('e'));
        assert!(matches!(app.manager.form(), FormMode::Editing(_)));

        let id = app.selected_id().unwrap();
        app.run_command(&format!("/delete {id}"));
        assert_eq!(app.input_mode(), InputMode::Confirm);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode(), InputMode::Form);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode(), InputMode::Normal);
    }

    #[test]
    fn test_command_bar() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode(), InputMode::Command);
        type_text(&mut app, "limit 20");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode(), InputMode::Normal);
        assert_eq!(app.manager.limit(), PageLimit::Twenty);

        app.run_command("/edit 12345");
        let toast = app.manager.notifier().latest().unwrap();
        assert_eq!(toast.message, "Employee 12345 not found");

        app.run_command("/bogus");
        assert_eq!(
            app.manager.notifier().latest().unwrap().message,
            "Unknown command: /bogus"
        );

        app.run_command("/quit");
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_and_unknown_id_post_toasts() {
        let mut app = App::new(&Config::default());
        app.run_command("/help");
        let toast = app.manager.notifier().latest().unwrap();
        assert_eq!(toast.title, "Help");
        assert_eq!(toast.level, shared::NotificationLevel::Info);

        app.run_command("/delete 777");
        let toast = app.manager.notifier().latest().unwrap();
        assert_eq!(toast.level, shared::NotificationLevel::Warning);
        assert_eq!(toast.message, "Employee 777 not found");
        assert_eq!(app.input_mode(), InputMode::Normal);
    }

    #[test]
    fn test_limit_keys_saturate() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.manager.limit(), PageLimit::Five);
        assert_eq!(app.manager.history().entries().len(), 1);
        for _ in 0..5 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.manager.limit(), PageLimit::Fifty);
    }
}
