use ratatui::widgets::TableState;
use taskpad_core::{AddOutcome, Snapshot, StoreHandle};

/// Which interaction the UI is currently in the middle of.
///
/// `Editing` carries the id of the task whose title sits in the input
/// buffer; this "is being edited" flag is presentation state and never
/// reaches the store. `ConfirmRemove` and `Alert` are the two modal
/// dialogs: the deletion gate and the duplicate-title notice.
#[derive(Debug, PartialEq)]
pub enum Mode {
    Normal,
    Adding,
    Editing(u64),
    ConfirmRemove(u64),
    Alert(String),
}

pub struct App {
    pub store: StoreHandle,
    pub tasks: Snapshot,
    pub state: TableState,
    pub input: String,
    pub cursor_position: usize,
    pub mode: Mode,
}

impl App {
    pub fn new(store: StoreHandle) -> App {
        let tasks = store.tasks();
        let mut state = TableState::default();
        if !tasks.is_empty() {
            state.select(Some(0));
        }
        App {
            store,
            tasks,
            state,
            input: String::new(),
            cursor_position: 0,
            mode: Mode::Normal,
        }
    }

    /// Pull the latest snapshot after a store call.
    fn refresh(&mut self) {
        self.tasks = self.store.tasks();
    }

    fn selected_id(&self) -> Option<u64> {
        self.state
            .selected()
            .and_then(|i| self.tasks.get(i))
            .map(|t| t.id)
    }

    pub fn next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.tasks.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.tasks.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle_task_done(id);
            self.refresh();
        }
    }

    pub fn start_add(&mut self) {
        self.mode = Mode::Adding;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Enter edit mode with the input prefilled from the selected task.
    pub fn start_edit(&mut self) {
        if let Some(i) = self.state.selected() {
            if let Some(task) = self.tasks.get(i) {
                self.input = task.title.clone();
                self.cursor_position = self.input.chars().count();
                self.mode = Mode::Editing(task.id);
            }
        }
    }

    /// Leave add/edit mode without touching the store.
    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.mode = Mode::Normal;
    }

    pub fn submit_input(&mut self) {
        let title = self.input.trim().to_string();
        if title.is_empty() {
            self.cancel_input();
            return;
        }

        match self.mode {
            Mode::Adding => match self.store.add_task(&title) {
                AddOutcome::Added(_) => {
                    self.refresh();
                    self.state.select(Some(self.tasks.len() - 1));
                    self.cancel_input();
                }
                AddOutcome::DuplicateTitle => {
                    self.input.clear();
                    self.cursor_position = 0;
                    self.mode = Mode::Alert(format!(
                        "A task named '{}' already exists.",
                        title
                    ));
                }
            },
            Mode::Editing(id) => {
                self.store.edit_task(id, &title);
                self.refresh();
                self.cancel_input();
            }
            _ => self.cancel_input(),
        }
    }

    /// Ask the store to stage a removal and open the yes/no dialog.
    pub fn request_remove_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.request_removal(id);
            self.mode = Mode::ConfirmRemove(id);
        }
    }

    pub fn answer_confirm(&mut self, confirmed: bool) {
        if let Mode::ConfirmRemove(id) = self.mode {
            let previous = self.state.selected();
            self.store.resolve_removal(id, confirmed);
            self.refresh();

            // Keep the selection on a valid row after a removal
            if self.tasks.is_empty() {
                self.state.select(None);
            } else if let Some(i) = previous {
                if i >= self.tasks.len() {
                    self.state.select(Some(self.tasks.len() - 1));
                } else {
                    self.state.select(Some(i));
                }
            }
        }
        self.mode = Mode::Normal;
    }

    pub fn dismiss_alert(&mut self) {
        self.mode = Mode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(titles: &[&str]) -> App {
        let store = StoreHandle::new();
        for title in titles {
            store.add_task(title);
        }
        App::new(store)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.input_char(c);
        }
    }

    #[test]
    fn navigation_wraps_around() {
        let mut app = app_with(&["A", "B"]);
        assert_eq!(app.state.selected(), Some(0));

        app.next();
        assert_eq!(app.state.selected(), Some(1));
        app.next();
        assert_eq!(app.state.selected(), Some(0));
        app.previous();
        assert_eq!(app.state.selected(), Some(1));
    }

    #[test]
    fn toggle_selected_flips_the_highlighted_task() {
        let mut app = app_with(&["A", "B"]);
        app.next();

        app.toggle_selected();

        assert!(!app.tasks[0].done);
        assert!(app.tasks[1].done);
    }

    #[test]
    fn submit_add_appends_and_selects_the_new_task() {
        let mut app = app_with(&["A"]);
        app.start_add();
        type_text(&mut app, "B");

        app.submit_input();

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.tasks[1].title, "B");
        assert_eq!(app.state.selected(), Some(1));
    }

    #[test]
    fn submit_duplicate_raises_alert_and_keeps_store() {
        let mut app = app_with(&["Buy milk"]);
        app.start_add();
        type_text(&mut app, "Buy milk");

        app.submit_input();

        assert!(matches!(app.mode, Mode::Alert(_)));
        assert_eq!(app.tasks.len(), 1);

        app.dismiss_alert();
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn blank_input_is_dropped() {
        let mut app = app_with(&[]);
        app.start_add();
        type_text(&mut app, "   ");

        app.submit_input();

        assert_eq!(app.mode, Mode::Normal);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn start_edit_prefills_the_input() {
        let mut app = app_with(&["Buy milk"]);

        app.start_edit();

        assert_eq!(app.mode, Mode::Editing(app.tasks[0].id));
        assert_eq!(app.input, "Buy milk");
        assert_eq!(app.cursor_position, "Buy milk".chars().count());
    }

    #[test]
    fn submit_edit_renames_only_the_target() {
        let mut app = app_with(&["A", "B"]);
        app.start_edit();
        app.input.clear();
        app.cursor_position = 0;
        type_text(&mut app, "A2");

        app.submit_input();

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.tasks[0].title, "A2");
        assert_eq!(app.tasks[1].title, "B");
    }

    #[test]
    fn cancel_edit_leaves_the_store_untouched() {
        let mut app = app_with(&["A"]);
        app.start_edit();
        type_text(&mut app, " changed");

        app.cancel_input();

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.tasks[0].title, "A");
        assert!(app.input.is_empty());
    }

    #[test]
    fn confirmed_removal_deletes_and_clamps_selection() {
        let mut app = app_with(&["A", "B"]);
        app.next();

        app.request_remove_selected();
        assert_eq!(app.mode, Mode::ConfirmRemove(app.tasks[1].id));

        app.answer_confirm(true);

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "A");
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn declined_removal_keeps_the_task() {
        let mut app = app_with(&["A"]);

        app.request_remove_selected();
        app.answer_confirm(false);

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.store.pending_removal(), None);
    }

    #[test]
    fn removing_the_last_task_clears_the_selection() {
        let mut app = app_with(&["A"]);

        app.request_remove_selected();
        app.answer_confirm(true);

        assert!(app.tasks.is_empty());
        assert_eq!(app.state.selected(), None);
    }

    #[test]
    fn input_cursor_handles_multibyte_chars() {
        let mut app = app_with(&[]);
        app.start_add();
        type_text(&mut app, "café");

        app.move_cursor_left();
        app.delete_char();
        assert_eq!(app.input, "caé");

        app.input_char('f');
        assert_eq!(app.input, "café");
    }
}
