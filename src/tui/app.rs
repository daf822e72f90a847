use crate::config::Config;
use crate::data::{
    columns, BoardData, Bucket, GroupKey, SortKey, Ticket, TicketDraft, TicketStore, User,
    ViewState, LOCAL_STATUSES, PRIORITY_CHOICES,
};
use crate::integrations;
use crate::util::send_or_log;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

/// Braille spinner frames for loading animation
pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Result from the one-time background fetch
#[derive(Debug)]
pub enum FetchResult {
    Loaded(BoardData),
    Failed(String),
}

/// Active modal state - only one modal can be active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    None,
    Help,
    DisplayMenu,
    AddTicket,
}

impl ModalState {
    pub fn is_none(&self) -> bool {
        matches!(self, ModalState::None)
    }
}

/// Fields of the add-ticket form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Title,
    Priority,
    Status,
    Assignee,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [Self::Title, Self::Priority, Self::Status, Self::Assignee];

    pub fn next(&self) -> Self {
        match self {
            Self::Title => Self::Priority,
            Self::Priority => Self::Status,
            Self::Status => Self::Assignee,
            Self::Assignee => Self::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Title => Self::Assignee,
            Self::Priority => Self::Title,
            Self::Status => Self::Priority,
            Self::Assignee => Self::Status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Priority => "Priority",
            Self::Status => "Status",
            Self::Assignee => "Assignee",
        }
    }
}

/// Add-ticket form state
#[derive(Debug, Clone, Default)]
pub struct DraftForm {
    pub draft: TicketDraft,
    pub focus: DraftField,
    /// Last rejection, shown inside the modal
    pub error: Option<String>,
}

impl DraftForm {
    /// Step the focused select field through its options, wrapping around.
    pub fn cycle_option(&mut self, delta: i32, users: &[User]) {
        match self.focus {
            DraftField::Title => {}
            DraftField::Priority => {
                let options: Vec<String> = PRIORITY_CHOICES.iter().map(i64::to_string).collect();
                self.draft.priority = step(&options, &self.draft.priority, delta);
            }
            DraftField::Status => {
                let options: Vec<String> = LOCAL_STATUSES.iter().map(|s| s.to_string()).collect();
                self.draft.status = step(&options, &self.draft.status, delta);
            }
            DraftField::Assignee => {
                // Empty id is the "Select User" entry
                let options: Vec<String> = std::iter::once(String::new())
                    .chain(users.iter().map(|u| u.id.clone()))
                    .collect();
                self.draft.user_id = step(&options, &self.draft.user_id, delta);
            }
        }
    }
}

fn step(options: &[String], current: &str, delta: i32) -> String {
    if options.is_empty() {
        return current.to_string();
    }
    let len = options.len() as i64;
    let pos = options.iter().position(|o| o == current).unwrap_or(0) as i64;
    let next = (pos + i64::from(delta)).rem_euclid(len) as usize;
    options[next].clone()
}

pub struct App {
    pub config: Arc<Config>,
    pub store: TicketStore,
    pub view: ViewState,

    pub modal: ModalState,
    pub form: DraftForm,

    // Selection within the rendered board
    pub selected_column: usize,
    pub selected_row: usize,

    // UI state
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub is_loading: bool,
    pub spinner_frame: usize,

    /// Channel receiver for the background fetch
    pub fetch_rx: Option<mpsc::Receiver<FetchResult>>,
    fetch_started: bool,
}

// Modal state accessors
impl App {
    pub fn show_help(&self) -> bool {
        matches!(self.modal, ModalState::Help)
    }

    pub fn show_display_menu(&self) -> bool {
        matches!(self.modal, ModalState::DisplayMenu)
    }

    pub fn show_add_ticket(&self) -> bool {
        matches!(self.modal, ModalState::AddTicket)
    }
}

impl App {
    pub fn new(config: Config, view: ViewState) -> Self {
        Self {
            config: Arc::new(config),
            store: TicketStore::new(),
            view,
            modal: ModalState::None,
            form: DraftForm::default(),
            selected_column: 0,
            selected_row: 0,
            error_message: None,
            status_message: None,
            is_loading: false,
            spinner_frame: 0,
            fetch_rx: None,
            fetch_started: false,
        }
    }

    /// Process a message and update app state (Elm Architecture update function).
    ///
    /// Returns `true` if the app should quit.
    pub fn update(&mut self, msg: super::Message) -> bool {
        use super::Message;
        match msg {
            Message::Quit => return true,

            Message::PrevColumn => self.move_column(-1),
            Message::NextColumn => self.move_column(1),
            Message::MoveUp => self.move_row(-1),
            Message::MoveDown => self.move_row(1),

            Message::ToggleHelp => self.toggle_modal(ModalState::Help),
            Message::ToggleDisplayMenu => self.toggle_modal(ModalState::DisplayMenu),
            Message::OpenAddTicket => self.open_add_ticket(),
            Message::CloseModal => self.modal = ModalState::None,

            Message::SetGroupBy(key) => self.set_group_by(key),
            Message::SetSortBy(key) => self.set_sort_by(key),

            Message::NextField => self.form.focus = self.form.focus.next(),
            Message::PrevField => self.form.focus = self.form.focus.prev(),
            Message::DraftInput(c) => {
                if self.form.focus == DraftField::Title {
                    self.form.draft.title.push(c);
                }
            }
            Message::DraftBackspace => {
                if self.form.focus == DraftField::Title {
                    self.form.draft.title.pop();
                }
            }
            Message::CycleOption(delta) => self.form.cycle_option(delta, self.store.users()),
            Message::SubmitDraft => self.submit_draft(),

            Message::None => {}
        }
        false
    }

    /// The board as currently grouped and ordered
    pub fn columns(&self) -> Vec<Bucket<'_>> {
        columns(&self.store, &self.view)
    }

    pub fn selected_ticket(&self) -> Option<&Ticket> {
        let cols = self.columns();
        cols.get(self.selected_column)
            .and_then(|b| b.tickets.get(self.selected_row).copied())
    }

    /// Advance spinner frame (call on tick while loading)
    pub fn tick_spinner(&mut self) {
        if self.is_loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Get current spinner character
    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Start the one-time fetch in the background (non-blocking).
    pub fn start_fetch(&mut self) {
        if self.fetch_started {
            return;
        }
        self.fetch_started = true;
        self.is_loading = true;

        let (tx, rx) = mpsc::channel(1);
        self.fetch_rx = Some(rx);

        let config = Arc::clone(&self.config);

        tokio::spawn(async move {
            let result = match integrations::fetch_board(&config).await {
                Ok(board) => FetchResult::Loaded(board),
                Err(e) => FetchResult::Failed(format!("{:#}", e)),
            };
            send_or_log(&tx, result, "fetch result").await;
        });
    }

    /// Poll for the fetch result (non-blocking, call from event loop tick).
    ///
    /// Returns `true` once the fetch has finished, successfully or not.
    pub fn poll_fetch(&mut self) -> bool {
        let Some(mut rx) = self.fetch_rx.take() else {
            return false;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.apply_fetch(result);
                true
            }
            Err(TryRecvError::Empty) => {
                self.fetch_rx = Some(rx);
                false
            }
            Err(TryRecvError::Disconnected) => {
                self.apply_fetch(FetchResult::Failed("fetch task ended without a result".into()));
                true
            }
        }
    }

    /// Apply a finished fetch to the store.
    ///
    /// On failure the store stays empty and the board renders no columns.
    pub fn apply_fetch(&mut self, result: FetchResult) {
        self.is_loading = false;
        match result {
            FetchResult::Loaded(board) => {
                self.store.load(board.tickets, board.users);
                self.error_message = None;
            }
            FetchResult::Failed(msg) => {
                tracing::error!("Failed to fetch tickets: {}", msg);
                self.error_message = Some(format!("Fetch failed: {}", msg));
            }
        }
        self.clamp_selection();
    }

    fn toggle_modal(&mut self, modal: ModalState) {
        self.modal = if self.modal == modal {
            ModalState::None
        } else {
            modal
        };
    }

    pub fn open_add_ticket(&mut self) {
        self.form.focus = DraftField::Title;
        self.form.error = None;
        self.modal = ModalState::AddTicket;
    }

    pub fn set_group_by(&mut self, key: GroupKey) {
        if let Err(e) = self.view.set_group_by(key) {
            tracing::warn!("{:#}", e);
            self.error_message = Some(format!("{:#}", e));
        }
        self.selected_column = 0;
        self.selected_row = 0;
        self.clamp_selection();
    }

    /// Reorder the columns, keeping the selected ticket highlighted.
    pub fn set_sort_by(&mut self, key: SortKey) {
        let selected = self.selected_ticket().map(|t| t.id.clone());
        if let Err(e) = self.view.set_sort_by(key) {
            tracing::warn!("{:#}", e);
            self.error_message = Some(format!("{:#}", e));
        }
        match selected {
            Some(id) => self.select_ticket(&id),
            None => self.clamp_selection(),
        }
    }

    pub fn submit_draft(&mut self) {
        match self.store.append(self.form.draft.clone()) {
            Ok(ticket) => {
                self.status_message = Some(format!("Added {}", ticket.id));
                self.form = DraftForm::default();
                self.modal = ModalState::None;
                self.select_ticket(&ticket.id);
            }
            Err(e) => {
                self.form.error = Some(e.to_string());
            }
        }
    }

    /// Move the selection onto the ticket with this id, if it is on the board.
    pub fn select_ticket(&mut self, id: &str) {
        let found = self.columns().iter().enumerate().find_map(|(col, bucket)| {
            bucket
                .tickets
                .iter()
                .position(|t| t.id == id)
                .map(|row| (col, row))
        });
        if let Some((col, row)) = found {
            self.selected_column = col;
            self.selected_row = row;
        }
    }

    pub fn move_column(&mut self, delta: i32) {
        let count = self.columns().len();
        if count == 0 {
            return;
        }
        self.selected_column = (self.selected_column as i64 + i64::from(delta))
            .clamp(0, count as i64 - 1) as usize;
        self.clamp_selection();
    }

    pub fn move_row(&mut self, delta: i32) {
        let rows = self.rows_in_selected_column();
        if rows == 0 {
            return;
        }
        self.selected_row =
            (self.selected_row as i64 + i64::from(delta)).clamp(0, rows as i64 - 1) as usize;
    }

    fn rows_in_selected_column(&self) -> usize {
        self.columns()
            .get(self.selected_column)
            .map_or(0, |b| b.tickets.len())
    }

    fn clamp_selection(&mut self) {
        let counts: Vec<usize> = self.columns().iter().map(|b| b.tickets.len()).collect();
        if counts.is_empty() {
            self.selected_column = 0;
            self.selected_row = 0;
            return;
        }
        self.selected_column = self.selected_column.min(counts.len() - 1);
        self.selected_row = self
            .selected_row
            .min(counts[self.selected_column].saturating_sub(1));
    }
}
