use crate::domain::{flatten_groups, FormField, ListRow, Screen, Task, TaskDraft, UiMode};
use crate::import::{self, ImportError};
use crate::notifications;
use crate::persistence::AppConfig;
use crate::selector::{self, RandomSource, SpinOutcome, ThreadRandom};
use crate::store::{StoreError, TaskStore};
use crate::timer::{CancelReason, Countdown, TickEvent};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use uuid::Uuid;

const ADD_MESSAGE_TTL: Duration = Duration::from_millis(1800);
const CSV_MESSAGE_TTL: Duration = Duration::from_millis(2400);
const NOTICE_TTL: Duration = Duration::from_millis(4000);

/// Short-lived message shown under a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub text: String,
    pub expires_at: Instant,
}

impl FlashMessage {
    fn new(text: impl Into<String>, ttl: Duration, now: Instant) -> Self {
        Self {
            text: text.into(),
            expires_at: now + ttl,
        }
    }
}

/// Input form state for adding tasks
#[derive(Debug, Clone, Default)]
pub struct AddFormState {
    pub name: String,
    pub duration: String,
    pub location: String,
    pub group: String,
    pub editing_field: Option<FormField>,
}

impl AddFormState {
    pub fn new() -> Self {
        Self {
            editing_field: Some(FormField::Name),
            ..Self::default()
        }
    }

    pub fn field(&self) -> FormField {
        self.editing_field.unwrap_or(FormField::Name)
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Duration => &self.duration,
            FormField::Location => &self.location,
            FormField::Group => &self.group,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Duration => &mut self.duration,
            FormField::Location => &mut self.location,
            FormField::Group => &mut self.group,
        }
    }

    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft::new(&self.name, &self.duration, &self.location, &self.group)
    }
}

/// Main application state: the store plus everything that lives only for this session
pub struct AppState {
    pub store: TaskStore,
    pub config: AppConfig,
    pub timer: Countdown,
    pub current_task_id: Option<Uuid>,
    pub hide_done: bool,
    pub location_filter: Option<String>,
    pub screen: Screen,
    pub ui_mode: UiMode,
    /// Cursor over the task rows of the tasks screen (group headers excluded)
    pub selected_index: usize,
    pub add_form: Option<AddFormState>,
    /// Text typed into the custom-minutes or import-path prompt
    pub prompt_input: String,
    /// Replaces the current-task box when a spin picks nothing
    pub choose_message: Option<String>,
    pub add_message: Option<FlashMessage>,
    pub csv_message: Option<FlashMessage>,
    pub notice: Option<FlashMessage>,
    rng: Box<dyn RandomSource>,
}

impl AppState {
    pub fn new(store: TaskStore, config: AppConfig) -> Self {
        Self::with_rng(store, config, Box::new(ThreadRandom))
    }

    /// Build with a specific random source (tests use a seeded one)
    pub fn with_rng(store: TaskStore, config: AppConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            store,
            config,
            timer: Countdown::new(),
            current_task_id: None,
            hide_done: false,
            location_filter: None,
            screen: Screen::Choose,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            add_form: None,
            prompt_input: String::new(),
            choose_message: None,
            add_message: None,
            csv_message: None,
            notice: None,
            rng,
        }
    }

    /// The task being timed/displayed, if it still exists
    pub fn current_task(&self) -> Option<&Task> {
        self.current_task_id.and_then(|id| self.store.get(id))
    }

    /// Make a task the current selection, starting a countdown unless it is already done
    pub fn set_current_task(&mut self, id: Option<Uuid>, now: Instant) {
        let Some(task) = id.and_then(|id| self.store.get(id)) else {
            self.current_task_id = None;
            self.timer.stop();
            return;
        };

        let (task_id, duration, done) = (task.id, task.duration, task.done);
        self.current_task_id = Some(task_id);
        self.choose_message = None;
        if done {
            self.timer.stop();
        } else {
            self.timer.start(task_id, duration, now);
        }
    }

    /// Pick a random eligible task for the given budget and the current location filter
    pub fn spin(&mut self, minutes: f64, now: Instant) -> SpinOutcome {
        let outcome = selector::spin(
            self.store.tasks(),
            minutes,
            self.location_filter.as_deref(),
            self.rng.as_mut(),
        );
        debug!(minutes, filter = ?self.location_filter, ?outcome, "spin");

        match &outcome {
            SpinOutcome::Picked(task) => self.set_current_task(Some(task.id), now),
            _ => {
                self.set_current_task(None, now);
                self.choose_message = outcome.message();
            }
        }
        outcome
    }

    /// Spin with the n-th configured preset
    pub fn spin_preset(&mut self, index: usize, now: Instant) -> Option<SpinOutcome> {
        let minutes = *self.config.spin_presets().get(index)?;
        Some(self.spin(f64::from(minutes), now))
    }

    /// Drop the current selection without touching the task
    pub fn skip(&mut self) {
        self.timer.cancel(CancelReason::Skipped);
        self.current_task_id = None;
        self.choose_message = None;
    }

    /// Select a task from the list; it becomes current like a spin result
    pub fn select_task(&mut self, id: Uuid, now: Instant) {
        if self.store.get(id).is_some() {
            self.set_current_task(Some(id), now);
        }
    }

    /// "Mark done" is offered whenever a task is selected and not yet done
    pub fn can_mark_current_done(&self) -> bool {
        self.current_task().map(|t| !t.done).unwrap_or(false)
    }

    pub fn mark_done(&mut self, id: Uuid, now: Instant) -> Result<(), StoreError> {
        let result = self.store.mark_done(id);

        let done = self.store.get(id).map(|t| t.done).unwrap_or(false);
        if done && self.current_task_id == Some(id) && self.timer.complete(id) {
            if self.config.notifications {
                if let Some(task) = self.store.get(id) {
                    notifications::notify_task_done(&task.name);
                }
            }
        }

        self.report(result, now).map(|_| ())
    }

    pub fn mark_current_done(&mut self, now: Instant) -> Result<(), StoreError> {
        match self.current_task_id {
            Some(id) if self.can_mark_current_done() => self.mark_done(id, now),
            _ => Ok(()),
        }
    }

    /// Delete a task; if it is the current selection, the selection and countdown go too
    pub fn delete_task(&mut self, id: Uuid, now: Instant) -> Result<(), StoreError> {
        if self.current_task_id == Some(id) {
            self.timer.cancel(CancelReason::TaskRemoved);
            self.current_task_id = None;
        }
        let result = self.store.delete(id);
        self.clamp_selection();
        self.refresh_location_filter();
        self.report(result, now).map(|_| ())
    }

    /// Ask for confirmation before wiping everything
    pub fn request_wipe(&mut self) {
        if !self.store.is_empty() {
            self.ui_mode = UiMode::ConfirmWipe;
        }
    }

    pub fn wipe_all(&mut self, confirmed: bool, now: Instant) -> Result<(), StoreError> {
        self.ui_mode = UiMode::Normal;
        if !confirmed {
            return Ok(());
        }
        self.set_current_task(None, now);
        let result = self.store.wipe_all(true);
        self.selected_index = 0;
        self.refresh_location_filter();
        self.report(result, now).map(|_| ())
    }

    pub fn toggle_hide_done(&mut self) {
        self.hide_done = !self.hide_done;
        self.clamp_selection();
    }

    /// Validate and add a task, leaving a message for the form
    pub fn add_task(&mut self, draft: &TaskDraft, now: Instant) -> bool {
        match self.store.add(draft) {
            Ok(_) => {
                self.add_message = Some(FlashMessage::new("Task added ✅", ADD_MESSAGE_TTL, now));
                true
            }
            Err(e) => {
                if matches!(e, StoreError::Persist(_)) {
                    warn!(error = %e, "task added but not saved");
                }
                self.add_message = Some(FlashMessage::new(e.to_string(), ADD_MESSAGE_TTL, now));
                false
            }
        }
    }

    /// Import a CSV file, leaving a message for the import section
    pub fn import_csv(&mut self, path: &Path, now: Instant) {
        let text = match import::import_file(&mut self.store, path) {
            Ok(summary) => summary.message(),
            Err(e @ ImportError::Store(_)) => {
                warn!(error = %e, path = %path.display(), "csv import could not be saved");
                format!("CSV import failed 😭 {}", e)
            }
            Err(e) => e.to_string(),
        };
        self.refresh_location_filter();
        self.csv_message = Some(FlashMessage::new(text, CSV_MESSAGE_TTL, now));
    }

    /// Advance the countdown against the latest store state and expire old messages
    pub fn tick(&mut self, now: Instant) -> TickEvent {
        for slot in [&mut self.add_message, &mut self.csv_message, &mut self.notice] {
            if slot.as_ref().map(|m| m.expires_at <= now).unwrap_or(false) {
                *slot = None;
            }
        }

        let task = self.current_task_id.and_then(|id| self.store.get(id));
        let event = self.timer.tick(now, task);
        match event {
            TickEvent::Expired(id) => {
                if self.config.notifications {
                    if let Some(task) = self.store.get(id) {
                        notifications::notify_time_up(&task.name);
                    }
                }
                self.ui_mode = UiMode::ConfirmExpired;
            }
            TickEvent::TaskVanished(_) => {
                self.current_task_id = None;
            }
            _ => {}
        }
        event
    }

    /// Answer the expiry question: `true` marks the task done, `false` leaves it active
    pub fn resolve_expired(&mut self, completed: bool, now: Instant) -> Result<(), StoreError> {
        self.ui_mode = UiMode::Normal;
        match self.timer.confirm(completed) {
            Some(id) => {
                let result = self.store.mark_done(id);
                self.report(result, now).map(|_| ())
            }
            None => Ok(()),
        }
    }

    /// Text under the current task
    pub fn timer_line(&self, now: Instant) -> String {
        match self.current_task() {
            Some(task) if task.done && !self.timer.is_running() && self.timer.task_id() != Some(task.id) => {
                "Marked done ✅".to_string()
            }
            _ => self.timer.status_line(now),
        }
    }

    /// Step through "no location" and each known location
    pub fn cycle_location(&mut self) {
        let locations = self.store.locations();
        let position = self.location_filter.as_ref().and_then(|current| {
            locations.iter().position(|loc| loc == current).or_else(|| {
                locations
                    .iter()
                    .position(|loc| loc.to_lowercase() == current.to_lowercase())
            })
        });
        self.location_filter = match position {
            None => locations.first().cloned(),
            Some(i) => locations.get(i + 1).cloned(),
        };
    }

    /// Forget a location filter that no longer matches any task
    pub fn refresh_location_filter(&mut self) {
        let Some(current) = &self.location_filter else {
            return;
        };
        let locations = self.store.locations();
        self.location_filter = locations
            .iter()
            .find(|loc| *loc == current)
            .or_else(|| {
                locations
                    .iter()
                    .find(|loc| loc.to_lowercase() == current.to_lowercase())
            })
            .cloned();
    }

    /// Rows of the tasks screen: group headers followed by their tasks
    pub fn visible_rows(&self) -> Vec<ListRow<'_>> {
        flatten_groups(self.store.list(self.hide_done))
    }

    /// Tasks in display order (grouped), without headers
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.visible_rows()
            .into_iter()
            .filter_map(|row| match row {
                ListRow::Task(task) => Some(task),
                ListRow::Group { .. } => None,
            })
            .collect()
    }

    pub fn selected_task_id(&self) -> Option<Uuid> {
        self.visible_tasks().get(self.selected_index).map(|t| t.id)
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_tasks().len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_tasks().len();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    pub fn toggle_screen(&mut self) {
        self.screen = self.screen.toggle();
    }

    pub fn start_add_task(&mut self) {
        self.add_form = Some(AddFormState::new());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn input_form_next_field(&mut self) {
        if let Some(form) = &mut self.add_form {
            form.editing_field = Some(form.field().next());
        }
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.add_form {
            let field = form.field();
            form.value_mut(field).push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.add_form {
            let field = form.field();
            form.value_mut(field).pop();
        }
    }

    /// Submit the add form; it stays open with its contents when validation fails
    pub fn submit_input_form(&mut self, now: Instant) {
        let Some(form) = &self.add_form else {
            return;
        };
        let draft = form.to_draft();
        if self.add_task(&draft, now) {
            self.add_form = None;
            self.ui_mode = UiMode::Normal;
            self.refresh_location_filter();
        }
    }

    pub fn cancel_input_form(&mut self) {
        self.add_form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn start_custom_minutes(&mut self) {
        self.prompt_input.clear();
        self.ui_mode = UiMode::CustomMinutes;
    }

    pub fn start_import(&mut self) {
        self.prompt_input.clear();
        self.ui_mode = UiMode::ImportPath;
    }

    pub fn prompt_add_char(&mut self, c: char) {
        self.prompt_input.push(c);
    }

    pub fn prompt_backspace(&mut self) {
        self.prompt_input.pop();
    }

    /// Run whatever the open prompt is for
    pub fn submit_prompt(&mut self, now: Instant) {
        let input = std::mem::take(&mut self.prompt_input);
        let mode = self.ui_mode;
        self.ui_mode = UiMode::Normal;
        match mode {
            UiMode::CustomMinutes => {
                self.spin(selector::parse_minutes(&input), now);
            }
            UiMode::ImportPath => {
                self.import_csv(Path::new(input.trim()), now);
            }
            _ => {}
        }
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Turn a store error into a notice, passing the result through
    fn report<T>(&mut self, result: Result<T, StoreError>, now: Instant) -> Result<T, StoreError> {
        if let Err(e) = &result {
            warn!(error = %e, "store operation failed");
            self.notice = Some(FlashMessage::new(e.to_string(), NOTICE_TTL, now));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerState;
    use rand::SeedableRng;

    fn create_test_app() -> AppState {
        let mut store = TaskStore::in_memory();
        store.add(&TaskDraft::new("Stretch", "1", "Home", "Health")).unwrap();
        store.add(&TaskDraft::new("Email", "20", "Work", "")).unwrap();
        store.add(&TaskDraft::new("Laundry", "45", "home", "Chores")).unwrap();
        AppState::with_rng(
            store,
            AppConfig {
                notifications: false,
                ..AppConfig::default()
            },
            Box::new(rand::rngs::StdRng::seed_from_u64(42)),
        )
    }

    fn id_of(app: &AppState, name: &str) -> Uuid {
        app.store.tasks().iter().find(|t| t.name == name).unwrap().id
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.store.len(), 3);
        assert_eq!(app.screen, Screen::Choose);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.current_task_id.is_none());
        assert!(!app.hide_done);
    }

    #[test]
    fn test_spin_sets_current_and_starts_timer() {
        let mut app = create_test_app();
        let now = Instant::now();

        let outcome = app.spin(30.0, now);
        let SpinOutcome::Picked(task) = outcome else {
            panic!("expected a pick");
        };
        assert!(task.duration <= 30);
        assert_eq!(app.current_task_id, Some(task.id));
        assert!(app.timer.is_running());
        assert_eq!(app.timer.task_id(), Some(task.id));
    }

    #[test]
    fn test_spin_invalid_minutes_clears_selection() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.spin(30.0, now);

        assert_eq!(app.spin(f64::NAN, now), SpinOutcome::InvalidMinutes);
        assert!(app.current_task_id.is_none());
        assert!(!app.timer.is_running());
        assert_eq!(
            app.choose_message.as_deref(),
            Some("Type how many minutes you have 🙂")
        );
    }

    #[test]
    fn test_spin_uses_location_filter() {
        let mut app = create_test_app();
        app.location_filter = Some("HOME".to_string());
        let now = Instant::now();

        for _ in 0..20 {
            match app.spin(60.0, now) {
                SpinOutcome::Picked(task) => assert!(task.location.eq_ignore_ascii_case("home")),
                other => panic!("unexpected {:?}", other),
            }
        }

        app.location_filter = Some("Work".to_string());
        assert!(matches!(app.spin(5.0, now), SpinOutcome::NoneFit { .. }));
        assert_eq!(
            app.choose_message.as_deref(),
            Some("No tasks fit 5 minutes at \"Work\" 😭")
        );
    }

    #[test]
    fn test_expiry_without_confirmation_keeps_task_active() {
        let mut app = create_test_app();
        let id = id_of(&app, "Stretch");
        let t0 = Instant::now();
        app.select_task(id, t0);

        let event = app.tick(t0 + Duration::from_secs(60));
        assert_eq!(event, TickEvent::Expired(id));
        assert_eq!(app.ui_mode, UiMode::ConfirmExpired);

        app.resolve_expired(false, t0).unwrap();
        assert!(!app.store.get(id).unwrap().done);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.timer_line(t0), "Not marked done. Still in the list.");
        assert_eq!(app.tick(t0 + Duration::from_secs(120)), TickEvent::Idle);
    }

    #[test]
    fn test_expiry_confirmed_marks_done_and_stops() {
        let mut app = create_test_app();
        let id = id_of(&app, "Stretch");
        let t0 = Instant::now();
        app.select_task(id, t0);
        app.tick(t0 + Duration::from_secs(61));

        app.resolve_expired(true, t0).unwrap();
        assert!(app.store.get(id).unwrap().done);
        assert_eq!(app.timer.state(), TimerState::Completed { task_id: id });
        assert_eq!(app.tick(t0 + Duration::from_secs(62)), TickEvent::Idle);
        assert!(!app.can_mark_current_done());
    }

    #[test]
    fn test_mark_current_done_completes_timer() {
        let mut app = create_test_app();
        let id = id_of(&app, "Email");
        let now = Instant::now();
        app.select_task(id, now);
        assert!(app.can_mark_current_done());

        app.mark_current_done(now).unwrap();
        assert!(app.store.get(id).unwrap().done);
        assert!(!app.timer.is_running());
        assert_eq!(app.timer_line(now), "Marked done ✅ Timer stopped.");
    }

    #[test]
    fn test_mark_done_after_declining_expiry() {
        let mut app = create_test_app();
        let id = id_of(&app, "Stretch");
        let t0 = Instant::now();
        app.select_task(id, t0);
        app.tick(t0 + Duration::from_secs(60));
        app.resolve_expired(false, t0).unwrap();
        assert!(app.can_mark_current_done());

        app.mark_current_done(t0).unwrap();
        assert!(app.store.get(id).unwrap().done);
        assert_eq!(app.timer.state(), TimerState::Completed { task_id: id });
        assert_eq!(app.timer_line(t0), "Marked done ✅ Timer stopped.");
        assert!(!app.can_mark_current_done());
    }

    #[test]
    fn test_selecting_done_task_starts_no_timer() {
        let mut app = create_test_app();
        let id = id_of(&app, "Email");
        let now = Instant::now();
        app.mark_done(id, now).unwrap();

        app.select_task(id, now);
        assert_eq!(app.current_task_id, Some(id));
        assert!(!app.timer.is_running());
        assert_eq!(app.timer_line(now), "Marked done ✅");
    }

    #[test]
    fn test_deleting_current_task_clears_selection_and_timer() {
        let mut app = create_test_app();
        let id = id_of(&app, "Laundry");
        let now = Instant::now();
        app.select_task(id, now);
        assert!(app.timer.is_running());

        app.delete_task(id, now).unwrap();
        assert!(app.current_task_id.is_none());
        assert!(!app.timer.is_running());
        assert!(app.store.get(id).is_none());
        assert_eq!(app.tick(now), TickEvent::Idle);
    }

    #[test]
    fn test_skip_clears_selection() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.spin(60.0, now);

        app.skip();
        assert!(app.current_task_id.is_none());
        assert!(!app.timer.is_running());
        assert_eq!(app.timer_line(now), "");
    }

    #[test]
    fn test_wipe_needs_confirmation() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.spin(60.0, now);

        app.request_wipe();
        assert_eq!(app.ui_mode, UiMode::ConfirmWipe);
        app.wipe_all(false, now).unwrap();
        assert_eq!(app.store.len(), 3);
        assert_eq!(app.ui_mode, UiMode::Normal);

        app.wipe_all(true, now).unwrap();
        assert!(app.store.is_empty());
        assert!(app.current_task_id.is_none());
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_add_form_flow() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.start_add_task();
        for c in "Read".chars() {
            app.input_form_add_char(c);
        }
        app.input_form_next_field();
        app.input_form_add_char('x');

        // Invalid duration keeps the form open
        app.submit_input_form(now);
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert_eq!(
            app.add_message.as_ref().map(|m| m.text.as_str()),
            Some("Need a valid duration (minutes) 🙂")
        );

        app.input_form_backspace();
        app.input_form_add_char('9');
        app.input_form_next_field();
        for c in "Couch".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form(now);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.add_form.is_none());
        let task = app.store.tasks().last().unwrap();
        assert_eq!(task.name, "Read");
        assert_eq!(task.duration, 9);
        assert_eq!(task.location, "Couch");
        assert_eq!(task.group, None);
    }

    #[test]
    fn test_flash_messages_expire() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.add_task(&TaskDraft::new("Nap", "20", "Home", ""), now);
        assert!(app.add_message.is_some());

        app.tick(now + Duration::from_millis(1000));
        assert!(app.add_message.is_some());
        app.tick(now + Duration::from_millis(1800));
        assert!(app.add_message.is_none());
    }

    #[test]
    fn test_cycle_location() {
        let mut app = create_test_app();
        // Locations: "Home", "home", "Work" sorted ignoring case
        let locations = app.store.locations();
        assert_eq!(locations.len(), 3);

        app.cycle_location();
        assert_eq!(app.location_filter.as_deref(), Some(locations[0].as_str()));
        app.cycle_location();
        app.cycle_location();
        app.cycle_location();
        assert_eq!(app.location_filter, None);
    }

    #[test]
    fn test_location_filter_reset_when_gone() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.location_filter = Some("WORK".to_string());
        app.refresh_location_filter();
        assert_eq!(app.location_filter.as_deref(), Some("Work"));

        let id = id_of(&app, "Email");
        app.delete_task(id, now).unwrap();
        assert_eq!(app.location_filter, None);
    }

    #[test]
    fn test_hide_done_and_selection() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.selected_index = 2;
        let id = app.selected_task_id().unwrap();
        app.mark_done(id, now).unwrap();

        app.toggle_hide_done();
        assert_eq!(app.visible_tasks().len(), 2);
        assert!(app.selected_index < 2);
        assert!(app.visible_tasks().iter().all(|t| !t.done));
    }

    #[test]
    fn test_import_prompt() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("more.csv");
        std::fs::write(&path, "Name,Duration,Location\nWater plants,5,Garden\n").unwrap();

        let mut app = create_test_app();
        let now = Instant::now();
        app.start_import();
        for c in path.to_string_lossy().chars() {
            app.prompt_add_char(c);
        }
        app.submit_prompt(now);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.len(), 4);
        assert_eq!(
            app.csv_message.as_ref().map(|m| m.text.as_str()),
            Some("Imported 1 task(s)! Skipped 0. ✅")
        );
    }

    #[test]
    fn test_custom_minutes_prompt_rejects_garbage() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.start_custom_minutes();
        app.prompt_add_char('x');
        app.submit_prompt(now);

        assert!(app.current_task_id.is_none());
        assert_eq!(
            app.choose_message.as_deref(),
            Some("Type how many minutes you have 🙂")
        );
    }

    #[test]
    fn test_spin_preset() {
        let mut app = create_test_app();
        let now = Instant::now();
        assert!(app.spin_preset(0, now).is_some());
        assert!(app.spin_preset(9, now).is_none());
    }
}
