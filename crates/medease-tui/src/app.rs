use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::Result;
use medease_core::{
    document::{self, InlineTerm},
    glossary::{self, GlossaryTerm},
    respond, ChatRole, ChatSession, Language, Preferences, PreferencesStore, QaMode, ReadingLevel,
    Reply, SummaryKind, UploadError, UploadedFile,
};
use ratatui::layout::Rect;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub const TRANSCRIPT_FILE: &str = "medease-transcript.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Upload,
    Simplify,
    Glossary,
    Summaries,
}

impl Tab {
    pub fn all() -> [Tab; 4] {
        [Tab::Upload, Tab::Simplify, Tab::Glossary, Tab::Summaries]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Upload => "Upload",
            Tab::Simplify => "Simplify",
            Tab::Glossary => "Glossary",
            Tab::Summaries => "Summaries",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Upload => Tab::Simplify,
            Tab::Simplify => Tab::Glossary,
            Tab::Glossary => Tab::Summaries,
            Tab::Summaries => Tab::Upload,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Upload => Tab::Summaries,
            Tab::Simplify => Tab::Upload,
            Tab::Glossary => Tab::Simplify,
            Tab::Summaries => Tab::Glossary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefsField {
    #[default]
    ReadingLevel,
    Language,
}

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Single-line text input with a character cursor
#[derive(Debug, Clone, Default)]
pub struct LineInput {
    pub text: String,
    pub cursor: usize,
}

impl LineInput {
    pub fn insert(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| !c.is_control()) {
            self.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_pos = char_to_byte_index(&self.text, self.cursor);
            self.text.remove(byte_pos);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let byte_pos = char_to_byte_index(&self.text, self.cursor);
            self.text.remove(byte_pos);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub tab: Tab,
    pub input_mode: InputMode,
    pub language: Language,
    pub latency: Duration,

    // Upload state
    pub upload_input: LineInput,
    pub uploaded_file: Option<UploadedFile>,
    pub upload_error: Option<String>,
    pub pending_navigation: Option<JoinHandle<()>>,

    // Simplify state
    pub terms: Vec<&'static InlineTerm>,
    pub selected_term: Option<usize>,
    pub show_term_detail: bool,
    pub show_audit: bool,
    pub simplify_scroll: u16,

    // Glossary state
    pub glossary_input: LineInput,
    pub glossary_scroll: u16,

    // Summaries state
    pub summary_kind: SummaryKind,
    pub show_summary_audit: bool,

    // Chat assistant state
    pub chat_open: bool,
    pub chat: ChatSession,
    pub chat_input: LineInput,
    pub chat_scroll: u16,
    pub chat_height: u16, // Height of chat area for scroll calculations
    pub chat_width: u16,  // Width of chat area for wrap calculations
    pub pending_reply: Option<JoinHandle<Reply>>,
    pub chat_notice: Option<String>,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    // Preferences dialog state
    pub store: PreferencesStore,
    pub preferences: Preferences,
    pub show_preferences: bool,
    pub prefs_draft: Preferences,
    pub prefs_field: PrefsField,
    pub prefs_status: Option<String>,

    // Panel areas for mouse hit-testing (updated during render)
    pub chat_area: Option<Rect>,
    pub body_area: Option<Rect>,
}

impl App {
    pub fn new(store: PreferencesStore, latency: Duration) -> Self {
        let preferences = store.load();
        info!(
            reading_level = ?preferences.reading_level,
            language = preferences.language.code(),
            "Starting with preferences"
        );

        Self {
            should_quit: false,
            tab: Tab::Upload,
            input_mode: InputMode::Normal,
            language: preferences.language,
            latency,

            upload_input: LineInput::default(),
            uploaded_file: None,
            upload_error: None,
            pending_navigation: None,

            terms: document::terms_in_reading_order(),
            selected_term: None,
            show_term_detail: false,
            show_audit: false,
            simplify_scroll: 0,

            glossary_input: LineInput::default(),
            glossary_scroll: 0,

            summary_kind: SummaryKind::default(),
            show_summary_audit: false,

            chat_open: false,
            chat: ChatSession::new(),
            chat_input: LineInput::default(),
            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,
            pending_reply: None,
            chat_notice: None,

            animation_frame: 0,

            store,
            preferences,
            show_preferences: false,
            prefs_draft: preferences,
            prefs_field: PrefsField::default(),
            prefs_status: None,

            chat_area: None,
            body_area: None,
        }
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            debug!(from = self.tab.label(), to = tab.label(), "Switching tab");
        }
        self.tab = tab;
        self.show_term_detail = false;
        // The chat overlay keeps its own input focus across tab changes
        if !self.chat_open {
            self.input_mode = InputMode::Normal;
        }
    }

    // Upload

    /// Show the file right away and switch to Simplify after the latency.
    /// A newer upload replaces any navigation still pending.
    pub fn upload_file(&mut self, file: UploadedFile) {
        info!(name = %file.name, size = file.size, mime = %file.mime, "File uploaded");

        if let Some(task) = self.pending_navigation.take() {
            task.abort();
        }

        self.uploaded_file = Some(file);
        self.upload_error = None;
        self.upload_input.clear();
        self.input_mode = InputMode::Normal;

        let latency = self.latency;
        self.pending_navigation = Some(tokio::spawn(async move {
            tokio::time::sleep(latency).await;
        }));
    }

    /// Resolve a typed path and record it as the uploaded file.
    /// Like the file picker, only the accepted types are allowed.
    pub fn upload_from_input(&mut self, raw: &str) {
        self.upload_path(raw, UploadedFile::from_path);
    }

    /// Record a dropped (pasted) path. Drops accept any regular file.
    pub fn drop_file(&mut self, raw: &str) {
        self.upload_path(raw, UploadedFile::from_dropped_path);
    }

    fn upload_path(&mut self, raw: &str, capture: fn(&Path) -> Result<UploadedFile, UploadError>) {
        if raw.trim().is_empty() {
            return;
        }

        let path = medease_core::upload::normalize_dropped_path(raw);
        match capture(&path) {
            Ok(file) => self.upload_file(file),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Upload rejected");
                self.upload_error = Some(e.to_string());
            }
        }
    }

    /// "Upload another file": forget the shown file
    pub fn clear_upload(&mut self) {
        self.uploaded_file = None;
        self.upload_error = None;
        self.upload_input.clear();
    }

    // Simplify

    pub fn select_next_term(&mut self) {
        let len = self.terms.len();
        if len > 0 {
            self.selected_term = Some(match self.selected_term {
                Some(i) => (i + 1) % len,
                None => 0,
            });
        }
    }

    pub fn select_prev_term(&mut self) {
        let len = self.terms.len();
        if len > 0 {
            self.selected_term = Some(match self.selected_term {
                Some(0) | None => len - 1,
                Some(i) => i - 1,
            });
        }
    }

    pub fn current_term(&self) -> Option<&'static InlineTerm> {
        self.selected_term.and_then(|i| self.terms.get(i).copied())
    }

    pub fn open_term_detail(&mut self) {
        if self.current_term().is_some() {
            self.show_term_detail = true;
        }
    }

    // Glossary

    pub fn glossary_results(&self) -> Vec<&'static GlossaryTerm> {
        glossary::filter(&self.glossary_input.text)
    }

    // Chat

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
        self.input_mode = if self.chat_open { InputMode::Editing } else { InputMode::Normal };
        if self.chat_open {
            self.scroll_chat_to_bottom();
        }
    }

    pub fn cycle_chat_mode(&mut self) {
        let mode = self.chat.mode().next();
        self.chat.set_mode(mode);
    }

    pub fn set_chat_mode(&mut self, mode: QaMode) {
        self.chat.set_mode(mode);
    }

    /// Send the chat input. Blank input and sends while a reply is pending are ignored.
    pub fn send_chat(&mut self) {
        let Some(submitted) = self.chat.submit(&self.chat_input.text) else {
            return;
        };
        debug!(mode = submitted.mode.as_str(), "Chat question sent");

        self.chat_input.clear();
        self.chat_notice = None;
        self.scroll_chat_to_bottom();

        let latency = self.latency;
        self.pending_reply = Some(tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            respond(submitted.mode, &submitted.input)
        }));
    }

    /// Where an exported conversation is written: next to the preferences file
    pub fn transcript_path(&self) -> PathBuf {
        self.store.path().with_file_name(TRANSCRIPT_FILE)
    }

    /// Write the conversation as JSON and report the outcome in the chat panel
    pub fn export_transcript(&mut self) {
        let path = self.transcript_path();
        let result = self
            .chat
            .transcript_json()
            .map_err(anyhow::Error::from)
            .and_then(|json| {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, json)?;
                Ok(())
            });

        match result {
            Ok(()) => {
                info!(path = %path.display(), messages = self.chat.messages().len(), "Transcript exported");
                self.chat_notice = Some(format!("Saved to {}", path.display()));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not export transcript");
                self.chat_notice = Some(format!("Could not save transcript: {}", e));
            }
        }
    }

    /// Apply the results of deferred tasks that have completed
    pub async fn poll_tasks(&mut self) -> Result<()> {
        if self.pending_reply.as_ref().is_some_and(|t| t.is_finished()) {
            if let Some(task) = self.pending_reply.take() {
                let reply = task.await?;
                self.chat.deliver(reply);
                self.scroll_chat_to_bottom();
            }
        }

        if self.pending_navigation.as_ref().is_some_and(|t| t.is_finished()) {
            if let Some(task) = self.pending_navigation.take() {
                task.await?;
                self.set_tab(Tab::Simplify);
            }
        }

        Ok(())
    }

    /// Cancel deferred work so nothing fires after the UI is gone
    pub fn shutdown(&mut self) {
        if let Some(task) = self.pending_reply.take() {
            task.abort();
        }
        if let Some(task) = self.pending_navigation.take() {
            task.abort();
        }
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.chat.is_typing() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    /// Rendered line count of the conversation at the current chat width
    pub fn chat_line_count(&self) -> u16 {
        // Use actual chat width for wrap calculation, default to 40 if not set
        let wrap_width = if self.chat_width > 0 { self.chat_width as usize } else { 40 };

        let wrapped = |text: &str| -> u16 {
            text.lines()
                .map(|line| {
                    // Use character count, not byte length, for proper UTF-8 handling
                    let char_count = line.chars().count();
                    if char_count == 0 { 1 } else { (char_count - 1) / wrap_width + 1 }
                })
                .fold(0u16, |acc, n| acc.saturating_add(u16::try_from(n).unwrap_or(u16::MAX)))
        };

        let mut total: u16 = 0;
        for msg in self.chat.messages() {
            total = total.saturating_add(1); // Role line
            total = total.saturating_add(wrapped(&msg.content));
            if msg.role == ChatRole::Assistant && !msg.sources.is_empty() {
                let sources = u16::try_from(msg.sources.len()).unwrap_or(u16::MAX);
                total = total.saturating_add(1).saturating_add(sources);
            }
            total = total.saturating_add(1); // Blank line after message
        }

        if self.chat.is_typing() {
            total = total.saturating_add(2);
        }

        total
    }

    pub fn scroll_chat_to_bottom(&mut self) {
        let visible_height = if self.chat_height > 0 { self.chat_height } else { 20 };
        self.chat_scroll = self.chat_line_count().saturating_sub(visible_height);
    }

    pub fn scroll_chat_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_chat_down(&mut self) {
        let max_scroll = self.chat_line_count().saturating_sub(self.chat_height);
        self.chat_scroll = self.chat_scroll.saturating_add(1).min(max_scroll);
    }

    // Preferences

    pub fn open_preferences(&mut self) {
        self.prefs_draft = self.preferences;
        self.prefs_field = PrefsField::default();
        self.prefs_status = None;
        self.show_preferences = true;
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_preferences(&mut self) {
        self.show_preferences = false;
        self.prefs_status = None;
    }

    pub fn prefs_next_field(&mut self) {
        self.prefs_field = match self.prefs_field {
            PrefsField::ReadingLevel => PrefsField::Language,
            PrefsField::Language => PrefsField::ReadingLevel,
        };
    }

    /// Step the focused selector forward (`1`) or back (`-1`), wrapping
    pub fn prefs_cycle_value(&mut self, step: isize) {
        fn cycled<T: Copy + PartialEq>(all: &[T], current: T, step: isize) -> T {
            let len = all.len() as isize;
            let i = all.iter().position(|v| *v == current).unwrap_or(0) as isize;
            all[(i + step).rem_euclid(len) as usize]
        }

        match self.prefs_field {
            PrefsField::ReadingLevel => {
                self.prefs_draft.reading_level =
                    cycled(&ReadingLevel::all(), self.prefs_draft.reading_level, step);
            }
            PrefsField::Language => {
                self.prefs_draft.language = cycled(&Language::all(), self.prefs_draft.language, step);
            }
        }
    }

    /// Persist the draft and hand its language to the page
    pub fn save_preferences(&mut self) {
        match self.store.save(&self.prefs_draft) {
            Ok(()) => {
                info!(
                    reading_level = ?self.prefs_draft.reading_level,
                    language = self.prefs_draft.language.code(),
                    "Preferences saved"
                );
                self.preferences = self.prefs_draft;
                self.language = self.preferences.language;
                self.show_preferences = false;
                self.prefs_status = None;
            }
            Err(e) => {
                warn!(error = %e, "Could not save preferences");
                self.prefs_status = Some(format!("Could not save: {}", e));
            }
        }
    }

    /// Header language selector; changes the page language without saving
    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
    }

    /// Wait for every deferred task and apply its result
    #[cfg(test)]
    pub async fn settle(&mut self) -> Result<()> {
        if let Some(task) = self.pending_reply.take() {
            let reply = task.await?;
            self.chat.deliver(reply);
        }
        if let Some(task) = self.pending_navigation.take() {
            task.await?;
            self.set_tab(Tab::Simplify);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medease_core::preferences::PREFERENCES_FILE;
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> App {
        App::new(PreferencesStore::new(dir.path().join(PREFERENCES_FILE)), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_upload_navigates_to_simplify() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        assert_eq!(app.tab, Tab::Upload);

        app.upload_file(UploadedFile::new("report.pdf", 3 * 1024 * 1024, "application/pdf"));
        assert_eq!(app.uploaded_file.as_ref().unwrap().size_mb(), "3.00");
        assert_eq!(app.tab, Tab::Upload);

        app.settle().await.unwrap();
        assert_eq!(app.tab, Tab::Simplify);
        assert!(app.pending_navigation.is_none());
    }

    #[tokio::test]
    async fn test_upload_from_disk_and_rejection() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        let bad = dir.path().join("notes.txt");
        std::fs::write(&bad, "x").unwrap();
        app.upload_from_input(bad.to_str().unwrap());
        assert!(app.uploaded_file.is_none());
        assert!(app.upload_error.is_some());
        assert!(app.pending_navigation.is_none());

        let good = dir.path().join("scan.png");
        std::fs::write(&good, vec![0u8; 10]).unwrap();
        app.upload_from_input(&format!("'{}'", good.display()));
        assert_eq!(app.uploaded_file.as_ref().unwrap().name, "scan.png");
        assert!(app.upload_error.is_none());

        app.clear_upload();
        assert!(app.uploaded_file.is_none());
        app.shutdown();
    }

    #[tokio::test]
    async fn test_blank_chat_input_appends_nothing() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let before = app.chat.messages().len();

        app.chat_input.insert_str("   ");
        app.send_chat();
        assert_eq!(app.chat.messages().len(), before);
        assert!(app.pending_reply.is_none());
    }

    #[tokio::test]
    async fn test_chat_reply_delivered_after_delay() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.set_chat_mode(QaMode::Grounded);

        app.chat_input.insert_str("Is my COPD bad?");
        app.send_chat();
        assert!(app.chat.is_typing());
        assert!(app.chat_input.text.is_empty());

        app.settle().await.unwrap();
        assert!(!app.chat.is_typing());
        let last = app.chat.messages().last().unwrap();
        assert!(last.content.starts_with("Based on your document"));
        assert_eq!(last.mode, Some(QaMode::Grounded));
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_upload_replaces_pending_navigation() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(
            PreferencesStore::new(dir.path().join(PREFERENCES_FILE)),
            Duration::from_secs(10),
        );

        app.upload_file(UploadedFile::new("first.pdf", 1, "application/pdf"));
        tokio::time::sleep(Duration::from_secs(6)).await;
        app.upload_file(UploadedFile::new("second.png", 2, "image/png"));

        // Past the first deadline: the replaced timer must not navigate
        tokio::time::sleep(Duration::from_secs(6)).await;
        app.poll_tasks().await.unwrap();
        assert_eq!(app.tab, Tab::Upload);
        assert!(app.pending_navigation.as_ref().is_some_and(|t| !t.is_finished()));
        assert_eq!(app.uploaded_file.as_ref().unwrap().name, "second.png");

        // Past the second deadline: exactly one navigation
        tokio::time::sleep(Duration::from_secs(5)).await;
        app.poll_tasks().await.unwrap();
        assert_eq!(app.tab, Tab::Simplify);
        assert!(app.pending_navigation.is_none());

        app.set_tab(Tab::Upload);
        tokio::time::sleep(Duration::from_secs(30)).await;
        app.poll_tasks().await.unwrap();
        assert_eq!(app.tab, Tab::Upload);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replaced_navigation_task_is_cancelled() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(
            PreferencesStore::new(dir.path().join(PREFERENCES_FILE)),
            Duration::from_secs(10),
        );

        app.upload_file(UploadedFile::new("first.pdf", 1, "application/pdf"));
        let first = app.pending_navigation.take().unwrap();
        let first_abort = first.abort_handle();
        app.pending_navigation = Some(first);

        app.upload_file(UploadedFile::new("second.pdf", 1, "application/pdf"));
        tokio::task::yield_now().await;
        assert!(first_abort.is_finished());

        app.shutdown();
    }

    #[tokio::test]
    async fn test_drop_accepts_any_file_but_typed_path_does_not() {
        let dir = TempDir::new().unwrap();
        let docx = dir.path().join("x.docx");
        std::fs::write(&docx, vec![0u8; 64]).unwrap();

        let mut app = test_app(&dir);
        app.upload_from_input(docx.to_str().unwrap());
        assert!(app.uploaded_file.is_none());
        assert!(app.upload_error.is_some());

        app.drop_file(docx.to_str().unwrap());
        let file = app.uploaded_file.as_ref().unwrap();
        assert_eq!(file.kind(), medease_core::FileKind::Other);
        assert!(app.upload_error.is_none());
        app.settle().await.unwrap();
        assert_eq!(app.tab, Tab::Simplify);
    }

    #[test]
    fn test_chat_line_count_saturates() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.chat_width = 1;
        app.chat.deliver(Reply {
            content: "x".repeat(70_000),
            sources: Vec::new(),
            mode: QaMode::Related,
        });
        assert_eq!(app.chat_line_count(), u16::MAX);
        app.scroll_chat_to_bottom();
        app.scroll_chat_down();
    }

    #[test]
    fn test_export_transcript_next_to_preferences() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.export_transcript();

        let path = dir.path().join(TRANSCRIPT_FILE);
        assert_eq!(app.transcript_path(), path);
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["messages"][0]["id"], "welcome");
        assert!(app.chat_notice.as_ref().unwrap().starts_with("Saved to"));
    }

    #[tokio::test]
    async fn test_poll_tasks_waits_for_completion() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(
            PreferencesStore::new(dir.path().join(PREFERENCES_FILE)),
            Duration::from_secs(60),
        );
        app.upload_file(UploadedFile::new("a.pdf", 1, "application/pdf"));
        app.poll_tasks().await.unwrap();
        assert_eq!(app.tab, Tab::Upload);
        app.shutdown();
        assert!(app.pending_navigation.is_none());
    }

    #[test]
    fn test_save_preferences_propagates_language() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        assert_eq!(app.language, Language::En);

        app.open_preferences();
        app.prefs_cycle_value(-1); // General -> Simple
        app.prefs_next_field();
        app.prefs_cycle_value(1); // En -> Es
        app.save_preferences();

        assert!(!app.show_preferences);
        assert_eq!(app.language, Language::Es);

        let reloaded = test_app(&dir);
        assert_eq!(reloaded.preferences.reading_level, ReadingLevel::Simple);
        assert_eq!(reloaded.language, Language::Es);
    }

    #[test]
    fn test_cancel_preferences_discards_draft() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.open_preferences();
        app.prefs_next_field();
        app.prefs_cycle_value(2);
        app.cancel_preferences();
        assert_eq!(app.language, Language::En);
        assert_eq!(app.preferences, Preferences::default());
    }

    #[test]
    fn test_term_cursor_wraps() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.select_prev_term();
        assert_eq!(app.current_term().unwrap().term, "non-invasive positive pressure ventilation");
        app.select_next_term();
        assert_eq!(app.current_term().unwrap().term, "COPD");
    }

    #[test]
    fn test_line_input_utf8_editing() {
        let mut input = LineInput::default();
        input.insert_str("naïve");
        input.left();
        input.left();
        input.backspace();
        assert_eq!(input.text, "nave");
        input.home();
        input.delete();
        assert_eq!(input.text, "ave");
        input.end();
        assert_eq!(input.cursor, 3);
    }
}
