//! Application state and core logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use order_editor::config::EditorConfig;
use order_editor::state::{Clock, Form, Order, OrderEditForm, OrderFormService, SystemClock};
use order_editor::storage::OrderDocument;

/// Main application struct
pub struct App<C: Clock = SystemClock> {
    /// Form being edited
    pub form: OrderEditForm,
    /// Status bar message
    pub status_message: Option<String>,
    /// True when the form differs from the last loaded or saved entity
    pub dirty: bool,
    /// Also the time source for save stamps
    service: OrderFormService<C>,
    document: OrderDocument,
    config: EditorConfig,
    /// Entity the form resets to
    baseline: Order,
    quit: bool,
}

impl App {
    /// Open the document and start an edit session
    pub fn new(document: OrderDocument, config: EditorConfig) -> Result<Self> {
        Self::with_clock(document, config, SystemClock)
    }
}

impl<C: Clock> App<C> {
    /// Open the document with `clock` as the source of every timestamp
    pub fn with_clock(document: OrderDocument, config: EditorConfig, clock: C) -> Result<Self> {
        let mut order = document.load()?;
        if order.is_new() {
            if order.status.is_none() {
                order.status = config.default_status;
            }
            if order.created_by.is_none() {
                order.created_by = Some(config.auditor().to_string());
            }
        }

        let service = OrderFormService::new(clock);
        let form = OrderEditForm::from_form_state(&service.to_form_state(&order));

        Ok(Self {
            form,
            status_message: None,
            dirty: false,
            service,
            document,
            config,
            baseline: order,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn document_path(&self) -> String {
        self.document.path().display().to_string()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.save(),
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_entity()
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Right => self.edit(|field| field.next_option()),
            KeyCode::Left => self.edit(|field| field.prev_option()),
            KeyCode::Delete => self.edit(|field| field.clear()),
            KeyCode::Backspace => self.edit(|field| field.pop_char()),
            KeyCode::Enter => {
                if self.form.get_active_field_mut().is_multiline {
                    self.edit(|field| field.push_char('\n'));
                } else {
                    self.form.next_field();
                }
            }
            KeyCode::Char(c) if !ctrl => self.edit(|field| field.push_char(c)),
            _ => {}
        }
        Ok(())
    }

    fn edit(&mut self, change: impl FnOnce(&mut order_editor::state::FormField)) {
        let field = self.form.get_active_field_mut();
        if field.is_editable() {
            change(field);
            self.dirty = true;
        }
    }

    /// Current form contents as the entity that would be submitted
    fn entity(&self) -> Order {
        self.service.to_entity(&self.form.to_form_state())
    }

    fn save(&mut self) {
        let violations = self.form.violations();
        if !violations.is_empty() {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            self.status_message = Some(format!("Cannot save: {}", reasons.join("; ")));
            return;
        }

        let mut order = self.entity();
        order.touch(Some(self.config.auditor()), self.service.clock().now());

        match self.document.save(&order) {
            Ok(()) => {
                self.form.reset(&self.service.to_form_state(&order));
                self.baseline = order;
                self.dirty = false;
                self.status_message = Some(format!("Saved to {}", self.document_path()));
            }
            Err(err) => {
                tracing::error!("Failed to save order: {err:#}");
                self.status_message = Some(format!("Save failed: {err}"));
            }
        }
    }

    fn reset(&mut self) {
        self.form.reset(&self.service.reset(&self.baseline));
        self.dirty = false;
        self.status_message = Some("Form reset".to_string());
    }

    fn copy_entity(&mut self) {
        let result = serde_json::to_string_pretty(&self.entity())
            .map_err(anyhow::Error::from)
            .and_then(|json| {
                let mut clipboard = arboard::Clipboard::new()?;
                clipboard.set_text(json)?;
                Ok(())
            });
        self.status_message = Some(match result {
            Ok(()) => "Copied order JSON to clipboard".to_string(),
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {err:#}");
                format!("Copy failed: {err}")
            }
        });
    }
}
