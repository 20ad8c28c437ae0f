use crate::core::action_bindings::ActionBindings;
use crate::core::event::Action;
use crate::core::event_queue::{AppEvent, EventQueue};
use crate::core::form::ContactForm;
use crate::core::reducer::Effect;
use crate::terminal::{KeyEvent, Terminal};
use crate::ui::frame::Frame;
use crate::ui::renderer::Renderer;
use crate::ui::theme::Theme;
use crate::ui::view::ViewNode;
use std::io;
use tracing::{debug, trace};

pub struct App {
    form: ContactForm,
    renderer: Renderer,
    action_bindings: ActionBindings,
    event_queue: EventQueue,
    theme: Theme,
    should_exit: bool,
}

impl App {
    pub fn new(form: ContactForm) -> Self {
        Self {
            form,
            renderer: Renderer::new(),
            action_bindings: ActionBindings::new(),
            event_queue: EventQueue::new(),
            theme: Theme::default_theme(),
            should_exit: false,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn view(&self) -> ViewNode {
        self.form.view()
    }

    pub fn frame(&self) -> Frame {
        Renderer::layout(&self.form.view(), &self.theme)
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        self.event_queue.emit(AppEvent::Key(key_event));
    }

    pub fn dispatch(&mut self, action: Action) {
        self.event_queue.emit(AppEvent::Action(action));
    }

    /// Drains the queue. Returns whether anything was processed.
    pub fn tick(&mut self) -> bool {
        let mut processed_any = false;
        while let Some(event) = self.event_queue.next() {
            self.dispatch_event(event);
            processed_any = true;
        }
        processed_any
    }

    pub fn render(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let view = self.form.view();
        self.renderer.render(&view, &self.theme, terminal)
    }

    pub fn finish(&self, terminal: &mut Terminal) -> io::Result<()> {
        self.renderer.move_to_end(terminal)
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn dispatch_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key_event) => {
                let action = self
                    .action_bindings
                    .handle_key(&key_event)
                    .unwrap_or(Action::InputKey(key_event));
                self.reduce(action);
            }
            AppEvent::Action(action) => self.reduce(action),
            AppEvent::InputChanged { field, value } => {
                debug!(%field, len = value.chars().count(), "input changed");
            }
            AppEvent::FocusChanged { from, to } => {
                trace!(?from, ?to, "focus changed");
            }
            AppEvent::Submitted(submission) => {
                debug!(has_message = !submission.message.is_empty(), "summary rendered");
            }
            AppEvent::SubmitRejected { fields } => {
                debug!(?fields, "validation errors shown");
            }
        }
    }

    fn reduce(&mut self, action: Action) {
        let effects = self.form.reduce(action);
        self.apply_effects(effects);
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Emit(event) => self.event_queue.emit(event),
                Effect::Exit => self.should_exit = true,
            }
        }
    }
}
