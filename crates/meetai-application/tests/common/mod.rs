#![allow(dead_code)]

use meetai_application::{ConfirmedRemoval, QueryCache};
use meetai_core::confirm::{ConfirmationGate, ConfirmationPresenter, ConfirmationPrompt, ConfirmationRequest};
use meetai_core::view::{Navigator, Notification, NotificationLevel, Notifier};
use std::sync::{Arc, Mutex};

/// How the fake dialog answers each prompt.
#[derive(Debug, Clone, Copy)]
pub enum Answer {
    Confirm,
    Cancel,
    Dismiss,
    /// Keep the prompt open until the test resolves it.
    Hold,
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.level == NotificationLevel::Error)
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// Answers every prompt as soon as it is presented.
pub struct ScriptedPresenter {
    answer: Mutex<Answer>,
    pub prompts: Mutex<Vec<ConfirmationRequest>>,
    held: Mutex<Vec<ConfirmationPrompt>>,
}

impl ScriptedPresenter {
    pub fn new(answer: Answer) -> Self {
        Self {
            answer: Mutex::new(answer),
            prompts: Mutex::new(Vec::new()),
            held: Mutex::new(Vec::new()),
        }
    }

    /// Waits until a held prompt is open and takes it.
    pub async fn next_held(&self) -> ConfirmationPrompt {
        loop {
            if let Some(prompt) = self.held.lock().unwrap().pop() {
                return prompt;
            }
            tokio::task::yield_now().await;
        }
    }

    pub fn set_answer(&self, answer: Answer) {
        *self.answer.lock().unwrap() = answer;
    }

    pub fn prompts(&self) -> Vec<ConfirmationRequest> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ConfirmationPresenter for ScriptedPresenter {
    fn present(&self, prompt: ConfirmationPrompt) {
        self.prompts.lock().unwrap().push(prompt.request.clone());
        match *self.answer.lock().unwrap() {
            Answer::Confirm => prompt.responder.confirm(),
            Answer::Cancel => prompt.responder.cancel(),
            Answer::Dismiss => prompt.responder.dismiss(),
            Answer::Hold => self.held.lock().unwrap().push(prompt),
        }
    }
}

/// Shared collaborators for one view.
pub struct Harness {
    pub cache: Arc<QueryCache>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
    pub presenter: Arc<ScriptedPresenter>,
    pub removal: Arc<ConfirmedRemoval>,
}

impl Harness {
    pub fn new(answer: Answer) -> Self {
        let cache = Arc::new(QueryCache::new());
        let navigator = Arc::new(RecordingNavigator::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let presenter = Arc::new(ScriptedPresenter::new(answer));
        let removal = Arc::new(ConfirmedRemoval::new(
            ConfirmationGate::new(presenter.clone()),
            cache.clone(),
            navigator.clone(),
            notifier.clone(),
        ));

        Self {
            cache,
            navigator,
            notifier,
            presenter,
            removal,
        }
    }
}
