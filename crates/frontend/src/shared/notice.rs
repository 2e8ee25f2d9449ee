//! Blocking notices (success / error / warning / info) shown in a dialog.
//!
//! A notice may carry a follow-up that runs once the user dismisses it,
//! which is how "saved" is sequenced before the page reload.

use super::api_utils::reload_page;
use super::cart::checkout::CheckoutError;
use leptos::prelude::*;
use thaw::{Dialog, DialogActions, DialogBody, DialogContent, DialogSurface, DialogTitle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn default_title(self) -> &'static str {
        match self {
            Severity::Success => "Éxito",
            Severity::Error => "Error",
            Severity::Warning => "Atención",
            Severity::Info => "Aviso",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Severity::Success => "notice notice--success",
            Severity::Error => "notice notice--error",
            Severity::Warning => "notice notice--warning",
            Severity::Info => "notice notice--info",
        }
    }
}

/// Action to run after the notice is dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    ReloadPage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub then: Option<FollowUp>,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: severity.default_title().to_string(),
            message: message.into(),
            then: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn then(mut self, follow_up: FollowUp) -> Self {
        self.then = Some(follow_up);
        self
    }
}

impl From<&CheckoutError> for Notice {
    fn from(err: &CheckoutError) -> Self {
        match err {
            CheckoutError::EmptyCart | CheckoutError::ProductNotFound { .. } => {
                Notice::error(err.to_string())
            }
            CheckoutError::MissingHeader { .. } => Notice::warning(err.to_string()),
            CheckoutError::SubmissionFailed { .. } => Notice::error(err.to_string()),
        }
    }
}

/// Сервис уведомлений: один диалог на страницу
#[derive(Clone, Copy)]
pub struct NoticeService {
    current: RwSignal<Option<Notice>>,
    open: RwSignal<bool>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            open: RwSignal::new(false),
        }
    }

    /// Show a notice, replacing the one on screen. A follow-up still pending on
    /// the replaced notice carries over and runs when the new one is dismissed.
    pub fn show(&self, mut notice: Notice) {
        log::debug!("Notice [{:?}] {}", notice.severity, notice.message);
        let pending = self.pending_follow_up();
        if notice.then.is_none() && pending.is_some() {
            log::debug!("Keeping pending follow-up {:?}", pending);
            notice.then = pending;
        }
        self.current.set(Some(notice));
        self.open.set(true);
    }

    /// The notice on screen, if any (tracked)
    pub fn current(&self) -> Option<Notice> {
        self.current.get()
    }

    /// Follow-up that runs when the notice on screen is dismissed
    pub fn pending_follow_up(&self) -> Option<FollowUp> {
        self.current.with_untracked(|c| c.as_ref().and_then(|n| n.then))
    }

    pub fn dismiss(&self) {
        self.open.set(false);
        self.finish();
    }

    /// Run the pending follow-up, at most once per notice
    fn finish(&self) {
        let mut taken = None;
        self.current.update(|c| taken = c.take());
        if let Some(FollowUp::ReloadPage) = taken.and_then(|n| n.then) {
            reload_page();
        }
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the notice dialog. Must be mounted exactly once, under a provided `NoticeService`.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let svc = use_context::<NoticeService>().expect("NoticeService not provided in context");

    // Closing by clicking outside the dialog counts as a dismissal too
    Effect::new(move |_| {
        if !svc.open.get() {
            svc.finish();
        }
    });

    view! {
        <Dialog open=svc.open>
            <DialogSurface>
                <DialogBody>
                    {move || svc.current().map(|n| {
                        let class = n.severity.class();
                        view! {
                            <DialogTitle>
                                <span class=class>{n.title}</span>
                            </DialogTitle>
                            <DialogContent>
                                <p class="notice__message">{n.message}</p>
                            </DialogContent>
                        }
                    })}
                    <DialogActions>
                        <button
                            type="button"
                            class="button button--primary"
                            on:click=move |_| svc.dismiss()
                        >
                            "Aceptar"
                        </button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
