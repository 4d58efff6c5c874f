//! Confirmation gate for destructive actions.
//!
//! A [`ConfirmSlot`] holds at most one pending action. Requesting a new
//! confirmation replaces whatever was pending; accepting runs and clears it,
//! cancelling clears it without running it.

use crate::errors::AppResult;

type Action<'a> = Box<dyn FnOnce() -> AppResult<()> + 'a>;

struct Pending<'a> {
    title: String,
    message: String,
    action: Action<'a>,
}

#[derive(Default)]
pub struct ConfirmSlot<'a> {
    pending: Option<Pending<'a>>,
}

impl<'a> ConfirmSlot<'a> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Park `on_confirm` behind a dialog. Last call wins.
    pub fn request_confirm<F>(&mut self, title: &str, message: &str, on_confirm: F)
    where
        F: FnOnce() -> AppResult<()> + 'a,
    {
        self.pending = Some(Pending {
            title: title.to_string(),
            message: message.to_string(),
            action: Box::new(on_confirm),
        });
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Title and message of the dialog currently shown.
    pub fn dialog(&self) -> Option<(&str, &str)> {
        self.pending
            .as_ref()
            .map(|p| (p.title.as_str(), p.message.as_str()))
    }

    /// Run the pending action. `Ok(false)` when nothing was pending.
    pub fn accept(&mut self) -> AppResult<bool> {
        match self.pending.take() {
            Some(p) => {
                (p.action)()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drop the pending action. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Show the dialog through `answer` and accept or cancel accordingly.
    /// Returns whether the action ran.
    pub fn resolve_with<P>(&mut self, answer: P) -> AppResult<bool>
    where
        P: FnOnce(&str, &str) -> AppResult<bool>,
    {
        let Some((title, message)) = self.dialog() else {
            return Ok(false);
        };
        if answer(title, message)? {
            self.accept()
        } else {
            self.cancel();
            Ok(false)
        }
    }
}
