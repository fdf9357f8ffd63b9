use client::{AppState, Controller, Outcome};
use dioxus::prelude::*;
use std::future::Future;

/// Global client state: the controller that runs actions and the page it
/// last produced.
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: CopyValue<Controller>,
    pub state: Signal<AppState>,
}

impl AppContext {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: CopyValue::new(controller),
            state: Signal::new(AppState::booting()),
        }
    }

    pub fn controller(&self) -> Controller {
        Controller::clone(&self.controller.read())
    }

    /// Load the first page from the persisted session.
    pub fn start(&self) {
        let controller = self.controller();
        let mut state = self.state;
        spawn(async move {
            let initial = controller.start().await;
            state.set(initial);
        });
    }

    /// Run an action in the background and fold its outcome into the state.
    ///
    /// Controls stay enabled while it runs, so a double click sends twice.
    pub fn dispatch<F, Fut>(&self, action: F)
    where
        F: FnOnce(Controller) -> Fut,
        Fut: Future<Output = Outcome> + 'static,
    {
        let pending = action(self.controller());
        let mut state = self.state;
        spawn(async move {
            let outcome = pending.await;
            state.write().apply(outcome);
        });
    }

    /// Fold an outcome that is already known.
    pub fn apply(&self, outcome: Outcome) {
        let mut state = self.state;
        state.write().apply(outcome);
    }

    pub fn logout(&self) {
        self.apply(Ok(self.controller().logout()));
    }

    pub fn dismiss_notice(&self) {
        let mut state = self.state;
        state.write().dismiss_notice();
    }
}

/// Hook to access the app context.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}
