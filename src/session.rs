//! Drives a [`FormState`] through [`transition`] and performs the one effect
//! it can ask for.

use tracing::{debug, info};

use crate::coordinator::LinkCreator;
use crate::form::{Effect, Event, Field, FormState, Phase, RequestTicket, transition};
use crate::page::Page;

pub struct FormSession<C> {
    state: FormState,
    creator: C,
    next_ticket: u64,
}

impl<C: LinkCreator> FormSession<C> {
    pub fn new(page: Page, creator: C) -> Self {
        Self {
            state: FormState::new(page),
            creator,
            next_ticket: 1,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn creator(&self) -> &C {
        &self.creator
    }

    /// Applies one event and returns the effect it requested, without
    /// performing it. For event loops that run the request themselves.
    pub fn dispatch(&mut self, event: Event) -> Effect {
        let state = std::mem::take(&mut self.state);
        let (state, effect) = transition(state, event);
        self.state = state;
        effect
    }

    /// Ignored while the inputs are disabled.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if !self.state.is_editable() {
            debug!(?field, phase = ?self.state.phase, "edit ignored, inputs disabled");
            return;
        }
        self.dispatch(Event::Edit {
            field,
            value: value.into(),
        });
    }

    /// Validates, then sends the creation request and applies its outcome.
    ///
    /// `&mut self` is held across the request, so nothing else can edit or
    /// submit while it is in flight.
    pub async fn submit(&mut self) -> Phase {
        let ticket = RequestTicket(self.next_ticket);
        self.next_ticket += 1;

        match self.dispatch(Event::Submit { ticket }) {
            Effect::None => {
                debug!(
                    destination_error = %self.state.destination_error_text(),
                    short_code_error = %self.state.short_code_error_text(),
                    "submission blocked by local validation"
                );
            }
            Effect::CreateLink {
                ticket,
                destination_url,
                short_code,
            } => {
                let outcome = self.creator.create(&destination_url, &short_code).await;
                info!(ticket = ticket.0, ?outcome, "applying outcome");
                self.dispatch(Event::Settled { ticket, outcome });
            }
        }
        self.state.phase
    }

    pub fn reset(&mut self) {
        self.dispatch(Event::Reset);
    }
}
