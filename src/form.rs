//! The link-creation form as a value plus a pure transition function.
//!
//! [`transition`] never performs I/O. When a submission passes local
//! validation it returns [`Effect::CreateLink`]; whoever drives the form
//! performs the request and feeds the [`Outcome`] back as
//! [`Event::Settled`].

use crate::config::short_url_for;
use crate::coordinator::Outcome;
use crate::errors::FieldError;
use crate::page::Page;
use crate::validator::{check_destination, check_short_code};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DestinationUrl,
    ShortCode,
}

/// Identifies one submission. A settled response is only applied when its
/// ticket matches the one the form is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub destination_url: String,
    pub destination_error: Option<FieldError>,
    pub short_code: String,
    pub short_code_error: Option<FieldError>,
    pub phase: Phase,
    pub page: Page,
    pub pending: Option<RequestTicket>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Edit { field: Field, value: String },
    Submit { ticket: RequestTicket },
    Settled { ticket: RequestTicket, outcome: Outcome },
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    CreateLink {
        ticket: RequestTicket,
        destination_url: String,
        short_code: String,
    },
}

impl FormState {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Inputs are disabled outside of `Editing`.
    pub fn is_editable(&self) -> bool {
        self.phase == Phase::Editing
    }

    pub fn destination_error_text(&self) -> String {
        render(self.destination_error.as_ref())
    }

    pub fn short_code_error_text(&self) -> String {
        render(self.short_code_error.as_ref())
    }

    pub fn has_errors(&self) -> bool {
        self.destination_error.is_some() || self.short_code_error.is_some()
    }

    /// The short URL shown once the mapping exists.
    pub fn short_url(&self) -> Option<String> {
        (self.phase == Phase::Completed).then(|| short_url_for(&self.short_code))
    }
}

fn render(error: Option<&FieldError>) -> String {
    error.map(ToString::to_string).unwrap_or_default()
}

pub fn transition(mut state: FormState, event: Event) -> (FormState, Effect) {
    match (state.phase, event) {
        (Phase::Editing, Event::Edit { field, value }) => {
            match field {
                Field::DestinationUrl => {
                    state.destination_url = value;
                    state.destination_error = None;
                }
                Field::ShortCode => {
                    state.short_code = value;
                    state.short_code_error = None;
                }
            }
            (state, Effect::None)
        }

        (Phase::Editing, Event::Submit { ticket }) => {
            state.destination_error = check_destination(&state.destination_url).err();
            state.short_code_error = check_short_code(&state.short_code).err();
            if state.has_errors() {
                return (state, Effect::None);
            }

            state.phase = Phase::Submitting;
            state.pending = Some(ticket);
            let effect = Effect::CreateLink {
                ticket,
                destination_url: state.destination_url.clone(),
                short_code: state.short_code.clone(),
            };
            (state, effect)
        }

        (Phase::Submitting, Event::Settled { ticket, outcome })
            if state.pending == Some(ticket) =>
        {
            state.pending = None;
            if outcome.is_success() {
                state.phase = Phase::Completed;
            } else {
                state.phase = Phase::Editing;
                state.short_code_error = outcome.field_error();
            }
            (state, Effect::None)
        }

        (Phase::Completed, Event::Reset) => (FormState::new(state.page), Effect::None),

        // Disabled inputs, stale responses, resets outside `Completed`.
        (_, _) => (state, Effect::None),
    }
}
