use leptos::prelude::*;
use models::*;
use reactive_stores::Store;
use thaw::{Button, ButtonAppearance, ButtonSize};

use crate::log_update;

#[derive(Clone, Copy)]
pub struct AnecdotesInjection(pub Store<Anecdotes>);

impl AnecdotesInjection {
    #[track_caller]
    pub fn expect_context() -> Store<Anecdotes> {
        expect_context::<Self>().0
    }
}

pub fn provide_anecdotes() -> Store<Anecdotes> {
    let store = Store::new(Anecdotes::seeded());
    provide_context(AnecdotesInjection(store));
    store
}

pub fn create(store: Store<Anecdotes>, draft: NewAnecdote) -> Result<Anecdote, AnecdoteError> {
    log_update!(format!("create({:?})", draft.content), {
        store
            .try_update(|anecdotes| anecdotes.add(draft))
            .unwrap_or(Err(AnecdoteError::StoreDisposed))
    })
}

pub fn vote(store: Store<Anecdotes>, id: AnecdoteId) -> Result<u32, AnecdoteError> {
    log_update!(format!("vote({})", id), {
        store
            .try_update(|anecdotes| anecdotes.vote(id))
            .unwrap_or(Err(AnecdoteError::StoreDisposed))
    })
}

/// Button that adds one vote to the anecdote with the given id
#[component]
pub fn VoteButton(id: AnecdoteId) -> impl IntoView {
    let store = AnecdotesInjection::expect_context();
    let on_click = move |_| {
        let _ = vote(store, id);
    };
    view! {
        <Button
            appearance=ButtonAppearance::Primary
            size=ButtonSize::Small
            icon=icondata::MdiThumbUp
            on_click
        >
            "vote"
        </Button>
    }
}
