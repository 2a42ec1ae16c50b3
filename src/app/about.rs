use leptos::prelude::*;
use shared_constants::WIKIPEDIA_ANECDOTE_URL;
use thaw::{Layout, Text, TextTag};

/// Component for info about the app
#[component]
pub fn About() -> impl IntoView {
    view! {
        <Layout class="about">
            <h2>"About anecdote app"</h2>
            <p>
                "According to " <a href=WIKIPEDIA_ANECDOTE_URL target="_blank" rel="noopener noreferrer">
                    "Wikipedia"
                </a> ":"
            </p>
            <Text tag=TextTag::Em>
                "An anecdote is a brief, revealing account of an individual person or an incident. "
                "Occasionally humorous, anecdotes differ from jokes because their primary purpose "
                "is not simply to provoke laughter but to reveal a truth more general than the "
                "brief tale itself, such as to characterize a person by delineating a specific "
                "quirk or trait, to communicate an abstract idea about a person, place, or thing "
                "through the concrete details of a short narrative. "
                "An anecdote is \"a story with a point.\""
            </Text>
            <p>
                "Software engineering is full of excellent anecdotes, at this app you can find "
                "the best and add more."
            </p>
        </Layout>
    }
}
