use leptos::prelude::*;
use shared_constants::{COURSE_URL, SOURCE_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            "Anecdote app for " <a href=COURSE_URL>"Full Stack Open"</a> ". See "
            <a href=SOURCE_URL>{SOURCE_URL}</a> " for the source code."
        </footer>
    }
}
