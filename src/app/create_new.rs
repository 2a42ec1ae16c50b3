use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;
use models::*;
use thaw::{
    Button, ButtonAppearance, ButtonType, Flex, FlexGap, Input, Layout, MessageBar,
    MessageBarBody, MessageBarIntent,
};

use super::{
    anecdotes::{create, AnecdotesInjection},
    notification::NotificationInjection,
};

#[component]
fn LabeledInput(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <label>{label}</label>
            <Input value class="create-new-input" />
        </Flex>
    }
}

/// Form for a new anecdote. Submitting adds it to the list, announces it
/// and returns to the list view.
#[component]
pub fn CreateNew() -> impl IntoView {
    let store = AnecdotesInjection::expect_context();
    let notification = NotificationInjection::expect_context();
    let navigate = use_navigate();

    let content = RwSignal::new(String::new());
    let author = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let draft = Memo::new(move |_| NewAnecdote {
        content: content.get(),
        author: author.get(),
        info: info.get(),
    });
    let validation = Memo::new(move |_| draft.with(NewAnecdote::validate));
    let invalid = Signal::derive(move || validation.with(Result::is_err));
    // untouched forms are invalid too, but not worth a warning
    let show_validation =
        Signal::derive(move || invalid.get() && !draft.with(NewAnecdote::is_blank));

    let reset = move || {
        content.set(String::new());
        author.set(String::new());
        info.set(String::new());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Ok(created) = create(store, draft.get_untracked()) {
            notification.notify(creation_message(&created));
            reset();
            navigate("/", Default::default());
        }
    };

    view! {
        <Layout class="create-new">
            <h2>"create a new anecdote"</h2>
            <form on:submit=on_submit>
                <Flex vertical=true gap=FlexGap::Small>
                    <LabeledInput label="content" value=content />
                    <LabeledInput label="author" value=author />
                    <LabeledInput label="url for more info" value=info />
                    <Show
                        when=move || show_validation.get()
                        fallback=|| view! { <div class="hidden" /> }
                    >
                        <MessageBar intent=MessageBarIntent::Warning>
                            <MessageBarBody>
                                {move || {
                                    validation.get().err().map(|e| e.to_string()).unwrap_or_default()
                                }}
                            </MessageBarBody>
                        </MessageBar>
                    </Show>
                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            disabled=invalid
                        >
                            "create"
                        </Button>
                        <Button button_type=ButtonType::Button on_click=move |_| reset()>
                            "reset"
                        </Button>
                    </Flex>
                </Flex>
            </form>
        </Layout>
    }
}
