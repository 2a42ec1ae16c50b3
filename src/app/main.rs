use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use thaw::{
    ConfigProvider, Flex, FlexAlign, FlexGap, FlexJustify, Layout, MessageBar, MessageBarBody,
    MessageBarIntent, MessageBarTitle, Theme,
};

use super::{
    about::About,
    anecdote_details::AnecdoteDetails,
    anecdote_list::AnecdoteList,
    anecdotes::provide_anecdotes,
    create_new::CreateNew,
    footer::Footer,
    menu::Menu,
    notification::{Notification, NotificationInjection},
    theme_toggle::ThemeToggle,
};

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            <MessageBarBody>
                <MessageBarTitle>"Page not found"</MessageBarTitle>
                <A href="/">"Back to the anecdotes"</A>
            </MessageBarBody>
        </MessageBar>
    }
}

/// The main app component
#[component]
pub fn Main() -> impl IntoView {
    let theme = RwSignal::new(Theme::light());
    let set_body_background_color = move |color: &String| {
        if let Some(body) = window().document().and_then(|document| document.body()) {
            if let Err(e) = body
                .style()
                .set_property("background-color", color.as_str())
            {
                log::warn!("Failed to set body background color: {e:?}");
            }
        }
    };
    Effect::new(move |_| {
        set_body_background_color(theme.get().color.color_neutral_background_1());
    });
    provide_anecdotes();
    NotificationInjection::provide();

    view! {
        <ConfigProvider theme>
            <Router>
                <Layout class="outer-layout">
                    <Flex vertical=true gap=FlexGap::Medium>
                        <h1>"Software anecdotes"</h1>
                        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                            <Menu />
                            <ThemeToggle theme />
                        </Flex>
                        <Notification />
                        <main>
                            <Routes fallback=|| view! { <NotFound /> }>
                                <Route path=path!("/") view=AnecdoteList />
                                <Route path=path!("/anecdotes/:id") view=AnecdoteDetails />
                                <Route path=path!("/create") view=CreateNew />
                                <Route path=path!("/about") view=About />
                            </Routes>
                        </main>
                        <Footer />
                    </Flex>
                </Layout>
            </Router>
        </ConfigProvider>
    }
}
