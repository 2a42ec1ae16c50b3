use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Flex, FlexAlign, FlexGap};

/// Navigation between the routed views. The active link is marked with
/// `aria-current="page"` by the router.
#[component]
pub fn Menu() -> impl IntoView {
    view! {
        <nav class="menu">
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <A href="/" exact=true>
                    "anecdotes"
                </A>
                <A href="/create">"create new"</A>
                <A href="/about">"about"</A>
            </Flex>
        </nav>
    }
}
