use leptos::prelude::*;
use thaw::{Flex, FlexAlign, FlexGap, Icon, Text, Theme};

/// Toggles between the dark and light theme; the icon shows the theme a
/// click switches to.
#[component]
pub fn ThemeToggle(theme: RwSignal<Theme>) -> impl IntoView {
    let dark = Memo::new(move |_| theme.with(|theme| theme.name == "dark"));
    let on_toggle_click = move |_| {
        let next = if dark.get_untracked() {
            Theme::light()
        } else {
            Theme::dark()
        };
        log::debug!("Switching theme to {}", next.name);
        theme.set(next);
    };

    let icon: Memo<icondata_core::Icon> = Memo::new(move |_| {
        if dark.get() {
            icondata::BsSun
        } else {
            icondata::BsMoonStars
        }
    });
    let label = move || if dark.get() { "light" } else { "dark" };

    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center class="theme-toggle">
            <Text>{label}</Text>
            <Icon height="1.5em" width="1.5em" icon=icon on_click=on_toggle_click />
        </Flex>
    }
}
