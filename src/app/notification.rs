use leptos::prelude::*;
use shared_constants::NOTIFICATION_DURATION;
use thaw::{MessageBar, MessageBarBody, MessageBarIntent};

/// Latest notification message plus the timer that hides it again.
#[derive(Clone, Copy)]
pub struct NotificationInjection {
    message: RwSignal<Option<String>>,
    timeout: StoredValue<Option<TimeoutHandle>>,
}

impl NotificationInjection {
    pub fn provide() -> Self {
        let notification = Self {
            message: RwSignal::new(None),
            timeout: StoredValue::new(None),
        };
        provide_context(notification);
        notification
    }

    #[track_caller]
    pub fn expect_context() -> Self {
        expect_context::<Self>()
    }

    /// Shows `message`, replacing any message still on screen. The hide
    /// timer restarts so the new message stays for the full duration.
    pub fn notify(&self, message: String) {
        if let Some(handle) = self.timeout.get_value() {
            handle.clear();
        }
        log::debug!("Notify: {}", message);
        self.message.set(Some(message));
        let shown = self.message;
        match set_timeout_with_handle(move || shown.set(None), NOTIFICATION_DURATION) {
            Ok(handle) => self.timeout.set_value(Some(handle)),
            Err(e) => {
                self.timeout.set_value(None);
                log::error!("Failed to schedule hiding the notification: {e:?}");
            }
        }
    }
}

#[component]
pub fn Notification() -> impl IntoView {
    let message = NotificationInjection::expect_context().message;
    view! {
        <Show
            when=move || message.with(Option::is_some)
            fallback=|| view! { <div class="hidden" /> }
        >
            <MessageBar class="notification" intent=MessageBarIntent::Success>
                <MessageBarBody>{move || message.get().unwrap_or_default()}</MessageBarBody>
            </MessageBar>
        </Show>
    }
}
