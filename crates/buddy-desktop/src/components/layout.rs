//! # Layout Component
//!
//! Signed-on shell: the routed view plus every open chat window.

use buddy_core::{Point, SessionEvent, WindowSizer};
use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

use super::ChatWindow;
use crate::host::DesktopHost;
use crate::router::Route;
use crate::state::AppState;

/// Main layout wrapper component.
///
/// Chat windows float above the routed view and are dragged by pointer
/// events captured on the container.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// |  Buddy List (Outlet)                        |
/// |        +----------------------+             |
/// |        | Chat with Sarah    X |  <- drag    |
/// |        |  ...                 |             |
/// |        +----------------------+             |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Layout() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();
    let host = DesktopHost::new(use_window());

    if !state.is_logged_in() {
        nav.replace(Route::Login {});
    }

    // Size the window to its content on startup
    use_hook({
        let host = host.clone();
        move || {
            let sizer = WindowSizer::new(state.config.peek().window);
            sizer.log_scale_factor(host.scale_factor());
            // Failures are logged by the sizer; the UI carries on unsized.
            let _ = sizer.adjust(&host);
        }
    });

    // Re-apply the content size on every resize the host reports
    use_wry_event_handler({
        let host = host.clone();
        move |event, _| {
            if let Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } = event
            {
                let sizer = WindowSizer::new(state.config.peek().window);
                let _ = sizer.on_resized(&host, host.inner_size());
            }
        }
    });

    // Re-render message views whenever a session changes
    use_future(move || async move {
        let mut events = state.chat().store().subscribe();
        loop {
            match events.recv().await {
                Ok(SessionEvent::Appended { contact_id, message }) => {
                    tracing::trace!(contact_id, message_id = message.id, "Session updated");
                    *state.revision.write() += 1;
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Session events lagged");
                    *state.revision.write() += 1;
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let on_pointer_move = move |evt: MouseEvent| {
        let dragging = state
            .shell
            .peek()
            .windows()
            .iter()
            .any(|w| w.drag.is_dragging());
        if dragging {
            let pointer = evt.client_coordinates();
            if let Some(window) = state.shell.write().dragging_window_mut() {
                window.drag.pointer_move(Point::new(pointer.x, pointer.y));
            }
        }
    };

    let on_pointer_up = move |_: MouseEvent| {
        if let Some(window) = state.shell.write().dragging_window_mut() {
            window.drag.pointer_up();
        }
    };

    let open_chats = state.shell.read().open_chats();

    rsx! {
        div {
            class: "app-container",
            onmousemove: on_pointer_move,
            onmouseup: on_pointer_up,

            Outlet::<Route> {}

            for contact_id in open_chats {
                ChatWindow { key: "{contact_id}", contact_id }
            }
        }
    }
}
