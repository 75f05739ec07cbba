//! Terminal window chrome for the OS-styled variant.

use leptos::prelude::*;

/// Window frame with traffic-light dots and a title bar.
#[component]
pub fn TerminalWindow(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="terminal">
            <div class="terminal__titlebar">
                <span class="terminal__dot terminal__dot--red"></span>
                <span class="terminal__dot terminal__dot--yellow"></span>
                <span class="terminal__dot terminal__dot--green"></span>
                <span class="terminal__title">{title}</span>
            </div>
            {children()}
        </div>
    }
}

/// Bottom line showing the active path, a decorative data string and the clock.
#[component]
pub fn TerminalStatusBar(
    #[prop(into)] path: Signal<String>,
    #[prop(into)] data: Signal<String>,
    #[prop(into)] clock: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="terminal__status">
            <span class="terminal__status-item">{move || path.get()}</span>
            <span class="terminal__status-spacer"></span>
            <span class="terminal__status-item terminal__status-item--muted">"SIG " {move || data.get()}</span>
            <span class="terminal__status-divider"></span>
            <span class="terminal__status-item">{move || clock.get()}</span>
        </div>
    }
}
