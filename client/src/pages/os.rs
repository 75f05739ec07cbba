//! OS-styled dashboard variant: a terminal window with a file-tree nav.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell owns the clock ticker. Section selection lives in `NavState`
//! (context) and the content pane is a direct mapping from it.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::nav_tree::NavTree;
use crate::components::terminal::{TerminalStatusBar, TerminalWindow};
use crate::content::SITE_TITLE;
use crate::pages::os_views::render_view;
use crate::state::nav::NavState;
use crate::util::clock::format_clock;
use crate::util::data_string;

#[component]
pub fn OsPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let clock = RwSignal::new(format_clock(None));
    let data = RwSignal::new(data_string::placeholder());

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::util::clock::{CLOCK_TICK_MS, ClockTime};
        use crate::util::data_string::{DATA_CHUNK_LEN, DATA_STRING_LEN, chunked, generate};

        let tick_alive = Arc::new(AtomicBool::new(true));
        let tick_alive_task = tick_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                clock.set(format_clock(ClockTime::now()));
                data.set(chunked(&generate(DATA_STRING_LEN, crate::util::random::unit), DATA_CHUNK_LEN));
                gloo_timers::future::sleep(std::time::Duration::from_millis(CLOCK_TICK_MS)).await;
                if !tick_alive_task.load(Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || tick_alive.store(false, Ordering::Relaxed));
    }

    let view_for_nav = move || nav.get().content_view();
    let path = Signal::derive(move || nav.get().active_path());

    view! {
        <Title text=format!("{SITE_TITLE} // OS")/>
        <div class="os">
            <TerminalWindow title="launchpad — zsh">
                <div class="os__body">
                    <NavTree/>
                    <section class="os__pane">
                        <div class="os__prompt">
                            <span class="os__prompt-sigil">"$"</span>
                            {move || view_for_nav().command()}
                        </div>
                        {move || render_view(view_for_nav())}
                    </section>
                </div>
                <TerminalStatusBar path=path data=data clock=clock/>
            </TerminalWindow>
        </div>
    }
}
