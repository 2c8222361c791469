//! フッター（現在年と作家名）

use atelier_common::ViewState;
use leptos::prelude::*;

use crate::translate::tr;

#[component]
pub fn Footer(state: RwSignal<ViewState>) -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <small>
                <span id="year">{format!("\u{00a9} {} ", year)}</span>
                {move || tr(state, "site.artist", "Atelier")}
            </small>
        </footer>
    }
}
