use yew::prelude::*;
use yew_router::prelude::*;
use shared::landing::SidebarProfile;
use crate::{Route, styles::*, config::CONFIG};

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let profile = use_memo(
        |_| SidebarProfile::new(CONFIG.app_name, CONFIG.user_name, CONFIG.recent_projects),
        (),
    );

    html! {
        <aside class={SIDEBAR}>
            <div class={SIDEBAR_HEADER}>
                <div class="flex items-center gap-3 text-lg font-semibold">
                    <div class={AVATAR}>{"AI"}</div>
                    <div>{&profile.app_name}</div>
                </div>
                <Link<Route> to={Route::Home}
                    classes="block w-full text-center rounded-lg border border-slate-600 py-2 text-sm hover:bg-slate-800">
                    {"+ New Chat"}
                </Link<Route>>
            </div>

            <div class={SIDEBAR_SECTION}>
                <div class="px-3 pb-2 text-xs uppercase tracking-wide text-slate-400">{"Recent Projects"}</div>
                {for profile.recent_projects.iter().map(|project| html! {
                    <Link<Route> to={Route::Results} classes={classes!(PROJECT_ITEM)}>{project}</Link<Route>>
                })}
            </div>

            <div class={SIDEBAR_FOOTER}>
                <div class={AVATAR}>{&profile.user_initial}</div>
                <div class="text-sm">{&profile.user_name}</div>
            </div>
        </aside>
    }
}
