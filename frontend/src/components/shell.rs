use crate::auth::{load_current_user, sign_out, use_auth};
use crate::config::use_config;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 受保护页面的公共外框：导航栏 + 当前用户 + 登出
#[component]
pub fn AppShell(route: AppRoute, children: Children) -> impl IntoView {
    let auth = use_auth();
    let config = use_config();

    if auth.state.get_untracked().user.is_none() {
        spawn_local(async move {
            load_current_user(&auth, &config).await;
        });
    }

    let nav = AppRoute::NAV
        .into_iter()
        .map(|item| {
            let class = if item == route { "btn btn-ghost btn-active" } else { "btn btn-ghost" };
            view! { <Link to=item class=class>{item.title()}</Link> }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow">
                <div class="flex-1 gap-1">{nav}</div>
                <div class="flex-none gap-2">
                    <span class="text-sm text-base-content/70">
                        {move || auth.state.get().user.map(|u| u.username).unwrap_or_default()}
                    </span>
                    <button class="btn btn-outline btn-sm" on:click=move |_| sign_out(&auth)>
                        "退出登录"
                    </button>
                </div>
            </div>
            <main class="container mx-auto p-6">
                <h1 class="text-2xl font-bold mb-4">{route.title()}</h1>
                {children()}
            </main>
        </div>
    }
}
