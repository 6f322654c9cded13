use crate::auth::{sign_in, sign_up, use_auth};
use crate::config::use_config;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use scoutlens_shared::RegisterRequest;

/// 表单校验，返回错误提示
fn validate(username: &str, password: &str, confirm: Option<&str>) -> Option<&'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Some("用户名和密码不能为空");
    }
    match confirm {
        Some("") => Some("请确认密码"),
        Some(confirm) if confirm != password => Some("两次输入的密码不一致"),
        _ => None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let config = StoredValue::new(use_config());
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (register_mode, set_register_mode) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let registering = register_mode.get();
        let (name, pass, again) = (username.get(), password.get(), confirm.get());

        if let Some(msg) = validate(&name, &pass, registering.then_some(again.as_str())) {
            set_error_msg.set(Some(msg.to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let config = config.get_value();
            let result = if registering {
                let request = RegisterRequest {
                    username: name.trim().to_string(),
                    password: pass,
                    confirm_password: again,
                };
                sign_up(&auth, &config, request).await
            } else {
                sign_in(&auth, &config, name.trim().to_string(), pass).await
            };

            match result {
                Ok(_) => router.navigate(AppRoute::auth_success_redirect().to_path()),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"ScoutLens"</h1>
                    <p class="text-base-content/70">
                        {move || if register_mode.get() { "创建账号" } else { "登录以继续" }}
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"用户名"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <Show when=move || register_mode.get()>
                            <div class="form-control">
                                <label class="label" for="confirm">
                                    <span class="label-text">"确认密码"</span>
                                </label>
                                <input
                                    id="confirm"
                                    type="password"
                                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                    prop:value=confirm
                                    class="input input-bordered"
                                />
                            </div>
                        </Show>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || match (is_submitting.get(), register_mode.get()) {
                                    (true, _) => "请稍候...",
                                    (false, true) => "注册",
                                    (false, false) => "登录",
                                }}
                            </button>
                        </div>
                        <button
                            type="button"
                            class="btn btn-link btn-sm"
                            on:click=move |_| {
                                set_error_msg.set(None);
                                set_register_mode.update(|m| *m = !*m);
                            }
                        >
                            {move || if register_mode.get() { "已有账号？去登录" } else { "没有账号？注册" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
