use leptos::prelude::*;
use scoutlens_frontend::{App, AppConfig, logging};

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    log::info!(target: "app", "starting, api base = {:?}", config.api.base_url());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
