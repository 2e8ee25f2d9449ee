use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::keyboard_nav;
use crate::shared::notice::{NoticeHost, NoticeService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Configuration: embedded defaults plus the optional page override
    provide_context(load_config());

    // One notice dialog for the whole page
    provide_context(NoticeService::new());

    // Runs once, after the first render
    Effect::new(move |_| keyboard_nav::install());

    view! {
        <ConfigProvider>
            <AppRoutes />
            <NoticeHost />
        </ConfigProvider>
    }
}
