use dioxus::prelude::*;

use api::{EndpointConfig, RemoteDataSource};
use ui::components::AppNavbar;
use ui::dashboard::config::DisplayConfig;
use ui::views::DashboardPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    DashboardPage {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Written by the navbar's locale switcher; translated views read it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(|| RemoteDataSource::new(EndpointConfig::from_env()));
    use_context_provider(DisplayConfig::default);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Web-specific layout around the shared `AppNavbar`, so the outlet can use
/// this crate's `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
