use dioxus::prelude::*;

use ui::components::AppShell;
use ui::views::{Login, Register, Translator};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/registro")]
    Register {},
    #[route("/traductor")]
    Translator {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    ui::core::platform::init_logging();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Mobile bundles ship no separate asset directory.
        document::Style { "{MAIN_CSS_INLINE}" }
        AppShell {
            Router::<Route> {}
        }
    }
}
