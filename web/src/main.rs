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

fn main() {
    ui::core::platform::init_logging();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        AppShell {
            Router::<Route> {}
        }
    }
}
