//! Root component: context setup, device profiling, section composition.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::cursor::Cursor;
use crate::components::design::DesignCreativity;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::loading_screen::LoadingScreen;
use crate::components::navigation::Navigation;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::config;
use crate::state::ui::UiState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    #[cfg(feature = "csr")]
    {
        use crate::util::viewport;

        let apply_profile = move || {
            let (mobile, low_power) = viewport::detect();
            ui.update(|state| {
                state.mobile = mobile;
                state.low_power = low_power;
            });
        };
        apply_profile();
        let handle = window_event_listener(leptos::ev::resize, move |_| apply_profile());
        on_cleanup(move || handle.remove());
    }

    view! {
        <Title text=config::SITE_TITLE />
        <LoadingScreen />
        <Cursor />
        <Navigation />
        <main>
            <Hero />
            <About />
            <Projects />
            <Skills />
            <DesignCreativity />
            <Contact />
        </main>
        <Footer />
    }
}
