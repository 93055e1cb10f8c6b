use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaSpinner;
use dioxus_free_icons::Icon;

#[component]
pub fn Spinner() -> Element {
    rsx!(
        div { class: "flex justify-center p-8",
            Icon {
                class: "animate-spin",
                width: 32,
                height: 32,
                icon: FaSpinner
            }
        }
    )
}
