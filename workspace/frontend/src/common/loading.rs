use yew::prelude::*;

pub const LOADING_TEXT: &str = "Loading weather...";

/// Plain text placeholder shown while a load is in flight
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <p class="loading-placeholder">{LOADING_TEXT}</p>
    }
}
