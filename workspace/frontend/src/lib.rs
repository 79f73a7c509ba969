use yew::prelude::*;

pub mod api_client;
pub mod common;
pub mod components;
pub mod hooks;
pub mod settings;

use components::forecast::ForecastView;
use components::layout::layout::Layout;

#[function_component(App)]
pub fn app() -> Html {
    let settings = settings::get_settings();
    log::trace!("Rendering forecast page with locale {}", settings.locale);

    html! {
        <Layout>
            <ForecastView
                base_url={AttrValue::from(settings.api_base)}
                locale={AttrValue::from(settings.locale)}
            />
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Weatherview Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base: {:?}", settings.api_base);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn test_app_starts_in_loading_state_inside_layout() {
        let html = ServerRenderer::<App>::new().hydratable(false).render().await;

        assert!(html.contains("<div class=\"App\"><header class=\"App-header\">"));
        assert!(html.contains("Loading weather..."));
        assert!(!html.contains("<table"));
    }
}
