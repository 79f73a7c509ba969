use yew::prelude::*;

use super::table::ForecastTable;
use crate::api_client::weather_forecast::fetch_forecasts;
use crate::common::fetch_hook::use_load_once;
use crate::common::loading::Loading;
use crate::hooks::LoadState;

#[derive(Properties, PartialEq)]
pub struct ForecastViewProps {
    /// Base location of the backend, empty for same origin
    #[prop_or_default]
    pub base_url: AttrValue,
    /// BCP-47 tag used for date formatting
    #[prop_or(AttrValue::Static("en-US"))]
    pub locale: AttrValue,
}

/// Loads the forecast once after mount and shows it as a table.
///
/// Stays on the loading placeholder until the load succeeds; a failed load
/// is only logged.
#[function_component(ForecastView)]
pub fn forecast_view(props: &ForecastViewProps) -> Html {
    let base_url = props.base_url.clone();
    let forecasts = use_load_once(move |signal| async move {
        fetch_forecasts(&base_url, signal.as_ref()).await
    });

    match &*forecasts {
        LoadState::Loading => html! { <Loading /> },
        LoadState::Loaded(list) => html! {
            <ForecastTable forecasts={list.clone()} locale={props.locale.clone()} />
        },
    }
}
