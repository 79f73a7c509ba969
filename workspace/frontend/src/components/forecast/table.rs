use common::{format_calendar_date, WeatherForecast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ForecastTableProps {
    pub forecasts: Vec<WeatherForecast>,
    /// BCP-47 tag used for the date column
    pub locale: AttrValue,
}

/// Forecast rows in server order, one row per entry keyed by its date
#[function_component(ForecastTable)]
pub fn forecast_table(props: &ForecastTableProps) -> Html {
    log::trace!("Rendering forecast table with {} rows", props.forecasts.len());

    html! {
        <table class="forecast-table">
            <thead>
                <tr>
                    <th>{"Date"}</th>
                    <th>{"Summary"}</th>
                    <th>{"Centigrade"}</th>
                    <th>{"Fahrenheit"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.forecasts.iter().map(|forecast| {
                    html! {
                        <tr key={forecast.date.to_rfc3339()}>
                            <td>{format_calendar_date(&forecast.date, &props.locale)}</td>
                            <td>{forecast.summary.clone().unwrap_or_default()}</td>
                            <td>{forecast.temperature_c}</td>
                            <td>{forecast.temperature_f}</td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
