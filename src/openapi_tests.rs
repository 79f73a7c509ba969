#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();
        assert!(components.schemas.contains_key("WeatherForecast"));
        assert!(components.schemas.contains_key("HealthResponse"));

        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_forecast_path_is_documented() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.paths.paths.contains_key("/weatherforecast"));
        assert!(openapi.paths.paths.contains_key("/health"));
    }

    #[test]
    fn test_weather_forecast_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let schema = components.schemas.get("WeatherForecast").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = schema {
            let properties = &obj.properties;
            assert!(properties.contains_key("date"));
            assert!(properties.contains_key("summary"));
            assert!(properties.contains_key("temperatureC"));
            assert!(properties.contains_key("temperatureF"));
            assert!(obj.required.contains(&"temperatureC".to_string()));
            assert!(!obj.required.contains(&"summary".to_string()));
        } else {
            panic!("WeatherForecast should be an object schema");
        }
    }
}
