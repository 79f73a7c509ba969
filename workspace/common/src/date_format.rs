//! Date parsing and locale-aware calendar date formatting for forecast rows.

use chrono::{DateTime, FixedOffset, Locale, NaiveDate, NaiveDateTime, NaiveTime};

/// Parses an ISO-8601 date-time as sent by the forecast endpoint.
///
/// Accepted shapes:
/// - RFC 3339 with an offset (`2024-05-01T00:00:00Z`, `2024-05-01T09:30:00+02:00`)
/// - date-time without an offset, taken as UTC (`2024-05-01T00:00:00.1234567`)
/// - bare calendar date, taken as midnight UTC (`2024-05-01`)
///
/// The offset is kept as received so the calendar date shown to the user is
/// the one written in the payload.
pub fn parse_date_time(raw: &str) -> Result<DateTime<FixedOffset>, String> {
    let raw = raw.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date_time);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc().into());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().into());
    }

    Err(format!("Failed to parse date '{}' as ISO-8601", raw))
}

/// Formats the calendar date of `date` for the given BCP-47 language tag
/// (`en-US`, `de`, `fr_CA`, ...). Only the date portion is rendered.
///
/// Tags without locale data fall back to `YYYY-MM-DD`.
pub fn format_calendar_date(date: &DateTime<FixedOffset>, locale_tag: &str) -> String {
    match resolve_locale(locale_tag) {
        Some(locale) => date.format_localized("%x", locale).to_string(),
        None => date.format("%Y-%m-%d").to_string(),
    }
}

fn resolve_locale(tag: &str) -> Option<Locale> {
    let normalized = tag.trim().replace('-', "_");
    let (language, region) = match normalized.split_once('_') {
        Some((language, region)) => (language.to_ascii_lowercase(), Some(region.to_ascii_uppercase())),
        None => (normalized.to_ascii_lowercase(), None),
    };

    let locale = match (language.as_str(), region.as_deref()) {
        ("en", Some("GB")) => Locale::en_GB,
        ("en", Some("CA")) => Locale::en_CA,
        ("en", Some("AU")) => Locale::en_AU,
        ("en", _) => Locale::en_US,
        ("de", Some("AT")) => Locale::de_AT,
        ("de", Some("CH")) => Locale::de_CH,
        ("de", _) => Locale::de_DE,
        ("fr", Some("CA")) => Locale::fr_CA,
        ("fr", _) => Locale::fr_FR,
        ("es", _) => Locale::es_ES,
        ("it", _) => Locale::it_IT,
        ("nl", _) => Locale::nl_NL,
        ("pt", Some("BR")) => Locale::pt_BR,
        ("pt", _) => Locale::pt_PT,
        ("cs", _) => Locale::cs_CZ,
        ("pl", _) => Locale::pl_PL,
        ("ja", _) => Locale::ja_JP,
        _ => return None,
    };

    Some(locale)
}

/// Serde adapter keeping the wire format of forecast dates in one place.
pub(crate) mod iso_date_time {
    use chrono::{DateTime, FixedOffset, SecondsFormat};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date_time(&raw).map_err(de::Error::custom)
    }
}
