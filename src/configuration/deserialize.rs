pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    /// Reads an optional ISO-8601 timestamp. Values that can't be parsed are
    /// dropped with a warning instead of failing the whole report.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(|v| v.and_then(|raw| parse(&raw)))
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            Ok(naive) => Some(DateTime::from_utc(naive, Utc)),
            Err(err) => {
                warn!("Ignoring timestamp '{}': {}", raw, err);
                None
            }
        }
    }
}

pub mod status {
    use crate::reporter::allure::model::status::Status;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Status>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)
            .map(|v| v.map(|raw| Status::from_source(raw.as_str())))
    }
}
