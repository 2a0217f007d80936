//! Holiday data source backed by the api-harilibur JSON API.

use crate::calendar::HolidayRecord;
use crate::error::{WorkdayError, WorkdayResult};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::env;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api-harilibur.vercel.app/api";

/// Anything that can yield the holiday records for one month.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch(&self, month: u32, year: i32) -> WorkdayResult<Vec<HolidayRecord>>;
}

/// One record as the API emits it. Every field is optional so that a missing
/// key is rejected here with a named field instead of surfacing as an opaque
/// deserialization error.
#[derive(Deserialize, Debug)]
struct RawHoliday {
    holiday_date: Option<String>,
    holiday_name: Option<String>,
    is_national_holiday: Option<bool>,
}

impl RawHoliday {
    fn validate(self) -> WorkdayResult<HolidayRecord> {
        let date = self
            .holiday_date
            .ok_or_else(|| WorkdayError::MalformedData("record missing holiday_date".to_string()))?;
        let name = self
            .holiday_name
            .ok_or_else(|| WorkdayError::MalformedData("record missing holiday_name".to_string()))?;
        let national = self.is_national_holiday.ok_or_else(|| {
            WorkdayError::MalformedData("record missing is_national_holiday".to_string())
        })?;
        // The API emits unpadded dates such as 2024-1-1; %m and %d accept
        // one or two digits. Parsed as a plain calendar date, never through
        // local time.
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
            WorkdayError::MalformedData(format!("bad holiday_date {:?}: {}", date, e))
        })?;
        Ok(HolidayRecord {
            date,
            name,
            national,
        })
    }
}

/// Parse an API payload, keeping only records dated in the requested month.
/// The API pads its response with neighboring-month records around month
/// boundaries.
pub fn parse_holidays(body: &str, month: u32, year: i32) -> WorkdayResult<Vec<HolidayRecord>> {
    let raw: Vec<RawHoliday> = serde_json::from_str(body)
        .map_err(|e| WorkdayError::MalformedData(format!("invalid holiday payload: {}", e)))?;
    let mut records = Vec::with_capacity(raw.len());
    for r in raw {
        let record = r.validate()?;
        if record.date.month() == month && record.date.year() == year {
            records.push(record);
        }
    }
    Ok(records)
}

/// HTTP client for <https://api-harilibur.vercel.app>.
pub struct HariliburClient {
    http: reqwest::Client,
    base_url: String,
}

impl HariliburClient {
    /// Create a client against the public API. The base URL can be
    /// overridden with the `HARILIBUR_BASE_URL` environment variable.
    pub fn new() -> HariliburClient {
        let base_url =
            env::var("HARILIBUR_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> HariliburClient {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");
        HariliburClient {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HariliburClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HolidaySource for HariliburClient {
    async fn fetch(&self, month: u32, year: i32) -> WorkdayResult<Vec<HolidayRecord>> {
        let url = format!("{}?month={}&year={}", self.base_url, month, year);
        debug!("fetching holidays from {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                WorkdayError::FetchError(format!("connection timeout: {}", e))
            } else if e.is_connect() {
                WorkdayError::FetchError(format!("connection failed: {}", e))
            } else {
                WorkdayError::FetchError(format!("network error: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WorkdayError::FetchError(format!(
                "holiday API returned HTTP {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WorkdayError::FetchError(format!("failed to read response body: {}", e)))?;
        parse_holidays(&body, month, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::from_ymd;

    #[test]
    fn parses_records_and_filters_other_months() {
        // December payloads carry January 1st of the following year
        let body = r#"[
  {
    "holiday_date": "2025-1-1",
    "holiday_name": "Tahun Baru Masehi",
    "is_national_holiday": true
  },
  {
    "holiday_date": "2024-12-25",
    "holiday_name": "Hari Raya Natal",
    "is_national_holiday": true
  },
  {
    "holiday_date": "2024-12-26",
    "holiday_name": "Cuti Bersama Hari Raya Natal",
    "is_national_holiday": false
  }
]"#;
        let records = parse_holidays(body, 12, 2024).unwrap();
        assert_eq!(2, records.len());
        assert_eq!(from_ymd(2024, 12, 25), records[0].date);
        assert_eq!("Hari Raya Natal", records[0].name);
        assert_eq!(true, records[0].national);
        assert_eq!(false, records[1].national);
    }

    #[test]
    fn unpadded_dates_parse() {
        let body = r#"[{"holiday_date": "2024-8-17", "holiday_name": "Hari Kemerdekaan", "is_national_holiday": true}]"#;
        let records = parse_holidays(body, 8, 2024).unwrap();
        assert_eq!(from_ymd(2024, 8, 17), records[0].date);
    }

    #[test]
    fn missing_field_is_rejected() {
        let body = r#"[{"holiday_date": "2024-8-17", "is_national_holiday": true}]"#;
        let err = parse_holidays(body, 8, 2024).unwrap_err();
        assert!(matches!(err, WorkdayError::MalformedData(_)));
        assert!(err.to_string().contains("holiday_name"));
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let body = r#"[{"holiday_date": "17 Agustus 2024", "holiday_name": "Hari Kemerdekaan", "is_national_holiday": true}]"#;
        assert!(matches!(
            parse_holidays(body, 8, 2024),
            Err(WorkdayError::MalformedData(_))
        ));
    }

    #[test]
    fn non_array_payload_is_rejected() {
        assert!(matches!(
            parse_holidays(r#"{"error": "oops"}"#, 8, 2024),
            Err(WorkdayError::MalformedData(_))
        ));
    }

    #[test]
    fn empty_payload_is_not_an_error() {
        let records = parse_holidays("[]", 8, 2024).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn base_url_override() {
        let client = HariliburClient::with_base_url("http://localhost:8080/api");
        assert_eq!("http://localhost:8080/api", client.base_url());
    }

    #[test]
    fn holiday_record_serde_round_trip() {
        let record = HolidayRecord {
            date: from_ymd(2024, 12, 25),
            name: "Hari Raya Natal".to_string(),
            national: true,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            r#"{"holiday_date":"2024-12-25","holiday_name":"Hari Raya Natal","is_national_holiday":true}"#,
            json
        );
        let back: HolidayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
