use crate::application::registry::FormatterRegistry;
use crate::ports::outbound::{Formatter, FormatterClass, FormatterContext};
use crate::report::domain::{AnalysisResult, Header, LifecycleState};
use crate::shared::{FormatterResult, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

const HAR_VERSION: &str = "1.2";

/// Registers the HAR formatter
pub(super) fn register(registry: &mut FormatterRegistry) -> FormatterResult<()> {
    registry.register::<HarFormatter>()
}

#[derive(Serialize)]
struct Har {
    log: HarLog,
}

#[derive(Serialize)]
struct HarLog {
    version: &'static str,
    creator: HarCreator,
    entries: Vec<HarEntry>,
}

#[derive(Serialize)]
struct HarCreator {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HarEntry {
    started_date_time: String,
    time: i64,
    request: HarRequest,
    response: HarResponse,
    cache: serde_json::Map<String, serde_json::Value>,
    timings: HarTimings,
    #[serde(rename = "_red_messages")]
    red_messages: Vec<HarMessage>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HarRequest {
    method: &'static str,
    url: String,
    http_version: &'static str,
    headers: Vec<HarHeader>,
    query_string: Vec<HarHeader>,
    cookies: Vec<HarHeader>,
    headers_size: i64,
    body_size: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HarResponse {
    status: u16,
    status_text: String,
    http_version: &'static str,
    headers: Vec<HarHeader>,
    cookies: Vec<HarHeader>,
    content: HarContent,
    #[serde(rename = "redirectURL")]
    redirect_url: String,
    headers_size: i64,
    body_size: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HarContent {
    size: usize,
    mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Serialize)]
struct HarTimings {
    send: i64,
    wait: i64,
    receive: i64,
}

#[derive(Serialize)]
struct HarHeader {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct HarMessage {
    level: String,
    summary: String,
}

fn har_headers(headers: &[Header]) -> Vec<HarHeader> {
    headers
        .iter()
        .map(|header| HarHeader {
            name: header.name.clone(),
            value: header.value.clone(),
        })
        .collect()
}

/// HTTP Archive (HAR 1.2) document with one entry per analyzed resource
///
/// Body samples are collected while feeding and attached as the response
/// content of the entry for the context URI.
pub struct HarFormatter {
    context: FormatterContext,
    state: LifecycleState,
    started: String,
    body: Vec<u8>,
}

impl HarFormatter {
    const TYPE_NAME: &'static str = "HarFormatter";

    fn build_entry(&self, subject: &AnalysisResult) -> HarEntry {
        let location = subject
            .response_headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case("location"))
            .map(|header| header.value.clone())
            .unwrap_or_default();
        let mime_type = subject
            .response_headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case("content-type"))
            .map(|header| header.value.clone())
            .unwrap_or_default();
        let (size, text) = if subject.uri == self.context.uri && !self.body.is_empty() {
            (
                self.body.len(),
                Some(String::from_utf8_lossy(&self.body).into_owned()),
            )
        } else {
            (0, None)
        };

        HarEntry {
            started_date_time: self.started.clone(),
            time: 0,
            request: HarRequest {
                method: "GET",
                url: subject.uri.clone(),
                http_version: "HTTP/1.1",
                headers: har_headers(&self.context.request_headers),
                query_string: Vec::new(),
                cookies: Vec::new(),
                headers_size: -1,
                body_size: -1,
            },
            response: HarResponse {
                status: subject.status_code.unwrap_or(0),
                status_text: subject.status_phrase.clone().unwrap_or_default(),
                http_version: "HTTP/1.1",
                headers: har_headers(&subject.response_headers),
                cookies: Vec::new(),
                content: HarContent {
                    size,
                    mime_type,
                    text,
                },
                redirect_url: location,
                headers_size: -1,
                body_size: size as i64,
            },
            cache: serde_json::Map::new(),
            timings: HarTimings {
                send: 0,
                wait: 0,
                receive: 0,
            },
            red_messages: subject
                .notes
                .iter()
                .map(|note| HarMessage {
                    level: note.level.to_string(),
                    summary: note.summary.clone(),
                })
                .collect(),
        }
    }
}

impl Formatter for HarFormatter {
    fn feed(&mut self, _result: &AnalysisResult, sample: &[u8]) -> Result<()> {
        self.state.feed(Self::TYPE_NAME)?;
        self.body.extend_from_slice(sample);
        Ok(())
    }

    fn start_output(&mut self) -> Result<()> {
        self.state.start(Self::TYPE_NAME)?;
        self.started = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        Ok(())
    }

    fn status(&mut self, _message: &str) -> Result<()> {
        self.state.status(Self::TYPE_NAME)?;
        Ok(())
    }

    fn finish_output(&mut self, result: &AnalysisResult) -> Result<()> {
        self.state.finish(Self::TYPE_NAME)?;
        let har = Har {
            log: HarLog {
                version: HAR_VERSION,
                creator: HarCreator {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                },
                entries: result
                    .rendered_subjects()
                    .into_iter()
                    .map(|subject| self.build_entry(subject))
                    .collect(),
            },
        };
        let mut json = serde_json::to_string_pretty(&har)?;
        json.push('\n');
        self.context.write(&json)
    }
}

impl FormatterClass for HarFormatter {
    const NAME: Option<&'static str> = Some("har");
    const MEDIA_TYPE: &'static str = "application/json";
    const CAN_MULTIPLE: bool = true;

    fn create(context: FormatterContext) -> Self {
        Self {
            context,
            state: LifecycleState::default(),
            started: String::new(),
            body: Vec::new(),
        }
    }
}
