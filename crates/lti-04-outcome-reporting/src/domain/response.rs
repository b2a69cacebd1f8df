//! # Outcome Responses
//!
//! Pulls the status and (for reads) the score out of an
//! `imsx_POXEnvelopeResponse`. Only the first occurrence of each field counts.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::errors::OutcomeError;

const INVALID_XML: &str = "The server responded with an invalid XML document";
const INVALID_SCORE: &str = "Invalid score response";

const CODE_MAJOR_PATH: &[&str] = &[
    "imsx_POXEnvelopeResponse",
    "imsx_POXHeader",
    "imsx_POXResponseHeaderInfo",
    "imsx_statusInfo",
    "imsx_codeMajor",
];

const DESCRIPTION_PATH: &[&str] = &[
    "imsx_POXEnvelopeResponse",
    "imsx_POXHeader",
    "imsx_POXResponseHeaderInfo",
    "imsx_statusInfo",
    "imsx_description",
];

const SCORE_PATH: &[&str] = &[
    "imsx_POXEnvelopeResponse",
    "imsx_POXBody",
    "readResultResponse",
    "result",
    "resultScore",
    "textString",
];

/// Fields of interest in a response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeResponse {
    pub code_major: Option<String>,
    pub description: Option<String>,
    pub score: Option<String>,
}

impl OutcomeResponse {
    pub fn is_success(&self) -> bool {
        self.code_major.as_deref() == Some("success")
    }

    /// `Ok` for success, otherwise the consumer's description verbatim.
    pub fn into_result(self) -> Result<Self, OutcomeError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(OutcomeError::ProtocolResponse(
                self.description.unwrap_or_default(),
            ))
        }
    }

    /// Score of a read result.
    pub fn read_score(&self) -> Result<f64, OutcomeError> {
        self.score
            .as_deref()
            .and_then(|text| text.parse::<f64>().ok())
            .filter(|score| !score.is_nan())
            .ok_or_else(|| OutcomeError::ProtocolResponse(INVALID_SCORE.into()))
    }
}

fn invalid_xml() -> OutcomeError {
    OutcomeError::ProtocolResponse(INVALID_XML.into())
}

/// Parses a response body. Does not check the status; see `into_result`.
pub fn parse_response(xml: &str) -> Result<OutcomeResponse, OutcomeError> {
    let mut reader = Reader::from_str(xml);
    let mut path: Vec<String> = Vec::new();
    let mut saw_root = false;
    let mut response = OutcomeResponse::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if path.is_empty() {
                    if saw_root {
                        return Err(invalid_xml());
                    }
                    saw_root = true;
                }
                path.push(String::from_utf8_lossy(start.local_name().as_ref()).into_owned());
            }
            Ok(Event::Empty(_)) => {
                if path.is_empty() {
                    if saw_root {
                        return Err(invalid_xml());
                    }
                    saw_root = true;
                }
            }
            Ok(Event::End(_)) => {
                path.pop();
            }
            Ok(Event::Text(text)) => {
                let text = text.unescape().map_err(|_| invalid_xml())?;
                let text = text.trim();
                if path.is_empty() {
                    if !text.is_empty() {
                        return Err(invalid_xml());
                    }
                    continue;
                }
                capture(&mut response, &path, text);
            }
            Ok(Event::CData(data)) => {
                let text = String::from_utf8_lossy(&data).trim().to_string();
                capture(&mut response, &path, &text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(_) => return Err(invalid_xml()),
        }
    }

    if !saw_root || !path.is_empty() {
        return Err(invalid_xml());
    }

    Ok(response)
}

fn capture(response: &mut OutcomeResponse, path: &[String], text: &str) {
    let slot = if path_is(path, CODE_MAJOR_PATH) {
        &mut response.code_major
    } else if path_is(path, DESCRIPTION_PATH) {
        &mut response.description
    } else if path_is(path, SCORE_PATH) {
        &mut response.score
    } else {
        return;
    };

    if slot.is_none() {
        *slot = Some(text.to_string());
    }
}

fn path_is(path: &[String], expected: &[&str]) -> bool {
    path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a == b)
}
