//! # Outcome Documents
//!
//! `imsx_POXEnvelopeRequest` builders for replace/read/delete result calls.
//!
//! ```text
//! imsx_POXEnvelopeRequest
//! ├── imsx_POXHeader/imsx_POXRequestHeaderInfo
//! │   ├── imsx_version            V1.0
//! │   └── imsx_messageIdentifier
//! └── imsx_POXBody/{op}ResultRequest/resultRecord
//!     ├── sourcedGUID/sourcedId
//!     └── result                  (replace only)
//!         ├── resultScore/{language,textString}
//!         └── resultData/{text|url}
//! ```

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};

use super::errors::OutcomeError;

/// Namespace of the outcome request envelope.
pub const OUTCOME_NAMESPACE: &str = "http://www.imsglobal.org/services/ltiv1p1/xsd/imsoms_v1p0";

const DEFAULT_LANGUAGE: &str = "en";

/// Which result call a document makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultOperation {
    Replace,
    Read,
    Delete,
}

impl ResultOperation {
    fn request_element(self) -> &'static str {
        match self {
            ResultOperation::Replace => "replaceResultRequest",
            ResultOperation::Read => "readResultRequest",
            ResultOperation::Delete => "deleteResultRequest",
        }
    }
}

/// Optional result payload attached to a replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultData {
    Text(String),
    Url(String),
}

impl ResultData {
    /// Data kind as advertised in `ext_outcome_data_values_accepted`.
    pub fn kind(&self) -> &'static str {
        match self {
            ResultData::Text(_) => "text",
            ResultData::Url(_) => "url",
        }
    }

    fn value(&self) -> &str {
        match self {
            ResultData::Text(value) | ResultData::Url(value) => value,
        }
    }
}

/// One outcome request, validated as it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeDocument {
    operation: ResultOperation,
    source_did: String,
    language: String,
    /// `None` accepts every payload kind.
    result_data_types: Option<Vec<String>>,
    score: Option<f64>,
    payload: Option<ResultData>,
}

impl OutcomeDocument {
    fn new(operation: ResultOperation, source_did: impl Into<String>) -> Self {
        Self {
            operation,
            source_did: source_did.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            result_data_types: None,
            score: None,
            payload: None,
        }
    }

    pub fn replace(source_did: impl Into<String>) -> Self {
        Self::new(ResultOperation::Replace, source_did)
    }

    pub fn read(source_did: impl Into<String>) -> Self {
        Self::new(ResultOperation::Read, source_did)
    }

    pub fn delete(source_did: impl Into<String>) -> Self {
        Self::new(ResultOperation::Delete, source_did)
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Restricts payloads to the kinds the consumer accepts.
    #[must_use]
    pub fn with_result_data_types(mut self, types: Vec<String>) -> Self {
        self.result_data_types = Some(types);
        self
    }

    pub fn operation(&self) -> ResultOperation {
        self.operation
    }

    pub fn score(&self) -> Option<f64> {
        self.score
    }

    pub fn payload(&self) -> Option<&ResultData> {
        self.payload.as_ref()
    }

    /// Sets the score.
    ///
    /// # Errors
    /// `Parameter` unless `score` is finite and within `0.0..=1.0`.
    pub fn add_score(&mut self, score: f64) -> Result<(), OutcomeError> {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(OutcomeError::Parameter(
                "Score must be a floating point number >= 0 and <= 1".into(),
            ));
        }
        self.score = Some(score);
        Ok(())
    }

    pub fn add_text(&mut self, text: impl Into<String>) -> Result<(), OutcomeError> {
        self.add_payload(ResultData::Text(text.into()))
    }

    pub fn add_url(&mut self, url: impl Into<String>) -> Result<(), OutcomeError> {
        self.add_payload(ResultData::Url(url.into()))
    }

    /// Attaches the single result payload.
    ///
    /// # Errors
    /// `Extension` when a payload is already set or the kind is not accepted.
    pub fn add_payload(&mut self, payload: ResultData) -> Result<(), OutcomeError> {
        if self.payload.is_some() {
            return Err(OutcomeError::Extension(
                "Result data payload has already been set".into(),
            ));
        }
        if !self.supports_result_data(payload.kind()) {
            return Err(OutcomeError::Extension(
                "Result data type is not supported".into(),
            ));
        }
        self.payload = Some(payload);
        Ok(())
    }

    fn supports_result_data(&self, kind: &str) -> bool {
        match &self.result_data_types {
            None => true,
            Some(types) => types.iter().any(|t| t == kind),
        }
    }

    /// Serializes the document with the given message identifier.
    pub fn to_xml(&self, message_id: &str) -> Result<String, OutcomeError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;

        let mut envelope = BytesStart::new("imsx_POXEnvelopeRequest");
        envelope.push_attribute(("xmlns", OUTCOME_NAMESPACE));
        writer.write_event(Event::Start(envelope)).map_err(xml_error)?;

        open(&mut writer, "imsx_POXHeader")?;
        open(&mut writer, "imsx_POXRequestHeaderInfo")?;
        text_element(&mut writer, "imsx_version", "V1.0")?;
        text_element(&mut writer, "imsx_messageIdentifier", message_id)?;
        close(&mut writer, "imsx_POXRequestHeaderInfo")?;
        close(&mut writer, "imsx_POXHeader")?;

        open(&mut writer, "imsx_POXBody")?;
        open(&mut writer, self.operation.request_element())?;
        open(&mut writer, "resultRecord")?;

        open(&mut writer, "sourcedGUID")?;
        text_element(&mut writer, "sourcedId", &self.source_did)?;
        close(&mut writer, "sourcedGUID")?;

        if self.score.is_some() || self.payload.is_some() {
            open(&mut writer, "result")?;
            if let Some(score) = self.score {
                open(&mut writer, "resultScore")?;
                text_element(&mut writer, "language", &self.language)?;
                text_element(&mut writer, "textString", &score.to_string())?;
                close(&mut writer, "resultScore")?;
            }
            if let Some(payload) = &self.payload {
                open(&mut writer, "resultData")?;
                text_element(&mut writer, payload.kind(), payload.value())?;
                close(&mut writer, "resultData")?;
            }
            close(&mut writer, "result")?;
        }

        close(&mut writer, "resultRecord")?;
        close(&mut writer, self.operation.request_element())?;
        close(&mut writer, "imsx_POXBody")?;
        close(&mut writer, "imsx_POXEnvelopeRequest")?;

        String::from_utf8(writer.into_inner()).map_err(xml_error)
    }
}

fn xml_error(err: impl std::fmt::Display) -> OutcomeError {
    OutcomeError::Parameter(format!("could not serialize outcome document: {err}"))
}

fn open(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), OutcomeError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)
}

fn close(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), OutcomeError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), OutcomeError> {
    open(writer, name)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    close(writer, name)
}
