//! # Launch Context
//!
//! The authenticated view of a launch handed to application code.

use serde::{Deserialize, Serialize};
use shared_types::{OutcomeServiceConfig, ParamValue, Parameters};

use super::parameters::MessageType;

const OAUTH_PREFIX: &str = "oauth_";
const OUTCOME_SERVICE_URL: &str = "lis_outcome_service_url";
const RESULT_SOURCEDID: &str = "lis_result_sourcedid";
const DATA_VALUES_ACCEPTED: &str = "ext_outcome_data_values_accepted";

/// Launch parameters with every `oauth_*` key removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchContext {
    params: Parameters,
    outcome_service: Option<OutcomeServiceConfig>,
}

impl LaunchContext {
    /// Builds a context from a launch body.
    ///
    /// `default_result_data_types` applies when the consumer does not list
    /// `ext_outcome_data_values_accepted`.
    pub fn from_body(body: &Parameters, default_result_data_types: &[String]) -> Self {
        let mut params = body.clone();
        params.retain(|key, _| !key.starts_with(OAUTH_PREFIX));

        let outcome_service = match (
            params.get_str(OUTCOME_SERVICE_URL).filter(|v| !v.is_empty()),
            params.get_str(RESULT_SOURCEDID).filter(|v| !v.is_empty()),
        ) {
            (Some(url), Some(sourcedid)) => {
                let accepted = params
                    .get_str(DATA_VALUES_ACCEPTED)
                    .map(split_list)
                    .unwrap_or_else(|| default_result_data_types.to_vec());
                Some(OutcomeServiceConfig::new(url, sourcedid).with_result_data_types(accepted))
            }
            _ => None,
        };

        Self {
            params,
            outcome_service,
        }
    }

    /// All non-OAuth parameters.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.params.get_str(key)
    }

    pub fn message_type(&self) -> Option<MessageType> {
        self.get_str("lti_message_type").and_then(MessageType::parse)
    }

    /// True for `basic-lti-launch-request`.
    pub fn is_launch_request(&self) -> bool {
        self.message_type() == Some(MessageType::BasicLaunch)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.get_str("user_id")
    }

    /// Given name, else family name, else full name, else empty.
    pub fn username(&self) -> &str {
        ["lis_person_name_given", "lis_person_name_family", "lis_person_name_full"]
            .iter()
            .find_map(|key| self.get_str(key).filter(|v| !v.is_empty()))
            .unwrap_or("")
    }

    pub fn resource_link_id(&self) -> Option<&str> {
        self.get_str("resource_link_id")
    }

    pub fn context_id(&self) -> Option<&str> {
        self.get_str("context_id")
    }

    pub fn context_label(&self) -> Option<&str> {
        self.get_str("context_label")
    }

    pub fn context_title(&self) -> Option<&str> {
        self.get_str("context_title")
    }

    /// Reporting endpoint, when the consumer offered one.
    pub fn outcome_service(&self) -> Option<&OutcomeServiceConfig> {
        self.outcome_service.as_ref()
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
