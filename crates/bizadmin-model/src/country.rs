//! Country catalog contracts

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "pais_codi")]
    pub code: String,
    #[serde(rename = "pais_desc")]
    pub description: String,
    /// Active flag
    #[serde(rename = "pais_stat")]
    pub status: bool,
    #[serde(rename = "pais_regi")]
    pub region: String,
}

impl Country {
    pub fn is_active(&self) -> bool {
        self.status
    }
}

/// Envelope around a country listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub data: Vec<Country>,
}

impl CountryResponse {
    /// 2xx status and no error text
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code) && self.error.is_empty()
    }

    pub fn active_countries(&self) -> impl Iterator<Item = &Country> {
        self.data.iter().filter(|c| c.is_active())
    }

    pub fn into_result(self) -> Result<Vec<Country>> {
        if self.is_success() {
            return Ok(self.data);
        }

        let error = if self.error.is_empty() {
            self.message
        } else {
            self.error
        };
        tracing::warn!(status = self.status_code, error = %error, "Country request failed");

        Err(ModelError::Response {
            status: self.status_code,
            error,
        })
    }
}
