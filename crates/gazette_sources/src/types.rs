//! Gazette source identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream gazette source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Origin {
    /// Boletín Oficial del Estado.
    Boe,
    /// Boletín Oficial del Registro Mercantil.
    Borme,
}

impl Origin {
    /// Canonical source name, as shown in results and failure reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Boe => "BOE",
            Origin::Borme => "BORME",
        }
    }

    /// Path segment of this source's summary endpoint.
    pub fn api_segment(&self) -> &'static str {
        match self {
            Origin::Boe => "boe",
            Origin::Borme => "borme",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
