//! Symbol catalog data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exchange a catalog entry trades on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    Bse,
    Nse,
}

impl Exchange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::Bse => "BSE",
            Exchange::Nse => "NSE",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BSE" => Ok(Exchange::Bse),
            "NSE" => Ok(Exchange::Nse),
            other => Err(format!("unknown exchange: {}", other)),
        }
    }
}

/// A listed company in the symbol catalog. Identity key is the
/// exchange-qualified symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub symbol: String,
    pub name: String,
    pub exchange: Exchange,
}

impl Company {
    pub fn new(symbol: &str, name: &str, exchange: Exchange) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            exchange,
        }
    }
}
