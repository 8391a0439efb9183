use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WagerError};

/// Supported networks. Chain selection itself belongs to the wallet layer;
/// this enum only drives currency display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    Ethereum,
    Base,
    Arbitrum,
    Bsc,
    Polygon,
}

impl Network {
    /// Unknown chain ids map to `None` and take the display fallback.
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(Self::Ethereum),
            8453 => Some(Self::Base),
            42161 => Some(Self::Arbitrum),
            56 => Some(Self::Bsc),
            137 => Some(Self::Polygon),
            _ => None,
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Ethereum => 1,
            Self::Base => 8453,
            Self::Arbitrum => 42161,
            Self::Bsc => 56,
            Self::Polygon => 137,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ethereum => "ethereum",
            Self::Base => "base",
            Self::Arbitrum => "arbitrum",
            Self::Bsc => "bsc",
            Self::Polygon => "polygon",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Network {
    type Err = WagerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ethereum" | "mainnet" => Ok(Self::Ethereum),
            "base" => Ok(Self::Base),
            "arbitrum" => Ok(Self::Arbitrum),
            "bsc" => Ok(Self::Bsc),
            "polygon" => Ok(Self::Polygon),
            other => Err(WagerError::config(format!(
                "Unsupported network: {}",
                other
            ))),
        }
    }
}

/// Session-selectable betting asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Eth,
    Usdc,
    Bnb,
    Pol,
}

impl Currency {
    pub fn info(&self) -> CurrencyInfo {
        match self {
            Self::Eth => ETH,
            Self::Usdc => USDC,
            Self::Bnb => BNB,
            Self::Pol => POL,
        }
    }
}

impl FromStr for Currency {
    type Err = WagerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "eth" => Ok(Self::Eth),
            "usdc" => Ok(Self::Usdc),
            "bnb" => Ok(Self::Bnb),
            "pol" => Ok(Self::Pol),
            other => Err(WagerError::config(format!(
                "Unsupported currency: {}",
                other
            ))),
        }
    }
}

/// Display symbol and logo for the active betting asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub symbol: &'static str,
    pub logo: &'static str,
}

const ETH: CurrencyInfo = CurrencyInfo {
    symbol: "ETH",
    logo: "icons/eth.svg",
};
const USDC: CurrencyInfo = CurrencyInfo {
    symbol: "USDC",
    logo: "icons/usdc.svg",
};
const BNB: CurrencyInfo = CurrencyInfo {
    symbol: "BNB",
    logo: "icons/bnb.svg",
};
const POL: CurrencyInfo = CurrencyInfo {
    symbol: "POL",
    logo: "icons/pol.svg",
};

/// Resolve the display currency for a network snapshot.
///
/// Base supports multi-asset betting, so a session-selected currency
/// overrides the network default there and only there. Every other network
/// keeps its default, and an unrecognized chain falls back to ETH.
pub fn resolve_currency(network: Option<Network>, selected: Option<Currency>) -> CurrencyInfo {
    match network {
        Some(Network::Base) => selected.map(|currency| currency.info()).unwrap_or(ETH),
        Some(Network::Ethereum) | Some(Network::Arbitrum) => ETH,
        Some(Network::Bsc) => BNB,
        Some(Network::Polygon) => POL,
        None => ETH,
    }
}
