//! DexScreener Raw Response Shapes
//!
//! Optional-field record types mirroring the upstream JSON, each with one
//! narrow mapping function into the domain shape. Missing strings map to
//! empty, missing numbers stay absent; record construction never fails.

use serde::Deserialize;

use crate::domain::pair::{Liquidity, PriceChange, TradingPair, TxnWindows, VolumeWindows};
use crate::domain::token::TokenCandidate;

/// One entry from a boost or profile feed
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTokenRecord {
    pub chain_id: Option<String>,
    pub token_address: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub header: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub total_amount: Option<f64>,
}

impl RawTokenRecord {
    pub fn into_candidate(self) -> TokenCandidate {
        TokenCandidate {
            chain_id: self.chain_id.unwrap_or_default(),
            token_address: self.token_address.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            icon: self.icon.unwrap_or_default(),
            header: self.header.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            amount: self.amount,
            total_amount: self.total_amount,
        }
    }
}

/// Base token of a trading pair
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawBaseToken {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// One pair from the `/tokens/v1/{chain}/{address}` endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPair {
    pub base_token: RawBaseToken,
    pub price_usd: Option<String>,
    pub price_change: PriceChange,
    pub volume: VolumeWindows,
    pub liquidity: Liquidity,
    pub market_cap: Option<f64>,
    pub fdv: Option<f64>,
    pub dex_id: Option<String>,
    pub pair_address: Option<String>,
    pub pair_created_at: Option<i64>,
    pub url: Option<String>,
    pub txns: TxnWindows,
}

impl RawPair {
    pub fn into_pair(self) -> TradingPair {
        TradingPair {
            name: self.base_token.name.unwrap_or_default(),
            symbol: self.base_token.symbol.unwrap_or_default(),
            price_usd: self.price_usd,
            price_change: self.price_change,
            volume: self.volume,
            liquidity: self.liquidity,
            market_cap: self.market_cap,
            fdv: self.fdv,
            dex_id: self.dex_id.unwrap_or_default(),
            pair_address: self.pair_address.unwrap_or_default(),
            pair_created_at: self.pair_created_at,
            url: self.url.unwrap_or_default(),
            txns: self.txns,
        }
    }
}
