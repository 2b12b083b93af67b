//! CoinGecko Raw Response Shapes
//!
//! Optional-field record types for the trending search and category market
//! endpoints, each with one mapping function into the domain shape.

use serde::Deserialize;

use crate::domain::coin::{MemeMarketCoin, TrendingCoin};

/// `/search/trending` root object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTrendingResponse {
    pub coins: Vec<RawTrendingEntry>,
}

/// One `coins[]` wrapper around the actual item
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTrendingEntry {
    pub item: RawTrendingItem,
}

/// The nested trending item
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTrendingItem {
    pub id: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub market_cap_rank: Option<u32>,
    pub data: RawTrendingData,
}

/// The item's `data` block with live market figures
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTrendingData {
    pub price: Option<f64>,
    pub price_change_percentage_24h: RawCurrencyPercentages,
    pub market_cap: Option<String>,
    pub total_volume: Option<String>,
    pub sparkline: Option<String>,
}

/// Per-currency percentage map; only USD is consumed
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCurrencyPercentages {
    pub usd: Option<f64>,
}

impl RawTrendingItem {
    pub fn into_coin(self) -> TrendingCoin {
        TrendingCoin {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            symbol: self.symbol.unwrap_or_default(),
            thumb: self.thumb.unwrap_or_default(),
            small: self.small.unwrap_or_default(),
            market_cap_rank: self.market_cap_rank,
            price_change_percentage_24h: self.data.price_change_percentage_24h.usd,
            price: self.data.price,
            market_cap: self.data.market_cap,
            total_volume: self.data.total_volume,
            sparkline: self.data.sparkline,
        }
    }
}

/// One coin from `/coins/markets`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMarketCoin {
    pub id: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub total_volume: Option<f64>,
    pub price_change_percentage_1h_in_currency: Option<f64>,
    pub price_change_percentage_24h_in_currency: Option<f64>,
    pub price_change_percentage_7d_in_currency: Option<f64>,
    pub ath: Option<f64>,
    pub ath_change_percentage: Option<f64>,
}

impl RawMarketCoin {
    pub fn into_coin(self) -> MemeMarketCoin {
        MemeMarketCoin {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            symbol: self.symbol.unwrap_or_default().to_uppercase(),
            image: self.image.unwrap_or_default(),
            current_price: self.current_price,
            market_cap: self.market_cap,
            market_cap_rank: self.market_cap_rank,
            total_volume: self.total_volume,
            price_change_1h: self.price_change_percentage_1h_in_currency,
            price_change_24h: self.price_change_percentage_24h_in_currency,
            price_change_7d: self.price_change_percentage_7d_in_currency,
            ath: self.ath,
            ath_change_percentage: self.ath_change_percentage,
        }
    }
}
