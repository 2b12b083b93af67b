//! Market-Data Coins
//!
//! Normalized records from the CoinGecko source: 24h trending search results
//! and the meme-token category ranked by market cap. These co-appear in the
//! snapshot but have no relationship to token candidates.

use serde::{Deserialize, Serialize};

/// One coin from the trending search feed.
///
/// CoinGecko sends `market_cap`, `total_volume` and `sparkline` as display
/// strings on this endpoint; they are preserved verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingCoin {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    /// Thumbnail image URL
    #[serde(default)]
    pub thumb: String,
    /// Small image URL
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    /// 24h change in USD terms
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<String>,
    #[serde(default)]
    pub total_volume: Option<String>,
    /// Sparkline chart URL
    #[serde(default)]
    pub sparkline: Option<String>,
}

/// One coin from the meme-token category market listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemeMarketCoin {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Ticker symbol, uppercased during normalization
    #[serde(default)]
    pub symbol: String,
    /// Coin image URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub price_change_1h: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_7d: Option<f64>,
    /// All-time high price
    #[serde(default)]
    pub ath: Option<f64>,
    #[serde(default)]
    pub ath_change_percentage: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_coin_camel_case_keys() {
        let coin = TrendingCoin {
            id: "dogwifcoin".to_string(),
            symbol: "WIF".to_string(),
            market_cap_rank: Some(42),
            price_change_percentage_24h: Some(-3.2),
            market_cap: Some("$1,800,000,000".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&coin).unwrap();
        assert_eq!(value["marketCapRank"], 42);
        assert_eq!(value["priceChangePercentage24h"], -3.2);
        assert_eq!(value["marketCap"], "$1,800,000,000");
        assert!(value.as_object().unwrap().contains_key("sparkline"));
    }

    #[test]
    fn test_meme_market_coin_camel_case_keys() {
        let coin = MemeMarketCoin {
            id: "pepe".to_string(),
            symbol: "PEPE".to_string(),
            current_price: Some(0.0000121),
            price_change_1h: Some(0.4),
            price_change_24h: Some(-1.1),
            price_change_7d: Some(9.8),
            ath_change_percentage: Some(-55.0),
            ..Default::default()
        };

        let value = serde_json::to_value(&coin).unwrap();
        assert_eq!(value["currentPrice"], 0.0000121);
        assert_eq!(value["priceChange1h"], 0.4);
        assert_eq!(value["priceChange24h"], -1.1);
        assert_eq!(value["priceChange7d"], 9.8);
        assert_eq!(value["athChangePercentage"], -55.0);
    }
}
