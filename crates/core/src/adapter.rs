//! HTTP rate provider: a one-shot blocking fetch at startup.
//!
//! The home currency comes from a geo-IP endpoint, falling through a
//! secondary endpoint and finally the fixed fallback code. Rates come
//! from a single-base exchange document; the full cross table is derived
//! from it (`rate(a→b) = base[b] / base[a]`).

use std::collections::BTreeMap;

use crate::currency::{RateError, RateProvider, RateTable};

pub const GEO_PRIMARY_URL: &str = "https://ipapi.co/json/";
pub const GEO_SECONDARY_URL: &str = "http://ip-api.com/json/";
pub const RATES_URL: &str = "https://open.er-api.com/v6/latest/USD";

/// Fetches the home currency and rate table over HTTP.
pub struct HttpRateProvider {
    geo_primary: String,
    geo_secondary: String,
    rates_url: String,
}

impl Default for HttpRateProvider {
    fn default() -> Self {
        HttpRateProvider {
            geo_primary: GEO_PRIMARY_URL.to_string(),
            geo_secondary: GEO_SECONDARY_URL.to_string(),
            rates_url: RATES_URL.to_string(),
        }
    }
}

impl HttpRateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the endpoints, e.g. for a local test server.
    pub fn with_urls(geo_primary: &str, geo_secondary: &str, rates_url: &str) -> Self {
        HttpRateProvider {
            geo_primary: geo_primary.to_string(),
            geo_secondary: geo_secondary.to_string(),
            rates_url: rates_url.to_string(),
        }
    }

    fn fetch_home_currency(&self) -> String {
        if let Ok(v) = get_json(&self.geo_primary) {
            if let Some(code) = v.get("currency").and_then(|c| c.as_str()) {
                return code.to_uppercase();
            }
            if let Some(country) = v.get("country").and_then(|c| c.as_str()) {
                if let Some(code) = currency_for_country(country) {
                    return code.to_string();
                }
            }
        }
        if let Ok(v) = get_json(&self.geo_secondary) {
            if let Some(country) = v.get("countryCode").and_then(|c| c.as_str()) {
                if let Some(code) = currency_for_country(country) {
                    return code.to_string();
                }
            }
        }
        RateTable::FALLBACK_CURRENCY.to_string()
    }

    fn fetch_base_rates(&self) -> Result<BTreeMap<String, f64>, RateError> {
        let v = get_json(&self.rates_url)?;
        let rates = v
            .get("rates")
            .and_then(|r| r.as_object())
            .ok_or_else(|| RateError::Provider("rates document missing 'rates'".to_string()))?;
        let mut out = BTreeMap::new();
        for (code, value) in rates {
            if let Some(rate) = value.as_f64() {
                out.insert(code.to_uppercase(), rate);
            }
        }
        Ok(out)
    }
}

impl RateProvider for HttpRateProvider {
    fn rates(&self) -> Result<RateTable, RateError> {
        let home_currency = self.fetch_home_currency();
        let base = self.fetch_base_rates()?;

        let mut rates: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        for (from, from_rate) in &base {
            if *from_rate == 0.0 {
                continue;
            }
            let row: BTreeMap<String, f64> = base
                .iter()
                .filter(|(to, _)| *to != from)
                .map(|(to, to_rate)| (to.clone(), to_rate / from_rate))
                .collect();
            rates.insert(from.clone(), row);
        }

        Ok(RateTable {
            home_currency,
            rates,
        })
    }
}

fn get_json(url: &str) -> Result<serde_json::Value, RateError> {
    let mut response = ureq::get(url)
        .call()
        .map_err(|e| RateError::Provider(e.to_string()))?;
    response
        .body_mut()
        .read_json()
        .map_err(|e| RateError::Provider(e.to_string()))
}

/// Currency for a country code, for geo endpoints that only report the
/// country. Uncovered countries fall back to the default currency.
fn currency_for_country(country: &str) -> Option<&'static str> {
    let code = match country.to_uppercase().as_str() {
        "US" => "USD",
        "GB" => "GBP",
        "AT" | "BE" | "CY" | "DE" | "EE" | "ES" | "FI" | "FR" | "GR" | "HR" | "IE" | "IT"
        | "LT" | "LU" | "LV" | "MT" | "NL" | "PT" | "SI" | "SK" => "EUR",
        "IN" => "INR",
        "JP" => "JPY",
        "CN" => "CNY",
        "AU" => "AUD",
        "CA" => "CAD",
        "CH" => "CHF",
        "SE" => "SEK",
        "NO" => "NOK",
        "DK" => "DKK",
        "NZ" => "NZD",
        "SG" => "SGD",
        "HK" => "HKD",
        "KR" => "KRW",
        "BR" => "BRL",
        "MX" => "MXN",
        "ZA" => "ZAR",
        "RU" => "RUB",
        "TR" => "TRY",
        "PL" => "PLN",
        "CZ" => "CZK",
        "HU" => "HUF",
        "IL" => "ILS",
        "AE" => "AED",
        "SA" => "SAR",
        "TH" => "THB",
        "ID" => "IDR",
        "MY" => "MYR",
        "PH" => "PHP",
        "VN" => "VND",
        "AR" => "ARS",
        "CL" => "CLP",
        "CO" => "COP",
        "EG" => "EGP",
        "NG" => "NGN",
        "KE" => "KES",
        "PK" => "PKR",
        "BD" => "BDT",
        "UA" => "UAH",
        _ => return None,
    };
    Some(code)
}
