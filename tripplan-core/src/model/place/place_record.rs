use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// a catalog item as served by the backend place endpoints. the backend emits
/// Go-style field names (`ID`, `Lat`, `PriceMin`) while snapshots and tests may
/// use snake_case, so both are accepted.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlaceRecord {
    #[serde(alias = "ID")]
    pub id: i64,
    #[serde(alias = "Name", default)]
    pub name: Option<String>,
    #[serde(alias = "Lat", default)]
    pub lat: Option<f64>,
    #[serde(alias = "Lon", default)]
    pub lon: Option<f64>,
    #[serde(alias = "PriceMin", default, deserialize_with = "deserialize_price")]
    pub price_min: Option<i64>,
    #[serde(alias = "PriceMax", default, deserialize_with = "deserialize_price")]
    pub price_max: Option<i64>,
}

/// reads a price written as an integer, a float or a numeric string,
/// truncating fractions. anything else reads as no price so one odd record
/// does not fail the whole catalog.
fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let price = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    };
    Ok(price)
}
