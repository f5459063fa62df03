use serde::{Deserialize, Deserializer, Serialize};

/// null 按零值处理，缺失字段由容器级 `#[serde(default)]` 补齐
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 统一响应外壳
/// {"status": "success", "data": ...} / {"status": "error", "message": ..., "error_type": ...}
#[derive(Deserialize, Serialize, Debug)]
pub struct RestApi<T> {
    pub status: String,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error_type: Option<String>,
}

impl<T> RestApi<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// 持仓（已交割股票）
/// GET /portfolio/holdings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Holding {
    #[serde(deserialize_with = "null_as_default")]
    pub tradingsymbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exchange: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instrument_token: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub isin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product: String, // 产品类型 CNC / MIS / NRML

    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub t1_quantity: i64, // T+1 未交割数量
    #[serde(deserialize_with = "null_as_default")]
    pub realised_quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub collateral_quantity: i64, // 质押数量
    #[serde(deserialize_with = "null_as_default")]
    pub collateral_type: String,

    #[serde(deserialize_with = "null_as_default")]
    pub average_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub last_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub close_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pnl: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub day_change: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub day_change_percentage: f64,
}

/// 头寸（net / day 共用）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    #[serde(deserialize_with = "null_as_default")]
    pub tradingsymbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exchange: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instrument_token: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub product: String,

    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub overnight_quantity: i64, // 隔夜持有数量
    #[serde(deserialize_with = "null_as_default")]
    pub multiplier: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub average_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub close_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub last_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pnl: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub m2m: f64, // 盯市盈亏
    #[serde(deserialize_with = "null_as_default")]
    pub unrealised: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub realised: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub buy_quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub buy_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub buy_value: f64,
    #[serde(rename = "buy_m2m", deserialize_with = "null_as_default")]
    pub buy_m2m_value: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub sell_quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sell_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub sell_value: f64,
    #[serde(rename = "sell_m2m", deserialize_with = "null_as_default")]
    pub sell_m2m_value: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub day_buy_quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub day_buy_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub day_buy_value: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub day_sell_quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub day_sell_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub day_sell_value: f64,
}

/// 头寸汇总
/// GET /portfolio/positions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Positions {
    #[serde(deserialize_with = "null_as_default")]
    pub net: Vec<Position>, // 累计头寸
    #[serde(deserialize_with = "null_as_default")]
    pub day: Vec<Position>, // 当日头寸
}

/// 头寸转换请求（表单编码）
/// PUT /portfolio/positions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvertPositionParams {
    pub exchange: String,
    pub tradingsymbol: String,
    pub old_product: String,
    pub new_product: String,
    pub position_type: String, // day / overnight
    pub transaction_type: String, // BUY / SELL
    pub quantity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holding_ignores_unknown_fields() {
        let json = r#"{
            "tradingsymbol": "INFY",
            "exchange": "NSE",
            "instrument_token": 408065,
            "isin": "INE009A01021",
            "product": "CNC",
            "price": 0,
            "quantity": 1,
            "t1_quantity": 0,
            "realised_quantity": 1,
            "collateral_quantity": 0,
            "collateral_type": "",
            "average_price": 1450.5,
            "last_price": 1520.25,
            "close_price": 1510.0,
            "pnl": 69.75,
            "day_change": 10.25,
            "day_change_percentage": 0.678808,
            "authorised_date": "2024-01-01 00:00:00",
            "discrepancy": false
        }"#;
        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.tradingsymbol, "INFY");
        assert_eq!(holding.instrument_token, 408065);
        assert_eq!(holding.realised_quantity, 1);
        assert_eq!(holding.average_price, 1450.5);
        assert_eq!(holding.day_change_percentage, 0.678808);
    }

    #[test]
    fn position_m2m_field_names() {
        let json = r#"{"tradingsymbol": "NIFTY24JANFUT", "buy_m2m": 1200.5, "sell_m2m": 0.0, "m2m": -35.0}"#;
        let position: Position = serde_json::from_str(json).unwrap();
        assert_eq!(position.buy_m2m_value, 1200.5);
        assert_eq!(position.m2m, -35.0);
        assert_eq!(position.quantity, 0);

        let value = serde_json::to_value(&position).unwrap();
        assert_eq!(value["buy_m2m"], 1200.5);
        assert!(value.get("buy_m2m_value").is_none());
    }

    #[test]
    fn null_fields_become_zero() {
        let json = r#"{"tradingsymbol": "INFY", "collateral_type": null, "pnl": null, "instrument_token": null}"#;
        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.tradingsymbol, "INFY");
        assert_eq!(holding.collateral_type, "");
        assert_eq!(holding.pnl, 0.0);
        assert_eq!(holding.instrument_token, 0);

        let positions: Positions =
            serde_json::from_str(r#"{"net": null, "day": [{"tradingsymbol": "SBIN", "m2m": null}]}"#)
                .unwrap();
        assert!(positions.net.is_empty());
        assert_eq!(positions.day[0].m2m, 0.0);
    }

    #[test]
    fn error_envelope() {
        let json = r#"{"status": "error", "message": "Invalid `api_key` or `access_token`.", "error_type": "TokenException"}"#;
        let resp: RestApi<Positions> = serde_json::from_str(json).unwrap();
        assert!(!resp.is_success());
        assert!(resp.data.is_none());
        assert_eq!(resp.error_type.as_deref(), Some("TokenException"));
    }
}
