use super::models::{ConvertPositionParams, Holding, Positions};
use crate::client::KiteClient;
use crate::error::KiteResult;
use serde_json::Value;

pub const URI_GET_HOLDINGS: &str = "/portfolio/holdings";
pub const URI_GET_POSITIONS: &str = "/portfolio/positions";
pub const URI_CONVERT_POSITION: &str = "/portfolio/positions";

impl KiteClient {
    // 查看持仓
    // GET /portfolio/holdings
    pub async fn holdings(&self) -> KiteResult<Vec<Holding>> {
        self.get::<Vec<Holding>>(URI_GET_HOLDINGS).await
    }

    // 查看头寸（net + day）
    // GET /portfolio/positions
    pub async fn positions(&self) -> KiteResult<Positions> {
        self.get::<Positions>(URI_GET_POSITIONS).await
    }

    /// 头寸产品类型转换，例如 MIS -> CNC
    /// PUT /portfolio/positions
    ///
    /// 成功返回 `Ok(true)`；参数编码失败为 [`KiteError::Input`](crate::KiteError::Input)，
    /// 其余错误原样返回。
    pub async fn convert_position(&self, params: &ConvertPositionParams) -> KiteResult<bool> {
        self.put::<_, Value>(URI_CONVERT_POSITION, params).await?;
        Ok(true)
    }
}
