use std::sync::Arc;

use crate::restful::transport::{ReqwestTransport, Transport};

/// Kite Connect 正式环境
pub const DEFAULT_DOMAIN: &str = "https://api.kite.trade";

#[derive(Debug, Clone)]
pub struct KiteClient {
    pub debug: bool,
    pub api_key: String,
    pub access_token: String,
    pub domain: String,
    pub(crate) transport: Arc<dyn Transport>,
}

impl KiteClient {
    pub fn new(
        debug: bool,
        api_key: impl Into<String>,
        access_token: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        KiteClient {
            debug,
            api_key: api_key.into(),
            access_token: access_token.into(),
            domain: domain.into().trim_end_matches('/').to_string(),
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    /// 替换底层 HTTP 实现（测试或自定义代理）
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }
}
