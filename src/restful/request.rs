use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::models::RestApi;
use super::transport::{HttpMethod, HttpRequest, HttpResponse};
use crate::client::KiteClient;
use crate::error::{ErrorKind, KiteError, KiteResult};

const KITE_VERSION: &str = "3";

impl KiteClient {
    pub async fn get<T>(&self, request_path: &str) -> KiteResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: self.build_full_url(request_path),
            headers: self.auth_headers(),
            body: None,
        };
        self.execute(request).await
    }

    /// 表单编码失败时直接返回 Input 错误，不发请求
    pub async fn put<P, T>(&self, request_path: &str, params: &P) -> KiteResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let form = Self::encode_form(params)?;

        let mut headers = self.auth_headers();
        headers.push((
            "Content-Type".into(),
            "application/x-www-form-urlencoded".into(),
        ));
        let request = HttpRequest {
            method: HttpMethod::Put,
            url: self.build_full_url(request_path),
            headers,
            body: Some(form),
        };
        self.execute(request).await
    }

    async fn execute<T>(&self, request: HttpRequest) -> KiteResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let method = request.method;
        debug!(method = method.as_str(), url = %request.url, "sending request");
        if self.debug {
            if let Some(body) = &request.body {
                debug!(method = method.as_str(), %body, "request body");
            }
        }

        let resp = self.transport.send(request).await?;

        debug!(method = method.as_str(), status = resp.status, "received response");
        if self.debug {
            debug!(method = method.as_str(), body = %resp.body, "response body");
        }

        Self::decode_envelope(resp)
    }

    /// 解析响应外壳，返回 data 字段
    /// 先按无类型 data 解析外壳，成功时才把 data 转成 T
    fn decode_envelope<T>(resp: HttpResponse) -> KiteResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let http_ok = (200..300).contains(&resp.status);

        let envelope = match serde_json::from_str::<RestApi<Value>>(&resp.body) {
            Ok(envelope) => envelope,
            Err(e) if http_ok => {
                return Err(KiteError::Decode(format!(
                    "Failed to deserialize response: {}",
                    e
                )))
            }
            Err(_) => {
                warn!(status = resp.status, "non-JSON error response");
                return Err(KiteError::Api {
                    kind: ErrorKind::General,
                    message: resp.body,
                    http_status: resp.status,
                });
            }
        };

        if !http_ok || !envelope.is_success() {
            let kind = ErrorKind::from_error_type(envelope.error_type.as_deref());
            let message = envelope
                .message
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!(status = resp.status, %kind, %message, "API returned error");
            return Err(KiteError::Api {
                kind,
                message,
                http_status: resp.status,
            });
        }

        match envelope.data {
            Some(data) => serde_json::from_value::<T>(data).map_err(|e| {
                KiteError::Decode(format!("Failed to deserialize response: {}", e))
            }),
            None => Ok(T::default()),
        }
    }

    pub(crate) fn encode_form<P>(params: &P) -> KiteResult<String>
    where
        P: Serialize + ?Sized,
    {
        serde_urlencoded::to_string(params)
            .map_err(|e| KiteError::Input(format!("Error encoding params: {}", e)))
    }

    fn auth_headers(&self) -> Vec<(String, String)> {
        vec![
            ("X-Kite-Version".into(), KITE_VERSION.into()),
            (
                "Authorization".into(),
                format!("token {}:{}", self.api_key, self.access_token),
            ),
        ]
    }

    fn build_full_url(&self, path: &str) -> String {
        format!("{}{}", self.domain, path)
    }
}
