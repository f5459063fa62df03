//! 错误类型

use std::fmt;

use thiserror::Error;

/// 接口外壳 `error_type` 字段对应的异常类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    General,
    Token,
    Permission,
    User,
    TwoFa,
    Order,
    Input,
    Data,
    Network,
}

impl ErrorKind {
    /// 未知或缺失的 error_type 归为 General
    pub fn from_error_type(error_type: Option<&str>) -> Self {
        match error_type.unwrap_or_default() {
            "TokenException" => ErrorKind::Token,
            "PermissionException" => ErrorKind::Permission,
            "UserException" => ErrorKind::User,
            "TwoFAException" => ErrorKind::TwoFa,
            "OrderException" => ErrorKind::Order,
            "InputException" => ErrorKind::Input,
            "DataException" => ErrorKind::Data,
            "NetworkException" => ErrorKind::Network,
            _ => ErrorKind::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::General => "GeneralException",
            ErrorKind::Token => "TokenException",
            ErrorKind::Permission => "PermissionException",
            ErrorKind::User => "UserException",
            ErrorKind::TwoFa => "TwoFAException",
            ErrorKind::Order => "OrderException",
            ErrorKind::Input => "InputException",
            ErrorKind::Data => "DataException",
            ErrorKind::Network => "NetworkException",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum KiteError {
    /// 请求参数编码失败，此时尚未发出请求
    #[error("Input error: {0}")]
    Input(String),

    /// reqwest 网络错误
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 外壳 status 非 success 或 HTTP 状态非 2xx
    #[error("{kind} ({http_status}): {message}")]
    Api {
        kind: ErrorKind,
        message: String,
        http_status: u16,
    },

    /// 响应数据结构不符
    #[error("Decode error: {0}")]
    Decode(String),
}

impl KiteError {
    pub fn is_input(&self) -> bool {
        matches!(self, KiteError::Input(_))
    }

    /// 仅接口返回的错误有异常类别，本地与网络错误为 None
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            KiteError::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type KiteResult<T> = Result<T, KiteError>;
