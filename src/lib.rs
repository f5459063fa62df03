//! Kite Connect v3 的 Rust SDK：持仓、头寸与头寸转换。

pub mod client;
pub mod error;
pub mod restful;

pub use client::{KiteClient, DEFAULT_DOMAIN};
pub use error::{ErrorKind, KiteError, KiteResult};
pub use restful::models::{ConvertPositionParams, Holding, Position, Positions, RestApi};
pub use restful::transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
