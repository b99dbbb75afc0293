//! JWT 令牌服务
//!
//! 处理 JWT 令牌的生成、验证和解析。

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::permissions::{capabilities_of, has_capability};
use shared::role::{Capability, Role, UnknownRole};

/// JWT 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// JWT 密钥 (应至少 32 字节)
    pub secret: String,
    /// 令牌过期时间 (分钟)
    pub expiration_minutes: i64,
    /// 令牌签发者
    pub issuer: String,
    /// 令牌受众
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            let generated = generate_printable_secret(64);
            tracing::warn!("JWT_SECRET not set, using a generated key (tokens reset on restart)");
            generated
        });

        Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1440), // 默认 24 小时
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "ladle-server".to_string()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "ladle-clients".to_string()),
        }
    }
}

/// 存储在令牌中的 JWT Claims
///
/// 令牌只携带角色，不携带权限列表：权限始终在请求时从角色表推导，
/// 保证单一数据源。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 用户 ID (Subject)
    pub sub: String,
    /// 用户名
    pub username: String,
    /// 显示名称
    pub display_name: String,
    /// 角色名称
    pub role: String,
    /// 过期时间戳
    pub exp: i64,
    /// 签发时间戳
    pub iat: i64,
    /// 签发者
    pub iss: String,
    /// 受众
    pub aud: String,
}

/// JWT 错误
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("无效令牌: {0}")]
    InvalidToken(String),

    #[error("令牌已过期")]
    ExpiredToken,

    #[error("无效签名")]
    InvalidSignature,

    #[error("令牌生成失败: {0}")]
    GenerationFailed(String),

    #[error("配置错误: {0}")]
    ConfigError(String),
}

/// 生成可打印的随机密钥
pub fn generate_printable_secret(len: usize) -> String {
    let allowed_chars =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";

    let rng = SystemRandom::new();
    let mut key = String::with_capacity(len);

    for _ in 0..len {
        let mut byte = [0u8; 1];
        if rng.fill(&mut byte).is_err() {
            // 随机数生成失败时退回固定开发密钥
            return "LadleServerDevelopmentSecureKey2026!".to_string();
        }
        let idx = (byte[0] as usize) % allowed_chars.len();
        key.push(allowed_chars.as_bytes()[idx] as char);
    }

    key
}

/// 当前用户上下文
///
/// 由认证中间件从 JWT 解析后注入请求扩展。
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub role: Role,
}

impl CurrentUser {
    /// 是否持有某能力（从角色表推导）
    pub fn has_capability(&self, capability: Capability) -> bool {
        has_capability(self.role, capability)
    }

    /// 当前角色的全部能力
    pub fn capabilities(&self) -> &'static [Capability] {
        capabilities_of(self.role)
    }
}

impl TryFrom<Claims> for CurrentUser {
    type Error = UnknownRole;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            id: claims.sub,
            username: claims.username,
            display_name: claims.display_name,
            role: claims.role.parse()?,
        })
    }
}

/// JWT 令牌服务
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    /// 创建 JWT 服务
    pub fn new(config: JwtConfig) -> Result<Self, JwtError> {
        if config.secret.len() < 32 {
            return Err(JwtError::ConfigError(
                "JWT secret must be at least 32 bytes".to_string(),
            ));
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
        })
    }

    /// 为员工生成令牌
    pub fn generate_token(
        &self,
        user_id: &str,
        username: &str,
        display_name: &str,
        role: Role,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            display_name: display_name.to_string(),
            role: role.to_string(),
            exp: (now + Duration::minutes(self.config.expiration_minutes)).timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// 验证令牌并返回 Claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            })
    }

    /// 从 `Authorization: Bearer <token>` 头提取令牌
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ").map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key-at-least-32-bytes-long!".to_string(),
            expiration_minutes: 60,
            issuer: "ladle-server".to_string(),
            audience: "ladle-clients".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn token_round_trip() {
        let service = test_service();
        let token = service
            .generate_token("employee:abc", "chef1", "Chef One", Role::Chef)
            .unwrap();
        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "employee:abc");
        assert_eq!(claims.role, "chef");

        let user = CurrentUser::try_from(claims).unwrap();
        assert_eq!(user.role, Role::Chef);
        assert!(user.has_capability(Capability::UpdateOrderStatus));
        assert!(!user.has_capability(Capability::ManageStaff));
    }

    #[test]
    fn short_secret_is_rejected() {
        let result = JwtService::new(JwtConfig {
            secret: "short".to_string(),
            expiration_minutes: 60,
            issuer: "x".to_string(),
            audience: "y".to_string(),
        });
        assert!(matches!(result, Err(JwtError::ConfigError(_))));
    }

    #[test]
    fn bearer_header_extraction() {
        assert_eq!(
            JwtService::extract_from_header("Bearer abc.def.ghi"),
            Some("abc.def.ghi")
        );
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }

    #[test]
    fn claims_with_unknown_role_are_rejected() {
        let service = test_service();
        let token = service
            .generate_token("employee:abc", "x", "X", Role::Owner)
            .unwrap();
        let mut claims = service.validate_token(&token).unwrap();
        claims.role = "superadmin".to_string();
        assert!(CurrentUser::try_from(claims).is_err());
    }
}
