//! Application Error - Unified error type for the boundary layer
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde_json::Value;

use super::domain_error::DomainError;
use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// 境界層（CLI / HTTP など）で使用する標準エラー型です。
/// ドメインエラーはすべて `From` で変換でき、それ以外の失敗は
/// 分類なしの内部エラーとして扱われます。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `code` - 機械可読な安定コード
/// * `message` - 人間向けのエラーメッセージ
/// * `details` - 追加情報（オプション、フィールドエラーなど）
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, domain_error::DomainError};
///
/// let err: AppError = DomainError::not_found("User", "42").into();
/// assert_eq!(err.code(), "ENTITY_NOT_FOUND");
/// assert_eq!(err.status_code(), 404);
///
/// let internal = AppError::internal("connection reset");
/// assert_eq!(internal.public_message(), "Internal Server Error");
/// ```
pub struct AppError {
    /// エラー種別
    kind: ErrorKind,
    /// 機械可読コード
    code: Cow<'static, str>,
    /// メッセージ
    message: Cow<'static, str>,
    /// 追加情報
    details: Option<Value>,
    /// 元のエラー（デバッグ用）
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
///
/// `Result<T, AppError>` の省略形です。
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    ///
    /// コードは種別の既定コードになります。
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            code: Cow::Borrowed(kind.default_code()),
            message: message.into(),
            details: None,
            source: None,
        }
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// 400 Bad Request エラー
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// 機械可読コードを上書き
    #[inline]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// 追加情報を設定
    #[inline]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// 元のエラーを設定（デバッグ用）
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::{AppError, AppResult};
    ///
    /// fn read_config() -> AppResult<String> {
    ///     std::fs::read_to_string("config.json")
    ///         .map_err(|e| AppError::internal("Failed to read config").with_source(e))
    /// }
    /// ```
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 機械可読コードを取得
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// HTTP ステータスコードを取得
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// メッセージを取得（ログ用、内部情報を含む場合あり）
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 追加情報を取得
    #[inline]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// 外部に公開してよいメッセージ
    ///
    /// サーバーエラーの場合は理由フレーズのみを返し、内部情報を漏らしません。
    pub fn public_message(&self) -> &str {
        if self.is_server_error() {
            self.kind.as_str()
        } else {
            &self.message
        }
    }

    /// 外部に公開してよい追加情報（サーバーエラーでは常に `None`）
    pub fn public_details(&self) -> Option<&Value> {
        if self.is_server_error() {
            None
        } else {
            self.details.as_ref()
        }
    }

    /// サーバーエラーかどうか
    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("code", &self.code);
        builder.field("message", &self.message);
        if let Some(details) = &self.details {
            builder.field("details", details);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let mut app_err = AppError::new(err.kind(), err.message()).with_code(err.code());
        if let Some(details) = err.details() {
            app_err = app_err.with_details(details);
        }
        app_err.with_source(err)
    }
}

// ============================================================================
// Result extension traits
// ============================================================================

/// `Result<T, E>` を `AppResult<T>` に変換するための拡張トレイト
pub trait ResultExt<T, E> {
    /// エラーを `AppError` に変換し、指定した種別とメッセージでラップ
    fn map_app_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> AppResult<T>
    where
        E: Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn map_app_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> AppResult<T>
    where
        E: Error + Send + Sync + 'static,
    {
        self.map_err(|e| AppError::new(kind, message).with_source(e))
    }
}
