/// サンプルハンドラーの設定
///
/// どちらのバリアントをデプロイしているかを環境変数から読み込む。
use thiserror::Error;

use crate::domain::{ExampleVariant, UnknownVariantError};

/// 環境変数名: デプロイするバリアント
pub const ENV_EXAMPLE_VARIANT: &str = "EXAMPLE_VARIANT";

/// サンプル設定のエラー型
#[derive(Debug, Error)]
pub enum ExampleConfigError {
    #[error("Invalid value for {key}: {source}")]
    InvalidValue {
        key: &'static str,
        source: UnknownVariantError,
    },
}

/// サンプルハンドラーの設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExampleConfig {
    /// 返却するレスポンスのバリアント
    pub variant: ExampleVariant,
}

impl ExampleConfig {
    /// 明示的な値で作成
    pub fn new(variant: ExampleVariant) -> Self {
        Self { variant }
    }

    /// 環境変数から設定を読み込み
    ///
    /// - EXAMPLE_VARIANT: `with-flag` または `without-flag`
    ///   （未設定・空文字の場合は `with-flag`）
    ///
    /// 不明な値は別のバリアントを黙って返さないようにエラーにする。
    pub fn from_env() -> Result<Self, ExampleConfigError> {
        let raw = std::env::var(ENV_EXAMPLE_VARIANT).ok();
        Self::from_raw(raw.as_deref())
    }

    /// 環境変数の生の値から設定を作成
    pub fn from_raw(raw: Option<&str>) -> Result<Self, ExampleConfigError> {
        let variant = match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => value
                .parse::<ExampleVariant>()
                .map_err(|source| ExampleConfigError::InvalidValue {
                    key: ENV_EXAMPLE_VARIANT,
                    source,
                })?,
            None => ExampleVariant::default(),
        };

        Ok(Self { variant })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // テストで環境変数を安全に設定/削除するヘルパー
    // 注: Rust 2024エディションでset_var/remove_varはunsafe
    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    #[test]
    fn test_new_uses_given_variant() {
        let config = ExampleConfig::new(ExampleVariant::WithoutBase64Flag);

        assert_eq!(config.variant, ExampleVariant::WithoutBase64Flag);
        assert_eq!(config, ExampleConfig::from_raw(Some("without-flag")).unwrap());
    }

    #[test]
    fn test_from_raw_defaults_to_with_flag() {
        assert_eq!(ExampleConfig::from_raw(None).unwrap(), ExampleConfig::default());
        assert_eq!(
            ExampleConfig::from_raw(Some("   ")).unwrap().variant,
            ExampleVariant::WithBase64Flag
        );
    }

    #[test]
    fn test_from_raw_parses_variants() {
        assert_eq!(
            ExampleConfig::from_raw(Some("without-flag")).unwrap().variant,
            ExampleVariant::WithoutBase64Flag
        );
        assert_eq!(
            ExampleConfig::from_raw(Some(" With-Flag ")).unwrap().variant,
            ExampleVariant::WithBase64Flag
        );
    }

    #[test]
    fn test_from_raw_rejects_unknown_value() {
        let error = ExampleConfig::from_raw(Some("both")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid value for EXAMPLE_VARIANT: unknown example variant: both (expected \"with-flag\" or \"without-flag\")"
        );
    }

    #[test]
    #[serial(example_env)]
    fn test_from_env_unset() {
        unsafe { remove_env(ENV_EXAMPLE_VARIANT) };

        let config = ExampleConfig::from_env().unwrap();

        assert_eq!(config.variant, ExampleVariant::WithBase64Flag);
    }

    #[test]
    #[serial(example_env)]
    fn test_from_env_without_flag() {
        unsafe { set_env(ENV_EXAMPLE_VARIANT, "without-flag") };

        let config = ExampleConfig::from_env().unwrap();

        assert_eq!(config.variant, ExampleVariant::WithoutBase64Flag);

        unsafe { remove_env(ENV_EXAMPLE_VARIANT) };
    }

    #[test]
    #[serial(example_env)]
    fn test_from_env_invalid() {
        unsafe { set_env(ENV_EXAMPLE_VARIANT, "v3") };

        let result = ExampleConfig::from_env();

        assert!(matches!(
            result,
            Err(ExampleConfigError::InvalidValue { key: ENV_EXAMPLE_VARIANT, .. })
        ));

        unsafe { remove_env(ENV_EXAMPLE_VARIANT) };
    }
}
