//! ビルドターゲット定義

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// ビルド引数の値
///
/// KDL形式：
/// ```kdl
/// args {
///     haystack_version "${HAYSTACK_VERSION}"
///     haystack_extras var="HAYSTACK_EXTRAS" fallback="docstores,crawler"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgValue {
    /// `${VAR}` プレースホルダを含むテンプレート文字列
    Template(String),
    /// 変数の値が非空ならその値をそのまま使い、空ならリテラルの既定値を使う
    ///
    /// 空文字列のオーバーライドは「未指定」として扱われます。
    OverrideIfNonEmpty { variable: String, fallback: String },
}

/// ビルドターゲット定義
///
/// 1つのビルド可能なイメージの仕様（Dockerfile + タグ + 引数 + プラットフォーム）。
/// 解決後に変更されることはありません。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Target {
    /// Dockerfileのパス
    pub dockerfile: String,
    /// タグテンプレート（宣言順）
    #[serde(default)]
    pub tags: Vec<String>,
    /// ビルド引数（引数名 → 値テンプレート）
    #[serde(default)]
    pub args: HashMap<String, ArgValue>,
    /// ターゲットプラットフォーム（例: linux/amd64）
    ///
    /// 空の場合はビルドエンジンの既定値に委ねます。
    #[serde(default)]
    pub platforms: Vec<String>,
}
