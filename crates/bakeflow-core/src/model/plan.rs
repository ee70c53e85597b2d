//! 解決済みプラン定義

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 解決済みターゲット
///
/// 全てのテンプレートが展開済みで、プレースホルダは残っていません。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedTarget {
    /// ターゲット名
    pub name: String,
    /// Dockerfileのパス
    pub dockerfile: String,
    /// 展開済みタグ
    pub tags: Vec<String>,
    /// 展開済みビルド引数
    pub args: HashMap<String, String>,
    /// ターゲットプラットフォーム
    #[serde(default)]
    pub platforms: Vec<String>,
}

/// 解決済みプラン
///
/// 外部のビルドエンジンにそのまま渡せる、実行準備の整ったターゲット列。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedPlan {
    /// 選択順のターゲット
    pub targets: Vec<ResolvedTarget>,
}

impl ResolvedPlan {
    /// ビルドエンジンへ転送するためのJSON表現
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
