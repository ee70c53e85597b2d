//! グループ定義

use serde::{Deserialize, Serialize};

/// グループ定義
///
/// 複数のターゲットをまとめて選択するための名前付きコレクション。
/// ターゲットに対する命名上の便宜でしかなく、実行順には影響しません。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Group {
    /// メンバーターゲット名のリスト（宣言順、重複可）
    #[serde(default)]
    pub targets: Vec<String>,
}
