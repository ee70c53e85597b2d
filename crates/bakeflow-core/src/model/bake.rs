//! BakeFile定義

use super::group::Group;
use super::target::Target;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// BakeFile - イメージビルドの設計図
///
/// BakeFileは変数・ターゲット・グループを定義し、
/// どのイメージがどのように組み立てられるかを記述します。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BakeFile {
    /// プロジェクト名
    pub name: String,
    /// 変数の既定値（呼び出し時にオーバーライド可能）
    #[serde(default)]
    pub variables: HashMap<String, String>,
    /// このファイルで定義されるターゲット
    #[serde(default)]
    pub targets: HashMap<String, Target>,
    /// このファイルで定義されるグループ
    #[serde(default)]
    pub groups: HashMap<String, Group>,
}

impl BakeFile {
    /// 宣言済みの全ターゲット名（名前順）
    ///
    /// 名前を指定しない plan コマンドの既定選択として使われます。
    pub fn target_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.targets.keys().cloned().collect();
        names.sort();
        names
    }

    /// 宣言済みの全グループ名（名前順）
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.keys().cloned().collect();
        names.sort();
        names
    }
}
