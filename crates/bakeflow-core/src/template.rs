//! テンプレート展開機能
//!
//! タグやビルド引数のテンプレート文字列に含まれる `${VAR}` プレースホルダを
//! 変数の値に置換します。

use crate::error::{BakeError, Result};
use regex::Regex;
use std::collections::HashMap;

/// `${VAR}` プレースホルダの正規表現パターン
const PLACEHOLDER_PATTERN: &str = r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}";

fn placeholder_regex() -> Result<Regex> {
    Regex::new(PLACEHOLDER_PATTERN)
        .map_err(|e| BakeError::MalformedDeclaration(format!("正規表現のコンパイルエラー: {}", e)))
}

/// テンプレート文字列を展開
///
/// `variables` に存在しないプレースホルダが残っている場合は
/// UnresolvedVariable エラーになります。`context` はエラーメッセージで
/// 発生箇所を示すための表示用文字列です。
pub fn expand(
    template: &str,
    variables: &HashMap<String, String>,
    context: &str,
) -> Result<String> {
    let re = placeholder_regex()?;

    // 置換前に未解決のプレースホルダを検出（解決は全体成功か全体失敗）
    for caps in re.captures_iter(template) {
        if let Some(name) = caps.get(1)
            && !variables.contains_key(name.as_str())
        {
            return Err(BakeError::UnresolvedVariable {
                name: name.as_str().to_string(),
                context: context.to_string(),
            });
        }
    }

    let expanded = re.replace_all(template, |caps: &regex::Captures| {
        variables.get(&caps[1]).cloned().unwrap_or_default()
    });

    Ok(expanded.into_owned())
}

/// テンプレート文字列が参照するプレースホルダ名を出現順に抽出
///
/// validate での宣言チェックに使用します。重複はそのまま返します。
pub fn placeholder_names(template: &str) -> Result<Vec<String>> {
    let re = placeholder_regex()?;
    Ok(re
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect())
}
