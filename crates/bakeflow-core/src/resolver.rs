//! ターゲット解決機能
//!
//! 宣言とランタイムの変数オーバーライドから解決済みプランを生成します。
//! 解決は純粋な計算で、ビルドエンジンを呼び出すことはありません。

use crate::error::{BakeError, Result};
use crate::model::{ArgValue, BakeFile, ResolvedPlan, ResolvedTarget, Target};
use crate::template;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// ターゲットリゾルバ
pub struct TargetResolver<'a> {
    file: &'a BakeFile,
}

impl<'a> TargetResolver<'a> {
    pub fn new(file: &'a BakeFile) -> Self {
        Self { file }
    }

    /// 要求されたターゲット/グループ名を解決済みプランに変換
    ///
    /// グループ名はメンバーターゲットに展開され、重複は初出順を保って
    /// 除去されます。未宣言の名前は UnknownTarget、既定値もオーバーライドも
    /// 無いプレースホルダは UnresolvedVariable になります。
    /// 部分的な成功はなく、最初のエラーで解決全体が中断します。
    pub fn resolve(
        &self,
        names: &[String],
        overrides: &HashMap<String, String>,
    ) -> Result<ResolvedPlan> {
        let selection = self.expand_selection(names)?;
        let variables = self.effective_variables(overrides);

        debug!(
            requested = names.len(),
            selected = selection.len(),
            "Resolving build plan"
        );

        let mut targets = Vec::with_capacity(selection.len());
        for name in &selection {
            let target = self
                .file
                .targets
                .get(name)
                .ok_or_else(|| BakeError::UnknownTarget(name.clone()))?;
            targets.push(self.resolve_target(name, target, &variables)?);
        }

        Ok(ResolvedPlan { targets })
    }

    /// 宣言全体の整合性を検証
    ///
    /// - 全グループのメンバーが宣言済みターゲットを指していること
    /// - 全テンプレートのプレースホルダが宣言済み変数を参照していること
    ///   （既定値のみでの解決が必ず成功する状態を保証する）
    pub fn validate(&self) -> Result<()> {
        for (group_name, group) in &self.file.groups {
            for member in &group.targets {
                if !self.file.targets.contains_key(member) {
                    debug!(group = %group_name, member = %member, "Group references unknown target");
                    return Err(BakeError::UnknownTarget(member.clone()));
                }
            }
        }

        for (target_name, target) in &self.file.targets {
            let mut templates: Vec<(&str, String)> = Vec::new();
            for tag in &target.tags {
                templates.push((tag.as_str(), format!("target \"{}\" の tag", target_name)));
            }
            for (arg_name, value) in &target.args {
                if let ArgValue::Template(t) = value {
                    templates.push((
                        t.as_str(),
                        format!("target \"{}\" の arg \"{}\"", target_name, arg_name),
                    ));
                }
            }

            for (text, context) in templates {
                for name in template::placeholder_names(text)? {
                    if !self.file.variables.contains_key(&name) {
                        return Err(BakeError::UnresolvedVariable { name, context });
                    }
                }
            }
        }

        Ok(())
    }

    /// グループを展開し、初出順を保ちつつ重複を除去
    fn expand_selection(&self, names: &[String]) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        let mut selection = Vec::new();

        for name in names {
            if let Some(group) = self.file.groups.get(name) {
                for member in &group.targets {
                    // グループのメンバーは必ず宣言済みターゲットを指すこと
                    if !self.file.targets.contains_key(member) {
                        return Err(BakeError::UnknownTarget(member.clone()));
                    }
                    if seen.insert(member.clone()) {
                        selection.push(member.clone());
                    }
                }
            } else if self.file.targets.contains_key(name) {
                if seen.insert(name.clone()) {
                    selection.push(name.clone());
                }
            } else {
                return Err(BakeError::UnknownTarget(name.clone()));
            }
        }

        Ok(selection)
    }

    /// オーバーライドと宣言済み既定値をマージ
    ///
    /// オーバーライドは空文字列でもそのまま採用されます。空を「未指定」と
    /// 見なすのは OverrideIfNonEmpty 引数の解決時のみです。
    fn effective_variables(&self, overrides: &HashMap<String, String>) -> HashMap<String, String> {
        let mut variables = self.file.variables.clone();
        for (key, value) in overrides {
            variables.insert(key.clone(), value.clone());
        }
        variables
    }

    /// 1ターゲットの全テンプレートを展開
    fn resolve_target(
        &self,
        name: &str,
        target: &Target,
        variables: &HashMap<String, String>,
    ) -> Result<ResolvedTarget> {
        let mut tags = Vec::with_capacity(target.tags.len());
        for tag in &target.tags {
            let context = format!("target \"{}\" の tag", name);
            tags.push(template::expand(tag, variables, &context)?);
        }

        let mut args = HashMap::new();
        for (arg_name, value) in &target.args {
            let resolved = match value {
                ArgValue::Template(t) => {
                    let context = format!("target \"{}\" の arg \"{}\"", name, arg_name);
                    template::expand(t, variables, &context)?
                }
                ArgValue::OverrideIfNonEmpty { variable, fallback } => {
                    match variables.get(variable) {
                        Some(value) if !value.is_empty() => value.clone(),
                        // 未宣言または空文字列は「未指定」としてフォールバック
                        _ => fallback.clone(),
                    }
                }
            };
            args.insert(arg_name.clone(), resolved);
        }

        Ok(ResolvedTarget {
            name: name.to_string(),
            dockerfile: target.dockerfile.clone(),
            tags,
            args,
            platforms: target.platforms.clone(),
        })
    }
}
