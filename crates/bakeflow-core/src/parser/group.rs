//! グループノードのパース

use crate::error::{BakeError, Result};
use crate::model::Group;
use kdl::KdlNode;

/// group ノードをパース
///
/// ```kdl
/// group "api" {
///     target "cpu"
///     target "gpu"
/// }
/// ```
pub fn parse_group(node: &KdlNode) -> Result<(String, Group)> {
    let name = node
        .entries()
        .first()
        .and_then(|e| e.value().as_string())
        .ok_or_else(|| BakeError::MalformedDeclaration("group requires a name".to_string()))?
        .to_string();

    let mut group = Group::default();

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "target" => {
                    // target "name" 形式でメンバーを指定（重複可、宣言順を保持）
                    if let Some(target_name) =
                        child.entries().first().and_then(|e| e.value().as_string())
                    {
                        group.targets.push(target_name.to_string());
                    }
                }
                _ => {}
            }
        }
    }

    if group.targets.is_empty() {
        return Err(BakeError::MalformedDeclaration(format!(
            "group \"{}\" requires at least one target",
            name
        )));
    }

    Ok((name, group))
}
