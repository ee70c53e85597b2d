//! KDLパーサー
//!
//! BakeflowのKDL宣言ファイルをパースします。
//! 各ノードタイプのパース処理はモジュールに分離されています。

mod group;
mod target;

use group::parse_group;
use target::parse_target;

use crate::error::{BakeError, Result};
use crate::model::BakeFile;
use kdl::KdlDocument;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// KDLファイルをパースしてBakeFileを生成
pub fn parse_kdl_file<P: AsRef<Path>>(path: P) -> Result<BakeFile> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| BakeError::IoError {
        path: path.as_ref().to_path_buf(),
        message: e.to_string(),
    })?;
    let name = path
        .as_ref()
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string();
    parse_kdl_string(&content, name)
}

/// KDL文字列をパース
pub fn parse_kdl_string(content: &str, default_name: String) -> Result<BakeFile> {
    let doc: KdlDocument = content.parse()?;

    let mut name = default_name;
    let mut variables: HashMap<String, String> = HashMap::new();
    let mut targets = HashMap::new();
    let mut groups = HashMap::new();

    for node in doc.nodes() {
        match node.name().value() {
            "project" => {
                // projectノードから名前を取得
                if let Some(project_name) =
                    node.entries().first().and_then(|e| e.value().as_string())
                {
                    name = project_name.to_string();
                }
            }
            "variables" => {
                if let Some(vars) = node.children() {
                    for var in vars.nodes() {
                        let key = var.name().value().to_string();
                        let value = var
                            .entries()
                            .first()
                            .and_then(|e| e.value().as_string())
                            .ok_or_else(|| {
                                BakeError::MalformedDeclaration(format!(
                                    "variable \"{}\" requires a default value",
                                    key
                                ))
                            })?
                            .to_string();
                        if variables.insert(key.clone(), value).is_some() {
                            return Err(BakeError::MalformedDeclaration(format!(
                                "variable \"{}\" is declared twice",
                                key
                            )));
                        }
                    }
                }
            }
            "target" => {
                let (target_name, target) = parse_target(node)?;
                if targets.insert(target_name.clone(), target).is_some() {
                    return Err(BakeError::MalformedDeclaration(format!(
                        "target \"{}\" is declared twice",
                        target_name
                    )));
                }
            }
            "group" => {
                let (group_name, group) = parse_group(node)?;
                if groups.insert(group_name.clone(), group).is_some() {
                    return Err(BakeError::MalformedDeclaration(format!(
                        "group \"{}\" is declared twice",
                        group_name
                    )));
                }
            }
            _ => {
                // 不明なノードはスキップ（将来の拡張ノードも許可）
            }
        }
    }

    Ok(BakeFile {
        name,
        variables,
        targets,
        groups,
    })
}
