//! ファイル自動発見機能
//!
//! カレントディレクトリから上に向かって bake.kdl を探します。

use crate::error::{BakeError, Result};
use crate::model::BakeFile;
use crate::parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 宣言ファイル名
pub const BAKE_FILE_NAME: &str = "bake.kdl";

/// プロジェクトルートを検出
///
/// 以下の優先順位で検索:
/// 1. 環境変数 BAKEFLOW_PROJECT_ROOT
/// 2. カレントディレクトリから上に向かって bake.kdl を探す
#[tracing::instrument]
pub fn find_project_root() -> Result<PathBuf> {
    // 1. 環境変数
    if let Ok(root) = std::env::var("BAKEFLOW_PROJECT_ROOT") {
        let path = PathBuf::from(&root);
        debug!(env_root = %root, "Checking BAKEFLOW_PROJECT_ROOT");
        if path.join(BAKE_FILE_NAME).exists() {
            info!(project_root = %path.display(), "Found project root from environment variable");
            return Ok(path);
        }
    }

    // 2. カレントディレクトリから上に向かって探す
    let start_dir = std::env::current_dir()?;
    find_project_root_from(&start_dir)
}

/// 指定ディレクトリから上に向かってプロジェクトルートを検出
pub fn find_project_root_from(start_dir: &Path) -> Result<PathBuf> {
    let mut current = start_dir.to_path_buf();
    debug!(start_dir = %start_dir.display(), "Searching for project root");

    loop {
        let bake_file = current.join(BAKE_FILE_NAME);
        debug!(checking = %current.display(), "Looking for bake.kdl");
        if bake_file.exists() {
            info!(project_root = %current.display(), "Found project root (bake.kdl)");
            return Ok(current);
        }

        // 親ディレクトリへ
        if !current.pop() {
            break;
        }
    }

    warn!(start_dir = %start_dir.display(), "Project root not found");
    Err(BakeError::ProjectRootNotFound(start_dir.to_path_buf()))
}

/// プロジェクトルートから宣言ファイルをロード
#[tracing::instrument(skip(project_root), fields(project_root = %project_root.display()))]
pub fn load_bake_file(project_root: &Path) -> Result<BakeFile> {
    let path = project_root.join(BAKE_FILE_NAME);
    debug!(file = %path.display(), "Loading bake file");
    parser::parse_kdl_file(path)
}
