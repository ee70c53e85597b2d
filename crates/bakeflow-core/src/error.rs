use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BakeError {
    #[error("KDLパースエラー: {0}")]
    KdlParse(#[from] kdl::KdlError),

    #[error("ファイル読み込みエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO エラー: {path}\n理由: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("無効な宣言: {0}")]
    MalformedDeclaration(String),

    #[error("ターゲットが見つかりません: {0}")]
    UnknownTarget(String),

    #[error(
        "変数が解決できません: ${{{name}}}\n場所: {context}\nヒント: variables ブロックで既定値を宣言するか、--set {name}=<値> で上書きしてください"
    )]
    UnresolvedVariable { name: String, context: String },

    #[error(
        "プロジェクトルートが見つかりません\n探索開始位置: {0}\nヒント: bake.kdl ファイルを含むディレクトリで実行してください"
    )]
    ProjectRootNotFound(PathBuf),

    #[error("JSONシリアライズエラー: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BakeError>;
