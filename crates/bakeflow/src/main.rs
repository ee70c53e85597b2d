mod commands;
mod utils;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bake")]
#[command(about = "宣言する。焼き上がる。イメージビルドは、レシピになった。", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// ビルドプランを解決して表示
    Plan {
        /// ターゲット名またはグループ名（省略時は全ターゲット）
        names: Vec<String>,
        /// 変数のオーバーライド（VAR=VALUE 形式、複数指定時は後勝ち）
        #[arg(short = 's', long = "set", value_name = "VAR=VALUE")]
        set: Vec<String>,
        /// ビルドエンジン転送用にJSONで出力
        #[arg(long)]
        json: bool,
    },
    /// ターゲットとグループの一覧を表示
    List,
    /// 宣言ファイルを検証
    Validate,
    /// バージョン情報を表示
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ログはstderrに出力（stdoutはプラン出力に使う）
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // Versionコマンドは宣言ファイル不要
    if matches!(cli.command, Commands::Version) {
        println!("bakeflow {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Validateコマンドは独自のエラー表示を行う
    if matches!(cli.command, Commands::Validate) {
        return commands::validate::handle();
    }

    // プロジェクトルートを検索して宣言ファイルをロード
    let project_root = bakeflow_core::find_project_root()?;
    let file = bakeflow_core::load_bake_file(&project_root)?;

    // コマンドディスパッチ
    match cli.command {
        Commands::Plan { names, set, json } => {
            commands::plan::handle(&file, &names, &set, json)?;
        }
        Commands::List => {
            commands::list::handle(&file);
        }
        Commands::Validate => {
            unreachable!("Validate is handled before config loading");
        }
        Commands::Version => {
            unreachable!("Version is handled before config loading");
        }
    }

    Ok(())
}
