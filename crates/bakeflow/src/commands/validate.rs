use bakeflow_core::TargetResolver;
use colored::Colorize;

/// validateコマンドを処理
pub fn handle() -> anyhow::Result<()> {
    println!("{}", "宣言を検証中...".blue());

    // プロジェクトルートを検出
    match bakeflow_core::find_project_root() {
        Ok(project_root) => {
            println!(
                "プロジェクトルート: {}",
                project_root.display().to_string().cyan()
            );

            match bakeflow_core::load_bake_file(&project_root) {
                Ok(file) => {
                    let resolver = TargetResolver::new(&file);
                    if let Err(e) = resolver.validate() {
                        eprintln!();
                        eprintln!("{}", "✗ 宣言エラー".red().bold());
                        eprintln!("  {}", e);
                        std::process::exit(1);
                    }

                    println!("{}", "✓ 宣言ファイルは正常です！".green().bold());
                    println!();
                    println!("サマリー:");
                    println!("  変数: {}個", file.variables.len());
                    println!("  ターゲット: {}個", file.targets.len());
                    for name in file.target_names() {
                        let target = &file.targets[&name];
                        println!("    - {} ({})", name.cyan(), target.dockerfile);
                    }
                    println!("  グループ: {}個", file.groups.len());
                    for name in file.group_names() {
                        let group = &file.groups[&name];
                        println!(
                            "    - {} ({}個のターゲット)",
                            name.cyan(),
                            group.targets.len()
                        );
                    }
                }
                Err(e) => {
                    eprintln!();
                    eprintln!("{}", "✗ 宣言エラー".red().bold());
                    eprintln!("  {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!();
            eprintln!("{}", "✗ プロジェクトルートが見つかりません".red().bold());
            eprintln!("  {}", e);
            eprintln!();
            eprintln!("bake.kdl が存在するディレクトリで実行してください");
            std::process::exit(1);
        }
    }

    Ok(())
}
