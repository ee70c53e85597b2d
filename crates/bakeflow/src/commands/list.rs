use bakeflow_core::BakeFile;
use colored::Colorize;

/// listコマンドを処理
pub fn handle(file: &BakeFile) {
    println!("プロジェクト: {}", file.name.cyan());
    println!();

    println!(
        "{}",
        format!("ターゲット ({} 個):", file.targets.len()).bold()
    );
    for name in file.target_names() {
        let target = &file.targets[&name];
        println!("  • {} ({})", name.cyan(), target.dockerfile);
    }

    println!();
    println!("{}", format!("グループ ({} 個):", file.groups.len()).bold());
    for name in file.group_names() {
        let group = &file.groups[&name];
        println!("  • {} → {}", name.cyan(), group.targets.join(", "));
    }
}
