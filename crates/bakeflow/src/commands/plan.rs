use crate::utils;
use bakeflow_core::{BakeFile, ResolvedPlan, TargetResolver};
use colored::Colorize;

/// planコマンドを処理
///
/// 要求されたターゲット/グループを解決済みプランに変換して表示する。
/// ビルド自体は行わない（プランは外部のビルドエンジンに渡す）。
pub fn handle(file: &BakeFile, names: &[String], set: &[String], json: bool) -> anyhow::Result<()> {
    let overrides = utils::parse_overrides(set)?;

    // 名前省略時は宣言済みの全ターゲット
    let selection: Vec<String> = if names.is_empty() {
        file.target_names()
    } else {
        names.to_vec()
    };

    let resolver = TargetResolver::new(file);
    let plan = resolver.resolve(&selection, &overrides)?;
    tracing::debug!(targets = plan.targets.len(), "Resolved build plan");

    if json {
        // ビルドエンジンへの転送用にそのまま出力
        println!("{}", plan.to_json_pretty()?);
        return Ok(());
    }

    print_plan(file, &plan);
    Ok(())
}

/// 解決済みプランを表示
fn print_plan(file: &BakeFile, plan: &ResolvedPlan) {
    println!("プロジェクト: {}", file.name.cyan());
    println!();
    println!(
        "{}",
        format!("解決済みターゲット ({} 個):", plan.targets.len()).bold()
    );

    for target in &plan.targets {
        println!();
        println!("{}", format!("🔨 {}", target.name).green().bold());
        println!("  → Dockerfile: {}", target.dockerfile.cyan());
        for tag in &target.tags {
            println!("  → Tag: {}", tag.cyan());
        }
        if !target.platforms.is_empty() {
            println!("  → Platforms: {}", target.platforms.join(", ").cyan());
        }
        if !target.args.is_empty() {
            println!("  → Args:");
            let mut arg_names: Vec<&String> = target.args.keys().collect();
            arg_names.sort();
            for name in arg_names {
                println!("      {}={}", name, target.args[name].cyan());
            }
        }
    }
}
