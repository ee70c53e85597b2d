//! モデル定義
//!
//! Bakeflowで使用されるデータモデルを定義します。
//! 各モデルは機能ごとにモジュールに分離されています。

mod bake;
mod group;
mod plan;
mod target;

// Re-exports
pub use bake::*;
pub use group::*;
pub use plan::*;
pub use target::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_bake_file_creation() {
        let mut targets = HashMap::new();
        targets.insert(
            "cpu".to_string(),
            Target {
                dockerfile: "Dockerfile".to_string(),
                tags: vec!["${IMAGE_NAME}:cpu-${IMAGE_TAG}".to_string()],
                ..Default::default()
            },
        );

        let mut groups = HashMap::new();
        groups.insert(
            "api".to_string(),
            Group {
                targets: vec!["cpu".to_string()],
            },
        );

        let file = BakeFile {
            name: "my-images".to_string(),
            variables: HashMap::new(),
            targets,
            groups,
        };

        assert_eq!(file.name, "my-images");
        assert_eq!(file.targets.len(), 1);
        assert_eq!(file.groups.len(), 1);
        assert!(file.targets.contains_key("cpu"));
        assert!(file.groups.contains_key("api"));
    }

    #[test]
    fn test_target_defaults() {
        let target = Target {
            dockerfile: "Dockerfile-base".to_string(),
            ..Default::default()
        };

        assert!(target.tags.is_empty());
        assert!(target.args.is_empty());
        // platforms が空の場合はビルドエンジンの既定値に委ねる
        assert!(target.platforms.is_empty());
    }

    #[test]
    fn test_target_name_ordering() {
        let mut targets = HashMap::new();
        for name in ["gpu", "base-cpu", "cpu"] {
            targets.insert(name.to_string(), Target::default());
        }

        let file = BakeFile {
            name: "test".to_string(),
            variables: HashMap::new(),
            targets,
            groups: HashMap::new(),
        };

        assert_eq!(file.target_names(), vec!["base-cpu", "cpu", "gpu"]);
    }

    #[test]
    fn test_resolved_plan_serialization() {
        let plan = ResolvedPlan {
            targets: vec![ResolvedTarget {
                name: "cpu".to_string(),
                dockerfile: "Dockerfile".to_string(),
                tags: vec!["deepset/haystack:cpu-local".to_string()],
                args: HashMap::new(),
                platforms: vec![],
            }],
        };

        // JSON シリアライズ
        let json = plan.to_json_pretty().unwrap();
        assert!(json.contains("deepset/haystack:cpu-local"));
        assert!(json.contains("Dockerfile"));

        // JSON デシリアライズ
        let deserialized: ResolvedPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.targets.len(), 1);
        assert_eq!(deserialized.targets[0].name, "cpu");
    }
}
