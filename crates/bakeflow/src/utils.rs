use anyhow::anyhow;
use std::collections::HashMap;

/// --set VAR=VALUE 形式のオーバーライドをパース
///
/// 同じ変数が複数回指定された場合は後勝ち。値は空文字列でもよい
/// （空の扱いはリゾルバ側のポリシーに委ねる）。
pub fn parse_overrides(pairs: &[String]) -> anyhow::Result<HashMap<String, String>> {
    let mut overrides = HashMap::new();

    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            anyhow!(
                "無効なオーバーライド指定です: {}\nVAR=VALUE 形式で指定してください",
                pair
            )
        })?;
        overrides.insert(key.trim().to_string(), value.to_string());
    }

    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_overrides() {
        let overrides =
            parse_overrides(&pairs(&["IMAGE_TAG=1.14.0", "IMAGE_NAME=deepset/haystack"])).unwrap();

        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides["IMAGE_TAG"], "1.14.0");
        assert_eq!(overrides["IMAGE_NAME"], "deepset/haystack");
    }

    #[test]
    fn test_parse_overrides_last_wins() {
        let overrides = parse_overrides(&pairs(&["IMAGE_TAG=a", "IMAGE_TAG=b"])).unwrap();
        assert_eq!(overrides["IMAGE_TAG"], "b");
    }

    #[test]
    fn test_parse_overrides_empty_value() {
        let overrides = parse_overrides(&pairs(&["HAYSTACK_EXTRAS="])).unwrap();
        assert_eq!(overrides["HAYSTACK_EXTRAS"], "");
    }

    #[test]
    fn test_parse_overrides_value_with_equals() {
        // 値側の = は最初の = までがキー
        let overrides = parse_overrides(&pairs(&["EXTRA=key=value"])).unwrap();
        assert_eq!(overrides["EXTRA"], "key=value");
    }

    #[test]
    fn test_parse_overrides_missing_equals_fails() {
        let result = parse_overrides(&pairs(&["IMAGE_TAG"]));
        assert!(result.is_err());
    }
}
