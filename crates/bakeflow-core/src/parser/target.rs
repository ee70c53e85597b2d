//! ターゲットノードのパース

use crate::error::{BakeError, Result};
use crate::model::{ArgValue, Target};
use kdl::KdlNode;

/// target ノードをパース
///
/// ```kdl
/// target "base-cpu" {
///     dockerfile "Dockerfile-base"
///     tag "${IMAGE_NAME}:base-cpu-${IMAGE_TAG}"
///     platforms "linux/amd64" "linux/arm64"
///     args {
///         build_image "python:3.10-slim"
///     }
/// }
/// ```
pub fn parse_target(node: &KdlNode) -> Result<(String, Target)> {
    let name = node
        .entries()
        .first()
        .and_then(|e| e.value().as_string())
        .ok_or_else(|| BakeError::MalformedDeclaration("target requires a name".to_string()))?
        .to_string();

    let mut target = Target::default();

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "dockerfile" => {
                    if let Some(path) = child.entries().first().and_then(|e| e.value().as_string())
                    {
                        target.dockerfile = path.to_string();
                    }
                }
                "tag" => {
                    // tag ノードは複数宣言でき、宣言順が保持される
                    if let Some(tag) = child.entries().first().and_then(|e| e.value().as_string()) {
                        target.tags.push(tag.to_string());
                    }
                }
                "platforms" => {
                    for entry in child.entries() {
                        if let Some(platform) = entry.value().as_string() {
                            target.platforms.push(platform.to_string());
                        }
                    }
                }
                "args" => {
                    if let Some(args) = child.children() {
                        for arg in args.nodes() {
                            let (arg_name, value) = parse_arg(arg)?;
                            if target.args.insert(arg_name.clone(), value).is_some() {
                                return Err(BakeError::MalformedDeclaration(format!(
                                    "target \"{}\" declares arg \"{}\" twice",
                                    name, arg_name
                                )));
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }

    if target.dockerfile.is_empty() {
        return Err(BakeError::MalformedDeclaration(format!(
            "target \"{}\" requires a dockerfile",
            name
        )));
    }

    Ok((name, target))
}

/// args ブロック内の引数ノードをパース
///
/// サポートされる形式:
/// - テンプレート値: `build_image "python:3.10-slim"`
/// - 条件付き既定値: `haystack_extras var="HAYSTACK_EXTRAS" fallback="..."`
fn parse_arg(node: &KdlNode) -> Result<(String, ArgValue)> {
    let name = node.name().value().to_string();

    let variable = node.get("var").and_then(|v| v.as_string());
    let fallback = node.get("fallback").and_then(|v| v.as_string());

    match (variable, fallback) {
        (Some(variable), Some(fallback)) => Ok((
            name,
            ArgValue::OverrideIfNonEmpty {
                variable: variable.to_string(),
                fallback: fallback.to_string(),
            },
        )),
        (Some(_), None) | (None, Some(_)) => Err(BakeError::MalformedDeclaration(format!(
            "arg \"{}\" requires both var= and fallback=",
            name
        ))),
        (None, None) => {
            let value = node
                .entries()
                .first()
                .and_then(|e| e.value().as_string())
                .ok_or_else(|| {
                    BakeError::MalformedDeclaration(format!("arg \"{}\" requires a value", name))
                })?;
            Ok((name, ArgValue::Template(value.to_string())))
        }
    }
}
