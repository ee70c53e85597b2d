use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    pub fn write_bake_kdl(&self, content: &str) {
        let path = self.root.path().join("bake.kdl");
        fs::write(path, content).unwrap();
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }
}

/// 実際のプロジェクトを模した宣言ファイル
pub const HAYSTACK_BAKE_KDL: &str = r#"
project "haystack-images"

variables {
    HAYSTACK_VERSION "main"
    GITHUB_REF ""
    IMAGE_NAME "deepset/haystack"
    IMAGE_TAG "local"
    BASE_IMAGE_TAG "local"
    HAYSTACK_EXTRAS ""
}

target "base-cpu" {
    dockerfile "Dockerfile-base"
    tag "${IMAGE_NAME}:base-cpu-${IMAGE_TAG}"
    platforms "linux/amd64" "linux/arm64"
    args {
        build_image "python:3.10-slim"
        base_image "python:3.10-slim"
        haystack_version "${HAYSTACK_VERSION}"
        haystack_extras var="HAYSTACK_EXTRAS" fallback="docstores,crawler,preprocessing,ocr,onnx,beir"
    }
}

target "cpu" {
    dockerfile "Dockerfile"
    tag "${IMAGE_NAME}:cpu-${IMAGE_TAG}"
    args {
        base_image "deepset/haystack"
        base_image_tag "base-cpu-${BASE_IMAGE_TAG}"
    }
}

target "gpu" {
    dockerfile "Dockerfile"
    tag "${IMAGE_NAME}:gpu-${IMAGE_TAG}"
    args {
        base_image "deepset/haystack"
        base_image_tag "base-gpu-${BASE_IMAGE_TAG}"
    }
}

group "base" {
    target "base-cpu"
}

group "api" {
    target "cpu"
    target "gpu"
}
"#;
