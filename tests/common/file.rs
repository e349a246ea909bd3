use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn write_query_pair(dir: &Path, original: &str, updated: &str) {
    write_file(FileSpec::new(dir.join("original.kql"), original.to_string()));
    write_file(FileSpec::new(dir.join("updated.kql"), updated.to_string()));
}

/// Random multi-line text made of lorem words, one query clause per line.
pub fn generate_query(lines: usize) -> String {
    use fake::{Fake, faker::lorem::en::Words};

    (0..lines)
        .map(|_| format!("| {}", Words(2..6).fake::<Vec<String>>().join(" ")))
        .collect::<Vec<_>>()
        .join("\n")
}
