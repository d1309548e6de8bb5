use std::{
    env, fs,
    path::{Path, PathBuf},
};

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());

    // go up twice to the workspace root, then into "configs".
    let project_root = manifest_dir.parent().unwrap().parent().unwrap();
    let configs_dir = project_root.join("configs");

    let mut files = Vec::new();
    let mut dirs = Vec::new();
    if configs_dir.is_dir() {
        collect_files(&configs_dir, &mut files, &mut dirs);
    }
    files.sort();

    // rerun when files are added or removed
    for dir in &dirs {
        println!("cargo:rerun-if-changed={}", dir.display());
    }
    // and when any file is modified
    for path in &files {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    let mut out = String::from("config_file_tests! {\n");

    for path in files {
        let rel = path.strip_prefix(project_root).unwrap();
        let rel_str = rel.to_string_lossy();

        // "configs/in-process.toml" -> "configs_in_process_toml"
        let test_name: String = rel_str
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        out.push_str(&format!("    {test_name} => {rel_str:?},\n"));
    }

    out.push_str("}\n");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("generated_config_tests.rs"), out).unwrap();
}

fn collect_files(dir: &Path, acc: &mut Vec<PathBuf>, dirs: &mut Vec<PathBuf>) {
    dirs.push(dir.to_path_buf());
    for entry in fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, acc, dirs);
        } else if matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("toml") | Some("json") | Some("yaml") | Some("yml")
        ) {
            acc.push(path);
        }
    }
}
