use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("presets.rs");

    let mut code = String::new();
    code.push_str("/// Embedded preset files as (name, yaml)\n");
    code.push_str("pub static PRESETS: &[(&str, &str)] = &[\n");

    let presets_dir = Path::new("presets");

    if presets_dir.exists() {
        for entry in WalkDir::new(presets_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "yaml"))
        {
            let path = entry.path();
            let relative_path = path.strip_prefix(presets_dir).unwrap().with_extension("");

            // "guitar/drop_d" on every platform
            let name = relative_path
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            if let Ok(content) = fs::read_to_string(path) {
                code.push_str(&format!("    ({:?}, {:?}),\n", name, content));
            }
        }
    }

    code.push_str("];\n");

    fs::write(&dest_path, code).unwrap();

    println!("cargo:rerun-if-changed=presets");
}
