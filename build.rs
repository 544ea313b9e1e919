use std::env;
use std::fs;
use std::path::Path;

/// Variables que `config.rs` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "API_BASE_URL",
    "USER_ID",
    "GATEWAY_VARIANT",
    "LANGUAGE",
    "ENABLE_LOGGING",
    "SHOW_JSON_DEBUG",
    "CAFE_LAT",
    "CAFE_LNG",
    "CAFE_DELTA",
    "IMAGE_QUALITY",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No hay .env: se usan los valores por defecto (ver .env.example)");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No se pudo leer .env");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }
        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}

/// `KEY=VALUE`, ignorando comentarios, líneas vacías y comillas
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim().trim_matches('"');
    Some((key.trim(), value))
}
