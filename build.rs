use std::env;
use std::fs;
use std::path::Path;

// Variables que AppConfig lee con option_env!
const KNOWN_KEYS: &[&str] = &[
    "API_BASE_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "TOAST_DURATION_MS",
    "ERROR_TOAST_DURATION_MS",
    "DEFAULT_COURIER_PASSWORD",
    "COURIER_AGGREGATION",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in KNOWN_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=No se pudo leer .env: {}", e);
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if !KNOWN_KEYS.contains(&key) {
                println!("cargo:warning=Variable desconocida en .env: {}", key);
                continue;
            }
            // El entorno real tiene prioridad sobre .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
