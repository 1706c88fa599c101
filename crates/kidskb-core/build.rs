fn main() {
    // Validate embedded resources at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_manifest(
        "src/vocabulary/default_vocabulary.txt",
        include_str!("src/vocabulary/default_vocabulary.txt"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

fn validate_manifest(path: &str, content: &str) {
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !line.bytes().all(|b| b.is_ascii_lowercase() || b == b'_') {
            panic!("{path}:{} has an invalid identifier: {line}", idx + 1);
        }
    }
}
