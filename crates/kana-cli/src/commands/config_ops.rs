use std::path::Path;

use kana_engine::kana_core::filter::available_filters;
use kana_engine::kana_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(
        settings::load_settings_file(Path::new(file)),
        "Error in {file}: {}"
    );
    let names: Vec<&str> = s.analyzer.filters.iter().map(|f| f.name.as_str()).collect();
    println!(
        "OK: analyzer.max_token_len={}, filters=[{}]",
        s.analyzer.max_token_len,
        names.join(", ")
    );
}

pub fn list_filters() {
    for name in available_filters() {
        println!("{name}");
    }
}
