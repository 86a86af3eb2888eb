#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // We fuzz TOML parsing of Prefs and ensure it never panics and rejects invalids gracefully.
    // Accept both parse errors and validation errors, but do not allow panics.
    let parsed = toml::from_str::<pace_config::Prefs>(data);
    match parsed {
        Ok(prefs) => {
            // Ensure validate() and the tolerant parse do not panic
            let _ = prefs.validate();
            let _ = pace_config::parse_pace(&prefs.min_step_freq);
            let _ = pace_config::parse_pace(&prefs.best_pace);
        }
        Err(_e) => {
            // parse error is acceptable
        }
    }
});
