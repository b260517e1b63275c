#![no_main]

use libfuzzer_sys::fuzz_target;

use ontofactory::config::apply_env_overrides;
use ontofactory::Config;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = toml::from_str::<Config>(content) else {
        return;
    };

    // Whatever parses must serialise and parse back to the same value
    let rendered = toml::to_string(&config).expect("parsed config serialises");
    let reparsed: Config = toml::from_str(&rendered).expect("rendered config parses");
    assert_eq!(reparsed, config);

    // Overrides take the raw input as every variable's value; they must not
    // panic and a non-numeric timeout leaves the parsed value alone
    let overridden = apply_env_overrides(config.clone(), |_| Some(content.to_string()));
    if content.trim().parse::<u64>().is_err() {
        assert_eq!(overridden.converter.timeout_secs, config.converter.timeout_secs);
    }
});
