use rudiments::Settings;
use std::env;
use tempfile::TempDir;

// Single test so no other test in this binary races on the environment
#[test]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        "[calculator]\ninitial_result = 1\n\n[logging]\ndefault = \"info\"\n",
    )
    .unwrap();

    unsafe {
        // Double underscore separates nested levels
        env::set_var("RUDIMENTS_CALCULATOR__INITIAL_RESULT", "7");
        env::set_var("RUDIMENTS_OUTPUT__JSON", "true");
    }

    let settings = Settings::load_from(&config_path).unwrap();

    unsafe {
        env::remove_var("RUDIMENTS_CALCULATOR__INITIAL_RESULT");
        env::remove_var("RUDIMENTS_OUTPUT__JSON");
    }

    // Environment beats the file
    assert_eq!(settings.calculator.initial_result, 7);
    // Env adds a value the file never set
    assert!(settings.output.json);
    // File value remains where no env var is present
    assert_eq!(settings.logging.default, "info");
}
