use atomscope_testing::TestWorld;

#[test]
fn test_init_then_refuse_overwrite() {
    let world = TestWorld::new();

    let first = world.run(&["config", "init"]).unwrap();
    assert!(first.success(), "stderr: {}", first.stderr());
    assert!(world.config_path().exists());

    let second = world.run(&["config", "init"]).unwrap();
    assert!(!second.success());
    assert!(second.stderr().contains("already exists"));

    let forced = world.run(&["config", "init", "--force"]).unwrap();
    assert!(forced.success());
}

#[test]
fn test_show_merges_file_and_flags() {
    let world = TestWorld::new().with_config(
        r#"
language = "en"
default_limit = 25

[wallet]
address = "0xABCDEF1234567890abcdef1234567890ABCDEF12"
"#,
    );

    let result = world
        .run(&[
            "config",
            "show",
            "--format",
            "json",
            "--api-url",
            "https://api.example.org",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["exists"], true);
    assert_eq!(json["config"]["api_url"], "https://api.example.org");
    assert_eq!(json["config"]["language"], "en");
    assert_eq!(json["config"]["default_limit"], 25);
    assert_eq!(json["config"]["fetch_multiplier"], 2);
    assert_eq!(
        json["config"]["wallet"]["address"],
        "0xABCDEF1234567890abcdef1234567890ABCDEF12"
    );
}

#[test]
fn test_api_url_from_environment() {
    let world = TestWorld::new().with_env("ATOMSCOPE_API_URL", "http://env.example");
    let result = world.run(&["config", "show", "--format", "json"]).unwrap();
    assert_eq!(result.json().unwrap()["config"]["api_url"], "http://env.example");
}

#[test]
fn test_invalid_config_is_reported() {
    let world = TestWorld::new().with_config("default_limit = 30\n");
    let result = world.run(&["config", "show"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Invalid config file"));
}
