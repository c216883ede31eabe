use bitga::config::{ConfigManager, TournamentSampling};
use bitga::{BuiltinObjective, GaError};
use std::io::Write;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_shipped_config() {
    let mut manager = ConfigManager::with_env_prefix("BITGA_TEST_SHIPPED");
    manager
        .load_from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/bitga.toml"))
        .unwrap();

    let config = manager.get();
    assert_eq!(config.evolution.population_size, 50);
    assert_eq!(config.evolution.seed, Some(42));
    assert_eq!(config.problem.bounds.len(), 2);
    assert_eq!(config.problem.objective, BuiltinObjective::Trigonometric);
    assert_eq!(config.reporting.progress_interval, 10);
}

#[test]
fn test_load_toml_file() {
    let file = write_temp(
        ".toml",
        r#"
[evolution]
population_size = 31
tournament_sampling = "with_replacement"
elite_carry_over = true

[problem]
bits_per_variable = 12
objective = "rastrigin"
bounds = [{ min = -5.12, max = 5.12 }, { min = -5.12, max = 5.12 }, { min = -1, max = 1 }]
"#,
    );

    let mut manager = ConfigManager::with_env_prefix("BITGA_TEST_TOML");
    manager.load_from_file(file.path()).unwrap();

    let config = manager.get();
    assert_eq!(config.evolution.population_size, 31);
    assert_eq!(
        config.evolution.tournament_sampling,
        TournamentSampling::WithReplacement
    );
    assert!(config.evolution.elite_carry_over);
    assert_eq!(config.problem.chromosome_length(), 36);
    assert_eq!(config.problem.bounds[2].min, -1.0);
}

#[test]
fn test_load_json_file() {
    let file = write_temp(
        ".json",
        r#"{ "evolution": { "num_generations": 7, "crossover_rate": 0.5 },
             "problem": { "objective": "sphere", "bounds": [ { "min": 0.0, "max": 2.0 } ] } }"#,
    );

    let mut manager = ConfigManager::with_env_prefix("BITGA_TEST_JSON");
    manager.load_from_file(file.path()).unwrap();

    let config = manager.get();
    assert_eq!(config.evolution.num_generations, 7);
    assert_eq!(config.evolution.crossover_rate, 0.5);
    assert_eq!(config.problem.variable_count(), 1);
}

#[test]
fn test_invalid_bounds_are_fatal() {
    let file = write_temp(
        ".toml",
        "[problem]\nbounds = [{ min = 1.0, max = -1.0 }, { min = 0.0, max = 1.0 }]\n",
    );

    let mut manager = ConfigManager::with_env_prefix("BITGA_TEST_BOUNDS");
    match manager.load_from_file(file.path()) {
        Err(GaError::InvalidBounds { index: 0, .. }) => {}
        other => panic!("expected InvalidBounds, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_an_error() {
    let mut manager = ConfigManager::with_env_prefix("BITGA_TEST_MISSING");
    assert!(manager.load_from_file("/definitely/not/here.toml").is_err());
}

#[test]
fn test_environment_overrides_file() {
    std::env::set_var("BITGA_TEST_ENV_EVOLUTION__POPULATION_SIZE", "64");
    std::env::set_var("BITGA_TEST_ENV_EVOLUTION__MUTATION_RATE", "0.125");

    let file = write_temp(".toml", "[evolution]\npopulation_size = 10\n");
    let mut manager = ConfigManager::with_env_prefix("BITGA_TEST_ENV");
    manager.load_from_file(file.path()).unwrap();

    let config = manager.get();
    assert_eq!(config.evolution.population_size, 64);
    assert_eq!(config.evolution.mutation_rate, 0.125);
}

#[test]
fn test_saved_config_loads_back() {
    let mut manager = ConfigManager::with_env_prefix("BITGA_TEST_SAVE");
    manager
        .update(|c| {
            c.evolution.seed = Some(9);
            c.evolution.time_limit_secs = Some(2.5);
            c.problem.objective = BuiltinObjective::Sphere;
        })
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");
    manager.save_to_file(&path).unwrap();

    let mut reloaded = ConfigManager::with_env_prefix("BITGA_TEST_SAVE");
    reloaded.load_from_file(&path).unwrap();

    let config = reloaded.get();
    assert_eq!(config.evolution.seed, Some(9));
    assert_eq!(config.evolution.time_limit_secs, Some(2.5));
    assert_eq!(config.problem.objective, BuiltinObjective::Sphere);
}
