use tempdir::TempDir;
use nvekin_core::load_snapshot_rows;
use nvekin_solver::config::{SimulationConfig, Species};
use crate::commands::{generate_default_config, load_config, run, sum_velocities};

fn tiny_config() -> SimulationConfig {
    SimulationConfig {
        species: vec![Species::new("LJ", 1.0, 1.0, 1.0, 8)],
        density: 0.1,
        step_count: 100,
        report_interval: 2,
        seed: Some(12),
        ..SimulationConfig::default()
    }
}

#[test]
fn default_config_file() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let path = temp_dir.path().join("config.json");
    generate_default_config(&path).expect("Can't save config");
    let config = load_config(&Some(path)).expect("Can't load config");
    assert_eq!(config, SimulationConfig::default());
    assert_eq!(load_config(&None).expect("Can't get default"), SimulationConfig::default());
}

#[test]
fn partial_config_file() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, r#"{"density": 0.5, "thermostat": {"kind": "Berendsen", "tau": 0.1}}"#)
        .expect("Can't write config");
    let config = load_config(&Some(path)).expect("Can't load config");
    assert_eq!(config.density, 0.5);
    assert_eq!(config.particle_count(), 100);
    assert_eq!(config.thermostat, nvekin_solver::initializer::Thermostat::Berendsen { tau: 0.1 });
}

#[test]
fn run_saves_snapshots() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let out_dir = temp_dir.path().join("data");
    let report = run(tiny_config(), &out_dir, "system", Some(4), None, false)
        .expect("Can't run simulation");
    assert_eq!(report.summary.last_step, 4);
    assert!(!report.summary.stopped);
    assert!(report.center_of_mass_velocity.iter().all(|v| v.is_finite()));
    for step in [0, 2, 4] {
        let path = out_dir.join(format!("system{}.csv", step));
        let rows = load_snapshot_rows(&path).expect("Can't load snapshot");
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().enumerate().all(|(i, row)| row.index == i));
        let velocity_sum = sum_velocities(&path).expect("Can't sum velocities");
        assert!(velocity_sum.iter().all(|v| v.is_finite()));
    }
    assert!(!out_dir.join("system1.csv").exists());
    assert!(!out_dir.join("system3.csv").exists());
    assert!(!out_dir.join("system4.csv.tmp").exists());
}

#[test]
fn run_without_saving() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let out_dir = temp_dir.path().join("data");
    let report = run(tiny_config(), &out_dir, "system", Some(3), Some(5), true)
        .expect("Can't run simulation");
    assert_eq!(report.summary.last_step, 3);
    assert!(!out_dir.exists());
}

#[test]
fn sum_velocities_of_snapshot() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let path = temp_dir.path().join("system0.csv");
    std::fs::write(&path, "index,posx,posy,posz,velox,veloy,veloz,accx,accy,accz\n\
                           0,0.5,0.5,0.5,1.0,-2.0,0.5,0,0,0\n\
                           1,1.5,0.5,0.5,-0.25,2.0,0.5,0,0,0\n")
        .expect("Can't write snapshot");
    let sum = sum_velocities(&path).expect("Can't sum velocities");
    assert_eq!(sum, nalgebra::Vector3::new(0.75, 0.0, 1.0));
}

#[test]
fn center_of_mass_velocity_of_mixed_run() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let out_dir = temp_dir.path().join("data");
    let config = SimulationConfig {
        species: vec![Species::new("light", 1.0, 1.0, 1.0, 4), Species::new("heavy", 1.0, 1.0, 3.0, 4)],
        ..tiny_config()
    };
    let report = run(config, &out_dir, "system", Some(2), None, false)
        .expect("Can't run simulation");
    let rows = load_snapshot_rows(&out_dir.join("system2.csv")).expect("Can't load snapshot");
    let masses = [1.0, 1.0, 1.0, 1.0, 3.0, 3.0, 3.0, 3.0];
    let momentum = rows.iter().zip(masses).fold(nalgebra::Vector3::zeros(), |acc, (row, mass)| {
        acc + nalgebra::Vector3::new(row.velox, row.veloy, row.veloz) * mass
    });
    let expected = momentum / 16.0;
    for axis in 0..3 {
        assert_eq!(format!("{:.8}", report.center_of_mass_velocity[axis]),
                   format!("{:.8}", expected[axis]));
    }
}

#[test]
fn info_is_default_log_level() {
    std::env::remove_var("RUST_LOG");
    let logger = env_logger::Builder::from_env(crate::logger_env()).build();
    assert_eq!(logger.filter(), log::LevelFilter::Info);
}
