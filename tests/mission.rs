//! End-to-end searches through the session and scenario runner.

mod common;

use drishti::{
    AgentId, AgentPhase, Bounds3, BoxWorld, DrishtiConfig, FlatTerrain, MissionConfig,
    MissionDriver, NoOcclusion, PatternKind, Point3, ScenarioRunner, SearchSession,
    SensorFootprint, SplitAxis,
};

use common::StaticAgent;

fn small_config() -> DrishtiConfig {
    let mut config = DrishtiConfig::default();
    config.area.size = Point3::new(40.0, 0.0, 40.0);
    config.swarm.agent_count = 1;
    config
}

#[test]
fn test_default_scenario_covers_area() {
    env_logger::builder().is_test(true).try_init().ok();
    let report = ScenarioRunner::new(DrishtiConfig::default()).run().unwrap();

    assert!(report.completed);
    assert!(report.ticks > 0);
    assert_eq!(report.agents.len(), 2);
    assert!(
        report.coverage.effective_percentage() > 95.0,
        "coverage {}",
        report.coverage
    );
    for agent in &report.agents {
        assert_eq!(agent.waypoints, 14);
        assert!(agent.distance_flown >= agent.path_length * 0.9);
        assert!(agent.cells_observed > 0);
    }
    assert!(report.detection.is_none());
}

#[test]
fn test_tower_is_excluded_from_effective_coverage() {
    env_logger::builder().is_test(true).try_init().ok();
    let tower = Bounds3::new(Point3::new(-5.0, 0.0, -5.0), Point3::new(5.0, 20.0, 5.0));
    let report = ScenarioRunner::new(DrishtiConfig::default())
        .with_raycaster(Box::new(BoxWorld::new().with_obstacle(tower)))
        .run()
        .unwrap();

    assert!(report.completed);
    assert_eq!(report.coverage.occluded_cells, 36);
    assert!(report.coverage.effective_percentage() > 90.0);
    assert!(report.coverage.coverage_percentage() < report.coverage.effective_percentage());
}

#[test]
fn test_zero_agents_finish_immediately() {
    let mut config = DrishtiConfig::default();
    config.swarm.agent_count = 0;
    let report = ScenarioRunner::new(config).run().unwrap();

    assert!(report.completed);
    assert_eq!(report.ticks, 0);
    assert!(report.agents.is_empty());
    assert_eq!(report.coverage.observed_cells, 0);
}

#[test]
fn test_every_pattern_completes() {
    for pattern in PatternKind::ALL {
        let mut config = DrishtiConfig::default();
        config.planner.pattern = pattern;
        let report = ScenarioRunner::new(config).run().unwrap();

        assert!(report.completed, "{pattern} did not finish");
        assert!(
            report.coverage.effective_percentage() > 90.0,
            "{pattern}: {}",
            report.coverage
        );
    }
}

#[test]
fn test_split_along_z() {
    let mut config = DrishtiConfig::default();
    config.planner.split_axis = SplitAxis::Z;
    config.swarm.agent_count = 3;
    let report = ScenarioRunner::new(config).run().unwrap();

    assert!(report.completed);
    assert!(report.coverage.effective_percentage() > 95.0);
}

#[test]
fn test_tick_limit_stops_run() {
    let mut config = DrishtiConfig::default();
    config.run.max_ticks = 10;
    let report = ScenarioRunner::new(config).run().unwrap();

    assert!(!report.completed);
    assert_eq!(report.ticks, 10);
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = DrishtiConfig::default();
    config.planner.overlap = 1.5;
    let err = ScenarioRunner::new(config).run().unwrap_err();
    assert_eq!(err.code(), "CONFIG");
}

#[test]
fn test_detection_probabilities() {
    let mut config = DrishtiConfig::default();
    config.detection.enabled = true;
    config.detection.targets = vec![
        Point3::new(-20.0, 0.0, 15.0),
        Point3::new(35.0, 0.0, -40.0),
        Point3::new(500.0, 0.0, 500.0),
    ];
    let report = ScenarioRunner::new(config).run().unwrap();
    let detection = report.detection.expect("detection enabled");

    assert_eq!(detection.probabilities.len(), 3);
    assert_eq!(detection.estimated.len(), 3);
    assert_eq!(detection.detected.len(), 3);

    assert!(detection.probabilities[0] > 0.0);
    assert!(detection.probabilities[1] > 0.0);
    assert_eq!(detection.probabilities[2], 0.0);
    assert!(detection.estimated[0] > 0.0);
    assert_eq!(detection.estimated[2], 0.0);
    assert!(!detection.detected[2]);
    for p in detection.probabilities.iter().chain(&detection.estimated) {
        assert!((0.0..=1.0).contains(p));
    }
}

#[test]
fn test_detection_is_reproducible() {
    let mut config = DrishtiConfig::default();
    config.detection.enabled = true;
    config.detection.targets = vec![Point3::new(-20.0, 0.0, 15.0), Point3::new(5.0, 0.0, 5.0)];

    let a = ScenarioRunner::new(config.clone()).run().unwrap();
    let b = ScenarioRunner::new(config).run().unwrap();
    assert_eq!(a.detection, b.detection);
}

#[test]
fn test_session_visits_every_waypoint_in_order() {
    let config = small_config();
    let sensor = SensorFootprint::cylinder(config.swarm.sensor.radius);
    let mut agents = vec![StaticAgent::new(Point3::new(-20.0, 0.0, -20.0), sensor)];

    let mut session =
        SearchSession::new(&config, &mut agents, Box::new(NoOcclusion), &FlatTerrain).unwrap();
    let planned = session.path(AgentId(0)).to_vec();
    assert!(!planned.is_empty());

    let mut ticks = 0;
    while !session.is_complete() && ticks < 1_000 {
        session.step(config.run.dt, &mut agents);
        // Perfect tracking: jump straight to the current target
        for agent in &mut agents {
            if let Some(&target) = agent.targets.last() {
                agent.position = target;
            }
        }
        ticks += 1;
    }
    session.evaluate_now(&agents);

    assert!(session.is_complete());
    assert_eq!(agents[0].targets, planned);
    assert!(session.coverage_stats().observed_cells > 0);
    assert_eq!(session.sample_position(0.0, AgentId(0)), planned[0]);
    assert_eq!(
        session.sample_position(1.0, AgentId(0)),
        planned[planned.len() - 1]
    );

    session.reset_coverage();
    assert_eq!(session.coverage_stats().observed_cells, 0);
}

#[test]
fn test_driver_starts_at_nearest_waypoint() {
    let config = MissionConfig {
        search_area: common::square_area(100.0),
        pattern: PatternKind::Horizontal,
        split_axis: SplitAxis::X,
        ..MissionConfig::default()
    };
    // Parked near the top-right corner of the right-hand partition
    let sensor = SensorFootprint::default();
    let mut agents = vec![
        StaticAgent::new(Point3::new(-50.0, 0.0, -50.0), sensor),
        StaticAgent::new(Point3::new(50.0, 0.0, 50.0), sensor),
    ];
    let driver = MissionDriver::initialize(config, &mut agents, &FlatTerrain).unwrap();

    assert_eq!(agents[0].targets[0], Point3::new(-50.0, 30.0, -50.0));
    let first = agents[1].targets[0];
    assert_eq!((first.x, first.z), (50.0, 46.0));
    assert_eq!(
        driver.phase(AgentId(1)),
        Some(AgentPhase::Flying { target: first })
    );
    assert_eq!(driver.path(AgentId(1))[0], first);
    assert_eq!(driver.partition(AgentId(1)).map(|p| p.min.x), Some(0.0));
}
