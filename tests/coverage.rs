//! Coverage grid and evaluator behavior.

mod common;

use approx::assert_relative_eq;
use drishti::{
    AgentId, AgentSnapshot, Bounds3, BoxWorld, CoverageEvaluator, CoverageSettings,
    CoverageStatus, NoOcclusion, Point3, SensorFootprint,
};
use rand::Rng;

fn snapshot(id: usize, position: Point3, sensor: SensorFootprint) -> AgentSnapshot {
    AgentSnapshot {
        id: AgentId(id),
        position,
        sensor,
    }
}

fn tower() -> Bounds3 {
    Bounds3::new(Point3::new(-4.0, 0.0, -4.0), Point3::new(4.0, 5.0, 4.0))
}

#[test]
fn test_single_cylinder_pass() {
    let area = common::square_area(20.0);
    let mut evaluator =
        CoverageEvaluator::build(&area, CoverageSettings::default(), &NoOcclusion).unwrap();
    assert_eq!(evaluator.grid().cell_count(), 100);

    let agent = snapshot(0, Point3::new(0.0, 10.0, 0.0), SensorFootprint::cylinder(5.0));
    let newly = evaluator.evaluate(&[agent], &NoOcclusion);

    assert_eq!(newly, 16);
    let stats = evaluator.stats();
    assert_eq!(stats.observed_cells, 16);
    assert_eq!(stats.occluded_cells, 0);
    assert_relative_eq!(evaluator.coverage_percentage(), 16.0);
    assert_relative_eq!(evaluator.effective_coverage_percentage(), 16.0);
    assert_eq!(evaluator.uncovered_cells().len(), 84);
    assert_eq!(evaluator.contribution(AgentId(0)), 16);
}

#[test]
fn test_repeated_pass_adds_nothing() {
    let area = common::square_area(20.0);
    let mut evaluator =
        CoverageEvaluator::build(&area, CoverageSettings::default(), &NoOcclusion).unwrap();
    let agent = snapshot(0, Point3::new(0.0, 10.0, 0.0), SensorFootprint::cylinder(5.0));

    assert_eq!(evaluator.evaluate(&[agent], &NoOcclusion), 16);
    assert_eq!(evaluator.evaluate(&[agent], &NoOcclusion), 0);
    assert_eq!(evaluator.stats().observed_cells, 16);
    assert_eq!(evaluator.stats().evaluations, 2);
}

#[test]
fn test_agent_too_high_sees_nothing() {
    let area = common::square_area(20.0);
    let settings = CoverageSettings {
        detection_height: 5.0,
        ..CoverageSettings::default()
    };
    let mut evaluator = CoverageEvaluator::build(&area, settings, &NoOcclusion).unwrap();
    let agent = snapshot(0, Point3::new(0.0, 10.0, 0.0), SensorFootprint::cylinder(50.0));

    assert_eq!(evaluator.evaluate(&[agent], &NoOcclusion), 0);
}

#[test]
fn test_lowest_agent_id_gets_shared_cells() {
    let area = common::square_area(20.0);
    let mut evaluator =
        CoverageEvaluator::build(&area, CoverageSettings::default(), &NoOcclusion).unwrap();
    let sensor = SensorFootprint::cylinder(5.0);

    // Passed in reverse order; attribution still follows AgentId
    let agents = [
        snapshot(1, Point3::new(0.0, 10.0, 0.0), sensor),
        snapshot(0, Point3::new(0.0, 10.0, 0.0), sensor),
    ];
    evaluator.evaluate(&agents, &NoOcclusion);

    assert_eq!(evaluator.contribution(AgentId(0)), 16);
    assert_eq!(evaluator.contribution(AgentId(1)), 0);
}

#[test]
fn test_observed_count_never_decreases() {
    let mut rng = common::rng(17);
    let area = common::square_area(60.0);
    let world = BoxWorld::new().with_obstacle(tower());
    let mut evaluator =
        CoverageEvaluator::build(&area, CoverageSettings::default(), &world).unwrap();

    let mut last = evaluator.stats();
    for _ in 0..60 {
        let agents: Vec<AgentSnapshot> = (0..3)
            .map(|i| {
                let position = Point3::new(
                    rng.random_range(-30.0..30.0),
                    rng.random_range(1.0..40.0),
                    rng.random_range(-30.0..30.0),
                );
                let sensor = if rng.random_bool(0.5) {
                    SensorFootprint::cylinder(rng.random_range(1.0..10.0))
                } else {
                    SensorFootprint::cone(rng.random_range(5.0..30.0), rng.random_range(10.0..120.0))
                };
                snapshot(i, position, sensor)
            })
            .collect();

        let newly = evaluator.evaluate(&agents, &world);
        let stats = evaluator.stats();
        assert_eq!(stats.observed_cells, last.observed_cells + newly);
        assert_eq!(stats.occluded_cells, last.occluded_cells);
        assert!(stats.coverage_fraction() >= last.coverage_fraction());
        assert!(stats.observed_cells + stats.occluded_cells <= stats.total_cells);
        assert_eq!(
            evaluator.contributions().iter().sum::<usize>(),
            stats.observed_cells
        );
        last = stats;
    }
}

#[test]
fn test_occluded_cells_are_permanent() {
    let area = common::square_area(20.0);
    let world = BoxWorld::new().with_obstacle(tower());
    let mut evaluator =
        CoverageEvaluator::build(&area, CoverageSettings::default(), &world).unwrap();

    // Cell centers at +-1 and +-3 fall under the tower
    assert_eq!(evaluator.stats().occluded_cells, 16);
    let under = Point3::new(1.0, 0.0, 1.0);
    assert_eq!(evaluator.status_at(under), Some(CoverageStatus::Occluded));

    let overhead = snapshot(0, Point3::new(0.0, 30.0, 0.0), SensorFootprint::cylinder(50.0));
    evaluator.evaluate(&[overhead], &world);

    let stats = evaluator.stats();
    assert_eq!(stats.occluded_cells, 16);
    assert_eq!(evaluator.status_at(under), Some(CoverageStatus::Occluded));
    assert!(stats.observed_cells > 0);
    assert_eq!(stats.observed_cells, 84);
    assert!(evaluator.is_fully_covered());
    assert_relative_eq!(evaluator.effective_coverage_percentage(), 100.0);
    assert_relative_eq!(evaluator.coverage_percentage(), 84.0);

    evaluator.reset();
    let stats = evaluator.stats();
    assert_eq!(stats.observed_cells, 0);
    assert_eq!(stats.occluded_cells, 16);
    assert_eq!(evaluator.status_at(under), Some(CoverageStatus::Occluded));
    assert_eq!(evaluator.contribution(AgentId(0)), 0);
}

#[test]
fn test_line_of_sight_blocks_cells_behind_wall() {
    // Wall along x = 0 taller than the agent
    let area = common::square_area(20.0);
    let wall = Bounds3::new(Point3::new(-0.5, 0.0, -10.0), Point3::new(0.5, 40.0, 10.0));
    let world = BoxWorld::new().with_obstacle(wall);
    let settings = CoverageSettings {
        detection_height: 50.0,
        ..CoverageSettings::default()
    };
    let mut evaluator = CoverageEvaluator::build(&area, settings, &world).unwrap();

    let agent = snapshot(0, Point3::new(-5.0, 10.0, 0.0), SensorFootprint::cylinder(100.0));
    evaluator.evaluate(&[agent], &world);

    assert_eq!(
        evaluator.status_at(Point3::new(-5.0, 0.0, 1.0)),
        Some(CoverageStatus::Observed)
    );
    assert_eq!(
        evaluator.status_at(Point3::new(5.0, 0.0, 1.0)),
        Some(CoverageStatus::Unmapped)
    );
}

#[test]
fn test_precheck_runs_without_line_of_sight() {
    let area = common::square_area(20.0);
    let world = BoxWorld::new().with_obstacle(tower());
    let settings = CoverageSettings {
        occlusion_detection: false,
        ..CoverageSettings::default()
    };
    let mut evaluator = CoverageEvaluator::build(&area, settings, &world).unwrap();
    assert_eq!(evaluator.stats().occluded_cells, 16);

    // A low agent beside the tower: with line of sight off, cells behind it count
    let beside = snapshot(0, Point3::new(-8.0, 2.0, 0.0), SensorFootprint::cylinder(50.0));
    evaluator.evaluate(&[beside], &world);

    let stats = evaluator.stats();
    assert_eq!(stats.occluded_cells, 16);
    assert_eq!(stats.observed_cells, 84);
    assert_eq!(
        evaluator.status_at(Point3::new(1.0, 0.0, 1.0)),
        Some(CoverageStatus::Occluded)
    );
    assert_eq!(
        evaluator.status_at(Point3::new(7.0, 0.0, 1.0)),
        Some(CoverageStatus::Observed)
    );
}

#[test]
fn test_cone_pass_uses_slant_range() {
    let area = common::square_area(20.0);
    let mut evaluator =
        CoverageEvaluator::build(&area, CoverageSettings::default(), &NoOcclusion).unwrap();

    // 12m range from 10m up reaches about 6.6m out on the ground
    let agent = snapshot(0, Point3::new(0.0, 10.0, 0.0), SensorFootprint::cone(12.0, 120.0));
    assert_eq!(evaluator.evaluate(&[agent], &NoOcclusion), 32);

    assert_eq!(
        evaluator.status_at(Point3::new(5.0, 0.0, 3.0)),
        Some(CoverageStatus::Observed)
    );
    // Within 12m horizontally, beyond it in a straight line
    assert_eq!(
        evaluator.status_at(Point3::new(7.0, 0.0, 1.0)),
        Some(CoverageStatus::Unmapped)
    );
}

#[test]
fn test_update_respects_interval() {
    let area = common::square_area(20.0);
    let mut evaluator =
        CoverageEvaluator::build(&area, CoverageSettings::default(), &NoOcclusion).unwrap();
    let agent = snapshot(0, Point3::new(0.0, 10.0, 0.0), SensorFootprint::cylinder(5.0));

    // 0.5s interval, 0.25s ticks: every second tick runs a pass
    let passes: Vec<bool> = (0..4)
        .map(|_| evaluator.update(0.25, &[agent], &NoOcclusion))
        .collect();
    assert_eq!(passes, vec![false, true, false, true]);

    // A long stall runs one pass, not several
    assert!(evaluator.update(10.0, &[agent], &NoOcclusion));
    assert!(!evaluator.update(0.0, &[agent], &NoOcclusion));
}

#[test]
fn test_cone_footprint_narrower_than_cylinder() {
    let area = common::square_area(40.0);
    let position = Point3::new(0.0, 10.0, 0.0);

    let mut cylinder =
        CoverageEvaluator::build(&area, CoverageSettings::default(), &NoOcclusion).unwrap();
    cylinder.evaluate(&[snapshot(0, position, SensorFootprint::cylinder(15.0))], &NoOcclusion);

    let mut cone =
        CoverageEvaluator::build(&area, CoverageSettings::default(), &NoOcclusion).unwrap();
    cone.evaluate(&[snapshot(0, position, SensorFootprint::cone(15.0, 60.0))], &NoOcclusion);

    assert!(cone.stats().observed_cells > 0);
    assert!(cone.stats().observed_cells < cylinder.stats().observed_cells);
}

#[test]
fn test_oversized_grid_rejected() {
    let area = common::square_area(10_000.0);
    let settings = CoverageSettings {
        resolution: 0.5,
        max_cells: 1_000,
        ..CoverageSettings::default()
    };
    let err = CoverageEvaluator::build(&area, settings, &NoOcclusion).unwrap_err();
    assert_eq!(err.code(), "INVALID_ARGUMENT");
}
