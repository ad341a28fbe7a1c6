use building_energy_simulator::sim::calibration::CalibrationParams;
use building_energy_simulator::sim::cost::CostModel;
use building_energy_simulator::sim::geometry::{
    self, BuildingGeometry, Footprint, GlazingModel,
};
use building_energy_simulator::sim::schedule::{InternalGainSchedule, SliceGain, SliceMode};
use building_energy_simulator::sim::setpoint::ComfortSetpointPolicy;
use building_energy_simulator::sim::temperature::OutdoorTemperatureProfile;
use building_energy_simulator::sim::{
    run_simulation, EnvelopePerformance, SimulationError, SimulationInput,
};

fn profile_with(monthly_mean_c: [f64; 12]) -> OutdoorTemperatureProfile {
    OutdoorTemperatureProfile {
        region: "시험지역".to_string(),
        monthly_mean_c,
        extremes: None,
    }
}

fn base_input() -> SimulationInput {
    SimulationInput {
        geometry: BuildingGeometry {
            footprint: Footprint::Square {
                floor_area_m2: 100.0,
            },
            height_m: 3.0,
        },
        envelope: EnvelopePerformance {
            glazing_u_w_per_m2k: 1.5,
            shgc: 0.45,
            visible_transmittance: None,
            reflectance: None,
            wall_u_w_per_m2k: 0.3,
        },
        glazing: GlazingModel::Uniform { wwr: 0.3 },
        schedule: InternalGainSchedule::new(vec![SliceGain::Lumped(10.0)]),
        profile: profile_with([0.0; 12]),
        setpoints: ComfortSetpointPolicy {
            cooling_c: 26.0,
            heating_c: 20.0,
            neutral_c: 22.0,
        },
        slice_mode: SliceMode::Single,
        calibration: CalibrationParams {
            load_bias: 1.0,
            solar_intensity_w_per_m2: 170.0,
            slice_offsets_c: [2.0, 0.0, -4.0],
            slice_solar_weights: [1.0, 0.0, 0.0],
        },
        cost: CostModel::default(),
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    let input = base_input();
    let first = run_simulation(&input).expect("first run");
    let second = run_simulation(&input).expect("second run");
    assert_eq!(first.annual_heating_kwh, second.annual_heating_kwh);
    assert_eq!(first.annual_cooling_kwh, second.annual_cooling_kwh);
    assert_eq!(first.heating_cost, second.heating_cost);
    assert_eq!(first.cooling_cost, second.cooling_cost);
}

#[test]
fn isothermal_building_without_gains_has_zero_demand() {
    let mut input = base_input();
    input.profile = profile_with([22.0; 12]);
    input.setpoints = ComfortSetpointPolicy {
        cooling_c: 22.0,
        heating_c: 22.0,
        neutral_c: 22.0,
    };
    input.schedule = InternalGainSchedule::new(vec![SliceGain::Lumped(0.0)]);
    input.calibration.solar_intensity_w_per_m2 = 0.0;

    let result = run_simulation(&input).expect("run");
    assert_eq!(result.annual_heating_kwh, 0.0);
    assert_eq!(result.annual_cooling_kwh, 0.0);
}

#[test]
fn higher_glazing_u_never_lowers_heating_in_cold_climate() {
    let mut input = base_input();
    input.profile = profile_with([-5.0; 12]);
    input.setpoints = ComfortSetpointPolicy {
        cooling_c: 20.0,
        heating_c: 20.0,
        neutral_c: 20.0,
    };
    input.schedule = InternalGainSchedule::new(vec![SliceGain::Lumped(0.0)]);
    input.calibration.solar_intensity_w_per_m2 = 0.0;

    let low_u = run_simulation(&input).expect("low u");
    input.envelope.glazing_u_w_per_m2k = 2.5;
    let high_u = run_simulation(&input).expect("high u");

    assert!(high_u.annual_heating_kwh > low_u.annual_heating_kwh);
    assert_eq!(low_u.annual_cooling_kwh, 0.0);
    assert_eq!(high_u.annual_cooling_kwh, 0.0);
}

#[test]
fn zero_wwr_collapses_solar_gain() {
    let mut input = base_input();
    input.glazing = GlazingModel::Uniform { wwr: 0.0 };
    input.schedule = InternalGainSchedule::new(vec![SliceGain::Lumped(0.0)]);
    input.profile = profile_with([-5.0; 12]);

    let with_shgc = run_simulation(&input).expect("with shgc");
    input.envelope.shgc = 0.0;
    let without_shgc = run_simulation(&input).expect("without shgc");

    assert_eq!(with_shgc.annual_heating_kwh, without_shgc.annual_heating_kwh);
    assert_eq!(with_shgc.annual_cooling_kwh, without_shgc.annual_cooling_kwh);
}

#[test]
fn full_wwr_leaves_no_opaque_conduction() {
    let mut input = base_input();
    input.glazing = GlazingModel::Uniform { wwr: 1.0 };
    input.schedule = InternalGainSchedule::new(vec![SliceGain::Lumped(0.0)]);
    input.calibration.solar_intensity_w_per_m2 = 0.0;
    input.profile = profile_with([-5.0; 12]);

    input.envelope.wall_u_w_per_m2k = 5.0;
    let thick_wall = run_simulation(&input).expect("thick wall");
    input.envelope.wall_u_w_per_m2k = 0.0;
    let no_wall = run_simulation(&input).expect("no wall");

    assert_eq!(thick_wall.annual_heating_kwh, no_wall.annual_heating_kwh);
}

#[test]
fn per_orientation_split_preserves_total_glazing_area() {
    let geometry = BuildingGeometry {
        footprint: Footprint::Square {
            floor_area_m2: 100.0,
        },
        height_m: 3.0,
    };
    let uniform = geometry::resolve_panels(&geometry, &GlazingModel::Uniform { wwr: 0.3 });
    let oriented = geometry::resolve_panels(
        &geometry,
        &GlazingModel::PerOrientation {
            north: 0.3,
            south: 0.3,
            east: 0.3,
            west: 0.3,
        },
    );

    let uniform_glazing: f64 = uniform.iter().map(|panel| panel.glazing_m2).sum();
    let oriented_glazing: f64 = oriented.iter().map(|panel| panel.glazing_m2).sum();
    assert!((uniform_glazing - oriented_glazing).abs() < 1e-9);

    let envelope = geometry.envelope_area_m2();
    for panel in &oriented {
        assert!((panel.glazing_m2 + panel.opaque_m2 - envelope / 4.0).abs() < 1e-9);
    }
}

#[test]
fn flat_schedule_with_zero_offsets_is_slice_count_invariant() {
    let mut input = base_input();
    input.glazing = GlazingModel::Uniform { wwr: 0.0 };
    input.schedule = InternalGainSchedule::new(vec![
        SliceGain::Lumped(10.0),
        SliceGain::Lumped(10.0),
        SliceGain::Lumped(10.0),
    ]);
    input.calibration.slice_offsets_c = [0.0, 0.0, 0.0];
    input.profile = profile_with([-5.0, -2.0, 3.0, 10.0, 16.0, 21.0, 25.0, 26.0, 20.0, 13.0, 6.0, -1.0]);

    input.slice_mode = SliceMode::Single;
    let single = run_simulation(&input).expect("single slice");
    input.slice_mode = SliceMode::ThreeSlice;
    let three = run_simulation(&input).expect("three slices");

    assert!((single.annual_heating_kwh - three.annual_heating_kwh).abs() < 1e-6);
    assert!((single.annual_cooling_kwh - three.annual_cooling_kwh).abs() < 1e-6);
}

#[test]
fn load_bias_scales_annual_totals() {
    let mut input = base_input();
    input.profile = profile_with([-5.0; 12]);
    let plain = run_simulation(&input).expect("bias 1.0");
    input.calibration.load_bias = 2.0;
    let biased = run_simulation(&input).expect("bias 2.0");

    assert!((biased.annual_heating_kwh - 2.0 * plain.annual_heating_kwh).abs() < 1e-9);
    assert!((biased.annual_cooling_kwh - 2.0 * plain.annual_cooling_kwh).abs() < 1e-9);
}

#[test]
fn degenerate_inputs_are_rejected_before_evaluation() {
    let mut input = base_input();
    input.geometry.footprint = Footprint::Square { floor_area_m2: 0.0 };
    assert!(matches!(
        run_simulation(&input),
        Err(SimulationError::InvalidFloorArea(_))
    ));

    let mut input = base_input();
    input.geometry.height_m = -1.0;
    assert!(matches!(
        run_simulation(&input),
        Err(SimulationError::InvalidHeight(_))
    ));

    let mut input = base_input();
    input.glazing = GlazingModel::Uniform { wwr: 1.2 };
    assert!(matches!(
        run_simulation(&input),
        Err(SimulationError::RatioOutOfRange { .. })
    ));

    let mut input = base_input();
    input.cost.cooling_cop = 0.0;
    assert!(matches!(
        run_simulation(&input),
        Err(SimulationError::NonPositiveEfficiency { .. })
    ));

    let mut input = base_input();
    input.schedule = InternalGainSchedule::new(vec![
        SliceGain::Lumped(10.0),
        SliceGain::Lumped(10.0),
    ]);
    assert!(matches!(
        run_simulation(&input),
        Err(SimulationError::InvalidSliceCount(2))
    ));
}
