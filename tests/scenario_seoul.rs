use building_energy_simulator::climate::ClimateTable;
use building_energy_simulator::sim::calibration::CalibrationParams;
use building_energy_simulator::sim::cost::CostModel;
use building_energy_simulator::sim::geometry::{BuildingGeometry, Footprint, GlazingModel};
use building_energy_simulator::sim::schedule::{InternalGainSchedule, SliceGain, SliceMode};
use building_energy_simulator::sim::setpoint::ComfortSetpointPolicy;
use building_energy_simulator::sim::{run_simulation, EnvelopePerformance, SimulationInput};

/// 서울/경기 기준 검증 시나리오.
///
/// 수기 검산: 외피 = 4·√100·3 = 120 m², 유리 36 m², 불투명 84 m²
/// → UA = 36·1.5 + 84·0.3 = 79.2 W/K, 일사 = 36·0.45·165 = 2,673 W,
/// 내부 발열 = 10·100 = 1,000 W. 월별 ΔT 합이 119.6 K라서
/// 순부하 합 = 79.2·119.6 − 12·3,673 = −34,603.68 W,
/// 연간 냉방 에너지 = 34,603.68 · 24 · 30 / 1000 = 24,914.6496 kWh,
/// 냉방비 = 24,914.6496 / 3.6 · 210 = 1,453,354.56원. 난방은 0.
#[test]
fn seoul_reference_case_matches_hand_computation() {
    let table = ClimateTable::korea();
    let profile = table.profile("서울/경기", None).expect("region");

    let input = SimulationInput {
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
        schedule: InternalGainSchedule::new(vec![
            SliceGain::Lumped(10.0),
            SliceGain::Lumped(15.0),
            SliceGain::Lumped(5.0),
        ]),
        profile,
        setpoints: ComfortSetpointPolicy {
            cooling_c: 26.0,
            heating_c: 20.0,
            neutral_c: 22.0,
        },
        slice_mode: SliceMode::Single,
        calibration: CalibrationParams {
            load_bias: 1.0,
            solar_intensity_w_per_m2: 165.0,
            slice_offsets_c: [2.0, 0.0, -4.0],
            slice_solar_weights: [1.0, 0.0, 0.0],
        },
        cost: CostModel {
            cooling_cop: 3.6,
            heating_efficiency: 0.85,
            electricity_price_per_kwh: 210.0,
            gas_price_per_kwh: 155.0,
        },
    };

    let result = run_simulation(&input).expect("simulation");

    assert!((result.annual_cooling_kwh - 24_914.6496).abs() < 1e-6);
    assert!(result.annual_heating_kwh.abs() < 1e-9);
    assert!((result.cooling_cost - 1_453_354.56).abs() < 1e-6);
    assert!(result.heating_cost.abs() < 1e-9);

    // 중간 기록: 12개월 × 1구간, 전부 냉방으로 분류
    assert_eq!(result.loads.len(), 12);
    let monthly = result.monthly_loads();
    assert!(monthly.iter().all(|load| load.heating_kwh == 0.0));
    let monthly_sum: f64 = monthly.iter().map(|load| load.cooling_kwh).sum();
    assert!((monthly_sum - result.annual_cooling_kwh).abs() < 1e-9);
}

/// 1월 한 달만 따로 검산한다. ΔT = 20 − (−2.4) = 22.4 K,
/// 순부하 = 79.2·22.4 − 3,673 = −1,898.92 W → 1,367.2224 kWh 냉방.
#[test]
fn seoul_reference_case_january_slice_load() {
    let table = ClimateTable::korea();
    let profile = table.profile("서울/경기", None).expect("region");

    let input = SimulationInput {
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
        profile,
        setpoints: ComfortSetpointPolicy {
            cooling_c: 26.0,
            heating_c: 20.0,
            neutral_c: 22.0,
        },
        slice_mode: SliceMode::Single,
        calibration: CalibrationParams {
            load_bias: 1.0,
            solar_intensity_w_per_m2: 165.0,
            slice_offsets_c: [2.0, 0.0, -4.0],
            slice_solar_weights: [1.0, 0.0, 0.0],
        },
        cost: CostModel::default(),
    };

    let result = run_simulation(&input).expect("simulation");
    let january = &result.loads[0];
    assert_eq!(january.month, 0);
    assert!((january.net_load_w - (-1_898.92)).abs() < 1e-9);
    assert!((january.energy_kwh - 1_367.2224).abs() < 1e-9);
}
