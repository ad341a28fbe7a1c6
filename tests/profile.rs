use building_energy_simulator::sim::geometry::{BuildingGeometry, Footprint, Orientation};
use building_energy_simulator::sim::schedule::{InternalGainSchedule, SliceGain, SliceMode};
use building_energy_simulator::sim::setpoint::{season_of, ComfortSetpointPolicy, Season};
use building_energy_simulator::sim::temperature::{
    expand, OutdoorTemperatureProfile, SeasonalExtremes,
};

const OFFSETS: [f64; 3] = [2.0, 0.0, -4.0];

fn profile(extremes: Option<SeasonalExtremes>) -> OutdoorTemperatureProfile {
    OutdoorTemperatureProfile {
        region: "시험지역".to_string(),
        monthly_mean_c: [10.0; 12],
        extremes,
    }
}

#[test]
fn single_mode_uses_monthly_means_unmodified() {
    let rows = expand(&profile(None), SliceMode::Single, &OFFSETS);
    assert_eq!(rows.len(), 12);
    for row in rows {
        assert_eq!(row, vec![10.0]);
    }
}

#[test]
fn three_slice_mode_applies_diurnal_offsets() {
    let rows = expand(&profile(None), SliceMode::ThreeSlice, &OFFSETS);
    for row in rows {
        assert_eq!(row, vec![12.0, 10.0, 6.0]);
    }
}

#[test]
fn extremes_override_summer_and_winter_months_only() {
    let extremes = SeasonalExtremes {
        summer_max_c: 33.0,
        summer_min_c: 23.0,
        winter_max_c: 3.0,
        winter_min_c: -9.0,
    };
    let rows = expand(&profile(Some(extremes)), SliceMode::ThreeSlice, &OFFSETS);

    // 여름(6~8월): {최고, 중간, 최저}
    for month in [5, 6, 7] {
        assert_eq!(rows[month], vec![33.0, 28.0, 23.0]);
    }
    // 겨울(12~2월)
    for month in [0, 1, 11] {
        assert_eq!(rows[month], vec![3.0, -3.0, -9.0]);
    }
    // 중간기는 기본 오프셋 규칙으로 폴백
    assert_eq!(rows[3], vec![12.0, 10.0, 6.0]);
}

#[test]
fn extremes_are_ignored_in_single_mode() {
    let extremes = SeasonalExtremes {
        summer_max_c: 33.0,
        summer_min_c: 23.0,
        winter_max_c: 3.0,
        winter_min_c: -9.0,
    };
    let rows = expand(&profile(Some(extremes)), SliceMode::Single, &OFFSETS);
    for row in rows {
        assert_eq!(row, vec![10.0]);
    }
}

#[test]
fn schedule_average_is_arithmetic_mean() {
    let schedule = InternalGainSchedule::new(vec![
        SliceGain::Lumped(30.0),
        SliceGain::Lumped(15.0),
        SliceGain::Lumped(5.0),
    ]);
    assert!((schedule.average_density_w_per_m2() - 50.0 / 3.0).abs() < 1e-12);
    assert_eq!(schedule.resolve(SliceMode::ThreeSlice), vec![30.0, 15.0, 5.0]);
    assert_eq!(schedule.resolve(SliceMode::Single), vec![50.0 / 3.0]);
}

#[test]
fn single_slice_input_is_replicated_in_three_slice_mode() {
    let schedule = InternalGainSchedule::new(vec![SliceGain::Lumped(12.0)]);
    assert_eq!(schedule.resolve(SliceMode::ThreeSlice), vec![12.0, 12.0, 12.0]);
}

#[test]
fn split_gain_sums_components() {
    let gain = SliceGain::Split {
        occupant_w_per_m2: 5.0,
        lighting_w_per_m2: 10.0,
        equipment_w_per_m2: 15.0,
    };
    assert_eq!(gain.density_w_per_m2(), 30.0);
}

#[test]
fn slice_mode_durations_cover_the_day() {
    assert_eq!(SliceMode::Single.slice_count(), 1);
    assert_eq!(SliceMode::ThreeSlice.slice_count(), 3);
    assert_eq!(SliceMode::Single.slice_hours(), 24.0);
    assert_eq!(SliceMode::ThreeSlice.slice_hours(), 8.0);
}

#[test]
fn square_footprint_approximates_perimeter() {
    let geometry = BuildingGeometry {
        footprint: Footprint::Square {
            floor_area_m2: 100.0,
        },
        height_m: 3.0,
    };
    assert!((geometry.footprint.perimeter_m() - 40.0).abs() < 1e-12);
    assert!((geometry.envelope_area_m2() - 120.0).abs() < 1e-12);
}

#[test]
fn rectangular_footprint_uses_exact_perimeter() {
    let footprint = Footprint::Rectangular {
        width_m: 10.0,
        length_m: 20.0,
    };
    assert_eq!(footprint.floor_area_m2(), 200.0);
    assert_eq!(footprint.perimeter_m(), 60.0);
}

#[test]
fn seasons_follow_fixed_month_sets() {
    assert_eq!(season_of(5), Season::Summer);
    assert_eq!(season_of(7), Season::Summer);
    assert_eq!(season_of(11), Season::Winter);
    assert_eq!(season_of(0), Season::Winter);
    assert_eq!(season_of(3), Season::Shoulder);
    assert_eq!(season_of(9), Season::Shoulder);
}

#[test]
fn setpoint_policy_maps_months_to_targets() {
    let policy = ComfortSetpointPolicy {
        cooling_c: 26.0,
        heating_c: 20.0,
        neutral_c: 22.0,
    };
    assert_eq!(policy.setpoint_c(6), 26.0);
    assert_eq!(policy.setpoint_c(1), 20.0);
    assert_eq!(policy.setpoint_c(4), 22.0);
}

#[test]
fn south_facing_glass_gets_the_largest_solar_weight() {
    assert_eq!(Orientation::South.solar_weight(), 1.0);
    assert_eq!(Orientation::East.solar_weight(), 0.7);
    assert_eq!(Orientation::West.solar_weight(), 0.7);
    assert_eq!(Orientation::North.solar_weight(), 0.3);
}
