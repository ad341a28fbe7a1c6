use building_energy_simulator::climate::{ClimateError, ClimateTable};
use building_energy_simulator::i18n::Translator;
use building_energy_simulator::report::{format_number, render, BuildingUse, ReportContext};
use building_energy_simulator::scenario::ScenarioFile;
use building_energy_simulator::sim::geometry::GlazingModel;
use building_energy_simulator::sim::run_simulation;

#[test]
fn korea_table_serves_all_seven_regions() {
    let table = ClimateTable::korea();
    assert_eq!(table.region_names().len(), 7);
    for name in ["서울/경기", "춘천/강원", "대전/충청", "광주/전남", "대구/경북", "부산/경남", "제주"] {
        assert!(table.profile(name, None).is_ok(), "missing region {name}");
    }
}

#[test]
fn unknown_region_is_a_data_error() {
    let table = ClimateTable::korea();
    assert!(matches!(
        table.profile("평양", None),
        Err(ClimateError::UnknownRegion(_))
    ));
}

#[test]
fn short_series_is_rejected_on_lookup() {
    let mut table = ClimateTable::empty();
    table.insert("시험", vec![1.0; 11]);
    assert!(matches!(
        table.profile("시험", None),
        Err(ClimateError::SeriesLength { len: 11, .. })
    ));
}

#[test]
fn inserting_an_existing_region_replaces_the_series() {
    let mut table = ClimateTable::korea();
    table.insert("제주", vec![0.0; 12]);
    assert_eq!(table.region_names().len(), 7);
    let profile = table.profile("제주", None).expect("region");
    assert_eq!(profile.monthly_mean_c, [0.0; 12]);
}

#[test]
fn numbers_are_grouped_with_thousands_separators() {
    assert_eq!(format_number(1_453_354.56, 0), "1,453,355");
    assert_eq!(format_number(24_914.6496, 1), "24,914.6");
    assert_eq!(format_number(999.96, 1), "1,000.0");
    assert_eq!(format_number(-1_234.5, 0), "-1,235");
    assert_eq!(format_number(0.0, 0), "0");
    assert_eq!(format_number(512.0, 0), "512");
}

#[test]
fn report_text_carries_region_totals_and_profile() {
    let toml_text = r#"
region = "서울/경기"
slice_mode = "single"
gains = [10.0, 15.0, 5.0]

[geometry]
floor_area_m2 = 100.0
height_m = 3.0

[glazing]
wwr = 0.3

[setpoints]
cooling_c = 26.0
heating_c = 20.0
"#;
    let scenario: ScenarioFile = toml::from_str(toml_text).expect("scenario");
    let table = ClimateTable::korea();
    let input = scenario.to_input(&table).expect("input");
    let result = run_simulation(&input).expect("simulation");

    let ctx = ReportContext {
        region: &input.profile.region,
        usage: BuildingUse::Residential,
        floor_area_m2: 100.0,
        average_gain_w_per_m2: input.schedule.average_density_w_per_m2(),
        profile_code: scenario.calibration.profile.code(),
        cost: &input.cost,
        result: &result,
    };

    let korean = render(&Translator::new("ko"), &ctx);
    assert!(korean.contains("지역: 서울/경기 (주택)"));
    assert!(korean.contains("kWh"));
    assert!(korean.contains("simplified-static"));
    assert!(korean.contains("[에너지 산출 근거]"));

    let english = render(&Translator::new("en"), &ctx);
    assert!(english.contains("Region: 서울/경기 (Residential)"));
    assert!(english.contains("Calculation basis"));
}

#[test]
fn scenario_with_overrides_reproduces_reference_numbers() {
    let toml_text = r#"
region = "서울/경기"
slice_mode = "single"
gains = [10.0, 15.0, 5.0]

[geometry]
floor_area_m2 = 100.0
height_m = 3.0

[envelope]
glazing_u_w_per_m2k = 1.5
shgc = 0.45
wall_u_w_per_m2k = 0.3

[glazing]
wwr = 0.3

[setpoints]
cooling_c = 26.0
heating_c = 20.0
neutral_c = 22.0

[calibration]
profile = "simplified-static"
load_bias = 1.0
solar_intensity_w_per_m2 = 165.0

[cost]
cooling_cop = 3.6
heating_efficiency = 0.85
electricity_price_per_kwh = 210.0
gas_price_per_kwh = 155.0
"#;
    let scenario: ScenarioFile = toml::from_str(toml_text).expect("scenario");
    let table = ClimateTable::korea();
    let input = scenario.to_input(&table).expect("input");
    let result = run_simulation(&input).expect("simulation");

    assert!((result.annual_cooling_kwh - 24_914.6496).abs() < 1e-6);
    assert!((result.cooling_cost - 1_453_354.56).abs() < 1e-6);
    assert!(result.annual_heating_kwh.abs() < 1e-9);
}

#[test]
fn scenario_accepts_per_orientation_glazing_and_custom_regions() {
    let toml_text = r#"
region = "시험분지"
slice_mode = "three-slice"
usage = "commercial"
gains = [30.0, 15.0, 5.0]

[geometry]
width_m = 10.0
length_m = 20.0
height_m = 3.5

[glazing]
north = 0.2
south = 0.5
east = 0.3
west = 0.3

[setpoints]
cooling_c = 26.0
heating_c = 20.0

[extremes]
summer_max_c = 34.0
summer_min_c = 24.0
winter_max_c = 2.0
winter_min_c = -10.0

[calibration]
profile = "dynamic-detailed"

[[custom_regions]]
name = "시험분지"
monthly_mean_c = [-3.0, -1.0, 4.0, 11.0, 17.0, 22.0, 25.0, 26.0, 21.0, 14.0, 7.0, 0.0]
"#;
    let scenario: ScenarioFile = toml::from_str(toml_text).expect("scenario");
    assert!(matches!(
        scenario.glazing,
        GlazingModel::PerOrientation { .. }
    ));
    assert_eq!(scenario.usage, BuildingUse::Commercial);

    let table = ClimateTable::korea();
    let input = scenario.to_input(&table).expect("input");
    assert_eq!(input.profile.region, "시험분지");
    assert!(input.profile.extremes.is_some());

    let result = run_simulation(&input).expect("simulation");
    // 방위 구분: 12개월 × 3구간 × 4방위 기록
    assert_eq!(result.loads.len(), 12 * 3 * 4);
    assert!(result.annual_cooling_kwh > 0.0);

    // 호출자 테이블은 사본이라 사용자 지역이 남지 않는다
    assert!(table.profile("시험분지", None).is_err());
}
