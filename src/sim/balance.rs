use super::cost;
use super::geometry::{self, Orientation};
use super::schedule::SliceMode;
use super::temperature;
use super::SimulationInput;

/// 간이 모델 고정값. 모든 달을 30일로 본다 (달력 기준 아님).
const DAYS_PER_MONTH: f64 = 30.0;

/// 부하 구분. 순부하가 양수면 난방, 0 이하면 냉방.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    Heating,
    Cooling,
}

/// (월 × 구간 × 방위) 단위 부하 기록. 보고용으로 결과에 그대로 남긴다.
#[derive(Debug, Clone, Copy)]
pub struct SliceLoad {
    /// 0 기반 월 인덱스
    pub month: usize,
    pub slice: usize,
    /// 방위 구분 시뮬레이션일 때만 Some
    pub orientation: Option<Orientation>,
    /// 순부하 [W] (부호 유지)
    pub net_load_w: f64,
    /// 에너지 크기 [kWh] (절대값)
    pub energy_kwh: f64,
    pub mode: LoadMode,
}

/// 월별 난방/냉방 에너지 소계 [kWh].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyLoad {
    pub heating_kwh: f64,
    pub cooling_kwh: f64,
}

/// 시뮬레이션 결과. 실행마다 새로 만들어지고 이후 변경되지 않는다.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub annual_heating_kwh: f64,
    pub annual_cooling_kwh: f64,
    pub heating_cost: f64,
    pub cooling_cost: f64,
    /// 중간 부하 기록
    pub loads: Vec<SliceLoad>,
}

impl SimulationResult {
    /// 부하 기록을 월별로 합산한다.
    pub fn monthly_loads(&self) -> [MonthlyLoad; 12] {
        let mut months = [MonthlyLoad::default(); 12];
        for load in &self.loads {
            match load.mode {
                LoadMode::Heating => months[load.month].heating_kwh += load.energy_kwh,
                LoadMode::Cooling => months[load.month].cooling_kwh += load.energy_kwh,
            }
        }
        months
    }
}

/// 열수지 평가 본체. 입력 검증이 끝난 뒤에만 호출한다.
///
/// 전도 손실은 설정 온도 − 외기 온도 기준이라 양의 순부하가 난방 수요가 된다.
pub(crate) fn evaluate(input: &SimulationInput) -> SimulationResult {
    let panels = geometry::resolve_panels(&input.geometry, &input.glazing);
    let temps = temperature::expand(
        &input.profile,
        input.slice_mode,
        &input.calibration.slice_offsets_c,
    );
    let densities = input.schedule.resolve(input.slice_mode);
    let floor_area_m2 = input.geometry.footprint.floor_area_m2();
    let slice_hours = input.slice_mode.slice_hours();
    let vlt = input.envelope.visible_transmittance.unwrap_or(1.0);

    let mut loads = Vec::with_capacity(12 * densities.len() * panels.len());
    let mut annual_heating_kwh = 0.0;
    let mut annual_cooling_kwh = 0.0;

    for (month, row) in temps.iter().enumerate() {
        let setpoint_c = input.setpoints.setpoint_c(month);
        for (slice, &outdoor_c) in row.iter().enumerate() {
            // 일사는 주간 구간에만 배분한다. 1구간 모드는 24시간 평균이라 항상 적용.
            let slice_weight = match input.slice_mode {
                SliceMode::Single => 1.0,
                SliceMode::ThreeSlice => input.calibration.slice_solar_weights[slice],
            };
            for panel in &panels {
                let ua_w_per_k = panel.glazing_m2 * input.envelope.glazing_u_w_per_m2k
                    + panel.opaque_m2 * input.envelope.wall_u_w_per_m2k;
                let conduction_w = ua_w_per_k * (setpoint_c - outdoor_c);

                let solar_w = panel.glazing_m2
                    * input.envelope.shgc
                    * input.calibration.solar_intensity_w_per_m2
                    * panel.solar_weight
                    * vlt
                    * slice_weight;

                let internal_w = densities[slice] * floor_area_m2 * panel.floor_fraction;

                let net_load_w =
                    (conduction_w - solar_w - internal_w) * input.calibration.load_bias;
                let energy_kwh = net_load_w * slice_hours * DAYS_PER_MONTH / 1000.0;

                let (mode, magnitude_kwh) = if net_load_w > 0.0 {
                    (LoadMode::Heating, energy_kwh)
                } else {
                    (LoadMode::Cooling, -energy_kwh)
                };
                match mode {
                    LoadMode::Heating => annual_heating_kwh += magnitude_kwh,
                    LoadMode::Cooling => annual_cooling_kwh += magnitude_kwh,
                }
                loads.push(SliceLoad {
                    month,
                    slice,
                    orientation: panel.orientation,
                    net_load_w,
                    energy_kwh: magnitude_kwh,
                    mode,
                });
            }
        }
    }

    let costs = cost::annual_cost(&input.cost, annual_cooling_kwh, annual_heating_kwh);
    SimulationResult {
        annual_heating_kwh,
        annual_cooling_kwh,
        heating_cost: costs.heating_cost,
        cooling_cost: costs.cooling_cost,
        loads,
    }
}
