//! 건물 열수지 계산 엔진. 입력 스냅숏 하나가 결정적인 결과 하나를 만든다.
//! I/O와 공유 상태가 없는 순수 계산이라 병렬 탐색은 호출자가 실행 단위로 나누면 된다.

pub mod balance;
pub mod calibration;
pub mod cost;
pub mod geometry;
pub mod schedule;
pub mod setpoint;
pub mod temperature;

pub use balance::{LoadMode, MonthlyLoad, SimulationResult, SliceLoad};

use serde::{Deserialize, Serialize};

use calibration::CalibrationParams;
use cost::CostModel;
use geometry::{BuildingGeometry, Footprint, GlazingModel};
use schedule::{InternalGainSchedule, SliceMode};
use setpoint::ComfortSetpointPolicy;
use temperature::OutdoorTemperatureProfile;

/// 유리/외벽 성능. 한 번의 시뮬레이션 동안 변하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopePerformance {
    /// 유리 열관류율 [W/m²K]
    pub glazing_u_w_per_m2k: f64,
    /// 일사 열취득 계수 (0~1)
    pub shgc: f64,
    /// 가시광선 투과율 (0~1, 선택)
    #[serde(default)]
    pub visible_transmittance: Option<f64>,
    /// 가시광선 반사율 (0~1, 선택)
    #[serde(default)]
    pub reflectance: Option<f64>,
    /// 불투명 외벽 열관류율 [W/m²K]
    pub wall_u_w_per_m2k: f64,
}

impl Default for EnvelopePerformance {
    fn default() -> Self {
        Self {
            glazing_u_w_per_m2k: 1.5,
            shgc: 0.45,
            visible_transmittance: None,
            reflectance: None,
            wall_u_w_per_m2k: 0.3,
        }
    }
}

/// 시뮬레이션 입력 묶음. 실행 시작 시 만들어지는 값 객체로 실행 간 공유 상태가 없다.
#[derive(Debug, Clone)]
pub struct SimulationInput {
    pub geometry: BuildingGeometry,
    pub envelope: EnvelopePerformance,
    pub glazing: GlazingModel,
    pub schedule: InternalGainSchedule,
    pub profile: OutdoorTemperatureProfile,
    pub setpoints: ComfortSetpointPolicy,
    pub slice_mode: SliceMode,
    pub calibration: CalibrationParams,
    pub cost: CostModel,
}

/// 입력 검증 오류. 계산 루프에 들어가기 전에 모두 걸러낸다.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// 바닥 면적이 0 이하
    InvalidFloorArea(f64),
    /// 층 높이가 0 이하
    InvalidHeight(f64),
    /// 0~1 범위를 벗어난 비율 값
    RatioOutOfRange { name: &'static str, value: f64 },
    /// 음수 열관류율
    NegativeUValue { name: &'static str, value: f64 },
    /// 지원하지 않는 시간대 수 (1 또는 3만 허용)
    InvalidSliceCount(usize),
    /// 0 이하의 효율/COP
    NonPositiveEfficiency { name: &'static str, value: f64 },
    /// 계절 극값의 최고 온도가 최저보다 낮음
    InvalidExtremes(&'static str),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidFloorArea(value) => {
                write!(f, "바닥 면적은 0보다 커야 합니다 (입력값 {value})")
            }
            SimulationError::InvalidHeight(value) => {
                write!(f, "층 높이는 0보다 커야 합니다 (입력값 {value})")
            }
            SimulationError::RatioOutOfRange { name, value } => {
                write!(f, "{name}은(는) 0~1 사이여야 합니다 (입력값 {value})")
            }
            SimulationError::NegativeUValue { name, value } => {
                write!(f, "{name} 열관류율은 음수일 수 없습니다 (입력값 {value})")
            }
            SimulationError::InvalidSliceCount(count) => {
                write!(f, "시간대 수는 1 또는 3이어야 합니다 (입력값 {count})")
            }
            SimulationError::NonPositiveEfficiency { name, value } => {
                write!(f, "{name}은(는) 0보다 커야 합니다 (입력값 {value})")
            }
            SimulationError::InvalidExtremes(season) => {
                write!(f, "{season} 극값의 최고 온도가 최저 온도보다 낮습니다")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl SimulationInput {
    /// 불변식을 모두 검사한다. 위반 시 계산 없이 즉시 실패하며 값을 보정하지 않는다.
    pub fn validate(&self) -> Result<(), SimulationError> {
        match self.geometry.footprint {
            Footprint::Square { floor_area_m2 } => {
                if floor_area_m2 <= 0.0 {
                    return Err(SimulationError::InvalidFloorArea(floor_area_m2));
                }
            }
            Footprint::Rectangular { width_m, length_m } => {
                if width_m <= 0.0 || length_m <= 0.0 {
                    return Err(SimulationError::InvalidFloorArea(width_m * length_m));
                }
            }
        }
        if self.geometry.height_m <= 0.0 {
            return Err(SimulationError::InvalidHeight(self.geometry.height_m));
        }
        for wwr in self.glazing.ratios() {
            if !(0.0..=1.0).contains(&wwr) {
                return Err(SimulationError::RatioOutOfRange {
                    name: "창면적비(WWR)",
                    value: wwr,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.envelope.shgc) {
            return Err(SimulationError::RatioOutOfRange {
                name: "열취득계수(SHGC)",
                value: self.envelope.shgc,
            });
        }
        if let Some(vlt) = self.envelope.visible_transmittance {
            if !(0.0..=1.0).contains(&vlt) {
                return Err(SimulationError::RatioOutOfRange {
                    name: "가시광선 투과율",
                    value: vlt,
                });
            }
        }
        if let Some(reflectance) = self.envelope.reflectance {
            if !(0.0..=1.0).contains(&reflectance) {
                return Err(SimulationError::RatioOutOfRange {
                    name: "가시광선 반사율",
                    value: reflectance,
                });
            }
        }
        if self.envelope.glazing_u_w_per_m2k < 0.0 {
            return Err(SimulationError::NegativeUValue {
                name: "유리",
                value: self.envelope.glazing_u_w_per_m2k,
            });
        }
        if self.envelope.wall_u_w_per_m2k < 0.0 {
            return Err(SimulationError::NegativeUValue {
                name: "외벽",
                value: self.envelope.wall_u_w_per_m2k,
            });
        }
        match self.schedule.slices.len() {
            1 | 3 => {}
            count => return Err(SimulationError::InvalidSliceCount(count)),
        }
        if self.cost.cooling_cop <= 0.0 {
            return Err(SimulationError::NonPositiveEfficiency {
                name: "냉방 COP",
                value: self.cost.cooling_cop,
            });
        }
        if self.cost.heating_efficiency <= 0.0 {
            return Err(SimulationError::NonPositiveEfficiency {
                name: "난방 효율",
                value: self.cost.heating_efficiency,
            });
        }
        if let Some(extremes) = &self.profile.extremes {
            if extremes.summer_max_c < extremes.summer_min_c {
                return Err(SimulationError::InvalidExtremes("여름"));
            }
            if extremes.winter_max_c < extremes.winter_min_c {
                return Err(SimulationError::InvalidExtremes("겨울"));
            }
        }
        Ok(())
    }
}

/// 시뮬레이션 한 건을 실행한다. 검증 → 열수지 평가 → 연간 합산 → 비용 환산 순서.
pub fn run_simulation(input: &SimulationInput) -> Result<SimulationResult, SimulationError> {
    input.validate()?;
    Ok(balance::evaluate(input))
}
