//! TOML 시나리오 파일 로더. 대화형 입력 없이 시뮬레이션 입력 묶음을 구성한다.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::climate::{ClimateError, ClimateTable};
use crate::report::BuildingUse;
use crate::sim::calibration::{CalibrationParams, CalibrationProfile};
use crate::sim::cost::CostModel;
use crate::sim::geometry::{BuildingGeometry, Footprint, GlazingModel};
use crate::sim::schedule::{InternalGainSchedule, SliceGain, SliceMode};
use crate::sim::setpoint::ComfortSetpointPolicy;
use crate::sim::temperature::SeasonalExtremes;
use crate::sim::{EnvelopePerformance, SimulationInput};

/// 시나리오 파일 오류.
#[derive(Debug)]
pub enum ScenarioError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
    /// 바닥 면적 또는 폭/길이 중 하나는 있어야 함
    MissingFootprint,
    /// 지역 조회 실패
    Climate(ClimateError),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Io(e) => write!(f, "시나리오 파일 입출력 오류: {e}"),
            ScenarioError::Parse(e) => write!(f, "시나리오 파싱 오류: {e}"),
            ScenarioError::MissingFootprint => {
                write!(f, "geometry에 floor_area_m2 또는 width_m/length_m가 필요합니다")
            }
            ScenarioError::Climate(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<std::io::Error> for ScenarioError {
    fn from(value: std::io::Error) -> Self {
        ScenarioError::Io(value)
    }
}

impl From<toml::de::Error> for ScenarioError {
    fn from(value: toml::de::Error) -> Self {
        ScenarioError::Parse(value)
    }
}

impl From<ClimateError> for ScenarioError {
    fn from(value: ClimateError) -> Self {
        ScenarioError::Climate(value)
    }
}

/// 형상 입력 구역. floor_area_m2 또는 (width_m, length_m) 중 하나를 준다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeometrySection {
    pub floor_area_m2: Option<f64>,
    pub width_m: Option<f64>,
    pub length_m: Option<f64>,
    pub height_m: f64,
}

impl GeometrySection {
    fn footprint(&self) -> Result<Footprint, ScenarioError> {
        match (self.width_m, self.length_m, self.floor_area_m2) {
            (Some(width_m), Some(length_m), _) => Ok(Footprint::Rectangular { width_m, length_m }),
            (_, _, Some(floor_area_m2)) => Ok(Footprint::Square { floor_area_m2 }),
            _ => Err(ScenarioError::MissingFootprint),
        }
    }
}

/// 보정 구역. 프로파일 선택에 더해 계수 개별 덮어쓰기를 허용한다.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CalibrationSection {
    #[serde(default)]
    pub profile: CalibrationProfile,
    pub load_bias: Option<f64>,
    pub solar_intensity_w_per_m2: Option<f64>,
    pub slice_offsets_c: Option<[f64; 3]>,
    pub slice_solar_weights: Option<[f64; 3]>,
}

impl CalibrationSection {
    /// 프로파일 기본값 위에 덮어쓰기를 적용한다.
    pub fn params(&self) -> CalibrationParams {
        let mut params = self.profile.params();
        if let Some(value) = self.load_bias {
            params.load_bias = value;
        }
        if let Some(value) = self.solar_intensity_w_per_m2 {
            params.solar_intensity_w_per_m2 = value;
        }
        if let Some(value) = self.slice_offsets_c {
            params.slice_offsets_c = value;
        }
        if let Some(value) = self.slice_solar_weights {
            params.slice_solar_weights = value;
        }
        params
    }
}

/// 기본 테이블에 추가로 주입할 지역.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRegion {
    pub name: String,
    pub monthly_mean_c: Vec<f64>,
}

/// 시나리오 파일 전체 구조.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub region: String,
    #[serde(default)]
    pub usage: BuildingUse,
    #[serde(default)]
    pub slice_mode: SliceMode,
    pub geometry: GeometrySection,
    #[serde(default)]
    pub envelope: EnvelopePerformance,
    pub glazing: GlazingModel,
    /// 시간대별 내부 발열 (1개 또는 3개)
    pub gains: Vec<SliceGain>,
    #[serde(default)]
    pub setpoints: ComfortSetpointPolicy,
    pub extremes: Option<SeasonalExtremes>,
    #[serde(default)]
    pub calibration: CalibrationSection,
    #[serde(default)]
    pub cost: CostModel,
    #[serde(default)]
    pub custom_regions: Vec<CustomRegion>,
}

/// 시나리오 파일을 읽는다.
pub fn load(path: &Path) -> Result<ScenarioFile, ScenarioError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

impl ScenarioFile {
    /// 기온 테이블과 조합해 시뮬레이션 입력으로 변환한다.
    /// 시나리오에 정의된 사용자 지역은 호출자의 테이블을 건드리지 않고 사본에만 들어간다.
    pub fn to_input(&self, table: &ClimateTable) -> Result<SimulationInput, ScenarioError> {
        let mut table = table.clone();
        for custom in &self.custom_regions {
            table.insert(custom.name.clone(), custom.monthly_mean_c.clone());
        }
        let profile = table.profile(&self.region, self.extremes)?;
        Ok(SimulationInput {
            geometry: BuildingGeometry {
                footprint: self.geometry.footprint()?,
                height_m: self.geometry.height_m,
            },
            envelope: self.envelope,
            glazing: self.glazing,
            schedule: InternalGainSchedule::new(self.gains.clone()),
            profile,
            setpoints: self.setpoints,
            slice_mode: self.slice_mode,
            calibration: self.calibration.params(),
            cost: self.cost,
        })
    }
}
