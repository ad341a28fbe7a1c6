use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::sim::calibration::CalibrationProfile;
use crate::sim::cost::CostModel;

/// 설정 온도 허용 범위 [°C].
pub const COOLING_SETPOINT_RANGE: (f64, f64) = (22.0, 30.0);
pub const HEATING_SETPOINT_RANGE: (f64, f64) = (16.0, 24.0);

/// 대화형 입력의 기본값 모음.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationDefaults {
    pub region: String,
    pub floor_area_m2: f64,
    pub height_m: f64,
    pub wwr: f64,
    pub glazing_u_w_per_m2k: f64,
    pub shgc: f64,
    pub wall_u_w_per_m2k: f64,
    /// 08~16시 내부 발열 [W/m²]
    pub gain_day_w_per_m2: f64,
    /// 16~24시 내부 발열 [W/m²]
    pub gain_evening_w_per_m2: f64,
    /// 00~08시 내부 발열 [W/m²]
    pub gain_night_w_per_m2: f64,
    pub cooling_setpoint_c: f64,
    pub heating_setpoint_c: f64,
    pub neutral_setpoint_c: f64,
}

impl Default for SimulationDefaults {
    fn default() -> Self {
        Self {
            region: "서울/경기".to_string(),
            floor_area_m2: 300.0,
            height_m: 3.5,
            wwr: 0.4,
            glazing_u_w_per_m2k: 1.5,
            shgc: 0.45,
            wall_u_w_per_m2k: 0.3,
            gain_day_w_per_m2: 30.0,
            gain_evening_w_per_m2: 15.0,
            gain_night_w_per_m2: 5.0,
            cooling_setpoint_c: 26.0,
            heating_setpoint_c: 20.0,
            neutral_setpoint_c: 22.0,
        }
    }
}

/// 애플리케이션 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (ko/en/auto)
    pub language: String,
    /// 기본 보정 프로파일
    pub calibration: CalibrationProfile,
    pub defaults: SimulationDefaults,
    pub cost: CostModel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            calibration: CalibrationProfile::default(),
            defaults: SimulationDefaults::default(),
            cost: CostModel::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(path, &cfg)?;
        Ok(cfg)
    }
}

fn save_config(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(path, self)
    }
}
