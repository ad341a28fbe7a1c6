use serde::{Deserialize, Serialize};

/// 보정 프로파일. 이름 하나가 (부하 보정 계수, 일사 강도, 구간 오프셋, 구간 일사 배분)
/// 한 벌에 대응한다. 실행당 정확히 하나가 활성화된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalibrationProfile {
    SimplifiedStatic,
    DynamicDetailed,
    ThermalMassDetailed,
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        CalibrationProfile::SimplifiedStatic
    }
}

impl CalibrationProfile {
    pub const ALL: [CalibrationProfile; 3] = [
        CalibrationProfile::SimplifiedStatic,
        CalibrationProfile::DynamicDetailed,
        CalibrationProfile::ThermalMassDetailed,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CalibrationProfile::SimplifiedStatic => "simplified-static",
            CalibrationProfile::DynamicDetailed => "dynamic-detailed",
            CalibrationProfile::ThermalMassDetailed => "thermal-mass-detailed",
        }
    }

    pub fn from_code(code: &str) -> Option<CalibrationProfile> {
        let code = code.trim().to_lowercase();
        CalibrationProfile::ALL
            .iter()
            .copied()
            .find(|profile| profile.code() == code)
    }

    /// 프로파일별 기본 계수.
    pub fn params(&self) -> CalibrationParams {
        match self {
            CalibrationProfile::SimplifiedStatic => CalibrationParams {
                load_bias: 1.0,
                solar_intensity_w_per_m2: 170.0,
                slice_offsets_c: [2.0, 0.0, -4.0],
                slice_solar_weights: [1.0, 0.0, 0.0],
            },
            CalibrationProfile::DynamicDetailed => CalibrationParams {
                load_bias: 1.1,
                solar_intensity_w_per_m2: 165.0,
                slice_offsets_c: [2.0, 0.0, -4.0],
                slice_solar_weights: [0.8, 0.2, 0.0],
            },
            CalibrationProfile::ThermalMassDetailed => CalibrationParams {
                load_bias: 1.25,
                solar_intensity_w_per_m2: 150.0,
                slice_offsets_c: [2.0, 0.0, -4.0],
                slice_solar_weights: [0.8, 0.2, 0.0],
            },
        }
    }
}

/// 보정 계수 묶음. 스크립트 변형마다 값이 달라 프로파일 기본값 위에 개별 덮어쓰기를 허용한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationParams {
    /// 순부하 곱셈 보정 계수 (간이 정적 모델은 1.0)
    pub load_bias: f64,
    /// 일사 강도 가중치 [W/m²]
    pub solar_intensity_w_per_m2: f64,
    /// 3구간 모드 기온 오프셋 [°C]
    pub slice_offsets_c: [f64; 3],
    /// 3구간 모드 일사 배분 가중치 (1구간 모드에서는 무시)
    pub slice_solar_weights: [f64; 3],
}

impl Default for CalibrationParams {
    fn default() -> Self {
        CalibrationProfile::SimplifiedStatic.params()
    }
}
