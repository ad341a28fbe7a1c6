use serde::{Deserialize, Serialize};

/// 하루를 나누는 시간대 수. 1구간(24시간 평균) 또는 3구간(8시간씩).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SliceMode {
    Single,
    ThreeSlice,
}

impl Default for SliceMode {
    fn default() -> Self {
        SliceMode::Single
    }
}

impl SliceMode {
    pub fn slice_count(&self) -> usize {
        match self {
            SliceMode::Single => 1,
            SliceMode::ThreeSlice => 3,
        }
    }

    /// 구간당 시간 [h]
    pub fn slice_hours(&self) -> f64 {
        match self {
            SliceMode::Single => 24.0,
            SliceMode::ThreeSlice => 8.0,
        }
    }
}

/// 한 시간대의 내부 발열. 합산값 하나로 주거나 재실/조명/장비로 나눠서 준다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliceGain {
    /// 미리 합산된 발열 밀도 [W/m²]
    Lumped(f64),
    /// 구성요소별 발열 밀도 [W/m²]
    Split {
        #[serde(default)]
        occupant_w_per_m2: f64,
        #[serde(default)]
        lighting_w_per_m2: f64,
        #[serde(default)]
        equipment_w_per_m2: f64,
    },
}

impl SliceGain {
    /// 시간대 발열 밀도 합 [W/m²]
    pub fn density_w_per_m2(&self) -> f64 {
        match *self {
            SliceGain::Lumped(density) => density,
            SliceGain::Split {
                occupant_w_per_m2,
                lighting_w_per_m2,
                equipment_w_per_m2,
            } => occupant_w_per_m2 + lighting_w_per_m2 + equipment_w_per_m2,
        }
    }
}

/// 시간대별 내부 발열 스케줄. 구간 수는 한 번의 실행 동안 고정이며 모든 달에 동일하다.
///
/// 3구간 기준 시간대: 1구간 08~16시(주간), 2구간 16~24시(저녁), 3구간 00~08시(심야).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalGainSchedule {
    pub slices: Vec<SliceGain>,
}

impl InternalGainSchedule {
    pub fn new(slices: Vec<SliceGain>) -> Self {
        Self { slices }
    }

    /// 전 구간 산술 평균 발열 밀도 [W/m²]
    pub fn average_density_w_per_m2(&self) -> f64 {
        if self.slices.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.slices.iter().map(SliceGain::density_w_per_m2).sum();
        sum / self.slices.len() as f64
    }

    /// 실행 모드에 맞춰 구간별 발열 밀도를 확정한다.
    /// 1구간 모드는 평균값 하나, 3구간 모드는 구간별 값(입력이 하나면 복제)을 쓴다.
    pub fn resolve(&self, mode: SliceMode) -> Vec<f64> {
        match mode {
            SliceMode::Single => vec![self.average_density_w_per_m2()],
            SliceMode::ThreeSlice => {
                if self.slices.len() == 1 {
                    vec![self.slices[0].density_w_per_m2(); 3]
                } else {
                    self.slices.iter().map(SliceGain::density_w_per_m2).collect()
                }
            }
        }
    }
}
