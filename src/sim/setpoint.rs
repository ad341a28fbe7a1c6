use serde::{Deserialize, Serialize};

/// 계절 구분. 여름은 6~8월, 겨울은 12~2월, 나머지는 중간기.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Winter,
    Shoulder,
}

/// 0 기반 월 인덱스로 계절을 판정한다.
pub fn season_of(month: usize) -> Season {
    match month {
        5 | 6 | 7 => Season::Summer,
        0 | 1 | 11 => Season::Winter,
        _ => Season::Shoulder,
    }
}

/// 계절별 실내 설정 온도 정책.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortSetpointPolicy {
    /// 여름 냉방 설정 온도 [°C]
    pub cooling_c: f64,
    /// 겨울 난방 설정 온도 [°C]
    pub heating_c: f64,
    /// 중간기 설정 온도 [°C]
    #[serde(default = "default_neutral_c")]
    pub neutral_c: f64,
}

fn default_neutral_c() -> f64 {
    22.0
}

impl Default for ComfortSetpointPolicy {
    fn default() -> Self {
        Self {
            cooling_c: 26.0,
            heating_c: 20.0,
            neutral_c: 22.0,
        }
    }
}

impl ComfortSetpointPolicy {
    /// 해당 월의 설정 온도 [°C]
    pub fn setpoint_c(&self, month: usize) -> f64 {
        match season_of(month) {
            Season::Summer => self.cooling_c,
            Season::Winter => self.heating_c,
            Season::Shoulder => self.neutral_c,
        }
    }
}
