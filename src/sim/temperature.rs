use serde::{Deserialize, Serialize};

use super::schedule::SliceMode;
use super::setpoint::{season_of, Season};

/// 사용자가 지정한 계절별 극값 온도. 3구간 모드에서 여름/겨울 달의 대표 온도 합성에 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalExtremes {
    pub summer_max_c: f64,
    pub summer_min_c: f64,
    pub winter_max_c: f64,
    pub winter_min_c: f64,
}

/// 한 지역의 월평균 외기 온도 프로파일. 극값은 선택 사항.
#[derive(Debug, Clone, PartialEq)]
pub struct OutdoorTemperatureProfile {
    pub region: String,
    /// 1~12월 월평균 기온 [°C]
    pub monthly_mean_c: [f64; 12],
    pub extremes: Option<SeasonalExtremes>,
}

/// 월평균 기온을 구간별 대표 외기 온도로 전개한다. 결과는 12 × N 행렬(N = 1 또는 3).
///
/// 3구간 기본 규칙은 월평균에 구간별 오프셋을 더한다. 기본 오프셋 +2/0/−4 °C는
/// 주간 일사 가열과 심야 냉각을 흉내 낸 모델링 단순화 값이지 관측값이 아니다.
/// 극값이 주어지면 여름/겨울 달은 {최고, (최고+최저)/2, 최저}로 대체한다.
pub fn expand(
    profile: &OutdoorTemperatureProfile,
    mode: SliceMode,
    offsets_c: &[f64; 3],
) -> Vec<Vec<f64>> {
    profile
        .monthly_mean_c
        .iter()
        .enumerate()
        .map(|(month, &mean_c)| {
            representative_temps(mean_c, month, profile.extremes.as_ref(), mode, offsets_c)
        })
        .collect()
}

fn representative_temps(
    mean_c: f64,
    month: usize,
    extremes: Option<&SeasonalExtremes>,
    mode: SliceMode,
    offsets_c: &[f64; 3],
) -> Vec<f64> {
    match mode {
        SliceMode::Single => vec![mean_c],
        SliceMode::ThreeSlice => {
            if let Some(extremes) = extremes {
                match season_of(month) {
                    Season::Summer => {
                        return synthesize(extremes.summer_max_c, extremes.summer_min_c)
                    }
                    Season::Winter => {
                        return synthesize(extremes.winter_max_c, extremes.winter_min_c)
                    }
                    Season::Shoulder => {}
                }
            }
            offsets_c.iter().map(|offset| mean_c + offset).collect()
        }
    }
}

fn synthesize(max_c: f64, min_c: f64) -> Vec<f64> {
    vec![max_c, (max_c + min_c) / 2.0, min_c]
}
