//! 지역별 월평균 기온 테이블. 한국 7개 권역을 기본 제공하고
//! 임의 지역 시계열을 주입할 수 있다. 값은 참고용 월평균이다.

use crate::sim::temperature::{OutdoorTemperatureProfile, SeasonalExtremes};

/// 한 지역의 월평균 기온 시계열.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSeries {
    pub name: String,
    /// 1~12월 월평균 기온 [°C]
    pub monthly_mean_c: Vec<f64>,
}

/// 기온 조회 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ClimateError {
    /// 테이블에 없는 지역
    UnknownRegion(String),
    /// 월별 자료가 12개가 아님
    SeriesLength { region: String, len: usize },
}

impl std::fmt::Display for ClimateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClimateError::UnknownRegion(name) => write!(f, "알 수 없는 지역: {name}"),
            ClimateError::SeriesLength { region, len } => {
                write!(f, "{region} 지역의 월별 기온 자료가 12개가 아닙니다 (현재 {len}개)")
            }
        }
    }
}

impl std::error::Error for ClimateError {}

/// 한국 주요 권역 월평균 기온 [°C] (1월~12월).
const KOREA_MONTHLY_MEAN_C: &[(&str, [f64; 12])] = &[
    (
        "서울/경기",
        [-2.4, 0.4, 5.7, 12.5, 17.8, 22.2, 24.9, 25.7, 21.2, 14.8, 7.2, 0.4],
    ),
    (
        "춘천/강원",
        [-4.6, -1.3, 4.5, 11.6, 17.2, 21.7, 24.5, 24.9, 19.8, 12.5, 5.1, -1.8],
    ),
    (
        "대전/충청",
        [-1.0, 1.5, 7.0, 13.5, 18.9, 23.3, 26.1, 26.6, 21.8, 15.2, 8.2, 1.4],
    ),
    (
        "광주/전남",
        [0.6, 2.5, 7.5, 13.5, 18.7, 22.8, 26.1, 26.9, 22.4, 16.2, 9.4, 3.1],
    ),
    (
        "대구/경북",
        [0.6, 3.0, 8.5, 14.8, 20.3, 24.3, 27.1, 27.6, 22.8, 16.5, 9.5, 2.8],
    ),
    (
        "부산/경남",
        [3.2, 5.2, 9.4, 14.3, 18.7, 22.2, 25.4, 26.9, 23.2, 18.1, 11.7, 5.6],
    ),
    (
        "제주",
        [6.1, 6.8, 10.0, 14.5, 18.5, 22.3, 26.2, 27.2, 23.6, 18.9, 13.4, 8.3],
    ),
];

/// 지역 이름 → 월평균 기온 조회 테이블.
#[derive(Debug, Clone)]
pub struct ClimateTable {
    regions: Vec<RegionSeries>,
}

impl ClimateTable {
    /// 빈 테이블.
    pub fn empty() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// 한국 7개 권역이 들어 있는 기본 테이블.
    pub fn korea() -> Self {
        let regions = KOREA_MONTHLY_MEAN_C
            .iter()
            .map(|(name, series)| RegionSeries {
                name: (*name).to_string(),
                monthly_mean_c: series.to_vec(),
            })
            .collect();
        Self { regions }
    }

    /// 지역을 추가한다. 같은 이름이 이미 있으면 시계열을 교체한다.
    pub fn insert(&mut self, name: impl Into<String>, monthly_mean_c: Vec<f64>) {
        let name = name.into();
        if let Some(existing) = self
            .regions
            .iter_mut()
            .find(|region| region.name.eq_ignore_ascii_case(&name))
        {
            existing.monthly_mean_c = monthly_mean_c;
        } else {
            self.regions.push(RegionSeries {
                name,
                monthly_mean_c,
            });
        }
    }

    pub fn regions(&self) -> &[RegionSeries] {
        &self.regions
    }

    pub fn region_names(&self) -> Vec<&str> {
        self.regions.iter().map(|region| region.name.as_str()).collect()
    }

    pub fn find(&self, name: &str) -> Option<&RegionSeries> {
        self.regions
            .iter()
            .find(|region| region.name.eq_ignore_ascii_case(name))
    }

    /// 지역 이름으로 시뮬레이션용 기온 프로파일을 만든다.
    pub fn profile(
        &self,
        name: &str,
        extremes: Option<SeasonalExtremes>,
    ) -> Result<OutdoorTemperatureProfile, ClimateError> {
        let region = self
            .find(name)
            .ok_or_else(|| ClimateError::UnknownRegion(name.to_string()))?;
        if region.monthly_mean_c.len() != 12 {
            return Err(ClimateError::SeriesLength {
                region: region.name.clone(),
                len: region.monthly_mean_c.len(),
            });
        }
        let mut monthly_mean_c = [0.0; 12];
        monthly_mean_c.copy_from_slice(&region.monthly_mean_c);
        Ok(OutdoorTemperatureProfile {
            region: region.name.clone(),
            monthly_mean_c,
            extremes,
        })
    }
}

impl Default for ClimateTable {
    fn default() -> Self {
        Self::korea()
    }
}
