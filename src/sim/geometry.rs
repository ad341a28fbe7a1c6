use serde::{Deserialize, Serialize};

/// 바닥 평면 정의. 면적만 알면 정방형으로 근사하고, 폭/길이를 알면 실제 둘레를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footprint {
    /// 바닥 면적만 주어진 경우. 둘레는 4 × √면적으로 근사한다.
    Square { floor_area_m2: f64 },
    /// 폭 × 길이가 주어진 경우.
    Rectangular { width_m: f64, length_m: f64 },
}

impl Footprint {
    /// 바닥 면적 [m²]
    pub fn floor_area_m2(&self) -> f64 {
        match *self {
            Footprint::Square { floor_area_m2 } => floor_area_m2,
            Footprint::Rectangular { width_m, length_m } => width_m * length_m,
        }
    }

    /// 외곽 둘레 [m]
    pub fn perimeter_m(&self) -> f64 {
        match *self {
            Footprint::Square { floor_area_m2 } => 4.0 * floor_area_m2.sqrt(),
            Footprint::Rectangular { width_m, length_m } => 2.0 * (width_m + length_m),
        }
    }
}

/// 건물 형상.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingGeometry {
    pub footprint: Footprint,
    /// 층 높이 [m]
    pub height_m: f64,
}

impl BuildingGeometry {
    /// 외피 전체 면적 = 둘레 × 높이 [m²]
    pub fn envelope_area_m2(&self) -> f64 {
        self.footprint.perimeter_m() * self.height_m
    }
}

/// 방위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];

    /// 방위별 일사 노출 가중치. 남향이 가장 크고 북향이 가장 작다.
    pub fn solar_weight(&self) -> f64 {
        match self {
            Orientation::North => 0.3,
            Orientation::South => 1.0,
            Orientation::East | Orientation::West => 0.7,
        }
    }
}

/// 창면적비 모델. 외피 전체에 단일 WWR을 쓰거나 방위별 WWR을 따로 준다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GlazingModel {
    Uniform {
        wwr: f64,
    },
    PerOrientation {
        north: f64,
        south: f64,
        east: f64,
        west: f64,
    },
}

impl GlazingModel {
    /// 해당 방위의 WWR.
    pub fn wwr_of(&self, orientation: Orientation) -> f64 {
        match *self {
            GlazingModel::Uniform { wwr } => wwr,
            GlazingModel::PerOrientation {
                north,
                south,
                east,
                west,
            } => match orientation {
                Orientation::North => north,
                Orientation::South => south,
                Orientation::East => east,
                Orientation::West => west,
            },
        }
    }

    /// 모델에 들어 있는 모든 WWR 값. 입력 검증에 쓴다.
    pub fn ratios(&self) -> Vec<f64> {
        match *self {
            GlazingModel::Uniform { wwr } => vec![wwr],
            GlazingModel::PerOrientation {
                north,
                south,
                east,
                west,
            } => vec![north, south, east, west],
        }
    }
}

/// 한 면(방위 미구분이면 외피 전체)의 유리/불투명 분할.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopePanel {
    /// 방위 구분 시뮬레이션일 때만 Some
    pub orientation: Option<Orientation>,
    pub glazing_m2: f64,
    pub opaque_m2: f64,
    /// 일사 노출 가중치 (방위 미구분이면 1.0)
    pub solar_weight: f64,
    /// 내부 발열 배분 비율 (방위 구분 시 1/4)
    pub floor_fraction: f64,
}

/// 형상과 창면적비 모델을 면 단위 분할로 전개한다.
/// 방위별 모델은 외피를 네 방위에 균등 배분한 뒤 각 면을 WWR로 나눈다.
pub fn resolve_panels(geometry: &BuildingGeometry, glazing: &GlazingModel) -> Vec<EnvelopePanel> {
    let envelope_m2 = geometry.envelope_area_m2();
    match *glazing {
        GlazingModel::Uniform { wwr } => {
            let glazing_m2 = envelope_m2 * wwr;
            vec![EnvelopePanel {
                orientation: None,
                glazing_m2,
                opaque_m2: envelope_m2 - glazing_m2,
                solar_weight: 1.0,
                floor_fraction: 1.0,
            }]
        }
        GlazingModel::PerOrientation { .. } => Orientation::ALL
            .iter()
            .map(|&orientation| {
                let face_m2 = envelope_m2 / 4.0;
                let glazing_m2 = face_m2 * glazing.wwr_of(orientation);
                EnvelopePanel {
                    orientation: Some(orientation),
                    glazing_m2,
                    opaque_m2: face_m2 - glazing_m2,
                    solar_weight: orientation.solar_weight(),
                    floor_fraction: 0.25,
                }
            })
            .collect(),
    }
}
