use serde::{Deserialize, Serialize};

/// 에너지-비용 환산 상수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// 냉방 설비 COP
    pub cooling_cop: f64,
    /// 난방 설비 효율 (0~1)
    pub heating_efficiency: f64,
    /// 전기 단가 [원/kWh]
    pub electricity_price_per_kwh: f64,
    /// 가스 단가 [원/kWh]
    pub gas_price_per_kwh: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            cooling_cop: 3.6,
            heating_efficiency: 0.85,
            electricity_price_per_kwh: 210.0,
            gas_price_per_kwh: 155.0,
        }
    }
}

/// 연간 비용 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub cooling_cost: f64,
    pub heating_cost: f64,
}

/// 연간 에너지를 비용으로 환산한다. 효율/COP 검증은 입력 단계에서 끝난 상태여야 한다.
pub fn annual_cost(model: &CostModel, cooling_kwh: f64, heating_kwh: f64) -> CostBreakdown {
    CostBreakdown {
        cooling_cost: cooling_kwh / model.cooling_cop * model.electricity_price_per_kwh,
        heating_cost: heating_kwh / model.heating_efficiency * model.gas_price_per_kwh,
    }
}
