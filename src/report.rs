//! 분석 결과 요약 텍스트 생성과 파일 저장.
//! 내부 계산은 전체 정밀도를 유지하고 반올림은 이 경계에서만 한다.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::i18n::{keys, Translator};
use crate::sim::cost::CostModel;
use crate::sim::SimulationResult;

/// 건물 용도 구분. 보고서 표기에만 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildingUse {
    Residential,
    Commercial,
}

impl Default for BuildingUse {
    fn default() -> Self {
        BuildingUse::Residential
    }
}

impl BuildingUse {
    pub fn label(&self, tr: &Translator) -> &'static str {
        match self {
            BuildingUse::Residential => tr.t(keys::USAGE_RESIDENTIAL),
            BuildingUse::Commercial => tr.t(keys::USAGE_COMMERCIAL),
        }
    }
}

/// 보고서 생성에 필요한 문맥.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub region: &'a str,
    pub usage: BuildingUse,
    pub floor_area_m2: f64,
    pub average_gain_w_per_m2: f64,
    pub profile_code: &'a str,
    pub cost: &'a CostModel,
    pub result: &'a SimulationResult,
}

/// 분석 결과 요약 텍스트를 만든다. 비용은 정수로, 에너지는 소수 첫째 자리로 반올림한다.
pub fn render(tr: &Translator, ctx: &ReportContext<'_>) -> String {
    let result = ctx.result;
    let currency = tr.t(keys::CURRENCY_UNIT);
    let mut text = String::new();

    text.push_str(&format!(
        "{}: {} ({})\n",
        tr.t(keys::REPORT_REGION),
        ctx.region,
        ctx.usage.label(tr)
    ));
    text.push_str(&format!(
        "- {}: {} kWh\n",
        tr.t(keys::REPORT_COOLING_ENERGY),
        format_number(result.annual_cooling_kwh, 1)
    ));
    text.push_str(&format!(
        "- {}: {} kWh\n",
        tr.t(keys::REPORT_HEATING_ENERGY),
        format_number(result.annual_heating_kwh, 1)
    ));
    text.push_str(&format!(
        "- {}: {:.1} W/m²\n",
        tr.t(keys::REPORT_AVG_GAIN),
        ctx.average_gain_w_per_m2
    ));
    text.push_str(&format!(
        "- {}: {} m²\n",
        tr.t(keys::REPORT_FLOOR_AREA),
        ctx.floor_area_m2
    ));
    text.push_str(&format!(
        "- {}: {} {} (COP {})\n",
        tr.t(keys::REPORT_COOLING_COST),
        format_number(result.cooling_cost, 0),
        currency,
        ctx.cost.cooling_cop
    ));
    text.push_str(&format!(
        "- {}: {} {} ({} {})\n",
        tr.t(keys::REPORT_HEATING_COST),
        format_number(result.heating_cost, 0),
        currency,
        tr.t(keys::EFFICIENCY_LABEL),
        ctx.cost.heating_efficiency
    ));
    text.push_str(&format!(
        "- {}: {}\n",
        tr.t(keys::REPORT_PROFILE),
        ctx.profile_code
    ));

    text.push('\n');
    for key in [
        keys::METHOD_HEADING,
        keys::METHOD_CONDUCTION,
        keys::METHOD_SOLAR,
        keys::METHOD_INTERNAL,
        keys::METHOD_NET,
        keys::METHOD_COST,
        keys::METHOD_DISCLAIMER,
    ] {
        text.push_str(tr.t(key));
        text.push('\n');
    }
    text
}

/// 보고서를 텍스트 파일로 저장한다.
pub fn save(path: &Path, text: &str) -> std::io::Result<()> {
    fs::write(path, text)
}

/// 천 단위 구분 기호를 붙여 수치를 표기한다. decimals가 0이면 정수로 반올림한다.
pub fn format_number(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    let negative = rounded < 0.0;
    let magnitude = rounded.abs();

    let digits = (magnitude.trunc() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if decimals > 0 {
        let fraction = format!("{:.*}", decimals, magnitude.fract());
        out.push_str(&fraction[1..]);
    }
    out
}
