//! 单位系统
//!
//! 图纸坐标不做换算，按本地平面单位原样输出。
//! 单位标签只作为 OSM 的 `unit` 标签值和 `meta` 元数据写出；
//! 到米的换算系数仅作记录，导出流程不使用。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 绘图单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// 毫米 (默认)
    #[default]
    Mm,
    /// 厘米
    Cm,
    /// 米
    M,
    /// 英尺
    Ft,
}

impl Unit {
    /// 获取单位到米的转换因子
    pub fn to_meters(&self) -> f64 {
        match self {
            Unit::Mm => 0.001,
            Unit::Cm => 0.01,
            Unit::M => 1.0,
            Unit::Ft => 0.3048,
        }
    }

    /// 获取单位标签（写入 OSM 标签的字面值）
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::M => "m",
            Unit::Ft => "ft",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 无法识别的单位标签
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown unit '{0}', expected one of: mm, cm, m, ft")]
pub struct UnitParseError(pub String);

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" => Ok(Unit::Mm),
            "cm" => Ok(Unit::Cm),
            "m" => Ok(Unit::M),
            "ft" => Ok(Unit::Ft),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}

/// 将图纸单位下的长度换算为米
pub fn to_meters(value: f64, unit: Unit) -> f64 {
    value * unit.to_meters()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert!((to_meters(1000.0, Unit::Mm) - 1.0).abs() < 0.001);
        assert!((to_meters(10.0, Unit::Ft) - 3.048).abs() < 0.001);
        assert_eq!(Unit::M.to_meters(), 1.0);
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!("mm".parse::<Unit>(), Ok(Unit::Mm));
        assert_eq!(" FT ".parse::<Unit>(), Ok(Unit::Ft));
        assert!("inch".parse::<Unit>().is_err());
    }

    #[test]
    fn test_unit_label_round_trip() {
        for unit in [Unit::Mm, Unit::Cm, Unit::M, Unit::Ft] {
            assert_eq!(unit.to_string().parse::<Unit>(), Ok(unit));
        }
        assert_eq!(Unit::default(), Unit::Mm);
    }
}
