use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EnvError, Result};

/// 单个 CartPole 实例的名义物理常数与噪声幅度
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartPoleConfig {
    pub gravity: f64,
    pub masscart: f64,
    pub masspole: f64,
    /// 杆的半长
    pub length: f64,
    /// 推力基准值（实例扰动之前）
    pub force_mag: f64,
    /// 构造时推力乘以 `[1 - jitter, 1 + jitter)` 中的随机因子
    pub force_mag_jitter: f64,
    /// 时间步长 (s)
    pub tau: f64,
    pub friction_cart: f64,
    pub friction_pole: f64,
    pub gravity_eps: f64,
    pub frictioncart_eps: f64,
    pub frictionpole_eps: f64,
    /// 重力与摩擦的名义倍数（随机扰动之前）
    pub noise_scale: f64,
    /// 积分后角度的乘性噪声幅度
    pub angle_noise: f64,
    pub theta_threshold_degrees: f64,
    pub x_threshold: f64,
    /// 初始状态各分量取自 `[-init_range, init_range)`
    pub init_range: f64,
    /// 噪声模型编号，仅记录日志
    pub case: i64,
}

impl Default for CartPoleConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            masscart: 1.0,
            masspole: 0.4,
            length: 0.5,
            force_mag: 10.0,
            force_mag_jitter: 0.30,
            tau: 0.02,
            friction_cart: 5e-4,
            friction_pole: 2e-6,
            gravity_eps: 0.99,
            frictioncart_eps: 0.99,
            frictionpole_eps: 0.99,
            noise_scale: 4.0,
            angle_noise: 0.30,
            theta_threshold_degrees: 12.0,
            x_threshold: 2.4,
            init_range: 0.05,
            case: 1,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EnvError::InvalidConfig {
            field,
            reason: format!("must be positive and finite, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EnvError::InvalidConfig {
            field,
            reason: format!("must be non-negative and finite, got {value}"),
        })
    }
}

fn unit_fraction(field: &'static str, value: f64) -> Result<()> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(EnvError::InvalidConfig {
            field,
            reason: format!("must lie in [0, 1), got {value}"),
        })
    }
}

impl CartPoleConfig {
    pub fn with_case(mut self, case: i64) -> Self {
        self.case = case;
        self
    }

    pub fn validate(&self) -> Result<()> {
        positive("gravity", self.gravity)?;
        positive("masscart", self.masscart)?;
        positive("masspole", self.masspole)?;
        positive("length", self.length)?;
        positive("force_mag", self.force_mag)?;
        positive("tau", self.tau)?;
        positive("theta_threshold_degrees", self.theta_threshold_degrees)?;
        positive("x_threshold", self.x_threshold)?;
        positive("init_range", self.init_range)?;
        non_negative("friction_cart", self.friction_cart)?;
        non_negative("friction_pole", self.friction_pole)?;
        non_negative("gravity_eps", self.gravity_eps)?;
        non_negative("frictioncart_eps", self.frictioncart_eps)?;
        non_negative("frictionpole_eps", self.frictionpole_eps)?;
        non_negative("noise_scale", self.noise_scale)?;
        unit_fraction("force_mag_jitter", self.force_mag_jitter)?;
        unit_fraction("angle_noise", self.angle_noise)?;
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| EnvError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// 环境生命周期内固定的参数
///
/// 派生量在构造时计算一次，之后不再修改；每步的随机扰动只影响 `step` 内部的有效值。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Params {
    pub gravity: f64,
    pub masscart: f64,
    pub masspole: f64,
    pub length: f64,
    pub total_mass: f64,
    pub polemass_length: f64,
    /// 构造时采样一次
    pub force_mag: f64,
    pub tau: f64,
    pub friction_cart: f64,
    pub friction_pole: f64,
    pub gravity_eps: f64,
    pub frictioncart_eps: f64,
    pub frictionpole_eps: f64,
    pub noise_scale: f64,
    pub angle_noise: f64,
    pub theta_threshold_radians: f64,
    pub x_threshold: f64,
}

impl Params {
    pub fn new(config: &CartPoleConfig, force_mag: f64) -> Self {
        Self {
            gravity: config.gravity,
            masscart: config.masscart,
            masspole: config.masspole,
            length: config.length,
            total_mass: config.masspole + config.masscart,
            polemass_length: config.masspole * config.length,
            force_mag,
            tau: config.tau,
            friction_cart: config.friction_cart,
            friction_pole: config.friction_pole,
            gravity_eps: config.gravity_eps,
            frictioncart_eps: config.frictioncart_eps,
            frictionpole_eps: config.frictionpole_eps,
            noise_scale: config.noise_scale,
            angle_noise: config.angle_noise,
            theta_threshold_radians: config.theta_threshold_degrees * 2.0 * std::f64::consts::PI
                / 360.0,
            x_threshold: config.x_threshold,
        }
    }

    /// 杆倒下或小车出界；边界本身不算出界
    pub fn is_terminal(&self, x: f64, theta: f64) -> bool {
        x < -self.x_threshold
            || x > self.x_threshold
            || theta < -self.theta_threshold_radians
            || theta > self.theta_threshold_radians
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        CartPoleConfig::default().validate().unwrap();
    }

    #[test]
    fn derived_quantities() {
        let params = Params::new(&CartPoleConfig::default(), 10.0);
        assert!((params.total_mass - 1.4).abs() < 1e-12);
        assert!((params.polemass_length - 0.2).abs() < 1e-12);
        assert!((params.theta_threshold_radians - 12f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_mass() {
        let config = CartPoleConfig {
            masspole: 0.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            EnvError::InvalidConfig {
                field: "masspole",
                ..
            }
        ));
    }

    #[test]
    fn rejects_out_of_range_jitter() {
        let config = CartPoleConfig {
            angle_noise: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = CartPoleConfig::from_json_str(r#"{ "masspole": 0.1, "case": 3 }"#).unwrap();
        assert_eq!(config.masspole, 0.1);
        assert_eq!(config.case, 3);
        assert_eq!(config.gravity, 9.8);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = CartPoleConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, EnvError::ConfigParse(_)));
    }
}
