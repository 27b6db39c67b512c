use serde::Serialize;

use crate::error::Result;
use crate::spaces::{BoxSpace, Discrete};

/// 附加诊断信息，目前为空
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Info {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult<O> {
    pub observation: O,
    pub reward: f64,
    pub done: bool,
    pub info: Info,
}

/// 环境接口
pub trait Environment {
    type Observation;
    type Action;

    /// 设置随机种子，返回实际使用的种子
    fn seed(&mut self, seed: Option<u64>) -> u64;

    /// 重新采样初始状态
    fn reset(&mut self) -> Self::Observation;

    /// 推进一个时间步；动作非法或尚未 reset 时返回错误
    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation>>;

    /// 获取当前状态
    fn current_state(&self) -> Option<Self::Observation>;

    /// 动作空间
    fn action_space(&self) -> Discrete;

    /// 观测空间
    fn observation_space(&self) -> BoxSpace;
}

/// 外部绘图所需的一帧：小车位置与杆角度
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub cart_position: f64,
    pub pole_angle: f64,
    /// 轨道半宽
    pub track_half_width: f64,
}

pub trait Render {
    /// 首次 reset 之前返回 `None`
    fn render(&self) -> Option<Frame>;
}
