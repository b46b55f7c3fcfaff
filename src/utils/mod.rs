//! 工具模块
//!
//! 日志初始化与人类可读的格式化

pub mod format;
pub mod logger;
