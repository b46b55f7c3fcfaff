//! 核心业务逻辑模块
//!
//! 包含进程列表解析、资源信息补全、展示排序与终止等核心流程

pub mod enricher;
pub mod entry_parser;
pub mod models;
pub mod pipeline;
pub mod presenter;
pub mod terminator;
pub mod traits;
