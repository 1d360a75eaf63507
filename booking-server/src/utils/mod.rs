//! 工具模块 - 通用工具函数
//!
//! # 内容
//!
//! - [`logger`] - 日志初始化
//! - [`validation`] - 输入校验辅助函数
//! - [`time`] - 日期/时间解析与计算

pub mod logger;
pub mod time;
pub mod validation;

/// 设置进程环境: dotenv + 日志
///
/// 在加载配置之前调用，让 .env 文件里的变量生效。
pub fn setup_environment() {
    dotenv::dotenv().ok();
    logger::init_logger();
}
