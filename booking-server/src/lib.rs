//! DineUp Booking Server - 多品牌餐厅订位/排队服务端
//!
//! # 架构概述
//!
//! 本模块是 Booking Server 的主入口，提供以下核心功能：
//!
//! - **预约核心** (`booking`): 时间窗重叠计数 + 排队号分配（事务内执行）
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (sqlx)
//! - **认证** (`auth`): JWT 令牌校验与角色检查
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! booking-server/src/
//! ├── core/          # 配置、状态、服务器、后台任务
//! ├── auth/          # JWT 认证、角色中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── booking/       # 预约核心（重叠计数、排队号、数据保留）
//! ├── db/            # 数据库层
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod booking;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState};
pub use utils::setup_environment;

pub fn print_banner() {
    println!(
        r#"
    ____  _            __  __
   / __ \(_)___  ___  / / / /___
  / / / / / __ \/ _ \/ / / / __ \
 / /_/ / / / / /  __/ /_/ / /_/ /
/_____/_/_/ /_/\___/\____/ .___/
                        /_/
    "#
    );
}
