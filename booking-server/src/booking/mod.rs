//! 预约核心 - 重叠计数、排队号分配与数据保留
//!
//! 这是整个服务里唯一带并发不变量的部分：
//!
//! - **重叠计数** ([`count_active_overlapping`]): 统计与目标时间窗相交的
//!   活跃预约 (pending/confirmed)，半开区间规则 `[a1,a2) ∩ [b1,b2) ≠ ∅
//!   ⟺ a1 < b2 && b1 < a2`
//! - **排队号分配** ([`assign_queue_no`]): 容量未满 → NULL (立即入座)，
//!   已满 → `占用数 - 槽位数 + 1`
//! - **事务写入** ([`create_appointment`]): 读容量-计数-写入 整个序列在
//!   一个持有 SQLite 写锁的事务里执行，并发预订串行化
//! - **数据保留** ([`retention`]): 删除已过期的终态预约，管理端点和每日
//!   定时任务调用同一个谓词

pub mod create;
pub mod retention;


pub use create::{
    BookingOutcome, BookingRequest, DEFAULT_DURATION_MIN, assign_queue_no,
    count_active_overlapping, create_appointment,
};
