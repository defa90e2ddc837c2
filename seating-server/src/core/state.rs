use crate::core::Config;
use crate::ledger::SeatingLedger;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求处理器拿到的都是同一个账本。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | ledger | SeatingLedger | 座位账本 (进程内存，重启即丢失) |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub ledger: SeatingLedger,
}

impl ServerState {
    /// 使用空账本初始化
    pub fn initialize(config: &Config) -> Self {
        tracing::info!(environment = %config.environment, "Initializing seating ledger");
        Self::with_ledger(config.clone(), SeatingLedger::new())
    }

    /// 使用已有账本 (测试中共享同一账本)
    pub fn with_ledger(config: Config, ledger: SeatingLedger) -> Self {
        Self { config, ledger }
    }

    pub fn ledger(&self) -> &SeatingLedger {
        &self.ledger
    }
}
