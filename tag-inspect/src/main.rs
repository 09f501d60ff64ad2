mod assemble;
mod config;
mod error;
mod logger;

use anyhow::Context;
use config::Config;

fn main() -> anyhow::Result<()> {
    // 1. 加载 .env (不存在时忽略)
    dotenv::dotenv().ok();

    // 2. 加载配置
    let config = Config::from_env().context("Failed to load tag-inspect configuration")?;

    // 3. 初始化日志
    logger::init_logger(&config.log_level, config.log_dir.as_deref());

    let tag = assemble::build_tag(&config);

    tracing::info!(
        id = tag.id(),
        tag_name = tag.name(),
        tag_color = tag.color(),
        assigned = tag.is_assigned(),
        display_name = tag.display_name(),
        display_color = tag.display_color(),
        "Tag assembled: {}",
        tag
    );

    Ok(())
}
