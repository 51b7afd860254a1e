use anyhow::Result;

use life_strategy_intake::app::App;
use life_strategy_intake::config::Config;
use life_strategy_intake::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = Config::from_env();
    let mut app = App::initialize(config).await?;
    app.run().await?;

    Ok(())
}
