mod animate;
mod app;
mod scene;

use anyhow::{Context, Result};

use lumen_engine::assets::AssetStore;
use lumen_engine::camera::CameraConfig;
use lumen_engine::device::GpuInit;
use lumen_engine::logging::{init_logging, LoggingConfig};
use lumen_engine::window::{Runtime, RuntimeConfig};

use app::InteriorApp;
use scene::InteriorScene;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let assets = AssetStore::from_env();
    log::info!("asset root: {}", assets.root().display());

    let scene = InteriorScene::build(assets).context("failed to build the interior scene")?;
    let app = InteriorApp::new(scene, CameraConfig::default());

    Runtime::run(RuntimeConfig::default(), GpuInit::default(), app)
}
