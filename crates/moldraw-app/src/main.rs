//! MolDraw 命令行入口
//!
//! 读取绘制配置与场景描述，调用几何内核，输出绘制信息 JSON。

mod scene;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moldraw_core::bond::DrawConfig;
use moldraw_core::math::Point2;
use scene::Scene;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "moldraw")]
#[command(about = "Compute bond draw geometry and hit-test molecular diagrams")]
struct Cli {
    /// 输出调试日志
    #[arg(long, global = true)]
    verbose: bool,

    /// 绘制配置 JSON（缺省使用默认常量）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build draw info for every element of a scene
    Build {
        scene: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// List the elements whose selection shape contains a point
    Hit {
        scene: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Build the built-in demo scene
    Demo {
        #[arg(long)]
        pretty: bool,
    },
    /// Print the default draw configuration
    Config,
}

fn load_config(path: Option<&Path>) -> Result<DrawConfig> {
    let cfg = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => DrawConfig::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志（输出到 stderr，stdout 留给 JSON）
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    let cfg = load_config(cli.config.as_deref())?;

    match cli.action {
        Action::Build { scene, pretty } => {
            info!("Building scene {}", scene.display());
            let built = Scene::load(&scene)?.build(&cfg);
            print_json(&built, pretty)
        }
        Action::Hit { scene, x, y } => {
            let built = Scene::load(&scene)?.build(&cfg);
            let hits = built.hits(&Point2::new(x, y));
            info!("{} element(s) hit at ({x}, {y})", hits.len());
            print_json(&hits, false)
        }
        Action::Demo { pretty } => print_json(&Scene::demo().build(&cfg), pretty),
        Action::Config => print_json(&DrawConfig::default(), true),
    }
}
