use std::process;

use anyhow::{Context, Result, bail};

use ascii_cube::{
    config::CubeConfig,
    driver::CubeRenderer,
    logging::{LoggingConfig, init_logging},
    player::Player,
    types::Rotation,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const SPIN_USAGE: &str = "ascii-cube spin";
const SHELL_USAGE: &str = "ascii-cube shell";
const FRAME_USAGE: &str = "ascii-cube frame [<a> <b> <c>]";

fn run() -> Result<()> {
    let config = CubeConfig::load();
    init_logging(LoggingConfig {
        env_filter: None,
        file: config.log_file.clone(),
    });

    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("spin") => Player::spin(config).play(),
        Some("shell") => Player::shell(config).play(),
        Some("frame") => {
            let angles: Vec<String> = args.collect();
            frame(&config, &angles)
        }
        _ => bail!(
            "ASCII Cube — depth-buffered 3D cube in the terminal\n\nUsage:\n  {SPIN_USAGE}\n  {SHELL_USAGE}\n  {FRAME_USAGE}"
        ),
    }
}

fn frame(config: &CubeConfig, angles: &[String]) -> Result<()> {
    let rotation = match angles {
        [] => Rotation::default(),
        [a, b, c] => Rotation::new(angle(a)?, angle(b)?, angle(c)?),
        _ => bail!("Expected three angles\n\nUsage:\n  {FRAME_USAGE}"),
    };

    let mut renderer = CubeRenderer::new(config);
    print!("{}", renderer.render_at(rotation));
    Ok(())
}

fn angle(arg: &str) -> Result<f64> {
    arg.parse()
        .with_context(|| format!("Invalid angle {arg:?}"))
}
