/// painter3d terminal demo - tumbling cube
///
/// Paints a six-coloured cube back-to-front with line-swept fills.
/// Controls:
///   - Q / ESC / Ctrl-C: Quit
///
/// Set RUST_LOG to change logging (default: warn).
use anyhow::Context;
use painter_core::logging::{init_logging, LoggingConfig};
use painter_core::{FrameDriver, RenderConfig, Scene};
use painter_terminal::{TerminalConfig, TerminalHost};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default().with_default_level(log::LevelFilter::Warn));

    let mut host =
        TerminalHost::new(TerminalConfig::default()).context("failed to query terminal size")?;
    let mut driver = FrameDriver::new(Scene::cube(200.0), RenderConfig::default());

    let frames = host.run(&mut driver).context("frame loop failed")?;

    log::info!("rendered {} frames", frames);
    println!("Thank you for using painter3d!");
    Ok(())
}
