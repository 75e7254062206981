// Demo: squares, a triangle, a spiral and a stamped "turtle head".
// • Default: a window opens and the drawing animates step by step. ESC or close stops it.
// • --headless: nothing is shown; the picture is written as PPM, BMP and PNG.
// Build with `cargo run --features demo`; the library alone needs neither clap nor a subscriber.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pixel_turtle::window::run_window;
use pixel_turtle::{
    Cursor, DEFAULT_SPIRAL_TURN, Error, PixelBuffer, Present, WindowOptions, move_with_pen, polygon, rgb,
    save_bmp, save_png, save_ppm, spiral,
};

#[derive(Parser, Debug)]
#[command(name = "pixel-turtle", about = "Draw a turtle graphics scene")]
struct Args {
    /// Render without a window and save image files instead
    #[arg(long)]
    headless: bool,

    /// Where headless mode writes turtle.ppm, turtle.bmp and turtle.png
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[arg(long, default_value_t = 800)]
    width: usize,

    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Pause after every move in window mode (milliseconds)
    #[arg(long, default_value_t = 5)]
    delay_ms: u64,
}

/// Returns false if the observer asked to stop part way.
fn draw_scene(t: &mut Cursor<'_>, mut on_step: Option<&mut dyn Present<PixelBuffer>>) -> bool {
    if !move_with_pen(t, 150.0, 300.0, false, on_step.as_deref_mut())
        || !polygon(t, 4, 120.0, rgb(255, 69, 0), on_step.as_deref_mut())
    {
        return false;
    }

    if !move_with_pen(t, 420.0, 200.0, false, on_step.as_deref_mut())
        || !polygon(t, 3, 140.0, rgb(0, 128, 255), on_step.as_deref_mut())
    {
        return false;
    }

    if !move_with_pen(t, 500.0, 400.0, false, on_step.as_deref_mut())
        || !spiral(t, 60, 3.0, DEFAULT_SPIRAL_TURN, rgb(34, 139, 34), on_step.as_deref_mut())
    {
        return false;
    }

    if !move_with_pen(t, 100.0, 100.0, false, on_step.as_deref_mut()) {
        return false;
    }
    t.pen_down();
    t.set_pen(rgb(128, 0, 128));
    t.turn_left(90.0);
    t.forward(180.0);

    // turtle head
    t.stamp(5, rgb(0, 0, 0));
    match on_step {
        Some(observer) => observer.present(t.surface()),
        None => true,
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.headless {
        let mut canvas = PixelBuffer::new(args.width, args.height, rgb(240, 248, 255))?;
        {
            let mut t = Cursor::new(&mut canvas, 0.0, 0.0);
            draw_scene(&mut t, None);
        }
        let ppm = args.out_dir.join("turtle.ppm");
        let bmp = args.out_dir.join("turtle.bmp");
        let png = args.out_dir.join("turtle.png");
        save_ppm(&canvas, &ppm)?;
        save_bmp(&canvas, &bmp)?;
        save_png(&canvas, &png)?;
        tracing::info!(
            ppm = %ppm.display(),
            bmp = %bmp.display(),
            png = %png.display(),
            "wrote images"
        );
        return Ok(());
    }

    let opts = WindowOptions {
        width: args.width,
        height: args.height,
        delay: Duration::from_millis(args.delay_ms),
        title: "Pixel Turtle (ESC to quit)".to_string(),
        ..WindowOptions::default()
    };
    run_window(&opts, |t, display| {
        if !draw_scene(t, Some(display)) {
            tracing::info!("drawing stopped by the window");
        }
    })
}
