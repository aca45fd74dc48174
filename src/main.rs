mod cli;

use clap::Parser;
use cli::Cli;
use dashgl_math::{Error, Mat4};

fn print_frame(frame: u64, seconds: f32, mvp: &Mat4, raw: bool) {
    println!("frame {frame} t={seconds:.4}");
    if raw {
        let values: Vec<String> = mvp.as_slice().iter().map(|v| format!("{v:.6}")).collect();
        println!("  {}", values.join(" "));
        return;
    }

    for r in 0..4 {
        let [a, b, c, d] = mvp.row(r);
        println!("  [{a:>10.6} {b:>10.6} {c:>10.6} {d:>10.6}]");
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    cli.validate()?;

    let clock = cli.clock()?;
    let viewport = cli.viewport();
    log::info!(
        "tracing {} for {} frame(s) from frame {} at {} fps, viewport {}x{}",
        cli.demo,
        cli.frames,
        cli.start_frame,
        clock.fps(),
        viewport.width,
        viewport.height
    );

    for step in clock.frames(cli.frames) {
        let (frame, elapsed) = step?;
        let mvp = cli.demo.mvp_at(elapsed, viewport);
        if !mvp.is_finite() {
            log::warn!("frame {frame}: mvp contains non-finite values");
        }
        print_frame(frame, elapsed.as_secs_f32(), &mvp, cli.raw);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
