use ::rand::SeedableRng;
use macroquad::prelude::*;
use rand_chacha::ChaCha8Rng;

mod canvas;
mod clock;
mod config;
mod dispatch;
mod effect;
mod effects;
mod hud;
mod qa;
mod scene;
mod tween;

use canvas::Canvas;
use clock::FrameClock;
use dispatch::RegionGrid;
use qa::QaDirector;
use scene::Scene;

const QA_REPORT_PATH: &str = "afterglow_qa_report.json";

fn window_conf() -> Conf {
    Conf {
        window_title: "AFTERGLOW — Generative Click Canvas".to_string(),
        window_width: config::CANVAS_WIDTH as i32,
        window_height: config::CANVAS_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

struct CliOptions {
    seed: Option<u64>,
    qa: Option<qa::QaScenario>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        seed: None,
        qa: None,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed '{value}'"))?;
                options.seed = Some(seed);
            }
            "--qa" => {
                let value = args.next().ok_or("--qa requires a scenario")?;
                let scenario = qa::QaScenario::parse_cli(&value)
                    .ok_or_else(|| format!("unknown QA scenario '{value}' (showcase, storm)"))?;
                options.qa = Some(scenario);
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(options)
}

fn seed_from_time() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[macroquad::main(window_conf)]
async fn main() {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("[AFTERGLOW] {e}");
            eprintln!("[AFTERGLOW] usage: afterglow [--seed N] [--qa showcase|storm]");
            std::process::exit(2);
        }
    };

    let canvas = Canvas::new(config::CANVAS_WIDTH, config::CANVAS_HEIGHT);
    let grid = RegionGrid::new(&canvas, config::GRID_COLS, config::GRID_ROWS);
    let mut scene = Scene::new();
    let mut clock = FrameClock::new();
    let seed = options.seed.unwrap_or_else(seed_from_time);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut director = options.qa.map(|scenario| {
        eprintln!("[AFTERGLOW] QA scenario: {}", scenario.label());
        QaDirector::new(scenario, &grid)
    });

    eprintln!("[AFTERGLOW] seed {seed}");
    eprintln!(
        "[AFTERGLOW] {}x{} grid — 0: disk, 1: spiral, 2: rings, 3: waves, 5: explosion, 6: line, 7: polygon",
        config::GRID_COLS,
        config::GRID_ROWS
    );

    let mut accumulator = 0.0f64;
    let mut first_frame = true;

    loop {
        let frame_time = get_frame_time() as f64;
        accumulator += frame_time.min(0.1);

        // Pointer clicks are funneled between ticks, never mid-update.
        if director.is_none() && is_mouse_button_pressed(MouseButton::Left) {
            let pointer = Vec2::from(mouse_position());
            let region = grid.region_at(pointer);
            if let Some(effect) = dispatch::spawn_for_region(region, &canvas, &clock, &mut rng) {
                eprintln!("[AFTERGLOW] region {region} -> {}", effect.name());
                scene.spawn(effect);
            }
        }

        while accumulator >= config::FIXED_DT as f64 {
            clock.advance(config::FIXED_DT_MS);
            if let Some(ref mut d) = director {
                d.run_clicks_for_frame(&clock, &grid, &canvas, &mut scene, &mut rng);
            }
            scene.advance(&clock);
            if let Some(ref mut d) = director {
                d.observe(&scene);
            }
            accumulator -= config::FIXED_DT as f64;
        }

        // Translucent wash instead of a clear keeps the afterimage trails.
        if first_frame {
            clear_background(WHITE);
            first_frame = false;
        }
        draw_rectangle(
            0.0,
            0.0,
            screen_width(),
            screen_height(),
            Color::new(1.0, 1.0, 1.0, config::TRAIL_FADE_ALPHA),
        );
        scene.draw();
        hud::draw_hud(&scene, &clock);

        if let Some(ref mut d) = director {
            if d.is_complete(&clock, &scene) {
                d.finalize(&scene);
                let report = d.report(seed, &clock);
                eprintln!("[AFTERGLOW] QA {}", report.overall_status);
                match qa::write_report(&report, QA_REPORT_PATH) {
                    Ok(()) => eprintln!("[AFTERGLOW] QA report written to {QA_REPORT_PATH}"),
                    Err(e) => eprintln!("[AFTERGLOW] {e}"),
                }
                break;
            }
        }

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_reads_seed_and_scenario() {
        let options = parse_args(
            ["--seed", "7", "--qa", "storm"]
                .iter()
                .map(|s| s.to_string()),
        )
        .expect("args should parse");
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.qa, Some(qa::QaScenario::ClickStorm));
    }

    #[test]
    fn parse_args_rejects_unknown_flags() {
        assert!(parse_args(["--what"].iter().map(|s| s.to_string())).is_err());
        assert!(parse_args(["--seed", "x"].iter().map(|s| s.to_string())).is_err());
        assert!(parse_args(["--qa", "bogus"].iter().map(|s| s.to_string())).is_err());
    }
}
