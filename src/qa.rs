use macroquad::prelude::*;
use serde::Serialize;

use crate::canvas::Canvas;
use crate::clock::FrameClock;
use crate::config;
use crate::dispatch::{self, RegionGrid};
use crate::scene::Scene;

/// Frames allowed after the last scripted click for the scene to drain.
/// The spiral is the longest-lived effect at roughly 18*3 + 18 + 253 ticks.
const DRAIN_FRAMES: u64 = 800;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum QaScenario {
    Showcase,
    ClickStorm,
}

impl QaScenario {
    pub fn parse_cli(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "showcase" => Some(Self::Showcase),
            "storm" | "click-storm" => Some(Self::ClickStorm),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Showcase => "showcase",
            Self::ClickStorm => "click_storm",
        }
    }

    fn peak_bound(self) -> usize {
        match self {
            Self::Showcase => 10,
            Self::ClickStorm => 100,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledClick {
    pub frame: u64,
    pub at: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct QaClickLog {
    pub frame: u64,
    pub region: u32,
    pub spawned: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QaCheck {
    pub name: String,
    pub passed: bool,
    pub details: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QaReport {
    pub scenario: String,
    pub seed: u64,
    pub final_frame: u64,
    pub click_count: usize,
    pub spawn_count: usize,
    pub peak_active: usize,
    pub overall_status: String,
    pub checks: Vec<QaCheck>,
    pub clicks: Vec<QaClickLog>,
}

/// Drives scripted clicks through the same dispatch path as real pointer
/// input and verifies the lifecycle engine afterwards.
pub struct QaDirector {
    scenario: QaScenario,
    schedule: Vec<ScheduledClick>,
    next_click_idx: usize,
    deadline: u64,
    peak_active: usize,
    spawn_count: usize,
    click_logs: Vec<QaClickLog>,
    checks: Vec<QaCheck>,
    finalized: bool,
}

impl QaDirector {
    pub fn new(scenario: QaScenario, grid: &RegionGrid) -> Self {
        let schedule = build_schedule(scenario, grid);
        let last_frame = schedule.iter().map(|c| c.frame).max().unwrap_or(0);
        Self {
            scenario,
            schedule,
            next_click_idx: 0,
            deadline: last_frame + DRAIN_FRAMES,
            peak_active: 0,
            spawn_count: 0,
            click_logs: Vec::new(),
            checks: Vec::new(),
            finalized: false,
        }
    }

    /// Fire every click scheduled for the current frame.
    pub fn run_clicks_for_frame(
        &mut self,
        clock: &FrameClock,
        grid: &RegionGrid,
        canvas: &Canvas,
        scene: &mut Scene,
        rng: &mut impl ::rand::Rng,
    ) {
        while self.next_click_idx < self.schedule.len() {
            let click = self.schedule[self.next_click_idx];
            if click.frame > clock.frame {
                break;
            }
            let region = grid.region_at(click.at);
            let spawned = match dispatch::spawn_for_region(region, canvas, clock, rng) {
                Some(effect) => {
                    let name = effect.name();
                    scene.spawn(effect);
                    self.spawn_count += 1;
                    name.to_string()
                }
                None => "none".to_string(),
            };
            self.click_logs.push(QaClickLog {
                frame: clock.frame,
                region,
                spawned,
            });
            self.next_click_idx += 1;
        }
    }

    pub fn observe(&mut self, scene: &Scene) {
        self.peak_active = self.peak_active.max(scene.active_count());
    }

    pub fn is_complete(&self, clock: &FrameClock, scene: &Scene) -> bool {
        self.next_click_idx >= self.schedule.len()
            && (scene.is_empty() || clock.frame >= self.deadline)
    }

    pub fn finalize(&mut self, scene: &Scene) {
        if self.finalized {
            return;
        }
        self.finalized = true;

        self.record_check(
            "scene_drained",
            scene.is_empty(),
            format!("active={}", scene.active_count()),
        );
        self.record_check(
            "peak_active_bounded",
            self.peak_active <= self.scenario.peak_bound(),
            format!(
                "peak={}, bound={}",
                self.peak_active,
                self.scenario.peak_bound()
            ),
        );
        self.record_check(
            "every_mapped_click_spawned",
            self.click_logs
                .iter()
                .filter(|c| matches!(c.region, 0..=3 | 5..=7))
                .all(|c| c.spawned != "none"),
            format!(
                "clicks={}, spawns={}",
                self.click_logs.len(),
                self.spawn_count
            ),
        );
        self.record_check(
            "unmapped_clicks_were_noops",
            self.click_logs
                .iter()
                .filter(|c| !matches!(c.region, 0..=3 | 5..=7))
                .all(|c| c.spawned == "none"),
            "regions 4 and 8-11 must not spawn".to_string(),
        );
    }

    pub fn report(&self, seed: u64, clock: &FrameClock) -> QaReport {
        let all_passed = self.checks.iter().all(|c| c.passed);
        QaReport {
            scenario: self.scenario.label().to_string(),
            seed,
            final_frame: clock.frame,
            click_count: self.click_logs.len(),
            spawn_count: self.spawn_count,
            peak_active: self.peak_active,
            overall_status: if all_passed { "PASS" } else { "FAIL" }.to_string(),
            checks: self.checks.clone(),
            clicks: self.click_logs.clone(),
        }
    }

    fn record_check(&mut self, name: &str, passed: bool, details: String) {
        self.checks.push(QaCheck {
            name: name.to_string(),
            passed,
            details,
        });
    }
}

pub fn write_report(report: &QaReport, path: &str) -> Result<(), String> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| format!("serialize QA report failed: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("write QA report {path} failed: {e}"))
}

fn cell_center(grid: &RegionGrid, region: u32) -> Vec2 {
    let col = region % grid.cols;
    let row = region / grid.cols;
    vec2(
        (col as f32 + 0.5) * grid.cell_width,
        (row as f32 + 0.5) * grid.cell_height,
    )
}

pub fn build_schedule(scenario: QaScenario, grid: &RegionGrid) -> Vec<ScheduledClick> {
    match scenario {
        QaScenario::Showcase => showcase_schedule(grid),
        QaScenario::ClickStorm => click_storm_schedule(grid),
    }
}

/// One click per grid cell, no-op cells included, 30 frames apart.
fn showcase_schedule(grid: &RegionGrid) -> Vec<ScheduledClick> {
    (0..grid.cols * grid.rows)
        .map(|region| ScheduledClick {
            frame: 30 * (region as u64 + 1),
            at: cell_center(grid, region),
        })
        .collect()
}

/// Steady load: one click every 5 frames for 1500 frames, cycling the
/// mapped regions. Exercises the unbounded-growth characteristic under a
/// realistic click rate.
fn click_storm_schedule(grid: &RegionGrid) -> Vec<ScheduledClick> {
    let regions = [0u32, 1, 2, 3, 5, 6, 7];
    (0..300u64)
        .map(|i| ScheduledClick {
            frame: 10 + i * 5,
            at: cell_center(grid, regions[i as usize % regions.len()]),
        })
        .collect()
}
