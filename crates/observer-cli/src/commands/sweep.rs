use std::path::Path;

use serde::{Deserialize, Serialize};

use observer_core::{ObserverError, SimulationConfig, StatisticalModel, SweepResult};

/// Flag values that override the config file (or the defaults).
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepOverrides {
    pub error_probability: Option<f64>,
    pub lambda_min: Option<f64>,
    pub lambda_max: Option<f64>,
    pub points: Option<usize>,
    pub samples_per_point: Option<usize>,
    pub critical_scale: Option<f64>,
    pub seed: Option<u64>,
    pub snapshot: bool,
}

pub struct SweepCommandConfig<'a> {
    pub config_path: Option<&'a str>,
    pub overrides: SweepOverrides,
    pub output_path: Option<&'a str>,
}

/// One row of the sweep table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub lambda: f64,
    pub amplitude_re: f64,
    pub amplitude_im: f64,
    pub effective_distinguishability: f64,
    pub mean: f64,
    pub standard_error: f64,
    /// 1.0 = unitary, 0.0 = collapsed.
    pub collapse: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub config: SimulationConfig,
    pub rows: Vec<SweepRow>,
}

pub fn apply_overrides(mut cfg: SimulationConfig, o: SweepOverrides) -> SimulationConfig {
    if let Some(v) = o.error_probability {
        cfg.error_probability = v;
    }
    if let Some(v) = o.lambda_min {
        cfg.lambda_min = v;
    }
    if let Some(v) = o.lambda_max {
        cfg.lambda_max = v;
    }
    if let Some(v) = o.points {
        cfg.points = v;
    }
    if let Some(v) = o.samples_per_point {
        cfg.samples_per_point = v;
    }
    if let Some(v) = o.critical_scale {
        cfg.critical_scale = v;
    }
    if o.seed.is_some() {
        cfg.seed = o.seed;
    }
    cfg.snapshot |= o.snapshot;
    cfg
}

fn row(
    lambda: f64,
    model: &StatisticalModel,
    result: &SweepResult,
    critical_scale: f64,
) -> Result<SweepRow, ObserverError> {
    let amplitude = model.amplitude();
    Ok(SweepRow {
        lambda,
        amplitude_re: amplitude.re,
        amplitude_im: amplitude.im,
        effective_distinguishability: model.effective_distinguishability(),
        mean: result.mean,
        standard_error: result.standard_error,
        collapse: model.collapse_predicate(critical_scale)?,
    })
}

/// Run the configured sweep and collect one row per Λ.
pub fn build_report(cfg: SimulationConfig) -> Result<SweepReport, ObserverError> {
    // Reject a bad Λc before spending any samples.
    StatisticalModel::critical_threshold(cfg.critical_scale)?;
    let grid = cfg.scale_values()?;
    let runner = cfg.runner();

    let mut rows = Vec::with_capacity(grid.len());
    let mut row_err = None;
    let mut collect = |i: usize, m: &StatisticalModel, r: &SweepResult| {
        match row(grid[i], m, r, cfg.critical_scale) {
            Ok(row) => rows.push(row),
            Err(e) => {
                row_err.get_or_insert(e);
            }
        }
    };

    // Built once: the constructor already warns about unphysical states.
    let mut model = cfg.model();
    if cfg.snapshot {
        runner.map_inspect(&model, &grid, &mut collect)?;
    } else {
        runner.run_inspect(&mut model, &grid, &mut collect)?;
        log::debug!("model left at amplitude {}", model.amplitude());
    }

    match row_err {
        Some(e) => Err(e),
        None => Ok(SweepReport { config: cfg, rows }),
    }
}

pub fn run(cmd: SweepCommandConfig) {
    let base = match cmd.config_path {
        Some(path) => match SimulationConfig::from_path(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Failed to load config {path}: {e}");
                std::process::exit(2);
            }
        },
        None => SimulationConfig::default(),
    };
    let cfg = apply_overrides(base, cmd.overrides);

    println!(
        "Sweeping Λ ∈ [{}, {}] over {} points, {} trials each (p_err={}, Λc={}, {})\n",
        cfg.lambda_min,
        cfg.lambda_max,
        cfg.points,
        cfg.samples_per_point,
        cfg.error_probability,
        cfg.critical_scale,
        if cfg.snapshot { "snapshot" } else { "in-place" },
    );

    let report = match build_report(cfg) {
        Ok(report) => report,
        Err(e) => super::fail(e),
    };

    println!(
        "{:>8} {:>10} {:>10} {:>10} {:>10}  {}",
        "Λ", "|d|", "d_eff", "p(0)", "± se", "state"
    );
    println!("{}", "-".repeat(64));
    for r in &report.rows {
        println!(
            "{:>8.3} {:>10.4} {:>10.4} {:>10.4} {:>10.4}  {}",
            r.lambda,
            r.amplitude_re.hypot(r.amplitude_im),
            r.effective_distinguishability,
            r.mean,
            r.standard_error,
            super::verdict(r.collapse),
        );
    }
    println!("\nClassical limit p(0) = 0.5; critical Λc = {}", cfg.critical_scale);

    if let Some(path) = cmd.output_path {
        super::write_json(&report, path, "Sweep report");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(points: usize) -> SimulationConfig {
        SimulationConfig {
            points,
            samples_per_point: 100,
            seed: Some(4),
            ..SimulationConfig::default()
        }
    }

    thread_local! {
        static WARNINGS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
    }

    /// Counts `warn` records emitted on the calling thread.
    struct WarnCounter;

    impl log::Log for WarnCounter {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if record.level() == log::Level::Warn {
                WARNINGS.with(|w| w.set(w.get() + 1));
            }
        }

        fn flush(&self) {}
    }

    static COUNTER: WarnCounter = WarnCounter;

    fn warnings_during(f: impl FnOnce()) -> usize {
        let _ = log::set_logger(&COUNTER);
        log::set_max_level(log::LevelFilter::Warn);
        WARNINGS.with(|w| w.set(0));
        f();
        WARNINGS.with(|w| w.get())
    }

    #[test]
    fn test_unphysical_config_warns_once() {
        for snapshot in [false, true] {
            let cfg = SimulationConfig {
                error_probability: 1.5,
                snapshot,
                ..seeded(2)
            };
            // p_eff leaves [0, 1] at Λ=1, so the sweep itself fails after the warning.
            let count = warnings_during(|| {
                let _ = build_report(cfg);
            });
            assert_eq!(count, 1, "snapshot={snapshot}");
        }
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let cfg = apply_overrides(
            SimulationConfig::default(),
            SweepOverrides {
                points: Some(5),
                seed: Some(1),
                snapshot: true,
                ..SweepOverrides::default()
            },
        );
        assert_eq!(cfg.points, 5);
        assert_eq!(cfg.seed, Some(1));
        assert!(cfg.snapshot);
        assert_eq!(cfg.error_probability, 0.05);
        assert_eq!(cfg.lambda_max, 10.0);
    }

    #[test]
    fn test_snapshot_flag_does_not_clear_config() {
        let base = SimulationConfig {
            snapshot: true,
            ..SimulationConfig::default()
        };
        let cfg = apply_overrides(base, SweepOverrides::default());
        assert!(cfg.snapshot);
    }

    #[test]
    fn test_report_rows_follow_grid() {
        let report = build_report(seeded(4)).unwrap();
        assert_eq!(report.rows.len(), 4);
        assert_eq!(report.rows[0].lambda, 1.0);
        assert_eq!(report.rows[0].amplitude_re, 1.0);
        assert_eq!(report.rows[3].lambda, 10.0);
        assert!((report.rows[3].amplitude_re - 0.1).abs() < 1e-12);
        // Λ=1: d_eff = 0.9 ≥ 1/4.6 ⇒ collapsed; Λ=10: d_eff = 0.09 ⇒ unitary
        assert_eq!(report.rows[0].collapse, 0.0);
        assert_eq!(report.rows[3].collapse, 1.0);
    }

    #[test]
    fn test_snapshot_and_in_place_reports_match() {
        let in_place = build_report(seeded(6)).unwrap();
        let snapshot = build_report(SimulationConfig {
            snapshot: true,
            ..seeded(6)
        })
        .unwrap();
        assert_eq!(in_place.rows, snapshot.rows);
    }

    #[test]
    fn test_zero_in_grid_is_reported() {
        let cfg = SimulationConfig {
            lambda_min: 0.0,
            ..seeded(3)
        };
        assert!(matches!(
            build_report(cfg),
            Err(ObserverError::ZeroScaleValue { index: 0 })
        ));
    }

    #[test]
    fn test_bad_critical_scale_is_rejected() {
        let cfg = SimulationConfig {
            critical_scale: 0.0,
            ..seeded(3)
        };
        assert!(matches!(
            build_report(cfg),
            Err(ObserverError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_report_serializes_config() {
        let report = build_report(seeded(2)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["config"]["points"], 2);
        assert_eq!(json["rows"].as_array().unwrap().len(), 2);
    }
}
