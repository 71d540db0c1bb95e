use serde::{Deserialize, Serialize};

use observer_core::{DimensionPoint, ObserverError, StatisticalModel, dimension_profile, linspace};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionReport {
    pub critical_scale: f64,
    /// |d| = 1/Λc, where the collapse predicate flips.
    pub critical_distinguishability: f64,
    pub points: Vec<DimensionPoint>,
}

pub fn build_report(points: usize, critical_scale: f64) -> Result<DimensionReport, ObserverError> {
    let critical_distinguishability = StatisticalModel::critical_threshold(critical_scale)?;
    let grid = linspace(0.0, 1.0, points)?;
    Ok(DimensionReport {
        critical_scale,
        critical_distinguishability,
        points: dimension_profile(&grid),
    })
}

pub fn run(points: usize, critical_scale: f64, output_path: Option<&str>) {
    let report = match build_report(points, critical_scale) {
        Ok(r) => r,
        Err(e) => super::fail(e),
    };

    println!("Cognitive dimension 2/(1+|d|²) over {points} points\n");
    println!("{:>8} {:>10}", "|d|", "dim");
    println!("{}", "-".repeat(20));
    let mut marked = false;
    for p in &report.points {
        let marker = if !marked && p.distinguishability >= report.critical_distinguishability {
            marked = true;
            "  ← |d| = 1/Λc"
        } else {
            ""
        };
        println!("{:>8.4} {:>10.4}{marker}", p.distinguishability, p.dimension);
    }

    if let Some(path) = output_path {
        super::write_json(&report, path, "Dimension curve");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_spans_unit_interval() {
        let report = build_report(11, 4.6).unwrap();
        assert_eq!(report.points.len(), 11);
        assert_eq!(report.points[0].dimension, 2.0);
        assert_eq!(report.points[10].dimension, 1.0);
        assert!((report.critical_distinguishability - 1.0 / 4.6).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_zero_points_and_zero_scale() {
        assert!(build_report(0, 4.6).is_err());
        assert!(build_report(10, 0.0).is_err());
    }
}
