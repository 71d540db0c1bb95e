use serde::{Deserialize, Serialize};

use observer_core::{ObserverError, ResolutionPoint, linspace, resolution_profile};

const EPSILON_MIN: f64 = 0.01;
const EPSILON_MAX: f64 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionReport {
    pub points: Vec<ResolutionPoint>,
}

pub fn build_report(points: usize) -> Result<ResolutionReport, ObserverError> {
    let grid = linspace(EPSILON_MIN, EPSILON_MAX, points)?;
    Ok(ResolutionReport {
        points: resolution_profile(&grid),
    })
}

pub fn run(points: usize, output_path: Option<&str>) {
    let report = match build_report(points) {
        Ok(r) => r,
        Err(e) => super::fail(e),
    };

    println!("Dependence on cognitive resolution ε ∈ [{EPSILON_MIN}, {EPSILON_MAX}]\n");
    println!("{:>8} {:>10} {:>10} {:>10}", "ε", "p(0)", "S", "D");
    println!("{}", "-".repeat(42));
    for p in &report.points {
        println!(
            "{:>8.4} {:>10.4} {:>10.4} {:>10.4}",
            p.epsilon, p.probability, p.entropy, p.trace_distance
        );
    }
    println!("\np(0) = ½ + ½e^(−10ε), S = binary entropy of p(0), D = 1 − e^(−5ε)");

    if let Some(path) = output_path {
        super::write_json(&report, path, "Resolution curves");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_covers_epsilon_range() {
        let report = build_report(50).unwrap();
        assert_eq!(report.points.len(), 50);
        assert_eq!(report.points[0].epsilon, EPSILON_MIN);
        assert_eq!(report.points[49].epsilon, EPSILON_MAX);
        assert!(report.points.iter().all(|p| (0.5..=1.0).contains(&p.probability)));
    }

    #[test]
    fn test_zero_points_rejected() {
        assert!(build_report(0).is_err());
    }
}
