pub mod collapse;
pub mod dimension;
pub mod resolution;
pub mod sweep;

use serde::Serialize;

use observer_core::ObserverError;

/// Serialize `value` as pretty JSON and write it to `path`.
pub fn write_json<T: Serialize>(value: &T, path: &str, label: &str) {
    match serde_json::to_string_pretty(value) {
        Ok(contents) => match std::fs::write(path, contents) {
            Ok(()) => println!("\n{label} written to {path}"),
            Err(e) => {
                eprintln!("Failed to write {path}: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Failed to serialize {label}: {e}");
            std::process::exit(1);
        }
    }
}

/// Print a core error and exit with status 1.
pub fn fail(err: ObserverError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}

/// Collapse predicate as a short label.
pub fn verdict(predicate: f64) -> &'static str {
    if predicate == 1.0 {
        "unitary"
    } else {
        "collapsed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use observer_core::SweepResult;

    #[test]
    fn test_verdict_labels() {
        assert_eq!(verdict(1.0), "unitary");
        assert_eq!(verdict(0.0), "collapsed");
    }

    #[test]
    fn test_write_json_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        let path_str = path.to_str().unwrap();
        let value = SweepResult {
            mean: 0.5,
            standard_error: 0.01,
        };
        write_json(&value, path_str, "Result");

        let raw = std::fs::read_to_string(&path).unwrap();
        let back: SweepResult = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, value);
    }
}
