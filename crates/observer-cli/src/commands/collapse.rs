use observer_core::StatisticalModel;

pub fn run(re: f64, im: f64, error_probability: f64, critical_scale: f64, strict: bool) {
    let model = if strict {
        match StatisticalModel::validated(re, im, error_probability) {
            Ok(m) => m,
            Err(e) => super::fail(e),
        }
    } else {
        StatisticalModel::new(re, im, error_probability)
    };

    let threshold = match StatisticalModel::critical_threshold(critical_scale) {
        Ok(t) => t,
        Err(e) => super::fail(e),
    };
    let predicate = match model.collapse_predicate(critical_scale) {
        Ok(p) => p,
        Err(e) => super::fail(e),
    };
    let eff = model.effective_distinguishability();

    println!(
        "Observer d = {} (|d| = {:.4}), p_err = {}",
        model.amplitude(),
        model.amplitude().norm(),
        error_probability
    );
    println!("  effective distinguishability  {eff:.6}");
    println!("  threshold 1/Λc (Λc={critical_scale})   {threshold:.6}");
    println!("  cognitive dimension           {:.4}", model.cognitive_dimension());
    println!(
        "  p(0) ideal / effective        {:.4} / {:.4}",
        model.ideal_outcome_probability(),
        model.effective_outcome_probability()
    );
    println!("\n  → {} ({predicate:.1})", super::verdict(predicate));
    if eff < 0.0 {
        println!("  note: p_err > 0.5 drives the effective distinguishability negative");
    }
}
