use crate::types::SmoothingReport;

pub fn print_elevation_report(report: &SmoothingReport) {
    println!("--- Elevation Report ---");
    println!(
        "Punkter: {} ({} forkastet)",
        report.total_points, report.rejected_points
    );
    println!(
        "Rå:      snitt {:.2} m, std {:.2} m, spenn {:.2} m",
        report.raw.mean_m, report.raw.std_dev_m, report.raw.range_m
    );
    println!(
        "Glattet: snitt {:.2} m, std {:.2} m, spenn {:.2} m",
        report.smoothed.mean_m, report.smoothed.std_dev_m, report.smoothed.range_m
    );
    println!(
        "Støyreduksjon: {:.2} m std ({:.1} %), {:.2} m spenn ({:.1} %)",
        report.std_dev_reduction_m,
        report.std_dev_reduction_pct,
        report.range_reduction_m,
        report.range_reduction_pct
    );
}
