use console::Style;
use pinpoint_core::export::ExportReport;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    pixel: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            pixel: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

/// Print the final coordinates of a session. `None` means no origin was set.
pub fn print_export_report(report: Option<&ExportReport>) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Pinpoint Results"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    let Some(report) = report else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Origin"),
            s.disabled.apply_to("not set")
        );
        println!();
        return;
    };

    println!(
        "  {:<14}{}",
        s.label.apply_to("Origin"),
        s.pixel.apply_to(report.origin)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale factor"),
        s.value.apply_to(format!("{:.3}", report.scale_factor))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Unit / pixel"),
        s.value.apply_to(format!("{:.3}", report.unit_per_pixel))
    );
    println!();

    if report.points.is_empty() {
        println!(
            "  {:<14}{}",
            s.header.apply_to("Points"),
            s.disabled.apply_to("none")
        );
    } else {
        println!("  {}", s.header.apply_to("Points"));
        for point in &report.points {
            println!(
                "    {:<4}{:<14}{}",
                s.label.apply_to(format!("{}.", point.sequence_index)),
                s.pixel.apply_to(point.pixel),
                s.value.apply_to(point.physical)
            );
        }
    }
    println!();

    // Plain copy for piping into other tools.
    println!("{report}");
}
