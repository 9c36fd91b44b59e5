use tonearm::geometry::Geometry;
use tonearm::schemes::Scheme;

/// Render the six-line human-readable report.
pub fn format_geometry(g: &Geometry) -> String {
    let lines = [
        format!("Pivot-to-spindle:  {:.2} mm", g.pivot_to_spindle),
        format!(
            "Null points:       {:.2} mm / {:.2} mm",
            g.inner_null, g.outer_null
        ),
        format!("Effective length:  {:.2} mm", g.effective_length),
        format!("Offset angle:      {:.3} deg", g.offset_angle_deg),
        format!("Overhang:          {:.3} mm", g.overhang),
        format!("Linear offset:     {:.3} mm", g.linear_offset),
    ];
    lines.join("\n")
}

/// One `name: inner mm / outer mm` line per scheme, in listing order.
pub fn scheme_listing(schemes: &[Scheme]) -> String {
    let mut out = String::new();
    for s in schemes {
        out.push_str(&format!(
            "{}: {:.1} mm / {:.1} mm\n",
            s.name, s.inner_null, s.outer_null
        ));
    }
    out
}
