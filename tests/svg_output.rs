//! Rendered SVG output for plot areas

use chart_plot::{plot_chart, BaseChart, Margin, PlotArea, PlotOptions, SvgConfig};

#[test]
fn test_pretty_chart_with_plot_group() {
    let mut plot = plot_chart(500.0, 300.0, &PlotOptions::default()).unwrap();
    plot.new_plot_group(Some("series"), None);

    let svg = plot.render(&SvgConfig::new().with_standalone(false));
    insta::assert_snapshot!(svg, @r###"
<svg xmlns="http://www.w3.org/2000/svg" width="500" height="300">
  <g transform="translate(20,10)" width="470" height="280" class="plot">
    <g class="plotGroup series"/>
  </g>
</svg>
"###);
}

#[test]
fn test_compact_chart_after_resize() {
    let mut plot = PlotArea::with_margins(BaseChart::new(200.0, 100.0), Margin::uniform(0.0));
    plot.host_mut().set_size(250.5, 120.0);

    let svg = plot.render(
        &SvgConfig::new()
            .with_standalone(false)
            .with_pretty_print(false),
    );
    assert_eq!(
        svg,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="250.5" height="120">"#,
            r#"<g transform="translate(0,0)" width="250.5" height="120" class="plot"/>"#,
            "</svg>"
        )
    );
}

#[test]
fn test_standalone_output_has_declaration() {
    let plot = plot_chart(100.0, 100.0, &PlotOptions::default()).unwrap();
    let svg = plot.render(&SvgConfig::default());
    assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(svg.ends_with("</svg>"));
}
