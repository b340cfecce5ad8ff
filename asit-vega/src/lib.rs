//! Vega-Lite specification construction for the sea-ice thickness chart.
//!
//! The chart is a layered line + point composition over the monthly mean
//! thickness series, with one line per season year and a legend-bound
//! selection that dims every other year. Construction is pure: the spec is
//! a `serde_json::Value` built from the raw CSV text and a chart size, so
//! the whole shape is unit-testable without a browser.

use asit_series::SEASON_MONTHS;
use serde_json::{json, Value};

/// Vega-Lite schema the spec is written against.
pub const SCHEMA_URL: &str = "https://vega.github.io/schema/vega-lite/v5.6.1.json";

/// Fixed y-axis domain in meters. Matches the 0-3.5 m color ramp used for
/// the thickness maps the series is derived from.
pub const Y_DOMAIN_METERS: [f64; 2] = [0.0, 3.5];

/// Color scheme for the per-season-year lines.
pub const COLOR_SCHEME: &str = "tealblues";

/// Name of the legend-bound point selection parameter.
pub const YEAR_SELECT_PARAM: &str = "year_select";

/// View name of the line layer; the selection parameter is scoped to it.
pub const LINE_VIEW_NAME: &str = "thickness_lines";

/// Title shown above both layers.
pub const CHART_TITLE: &str = "Mean sea ice thickness per year";

const X_TITLE: &str = "Time Period";
const Y_TITLE: &str = "Mean thickness (m)";
const LEGEND_TITLE: &str = "Season year";

/// Overall chart dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 900,
            height: 400,
        }
    }
}

/// Build the full two-layer thickness chart spec.
///
/// `csv_text` is passed through verbatim as the inline data block; Vega-Lite
/// does the CSV parsing on its side. Identical inputs produce structurally
/// identical specs.
pub fn thickness_chart_spec(csv_text: &str, size: ChartSize) -> Value {
    json!({
        "$schema": SCHEMA_URL,
        "config": {"view": {"continuousWidth": 300, "continuousHeight": 300}},
        "width": size.width,
        "height": size.height,
        "data": {"format": {"type": "csv"}, "values": csv_text},
        "layer": [line_layer(), point_layer()],
        "params": [{
            "name": YEAR_SELECT_PARAM,
            "select": {"type": "point", "fields": ["season_year"]},
            "bind": "legend",
            "views": [LINE_VIEW_NAME]
        }]
    })
}

/// Embed options handed to vega-embed alongside the spec: quartz theme,
/// no default style injection, and export as the only menu action.
pub fn embed_options() -> Value {
    json!({
        "theme": "quartz",
        "defaultStyle": false,
        "actions": {"export": true, "source": false, "compiled": false, "editor": false}
    })
}

/// Opacity encoding shared by both layers: full opacity for season years
/// matched by the selection, 0.05 for the rest.
fn opacity_encoding() -> Value {
    json!({
        "condition": {"param": YEAR_SELECT_PARAM, "value": 1},
        "value": 0.05
    })
}

fn line_layer() -> Value {
    json!({
        "name": LINE_VIEW_NAME,
        "title": CHART_TITLE,
        "mark": {"type": "line"},
        "encoding": {
            "color": {
                "field": "season_year",
                "legend": {"title": LEGEND_TITLE},
                "type": "nominal",
                "scale": {"scheme": COLOR_SCHEME}
            },
            "opacity": opacity_encoding(),
            "x": {
                "field": "month",
                "scale": {"domain": SEASON_MONTHS},
                "title": X_TITLE,
                "type": "nominal",
                "sort": {"field": "season_month"}
            },
            "y": {
                "field": "thickness",
                "title": Y_TITLE,
                "type": "quantitative",
                "scale": {"domain": Y_DOMAIN_METERS}
            }
        }
    })
}

fn point_layer() -> Value {
    json!({
        "title": CHART_TITLE,
        "mark": {"type": "point"},
        "encoding": {
            "color": {
                "field": "season_year",
                "legend": {"title": LEGEND_TITLE},
                "type": "nominal"
            },
            "opacity": opacity_encoding(),
            "tooltip": [
                {"field": "thickness", "type": "quantitative"},
                {"field": "year", "type": "quantitative"},
                {"field": "month", "type": "nominal"}
            ],
            "x": {
                "field": "month",
                "scale": {"domain": SEASON_MONTHS},
                "title": X_TITLE,
                "type": "nominal"
            },
            "y": {
                "field": "thickness",
                "title": Y_TITLE,
                "type": "quantitative"
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "season_year,month,season_month,thickness,year\n\
                       1991,October,0,1.81,1991\n";

    #[test]
    fn test_month_domain_in_both_layers() {
        let spec = thickness_chart_spec(CSV, ChartSize::default());
        let expected = json!([
            "October", "November", "December", "January",
            "February", "March", "April"
        ]);
        for layer in spec["layer"].as_array().unwrap() {
            assert_eq!(layer["encoding"]["x"]["scale"]["domain"], expected);
        }
    }

    #[test]
    fn test_line_layer_y_domain_fixed() {
        let spec = thickness_chart_spec(CSV, ChartSize::default());
        assert_eq!(
            spec["layer"][0]["encoding"]["y"]["scale"]["domain"],
            json!([0.0, 3.5])
        );
        // The point layer leaves the y scale free
        assert!(spec["layer"][1]["encoding"]["y"]["scale"].is_null());
    }

    #[test]
    fn test_two_layers_line_then_point() {
        let spec = thickness_chart_spec(CSV, ChartSize::default());
        let layers = spec["layer"].as_array().unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0]["mark"]["type"], "line");
        assert_eq!(layers[1]["mark"]["type"], "point");
    }

    #[test]
    fn test_selection_bound_to_legend() {
        let spec = thickness_chart_spec(CSV, ChartSize::default());
        let param = &spec["params"][0];
        assert_eq!(param["name"], YEAR_SELECT_PARAM);
        assert_eq!(param["bind"], "legend");
        assert_eq!(param["select"]["fields"], json!(["season_year"]));
        assert_eq!(param["views"], json!([LINE_VIEW_NAME]));
        assert_eq!(spec["layer"][0]["name"], LINE_VIEW_NAME);
    }

    #[test]
    fn test_data_block_is_inline_csv() {
        let spec = thickness_chart_spec(CSV, ChartSize::default());
        assert_eq!(spec["data"]["format"]["type"], "csv");
        assert_eq!(spec["data"]["values"], CSV);
    }

    #[test]
    fn test_size_flows_into_spec() {
        let size = ChartSize {
            width: 640,
            height: 400,
        };
        let spec = thickness_chart_spec(CSV, size);
        assert_eq!(spec["width"], 640);
        assert_eq!(spec["height"], 400);
    }

    #[test]
    fn test_spec_is_idempotent() {
        let a = thickness_chart_spec(CSV, ChartSize::default());
        let b = thickness_chart_spec(CSV, ChartSize::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_tooltip_fields() {
        let spec = thickness_chart_spec(CSV, ChartSize::default());
        let tooltips = spec["layer"][1]["encoding"]["tooltip"].as_array().unwrap();
        let fields: Vec<&str> = tooltips
            .iter()
            .map(|t| t["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, ["thickness", "year", "month"]);
        // Line layer has no tooltips
        assert!(spec["layer"][0]["encoding"]["tooltip"].is_null());
    }

    #[test]
    fn test_embed_options_export_only() {
        let options = embed_options();
        assert_eq!(options["theme"], "quartz");
        assert_eq!(options["defaultStyle"], false);
        assert_eq!(options["actions"]["export"], true);
        assert_eq!(options["actions"]["source"], false);
        assert_eq!(options["actions"]["compiled"], false);
        assert_eq!(options["actions"]["editor"], false);
    }
}
