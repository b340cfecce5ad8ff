//! Arctic Sea Ice Thickness Chart
//!
//! Shows basin-wide mean sea-ice thickness per freeze season (October
//! through April) as an interactive Vega-Lite line + point chart, one line
//! per season year, with a legend-bound selection that highlights a single
//! year.
//!
//! Data flow:
//! 1. On mount: fetch `processed_files/time_series_data.csv`, validate it
//!    with `asit-series`, and store the raw text in `AppState`. Any fetch
//!    or parse failure becomes a user-visible error box.
//! 2. A window resize subscription bumps `resize_epoch`.
//! 3. The render effect re-runs on data or resize changes: it measures the
//!    container, builds the spec via `asit-vega`, and embeds it through the
//!    vega-embed bridge. Identical data and width produce identical specs.

use asit_chart_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner};
use asit_chart_ui::state::AppState;
use asit_chart_ui::{dom, fetch, js_bridge};
use asit_vega::ChartSize;
use dioxus::prelude::*;

/// Relative path the hosting page serves the processed time series from.
const DATA_URL: &str = "processed_files/time_series_data.csv";

/// DOM id for the vega-embed chart container div.
const CHART_CONTAINER_ID: &str = "ice-thickness-chart";

/// Fixed chart height in pixels.
const CHART_HEIGHT: u32 = 400;

/// Width used when the container cannot be measured (first paint).
const DEFAULT_CHART_WIDTH: u32 = 900;

/// Bounds for the responsive chart width.
const MIN_CHART_WIDTH: u32 = 320;
const MAX_CHART_WIDTH: u32 = 1200;

/// Horizontal room vega-embed needs around the plot area for axis labels
/// and the season-year legend.
const CHART_CHROME_PX: u32 = 60;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("ice-thickness-root"))
        .launch(App);
}

/// Plot-area width for a measured container width.
///
/// The chart tracks the container so resizes are meaningful, clamped so a
/// tiny or enormous viewport still yields a readable chart.
fn chart_width(measured: Option<f64>) -> u32 {
    match measured {
        Some(w) if w >= 1.0 => {
            (w as u32).saturating_sub(CHART_CHROME_PX).clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH)
        }
        _ => DEFAULT_CHART_WIDTH,
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Fetch the series once on mount, subscribe to resize ───
    use_effect(move || {
        dom::subscribe_resize(move || {
            let next = *state.resize_epoch.peek() + 1;
            state.resize_epoch.set(next);
        });

        wasm_bindgen_futures::spawn_local(async move {
            match fetch::fetch_text(DATA_URL).await {
                Ok(csv_text) => match asit_series::parse_series(&csv_text) {
                    Ok(records) => {
                        if let Some(summary) = asit_series::summarize(&records) {
                            log::info!(
                                "loaded {} thickness records, season years {} through {}",
                                summary.records,
                                summary.first_season_year,
                                summary.last_season_year
                            );
                        }
                        for warning in asit_series::consistency_warnings(&records) {
                            log::warn!("{warning}");
                        }
                        state.csv_data.set(Some(csv_text));
                        state.loading.set(false);
                    }
                    Err(e) => {
                        log::error!("failed to parse {DATA_URL}: {e}");
                        state
                            .error_msg
                            .set(Some(format!("Failed to parse sea-ice data: {e}")));
                        state.loading.set(false);
                    }
                },
                Err(e) => {
                    log::error!("failed to fetch {DATA_URL}: {e}");
                    state
                        .error_msg
                        .set(Some(format!("Failed to load sea-ice data: {e}")));
                    state.loading.set(false);
                }
            }
        });
    });

    // ─── Effect 2: Build the spec and render the chart ───
    // Re-runs whenever loading, csv_data, or resize_epoch change. A resize
    // that fires before the fetch resolves finds no data and draws nothing.
    use_effect(move || {
        let loading = (state.loading)();
        let epoch = (state.resize_epoch)();

        let csv_text = match &*state.csv_data.read() {
            Some(text) => text.clone(),
            None => {
                // No data yet: leave the container empty
                js_bridge::destroy_chart(CHART_CONTAINER_ID);
                return;
            }
        };
        if loading {
            return;
        }

        let measured = dom::container_width(CHART_CONTAINER_ID);
        log::debug!("container width: {measured:?} (resize epoch {epoch})");

        let size = ChartSize {
            width: chart_width(measured),
            height: CHART_HEIGHT,
        };
        let spec = asit_vega::thickness_chart_spec(&csv_text, size);
        let spec_json = serde_json::to_string(&spec).unwrap_or_default();
        let options_json = serde_json::to_string(&asit_vega::embed_options()).unwrap_or_default();

        // Initialize the vega-embed glue (one-time) and render
        js_bridge::init_charts();
        js_bridge::render_vega_chart(CHART_CONTAINER_ID, &spec_json, &options_json);
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.error_msg.read().is_none() {
                ChartHeader {
                    title: "Mean Arctic Sea Ice Thickness per Season Year".to_string(),
                    unit_description: "Mean thickness in meters (m), averaged across the Arctic basin".to_string(),
                }

                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    loading: false,
                    min_height: 450,
                }

                p {
                    style: "font-size: 11px; color: #888; text-align: center; margin-top: 4px;",
                    "The freeze season runs October through April. Click a legend entry to highlight a single season year."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_width_unmeasured_falls_back() {
        assert_eq!(chart_width(None), DEFAULT_CHART_WIDTH);
        assert_eq!(chart_width(Some(0.0)), DEFAULT_CHART_WIDTH);
    }

    #[test]
    fn test_chart_width_tracks_container() {
        assert_eq!(chart_width(Some(960.0)), 900);
        assert_eq!(chart_width(Some(700.5)), 640);
    }

    #[test]
    fn test_chart_width_clamped() {
        assert_eq!(chart_width(Some(100.0)), MIN_CHART_WIDTH);
        assert_eq!(chart_width(Some(5000.0)), MAX_CHART_WIDTH);
    }
}
